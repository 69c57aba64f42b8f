//! Domain types and models

pub mod locator;
pub mod merge;
pub mod record;
pub mod requests;
pub mod responses;
pub mod wire;

pub use locator::{CharacterEncoding, InteractObject, Locator, QueryColumn, RecipientIdType};
pub use merge::{MergeRule, MergeRuleWire, UpdateOnMatch};
pub use record::Record;
pub use requests::{OptionalData, Recipient, RecipientData};
pub use responses::{
    DeleteResult, FolderEntry, LoginResult, MergeResult, RecipientResult, TriggerResult,
};
pub use wire::{ClassifiedFault, Fault, OneOrMany, RecordData, WireRecord};
