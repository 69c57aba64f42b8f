//! Storefront contact synchronisation
//!
//! Maps local customer attributes onto member-list columns and pushes them
//! to Responsys, raising the welcome event for newly signed-up contacts.

pub mod mapper;
pub mod service;

pub use mapper::{ContactMapper, LocalContact};
pub use service::{ContactSyncService, SyncReport};
