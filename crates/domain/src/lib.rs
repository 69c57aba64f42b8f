//! # Responsys Domain
//!
//! Domain types for the Responsys Interact connector.
//!
//! This crate contains:
//! - Records, locators, merge rules and the wire-table shapes
//! - Typed request and response payloads for every remote operation
//! - The connector error type and Result alias
//! - Configuration structures and protocol constants
//!
//! ## Architecture
//! - No dependencies on other connector crates
//! - No I/O

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
