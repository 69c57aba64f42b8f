//! # Responsys Core
//!
//! Client logic for the Responsys Interact web service - no HTTP or XML.
//!
//! This crate contains:
//! - The session-managing client and its operations
//! - The record codec and fault classifier
//! - Contact mapping and the contact sync service
//! - The transport port the infrastructure adapter implements
//!
//! ## Architecture Principles
//! - Only depends on `responsys-domain`
//! - All remote I/O via the [`Transport`] trait
//! - Blocking, single-session clients; one client per worker

pub mod client;
pub mod codec;
pub mod faults;
pub mod sync;

// Infrastructure ports
pub mod transport_ports;

pub use client::{default_field_list, ResponsysClient};
pub use faults::classify;
pub use sync::{ContactMapper, ContactSyncService, LocalContact, SyncReport};
pub use transport_ports::Transport;
