//! # Responsys Infrastructure
//!
//! Infrastructure implementations of core ports.
//!
//! This crate contains:
//! - The SOAP-over-HTTPS transport
//! - The blocking HTTP client it uses
//! - Configuration loading (environment, JSON, TOML)
//! - Logging bootstrap
//!
//! ## Architecture
//! - Implements traits defined in `responsys-core`
//! - Contains all "impure" code (network, files, global subscriber)

pub mod config;
pub mod errors;
pub mod http;
pub mod logging;
pub mod soap;

// Re-export commonly used items
pub use errors::InfraError;
pub use http::HttpClient;
pub use soap::{build_client, SoapTransport};
