//! SOAP 1.1 adapter for the Responsys Interact web service
//!
//! - [`envelope`] writes request envelopes from serialized request bodies
//! - [`parse`] reads response envelopes back into value trees or faults
//! - [`transport`] sends them over HTTP and keeps the session header and
//!   session cookie

pub mod envelope;
pub mod parse;
pub mod transport;

use responsys_domain::Fault;
use thiserror::Error;

use crate::errors::IntoFault;

pub use transport::{build_client, SoapTransport};

pub(crate) const SOAP_ENV_NAMESPACE: &str = "http://schemas.xmlsoap.org/soap/envelope/";
pub(crate) const XSI_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema-instance";

/// Envelope encoding or decoding failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnvelopeError {
    #[error("malformed XML: {0}")]
    Xml(String),

    #[error("SOAP envelope has no Body element")]
    MissingBody,

    #[error("request body must be an object, got {0}")]
    NotAnObject(String),
}

impl IntoFault for EnvelopeError {
    fn into_fault(self) -> Fault {
        Fault::http(format!("Invalid SOAP message: {self}"))
    }
}
