//! Conversions from external infrastructure errors into connector errors.
//!
//! Configuration and file problems become [`ResponsysError`]s. Failures of
//! the HTTP exchange become [`Fault`]s so the client classifies them the
//! same way as faults raised by the remote service.

use reqwest::Error as HttpError;
use responsys_domain::{Fault, ResponsysError};

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the connector error.
#[derive(Debug)]
pub struct InfraError(pub ResponsysError);

impl From<InfraError> for ResponsysError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<ResponsysError> for InfraError {
    fn from(value: ResponsysError) -> Self {
        Self(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoResponsysError {
    fn into_responsys(self) -> ResponsysError;
}

/// Conversion of transport-level failures into a [`Fault`].
pub trait IntoFault {
    fn into_fault(self) -> Fault;
}

/* -------------------------------------------------------------------------- */
/* config file errors → ResponsysError */
/* -------------------------------------------------------------------------- */

impl IntoResponsysError for toml::de::Error {
    fn into_responsys(self) -> ResponsysError {
        ResponsysError::Config(format!("Invalid TOML format: {}", self.message()))
    }
}

impl From<toml::de::Error> for InfraError {
    fn from(value: toml::de::Error) -> Self {
        Self(value.into_responsys())
    }
}

impl IntoResponsysError for serde_json::Error {
    fn into_responsys(self) -> ResponsysError {
        ResponsysError::Config(format!("Invalid JSON format: {self}"))
    }
}

impl From<serde_json::Error> for InfraError {
    fn from(value: serde_json::Error) -> Self {
        Self(value.into_responsys())
    }
}

impl IntoResponsysError for std::io::Error {
    fn into_responsys(self) -> ResponsysError {
        ResponsysError::Config(format!("Failed to read config file: {self}"))
    }
}

impl From<std::io::Error> for InfraError {
    fn from(value: std::io::Error) -> Self {
        Self(value.into_responsys())
    }
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → Fault / ResponsysError */
/* -------------------------------------------------------------------------- */

impl IntoFault for HttpError {
    fn into_fault(self) -> Fault {
        if self.is_timeout() {
            return Fault::http("HTTP request timed out");
        }

        if self.is_connect() {
            return Fault::http("HTTP connection failure");
        }

        if let Some(status) = self.status() {
            return Fault::http(format!(
                "HTTP {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("unknown status")
            ));
        }

        Fault::http(self.to_string())
    }
}

impl IntoResponsysError for HttpError {
    fn into_responsys(self) -> ResponsysError {
        ResponsysError::Config(format!("Failed to build HTTP client: {self}"))
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        Self(value.into_responsys())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
