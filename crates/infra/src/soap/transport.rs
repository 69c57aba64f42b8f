//! HTTP transport for SOAP calls

use std::time::Duration;

use reqwest::header::{HeaderMap, CONTENT_TYPE, COOKIE, SET_COOKIE};
use reqwest::Method;
use responsys_core::{ResponsysClient, Transport};
use responsys_domain::constants::SESSION_COOKIE;
use responsys_domain::{Fault, ResponsysConfig, ResponsysError, Result};
use serde_json::Value;
use tracing::{debug, instrument};
use url::Url;

use super::envelope::build_request;
use super::parse::{parse_response, SoapBody};
use crate::errors::IntoFault;
use crate::http::HttpClient;

/// `User-Agent` the connector identifies itself with.
pub const USER_AGENT: &str = concat!("responsys-connector/", env!("CARGO_PKG_VERSION"));

/// [`Transport`] that speaks SOAP 1.1 over HTTPS.
///
/// Holds the session id (sent in the `SessionHeader`) and the `JSESSIONID`
/// cookie the service uses to pin the session to one node.
#[derive(Debug)]
pub struct SoapTransport {
    http: HttpClient,
    endpoint: Url,
    session_id: Option<String>,
    session_cookie: Option<String>,
}

impl SoapTransport {
    /// Transport for `endpoint` with the given connect/read timeout.
    ///
    /// # Errors
    /// `Config` when the endpoint is not a valid URL or the HTTP client
    /// cannot be built.
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self> {
        let endpoint = Url::parse(endpoint)
            .map_err(|e| ResponsysError::Config(format!("Invalid endpoint URL '{endpoint}': {e}")))?;
        let http = HttpClient::builder().timeout(timeout).user_agent(USER_AGENT).build()?;

        Ok(Self { http, endpoint, session_id: None, session_cookie: None })
    }

    pub fn from_config(config: &ResponsysConfig) -> Result<Self> {
        Self::new(&config.endpoint, Duration::from_secs(config.timeout_secs))
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn capture_session_cookie(&mut self, headers: &HeaderMap) {
        let cookie = headers
            .get_all(SET_COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .filter_map(|value| value.split(';').next())
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, _)| *name == SESSION_COOKIE)
            .map(|(_, value)| value.to_string());

        if let Some(cookie) = cookie {
            debug!("captured session cookie");
            self.session_cookie = Some(cookie);
        }
    }
}

impl Transport for SoapTransport {
    #[instrument(level = "debug", skip(self, payload))]
    fn invoke(&mut self, operation: &str, payload: &Value) -> std::result::Result<Value, Fault> {
        let body = build_request(operation, payload, self.session_id.as_deref())
            .map_err(IntoFault::into_fault)?;

        let mut request = self
            .http
            .request(Method::POST, self.endpoint.clone())
            .header(CONTENT_TYPE, "text/xml; charset=utf-8")
            .header("SOAPAction", "\"\"")
            .body(body);
        if let Some(cookie) = &self.session_cookie {
            request = request.header(COOKIE, format!("{SESSION_COOKIE}={cookie}"));
        }

        let response = self.http.send(request).map_err(IntoFault::into_fault)?;
        let status = response.status();
        self.capture_session_cookie(response.headers());
        let text = response.text().map_err(IntoFault::into_fault)?;

        // Faults arrive with status 500, so the body is read before the
        // status is judged.
        match (parse_response(&text), status.is_success()) {
            (Ok(SoapBody::Fault(fault)), _) => Err(fault),
            (Ok(SoapBody::Response(value)), true) => Ok(value),
            (Err(err), true) => Err(err.into_fault()),
            (_, false) => Err(Fault::http(format!(
                "HTTP {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("unknown status")
            ))),
        }
    }

    fn attach_session(&mut self, session_id: &str) {
        self.session_id = Some(session_id.to_string());
    }

    fn detach_session(&mut self) {
        self.session_id = None;
        self.session_cookie = None;
    }
}

/// Client over a [`SoapTransport`] configured from `config`. Logs in lazily.
///
/// # Errors
/// `Disabled` when the integration is switched off; `Config` for invalid
/// settings.
pub fn build_client(config: &ResponsysConfig) -> Result<ResponsysClient<SoapTransport>> {
    if !config.enabled {
        return Err(ResponsysError::Disabled);
    }
    config.validate()?;

    let transport = SoapTransport::from_config(config)?;
    Ok(ResponsysClient::new(config.credentials.clone(), transport))
}
