//! Shared helpers for infra integration tests
//!
//! The blocking HTTP client must not run inside a Tokio runtime, so the
//! mock server is started and configured through `block_on` and the
//! connector is driven from the test thread.

#![allow(dead_code)]

use std::time::Duration;

use responsys_core::ResponsysClient;
use responsys_domain::Credentials;
use responsys_infra::SoapTransport;
use tokio::runtime::Runtime;
use wiremock::MockServer;

pub const SESSION_ID: &str = "session-abc";
pub const SESSION_COOKIE_VALUE: &str = "node1.xyz";

pub struct Harness {
    pub runtime: Runtime,
    pub server: MockServer,
}

impl Harness {
    pub fn start() -> Self {
        let runtime = Runtime::new().unwrap();
        let server = runtime.block_on(MockServer::start());
        Self { runtime, server }
    }

    pub fn endpoint(&self) -> String {
        format!("{}/webservices/services/ResponsysWSService", self.server.uri())
    }

    pub fn transport(&self) -> SoapTransport {
        SoapTransport::new(&self.endpoint(), Duration::from_secs(5)).unwrap()
    }

    pub fn client(&self) -> ResponsysClient<SoapTransport> {
        ResponsysClient::new(Credentials::new("api_user", "s3cret"), self.transport())
    }

    /// Raw bodies of every request the server has seen, in arrival order.
    pub fn request_bodies(&self) -> Vec<String> {
        self.runtime
            .block_on(self.server.received_requests())
            .unwrap_or_default()
            .into_iter()
            .map(|request| String::from_utf8_lossy(&request.body).into_owned())
            .collect()
    }

    pub fn cookie_headers(&self) -> Vec<Option<String>> {
        self.runtime
            .block_on(self.server.received_requests())
            .unwrap_or_default()
            .into_iter()
            .map(|request| {
                request
                    .headers
                    .get("cookie")
                    .and_then(|value| value.to_str().ok())
                    .map(str::to_string)
            })
            .collect()
    }
}

pub fn envelope(body: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<soapenv:Envelope xmlns:soapenv="http://schemas.xmlsoap.org/soap/envelope/"><soapenv:Body>{body}</soapenv:Body></soapenv:Envelope>"#
    )
}

pub fn login_response() -> String {
    envelope(&format!(
        r#"<ns1:loginResponse xmlns:ns1="urn:ws.rsys.com"><ns1:result><ns1:sessionId>{SESSION_ID}</ns1:sessionId></ns1:result></ns1:loginResponse>"#
    ))
}

pub fn boolean_response(operation: &str, value: bool) -> String {
    envelope(&format!(
        r#"<ns1:{operation}Response xmlns:ns1="urn:ws.rsys.com"><ns1:result>{value}</ns1:result></ns1:{operation}Response>"#
    ))
}

pub fn fault_response(fault_type: &str, code: &str, message: &str) -> String {
    envelope(&format!(
        r#"<soapenv:Fault><faultcode>soapenv:Server</faultcode><faultstring>{fault_type}</faultstring><detail><ns1:{fault_type} xmlns:ns1="urn:ws.rsys.com"><ns1:exceptionCode>{code}</ns1:exceptionCode><ns1:exceptionMessage>{message}</ns1:exceptionMessage></ns1:{fault_type}></detail></soapenv:Fault>"#
    ))
}
