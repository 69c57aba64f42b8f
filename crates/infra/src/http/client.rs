use std::time::Duration;

use reqwest::blocking::{Client as ReqwestClient, RequestBuilder, Response};
use reqwest::Method;
use responsys_domain::constants::DEFAULT_TIMEOUT_SECS;
use responsys_domain::ResponsysError;
use tracing::debug;

use crate::errors::InfraError;

/// Blocking HTTP client with timeout support.
///
/// Requests are sent once. Remote operations are not idempotent (merges,
/// triggers), so failures go back to the caller instead of being retried.
#[derive(Clone, Debug)]
pub struct HttpClient {
    client: ReqwestClient,
}

impl HttpClient {
    /// Start building a new HTTP client.
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::default()
    }

    /// Create a request builder using the underlying reqwest client.
    pub fn request<U>(&self, method: Method, url: U) -> RequestBuilder
    where
        U: reqwest::IntoUrl,
    {
        self.client.request(method, url)
    }

    /// Execute the provided request builder.
    pub fn send(&self, builder: RequestBuilder) -> Result<Response, reqwest::Error> {
        let request = builder.build()?;
        let method = request.method().clone();
        let url = request.url().clone();
        debug!(%method, %url, "sending HTTP request");

        match self.client.execute(request) {
            Ok(response) => {
                debug!(%method, %url, status = %response.status(), "received HTTP response");
                Ok(response)
            }
            Err(err) => {
                debug!(%method, %url, error = %err, "HTTP request failed");
                Err(err)
            }
        }
    }
}

/// Builder for [`HttpClient`].
#[derive(Debug)]
pub struct HttpClientBuilder {
    timeout: Duration,
    user_agent: Option<String>,
}

impl Default for HttpClientBuilder {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: None,
        }
    }
}

impl HttpClientBuilder {
    /// Connect and read timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// `User-Agent` sent with every request.
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    pub fn build(self) -> Result<HttpClient, ResponsysError> {
        let mut builder = ReqwestClient::builder()
            .timeout(self.timeout)
            .connect_timeout(self.timeout)
            .no_proxy();

        if let Some(agent) = self.user_agent {
            builder = builder.user_agent(agent);
        }

        let client = builder.build().map_err(|err| {
            let infra: InfraError = err.into();
            ResponsysError::from(infra)
        })?;

        Ok(HttpClient { client })
    }
}
