//! HTTP transport for the Airtable API.
//!
//! Everything above this module speaks [`Transport`]: one authenticated
//! request in, one parsed JSON document out, a typed [`Error`] on any
//! non-2xx status. Timeouts, proxies and TLS are the transport's concern
//! and are configured when building the [`RestTransport`].

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Client, ClientBuilder, Method};
use serde_json::Value;

use crate::error::Result;
use crate::{Error, ErrorKind};

/// Reference to a shared [`Transport`].
pub type TransportRef = Arc<dyn Transport>;

/// A single-request HTTP capability.
///
/// The library never coordinates across requests, so this is the whole
/// surface: callers get back the parsed JSON body on 2xx and an
/// [`ErrorKind::RequestFailed`] error carrying the status code otherwise.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform one authenticated request against `url`.
    ///
    /// `body`, when present, is sent as a JSON request body. An empty 2xx
    /// response body is returned as [`Value::Null`].
    async fn request(&self, method: Method, url: &str, body: Option<&Value>) -> Result<Value>;
}

/// [`Transport`] implementation backed by a [`reqwest::Client`].
pub struct RestTransport {
    client: Client,
    api_key: String,
}

impl RestTransport {
    /// Creates a transport authenticating with the given personal access
    /// token or API key.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Ok(Self {
            client: ClientBuilder::new().build()?,
            api_key: api_key.into(),
        })
    }
}

#[async_trait]
impl Transport for RestTransport {
    async fn request(&self, method: Method, url: &str, body: Option<&Value>) -> Result<Value> {
        log::debug!("Executing request: {method} {url}");

        let mut builder = self
            .client
            .request(method.clone(), url)
            .bearer_auth(&self.api_key);
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let resp = builder.send().await?;
        let status = resp.status();

        if status.is_success() {
            let text = resp.text().await?;
            log::debug!("Response text is: {text}");
            if text.trim().is_empty() {
                return Ok(Value::Null);
            }
            Ok(serde_json::from_str(&text)?)
        } else {
            let text = resp.text().await?;
            Err(Error::new(
                ErrorKind::RequestFailed,
                format!("http request failed, status code: {status}, message: {text}"),
            )
            .with_status(status.as_u16())
            .with_context("url", url)
            .with_context("method", method.to_string()))
        }
    }
}
