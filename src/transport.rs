//! HTTP transport for the Gemini `generateContent` endpoint

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Capability to issue one generation request.
///
/// `Ok` is the parsed JSON body of a successful response; `Err` carries the
/// most specific failure reason available. Injecting this seam lets tests
/// script attempt outcomes without a network dependency.
#[async_trait]
pub trait GenerateTransport: Send + Sync {
    /// Send one `generateContent` request for `model` with the given body
    /// and per-request timeout
    async fn generate_content(
        &self,
        model: &str,
        body: &Value,
        timeout: Duration,
    ) -> Result<Value>;
}

/// Production transport over reqwest
pub struct HttpTransport {
    config: ClientConfig,
    http_client: Client,
}

impl HttpTransport {
    /// Create a new HTTP transport
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            http_client: Client::new(),
        }
    }

    fn request_url(&self, model: &str) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.config.base_url, model, self.config.api_key
        )
    }
}

#[async_trait]
impl GenerateTransport for HttpTransport {
    async fn generate_content(
        &self,
        model: &str,
        body: &Value,
        timeout: Duration,
    ) -> Result<Value> {
        debug!(model = %model, key = %self.config.masked_key(), "POST generateContent");

        let response = self
            .http_client
            .post(self.request_url(model))
            .json(body)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| classify_send_error(e, timeout))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(remote_error(status, &error_text));
        }

        response
            .json()
            .await
            .map_err(|e| Error::json(format!("failed to parse response body: {e}")))
    }
}

fn classify_send_error(error: reqwest::Error, timeout: Duration) -> Error {
    if error.is_timeout() {
        Error::timeout(timeout.as_millis() as u64)
    } else {
        Error::http(error.to_string())
    }
}

/// Mine a non-success body for the remote `error.message`, falling back to
/// the status line when the body carries nothing usable.
fn remote_error(status: StatusCode, body: &str) -> Error {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        if let Some(message) = value["error"]["message"].as_str() {
            if !message.trim().is_empty() {
                return Error::api(message);
            }
        }
    }

    let text = body.trim();
    if text.is_empty() {
        Error::api(format!("HTTP {status}"))
    } else {
        Error::api(format!("HTTP {status}: {text}"))
    }
}
