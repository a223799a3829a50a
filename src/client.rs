//! Sequential model fallback client

use crate::config::{ClientConfig, GenerationConfig};
use crate::error::{Error, Result};
use crate::models::FALLBACK_MODELS;
use crate::transport::{GenerateTransport, HttpTransport};
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Text-generation client that retries the same request against an ordered
/// list of candidate models until one returns usable text.
///
/// Attempts are strictly sequential: the next model is contacted only after
/// the current attempt has fully resolved. All state for one call (the
/// attempt index and the failure log) is local to that call, so concurrent
/// `generate` invocations on a shared client do not interfere.
pub struct FallbackClient {
    models: Vec<String>,
    transport: Arc<dyn GenerateTransport>,
}

impl FallbackClient {
    /// Create a client over the default candidate list with an HTTP transport
    pub fn new(config: ClientConfig) -> Self {
        Self::with_transport(
            FALLBACK_MODELS.iter().map(|m| m.to_string()).collect(),
            Arc::new(HttpTransport::new(config)),
        )
    }

    /// Create a client resolving the API key from the environment once,
    /// at construction
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(ClientConfig::from_env()?))
    }

    /// Create a client with a custom candidate list and transport
    pub fn with_transport(models: Vec<String>, transport: Arc<dyn GenerateTransport>) -> Self {
        Self { models, transport }
    }

    /// The candidate models, in fallback priority order
    pub fn models(&self) -> &[String] {
        &self.models
    }

    /// Generate text for `prompt`, attempting each candidate model in order.
    ///
    /// Returns the first non-empty generated text; models after the
    /// succeeding one are never contacted. A transport failure, a
    /// non-success status, and a response without text are all treated the
    /// same way: the attempt is logged and the next model is tried. Once the
    /// list is exhausted the call fails with [`Error::AllModelsFailed`]
    /// carrying one `"<model>: <reason>"` entry per attempt, in order.
    pub async fn generate(&self, prompt: &str, config: &GenerationConfig) -> Result<String> {
        if prompt.is_empty() {
            return Err(Error::invalid_input("prompt must not be empty"));
        }

        // One body shared by every attempt; only the model in the URL changes.
        let body = build_request_body(prompt, config);
        let mut failures: Vec<String> = Vec::with_capacity(self.models.len());

        for (attempt, model) in self.models.iter().enumerate() {
            debug!(model = %model, attempt, "sending generateContent request");

            match self
                .transport
                .generate_content(model, &body, config.timeout)
                .await
            {
                Ok(response) => match extract_text(&response) {
                    Some(text) => {
                        if attempt > 0 {
                            info!(model = %model, failed_attempts = attempt, "fallback model succeeded");
                        }
                        return Ok(text);
                    }
                    None => {
                        warn!(model = %model, "response carried no text, trying next model");
                        failures.push(format!("{model}: empty response"));
                    }
                },
                Err(error) => {
                    let reason = error.attempt_reason();
                    warn!(model = %model, reason = %reason, "attempt failed, trying next model");
                    failures.push(format!("{model}: {reason}"));
                }
            }
        }

        Err(Error::all_models_failed(&failures))
    }
}

/// Build the `generateContent` request body shared by every attempt
fn build_request_body(prompt: &str, config: &GenerationConfig) -> Value {
    json!({
        "contents": [{
            "parts": [{ "text": prompt }]
        }],
        "generationConfig": {
            "temperature": config.temperature,
            "maxOutputTokens": config.max_output_tokens,
        }
    })
}

/// Walk `candidates[0].content.parts[0].text`.
///
/// Any missing link in the chain, or an empty text field, means "no text";
/// a partial response shape is never an error here.
fn extract_text(response: &Value) -> Option<String> {
    let text = response["candidates"][0]["content"]["parts"][0]["text"].as_str()?;
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}
