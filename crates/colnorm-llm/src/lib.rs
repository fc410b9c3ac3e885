//! OpenAI-compatible chat-completions client.
//!
//! Implements [`TextGenerator`] over a blocking HTTP call. The pipeline is
//! synchronous request-per-invocation, so a blocking client with a request
//! timeout is all that is needed; cancellation happens by timeout.

use std::time::Duration;

use serde_json::{Value, json};
use tracing::debug;

use colnorm_model::{NormalizeError, Result, TextGenerator};

/// Default chat-completions endpoint base.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Default model for mapping requests.
pub const DEFAULT_MODEL: &str = "gpt-4o";

/// Explicit service configuration.
///
/// Always constructed by the caller and injected; nothing in here is read
/// from ambient process state, so tests can swap in stub generators and
/// the CLI decides where the key comes from.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    /// Decoding temperature. Mapping requests pin this to 0.0 so the
    /// reply is deterministic for a given header list.
    pub temperature: f64,
    pub timeout: Duration,
}

impl LlmConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: 0.0,
            timeout: Duration::from_secs(60),
        }
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

/// Blocking chat-completions client.
pub struct OpenAiClient {
    client: reqwest::blocking::Client,
    config: LlmConfig,
}

impl OpenAiClient {
    /// Builds a client with the configured request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`NormalizeError::ServiceCall`] if the underlying HTTP
    /// client cannot be constructed.
    pub fn new(config: LlmConfig) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| NormalizeError::ServiceCall(format!("client setup failed: {e}")))?;
        Ok(Self { client, config })
    }

    fn completions_url(&self) -> String {
        let base = self.config.base_url.trim_end_matches('/');
        format!("{base}/chat/completions")
    }
}

impl TextGenerator for OpenAiClient {
    fn generate(&self, system: &str, instruction: &str) -> Result<String> {
        let url = self.completions_url();
        let body = json!({
            "model": self.config.model,
            "messages": [
                { "role": "system", "content": system },
                { "role": "user", "content": instruction },
            ],
            "temperature": self.config.temperature,
        });

        debug!(model = %self.config.model, "sending mapping request");
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .map_err(|e| NormalizeError::ServiceCall(format!("request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().unwrap_or_default();
            return Err(NormalizeError::ServiceCall(format!(
                "API error ({status}): {text}"
            )));
        }

        let json: Value = response
            .json()
            .map_err(|e| NormalizeError::ServiceCall(format!("invalid response body: {e}")))?;

        json["choices"][0]["message"]["content"]
            .as_str()
            .map(|s| s.trim().to_string())
            .ok_or_else(|| {
                NormalizeError::ServiceCall("response has no message content".to_string())
            })
    }
}
