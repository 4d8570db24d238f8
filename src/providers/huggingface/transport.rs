//! Transport seam for the text-generation endpoint.
//!
//! The client talks to the endpoint through [`TextGenerationTransport`]
//! so tests can inject a mock and a future real-streaming backend can be
//! swapped in without touching the adaptation layer. Retries and backoff
//! belong to the transport, not this crate; the HTTP implementation here
//! performs exactly one call per request.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};

use super::types::{TextGenerationRequest, TextGenerationResponse};
use crate::error::LlmError;

/// Default Inference API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api-inference.huggingface.co";

/// A collaborator that can run one synchronous text-generation call.
#[async_trait]
pub trait TextGenerationTransport: Send + Sync {
    /// Generate a completion for the given model and request body.
    async fn generate_text(
        &self,
        model: &str,
        request: &TextGenerationRequest,
    ) -> Result<TextGenerationResponse, LlmError>;
}

/// HTTP transport against the Inference API.
pub struct HttpTextGenerationTransport {
    base_url: String,
    api_key: Option<SecretString>,
    http_client: reqwest::Client,
}

impl HttpTextGenerationTransport {
    /// Create a transport. An absent API key means anonymous access,
    /// which the free tier permits.
    pub fn new(
        base_url: String,
        api_key: Option<SecretString>,
        http_client: reqwest::Client,
    ) -> Self {
        Self {
            base_url,
            api_key,
            http_client,
        }
    }

    fn model_url(&self, model: &str) -> String {
        format!("{}/models/{model}", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl TextGenerationTransport for HttpTextGenerationTransport {
    async fn generate_text(
        &self,
        model: &str,
        request: &TextGenerationRequest,
    ) -> Result<TextGenerationResponse, LlmError> {
        let mut builder = self.http_client.post(self.model_url(model)).json(request);
        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key.expose_secret());
        }

        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_else(|_| status.to_string());
            return Err(LlmError::api_error(status.as_u16(), message));
        }

        let payload: serde_json::Value = response.json().await?;
        parse_generation_payload(payload)
    }
}

/// The raw API returns `[{"generated_text": ...}]`; some deployments
/// return the bare object. Accept both.
fn parse_generation_payload(payload: serde_json::Value) -> Result<TextGenerationResponse, LlmError> {
    let value = match payload {
        serde_json::Value::Array(mut items) => {
            if items.is_empty() {
                return Err(LlmError::ParseError(
                    "empty text-generation response array".to_string(),
                ));
            }
            items.swap_remove(0)
        }
        other => other,
    };
    serde_json::from_value(value)
        .map_err(|e| LlmError::ParseError(format!("unexpected text-generation payload: {e}")))
}
