//! Client builder

use std::sync::Arc;

use secrecy::SecretString;

use super::client::HuggingFaceClient;
use super::transport::{DEFAULT_BASE_URL, HttpTextGenerationTransport, TextGenerationTransport};
use crate::error::LlmError;

/// Environment variable consulted when no API key is supplied.
pub const API_KEY_ENV: &str = "HUGGINGFACE_API_KEY";

/// Builder for [`HuggingFaceClient`].
///
/// # Example
///
/// ```rust,ignore
/// use hf_inference_provider::HuggingFaceClient;
///
/// let client = HuggingFaceClient::builder()
///     .model("gpt2")
///     .api_key("hf_...")
///     .build()?;
/// ```
#[derive(Default)]
pub struct HuggingFaceBuilder {
    model: Option<String>,
    api_key: Option<SecretString>,
    base_url: Option<String>,
    http_client: Option<reqwest::Client>,
    transport: Option<Arc<dyn TextGenerationTransport>>,
}

impl HuggingFaceBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the model id (required)
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the API key. If not set, `HUGGINGFACE_API_KEY` is consulted
    /// once at build time; if that is also absent the client calls the
    /// endpoint anonymously, which the free tier permits.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(SecretString::from(api_key.into()));
        self
    }

    /// Override the Inference API base URL
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Use a pre-configured HTTP client
    pub fn http_client(mut self, http_client: reqwest::Client) -> Self {
        self.http_client = Some(http_client);
        self
    }

    /// Replace the transport entirely (tests, alternative backends).
    /// When set, the API key, base URL, and HTTP client are unused.
    pub fn transport(mut self, transport: Arc<dyn TextGenerationTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build the client
    pub fn build(self) -> Result<HuggingFaceClient, LlmError> {
        let model = self.model.ok_or_else(|| {
            LlmError::ConfigurationError("model id is required for HuggingFace".to_string())
        })?;

        let transport = match self.transport {
            Some(transport) => transport,
            None => {
                // Priority: explicit parameter > environment variable.
                // The lookup happens here, once, not on every call.
                let api_key = self
                    .api_key
                    .or_else(|| std::env::var(API_KEY_ENV).ok().map(SecretString::from));
                Arc::new(HttpTextGenerationTransport::new(
                    self.base_url
                        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
                    api_key,
                    self.http_client.unwrap_or_default(),
                ))
            }
        };

        Ok(HuggingFaceClient::new(model, transport))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_model_is_a_configuration_error() {
        let result = HuggingFaceBuilder::new().build();
        assert!(matches!(result, Err(LlmError::ConfigurationError(_))));
    }

    #[test]
    fn missing_api_key_is_allowed() {
        let client = HuggingFaceBuilder::new().model("gpt2").build().unwrap();
        assert_eq!(client.model(), "gpt2");
    }
}
