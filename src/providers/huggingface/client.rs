//! HuggingFace client: encode, call, decode.

use std::sync::Arc;

use async_trait::async_trait;

use super::builder::HuggingFaceBuilder;
use super::prompt::encode_prompt;
use super::streaming::simulate_stream;
use super::transport::TextGenerationTransport;
use super::types::TextGenerationRequest;
use crate::error::LlmError;
use crate::traits::ChatCapability;
use crate::types::{ChatRequest, ChatResponse, ChatStream, FinishReason};

/// Returned when the backend produces an empty completion.
pub(crate) const EMPTY_COMPLETION_FALLBACK: &str =
    "I apologize, but I could not generate a response.";
/// Returned from the one-shot path when the upstream call fails.
pub(crate) const UPSTREAM_FAILURE_FALLBACK: &str =
    "I apologize, but I encountered an error. Please try again.";

/// Chat client for one HuggingFace text-generation model.
///
/// The instance holds only the model id and the transport; it is
/// read-only after construction and safe to share across concurrent
/// calls. All per-request state (prompt, wire body, event stream) is
/// owned by the call.
///
/// Error policy, one per path: [`chat`](ChatCapability::chat) is
/// fail-soft — an upstream failure is logged and replaced with a fixed
/// apology response so a best-effort backend cannot take the pipeline
/// down with it. [`chat_stream`](ChatCapability::chat_stream) is
/// fail-hard — streaming has no apology-chunk convention, so the caller
/// gets either real content or an explicit error.
pub struct HuggingFaceClient {
    model: String,
    transport: Arc<dyn TextGenerationTransport>,
}

impl HuggingFaceClient {
    pub(crate) fn new(model: String, transport: Arc<dyn TextGenerationTransport>) -> Self {
        Self { model, transport }
    }

    /// Create a builder
    pub fn builder() -> HuggingFaceBuilder {
        HuggingFaceBuilder::new()
    }

    /// The model id this client generates with
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Run one generation round trip, propagating upstream failures.
    async fn try_generate(&self, request: &ChatRequest) -> Result<ChatResponse, LlmError> {
        let prompt = encode_prompt(&request.messages);
        tracing::debug!(model = %self.model, prompt_len = prompt.len(), "encoded prompt");
        let body = TextGenerationRequest::new(prompt, request);
        let response = self.transport.generate_text(&self.model, &body).await?;
        Ok(self.decode_generated_text(response.generated_text.as_deref()))
    }

    /// Decode the raw completion into the response shape.
    ///
    /// The backend reports neither a finish reason nor usage, so the
    /// finish reason is always `Stop` and the usage counters stay
    /// unavailable. An empty or absent completion becomes a fixed
    /// fallback sentence; callers never see an empty response.
    fn decode_generated_text(&self, raw: Option<&str>) -> ChatResponse {
        let text = raw.map(str::trim).filter(|t| !t.is_empty());
        ChatResponse::text(
            text.unwrap_or(EMPTY_COMPLETION_FALLBACK),
            FinishReason::Stop,
        )
        .with_model(self.model.clone())
    }
}

#[async_trait]
impl ChatCapability for HuggingFaceClient {
    async fn chat(&self, request: ChatRequest) -> Result<ChatResponse, LlmError> {
        match self.try_generate(&request).await {
            Ok(response) => Ok(response),
            Err(error) => {
                tracing::error!(model = %self.model, %error, "text generation failed");
                Ok(
                    ChatResponse::text(UPSTREAM_FAILURE_FALLBACK, FinishReason::Stop)
                        .with_model(self.model.clone()),
                )
            }
        }
    }

    async fn chat_stream(&self, request: ChatRequest) -> Result<ChatStream, LlmError> {
        let response = self.try_generate(&request).await?;
        Ok(simulate_stream(response))
    }
}
