//! Chat capability trait — the contract consumed by orchestration layers.

use async_trait::async_trait;

use crate::error::LlmError;
use crate::types::{ChatRequest, ChatResponse, ChatStream, ChatStreamHandle};

/// A provider that can complete a conversation, in one shot or as a stream.
///
/// Implementations must be safe for concurrent reuse: the instance is
/// read-only after construction and every call owns its own request state.
#[async_trait]
pub trait ChatCapability: Send + Sync {
    /// Complete the conversation and return the full response.
    async fn chat(&self, request: ChatRequest) -> Result<ChatResponse, LlmError>;

    /// Complete the conversation and deliver the response incrementally.
    async fn chat_stream(&self, request: ChatRequest) -> Result<ChatStream, LlmError>;

    /// Like [`chat_stream`](Self::chat_stream), with a cancellation handle.
    async fn chat_stream_with_cancel(
        &self,
        request: ChatRequest,
    ) -> Result<ChatStreamHandle, LlmError> {
        let stream = self.chat_stream(request).await?;
        let (cancellable, cancel) = crate::utils::cancel::make_cancellable_stream(stream);
        Ok(ChatStreamHandle {
            stream: cancellable,
            cancel,
        })
    }

    /// Ask a single question and return the response text.
    async fn ask(&self, prompt: String) -> Result<String, LlmError> {
        let request = ChatRequest::new(vec![crate::types::ChatMessage::user(prompt)]);
        let response = self.chat(request).await?;
        response
            .content_text()
            .ok_or_else(|| LlmError::InternalError("No text in response".to_string()))
            .map(std::string::ToString::to_string)
    }
}
