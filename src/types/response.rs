//! Chat response types

use serde::{Deserialize, Serialize};

/// Response content.
///
/// Only text comes back from a completion backend, but the enum keeps the
/// response shape open for richer providers behind the same interface.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum MessageContent {
    /// Plain text
    Text(String),
}

impl MessageContent {
    /// Extract text content if available
    pub fn text(&self) -> Option<&str> {
        match self {
            MessageContent::Text(text) => Some(text),
        }
    }
}

/// Reason why the model stopped generating tokens.
///
/// The HuggingFace text-generation endpoint reports no terminal state at
/// all, so this adapter always reports [`FinishReason::Stop`] — a length
/// cutoff or content filter upstream is indistinguishable from natural
/// completion. That is a fidelity limitation of the backend, kept visible
/// here rather than papered over with a guess.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FinishReason {
    /// Model completed naturally or hit a stop sequence
    Stop,
    /// Model reached the output token limit
    Length,
    /// Content was filtered due to safety policy
    ContentFilter,
    /// An error occurred during generation
    Error,
    /// The provider did not report a recognizable reason
    Unknown,
}

/// Token usage counters.
///
/// Every field is optional: the upstream API does not report usage, and
/// absent counters must never be fabricated or zero-filled.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Usage {
    /// Tokens consumed by the prompt
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt_tokens: Option<u32>,
    /// Tokens produced in the completion
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion_tokens: Option<u32>,
    /// Total token count
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_tokens: Option<u32>,
}

impl Usage {
    /// Usage with all counters explicitly unavailable
    pub fn unavailable() -> Self {
        Self::default()
    }

    /// Whether any counter was reported
    pub fn is_available(&self) -> bool {
        self.prompt_tokens.is_some()
            || self.completion_tokens.is_some()
            || self.total_tokens.is_some()
    }
}

/// Chat response from the provider
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatResponse {
    /// The response content
    pub content: MessageContent,
    /// Model that produced the response
    pub model: Option<String>,
    /// Finish reason
    pub finish_reason: FinishReason,
    /// Usage statistics
    pub usage: Usage,
}

impl ChatResponse {
    /// Create a text response with the given finish reason and no usage data
    pub fn text(text: impl Into<String>, finish_reason: FinishReason) -> Self {
        Self {
            content: MessageContent::Text(text.into()),
            model: None,
            finish_reason,
            usage: Usage::unavailable(),
        }
    }

    /// Attach the model id
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Extract text content if available
    pub fn content_text(&self) -> Option<&str> {
        self.content.text()
    }
}
