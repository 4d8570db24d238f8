//! Streaming event types for incremental responses

use futures::Stream;
use serde::{Deserialize, Serialize};
use std::pin::Pin;

use super::response::{FinishReason, Usage};
use crate::error::LlmError;
use crate::utils::cancel::CancelHandle;

/// Chat streaming event
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum ChatStreamEvent {
    /// Content delta (incremental text)
    ContentDelta {
        /// The incremental text content. Concatenating all deltas in
        /// emission order reconstructs the complete response text.
        delta: String,
    },
    /// Stream end. Emitted exactly once, after all deltas.
    StreamEnd {
        /// Finish reason of the underlying generation
        finish_reason: FinishReason,
        /// Usage counters of the underlying generation
        usage: Usage,
    },
}

/// Chat stream - a pinned, boxed stream of [`ChatStreamEvent`] items.
pub type ChatStream = Pin<Box<dyn Stream<Item = Result<ChatStreamEvent, LlmError>> + Send>>;

/// Chat stream paired with a first-class cancellation handle.
///
/// Cancelling stops the producer at the next suspension point (the
/// inter-chunk delay); no other resources are held.
pub struct ChatStreamHandle {
    /// The underlying chat stream
    pub stream: ChatStream,
    /// Handle to cancel the stream
    pub cancel: CancelHandle,
}
