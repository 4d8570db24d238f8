//! hf-inference-provider
//!
//! HuggingFace Inference API text-generation adapter exposed through a
//! generic chat capability interface. The upstream endpoint is a plain
//! completion model with no native chat format and no streaming support:
//! conversations are flattened into a role-labelled prompt, and streaming
//! is simulated by replaying the completed text as paced word deltas.
#![deny(unsafe_code)]

pub mod error;
pub mod providers;
pub mod traits;
pub mod types;
pub mod utils;

pub use error::LlmError;
pub use providers::huggingface::{HuggingFaceBuilder, HuggingFaceClient, models};
pub use traits::ChatCapability;
pub use types::{
    ChatMessage, ChatRequest, ChatResponse, ChatStream, ChatStreamEvent, ChatStreamHandle,
    ContentPart, FinishReason, MessageContent, Usage,
};
