//! Request, response, and streaming types for the chat interface.

mod message;
mod request;
mod response;
mod streaming;

pub use message::{ChatMessage, ContentPart};
pub use request::{ChatRequest, ChatRequestBuilder};
pub use response::{ChatResponse, FinishReason, MessageContent, Usage};
pub use streaming::{ChatStream, ChatStreamEvent, ChatStreamHandle};
