//! HuggingFace Inference API provider
//!
//! The Inference API text-generation endpoint is a plain completion
//! service: no chat template, no token streaming, no usage reporting.
//! This module encodes conversations lexically (`System:` / `Human:` /
//! `Assistant:` / `Tool:` labels with a trailing `Assistant:` cue),
//! calls the endpoint once per request, and simulates streaming by
//! replaying the completed text as paced word deltas.

mod builder;
mod client;
pub mod models;
mod prompt;
mod streaming;
mod transport;
mod types;

pub use builder::HuggingFaceBuilder;
pub use client::HuggingFaceClient;
pub use prompt::encode_prompt;
pub use streaming::simulate_stream;
pub use transport::{HttpTextGenerationTransport, TextGenerationTransport};
pub use types::{TextGenerationParameters, TextGenerationRequest, TextGenerationResponse};
