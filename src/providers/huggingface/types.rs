//! Wire types and parameter defaults for the text-generation endpoint.

use serde::{Deserialize, Serialize};

use crate::types::ChatRequest;

/// Default output token budget when the request does not set one.
pub const DEFAULT_MAX_NEW_TOKENS: u32 = 150;
/// Hard cap on `max_new_tokens`; requests above this are clamped.
pub const MAX_NEW_TOKENS_CAP: u32 = 512;
/// Default sampling temperature.
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
/// Default nucleus sampling cutoff.
pub const DEFAULT_TOP_P: f32 = 0.95;

/// Request body for `POST /models/{model_id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TextGenerationRequest {
    /// The flattened prompt
    pub inputs: String,
    /// Generation parameters
    pub parameters: TextGenerationParameters,
}

/// Generation parameters accepted by the text-generation task.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TextGenerationParameters {
    /// Output token budget
    pub max_new_tokens: u32,
    /// Sampling temperature
    pub temperature: f32,
    /// Return only the continuation, not the prompt
    pub return_full_text: bool,
    /// Enable sampling
    pub do_sample: bool,
    /// Nucleus sampling cutoff
    pub top_p: f32,
}

impl TextGenerationRequest {
    /// Build the wire request from a prompt and the caller's parameters,
    /// applying defaults and the output token cap.
    pub fn new(inputs: String, request: &ChatRequest) -> Self {
        Self {
            inputs,
            parameters: TextGenerationParameters {
                max_new_tokens: request
                    .max_tokens
                    .unwrap_or(DEFAULT_MAX_NEW_TOKENS)
                    .min(MAX_NEW_TOKENS_CAP),
                temperature: request.temperature.unwrap_or(DEFAULT_TEMPERATURE),
                return_full_text: false,
                do_sample: true,
                top_p: request.top_p.unwrap_or(DEFAULT_TOP_P),
            },
        }
    }
}

/// Response body: the generated continuation.
///
/// The raw API wraps this in a one-element array; the transport unwraps
/// either encoding.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct TextGenerationResponse {
    /// Generated text, absent on malformed payloads
    #[serde(default)]
    pub generated_text: Option<String>,
}
