//! Provider implementations

pub mod huggingface;
