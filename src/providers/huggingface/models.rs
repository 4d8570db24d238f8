//! Model id constants for the free Inference API tier.

/// Conversational model, strongest of the free set
pub const MICROSOFT_DIALO_GPT: &str = "microsoft/DialoGPT-large";
/// Distilled open-domain chatbot
pub const FACEBOOK_BLENDER: &str = "facebook/blenderbot-400M-distill";
/// Plain completion model
pub const GPT2: &str = "gpt2";
/// Smaller, faster GPT-2 variant
pub const DISTIL_GPT2: &str = "distilgpt2";
/// Instruction-tuned, small
pub const FLAN_T5_SMALL: &str = "google/flan-t5-small";
/// Instruction-tuned, base size
pub const FLAN_T5_BASE: &str = "google/flan-t5-base";

/// All free model ids known to work with this adapter
pub const FREE_MODELS: &[&str] = &[
    MICROSOFT_DIALO_GPT,
    FACEBOOK_BLENDER,
    GPT2,
    DISTIL_GPT2,
    FLAN_T5_SMALL,
    FLAN_T5_BASE,
];

/// Default chat model
pub const DEFAULT_CHAT_MODEL: &str = MICROSOFT_DIALO_GPT;
