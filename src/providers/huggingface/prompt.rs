//! Prompt encoding for the completion backend.
//!
//! The backend has no native chat format, so role information is encoded
//! lexically: one labelled line per turn, a trailing `Assistant:` cue to
//! induce the model to continue as the assistant instead of echoing the
//! user. Encoding is pure and total — unrenderable content degrades to a
//! placeholder, never an error.

use crate::types::{ChatMessage, ContentPart};

/// Placeholder for parts with no recoverable text.
const FILE_PLACEHOLDER: &str = "[File]";
/// Placeholder used inside tool turns.
const TOOL_RESULT_PLACEHOLDER: &str = "[Tool Result]";

/// Flatten a conversation into a single prompt string.
///
/// Turns are rendered in order, each prefixed with its role label
/// (`System:`, `Human:`, `Assistant:`, `Tool:`). Multi-part content is
/// joined with single spaces. Turns that render empty are dropped. The
/// result always ends with `\nAssistant:`.
pub fn encode_prompt(messages: &[ChatMessage]) -> String {
    let mut lines: Vec<String> = Vec::with_capacity(messages.len());
    for message in messages {
        let line = match message {
            ChatMessage::System { content } => format!("System: {content}"),
            ChatMessage::User { content } => {
                format!("Human: {}", render_parts(content, FILE_PLACEHOLDER))
            }
            ChatMessage::Assistant { content } => {
                format!("Assistant: {}", render_parts(content, FILE_PLACEHOLDER))
            }
            ChatMessage::Tool { content } => {
                format!("Tool: {}", render_parts(content, TOOL_RESULT_PLACEHOLDER))
            }
        };
        if !line.is_empty() {
            lines.push(line);
        }
    }
    let mut prompt = lines.join("\n");
    prompt.push_str("\nAssistant:");
    prompt
}

fn render_parts(parts: &[ContentPart], placeholder: &str) -> String {
    parts
        .iter()
        .map(|part| render_part(part, placeholder))
        .collect::<Vec<_>>()
        .join(" ")
}

fn render_part(part: &ContentPart, placeholder: &str) -> String {
    match part {
        ContentPart::Text { text } => text.clone(),
        ContentPart::ToolResult { output } => {
            serde_json::to_string(output).unwrap_or_else(|_| placeholder.to_string())
        }
        ContentPart::File { .. } => placeholder.to_string(),
    }
}
