//! Conversation messages and content parts.

use serde::{Deserialize, Serialize};

/// One part of a multi-part message body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ContentPart {
    /// Plain text
    Text {
        /// The text content
        text: String,
    },
    /// Output of a previously executed tool call, carried as opaque JSON.
    /// The adapter serializes it into the prompt; it is never re-invoked.
    ToolResult {
        /// Tool output value
        output: serde_json::Value,
    },
    /// A file or attachment part. Carries no recoverable text for a
    /// completion backend and degrades to a placeholder in the prompt.
    File {
        /// Original file name, if known
        #[serde(skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        /// MIME type, if known
        #[serde(skip_serializing_if = "Option::is_none")]
        media_type: Option<String>,
    },
}

impl ContentPart {
    /// Create a text part
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    /// Create a tool result part
    pub fn tool_result(output: serde_json::Value) -> Self {
        Self::ToolResult { output }
    }
}

/// One turn of a conversation.
///
/// The role determines the content shape: system turns carry a single
/// string, all other turns carry an ordered list of parts. Modelling this
/// as a tagged union (rather than a uniform `content` field) keeps the
/// prompt encoder exhaustive: a new role or shape is a compile error, not
/// a silently stringified value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum ChatMessage {
    /// System instruction
    System {
        /// Instruction text
        content: String,
    },
    /// End-user turn
    User {
        /// Ordered message parts
        content: Vec<ContentPart>,
    },
    /// Prior assistant turn
    Assistant {
        /// Ordered message parts
        content: Vec<ContentPart>,
    },
    /// Tool output turn
    Tool {
        /// Ordered message parts
        content: Vec<ContentPart>,
    },
}

impl ChatMessage {
    /// Create a system message
    pub fn system(content: impl Into<String>) -> Self {
        Self::System {
            content: content.into(),
        }
    }

    /// Create a user message with a single text part
    pub fn user(text: impl Into<String>) -> Self {
        Self::User {
            content: vec![ContentPart::text(text)],
        }
    }

    /// Create a user message from explicit parts
    pub fn user_with_parts(content: Vec<ContentPart>) -> Self {
        Self::User { content }
    }

    /// Create an assistant message with a single text part
    pub fn assistant(text: impl Into<String>) -> Self {
        Self::Assistant {
            content: vec![ContentPart::text(text)],
        }
    }

    /// Create an assistant message from explicit parts
    pub fn assistant_with_parts(content: Vec<ContentPart>) -> Self {
        Self::Assistant { content }
    }

    /// Create a tool message carrying a single tool result
    pub fn tool_result(output: serde_json::Value) -> Self {
        Self::Tool {
            content: vec![ContentPart::tool_result(output)],
        }
    }

    /// Create a tool message from explicit parts
    pub fn tool_with_parts(content: Vec<ContentPart>) -> Self {
        Self::Tool { content }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn role_tag_serialization() {
        let msg = ChatMessage::user("Hi");
        let value = serde_json::to_value(&msg).unwrap();
        assert_eq!(value["role"], "user");
        assert_eq!(value["content"][0]["type"], "text");
        assert_eq!(value["content"][0]["text"], "Hi");
    }

    #[test]
    fn system_content_is_scalar() {
        let msg = ChatMessage::system("Be terse.");
        let value = serde_json::to_value(&msg).unwrap();
        assert_eq!(value["content"], "Be terse.");
    }

    #[test]
    fn tool_result_round_trip() {
        let msg = ChatMessage::tool_result(json!({"ok": true}));
        let encoded = serde_json::to_string(&msg).unwrap();
        let decoded: ChatMessage = serde_json::from_str(&encoded).unwrap();
        assert_eq!(msg, decoded);
    }
}
