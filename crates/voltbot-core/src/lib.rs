//! Core domain types for voltbot.
//!
//! This crate provides the fundamental types shared across the voltbot
//! workspace:
//!
//! - [`Message`] and [`MessageRole`] — Conversation message types
//! - [`StreamEvent`] — Framed events delivered over a streaming response
//!
//! # Example
//!
//! ```rust
//! use voltbot_core::{Message, MessageRole};
//!
//! let msg = Message::user("Hello!");
//! assert_eq!(msg.role, MessageRole::User);
//! ```

use serde::{Deserialize, Serialize};

/// Role of a message in a conversation.
///
/// Roles arrive from the caller as lowercase string tags. The set is open:
/// tags this service does not know are kept as [`MessageRole::Other`]
/// instead of being rejected, since the assistant only reads message content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MessageRole {
    /// Message from the user.
    User,
    /// Message from the assistant.
    Assistant,
    /// System instruction supplied by the caller.
    System,
    /// Any unrecognized role tag, preserved verbatim.
    Other(String),
}

impl From<String> for MessageRole {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "user" => Self::User,
            "assistant" => Self::Assistant,
            "system" => Self::System,
            _ => Self::Other(tag),
        }
    }
}

impl From<MessageRole> for String {
    fn from(role: MessageRole) -> Self {
        match role {
            MessageRole::User => "user".into(),
            MessageRole::Assistant => "assistant".into(),
            MessageRole::System => "system".into(),
            MessageRole::Other(tag) => tag,
        }
    }
}

/// A single message in a conversation history.
///
/// Messages are caller-supplied and never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// The role of the message sender.
    pub role: MessageRole,
    /// The content of the message.
    pub content: String,
}

impl Message {
    /// Creates a new user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self { role: MessageRole::User, content: content.into() }
    }

    /// Creates a new assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self { role: MessageRole::Assistant, content: content.into() }
    }
}

/// One framed event in a streamed reply.
///
/// Serialized with a `type` tag: fragments as
/// `{"type":"text","content":...}`, the terminal marker as
/// `{"type":"done"}`. A stream carries any number of `Text` events followed
/// by exactly one `Done`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum StreamEvent {
    /// A piece of the reply.
    Text {
        /// The fragment text, spacing included.
        content: String,
    },
    /// Terminal marker, always the last event of a stream.
    Done,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_tags_are_lowercase() {
        assert_eq!(serde_json::to_string(&MessageRole::User).unwrap(), r#""user""#);
        assert_eq!(serde_json::to_string(&MessageRole::Assistant).unwrap(), r#""assistant""#);
    }

    #[test]
    fn unknown_role_tags_are_accepted() {
        let msg: Message = serde_json::from_str(r#"{"role":"tool","content":"ping"}"#).unwrap();
        assert_eq!(msg.role, MessageRole::Other("tool".into()));
        assert_eq!(msg.content, "ping");
    }

    #[test]
    fn stream_event_wire_shape() {
        let text = StreamEvent::Text { content: "hi".into() };
        assert_eq!(
            serde_json::to_string(&text).unwrap(),
            r#"{"type":"text","content":"hi"}"#
        );
        assert_eq!(serde_json::to_string(&StreamEvent::Done).unwrap(), r#"{"type":"done"}"#);
    }

    #[test]
    fn stream_event_round_trips() {
        let event: StreamEvent = serde_json::from_str(r#"{"type":"done"}"#).unwrap();
        assert_eq!(event, StreamEvent::Done);
    }
}
