//! Conversation messages as the backend reports them.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Who authored a message, as far as rendering is concerned.
///
/// The backend can report other message kinds (tool, system); everything that
/// is not `human` is shown as an assistant turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageRole {
    /// Written by the user.
    Human,
    /// Anything else: the agent's replies, tool output.
    Ai,
}

impl MessageRole {
    /// Classifies a raw wire `type` value.
    #[must_use]
    pub fn from_kind(kind: &str) -> Self {
        if kind == "human" { Self::Human } else { Self::Ai }
    }

    /// Wire name of the role.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Human => "human",
            Self::Ai => "ai",
        }
    }
}

impl Display for MessageRole {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// A single turn of a conversation as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Raw wire `type` (`human`, `ai`, `tool`, ...).
    #[serde(rename = "type", default)]
    pub kind: String,

    /// Plain-text content.
    #[serde(default, deserialize_with = "deserialize_content")]
    pub content: String,
}

impl Message {
    /// A human turn with `content`.
    pub fn human(content: impl Into<String>) -> Self {
        Self {
            kind: MessageRole::Human.as_str().to_string(),
            content: content.into(),
        }
    }

    /// An agent turn with `content`.
    pub fn ai(content: impl Into<String>) -> Self {
        Self {
            kind: MessageRole::Ai.as_str().to_string(),
            content: content.into(),
        }
    }

    /// Rendering role derived from [`kind`](Self::kind).
    #[must_use]
    pub fn role(&self) -> MessageRole {
        MessageRole::from_kind(&self.kind)
    }
}

/// Content is either a string or a list of content parts; text parts are
/// joined by newlines and everything else is dropped.
fn deserialize_content<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text,
        Some(Value::Array(parts)) => parts
            .iter()
            .filter_map(|part| match part {
                Value::String(text) => Some(text.as_str()),
                Value::Object(map) => map.get("text").and_then(Value::as_str),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("\n"),
        Some(other) => other.to_string(),
    })
}

/// Body of `GET /thread/{id}/`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreadMessagesResponse {
    /// Messages in conversation order.
    #[serde(default)]
    pub messages: Vec<Message>,
}
