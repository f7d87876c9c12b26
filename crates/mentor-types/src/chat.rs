//! Request and response types for the chat endpoint.
//!
//! The request schema is explicit: `message` is optional at the serde level so
//! that a missing message can be reported as a validation error rather than a
//! parse failure, and history items are classified into canonical, legacy and
//! unrecognized shapes.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::turn::Content;

/// Body of `POST /chat`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatRequest {
    /// The new user message. `None` and `Some("")` are both "no message".
    #[serde(default)]
    pub message: Option<String>,

    /// Prior conversation turns, oldest first. `null` is treated as empty.
    #[serde(default)]
    pub history: Option<Vec<HistoryItem>>,
}

impl ChatRequest {
    /// The user message, if present and non-empty.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref().filter(|m| !m.is_empty())
    }
}

/// A client-supplied history entry, classified by shape.
///
/// An object whose `parts` field is an array is canonical, whatever its role
/// or part contents. Otherwise an object carrying both `role` and `text` is
/// the legacy shape. Anything else is unrecognized.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub enum HistoryItem {
    Canonical(Map<String, Value>),
    Legacy { role: Value, text: Value },
    Unrecognized(Value),
}

impl From<Value> for HistoryItem {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(object) if object.get("parts").is_some_and(Value::is_array) => {
                HistoryItem::Canonical(object)
            }
            Value::Object(mut object)
                if object.contains_key("role") && object.contains_key("text") =>
            {
                HistoryItem::Legacy {
                    role: object.remove("role").unwrap_or_default(),
                    text: object.remove("text").unwrap_or_default(),
                }
            }
            other => HistoryItem::Unrecognized(other),
        }
    }
}

impl HistoryItem {
    /// The `contents` entry this item becomes, or `None` if unrecognized.
    ///
    /// Canonical items are forwarded as received. Legacy items are rewritten
    /// to `{role, parts: [{text}]}` with `role` and `text` kept as given.
    pub fn into_content(self) -> Option<Content> {
        match self {
            HistoryItem::Canonical(object) => Some(Content::Verbatim(object)),
            HistoryItem::Legacy { role, text } => {
                let mut object = Map::new();
                object.insert("role".to_string(), role);
                object.insert("parts".to_string(), json!([{ "text": text }]));
                Some(Content::Verbatim(object))
            }
            HistoryItem::Unrecognized(_) => None,
        }
    }
}

/// Successful body of `POST /chat`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    pub reply: String,
}

/// How the normalizer treats history items it cannot classify.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryMode {
    /// Drop unrecognized items and carry on.
    #[default]
    Lenient,
    /// Fail the request on the first unrecognized item.
    Strict,
}
