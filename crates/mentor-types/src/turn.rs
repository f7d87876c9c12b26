//! Conversation turn types.
//!
//! A [`Turn`] is one role-tagged unit of a conversation, shaped the way the
//! Gemini `contents` array expects it: `{ "role": "user", "parts": [{ "text": "..." }] }`.
//! A [`Content`] is one entry of that array as actually sent, which for
//! client-supplied history is the client's own JSON object.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Author of a turn.
///
/// Gemini only knows two roles; there is no separate system role, which is
/// why the persona is injected as a synthetic user/model exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

/// A single text segment of a turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

impl Part {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// One exchange unit built by the server: persona turns, the new user
/// message and model replies.
///
/// Invariant: `parts` is non-empty for every turn this crate constructs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub parts: Vec<Part>,
}

impl Turn {
    /// Build a single-part turn.
    pub fn text(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            parts: vec![Part::new(text)],
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::text(Role::User, text)
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self::text(Role::Model, text)
    }

    /// Concatenated text of all parts.
    pub fn joined_text(&self) -> String {
        self.parts.iter().map(|p| p.text.as_str()).collect()
    }
}

/// One entry of the `contents` array sent to the model.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Content {
    Turn(Turn),
    /// A client history object, serialized exactly as received.
    Verbatim(Map<String, Value>),
}

impl From<Turn> for Content {
    fn from(turn: Turn) -> Self {
        Content::Turn(turn)
    }
}

/// Equal when both serialize to the same JSON object.
impl PartialEq<Turn> for Content {
    fn eq(&self, other: &Turn) -> bool {
        match self {
            Content::Turn(turn) => turn == other,
            Content::Verbatim(object) => serde_json::to_value(other)
                .is_ok_and(|value| value.as_object() == Some(object)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_turn_wire_shape() {
        let turn = Turn::user("hi");
        let json = serde_json::to_value(&turn).unwrap();
        assert_eq!(json, json!({ "role": "user", "parts": [{ "text": "hi" }] }));
    }

    #[test]
    fn test_joined_text() {
        let turn = Turn {
            role: Role::Model,
            parts: vec![Part::new("Hello, "), Part::new("world")],
        };
        assert_eq!(turn.joined_text(), "Hello, world");
    }

    #[test]
    fn test_verbatim_content_serializes_unchanged() {
        let raw = json!({ "role": "USER", "parts": ["hi", { "inline_data": { "data": "AA==" } }], "extra": 1 });
        let content = Content::Verbatim(raw.as_object().unwrap().clone());
        assert_eq!(serde_json::to_value(&content).unwrap(), raw);
    }

    #[test]
    fn test_content_compares_with_turn_by_wire_shape() {
        let same = json!({ "role": "user", "parts": [{ "text": "hi" }] });
        let different = json!({ "role": "User", "parts": [{ "text": "hi" }] });

        assert_eq!(Content::Verbatim(same.as_object().unwrap().clone()), Turn::user("hi"));
        assert_ne!(Content::Verbatim(different.as_object().unwrap().clone()), Turn::user("hi"));
        assert_eq!(Content::from(Turn::model("ok")), Turn::model("ok"));
    }
}
