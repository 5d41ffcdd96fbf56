//! Message definitions.
//!
//! A message pairs a name with the schema of its payload. Only payloads
//! whose top-level kind is an object are lowered; anything else is kept as a
//! kind label so the generator can report the skip.

use crate::types::FieldSchema;

/// Message definition.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageDef {
    /// Message name as authored.
    pub name: String,
    /// Short summary.
    pub summary: Option<String>,
    /// Longer description.
    pub description: Option<String>,
    /// Object payload, if the payload is an object.
    pub payload: Option<FieldSchema>,
    /// Top-level kind of the authored payload (`object`, `string`, `$ref`, `missing`, ...).
    pub payload_kind: String,
}

impl MessageDef {
    /// Creates a message with an object payload.
    #[must_use]
    pub fn new(name: String, payload: FieldSchema) -> Self {
        Self {
            name,
            summary: None,
            description: None,
            payload: Some(payload),
            payload_kind: "object".to_string(),
        }
    }

    /// Creates a message whose payload is not an object.
    #[must_use]
    pub fn without_payload(name: String, payload_kind: impl Into<String>) -> Self {
        Self {
            name,
            summary: None,
            description: None,
            payload: None,
            payload_kind: payload_kind.into(),
        }
    }

    /// Returns true if the payload is an object.
    #[must_use]
    pub fn has_object_payload(&self) -> bool {
        self.payload.is_some()
    }

    /// Returns the text used to document the message declaration.
    ///
    /// The summary wins over the description.
    #[must_use]
    pub fn doc(&self) -> Option<&str> {
        self.summary.as_deref().or(self.description.as_deref())
    }
}
