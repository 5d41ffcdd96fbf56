//! Error types for document loading and validation.

use thiserror::Error;

/// Error type for document loading operations.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// A required top-level collection is absent.
    #[error("document is missing the '{name}' collection")]
    MissingCollection {
        /// Collection name (`messages` or `schemas`).
        name: String,
    },

    /// Schema kind outside the supported subset.
    #[error("unsupported schema kind '{kind}' at '{context}'")]
    UnsupportedKind {
        /// Enclosing type and field path.
        context: String,
        /// Offending kind.
        kind: String,
    },

    /// Malformed enumeration.
    #[error("invalid enum at '{context}': {message}")]
    InvalidEnum {
        /// Enclosing type and field path.
        context: String,
        /// Error message.
        message: String,
    },

    /// Invalid schema structure.
    #[error("invalid schema structure at '{context}': {message}")]
    InvalidStructure {
        /// Enclosing type and field path.
        context: String,
        /// Error message.
        message: String,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error type for document validation.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Loading error.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Reference to a schema the document does not define.
    #[error("unresolved reference '{name}' at '{context}'")]
    UnresolvedReference {
        /// Enclosing type and field path.
        context: String,
        /// Referenced schema name.
        name: String,
    },

    /// Validation error.
    #[error("validation error: {message}")]
    Validation {
        /// Error message.
        message: String,
    },
}

impl ParseError {
    /// Creates a missing collection error.
    pub fn missing_collection(name: impl Into<String>) -> Self {
        Self::MissingCollection { name: name.into() }
    }

    /// Creates an unsupported kind error.
    pub fn unsupported(context: impl Into<String>, kind: impl Into<String>) -> Self {
        Self::UnsupportedKind {
            context: context.into(),
            kind: kind.into(),
        }
    }

    /// Creates an invalid enum error.
    pub fn invalid_enum(context: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidEnum {
            context: context.into(),
            message: message.into(),
        }
    }

    /// Creates an invalid structure error.
    pub fn invalid_structure(context: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidStructure {
            context: context.into(),
            message: message.into(),
        }
    }
}

impl SchemaError {
    /// Creates an unresolved reference error.
    pub fn unresolved(context: impl Into<String>, name: impl Into<String>) -> Self {
        Self::UnresolvedReference {
            context: context.into(),
            name: name.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_display_names_context() {
        let err = ParseError::unsupported("SessionEvent.ratio", "number");
        assert_eq!(
            err.to_string(),
            "unsupported schema kind 'number' at 'SessionEvent.ratio'"
        );
    }

    #[test]
    fn test_missing_collection_display() {
        let err = ParseError::missing_collection("schemas");
        assert!(err.to_string().contains("'schemas'"));
    }

    #[test]
    fn test_schema_error_from_parse_error() {
        let err: SchemaError = ParseError::invalid_enum("A.b", "no values").into();
        assert!(matches!(err, SchemaError::Parse(ParseError::InvalidEnum { .. })));
    }
}
