//! Error types for code generation.

use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Document loading error.
    #[error("document parse error: {0}")]
    Parse(#[from] wiregen_schema::ParseError),

    /// Document validation error.
    #[error("schema error: {0}")]
    Schema(#[from] wiregen_schema::SchemaError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Atomic replacement of the output file failed.
    #[error("failed to persist output: {0}")]
    Persist(#[from] tempfile::PersistError),

    /// A top-level message payload or named schema is not an object.
    #[error("top-level schema '{name}' must be an object, found {kind}")]
    RootKind {
        /// Declaration name.
        name: String,
        /// Kind found instead.
        kind: String,
    },

    /// Schema shape the generator does not support at this position.
    #[error("unsupported {kind} at '{context}'")]
    UnsupportedSchema {
        /// Enclosing type and field.
        context: String,
        /// Offending shape.
        kind: String,
    },

    /// Two different declarations derived the same name.
    #[error("declaration name collision: '{name}' registered twice with different content")]
    NameCollision {
        /// Declaration name.
        name: String,
    },
}

impl CodegenError {
    /// Creates a root kind error.
    pub fn root_kind(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self::RootKind {
            name: name.into(),
            kind: kind.into(),
        }
    }

    /// Creates an unsupported schema error.
    pub fn unsupported(context: impl Into<String>, kind: impl Into<String>) -> Self {
        Self::UnsupportedSchema {
            context: context.into(),
            kind: kind.into(),
        }
    }
}
