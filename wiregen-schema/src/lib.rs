//! # wiregen Schema
//!
//! Message/schema document loader and model.
//!
//! This crate provides:
//! - JSON document parsing (plain or AsyncAPI `components` layout)
//! - The closed schema model used by code generation
//! - Reference and enum validation
//! - Identifier case conversion shared with the generator

pub mod error;
pub mod messages;
pub mod naming;
pub mod parser;
pub mod types;
pub mod validation;

pub use error::{ParseError, SchemaError};
pub use messages::MessageDef;
pub use naming::{to_pascal_case, to_snake_case};
pub use parser::{parse_document, parse_document_file};
pub use types::{Document, FieldMeta, FieldSchema, ObjectSchema, SchemaDef, SchemaNode};
pub use validation::validate_document;
