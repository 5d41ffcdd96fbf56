//! Document validation.
//!
//! Only what the generator needs to walk the document safely is checked:
//! every reference must name a schema in the document, and enum literals
//! must map to distinct variant identifiers.

use crate::error::SchemaError;
use crate::naming::to_pascal_case;
use crate::types::{Document, FieldSchema, SchemaNode};
use std::collections::HashSet;

/// Validates a loaded document.
///
/// # Arguments
/// * `document` - The document to validate
///
/// # Returns
/// Ok(()) if valid, or SchemaError describing the first issue found.
///
/// # Errors
/// Returns `SchemaError` if a reference is unresolved or an enum has
/// duplicate literals.
pub fn validate_document(document: &Document) -> Result<(), SchemaError> {
    for schema in &document.schemas {
        validate_field(document, &schema.schema, &schema.name)?;
    }
    for message in &document.messages {
        if let Some(payload) = &message.payload {
            validate_field(document, payload, &message.name)?;
        }
    }
    Ok(())
}

fn validate_field(
    document: &Document,
    field: &FieldSchema,
    context: &str,
) -> Result<(), SchemaError> {
    validate_node(document, &field.node, context)
}

fn validate_node(document: &Document, node: &SchemaNode, context: &str) -> Result<(), SchemaError> {
    match node {
        SchemaNode::Reference(name) => {
            if !document.has_schema(name) {
                return Err(SchemaError::unresolved(context, name));
            }
        }
        SchemaNode::StringEnum { values, .. } => validate_enum(values, context)?,
        SchemaNode::Array(item) => validate_node(document, item, &format!("{context}[]"))?,
        SchemaNode::Object(object) => {
            for (name, field) in &object.properties {
                validate_field(document, field, &format!("{context}.{name}"))?;
            }
        }
        SchemaNode::Integer | SchemaNode::StringPlain | SchemaNode::Boolean => {}
    }
    Ok(())
}

/// Validates enum literals.
fn validate_enum(values: &[String], context: &str) -> Result<(), SchemaError> {
    let mut seen_literals = HashSet::new();
    let mut seen_variants = HashSet::new();

    for value in values {
        if !seen_literals.insert(value.as_str()) {
            return Err(SchemaError::validation(format!(
                "Duplicate enum literal '{value}' at '{context}'"
            )));
        }

        let variant = to_pascal_case(value);
        if !seen_variants.insert(variant.clone()) {
            return Err(SchemaError::validation(format!(
                "Enum literal '{value}' at '{context}' collapses to duplicate variant '{variant}'"
            )));
        }
    }

    Ok(())
}
