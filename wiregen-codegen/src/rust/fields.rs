//! Field declaration building and rendering.

use crate::declaration::FieldDeclaration;
use crate::error::CodegenError;
use crate::registry::Registry;
use crate::rust::ident::field_ident;
use crate::rust::push_doc;
use crate::rust::types::{FieldContext, resolve_type};
use wiregen_schema::{FieldMeta, FieldSchema};

/// Builds the declaration for one field of `type_name`.
///
/// # Errors
/// Returns `CodegenError::UnsupportedSchema` if the field name yields no
/// identifier or its schema cannot be resolved inline.
pub fn emit_field(
    type_name: &str,
    field_name: &str,
    required: bool,
    schema: &FieldSchema,
    registry: &mut Registry,
) -> Result<FieldDeclaration, CodegenError> {
    let context = FieldContext::new(type_name, field_name);
    let ident = field_ident(field_name).ok_or_else(|| {
        CodegenError::unsupported(context.to_string(), "field name without an identifier")
    })?;
    let type_ref = resolve_type(&schema.node, &context, registry)?;

    Ok(FieldDeclaration {
        wire_name: field_name.to_string(),
        ident,
        type_ref,
        required,
        docs: field_docs(&schema.meta),
    })
}

/// Builds doc lines from field metadata.
///
/// Order is fixed: description, format, minimum, maximum, default, example.
#[must_use]
pub fn field_docs(meta: &FieldMeta) -> Vec<String> {
    let mut docs = Vec::new();

    if let Some(description) = &meta.description {
        docs.extend(description.lines().map(|line| line.trim_end().to_string()));
    }
    if let Some(format) = &meta.format {
        docs.push(format!("Format: {format}"));
    }
    if let Some(minimum) = &meta.minimum {
        docs.push(format!("Minimum: {minimum}"));
    }
    if let Some(maximum) = &meta.maximum {
        docs.push(format!("Maximum: {maximum}"));
    }
    if let Some(default) = &meta.default {
        docs.push(format!("Default: {default}"));
    }
    if let Some(example) = &meta.example {
        docs.push(format!("Example: {example}"));
    }

    docs
}

/// Appends one rendered field to `output`.
pub fn render_field(output: &mut String, field: &FieldDeclaration) {
    push_doc(output, "    ", field.docs.iter().map(String::as_str));
    if field.needs_rename() {
        output.push_str(&format!("    #[serde(rename = {:?})]\n", field.wire_name));
    }
    output.push_str(&format!("    pub {}: {},\n", field.ident, field.rust_type()));
}
