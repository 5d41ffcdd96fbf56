//! Struct emission and rendering.

use crate::declaration::{FieldDeclaration, NamedDeclaration};
use crate::error::CodegenError;
use crate::registry::Registry;
use crate::rust::fields::{emit_field, render_field};
use crate::rust::{DERIVES, push_doc};
use std::collections::HashMap;
use wiregen_schema::{FieldSchema, SchemaNode};

/// Registers a struct declaration for a top-level object schema.
///
/// Fields are emitted in ascending wire-name order. Enums found in field
/// positions are hoisted into the registry before the struct itself.
///
/// # Errors
/// Returns `CodegenError::RootKind` if the schema is not an object, and
/// `CodegenError::UnsupportedSchema` if two wire names map to one identifier
/// or a field cannot be resolved.
pub fn emit_struct(
    name: &str,
    schema: &FieldSchema,
    doc: Option<&str>,
    registry: &mut Registry,
) -> Result<(), CodegenError> {
    let SchemaNode::Object(object) = &schema.node else {
        return Err(CodegenError::root_kind(name, schema.node.kind_name()));
    };

    let mut fields: Vec<FieldDeclaration> = Vec::with_capacity(object.properties.len());
    let mut idents: HashMap<String, &str> = HashMap::new();

    for (field_name, field_schema) in &object.properties {
        let field = emit_field(
            name,
            field_name,
            object.is_required(field_name),
            field_schema,
            registry,
        )?;
        if let Some(previous) = idents.insert(field.ident.clone(), field_name) {
            return Err(CodegenError::unsupported(
                format!("{name}.{field_name}"),
                format!("field name colliding with '{previous}'"),
            ));
        }
        fields.push(field);
    }

    registry.register(NamedDeclaration::new_struct(
        name.to_string(),
        fields,
        doc.map(str::to_string),
    ))
}

/// Renders a struct declaration.
#[must_use]
pub fn render_struct(name: &str, fields: &[FieldDeclaration], doc: Option<&str>) -> String {
    let mut output = String::new();

    if let Some(doc) = doc {
        push_doc(&mut output, "", doc.lines());
    }
    output.push_str(DERIVES);
    output.push_str("#[serde(default)]\n");

    if fields.is_empty() {
        output.push_str(&format!("pub struct {name} {{}}\n"));
        return output;
    }

    output.push_str(&format!("pub struct {name} {{\n"));
    for field in fields {
        render_field(&mut output, field);
    }
    output.push_str("}\n");
    output
}
