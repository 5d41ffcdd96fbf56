//! Enum hoisting and rendering.

use crate::declaration::{NamedDeclaration, TypeRef, Variant};
use crate::error::CodegenError;
use crate::registry::Registry;
use crate::rust::ident::variant_ident;
use crate::rust::types::FieldContext;
use crate::rust::{DERIVES, push_doc};
use std::collections::HashSet;
use wiregen_schema::{to_pascal_case, to_snake_case};

/// Hoists an inline string enumeration into a named enum declaration.
///
/// The enum is named after the enclosing type and the field holding it, so
/// `SessionEvent.direction` becomes `SessionEventDirection`.
///
/// # Errors
/// Returns `CodegenError::UnsupportedSchema` if a literal has no usable
/// identifier or two literals map to the same variant, and
/// `CodegenError::NameCollision` if the derived name is already taken.
pub fn hoist_enum(
    context: &FieldContext<'_>,
    values: &[String],
    description: Option<&str>,
    registry: &mut Registry,
) -> Result<TypeRef, CodegenError> {
    let name = format!(
        "{}{}",
        context.type_name,
        to_pascal_case(context.field_name)
    );

    let mut seen = HashSet::with_capacity(values.len());
    let mut variants = Vec::with_capacity(values.len());
    for literal in values {
        let ident = variant_ident(literal).ok_or_else(|| {
            CodegenError::unsupported(
                context.to_string(),
                format!("enum literal {literal:?} without an identifier"),
            )
        })?;
        if !seen.insert(ident.clone()) {
            return Err(CodegenError::unsupported(
                context.to_string(),
                format!("enum literal {literal:?} duplicating variant {ident}"),
            ));
        }
        variants.push(Variant {
            ident,
            wire_value: to_snake_case(literal),
        });
    }

    registry.register(NamedDeclaration::new_enum(
        name.clone(),
        variants,
        description.map(str::to_string),
    ))?;
    Ok(TypeRef::Named(name))
}

/// Renders an enum declaration. The first variant is the default.
#[must_use]
pub fn render_enum(name: &str, variants: &[Variant], doc: Option<&str>) -> String {
    let mut output = String::new();

    if let Some(doc) = doc {
        push_doc(&mut output, "", doc.lines());
    }
    output.push_str(DERIVES);
    output.push_str("#[serde(rename_all = \"snake_case\")]\n");
    output.push_str(&format!("pub enum {name} {{\n"));

    for (i, variant) in variants.iter().enumerate() {
        if i == 0 {
            output.push_str("    #[default]\n");
        }
        if variant.needs_rename() {
            output.push_str(&format!("    #[serde(rename = {:?})]\n", variant.wire_value));
        }
        output.push_str(&format!("    {},\n", variant.ident));
    }

    output.push_str("}\n");
    output
}
