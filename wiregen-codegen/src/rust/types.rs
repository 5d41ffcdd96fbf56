//! Type resolution.
//!
//! Maps one schema node to a [`TypeRef`], hoisting string enums into the
//! registry as a side effect.

use crate::declaration::{PrimitiveKind, TypeRef};
use crate::error::CodegenError;
use crate::registry::Registry;
use crate::rust::enums::hoist_enum;
use crate::rust::ident::declaration_name;
use std::fmt;
use wiregen_schema::SchemaNode;

/// Position of a node: the enclosing declaration and the field holding it.
#[derive(Debug, Clone, Copy)]
pub struct FieldContext<'a> {
    /// Enclosing declaration name.
    pub type_name: &'a str,
    /// Field name as authored.
    pub field_name: &'a str,
}

impl<'a> FieldContext<'a> {
    /// Creates a new context.
    #[must_use]
    pub const fn new(type_name: &'a str, field_name: &'a str) -> Self {
        Self {
            type_name,
            field_name,
        }
    }
}

impl fmt::Display for FieldContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.type_name, self.field_name)
    }
}

/// Resolves a schema node to a type reference.
///
/// Array items resolve in the same context as the array field, so an enum
/// inside an array is named after the field.
///
/// # Errors
/// Returns `CodegenError::UnsupportedSchema` for objects with properties
/// below the top level or references to unusable names, and `CodegenError::NameCollision` if a hoisted enum
/// clashes with an existing declaration.
pub fn resolve_type(
    node: &SchemaNode,
    context: &FieldContext<'_>,
    registry: &mut Registry,
) -> Result<TypeRef, CodegenError> {
    match node {
        SchemaNode::Reference(name) => Ok(TypeRef::Named(declaration_name(name)?)),
        SchemaNode::Integer => Ok(TypeRef::Primitive(PrimitiveKind::UnsignedInteger)),
        SchemaNode::StringPlain => Ok(TypeRef::Primitive(PrimitiveKind::String)),
        SchemaNode::StringEnum {
            values,
            description,
        } => hoist_enum(context, values, description.as_deref(), registry),
        SchemaNode::Boolean => Ok(TypeRef::Primitive(PrimitiveKind::Bool)),
        SchemaNode::Array(item) => {
            let element = resolve_type(item, context, registry)?;
            Ok(TypeRef::Collection(Box::new(element)))
        }
        SchemaNode::Object(object) if object.is_empty() => Ok(TypeRef::EmptyObject),
        SchemaNode::Object(_) => Err(CodegenError::unsupported(
            context.to_string(),
            "nested object with properties",
        )),
    }
}
