//! Generation driver.
//!
//! Walks every message and named schema of a [`Document`], accumulating
//! declarations in a [`Registry`], then assembles the output file.

use crate::declaration::{DeclarationBody, TypeRef};
use crate::error::CodegenError;
use crate::registry::Registry;
use crate::rust::ident::declaration_name;
use crate::rust::{emit_struct, render_declaration};
use std::collections::HashSet;
use wiregen_schema::Document;

/// Banner written at the top of every generated file.
pub const BANNER: &str = "// @generated by wiregen. DO NOT EDIT.\n";

/// Import required by the derives on generated declarations.
pub const SERDE_IMPORT: &str = "use serde::{Deserialize, Serialize};\n";

/// Result of one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedOutput {
    /// Complete Rust source.
    pub code: String,
    /// Number of declarations rendered, hoisted enums included.
    pub declaration_count: usize,
    /// Messages whose payload is not an object, in document order.
    pub skipped_messages: Vec<String>,
}

/// Main code generator.
pub struct Generator<'a> {
    document: &'a Document,
}

impl<'a> Generator<'a> {
    /// Creates a new generator for the given document.
    #[must_use]
    pub fn new(document: &'a Document) -> Self {
        Self { document }
    }

    /// Generates the complete output file.
    ///
    /// # Errors
    /// Returns `CodegenError` if a named schema is not an object, a nested
    /// shape is unsupported, or two declarations derive the same name.
    pub fn generate(&self) -> Result<GeneratedOutput, CodegenError> {
        let mut registry = Registry::new();
        let mut skipped_messages = Vec::new();

        for message in &self.document.messages {
            let Some(payload) = &message.payload else {
                tracing::debug!(
                    message = %message.name,
                    kind = %message.payload_kind,
                    "skipping message without object payload"
                );
                skipped_messages.push(message.name.clone());
                continue;
            };
            emit_struct(
                &declaration_name(&message.name)?,
                payload,
                message.doc(),
                &mut registry,
            )?;
        }

        for schema in &self.document.schemas {
            emit_struct(
                &declaration_name(&schema.name)?,
                &schema.schema,
                schema.schema.meta.description.as_deref(),
                &mut registry,
            )?;
        }

        reject_unsized_cycles(&registry)?;

        tracing::info!(
            declarations = registry.len(),
            messages = self.document.messages.len(),
            schemas = self.document.schemas.len(),
            skipped = skipped_messages.len(),
            "generated declarations"
        );

        Ok(GeneratedOutput {
            code: assemble(&registry),
            declaration_count: registry.len(),
            skipped_messages,
        })
    }
}

/// Fails if a struct contains itself by value, directly or through other
/// structs. Only a `Vec` breaks such a cycle.
fn reject_unsized_cycles(registry: &Registry) -> Result<(), CodegenError> {
    let mut finished = HashSet::new();
    for declaration in registry.all() {
        visit_by_value(registry, &declaration.name, &mut Vec::new(), &mut finished)?;
    }
    Ok(())
}

fn visit_by_value<'r>(
    registry: &'r Registry,
    name: &'r str,
    path: &mut Vec<&'r str>,
    finished: &mut HashSet<&'r str>,
) -> Result<(), CodegenError> {
    if finished.contains(name) {
        return Ok(());
    }
    let Some(DeclarationBody::Struct(fields)) = registry.get(name).map(|d| &d.body) else {
        finished.insert(name);
        return Ok(());
    };

    path.push(name);
    for field in fields {
        let TypeRef::Named(target) = &field.type_ref else {
            continue;
        };
        if path.contains(&target.as_str()) {
            return Err(CodegenError::unsupported(
                format!("{name}.{}", field.wire_name),
                format!("recursive reference to {target} outside an array"),
            ));
        }
        visit_by_value(registry, target, path, finished)?;
    }
    path.pop();
    finished.insert(name);
    Ok(())
}

/// Renders every registered declaration, in name order, into one file.
#[must_use]
pub fn assemble(registry: &Registry) -> String {
    let mut output = String::new();
    output.push_str(BANNER);

    if registry.is_empty() {
        return output;
    }

    output.push('\n');
    output.push_str(SERDE_IMPORT);
    for declaration in registry.all() {
        output.push('\n');
        output.push_str(&render_declaration(declaration));
    }

    output
}
