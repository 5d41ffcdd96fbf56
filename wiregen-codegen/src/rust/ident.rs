//! Rust identifier derivation.

use crate::error::CodegenError;
use wiregen_schema::{to_pascal_case, to_snake_case};

/// Keywords that can be used as raw identifiers.
const RUST_KEYWORDS: &[&str] = &[
    "as", "break", "const", "continue", "else", "enum", "extern", "false", "fn", "for", "if",
    "impl", "in", "let", "loop", "match", "mod", "move", "mut", "pub", "ref", "return", "static",
    "struct", "trait", "true", "type", "unsafe", "use", "where", "while", "async", "await", "dyn",
    "abstract", "become", "box", "do", "final", "gen", "macro", "override", "priv", "try",
    "typeof", "unsized", "virtual", "yield",
];

/// Keywords that cannot be raw identifiers.
const NON_RAW_KEYWORDS: &[&str] = &["crate", "self", "Self", "super"];

/// Type names the generated file relies on from the prelude or its imports.
const RESERVED_TYPE_NAMES: &[&str] = &[
    "Box",
    "Deserialize",
    "Option",
    "Result",
    "Serialize",
    "String",
    "Vec",
];

/// Escapes `ident` if it is a reserved word.
#[must_use]
pub fn escape_keyword(ident: &str) -> String {
    if NON_RAW_KEYWORDS.contains(&ident) {
        format!("{ident}_")
    } else if RUST_KEYWORDS.contains(&ident) {
        format!("r#{ident}")
    } else {
        ident.to_string()
    }
}

/// Derives the struct field identifier for a wire name.
///
/// Returns `None` if the name has no alphanumeric characters.
#[must_use]
pub fn field_ident(wire_name: &str) -> Option<String> {
    let ident = to_snake_case(wire_name);
    if ident.is_empty() {
        return None;
    }
    if ident.starts_with(|c: char| c.is_numeric()) {
        return Some(format!("_{ident}"));
    }
    Some(escape_keyword(&ident))
}

/// Derives the enum variant identifier for a literal.
///
/// Returns `None` if the literal has no alphanumeric characters.
#[must_use]
pub fn variant_ident(literal: &str) -> Option<String> {
    let ident = to_pascal_case(literal);
    if ident.is_empty() {
        return None;
    }
    if ident.starts_with(|c: char| c.is_numeric()) {
        return Some(format!("V{ident}"));
    }
    Some(escape_keyword(&ident))
}

/// Derives the declaration name for a message or schema name.
///
/// References go through the same conversion, so a `$ref` always names the
/// declaration of the schema it points at.
///
/// # Errors
/// Returns `CodegenError::UnsupportedSchema` if the name has no alphanumeric
/// characters or would shadow a type the generated file uses.
pub fn declaration_name(name: &str) -> Result<String, CodegenError> {
    let ident = to_pascal_case(name);
    if ident.is_empty() {
        return Err(CodegenError::unsupported(
            name,
            "declaration name without an identifier",
        ));
    }
    if RESERVED_TYPE_NAMES.contains(&ident.as_str()) {
        return Err(CodegenError::unsupported(
            name,
            format!("declaration name shadowing `{ident}`"),
        ));
    }
    if ident.starts_with(|c: char| c.is_numeric()) {
        return Ok(format!("_{ident}"));
    }
    Ok(escape_keyword(&ident))
}
