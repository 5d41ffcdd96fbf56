//! Rust code generation modules.
//!
//! The walk side (`types`, `fields`, `structs`, `enums`) turns schema nodes
//! into declarations; the render side turns each declaration into source
//! text.

pub mod enums;
pub mod fields;
pub mod ident;
pub mod structs;
pub mod types;

pub use enums::hoist_enum;
pub use fields::emit_field;
pub use structs::emit_struct;
pub use types::{FieldContext, resolve_type};

use crate::declaration::{DeclarationBody, NamedDeclaration};

/// Derives carried by every generated declaration.
pub const DERIVES: &str = "#[derive(Clone, Debug, Default, Deserialize, Serialize)]\n";

/// Renders one declaration as Rust source, including its doc comment.
#[must_use]
pub fn render_declaration(declaration: &NamedDeclaration) -> String {
    match &declaration.body {
        DeclarationBody::Struct(fields) => {
            structs::render_struct(&declaration.name, fields, declaration.doc.as_deref())
        }
        DeclarationBody::Enum(variants) => {
            enums::render_enum(&declaration.name, variants, declaration.doc.as_deref())
        }
    }
}

/// Writes `text` as `///` lines, one per line of input.
///
/// Entries are split again on `\n`, `\r\n` and lone `\r`, so no line break
/// can end the comment early.
pub(crate) fn push_doc<'a>(
    output: &mut String,
    indent: &str,
    lines: impl IntoIterator<Item = &'a str>,
) {
    for entry in lines {
        let entry = entry.replace("\r\n", "\n");
        for line in entry.split(['\n', '\r']) {
            let line = line.trim_end();
            if line.is_empty() {
                output.push_str(&format!("{indent}///\n"));
            } else {
                output.push_str(&format!("{indent}/// {line}\n"));
            }
        }
    }
}
