//! # wiregen
//!
//! Generates serde-ready Rust types from JSON message/schema documents.
//!
//! Every message whose payload is an object becomes a struct, every named
//! schema becomes a struct, and every inline string enumeration is hoisted
//! into a named enum. The result is written as one deterministic file.
//!
//! ## Quick Start
//!
//! ```ignore
//! use wiregen::codegen::{GeneratorConfig, run};
//!
//! let output = run(&GeneratorConfig::default())?;
//! println!("{} declarations", output.declaration_count);
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - Document parsing, the schema model and validation
//! - [`codegen`] - Declaration building, rendering and output writing

/// Document parsing and validation.
pub mod schema {
    pub use wiregen_schema::*;
}

/// Rust code generation from documents.
pub mod codegen {
    pub use wiregen_codegen::*;
}

pub use wiregen_codegen::{
    CodegenError, GeneratedOutput, GeneratorConfig, generate_from_file, generate_from_json, run,
};
pub use wiregen_schema::{Document, ParseError, SchemaError};

#[cfg(test)]
mod tests {
    use super::*;

    const AUTOMATION: &str = include_str!("../../schema/automation.json");

    #[test]
    fn test_bundled_document_generates() {
        let output = generate_from_json(AUTOMATION).expect("generate");

        assert!(output.declaration_count > 0);
        assert!(output.code.contains("pub struct Click {"));
        assert!(output.code.contains("pub enum ClickButton {"));
        assert!(output.code.contains("pub struct Ack {}"));
        assert!(output.code.contains("pub index: usize,"));
        assert!(output.code.contains("pub path: Option<Vec<Point>>,"));
        assert!(output.code.contains("pub details: Option<serde_json::Value>,"));
        assert!(output.code.contains("pub enum SessionStatusStatus {"));
        assert!(output.code.contains("pub struct Point {"));
        assert_eq!(output.skipped_messages, vec!["heartbeat".to_string()]);
    }

    #[test]
    fn test_bundled_document_is_valid_rust() {
        let output = generate_from_json(AUTOMATION).expect("generate");
        syn::parse_file(&output.code).expect("generated code should be valid Rust");
    }

    #[test]
    fn test_bundled_document_is_deterministic() {
        let first = generate_from_json(AUTOMATION).expect("first");
        let second = generate_from_json(AUTOMATION).expect("second");
        assert_eq!(first.code, second.code);
    }
}
