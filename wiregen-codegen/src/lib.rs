//! # wiregen Codegen
//!
//! Rust type declaration generation from message/schema documents.
//!
//! This crate provides:
//! - Struct generation for object payloads and named schemas
//! - Enum hoisting for inline string enumerations
//! - Deterministic output assembly
//! - Atomic output file replacement

pub mod config;
pub mod declaration;
pub mod error;
pub mod generator;
pub mod output;
pub mod registry;
pub mod rust;

pub use config::GeneratorConfig;
pub use declaration::{DeclarationBody, FieldDeclaration, NamedDeclaration, TypeRef, Variant};
pub use error::CodegenError;
pub use generator::{GeneratedOutput, Generator};
pub use output::write_output;
pub use registry::Registry;

/// Generates Rust code from a message/schema document string.
///
/// # Arguments
/// * `json` - Document content
///
/// # Returns
/// Generated code and a summary of the run.
///
/// # Errors
/// Returns `CodegenError` if parsing, validation, or generation fails.
pub fn generate_from_json(json: &str) -> Result<GeneratedOutput, CodegenError> {
    let document = wiregen_schema::parse_document(json)?;
    wiregen_schema::validate_document(&document)?;
    Generator::new(&document).generate()
}

/// Generates Rust code from a message/schema document file.
///
/// # Errors
/// Returns `CodegenError` if reading, parsing, validation, or generation fails.
pub fn generate_from_file(path: &std::path::Path) -> Result<GeneratedOutput, CodegenError> {
    let json = std::fs::read_to_string(path)?;
    generate_from_json(&json)
}

/// Generates code for the configured input and writes it to the configured
/// output.
///
/// Nothing is written unless generation succeeds.
///
/// # Errors
/// Returns `CodegenError` if generation or the write fails.
pub fn run(config: &GeneratorConfig) -> Result<GeneratedOutput, CodegenError> {
    let output = generate_from_file(config.input())?;
    write_output(config.output(), &output.code)?;
    tracing::info!(
        output = %config.output().display(),
        declarations = output.declaration_count,
        "generated types"
    );
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLICK: &str = r#"{
        "components": {
            "messages": {
                "click": {
                    "payload": {
                        "type": "object",
                        "properties": {
                            "x": {"type": "integer"},
                            "y": {"type": "integer"},
                            "button": {"type": "string", "enum": ["left", "right", "middle"]}
                        },
                        "required": ["x", "y"]
                    }
                }
            },
            "schemas": {}
        }
    }"#;

    #[test]
    fn test_generate_from_json() {
        let output = generate_from_json(CLICK).expect("generate");
        assert_eq!(output.declaration_count, 2);
        assert!(output.code.contains("pub button: Option<ClickButton>,"));
        assert!(output.code.contains("pub enum ClickButton {"));
    }

    #[test]
    fn test_unresolved_reference_fails() {
        let err = generate_from_json(
            r##"{"messages": {"drag": {"payload": {"type": "object",
                "properties": {"from": {"$ref": "#/components/schemas/Point"}}}}},
                "schemas": {}}"##,
        )
        .unwrap_err();
        assert!(matches!(err, CodegenError::Schema(_)));
        assert!(err.to_string().contains("Point"));
    }

    #[test]
    fn test_run_writes_output() {
        let dir = tempfile::tempdir().expect("tempdir");
        let input = dir.path().join("automation.json");
        std::fs::write(&input, CLICK).expect("write input");

        let config = GeneratorConfig::default()
            .with_input(&input)
            .with_output(dir.path().join("generated").join("types.rs"));
        let output = run(&config).expect("run");

        let written = std::fs::read_to_string(config.output()).expect("read output");
        assert_eq!(written, output.code);
    }

    #[test]
    fn test_run_failure_leaves_output_untouched() {
        let dir = tempfile::tempdir().expect("tempdir");
        let input = dir.path().join("automation.json");
        std::fs::write(&input, r#"{"messages": {"bad": {"payload": {"type": "object",
            "properties": {"ratio": {"type": "number"}}}}}, "schemas": {}}"#)
            .expect("write input");
        let target = dir.path().join("types.rs");
        std::fs::write(&target, "// previous\n").expect("write previous");

        let config = GeneratorConfig::new(&input, &target);
        assert!(run(&config).is_err());
        assert_eq!(std::fs::read_to_string(&target).expect("read"), "// previous\n");
    }
}
