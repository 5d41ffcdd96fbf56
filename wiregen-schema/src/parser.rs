//! Message/schema document parser.
//!
//! The JSON text is deserialized into a permissive raw tree first, then
//! lowered into the closed [`SchemaNode`] model. Lowering is where kinds
//! outside the supported subset are rejected, each error naming the
//! enclosing type and field.

use crate::error::ParseError;
use crate::messages::MessageDef;
use crate::types::{Document, FieldMeta, FieldSchema, ObjectSchema, SchemaDef, SchemaNode};
use serde::Deserialize;
use serde_json::{Number, Value};
use std::collections::BTreeMap;

/// Parses a message/schema document from a JSON string.
///
/// The `messages` and `schemas` collections may sit at the top level or
/// under `components`, as in AsyncAPI documents.
///
/// # Arguments
/// * `json` - Document content
///
/// # Returns
/// Parsed document or parse error.
///
/// # Errors
/// Returns `ParseError` if the JSON is malformed, a collection is missing, or
/// a schema uses a kind outside the supported subset.
pub fn parse_document(json: &str) -> Result<Document, ParseError> {
    let raw: RawDocument = serde_json::from_str(json)?;
    let (messages, schemas) = raw.into_collections()?;

    let mut document = Document::new();

    for (name, raw_schema) in &schemas {
        let schema = lower_field(raw_schema, name)?;
        document.add_schema(SchemaDef::new(name.clone(), schema));
    }

    for (name, raw_message) in &messages {
        document.add_message(lower_message(name, raw_message)?);
    }

    tracing::debug!(
        messages = document.messages.len(),
        schemas = document.schemas.len(),
        "loaded document"
    );

    Ok(document)
}

/// Parses a message/schema document from a file.
///
/// # Errors
/// Returns `ParseError` if reading or parsing fails.
pub fn parse_document_file(path: &std::path::Path) -> Result<Document, ParseError> {
    let json = std::fs::read_to_string(path)?;
    parse_document(&json)
}

#[derive(Debug, Deserialize)]
struct RawDocument {
    messages: Option<BTreeMap<String, RawMessage>>,
    schemas: Option<BTreeMap<String, RawSchema>>,
    components: Option<RawComponents>,
}

#[derive(Debug, Deserialize)]
struct RawComponents {
    messages: Option<BTreeMap<String, RawMessage>>,
    schemas: Option<BTreeMap<String, RawSchema>>,
}

type Collections = (BTreeMap<String, RawMessage>, BTreeMap<String, RawSchema>);

impl RawDocument {
    fn into_collections(self) -> Result<Collections, ParseError> {
        let (mut messages, mut schemas) = (self.messages, self.schemas);
        if let Some(components) = self.components {
            messages = messages.or(components.messages);
            schemas = schemas.or(components.schemas);
        }

        let messages = messages.ok_or_else(|| ParseError::missing_collection("messages"))?;
        let schemas = schemas.ok_or_else(|| ParseError::missing_collection("schemas"))?;
        Ok((messages, schemas))
    }
}

#[derive(Debug, Deserialize)]
struct RawMessage {
    summary: Option<String>,
    description: Option<String>,
    payload: Option<RawSchema>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSchema {
    #[serde(rename = "type", alias = "kind")]
    kind: Option<Value>,
    #[serde(rename = "$ref", alias = "reference")]
    reference: Option<String>,
    #[serde(rename = "enum")]
    enum_values: Option<Vec<Value>>,
    items: Option<Box<RawSchema>>,
    #[serde(default)]
    properties: BTreeMap<String, RawSchema>,
    #[serde(default)]
    required: Vec<String>,
    description: Option<String>,
    format: Option<String>,
    minimum: Option<Number>,
    maximum: Option<Number>,
    default: Option<Value>,
    example: Option<Value>,
    one_of: Option<Vec<Value>>,
    any_of: Option<Vec<Value>>,
    all_of: Option<Vec<Value>>,
}

impl RawSchema {
    fn is_union(&self) -> bool {
        self.one_of.is_some() || self.any_of.is_some() || self.all_of.is_some()
    }

    /// Returns the top-level kind label, used for skipped payloads.
    fn kind_label(&self) -> String {
        if self.reference.is_some() {
            return "$ref".to_string();
        }
        if self.is_union() {
            return "union".to_string();
        }
        match &self.kind {
            Some(Value::String(kind)) => kind.clone(),
            Some(Value::Array(_)) => "union".to_string(),
            Some(other) => other.to_string(),
            None => "untyped".to_string(),
        }
    }

    fn meta(&self) -> FieldMeta {
        FieldMeta {
            description: self.description.clone(),
            format: self.format.clone(),
            minimum: self.minimum.clone(),
            maximum: self.maximum.clone(),
            default: self.default.clone(),
            example: self.example.clone(),
        }
    }
}

/// Strips a JSON pointer down to the referenced schema name.
fn reference_name(reference: &str) -> &str {
    reference.rsplit('/').next().unwrap_or(reference)
}

fn lower_message(name: &str, raw: &RawMessage) -> Result<MessageDef, ParseError> {
    let mut message = match &raw.payload {
        Some(payload) if payload.kind_label() == "object" => {
            MessageDef::new(name.to_string(), lower_field(payload, name)?)
        }
        Some(payload) => MessageDef::without_payload(name.to_string(), payload.kind_label()),
        None => MessageDef::without_payload(name.to_string(), "missing"),
    };
    message.summary = raw.summary.clone();
    message.description = raw.description.clone();
    Ok(message)
}

fn lower_field(raw: &RawSchema, context: &str) -> Result<FieldSchema, ParseError> {
    Ok(FieldSchema::new(lower_node(raw, context)?).with_meta(raw.meta()))
}

fn lower_node(raw: &RawSchema, context: &str) -> Result<SchemaNode, ParseError> {
    if raw.is_union() {
        return Err(ParseError::unsupported(context, "union"));
    }
    if let Some(reference) = &raw.reference {
        return Ok(SchemaNode::Reference(reference_name(reference).to_string()));
    }

    let kind = raw.kind_label();
    if raw.enum_values.is_some() && kind != "string" {
        return Err(ParseError::unsupported(context, format!("{kind} enum")));
    }

    match kind.as_str() {
        "integer" => Ok(SchemaNode::Integer),
        "boolean" => Ok(SchemaNode::Boolean),
        "string" => match &raw.enum_values {
            Some(values) => lower_enum(values, raw.description.clone(), context),
            None => Ok(SchemaNode::StringPlain),
        },
        "array" => {
            let items = raw.items.as_deref().ok_or_else(|| {
                ParseError::invalid_structure(context, "array schema without 'items'")
            })?;
            let item = lower_node(items, &format!("{context}[]"))?;
            Ok(SchemaNode::Array(Box::new(item)))
        }
        "object" => lower_object(raw, context).map(SchemaNode::Object),
        other => Err(ParseError::unsupported(context, other)),
    }
}

fn lower_enum(
    values: &[Value],
    description: Option<String>,
    context: &str,
) -> Result<SchemaNode, ParseError> {
    if values.is_empty() {
        return Err(ParseError::invalid_enum(context, "enum has no values"));
    }

    let values = values
        .iter()
        .map(|value| match value {
            Value::String(s) if !s.is_empty() => Ok(s.clone()),
            Value::String(_) => Err(ParseError::invalid_enum(context, "empty enum literal")),
            other => Err(ParseError::invalid_enum(
                context,
                format!("non-string enum literal {other}"),
            )),
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(SchemaNode::StringEnum {
        values,
        description,
    })
}

fn lower_object(raw: &RawSchema, context: &str) -> Result<ObjectSchema, ParseError> {
    let mut object = ObjectSchema::default();

    for (field, raw_field) in &raw.properties {
        let schema = lower_field(raw_field, &format!("{context}.{field}"))?;
        object.properties.insert(field.clone(), schema);
    }
    object.required = raw.required.iter().cloned().collect();

    Ok(object)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(json: &str) -> Document {
        parse_document(json).expect("Failed to parse")
    }

    #[test]
    fn test_parse_minimal_document() {
        let document = doc(r#"{"messages": {}, "schemas": {}}"#);
        assert!(document.messages.is_empty());
        assert!(document.schemas.is_empty());
    }

    #[test]
    fn test_parse_components_layout() {
        let document = doc(
            r#"{
                "asyncapi": "2.6.0",
                "components": {
                    "messages": {},
                    "schemas": {"Point": {"type": "object"}}
                }
            }"#,
        );
        assert!(document.has_schema("Point"));
    }

    #[test]
    fn test_missing_collection() {
        let err = parse_document(r#"{"messages": {}}"#).unwrap_err();
        assert!(matches!(err, ParseError::MissingCollection { ref name } if name == "schemas"));

        let err = parse_document(r#"{"schemas": {}}"#).unwrap_err();
        assert!(matches!(err, ParseError::MissingCollection { ref name } if name == "messages"));
    }

    #[test]
    fn test_malformed_json() {
        let err = parse_document("{").unwrap_err();
        assert!(matches!(err, ParseError::Json(_)));
    }

    #[test]
    fn test_parse_object_schema() {
        let document = doc(
            r##"{
                "messages": {},
                "schemas": {
                    "SessionEvent": {
                        "type": "object",
                        "description": "A session event",
                        "required": ["id"],
                        "properties": {
                            "id": {"type": "string", "format": "uuid"},
                            "count": {"type": "integer", "minimum": 0, "maximum": 10},
                            "flags": {"type": "array", "items": {"type": "boolean"}},
                            "direction": {"type": "string", "enum": ["up", "down"]},
                            "owner": {"$ref": "#/components/schemas/User"}
                        }
                    }
                }
            }"##,
        );

        let schema = document.get_schema("SessionEvent").expect("schema");
        assert_eq!(schema.schema.meta.description.as_deref(), Some("A session event"));
        let SchemaNode::Object(object) = &schema.schema.node else {
            panic!("expected object");
        };

        let names: Vec<_> = object.properties.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["count", "direction", "flags", "id", "owner"]);
        assert!(object.is_required("id"));
        assert!(!object.is_required("count"));

        assert_eq!(object.properties["count"].node, SchemaNode::Integer);
        assert_eq!(object.properties["count"].meta.minimum, Some(Number::from(0)));
        assert_eq!(object.properties["id"].meta.format.as_deref(), Some("uuid"));
        assert_eq!(
            object.properties["flags"].node,
            SchemaNode::Array(Box::new(SchemaNode::Boolean))
        );
        assert_eq!(
            object.properties["direction"].node,
            SchemaNode::StringEnum {
                values: vec!["up".to_string(), "down".to_string()],
                description: None,
            }
        );
        assert_eq!(
            object.properties["owner"].node,
            SchemaNode::Reference("User".to_string())
        );
    }

    #[test]
    fn test_kind_and_reference_aliases() {
        let document = doc(
            r#"{
                "messages": {},
                "schemas": {
                    "A": {"kind": "object", "properties": {"b": {"reference": "B"}}}
                }
            }"#,
        );
        let SchemaNode::Object(object) = &document.schemas[0].schema.node else {
            panic!("expected object");
        };
        assert_eq!(object.properties["b"].node, SchemaNode::Reference("B".to_string()));
    }

    #[test]
    fn test_unsupported_number_names_context() {
        let err = parse_document(
            r#"{
                "messages": {},
                "schemas": {"Init": {"type": "object", "properties": {"temperature": {"type": "number"}}}}
            }"#,
        )
        .unwrap_err();

        match err {
            ParseError::UnsupportedKind { context, kind } => {
                assert_eq!(context, "Init.temperature");
                assert_eq!(kind, "number");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_unsupported_unions() {
        for field in [
            r#"{"type": ["string", "null"]}"#,
            r#"{"oneOf": [{"type": "string"}, {"type": "integer"}]}"#,
            r#"{"anyOf": [{"type": "string"}]}"#,
        ] {
            let json = format!(
                r#"{{"messages": {{}}, "schemas": {{"A": {{"type": "object", "properties": {{"f": {field}}}}}}}}}"#
            );
            let err = parse_document(&json).unwrap_err();
            assert!(
                matches!(err, ParseError::UnsupportedKind { ref kind, .. } if kind == "union"),
                "{field}: {err}"
            );
        }
    }

    #[test]
    fn test_untyped_and_null_are_unsupported() {
        let err = parse_document(
            r#"{"messages": {}, "schemas": {"A": {"type": "object", "properties": {"f": {}}}}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ParseError::UnsupportedKind { ref kind, .. } if kind == "untyped"));

        let err = parse_document(
            r#"{"messages": {}, "schemas": {"A": {"type": "object", "properties": {"f": {"type": "null"}}}}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ParseError::UnsupportedKind { ref kind, .. } if kind == "null"));
    }

    #[test]
    fn test_array_item_context() {
        let err = parse_document(
            r#"{"messages": {}, "schemas": {"A": {"type": "object", "properties": {"f": {"type": "array", "items": {"type": "number"}}}}}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ParseError::UnsupportedKind { ref context, .. } if context == "A.f[]"));
    }

    #[test]
    fn test_array_without_items() {
        let err = parse_document(
            r#"{"messages": {}, "schemas": {"A": {"type": "object", "properties": {"f": {"type": "array"}}}}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ParseError::InvalidStructure { .. }));
    }

    #[test]
    fn test_invalid_enums() {
        let cases = [
            (r#"{"type": "string", "enum": []}"#, "enum has no values"),
            (r#"{"type": "string", "enum": ["a", 1]}"#, "non-string enum literal 1"),
            (r#"{"type": "string", "enum": [""]}"#, "empty enum literal"),
        ];
        for (field, expected) in cases {
            let json = format!(
                r#"{{"messages": {{}}, "schemas": {{"A": {{"type": "object", "properties": {{"f": {field}}}}}}}}}"#
            );
            match parse_document(&json).unwrap_err() {
                ParseError::InvalidEnum { context, message } => {
                    assert_eq!(context, "A.f");
                    assert_eq!(message, expected);
                }
                other => panic!("unexpected error: {other}"),
            }
        }
    }

    #[test]
    fn test_integer_enum_is_unsupported() {
        let err = parse_document(
            r#"{"messages": {}, "schemas": {"A": {"type": "object", "properties": {"f": {"type": "integer", "enum": [1, 2]}}}}}"#,
        )
        .unwrap_err();
        assert!(
            matches!(err, ParseError::UnsupportedKind { ref kind, .. } if kind == "integer enum")
        );
    }

    #[test]
    fn test_enum_description_is_kept() {
        let document = doc(
            r#"{"messages": {}, "schemas": {"A": {"type": "object", "properties": {
                "dir": {"type": "string", "enum": ["up"], "description": "Scroll direction"}
            }}}}"#,
        );
        let SchemaNode::Object(object) = &document.schemas[0].schema.node else {
            panic!("expected object");
        };
        match &object.properties["dir"].node {
            SchemaNode::StringEnum { description, .. } => {
                assert_eq!(description.as_deref(), Some("Scroll direction"));
            }
            other => panic!("unexpected node: {other:?}"),
        }
    }

    #[test]
    fn test_messages_non_object_payloads_are_not_lowered() {
        let document = doc(
            r##"{
                "messages": {
                    "ping": {"payload": {"type": "string"}},
                    "ratio": {"payload": {"type": "number"}},
                    "alias": {"payload": {"$ref": "#/components/schemas/A"}},
                    "empty": {"summary": "No payload"},
                    "click": {"summary": "Click", "payload": {"type": "object", "properties": {"x": {"type": "integer"}}}}
                },
                "schemas": {}
            }"##,
        );

        let kinds: Vec<_> = document
            .messages
            .iter()
            .map(|m| (m.name.as_str(), m.payload_kind.as_str(), m.has_object_payload()))
            .collect();
        assert_eq!(
            kinds,
            vec![
                ("alias", "$ref", false),
                ("click", "object", true),
                ("empty", "missing", false),
                ("ping", "string", false),
                ("ratio", "number", false),
            ]
        );
        assert_eq!(document.messages[1].doc(), Some("Click"));
    }

    #[test]
    fn test_reference_name() {
        assert_eq!(reference_name("#/components/schemas/User"), "User");
        assert_eq!(reference_name("User"), "User");
    }

    #[test]
    fn test_parse_document_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("doc.json");
        std::fs::write(&path, r#"{"messages": {}, "schemas": {}}"#).expect("write");

        let document = parse_document_file(&path).expect("Failed to parse");
        assert!(document.schemas.is_empty());

        let err = parse_document_file(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, ParseError::Io(_)));
    }
}
