//! Schema type definitions.
//!
//! This module contains the data structures representing the supported
//! schema dialect: scalar kinds, string enumerations, arrays, objects and
//! references to named schemas.

use crate::messages::MessageDef;
use serde_json::{Number, Value};
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Complete message/schema document.
#[derive(Debug, Clone, Default)]
pub struct Document {
    /// Message definitions, ascending by name.
    pub messages: Vec<MessageDef>,
    /// Named schema definitions, ascending by name.
    pub schemas: Vec<SchemaDef>,
    /// Schema lookup map (built while loading).
    schema_map: HashMap<String, usize>,
}

impl Document {
    /// Creates a new empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a message definition to the document.
    pub fn add_message(&mut self, message: MessageDef) {
        self.messages.push(message);
    }

    /// Adds a named schema to the document.
    pub fn add_schema(&mut self, schema: SchemaDef) {
        let index = self.schemas.len();
        self.schema_map.insert(schema.name.clone(), index);
        self.schemas.push(schema);
    }

    /// Looks up a named schema.
    #[must_use]
    pub fn get_schema(&self, name: &str) -> Option<&SchemaDef> {
        self.schema_map.get(name).map(|&idx| &self.schemas[idx])
    }

    /// Returns true if a schema with the given name exists.
    #[must_use]
    pub fn has_schema(&self, name: &str) -> bool {
        self.schema_map.contains_key(name)
    }
}

/// Named schema definition.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaDef {
    /// Schema name as authored.
    pub name: String,
    /// Schema body.
    pub schema: FieldSchema,
}

impl SchemaDef {
    /// Creates a new named schema.
    #[must_use]
    pub fn new(name: String, schema: FieldSchema) -> Self {
        Self { name, schema }
    }
}

/// One node of the supported schema dialect.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaNode {
    /// Reference to a named schema.
    Reference(String),
    /// Whole number.
    Integer,
    /// Free-form string.
    StringPlain,
    /// String restricted to a list of literals.
    StringEnum {
        /// Literals in authored order.
        values: Vec<String>,
        /// Description carried by the enum node.
        description: Option<String>,
    },
    /// Boolean.
    Boolean,
    /// Homogeneous array.
    Array(Box<SchemaNode>),
    /// Object with named properties.
    Object(ObjectSchema),
}

impl SchemaNode {
    /// Returns the kind name used in diagnostics.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Reference(_) => "reference",
            Self::Integer => "integer",
            Self::StringPlain => "string",
            Self::StringEnum { .. } => "string enum",
            Self::Boolean => "boolean",
            Self::Array(_) => "array",
            Self::Object(_) => "object",
        }
    }

    /// Returns true if this is an object node.
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, Self::Object(_))
    }
}

/// Object schema: properties plus the set of required property names.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectSchema {
    /// Properties, ascending by field name.
    pub properties: BTreeMap<String, FieldSchema>,
    /// Required field names.
    pub required: BTreeSet<String>,
}

impl ObjectSchema {
    /// Returns true if the object declares no properties.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Returns true if the named field is required.
    #[must_use]
    pub fn is_required(&self, field: &str) -> bool {
        self.required.contains(field)
    }
}

/// A schema node plus its display-only metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSchema {
    /// The schema node.
    pub node: SchemaNode,
    /// Documentation metadata.
    pub meta: FieldMeta,
}

impl FieldSchema {
    /// Creates a field schema without metadata.
    #[must_use]
    pub fn new(node: SchemaNode) -> Self {
        Self {
            node,
            meta: FieldMeta::default(),
        }
    }

    /// Attaches metadata.
    #[must_use]
    pub fn with_meta(mut self, meta: FieldMeta) -> Self {
        self.meta = meta;
        self
    }
}

/// Documentation metadata. Never affects typing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldMeta {
    /// Free-form description.
    pub description: Option<String>,
    /// Format hint (`uuid`, `date-time`, ...).
    pub format: Option<String>,
    /// Inclusive lower bound.
    pub minimum: Option<Number>,
    /// Inclusive upper bound.
    pub maximum: Option<Number>,
    /// Default value.
    pub default: Option<Value>,
    /// Example value.
    pub example: Option<Value>,
}

impl FieldMeta {
    /// Returns true if no metadata is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.description.is_none()
            && self.format.is_none()
            && self.minimum.is_none()
            && self.maximum.is_none()
            && self.default.is_none()
            && self.example.is_none()
    }
}
