//! Declaration model produced by the schema walk.

/// Primitive kinds the generator maps scalars to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    /// Unsigned whole number.
    UnsignedInteger,
    /// String.
    String,
    /// Boolean.
    Bool,
}

impl PrimitiveKind {
    /// Returns the Rust type for this primitive.
    #[must_use]
    pub const fn rust_type(&self) -> &'static str {
        match self {
            Self::UnsignedInteger => "usize",
            Self::String => "String",
            Self::Bool => "bool",
        }
    }
}

/// Reference to a type from a field position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeRef {
    /// Primitive type.
    Primitive(PrimitiveKind),
    /// Named declaration.
    Named(String),
    /// Homogeneous collection.
    Collection(Box<TypeRef>),
    /// Object without properties, rendered inline.
    EmptyObject,
}

impl TypeRef {
    /// Returns the Rust type expression.
    #[must_use]
    pub fn rust_type(&self) -> String {
        match self {
            Self::Primitive(kind) => kind.rust_type().to_string(),
            Self::Named(name) => name.clone(),
            Self::Collection(element) => format!("Vec<{}>", element.rust_type()),
            Self::EmptyObject => "serde_json::Value".to_string(),
        }
    }
}

/// One field of a struct declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDeclaration {
    /// Name used on the wire.
    pub wire_name: String,
    /// Rust identifier.
    pub ident: String,
    /// Field type.
    pub type_ref: TypeRef,
    /// Whether the field must be present.
    pub required: bool,
    /// Doc comment lines.
    pub docs: Vec<String>,
}

impl FieldDeclaration {
    /// Returns the Rust type, wrapped in `Option` when the field may be absent.
    #[must_use]
    pub fn rust_type(&self) -> String {
        let inner = self.type_ref.rust_type();
        if self.required {
            inner
        } else {
            format!("Option<{inner}>")
        }
    }

    /// Returns true if serde needs an explicit rename to keep the wire name.
    #[must_use]
    pub fn needs_rename(&self) -> bool {
        self.ident != self.wire_name
    }
}

/// One variant of an enum declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variant {
    /// Rust identifier.
    pub ident: String,
    /// Value used on the wire.
    pub wire_value: String,
}

impl Variant {
    /// Returns true if `rename_all = "snake_case"` does not already produce the wire value.
    #[must_use]
    pub fn needs_rename(&self) -> bool {
        serde_snake_case(&self.ident) != self.wire_value
    }
}

/// Mirrors serde's `rename_all = "snake_case"` for variant identifiers.
fn serde_snake_case(ident: &str) -> String {
    let mut result = String::with_capacity(ident.len() + 4);
    for (i, c) in ident.char_indices() {
        if i > 0 && c.is_uppercase() {
            result.push('_');
        }
        result.push(c.to_ascii_lowercase());
    }
    result
}

/// Body of a declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeclarationBody {
    /// Record with fields, ascending by wire name.
    Struct(Vec<FieldDeclaration>),
    /// Enumeration; the first variant is the default.
    Enum(Vec<Variant>),
}

/// A named type emitted into the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedDeclaration {
    /// Globally unique name.
    pub name: String,
    /// Declaration body.
    pub body: DeclarationBody,
    /// Doc comment.
    pub doc: Option<String>,
}

impl NamedDeclaration {
    /// Creates a struct declaration.
    #[must_use]
    pub fn new_struct(name: String, fields: Vec<FieldDeclaration>, doc: Option<String>) -> Self {
        Self {
            name,
            body: DeclarationBody::Struct(fields),
            doc,
        }
    }

    /// Creates an enum declaration.
    #[must_use]
    pub fn new_enum(name: String, variants: Vec<Variant>, doc: Option<String>) -> Self {
        Self {
            name,
            body: DeclarationBody::Enum(variants),
            doc,
        }
    }

    /// Returns the kind name used in logs.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self.body {
            DeclarationBody::Struct(_) => "struct",
            DeclarationBody::Enum(_) => "enum",
        }
    }
}
