use std::collections::BTreeSet;

use serde_json::Value;

/// Sentinel base/type token for absent or unrecognized types.
pub const UNKNOWN: &str = "unknown";

/// One resolved schema, property, parameter, or response.
///
/// The variant-specific payload lives in [`ModelKind`]; the fields here are
/// meaningful for every variant.
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    /// Declared identifier, or empty for anonymous/inline nodes. Property
    /// names that are not bare identifiers arrive pre-escaped as quoted
    /// literals.
    pub name: String,

    pub kind: ModelKind,

    /// Rendering-facing base token: a primitive name, a referenced
    /// definition name, or a literal for `Constant` models.
    pub base: String,

    /// Full type token, e.g. `Link<string>` for templated references.
    pub type_token: String,

    /// Single generic parameter, when the base token is templated.
    pub template: Option<String>,

    pub description: Option<String>,

    pub format: Option<String>,

    /// Definition names the emission layer must import for this model,
    /// including everything contributed by nested models.
    pub imports: Vec<String>,

    /// Every `$ref` this model transitively depends on. Ordered so that
    /// two resolutions of the same document compare equal.
    pub pointers: BTreeSet<String>,

    pub is_definition: bool,
    pub is_required: bool,
    pub is_read_only: bool,
    pub is_nullable: bool,
    pub deprecated: bool,

    /// Pre-rendered default literal, when the schema declared a default
    /// that could be serialized.
    pub default_literal: Option<String>,
}

/// Exactly one export kind per model; each variant carries only the fields
/// that are valid for it.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelKind {
    /// A `$ref` to a named definition, never expanded inline.
    Reference,

    Enumeration {
        enumerators: Vec<Enumerator>,
    },

    /// `link` is absent when the element type came from a dereferenced
    /// `$ref` descriptor rather than an inline schema.
    Array {
        link: Option<Box<Model>>,
    },

    Dictionary {
        link: Option<Box<Model>>,
    },

    /// For `AllOf` the properties are the merged member set; for
    /// `AnyOf`/`OneOf` they are the ordered union branches.
    Composition {
        form: CompositionForm,
        properties: Vec<Model>,
        nested_enumerations: Vec<Model>,
    },

    Record {
        properties: Vec<Model>,
        nested_enumerations: Vec<Model>,
    },

    /// A single-value `const` schema; the literal is the base token.
    Constant,

    Primitive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompositionForm {
    AllOf,
    AnyOf,
    OneOf,
}

impl Model {
    /// A fresh anonymous model: the `unknown` primitive until a builder
    /// rule fires.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ModelKind::Primitive,
            base: UNKNOWN.to_string(),
            type_token: UNKNOWN.to_string(),
            template: None,
            description: None,
            format: None,
            imports: Vec::new(),
            pointers: BTreeSet::new(),
            is_definition: false,
            is_required: false,
            is_read_only: false,
            is_nullable: false,
            deprecated: false,
            default_literal: None,
        }
    }

    /// Child models for record and composition kinds.
    pub fn properties(&self) -> &[Model] {
        match &self.kind {
            ModelKind::Record { properties, .. } | ModelKind::Composition { properties, .. } => {
                properties
            }
            _ => &[],
        }
    }

    pub fn enumerators(&self) -> &[Enumerator] {
        match &self.kind {
            ModelKind::Enumeration { enumerators } => enumerators,
            _ => &[],
        }
    }

    /// Nested enumeration models promoted for standalone registration
    /// downstream.
    pub fn nested_enumerations(&self) -> &[Model] {
        match &self.kind {
            ModelKind::Record {
                nested_enumerations,
                ..
            }
            | ModelKind::Composition {
                nested_enumerations,
                ..
            } => nested_enumerations,
            _ => &[],
        }
    }

    /// Element-type model for array and dictionary kinds.
    pub fn link(&self) -> Option<&Model> {
        match &self.kind {
            ModelKind::Array { link } | ModelKind::Dictionary { link } => link.as_deref(),
            _ => None,
        }
    }
}

/// One canonical entry extracted from an `enum` keyword.
#[derive(Debug, Clone, PartialEq)]
pub struct Enumerator {
    /// String or number; other value types are dropped during extraction.
    pub value: Value,

    pub description: Option<String>,

    pub var_name: Option<String>,
}

impl Enumerator {
    /// Renderable literal for this enumerator value.
    pub fn literal(&self) -> String {
        match &self.value {
            Value::String(s) => format!("'{s}'"),
            other => other.to_string(),
        }
    }
}
