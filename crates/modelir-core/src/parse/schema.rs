use indexmap::IndexMap;
use serde::Deserialize;

/// The `type` keyword can be a single type or an array of types.
///
/// Values are kept as plain strings so documents using vendor or v2-only
/// types (`file`, `int`, ...) still deserialize.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TypeSet {
    Single(String),
    Multiple(Vec<String>),
}

impl TypeSet {
    pub fn contains(&self, expected: &str) -> bool {
        match self {
            TypeSet::Single(t) => t == expected,
            TypeSet::Multiple(types) => types.iter().any(|t| t == expected),
        }
    }
}

/// `items` can be a single schema or a keyless array of item schemas.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Items {
    Many(Vec<Schema>),
    One(Box<Schema>),
}

/// `additionalProperties` can be a boolean or a schema.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AdditionalProperties {
    Bool(bool),
    Schema(Box<Schema>),
}

/// Discriminator for polymorphic schemas: a bare property name in v2,
/// an object with an optional explicit mapping in v3.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Discriminator {
    Property(String),
    Object(DiscriminatorObject),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DiscriminatorObject {
    #[serde(rename = "propertyName")]
    pub property_name: String,

    #[serde(default)]
    pub mapping: IndexMap<String, String>,
}

/// A raw schema node as parsed from the document. Immutable input; the
/// resolver never mutates these.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Schema {
    #[serde(rename = "$ref")]
    pub ref_path: Option<String>,

    #[serde(rename = "type")]
    pub schema_type: Option<TypeSet>,

    pub format: Option<String>,

    pub title: Option<String>,

    pub description: Option<String>,

    #[serde(rename = "default")]
    pub default_value: Option<serde_json::Value>,

    // Dialect-specific nullability markers; read them only through
    // `is_nullable` so nothing downstream branches on the dialect.
    pub nullable: Option<bool>,

    #[serde(rename = "x-nullable")]
    pub x_nullable: Option<bool>,

    // Object shape
    #[serde(default)]
    pub properties: IndexMap<String, Schema>,

    #[serde(default)]
    pub required: Vec<String>,

    #[serde(rename = "additionalProperties")]
    pub additional_properties: Option<AdditionalProperties>,

    // Array shape
    pub items: Option<Items>,

    // Composition
    #[serde(rename = "allOf", default)]
    pub all_of: Vec<Schema>,

    #[serde(rename = "anyOf", default)]
    pub any_of: Vec<Schema>,

    #[serde(rename = "oneOf", default)]
    pub one_of: Vec<Schema>,

    pub discriminator: Option<Discriminator>,

    // Enum values plus positional vendor metadata
    #[serde(rename = "enum", default)]
    pub enum_values: Vec<serde_json::Value>,

    #[serde(rename = "x-enum-varnames", default)]
    pub enum_var_names: Vec<String>,

    #[serde(rename = "x-enum-descriptions", default)]
    pub enum_descriptions: Vec<String>,

    #[serde(rename = "const")]
    pub const_value: Option<serde_json::Value>,

    #[serde(rename = "readOnly")]
    pub read_only: Option<bool>,

    pub deprecated: Option<bool>,

    // Constraints, carried for the emission layer
    pub minimum: Option<f64>,
    pub maximum: Option<f64>,

    #[serde(rename = "minLength")]
    pub min_length: Option<u64>,
    #[serde(rename = "maxLength")]
    pub max_length: Option<u64>,

    pub pattern: Option<String>,

    #[serde(rename = "minItems")]
    pub min_items: Option<u64>,
    #[serde(rename = "maxItems")]
    pub max_items: Option<u64>,

    #[serde(rename = "uniqueItems")]
    pub unique_items: Option<bool>,
}

impl Schema {
    /// Single normalized nullability flag (`x-nullable` in v2, `nullable`
    /// in v3).
    pub fn is_nullable(&self) -> bool {
        self.nullable == Some(true) || self.x_nullable == Some(true)
    }

    pub fn has_type(&self, expected: &str) -> bool {
        self.schema_type
            .as_ref()
            .is_some_and(|t| t.contains(expected))
    }
}
