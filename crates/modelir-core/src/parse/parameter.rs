use serde::Deserialize;

use super::schema::Schema;

/// Parameter location. `body` and `formData` are v2-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ParameterLocation {
    Query,
    Header,
    Path,
    Cookie,
    Body,
    FormData,
}

/// An API parameter. v3 parameters carry a `schema`; v2 parameters may
/// instead declare `type`/`format`/`items`/`enum` inline.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Parameter {
    #[serde(rename = "$ref")]
    pub ref_path: Option<String>,

    pub name: Option<String>,

    #[serde(rename = "in")]
    pub location: Option<ParameterLocation>,

    pub description: Option<String>,

    #[serde(default)]
    pub required: bool,

    pub deprecated: Option<bool>,

    pub schema: Option<Schema>,

    // v2 inline shape
    #[serde(rename = "type")]
    pub param_type: Option<String>,

    pub format: Option<String>,

    pub items: Option<Schema>,

    #[serde(rename = "enum", default)]
    pub enum_values: Vec<serde_json::Value>,

    #[serde(rename = "x-enum-varnames", default)]
    pub enum_var_names: Vec<String>,

    #[serde(rename = "x-enum-descriptions", default)]
    pub enum_descriptions: Vec<String>,

    #[serde(rename = "default")]
    pub default_value: Option<serde_json::Value>,

    #[serde(rename = "x-nullable")]
    pub x_nullable: Option<bool>,
}
