use indexmap::IndexMap;
use serde::Deserialize;

use super::media_type::MediaType;

/// A v3 request body definition.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct RequestBody {
    #[serde(rename = "$ref")]
    pub ref_path: Option<String>,

    pub description: Option<String>,

    #[serde(default)]
    pub content: IndexMap<String, MediaType>,

    #[serde(default)]
    pub required: bool,
}
