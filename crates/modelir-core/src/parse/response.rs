use indexmap::IndexMap;
use serde::Deserialize;

use super::media_type::MediaType;
use super::schema::Schema;

/// A response definition. v3 responses carry a `content` map; v2 responses
/// put the body schema directly on `schema`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Response {
    #[serde(rename = "$ref")]
    pub ref_path: Option<String>,

    pub description: Option<String>,

    #[serde(default)]
    pub content: IndexMap<String, MediaType>,

    pub schema: Option<Schema>,
}
