use serde::Deserialize;

use super::schema::Schema;

/// A media type object inside a `content` map.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MediaType {
    pub schema: Option<Schema>,
}
