pub mod document;
pub mod media_type;
pub mod operation;
pub mod parameter;
pub mod request_body;
pub mod response;
pub mod schema;

use crate::error::ParseError;
use document::Document;

/// Parse a document from YAML.
pub fn from_yaml(input: &str) -> Result<Document, ParseError> {
    let document: Document = serde_yaml_ng::from_str(input)?;
    document.version()?;
    Ok(document)
}

/// Parse a document from JSON.
pub fn from_json(input: &str) -> Result<Document, ParseError> {
    let document: Document = serde_json::from_str(input)?;
    document.version()?;
    Ok(document)
}
