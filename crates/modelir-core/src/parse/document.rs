use indexmap::IndexMap;
use serde::Deserialize;

use super::operation::PathItem;
use super::parameter::Parameter;
use super::request_body::RequestBody;
use super::response::Response;
use super::schema::Schema;
use crate::error::ParseError;

/// Info object describing the API.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Info {
    pub title: String,

    pub description: Option<String>,

    pub version: String,
}

/// Which document dialect the root version key declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecVersion {
    V2,
    V3,
}

/// Reusable v3 component definitions.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Components {
    #[serde(default)]
    pub schemas: IndexMap<String, Schema>,

    #[serde(default)]
    pub parameters: IndexMap<String, Parameter>,

    #[serde(default)]
    pub responses: IndexMap<String, Response>,

    #[serde(rename = "requestBodies", default)]
    pub request_bodies: IndexMap<String, RequestBody>,
}

/// A fully-dereferenced in-memory document, v2 (`swagger`) or v3
/// (`openapi`) root shape. Only same-document pointers remain.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Document {
    pub swagger: Option<String>,

    pub openapi: Option<String>,

    pub info: Option<Info>,

    #[serde(default)]
    pub paths: IndexMap<String, PathItem>,

    // v2 sections
    #[serde(default)]
    pub definitions: IndexMap<String, Schema>,

    #[serde(default)]
    pub parameters: IndexMap<String, Parameter>,

    #[serde(default)]
    pub responses: IndexMap<String, Response>,

    // v3 sections
    pub components: Option<Components>,
}

impl Document {
    /// Dispatch on the root version key.
    pub fn version(&self) -> Result<SpecVersion, ParseError> {
        if let Some(version) = &self.swagger {
            if version.starts_with("2.") || version == "2" {
                return Ok(SpecVersion::V2);
            }
            return Err(ParseError::UnsupportedVersion(version.clone()));
        }
        if let Some(version) = &self.openapi {
            if version.starts_with("3.") || version == "3" {
                return Ok(SpecVersion::V3);
            }
            return Err(ParseError::UnsupportedVersion(version.clone()));
        }
        Err(ParseError::UnsupportedVersion(
            "missing 'swagger' or 'openapi' root key".to_string(),
        ))
    }

    /// Named schema definitions in declaration order, whichever dialect
    /// section holds them.
    pub fn named_schemas(&self) -> impl Iterator<Item = (&String, &Schema)> {
        self.definitions
            .iter()
            .chain(self.components.iter().flat_map(|c| c.schemas.iter()))
    }
}
