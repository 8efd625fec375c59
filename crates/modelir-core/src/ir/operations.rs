use indexmap::IndexMap;

use super::model::Model;

/// HTTP method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Options,
    Head,
    Trace,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Options => "OPTIONS",
            HttpMethod::Head => "HEAD",
            HttpMethod::Trace => "TRACE",
        }
    }
}

/// Where a parameter is carried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterLocation {
    Path,
    Query,
    Header,
    Cookie,
    FormData,
    Body,
}

/// A fully resolved API operation.
#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
    pub name: String,
    pub method: HttpMethod,
    pub path: String,
    pub tags: Vec<String>,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub deprecated: bool,
    pub parameters: Vec<OperationParameter>,
    /// v3 request body; v2 body parameters stay in `parameters` with a
    /// `Body` location.
    pub body: Option<OperationParameter>,
    /// Success responses (2xx and `default`), one per status code.
    pub results: Vec<OperationResponse>,
    /// Declared non-2xx responses.
    pub errors: Vec<OperationError>,
}

/// A resolved parameter or request body.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationParameter {
    /// Identifier-safe name; a quoted literal when the declared name
    /// needed escaping.
    pub name: String,
    /// Declared name in the source document.
    pub prop: String,
    pub location: ParameterLocation,
    pub model: Model,
}

/// A resolved response body for one status code.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationResponse {
    pub code: u16,
    pub description: Option<String>,
    pub model: Model,
}

/// A declared error response.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationError {
    pub code: u16,
    pub description: String,
}

/// Operations grouped by tag.
#[derive(Debug, Clone, PartialEq)]
pub struct Service {
    pub name: String,
    /// Indices into `ModelIr::operations`.
    pub operations: Vec<usize>,
}

/// Output of one resolution pass: the flat definition registry plus every
/// operation. This is the sole input contract of the emission layer.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelIr {
    /// Definition name -> top-level model, one entry per named schema.
    pub models: IndexMap<String, Model>,
    pub operations: Vec<Operation>,
    pub services: Vec<Service>,
}
