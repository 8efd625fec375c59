//! Resolves an OpenAPI v2/v3 document into a normalized, language-agnostic
//! model IR describing every named schema and every operation's parameters
//! and responses.
//!
//! The pipeline is one-directional: a raw [`parse::document::Document`] is
//! walked once by [`resolve::resolve_document`], which dereferences
//! same-document pointers, merges compositions, narrows discriminated
//! unions, canonicalizes enums, and derives default literals. The resulting
//! [`ir::ModelIr`] is the sole input contract of any downstream emission
//! layer.

pub mod config;
pub mod error;
pub mod ir;
pub mod parse;
pub mod resolve;

pub use config::ResolveConfig;
pub use error::{ParseError, ResolveError};
pub use ir::ModelIr;
pub use resolve::resolve_document;
