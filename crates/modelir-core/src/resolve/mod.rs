pub mod composition;
pub mod default;
pub mod discriminator;
pub mod enums;
pub mod model;
pub mod names;
pub mod operations;
pub mod pointer;
pub mod type_map;

use indexmap::IndexMap;

use crate::config::ResolveConfig;
use crate::error::ResolveError;
use crate::ir::operations::ModelIr;
use crate::parse::document::Document;

use model::ResolveContext;

/// Resolve a parsed document into the model IR: one flat registry entry
/// per named definition, plus every operation grouped into services.
pub fn resolve_document(
    document: &Document,
    config: &ResolveConfig,
) -> Result<ModelIr, ResolveError> {
    let context = ResolveContext::new(document, config);

    // Named definitions are built in a single flat pass; nested resolution
    // never re-enters this loop, which is what keeps reference cycles safe.
    let mut models = IndexMap::new();
    for (name, schema) in document.named_schemas() {
        let model = context.build_model(name, schema, true)?;
        models.insert(name.clone(), model);
    }

    let operations = operations::build_operations(&context)?;
    let services = operations::group_into_services(&operations);

    Ok(ModelIr {
        models,
        operations,
        services,
    })
}
