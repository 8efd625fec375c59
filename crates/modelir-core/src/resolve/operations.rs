use indexmap::IndexMap;

use crate::error::ResolveError;
use crate::ir::model::Model;
use crate::ir::operations::{
    HttpMethod, Operation, OperationError, OperationParameter, OperationResponse,
    ParameterLocation, Service,
};
use crate::parse::media_type::MediaType;
use crate::parse::operation::{Operation as RawOperation, PathItem};
use crate::parse::parameter::{Parameter, ParameterLocation as RawLocation};
use crate::parse::request_body::RequestBody;
use crate::parse::response::Response;
use crate::parse::schema::{Items, Schema, TypeSet};

use super::model::ResolveContext;
use super::names::{escape_name, operation_name};

/// Build every operation declared under `paths`, in path declaration order
/// with a fixed method order per path.
pub fn build_operations(context: &ResolveContext) -> Result<Vec<Operation>, ResolveError> {
    let mut operations = Vec::new();
    for (path, item) in &context.document().paths {
        let methods: [(HttpMethod, &Option<RawOperation>); 8] = [
            (HttpMethod::Get, &item.get),
            (HttpMethod::Post, &item.post),
            (HttpMethod::Put, &item.put),
            (HttpMethod::Delete, &item.delete),
            (HttpMethod::Patch, &item.patch),
            (HttpMethod::Options, &item.options),
            (HttpMethod::Head, &item.head),
            (HttpMethod::Trace, &item.trace),
        ];
        for (method, raw) in methods {
            if let Some(raw) = raw {
                operations.push(build_operation(context, method, path, item, raw)?);
            }
        }
    }
    Ok(operations)
}

/// Group operations by tag, in first-encounter order of the tags, with
/// untagged operations collected under `default`.
pub fn group_into_services(operations: &[Operation]) -> Vec<Service> {
    let mut groups: IndexMap<String, Vec<usize>> = IndexMap::new();
    for (index, operation) in operations.iter().enumerate() {
        if operation.tags.is_empty() {
            groups.entry("default".to_string()).or_default().push(index);
        } else {
            for tag in &operation.tags {
                groups.entry(tag.clone()).or_default().push(index);
            }
        }
    }
    groups
        .into_iter()
        .map(|(name, operations)| Service { name, operations })
        .collect()
}

fn build_operation(
    context: &ResolveContext,
    method: HttpMethod,
    path: &str,
    item: &PathItem,
    raw: &RawOperation,
) -> Result<Operation, ResolveError> {
    let name = operation_name(method.as_str(), path, raw.operation_id.as_deref());

    let mut parameters = Vec::new();
    let mut body = None;
    // path-level parameters apply to every method under the path
    for parameter in item.parameters.iter().chain(raw.parameters.iter()) {
        let resolved = build_parameter(context, parameter)?;
        if resolved.location == ParameterLocation::Body {
            body = Some(resolved);
        } else {
            parameters.push(resolved);
        }
    }
    if let Some(request_body) = &raw.request_body {
        body = Some(build_request_body(context, request_body)?);
    }

    let (results, errors) = build_responses(context, &raw.responses)?;

    Ok(Operation {
        name,
        method,
        path: path.to_string(),
        tags: raw.tags.clone(),
        summary: raw.summary.clone(),
        description: raw.description.clone(),
        deprecated: raw.deprecated.unwrap_or(false),
        parameters,
        body,
        results,
        errors,
    })
}

fn build_parameter(
    context: &ResolveContext,
    parameter: &Parameter,
) -> Result<OperationParameter, ResolveError> {
    let parameter = match &parameter.ref_path {
        Some(pointer) => context.pointers().parameter(pointer)?,
        None => parameter,
    };
    let prop = parameter.name.clone().unwrap_or_default();
    let mut model = match &parameter.schema {
        Some(schema) => context.build_model("", schema, false)?,
        None => context.build_model("", &inline_schema(parameter), false)?,
    };
    model.is_required = parameter.required;
    model.deprecated |= parameter.deprecated.unwrap_or(false);
    Ok(OperationParameter {
        name: escape_name(&prop),
        prop,
        location: map_location(parameter.location),
        model,
    })
}

/// v2 parameters may declare their shape inline instead of under `schema`.
fn inline_schema(parameter: &Parameter) -> Schema {
    Schema {
        schema_type: parameter.param_type.clone().map(TypeSet::Single),
        format: parameter.format.clone(),
        description: parameter.description.clone(),
        items: parameter
            .items
            .clone()
            .map(|items| Items::One(Box::new(items))),
        enum_values: parameter.enum_values.clone(),
        enum_var_names: parameter.enum_var_names.clone(),
        enum_descriptions: parameter.enum_descriptions.clone(),
        default_value: parameter.default_value.clone(),
        x_nullable: parameter.x_nullable,
        ..Schema::default()
    }
}

fn map_location(location: Option<RawLocation>) -> ParameterLocation {
    match location {
        Some(RawLocation::Path) => ParameterLocation::Path,
        Some(RawLocation::Header) => ParameterLocation::Header,
        Some(RawLocation::Cookie) => ParameterLocation::Cookie,
        Some(RawLocation::Body) => ParameterLocation::Body,
        Some(RawLocation::FormData) => ParameterLocation::FormData,
        Some(RawLocation::Query) | None => ParameterLocation::Query,
    }
}

fn build_request_body(
    context: &ResolveContext,
    request_body: &RequestBody,
) -> Result<OperationParameter, ResolveError> {
    let request_body = match &request_body.ref_path {
        Some(pointer) => context.pointers().request_body(pointer)?,
        None => request_body,
    };
    let mut model = match select_media(&request_body.content).and_then(|m| m.schema.as_ref()) {
        Some(schema) => context.build_model("", schema, false)?,
        None => Model::new(""),
    };
    model.is_required = request_body.required;
    Ok(OperationParameter {
        name: "requestBody".to_string(),
        prop: "requestBody".to_string(),
        location: ParameterLocation::Body,
        model,
    })
}

fn build_responses(
    context: &ResolveContext,
    responses: &IndexMap<String, Response>,
) -> Result<(Vec<OperationResponse>, Vec<OperationError>), ResolveError> {
    let mut results = Vec::new();
    let mut errors = Vec::new();
    for (code_key, response) in responses {
        let response = match &response.ref_path {
            Some(pointer) => context.pointers().response(pointer)?,
            None => response,
        };
        let code = if code_key == "default" {
            // an explicitly declared 200 wins over the catch-all
            if responses.contains_key("200") {
                continue;
            }
            200
        } else {
            match code_key.parse::<u16>() {
                Ok(code) => code,
                Err(_) => {
                    log::debug!("skipping non-numeric response code {code_key}");
                    continue;
                }
            }
        };
        if (200..300).contains(&code) {
            let model = if code == 204 {
                void_model()
            } else {
                response_model(context, response)?
            };
            results.push(OperationResponse {
                code,
                description: response.description.clone(),
                model,
            });
        } else {
            errors.push(OperationError {
                code,
                description: response.description.clone().unwrap_or_default(),
            });
        }
    }
    Ok((results, errors))
}

fn response_model(context: &ResolveContext, response: &Response) -> Result<Model, ResolveError> {
    if let Some(schema) = &response.schema {
        return context.build_model("", schema, false);
    }
    if let Some(schema) = select_media(&response.content).and_then(|m| m.schema.as_ref()) {
        return context.build_model("", schema, false);
    }
    Ok(void_model())
}

/// Prefer `application/json`, then any json-ish media type, then the first
/// declared one.
fn select_media(content: &IndexMap<String, MediaType>) -> Option<&MediaType> {
    content
        .get("application/json")
        .or_else(|| {
            content
                .iter()
                .find(|(key, _)| key.contains("json"))
                .map(|(_, media)| media)
        })
        .or_else(|| content.values().next())
}

fn void_model() -> Model {
    let mut model = Model::new("");
    model.base = "void".to_string();
    model.type_token = "void".to_string();
    model
}
