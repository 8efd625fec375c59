use std::collections::HashSet;

use indexmap::IndexMap;

use crate::error::ResolveError;
use crate::ir::model::{CompositionForm, Model, ModelKind};
use crate::parse::schema::{Discriminator, DiscriminatorObject, Schema};

use super::default::default_literal;
use super::discriminator::discriminant_for;
use super::model::{apply_descriptor, collect_nested_enumerations, ResolveContext};
use super::names::escape_name;
use super::type_map;

pub fn find_composition(schema: &Schema) -> Option<CompositionForm> {
    if !schema.all_of.is_empty() {
        Some(CompositionForm::AllOf)
    } else if !schema.any_of.is_empty() {
        Some(CompositionForm::AnyOf)
    } else if !schema.one_of.is_empty() {
        Some(CompositionForm::OneOf)
    } else {
        None
    }
}

pub fn build_composition(
    context: &ResolveContext,
    model: Model,
    schema: &Schema,
    form: CompositionForm,
) -> Result<Model, ResolveError> {
    match form {
        CompositionForm::AllOf => merge_all_of(context, model, schema),
        CompositionForm::AnyOf => build_union(context, model, schema, &schema.any_of, form),
        CompositionForm::OneOf => build_union(context, model, schema, &schema.one_of, form),
    }
}

/// Intersection merge of `allOf` branches.
///
/// A later branch redeclaring a property overrides its shape but keeps the
/// first declared position. Required-ness is applied in a second pass over
/// the fully merged shape, because a property may be declared in one branch
/// and required by another (or by the composing schema itself).
fn merge_all_of(
    context: &ResolveContext,
    mut model: Model,
    schema: &Schema,
) -> Result<Model, ResolveError> {
    let mut merged: IndexMap<String, Model> = IndexMap::new();
    let mut nested_enumerations = Vec::new();
    let mut required: Vec<String> = schema.required.clone();
    let mut visited: HashSet<String> = HashSet::new();

    for branch in &schema.all_of {
        merge_branch(
            context,
            branch,
            &mut model,
            &mut merged,
            &mut nested_enumerations,
            &mut required,
            &mut visited,
        )?;
    }
    // the composing schema's own properties participate last
    merge_properties(
        context,
        schema,
        &mut model,
        &mut merged,
        &mut nested_enumerations,
    )?;

    for (raw_name, property) in merged.iter_mut() {
        if required.iter().any(|r| r == raw_name) {
            property.is_required = true;
        }
    }

    model.kind = ModelKind::Composition {
        form: CompositionForm::AllOf,
        properties: merged.into_values().collect(),
        nested_enumerations,
    };
    model.default_literal = default_literal(schema, &model);
    Ok(model)
}

fn merge_branch(
    context: &ResolveContext,
    branch: &Schema,
    model: &mut Model,
    merged: &mut IndexMap<String, Model>,
    nested_enumerations: &mut Vec<Model>,
    required: &mut Vec<String>,
    visited: &mut HashSet<String>,
) -> Result<(), ResolveError> {
    if let Some(pointer) = &branch.ref_path {
        // reference cycles contribute their shape once
        if !visited.insert(pointer.clone()) {
            return Ok(());
        }
        model.pointers.insert(pointer.clone());
        let target = context.pointers().schema(pointer)?;
        return merge_branch_schema(
            context,
            target,
            model,
            merged,
            nested_enumerations,
            required,
            visited,
        );
    }
    merge_branch_schema(
        context,
        branch,
        model,
        merged,
        nested_enumerations,
        required,
        visited,
    )
}

fn merge_branch_schema(
    context: &ResolveContext,
    branch: &Schema,
    model: &mut Model,
    merged: &mut IndexMap<String, Model>,
    nested_enumerations: &mut Vec<Model>,
    required: &mut Vec<String>,
    visited: &mut HashSet<String>,
) -> Result<(), ResolveError> {
    required.extend(branch.required.iter().cloned());
    for nested in &branch.all_of {
        merge_branch(
            context,
            nested,
            model,
            merged,
            nested_enumerations,
            required,
            visited,
        )?;
    }
    merge_properties(context, branch, model, merged, nested_enumerations)
}

fn merge_properties(
    context: &ResolveContext,
    schema: &Schema,
    model: &mut Model,
    merged: &mut IndexMap<String, Model>,
    nested_enumerations: &mut Vec<Model>,
) -> Result<(), ResolveError> {
    for (raw_name, property_schema) in &schema.properties {
        let is_required = schema.required.iter().any(|r| r == raw_name);
        let property = context.build_property(raw_name, property_schema, is_required)?;
        model.imports.extend(property.imports.iter().cloned());
        model.pointers.extend(property.pointers.iter().cloned());
        collect_nested_enumerations(&property, nested_enumerations);
        // insert on an existing key replaces the value in place
        merged.insert(raw_name.clone(), property);
    }
    Ok(())
}

/// Tagged union of `anyOf`/`oneOf` branches, each built independently. A
/// declared discriminator narrows every referenced branch to its literal
/// discriminant.
fn build_union(
    context: &ResolveContext,
    mut model: Model,
    schema: &Schema,
    branches: &[Schema],
    form: CompositionForm,
) -> Result<Model, ResolveError> {
    let discriminator = match &schema.discriminator {
        Some(Discriminator::Object(object)) => Some(object),
        _ => None,
    };
    let mut properties = Vec::new();
    let mut nested_enumerations = Vec::new();
    for branch in branches {
        let built = match (discriminator, &branch.ref_path) {
            (Some(object), Some(pointer)) => narrow_branch(context, object, pointer)?,
            _ => context.build_model("", branch, false)?,
        };
        model.imports.extend(built.imports.iter().cloned());
        model.pointers.extend(built.pointers.iter().cloned());
        collect_nested_enumerations(&built, &mut nested_enumerations);
        properties.push(built);
    }
    model.kind = ModelKind::Composition {
        form,
        properties,
        nested_enumerations,
    };
    model.default_literal = default_literal(schema, &model);
    Ok(model)
}

/// Expand one referenced union branch a single level and override its
/// discriminator property with the literal discriminant. Branches whose
/// target is itself a reference or composition stay plain references, which
/// keeps narrowing from recursing through reference cycles.
fn narrow_branch(
    context: &ResolveContext,
    discriminator: &DiscriminatorObject,
    pointer: &str,
) -> Result<Model, ResolveError> {
    let target = context.pointers().schema(pointer)?;
    let name = pointer.rsplit('/').next().unwrap_or(pointer);
    if target.ref_path.is_none() && find_composition(target).is_none() {
        let mut expanded = context.build_model(name, target, false)?;
        if let ModelKind::Record { properties, .. } = &mut expanded.kind {
            expanded.pointers.insert(pointer.to_string());
            let narrowed = discriminant_property(
                &discriminator.property_name,
                &discriminant_for(&discriminator.mapping, pointer, name),
            );
            match properties.iter_mut().find(|p| p.name == narrowed.name) {
                Some(slot) => *slot = narrowed,
                None => properties.insert(0, narrowed),
            }
            return Ok(expanded);
        }
    }

    let mut reference = Model::new("");
    apply_descriptor(
        &mut reference,
        type_map::type_descriptor(pointer, None, context.config()),
    );
    reference.kind = ModelKind::Reference;
    reference.pointers.insert(pointer.to_string());
    Ok(reference)
}

/// Single-literal-value property consumers can switch on.
fn discriminant_property(property_name: &str, discriminant: &str) -> Model {
    let mut property = Model::new(escape_name(property_name));
    property.kind = ModelKind::Reference;
    property.base = format!("'{discriminant}'");
    property.type_token = "string".to_string();
    property.is_required = true;
    property
}
