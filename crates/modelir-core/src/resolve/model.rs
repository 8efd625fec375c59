use serde_json::Value;

use crate::config::ResolveConfig;
use crate::error::ResolveError;
use crate::ir::model::{Enumerator, Model, ModelKind};
use crate::parse::document::Document;
use crate::parse::schema::{AdditionalProperties, Items, Schema, TypeSet};

use super::composition;
use super::default::default_literal;
use super::enums::extract_enumerators;
use super::names::escape_name;
use super::pointer::PointerResolver;
use super::type_map::{self, TypeDescriptor};

/// Shared immutable state for one resolution pass over one document.
pub struct ResolveContext<'a> {
    document: &'a Document,
    config: &'a ResolveConfig,
    pointers: PointerResolver<'a>,
}

impl<'a> ResolveContext<'a> {
    pub fn new(document: &'a Document, config: &'a ResolveConfig) -> Self {
        Self {
            document,
            config,
            pointers: PointerResolver::new(document),
        }
    }

    pub fn document(&self) -> &'a Document {
        self.document
    }

    pub fn config(&self) -> &ResolveConfig {
        self.config
    }

    pub fn pointers(&self) -> &PointerResolver<'a> {
        &self.pointers
    }

    /// Build the model for one schema node.
    ///
    /// Exactly one variant rule fires, in fixed precedence order; anything
    /// unrecognized degrades to the `unknown` primitive instead of failing.
    /// A `$ref` is never expanded inline, which bounds recursion depth by
    /// inline nesting only: the target's own model is built when the
    /// top-level definition pass reaches it.
    pub fn build_model(
        &self,
        name: &str,
        schema: &Schema,
        is_definition: bool,
    ) -> Result<Model, ResolveError> {
        let mut model = self.base_model(name, schema, is_definition);

        if let Some(pointer) = &schema.ref_path {
            self.pointers.schema(pointer)?;
            apply_descriptor(
                &mut model,
                type_map::type_descriptor(pointer, schema.format.as_deref(), self.config),
            );
            model.kind = ModelKind::Reference;
            model.pointers.insert(pointer.clone());
            model.default_literal = default_literal(schema, &model);
            return Ok(model);
        }

        if !schema.enum_values.is_empty() && !schema.has_type("boolean") {
            let enumerators = extract_enumerators(
                &schema.enum_values,
                &schema.enum_descriptions,
                &schema.enum_var_names,
            );
            if !enumerators.is_empty() {
                let token = enumeration_token(&enumerators);
                model.base = token.clone();
                model.type_token = token;
                model.kind = ModelKind::Enumeration { enumerators };
                model.default_literal = default_literal(schema, &model);
                return Ok(model);
            }
        }

        if schema.has_type("array") {
            if let Some(items) = &schema.items {
                return self.build_array(model, schema, items);
            }
        }

        if schema.has_type("object") {
            if let Some(AdditionalProperties::Schema(value_schema)) = &schema.additional_properties
            {
                return self.build_dictionary(model, schema, value_schema);
            }
        }

        if let Some(form) = composition::find_composition(schema) {
            return composition::build_composition(self, model, schema, form);
        }

        if schema.has_type("object") || !schema.properties.is_empty() {
            return self.build_record(model, schema);
        }

        if let Some(value) = &schema.const_value {
            let literal = constant_literal(value);
            model.base = literal.clone();
            model.type_token = literal;
            model.kind = ModelKind::Constant;
            model.default_literal = default_literal(schema, &model);
            return Ok(model);
        }

        if let Some(types) = &schema.schema_type {
            apply_descriptor(
                &mut model,
                self.type_set_descriptor(types, schema.format.as_deref()),
            );
            model.default_literal = default_literal(schema, &model);
            return Ok(model);
        }

        // No rule fired; the model stays the unknown primitive.
        Ok(model)
    }

    /// Build one property model. The model name is the escaped form of the
    /// declared name; callers keep the raw name for required lookups.
    pub(crate) fn build_property(
        &self,
        raw_name: &str,
        schema: &Schema,
        is_required: bool,
    ) -> Result<Model, ResolveError> {
        let mut property = self.build_model(&escape_name(raw_name), schema, false)?;
        property.is_required = is_required;
        Ok(property)
    }

    fn base_model(&self, name: &str, schema: &Schema, is_definition: bool) -> Model {
        let mut model = Model::new(name);
        model.description = schema.description.clone();
        model.format = schema.format.clone();
        model.is_definition = is_definition;
        model.is_read_only = schema.read_only.unwrap_or(false);
        model.is_nullable = schema.is_nullable();
        model.deprecated = schema.deprecated.unwrap_or(false);
        model
    }

    fn build_array(
        &self,
        mut model: Model,
        schema: &Schema,
        items: &Items,
    ) -> Result<Model, ResolveError> {
        // A keyless array of item schemas normalizes to an implicit anyOf
        // element type.
        let union_element;
        let element = match items {
            Items::One(element) => element.as_ref(),
            Items::Many(list) => {
                union_element = Schema {
                    any_of: list.clone(),
                    ..Schema::default()
                };
                &union_element
            }
        };
        let link = self.build_link(&mut model, element)?;
        model.kind = ModelKind::Array { link };
        model.default_literal = default_literal(schema, &model);
        Ok(model)
    }

    fn build_dictionary(
        &self,
        mut model: Model,
        schema: &Schema,
        value_schema: &Schema,
    ) -> Result<Model, ResolveError> {
        let link = self.build_link(&mut model, value_schema)?;
        model.kind = ModelKind::Dictionary { link };
        model.default_literal = default_literal(schema, &model);
        Ok(model)
    }

    /// Resolve an element-type schema for arrays and dictionaries. A `$ref`
    /// element contributes only its type descriptor and yields no owned
    /// link model.
    fn build_link(
        &self,
        model: &mut Model,
        element: &Schema,
    ) -> Result<Option<Box<Model>>, ResolveError> {
        if let Some(pointer) = &element.ref_path {
            self.pointers.schema(pointer)?;
            apply_descriptor(model, type_map::type_descriptor(pointer, None, self.config));
            model.pointers.insert(pointer.clone());
            return Ok(None);
        }
        let link = self.build_model("", element, false)?;
        model.base = link.base.clone();
        model.type_token = link.type_token.clone();
        model.template = link.template.clone();
        model.imports.extend(link.imports.iter().cloned());
        model.pointers.extend(link.pointers.iter().cloned());
        Ok(Some(Box::new(link)))
    }

    fn build_record(&self, mut model: Model, schema: &Schema) -> Result<Model, ResolveError> {
        let mut properties = Vec::new();
        let mut nested_enumerations = Vec::new();
        for (raw_name, property_schema) in &schema.properties {
            let is_required = schema.required.iter().any(|r| r == raw_name);
            let property = self.build_property(raw_name, property_schema, is_required)?;
            model.imports.extend(property.imports.iter().cloned());
            model.pointers.extend(property.pointers.iter().cloned());
            collect_nested_enumerations(&property, &mut nested_enumerations);
            properties.push(property);
        }
        if matches!(
            schema.additional_properties,
            Some(AdditionalProperties::Bool(true))
        ) {
            properties.push(catch_all_property());
        }
        model.kind = ModelKind::Record {
            properties,
            nested_enumerations,
        };
        model.default_literal = default_literal(schema, &model);
        Ok(model)
    }

    fn type_set_descriptor(&self, types: &TypeSet, format: Option<&str>) -> TypeDescriptor {
        match types {
            TypeSet::Single(t) => type_map::type_descriptor(t, format, self.config),
            TypeSet::Multiple(list) => type_map::types_descriptor(list, format, self.config),
        }
    }
}

pub(crate) fn apply_descriptor(model: &mut Model, descriptor: TypeDescriptor) {
    model.type_token = descriptor.type_token;
    model.base = descriptor.base;
    model.template = descriptor.template;
    model.imports.extend(descriptor.imports);
    model.is_nullable |= descriptor.is_nullable;
}

/// Promote a child's inline enumerations, and the child itself when it is
/// one, for standalone registration downstream.
pub(crate) fn collect_nested_enumerations(property: &Model, into: &mut Vec<Model>) {
    into.extend(property.nested_enumerations().iter().cloned());
    if matches!(property.kind, ModelKind::Enumeration { .. }) {
        into.push(property.clone());
    }
}

/// Primitive token backing an enumeration: `number` when every value is
/// numeric, `string` when every value is a string, else the union of both.
fn enumeration_token(enumerators: &[Enumerator]) -> String {
    let all_numbers = enumerators.iter().all(|e| e.value.is_number());
    let all_strings = enumerators.iter().all(|e| e.value.is_string());
    if all_numbers {
        "number".to_string()
    } else if all_strings {
        "string".to_string()
    } else {
        "string | number".to_string()
    }
}

fn constant_literal(value: &Value) -> String {
    match value {
        Value::String(s) => format!("'{s}'"),
        other => other.to_string(),
    }
}

/// Index-signature-like property representing arbitrary extra keys when
/// `additionalProperties: true` sits on a record schema.
fn catch_all_property() -> Model {
    let mut property = Model::new("[key: string]");
    property.is_required = true;
    property
}
