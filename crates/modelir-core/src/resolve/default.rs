use serde_json::Value;

use crate::ir::model::{Model, ModelKind};
use crate::parse::schema::{Schema, TypeSet};

/// Render a schema's declared default as a literal string consistent with
/// the model variant already chosen for it.
///
/// A numeric default on an enumeration model is an index into the
/// enumerator list, not a value to match. Serialization failures yield
/// "no default" instead of an error.
pub fn default_literal(schema: &Schema, model: &Model) -> Option<String> {
    let value = schema.default_value.as_ref()?;
    if value.is_null() {
        return Some("null".to_string());
    }
    match type_hint(schema, value) {
        "int" | "integer" | "long" | "float" | "double" | "number" => {
            if let ModelKind::Enumeration { enumerators } = &model.kind {
                if let Some(enumerator) = value.as_u64().and_then(|i| enumerators.get(i as usize))
                {
                    return Some(enumerator.literal());
                }
            }
            Some(value.to_string())
        }
        "boolean" => Some(value.to_string()),
        "string" => match value {
            Value::String(s) => Some(format!("'{s}'")),
            other => Some(other.to_string()),
        },
        "object" | "array" => match serde_json::to_string(value) {
            Ok(rendered) => Some(rendered),
            Err(error) => {
                log::debug!("dropping unserializable default: {error}");
                None
            }
        },
        _ => None,
    }
}

/// The declared type when present, else the JSON type of the value itself.
fn type_hint<'s>(schema: &'s Schema, value: &Value) -> &'s str {
    let declared = match &schema.schema_type {
        Some(TypeSet::Single(t)) => Some(t.as_str()),
        Some(TypeSet::Multiple(types)) => types.iter().map(String::as_str).find(|t| *t != "null"),
        None => None,
    };
    declared.unwrap_or(match value {
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        _ => "object",
    })
}
