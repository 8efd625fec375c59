use crate::error::ResolveError;
use crate::parse::document::Document;
use crate::parse::parameter::Parameter;
use crate::parse::request_body::RequestBody;
use crate::parse::response::Response;
use crate::parse::schema::{AdditionalProperties, Items, Schema};

/// Dereferences same-document pointers against an immutable document.
///
/// Only `#/...` pointers are accepted; anything else is an
/// [`ResolveError::ExternalPointer`] precondition violation (the loader is
/// expected to have bundled external documents already). A pointer whose
/// path does not exist is an [`ResolveError::UnresolvedPointer`].
pub struct PointerResolver<'a> {
    document: &'a Document,
}

impl<'a> PointerResolver<'a> {
    pub fn new(document: &'a Document) -> Self {
        Self { document }
    }

    /// Resolve a pointer to a schema node. Supports the named sections of
    /// both dialects plus residual structural segments (`properties/<p>`,
    /// `items`, `additionalProperties`, `allOf|anyOf|oneOf/<i>`).
    pub fn schema(&self, pointer: &str) -> Result<&'a Schema, ResolveError> {
        let segments = split_pointer(pointer)?;
        let (head, rest) = match segments.split_first() {
            Some((first, rest)) if first == "definitions" => {
                let (name, rest) = named_segment(rest, pointer)?;
                (self.document.definitions.get(name), rest)
            }
            Some((first, rest)) if first == "components" => {
                let (section, rest) = named_segment(rest, pointer)?;
                if section != "schemas" {
                    return Err(ResolveError::UnresolvedPointer(pointer.to_string()));
                }
                let (name, rest) = named_segment(rest, pointer)?;
                (
                    self.document.components.as_ref().and_then(|c| c.schemas.get(name)),
                    rest,
                )
            }
            _ => return Err(ResolveError::UnresolvedPointer(pointer.to_string())),
        };
        head.and_then(|schema| walk_schema(schema, rest))
            .ok_or_else(|| ResolveError::UnresolvedPointer(pointer.to_string()))
    }

    pub fn parameter(&self, pointer: &str) -> Result<&'a Parameter, ResolveError> {
        let segments = split_pointer(pointer)?;
        let found = match segments.as_slice() {
            [first, name] if first == "parameters" => self.document.parameters.get(name),
            [first, section, name] if first == "components" && section == "parameters" => self
                .document
                .components
                .as_ref()
                .and_then(|c| c.parameters.get(name)),
            _ => None,
        };
        found.ok_or_else(|| ResolveError::UnresolvedPointer(pointer.to_string()))
    }

    pub fn response(&self, pointer: &str) -> Result<&'a Response, ResolveError> {
        let segments = split_pointer(pointer)?;
        let found = match segments.as_slice() {
            [first, name] if first == "responses" => self.document.responses.get(name),
            [first, section, name] if first == "components" && section == "responses" => self
                .document
                .components
                .as_ref()
                .and_then(|c| c.responses.get(name)),
            _ => None,
        };
        found.ok_or_else(|| ResolveError::UnresolvedPointer(pointer.to_string()))
    }

    pub fn request_body(&self, pointer: &str) -> Result<&'a RequestBody, ResolveError> {
        let segments = split_pointer(pointer)?;
        let found = match segments.as_slice() {
            [first, section, name] if first == "components" && section == "requestBodies" => self
                .document
                .components
                .as_ref()
                .and_then(|c| c.request_bodies.get(name)),
            _ => None,
        };
        found.ok_or_else(|| ResolveError::UnresolvedPointer(pointer.to_string()))
    }
}

fn split_pointer(pointer: &str) -> Result<Vec<String>, ResolveError> {
    let rest = pointer
        .strip_prefix("#/")
        .ok_or_else(|| ResolveError::ExternalPointer(pointer.to_string()))?;
    Ok(rest.split('/').map(unescape_segment).collect())
}

fn named_segment<'s>(
    segments: &'s [String],
    pointer: &str,
) -> Result<(&'s String, &'s [String]), ResolveError> {
    segments
        .split_first()
        .ok_or_else(|| ResolveError::UnresolvedPointer(pointer.to_string()))
}

/// JSON-pointer token unescaping: `~1` is `/`, `~0` is `~`.
fn unescape_segment(segment: &str) -> String {
    segment.replace("~1", "/").replace("~0", "~")
}

fn walk_schema<'a>(mut node: &'a Schema, segments: &[String]) -> Option<&'a Schema> {
    let mut iter = segments.iter();
    while let Some(segment) = iter.next() {
        node = match segment.as_str() {
            "properties" => node.properties.get(iter.next()?.as_str())?,
            "items" => match node.items.as_ref()? {
                Items::One(schema) => schema,
                Items::Many(list) => list.get(iter.next()?.parse::<usize>().ok()?)?,
            },
            "additionalProperties" => match node.additional_properties.as_ref()? {
                AdditionalProperties::Schema(schema) => schema,
                AdditionalProperties::Bool(_) => return None,
            },
            "allOf" => node.all_of.get(iter.next()?.parse::<usize>().ok()?)?,
            "anyOf" => node.any_of.get(iter.next()?.parse::<usize>().ok()?)?,
            "oneOf" => node.one_of.get(iter.next()?.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    const DOC: &str = r#"
openapi: 3.0.3
components:
  schemas:
    User:
      type: object
      properties:
        pet:
          type: object
          properties:
            name:
              type: string
    Tags:
      type: array
      items:
        type: string
"#;

    #[test]
    fn test_resolves_named_schema() {
        let document = parse::from_yaml(DOC).unwrap();
        let resolver = PointerResolver::new(&document);
        let schema = resolver.schema("#/components/schemas/User").unwrap();
        assert!(schema.has_type("object"));
    }

    #[test]
    fn test_resolves_nested_structural_pointer() {
        let document = parse::from_yaml(DOC).unwrap();
        let resolver = PointerResolver::new(&document);
        let schema = resolver
            .schema("#/components/schemas/User/properties/pet/properties/name")
            .unwrap();
        assert!(schema.has_type("string"));
        let items = resolver
            .schema("#/components/schemas/Tags/items")
            .unwrap();
        assert!(items.has_type("string"));
    }

    #[test]
    fn test_missing_target_is_unresolved() {
        let document = parse::from_yaml(DOC).unwrap();
        let resolver = PointerResolver::new(&document);
        let err = resolver.schema("#/components/schemas/Missing").unwrap_err();
        assert!(matches!(err, ResolveError::UnresolvedPointer(_)));
    }

    #[test]
    fn test_external_pointer_is_rejected() {
        let document = parse::from_yaml(DOC).unwrap();
        let resolver = PointerResolver::new(&document);
        let err = resolver
            .schema("other.yaml#/components/schemas/User")
            .unwrap_err();
        assert!(matches!(err, ResolveError::ExternalPointer(_)));
    }

    #[test]
    fn test_v2_definitions_section() {
        let document = parse::from_yaml("swagger: '2.0'\ndefinitions:\n  Pet:\n    type: object\n").unwrap();
        let resolver = PointerResolver::new(&document);
        assert!(resolver.schema("#/definitions/Pet").is_ok());
    }

    #[test]
    fn test_escaped_segment() {
        let document =
            parse::from_yaml("swagger: '2.0'\ndefinitions:\n  a/b:\n    type: string\n").unwrap();
        let resolver = PointerResolver::new(&document);
        assert!(resolver.schema("#/definitions/a~1b").is_ok());
    }
}
