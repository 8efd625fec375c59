use modelir_core::ir::{CompositionForm, Model, ModelKind};
use modelir_core::{parse, resolve_document, ResolveConfig};

const PETSTORE: &str = include_str!("fixtures/petstore.yaml");
const LEGACY_V2: &str = include_str!("fixtures/legacy-v2.yaml");

fn resolve(source: &str) -> modelir_core::ModelIr {
    let document = parse::from_yaml(source).unwrap();
    resolve_document(&document, &ResolveConfig::default()).unwrap()
}

fn property<'m>(model: &'m Model, name: &str) -> &'m Model {
    model
        .properties()
        .iter()
        .find(|p| p.name == name)
        .unwrap_or_else(|| panic!("no property {name}"))
}

#[test]
fn registry_has_one_entry_per_definition() {
    let ir = resolve(PETSTORE);
    assert_eq!(ir.models.len(), 9);
    assert!(ir.models.values().all(|m| m.is_definition));
}

#[test]
fn record_properties_keep_declaration_order_and_required_flags() {
    let ir = resolve(PETSTORE);
    let cat = &ir.models["Cat"];
    assert!(matches!(cat.kind, ModelKind::Record { .. }));
    let names: Vec<&str> = cat.properties().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["petType", "name", "indoor"]);
    assert!(property(cat, "name").is_required);
    assert!(!property(cat, "indoor").is_required);
    assert_eq!(property(cat, "indoor").type_token, "boolean");
}

#[test]
fn string_enumeration_with_default() {
    let ir = resolve(PETSTORE);
    let status = &ir.models["Status"];
    assert_eq!(status.base, "string");
    let enumerators = status.enumerators();
    assert_eq!(enumerators.len(), 3);
    assert_eq!(enumerators[1].literal(), "'pending'");
    assert_eq!(status.default_literal.as_deref(), Some("'pending'"));
}

#[test]
fn numeric_enumeration_default_is_an_index() {
    let ir = resolve(PETSTORE);
    let priority = &ir.models["Priority"];
    assert_eq!(priority.base, "number");
    // raw default 2 picks the enumerator at that position, value 3
    assert_eq!(priority.default_literal.as_deref(), Some("3"));
}

#[test]
fn self_reference_resolves_without_expansion() {
    let ir = resolve(PETSTORE);
    let node = &ir.models["Node"];
    let next = property(node, "next");
    assert!(matches!(next.kind, ModelKind::Reference));
    assert_eq!(next.type_token, "Node");
    assert!(next.pointers.contains("#/components/schemas/Node"));
    assert!(next.properties().is_empty());
    // the pointer propagates to the containing record
    assert!(node.pointers.contains("#/components/schemas/Node"));
}

#[test]
fn additional_properties_schema_makes_a_dictionary() {
    let ir = resolve(PETSTORE);
    let labels = &ir.models["Labels"];
    assert_eq!(labels.base, "string");
    let link = labels.link().expect("dictionary value model");
    assert_eq!(link.type_token, "string");
}

#[test]
fn all_of_merges_branches_and_backfills_required() {
    let ir = resolve(PETSTORE);
    let error = &ir.models["DetailedError"];
    assert!(matches!(
        error.kind,
        ModelKind::Composition {
            form: CompositionForm::AllOf,
            ..
        }
    ));
    let names: Vec<&str> = error.properties().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["code", "message", "details"]);
    // required by the composing schema, declared only in the branch
    assert!(property(error, "code").is_required);
    // required by the referenced branch itself
    assert!(property(error, "message").is_required);
    assert!(!property(error, "details").is_required);
    assert!(error.pointers.contains("#/components/schemas/BaseError"));
}

#[test]
fn discriminator_narrows_union_branches() {
    let ir = resolve(PETSTORE);
    let pet = &ir.models["Pet"];
    let ModelKind::Composition {
        form: CompositionForm::OneOf,
        properties,
        ..
    } = &pet.kind
    else {
        panic!("expected a oneOf composition");
    };
    assert_eq!(properties.len(), 2);

    let cat = &properties[0];
    assert_eq!(cat.name, "Cat");
    let narrowed = property(cat, "petType");
    assert!(matches!(narrowed.kind, ModelKind::Reference));
    assert_eq!(narrowed.base, "'cat'");
    assert_eq!(narrowed.type_token, "string");
    assert!(narrowed.is_required);

    // no mapping entry for Dog, so the definition name is the discriminant
    let dog = &properties[1];
    assert_eq!(property(dog, "petType").base, "'Dog'");

    assert!(pet.pointers.contains("#/components/schemas/Cat"));
    assert!(pet.pointers.contains("#/components/schemas/Dog"));
}

#[test]
fn v2_definitions_and_nullability() {
    let ir = resolve(LEGACY_V2);
    let user = &ir.models["User"];
    assert!(user.is_definition);
    assert!(property(user, "id").is_required);
    assert_eq!(property(user, "id").type_token, "number");
    let name = property(user, "name");
    assert!(!name.is_required);
    assert!(name.is_nullable);
}

#[test]
fn date_time_mapping_follows_config() {
    let document = parse::from_yaml(LEGACY_V2).unwrap();
    let ir = resolve_document(&document, &ResolveConfig::default()).unwrap();
    assert_eq!(property(&ir.models["User"], "created").type_token, "string");

    let config = ResolveConfig {
        use_date_type: true,
    };
    let ir = resolve_document(&document, &config).unwrap();
    assert_eq!(property(&ir.models["User"], "created").type_token, "Date");
}

#[test]
fn resolution_is_deterministic() {
    let document = parse::from_yaml(PETSTORE).unwrap();
    let config = ResolveConfig::default();
    let first = resolve_document(&document, &config).unwrap();
    let second = resolve_document(&document, &config).unwrap();
    assert_eq!(first, second);
}

#[test]
fn all_of_override_keeps_first_declared_position() {
    let document = parse::from_yaml(
        r#"
openapi: 3.0.3
components:
  schemas:
    Merged:
      allOf:
        - type: object
          properties:
            x:
              type: string
            y:
              type: boolean
        - type: object
          properties:
            x:
              type: integer
"#,
    )
    .unwrap();
    let ir = resolve_document(&document, &ResolveConfig::default()).unwrap();
    let merged = &ir.models["Merged"];
    let names: Vec<&str> = merged
        .properties()
        .iter()
        .map(|p| p.name.as_str())
        .collect();
    assert_eq!(names, vec!["x", "y"]);
    // the later branch overrides the shape but not the position
    assert_eq!(property(merged, "x").type_token, "number");
    assert_eq!(property(merged, "y").type_token, "boolean");
}

#[test]
fn keyless_item_list_normalizes_to_a_union_element() {
    let document = parse::from_yaml(
        r#"
openapi: 3.0.3
components:
  schemas:
    Mixed:
      type: array
      items:
        - type: string
        - type: integer
"#,
    )
    .unwrap();
    let ir = resolve_document(&document, &ResolveConfig::default()).unwrap();
    let mixed = &ir.models["Mixed"];
    assert!(matches!(mixed.kind, ModelKind::Array { .. }));
    let link = mixed.link().expect("element model");
    assert!(matches!(
        link.kind,
        ModelKind::Composition {
            form: CompositionForm::AnyOf,
            ..
        }
    ));
    assert_eq!(link.properties().len(), 2);
    assert_eq!(link.properties()[0].type_token, "string");
    assert_eq!(link.properties()[1].type_token, "number");
}

#[test]
fn additional_properties_true_appends_a_catch_all() {
    let document = parse::from_yaml(
        r#"
openapi: 3.0.3
components:
  schemas:
    Extensible:
      type: object
      properties:
        a:
          type: string
      additionalProperties: true
"#,
    )
    .unwrap();
    let ir = resolve_document(&document, &ResolveConfig::default()).unwrap();
    let extensible = &ir.models["Extensible"];
    let names: Vec<&str> = extensible
        .properties()
        .iter()
        .map(|p| p.name.as_str())
        .collect();
    assert_eq!(names, vec!["a", "[key: string]"]);
    let catch_all = &extensible.properties()[1];
    assert!(catch_all.is_required);
    assert_eq!(catch_all.type_token, "unknown");
}

#[test]
fn const_schema_becomes_a_constant() {
    let document = parse::from_yaml(
        r#"
openapi: 3.0.3
components:
  schemas:
    Kind:
      const: fixed
"#,
    )
    .unwrap();
    let ir = resolve_document(&document, &ResolveConfig::default()).unwrap();
    let kind = &ir.models["Kind"];
    assert!(matches!(kind.kind, ModelKind::Constant));
    assert_eq!(kind.base, "'fixed'");
    assert_eq!(kind.type_token, "'fixed'");
}

#[test]
fn inline_enum_properties_are_promoted() {
    let document = parse::from_yaml(
        r#"
openapi: 3.0.3
components:
  schemas:
    Ticket:
      type: object
      properties:
        state:
          type: string
          enum:
            - open
            - closed
        title:
          type: string
"#,
    )
    .unwrap();
    let ir = resolve_document(&document, &ResolveConfig::default()).unwrap();
    let ticket = &ir.models["Ticket"];
    let promoted = ticket.nested_enumerations();
    assert_eq!(promoted.len(), 1);
    assert_eq!(promoted[0].name, "state");
    assert_eq!(promoted[0].enumerators().len(), 2);
    // the property itself still sits in the record shape
    assert_eq!(property(ticket, "state").enumerators().len(), 2);
}

#[test]
fn dangling_pointer_aborts_the_pass() {
    let document = parse::from_yaml(
        "openapi: 3.0.3\ncomponents:\n  schemas:\n    Broken:\n      $ref: '#/components/schemas/Missing'\n",
    )
    .unwrap();
    let err = resolve_document(&document, &ResolveConfig::default()).unwrap_err();
    assert!(matches!(
        err,
        modelir_core::ResolveError::UnresolvedPointer(_)
    ));
}
