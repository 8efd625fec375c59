use crate::config::ResolveConfig;
use crate::ir::model::UNKNOWN;

/// A rendering-facing primitive or reference descriptor.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeDescriptor {
    /// Full token, e.g. `string`, `Pet`, `Link<string>`.
    pub type_token: String,
    /// Base token without any template argument.
    pub base: String,
    pub template: Option<String>,
    /// Definition names that must be imported to render this type.
    pub imports: Vec<String>,
    /// Set when a multi-type union folded away a `null` member.
    pub is_nullable: bool,
}

impl TypeDescriptor {
    fn primitive(token: &str) -> Self {
        Self {
            type_token: token.to_string(),
            base: token.to_string(),
            template: None,
            imports: Vec::new(),
            is_nullable: false,
        }
    }

    fn named(name: String) -> Self {
        Self {
            type_token: name.clone(),
            base: name.clone(),
            template: None,
            imports: vec![name],
            is_nullable: false,
        }
    }
}

/// Map a raw type string to a descriptor. Handles mapped primitives,
/// same-document pointers, and the single-argument `Base[Arg]` template
/// syntax.
pub fn type_descriptor(raw: &str, format: Option<&str>, config: &ResolveConfig) -> TypeDescriptor {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return TypeDescriptor::primitive(UNKNOWN);
    }

    if let Some((base_raw, argument_raw)) = split_template(trimmed) {
        let argument = type_descriptor(argument_raw, None, config);
        if base_raw == "array" {
            return TypeDescriptor {
                type_token: format!("{}[]", argument.type_token),
                base: argument.base,
                template: None,
                imports: argument.imports,
                is_nullable: false,
            };
        }
        let base = type_descriptor(base_raw, None, config);
        let mut imports = base.imports;
        imports.extend(argument.imports);
        return TypeDescriptor {
            type_token: format!("{}<{}>", base.base, argument.type_token),
            base: base.base,
            template: Some(argument.type_token),
            imports,
            is_nullable: false,
        };
    }

    if let Some(local) = trimmed.strip_prefix("#/") {
        let name = sanitize_type_name(local.rsplit('/').next().unwrap_or(local));
        return TypeDescriptor::named(name);
    }

    if let Some(mapped) = lookup(trimmed, format, config) {
        return TypeDescriptor::primitive(mapped);
    }

    // Unmapped bare names are treated as references to named definitions.
    TypeDescriptor::named(sanitize_type_name(trimmed))
}

/// Fold a multi-type array into one descriptor: `null` members become the
/// nullability flag, one remaining type maps directly, several render as a
/// union token.
pub fn types_descriptor(
    types: &[String],
    format: Option<&str>,
    config: &ResolveConfig,
) -> TypeDescriptor {
    let non_null: Vec<&String> = types.iter().filter(|t| t.as_str() != "null").collect();
    let is_nullable = non_null.len() != types.len();

    let mut descriptor = match non_null.as_slice() {
        [] => TypeDescriptor::primitive("null"),
        [single] => type_descriptor(single, format, config),
        many => {
            let parts: Vec<TypeDescriptor> = many
                .iter()
                .map(|t| type_descriptor(t, format, config))
                .collect();
            let token = parts
                .iter()
                .map(|p| p.type_token.as_str())
                .collect::<Vec<_>>()
                .join(" | ");
            let imports = parts.into_iter().flat_map(|p| p.imports).collect();
            TypeDescriptor {
                type_token: token.clone(),
                base: token,
                template: None,
                imports,
                is_nullable: false,
            }
        }
    };
    descriptor.is_nullable |= is_nullable;
    descriptor
}

/// Static `(type, format)` table with a `(type, -)` fallback.
fn lookup(spec_type: &str, format: Option<&str>, config: &ResolveConfig) -> Option<&'static str> {
    if spec_type == "string" {
        match format {
            Some("date" | "date-time") => {
                return Some(if config.use_date_type { "Date" } else { "string" });
            }
            Some("binary" | "file") => return Some("binary"),
            _ => {}
        }
    }
    match spec_type {
        "any" | "object" => Some(UNKNOWN),
        "array" => Some("unknown[]"),
        "boolean" => Some("boolean"),
        "byte" | "double" | "float" | "int" | "integer" | "long" | "number" | "short" => {
            Some("number")
        }
        "char" | "date" | "date-time" | "password" | "string" => Some("string"),
        "binary" | "file" => Some("binary"),
        "null" => Some("null"),
        "void" => Some("void"),
        _ => None,
    }
}

fn split_template(raw: &str) -> Option<(&str, &str)> {
    let inner = raw.strip_suffix(']')?;
    let open = inner.find('[')?;
    Some((&inner[..open], &inner[open + 1..]))
}

/// Definition names become identifiers: alphanumerics, `_` and `$` pass
/// through, everything else collapses to `_`.
fn sanitize_type_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '$' {
                c
            } else {
                '_'
            }
        })
        .collect()
}
