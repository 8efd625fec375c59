use heck::{ToLowerCamelCase, ToPascalCase};

/// Words that cannot be used as bare property or parameter identifiers in
/// the emitted source.
const RESERVED: &[&str] = &[
    "abstract", "arguments", "await", "boolean", "break", "byte", "case", "catch", "char", "class",
    "const", "continue", "debugger", "default", "delete", "do", "double", "else", "enum", "eval",
    "export", "extends", "false", "final", "finally", "float", "for", "function", "goto", "if",
    "implements", "import", "in", "instanceof", "int", "interface", "let", "long", "native", "new",
    "null", "package", "private", "protected", "public", "return", "short", "static", "super",
    "switch", "synchronized", "this", "throw", "throws", "transient", "true", "try", "typeof",
    "var", "void", "volatile", "while", "with", "yield",
];

pub fn is_bare_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Literal-name fallback: names that collide with a reserved identifier or
/// are not bare identifiers become quoted literals. The emission layer
/// renders the result verbatim, so the escaping decision lives here.
pub fn escape_name(name: &str) -> String {
    if is_bare_identifier(name) && !RESERVED.contains(&name) {
        name.to_string()
    } else {
        format!("'{name}'")
    }
}

/// Derive an operation name: the camelCased operationId when declared,
/// else the method joined with the non-parameter route segments.
pub fn operation_name(method: &str, path: &str, operation_id: Option<&str>) -> String {
    if let Some(id) = operation_id {
        let id = id.trim();
        if !id.is_empty() {
            return id.to_lower_camel_case();
        }
    }
    let segments: String = path
        .split('/')
        .filter(|s| !s.is_empty() && !s.starts_with('{'))
        .map(|s| s.to_pascal_case())
        .collect();
    format!("{}{}", method.to_lowercase(), segments)
}
