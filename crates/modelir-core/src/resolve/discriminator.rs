use indexmap::IndexMap;

/// Literal discriminant for one union branch.
///
/// An explicit mapping entry wins over the implicit definition name. The
/// entry may be keyed by the branch's definition name or full pointer, or
/// written the other way around with the pointer as the entry value and the
/// discriminant as the key; both spellings occur in the wild.
pub fn discriminant_for(mapping: &IndexMap<String, String>, pointer: &str, name: &str) -> String {
    if let Some(mapped) = mapping.get(name).or_else(|| mapping.get(pointer)) {
        return mapped.clone();
    }
    for (value, target) in mapping {
        if target == pointer || target.rsplit('/').next() == Some(name) {
            return value.clone();
        }
    }
    name.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping(entries: &[(&str, &str)]) -> IndexMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_mapping_keyed_by_name() {
        let mapping = mapping(&[("Cat", "cat")]);
        assert_eq!(
            discriminant_for(&mapping, "#/components/schemas/Cat", "Cat"),
            "cat"
        );
    }

    #[test]
    fn test_mapping_keyed_by_discriminant_value() {
        let mapping = mapping(&[("cat", "#/components/schemas/Cat")]);
        assert_eq!(
            discriminant_for(&mapping, "#/components/schemas/Cat", "Cat"),
            "cat"
        );
    }

    #[test]
    fn test_unmapped_branch_defaults_to_definition_name() {
        let mapping = mapping(&[("Cat", "cat")]);
        assert_eq!(
            discriminant_for(&mapping, "#/components/schemas/Dog", "Dog"),
            "Dog"
        );
    }

    #[test]
    fn test_empty_mapping() {
        assert_eq!(
            discriminant_for(&IndexMap::new(), "#/definitions/Dog", "Dog"),
            "Dog"
        );
    }
}
