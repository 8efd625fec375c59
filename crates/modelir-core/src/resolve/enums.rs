use serde_json::Value;

use crate::ir::model::Enumerator;

/// Canonicalize an `enum` value array plus its positional vendor
/// side-arrays into a deduplicated enumerator list.
///
/// Dedup key is value equality, first occurrence wins. Values that are
/// neither string nor number are dropped. Metadata is addressed by the
/// original pre-dedup index, so dropped or duplicate values leave gaps
/// instead of misaligning later entries.
pub fn extract_enumerators(
    values: &[Value],
    descriptions: &[String],
    var_names: &[String],
) -> Vec<Enumerator> {
    let mut enumerators: Vec<Enumerator> = Vec::new();
    for (index, value) in values.iter().enumerate() {
        if !value.is_string() && !value.is_number() {
            log::trace!("dropping non-scalar enum value at index {index}: {value}");
            continue;
        }
        if enumerators.iter().any(|e| &e.value == value) {
            continue;
        }
        enumerators.push(Enumerator {
            value: value.clone(),
            description: descriptions.get(index).cloned(),
            var_name: var_names.get(index).cloned(),
        });
    }
    enumerators
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_dedup_keeps_first_occurrence_order() {
        let values = vec![json!(1), json!(1), json!(2), json!("a"), json!("a")];
        let enumerators = extract_enumerators(&values, &[], &[]);
        assert_eq!(enumerators.len(), 3);
        assert_eq!(enumerators[0].value, json!(1));
        assert_eq!(enumerators[1].value, json!(2));
        assert_eq!(enumerators[2].value, json!("a"));
    }

    #[test]
    fn test_non_scalar_values_are_dropped() {
        let values = vec![json!("a"), json!(null), json!({"k": 1}), json!(true), json!(2)];
        let enumerators = extract_enumerators(&values, &[], &[]);
        assert_eq!(enumerators.len(), 2);
        assert_eq!(enumerators[0].value, json!("a"));
        assert_eq!(enumerators[1].value, json!(2));
    }

    #[test]
    fn test_metadata_uses_pre_dedup_index() {
        let values = vec![json!("a"), json!(null), json!("b")];
        let descriptions = vec!["first".to_string(), "skipped".to_string(), "third".to_string()];
        let var_names = vec!["A".to_string()];
        let enumerators = extract_enumerators(&values, &descriptions, &var_names);
        assert_eq!(enumerators.len(), 2);
        assert_eq!(enumerators[0].description.as_deref(), Some("first"));
        assert_eq!(enumerators[0].var_name.as_deref(), Some("A"));
        // "b" sits at original index 2, past the end of the varname array
        assert_eq!(enumerators[1].description.as_deref(), Some("third"));
        assert_eq!(enumerators[1].var_name, None);
    }

    #[test]
    fn test_literals() {
        let enumerators = extract_enumerators(&[json!("a"), json!(3)], &[], &[]);
        assert_eq!(enumerators[0].literal(), "'a'");
        assert_eq!(enumerators[1].literal(), "3");
    }
}
