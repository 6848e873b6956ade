//! Parsed recipe document helpers.
//!
//! A recipe document is a [`serde_yaml::Mapping`]; serde_yaml preserves key
//! insertion order, which the section-order rules rely on.

use serde_yaml::Value;

/// File name of the recipe definition inside a recipe directory.
pub const RECIPE_FILE: &str = "meta.yaml";

/// Canonical top-level section order for a recipe.
pub const TOP_LEVEL_SECTIONS: [&str; 9] = [
    "package",
    "source",
    "build",
    "requirements",
    "test",
    "app",
    "outputs",
    "about",
    "extra",
];

/// Human-readable name for a YAML value's shape, used in shape findings.
pub fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "list",
        Value::Mapping(_) => "dictionary",
        Value::Tagged(_) => "tagged value",
    }
}

/// Render a scalar value as a string. Returns `None` for collections.
pub fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Whether a field is missing or carries no content.
///
/// Missing keys, nulls, empty strings, empty lists, empty mappings and
/// `false` all count as blank, matching the truthiness the content rules
/// are defined against.
pub fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::Bool(b)) => !b,
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Sequence(seq)) => seq.is_empty(),
        Some(Value::Mapping(map)) => map.is_empty(),
        Some(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_yaml::Mapping;

    #[test]
    fn type_names_cover_common_shapes() {
        assert_eq!(value_type_name(&Value::Null), "null");
        assert_eq!(value_type_name(&Value::String("x".into())), "string");
        assert_eq!(value_type_name(&Value::Sequence(vec![])), "list");
        assert_eq!(value_type_name(&Value::Mapping(Mapping::new())), "dictionary");
    }

    #[test]
    fn scalar_to_string_renders_scalars() {
        assert_eq!(scalar_to_string(&Value::String("abc".into())), Some("abc".into()));
        assert_eq!(scalar_to_string(&Value::from(3)), Some("3".into()));
        assert_eq!(scalar_to_string(&Value::Bool(true)), Some("true".into()));
        assert_eq!(scalar_to_string(&Value::Sequence(vec![])), None);
    }

    #[test]
    fn blank_detects_missing_and_empty() {
        assert!(is_blank(None));
        assert!(is_blank(Some(&Value::Null)));
        assert!(is_blank(Some(&Value::String(String::new()))));
        assert!(is_blank(Some(&Value::Sequence(vec![]))));
        assert!(!is_blank(Some(&Value::String("MIT".into()))));
        assert!(!is_blank(Some(&Value::from(0))));
    }
}
