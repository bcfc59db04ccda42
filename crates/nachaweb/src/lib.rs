use colored::*;
use icons::{IconConfig, IconResolver};
use models::{FieldDescriptor, ValidationResult, FORM_INVALID_MESSAGE};
use std::borrow::Cow;
use std::fs;
use std::path::Path;
use validators::{FieldValidator, NumericPolicy, RoutingMatcher};

/// Read field descriptors from a YAML or JSON file. JSON is picked by the
/// `.json` extension, anything else is read as YAML.
pub fn load_fields(path: &Path) -> Result<Vec<FieldDescriptor>, String> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;

    let is_json = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if is_json {
        serde_json::from_str(&content).map_err(|e| format!("Invalid JSON: {}", e))
    } else {
        serde_yaml::from_str(&content).map_err(|e| format!("Invalid YAML: {}", e))
    }
}

/// The built-in resolver, or one loaded from an icon table file.
pub fn load_resolver(path: Option<&Path>) -> Result<Cow<'static, IconResolver>, String> {
    match path {
        Some(path) => {
            logging::debug(&format!("Loading icon table from {}", path.display()));
            let resolver = IconConfig::from_path(path)
                .and_then(IconConfig::into_resolver)
                .map_err(|e| e.to_string())?;
            Ok(Cow::Owned(resolver))
        }
        None => Ok(Cow::Borrowed(IconResolver::builtin())),
    }
}

pub fn build_validator(routing_fields: &[String], lenient_numbers: bool) -> FieldValidator {
    let mut validator = FieldValidator::new();
    if !routing_fields.is_empty() {
        validator =
            validator.with_routing_matcher(RoutingMatcher::new(routing_fields.iter().cloned()));
    }
    if lenient_numbers {
        validator = validator.with_numeric_policy(NumericPolicy::Ignore);
    }
    validator
}

/// Human-readable report of a validation pass, one line per field.
pub fn format_report(result: &ValidationResult) -> String {
    let mut lines: Vec<String> = result
        .fields()
        .map(|(name, valid)| {
            if valid {
                format!("{} {}", "✓".green(), name)
            } else {
                format!("{} {}", "✗".red(), name)
            }
        })
        .collect();

    for issue in result.issues() {
        lines.push(format!("  {}", issue.yellow()));
    }

    if !result.is_valid() {
        lines.push(FORM_INVALID_MESSAGE.to_string());
    }

    lines.join("\n")
}

/// One line per icon: name, then the placeholders that stand for it.
pub fn list_icons(resolver: &IconResolver) -> Vec<String> {
    resolver
        .icon_names()
        .map(|name| {
            let symbols: Vec<&str> = resolver
                .symbols()
                .filter(|(_, icon)| *icon == name)
                .map(|(symbol, _)| symbol)
                .collect();

            let marker = if name == resolver.fallback() {
                " (fallback)"
            } else {
                ""
            };

            if symbols.is_empty() {
                format!("{}{}", name, marker)
            } else {
                format!("{}{} {}", name, marker, symbols.join(" "))
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    #[test]
    fn test_load_fields_yaml_and_json() {
        let mut yaml = Builder::new().suffix(".yaml").tempfile().unwrap();
        write!(
            yaml,
            "- name: originRoutingNumber\n  value: '123456789'\n  required: true\n"
        )
        .unwrap();
        let fields = load_fields(yaml.path()).unwrap();
        assert_eq!(
            fields,
            vec![FieldDescriptor::new("originRoutingNumber", "123456789").required(true)]
        );

        let mut json = Builder::new().suffix(".JSON").tempfile().unwrap();
        write!(json, r#"[{{"name": "amount", "value": "-1", "kind": "number"}}]"#).unwrap();
        let fields = load_fields(json.path()).unwrap();
        assert_eq!(fields[0].kind, models::FieldKind::Number);
    }

    #[test]
    fn test_load_fields_errors() {
        let err = load_fields(Path::new("/nonexistent/fields.yaml")).unwrap_err();
        assert!(err.starts_with("Failed to read"));

        let mut json = Builder::new().suffix(".json").tempfile().unwrap();
        write!(json, "- not: json").unwrap();
        assert!(load_fields(json.path()).unwrap_err().starts_with("Invalid JSON"));
    }

    #[test]
    fn test_build_validator_options() {
        let default = build_validator(&[], false);
        assert_eq!(default.routing_matcher(), &RoutingMatcher::default());
        assert_eq!(default.numeric_policy(), NumericPolicy::Reject);

        let custom = build_validator(&["aba".to_string()], true);
        assert!(custom.routing_matcher().matches("receiver_aba"));
        assert!(!custom.routing_matcher().matches("originRoutingNumber"));
        assert_eq!(custom.numeric_policy(), NumericPolicy::Ignore);
    }

    #[test]
    fn test_report_lists_fields_and_issues() {
        let fields = vec![
            FieldDescriptor::new("companyName", "Acme").required(true),
            FieldDescriptor::new("originRoutingNumber", "12345").required(true),
        ];
        let result = validators::validate_fields(&fields);

        let report = format_report(&result);
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].ends_with("companyName"));
        assert!(lines[1].ends_with("originRoutingNumber"));
        assert!(lines[2].contains("must be exactly 9 digits"));
        assert_eq!(lines[3], FORM_INVALID_MESSAGE);
    }

    #[test]
    fn test_list_builtin_icons() {
        let lines = list_icons(IconResolver::builtin());

        assert_eq!(lines.len(), 16);
        assert_eq!(lines[0], "home 🏠");
        assert!(lines.contains(&"info (fallback) ℹ️".to_string()));
        assert!(lines.contains(&"loading".to_string()));
    }

    #[test]
    fn test_load_resolver_defaults_to_builtin() {
        let resolver = load_resolver(None).unwrap();
        assert!(matches!(resolver, Cow::Borrowed(_)));

        let err = load_resolver(Some(Path::new("/nonexistent/icons.yaml"))).unwrap_err();
        assert!(err.contains("Failed to read"));
    }
}
