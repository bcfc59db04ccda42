use icons::IconResolver;
use models::{FieldKind, ValidationResult};
use nachaweb_lib::{build_validator, load_fields, load_resolver};
use std::fs;
use tempfile::tempdir;
use utils::DraftStore;

const BATCH_FORM: &str = r#"
- name: companyName
  value: Acme Payroll
  required: true
- name: originRoutingNumber
  value: "123456789"
  required: true
- name: destinationRoutingNumber
  value: "12345"
  required: true
- name: amount
  value: "250.00"
  kind: number
  required: true
- name: memo
  kind: other
"#;

fn validate_file(contents: &str) -> ValidationResult {
    let dir = tempdir().unwrap();
    let path = dir.path().join("form.yaml");
    fs::write(&path, contents).unwrap();

    let fields = load_fields(&path).unwrap();
    build_validator(&[], false).validate(&fields)
}

#[test]
fn test_form_file_with_short_routing_number() {
    let result = validate_file(BATCH_FORM);

    assert!(!result.is_valid());
    assert_eq!(
        result.invalid_fields().collect::<Vec<_>>(),
        vec!["destinationRoutingNumber"]
    );
    assert_eq!(result.field("memo"), Some(true));
}

#[test]
fn test_form_file_fixed_up() {
    let result = validate_file(&BATCH_FORM.replace("\"12345\"", "\"987654321\""));

    assert!(result.is_valid());
    assert_eq!(result.len(), 5);
}

#[test]
fn test_restored_drafts_are_validated() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("form.json");
    fs::write(
        &path,
        r#"[
            {"name": "originRoutingNumber", "value": "", "required": true},
            {"name": "amount", "value": "", "kind": "number", "required": true}
        ]"#,
    )
    .unwrap();

    let mut fields = load_fields(&path).unwrap();
    assert_eq!(fields[1].kind, FieldKind::Number);

    let validator = build_validator(&[], false);
    assert!(!validator.validate(&fields).is_valid());

    let mut drafts = DraftStore::new();
    drafts.save("originRoutingNumber", "021000021");
    drafts.save("amount", "12.50");
    assert_eq!(drafts.restore(&mut fields), 2);

    let result = validator.validate(&fields);
    assert!(result.is_valid());

    drafts.clear(&fields);
    assert!(drafts.is_empty());
}

#[test]
fn test_render_template_with_custom_table() {
    let dir = tempdir().unwrap();
    let table = dir.path().join("icons.yaml");
    fs::write(
        &table,
        "extend_builtin: true\nicons:\n  bank: '<svg class=\"icon\"><rect/></svg>'\nsymbols:\n  \"🏦\": bank\n",
    )
    .unwrap();

    let resolver = load_resolver(Some(table.as_path())).unwrap();
    let template = r#"<span class="nav-icon">🏦</span><button>✅ Save</button>"#;

    let rendered = resolver.substitute_all(template);

    assert_eq!(
        rendered,
        format!(
            r#"<span class="nav-icon"><svg class="icon"><rect/></svg></span><button>{} Save</button>"#,
            IconResolver::builtin().resolve("check")
        )
    );
    assert_eq!(icons::substitute_all(template).matches("<svg").count(), 1);
}

#[test]
fn test_upload_checks_on_disk() {
    let dir = tempdir().unwrap();
    let good = dir.path().join("PAYROLL.ACH");
    let bad = dir.path().join("payroll.csv");
    fs::write(&good, "101 021000021 0210000212401051200A094101").unwrap();
    fs::write(&bad, "a,b,c").unwrap();

    let candidate = utils::upload_candidate(&good).unwrap();
    assert!(validators::validate_upload(&candidate).is_ok());

    let candidate = utils::upload_candidate(&bad).unwrap();
    assert_eq!(
        validators::validate_upload(&candidate).unwrap_err().to_string(),
        "Please select a valid NACHA file (.txt or .ach)"
    );
}
