use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Input type of a form field, as reported by the host form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    #[default]
    Text,
    Number,
    Other,
}

/// A snapshot of one form field, taken right before a validation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub kind: FieldKind,
    #[serde(default)]
    pub required: bool,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        FieldDescriptor {
            name: name.into(),
            value: value.into(),
            kind: FieldKind::Text,
            required: false,
        }
    }

    pub fn with_kind(mut self, kind: FieldKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }
}

/// Verdict for a single field: the issues it raised, empty when valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldOutcome {
    pub name: String,
    pub issues: Vec<String>,
}

impl FieldOutcome {
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Per-field validity of one validation pass.
///
/// Built once from the outcomes of every field and read-only afterwards.
/// Field order follows the order the fields were validated in. When the same
/// name shows up twice the entry is valid only if both outcomes were.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    is_valid: bool,
    fields: IndexMap<String, bool>,
    issues: Vec<String>,
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::from_outcomes(Vec::new())
    }
}

impl ValidationResult {
    pub fn from_outcomes(outcomes: impl IntoIterator<Item = FieldOutcome>) -> Self {
        let mut fields: IndexMap<String, bool> = IndexMap::new();
        let mut issues = Vec::new();

        for outcome in outcomes {
            let valid = outcome.is_valid();
            fields
                .entry(outcome.name)
                .and_modify(|entry| *entry &= valid)
                .or_insert(valid);
            issues.extend(outcome.issues);
        }

        ValidationResult {
            is_valid: fields.values().all(|valid| *valid),
            fields,
            issues,
        }
    }

    /// True iff every field passed.
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Validity of a single field, `None` if it was not part of the pass.
    pub fn field(&self, name: &str) -> Option<bool> {
        self.fields.get(name).copied()
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, bool)> {
        self.fields.iter().map(|(name, valid)| (name.as_str(), *valid))
    }

    pub fn invalid_fields(&self) -> impl Iterator<Item = &str> {
        self.fields()
            .filter(|(_, valid)| !valid)
            .map(|(name, _)| name)
    }

    pub fn issues(&self) -> &[String] {
        &self.issues
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FromIterator<FieldOutcome> for ValidationResult {
    fn from_iter<I: IntoIterator<Item = FieldOutcome>>(iter: I) -> Self {
        Self::from_outcomes(iter)
    }
}

/// A file picked in the upload form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadCandidate {
    pub file_name: String,
    pub size_bytes: u64,
}

impl UploadCandidate {
    pub fn new(file_name: impl Into<String>, size_bytes: u64) -> Self {
        UploadCandidate {
            file_name: file_name.into(),
            size_bytes,
        }
    }
}

/// How long the host keeps a notification banner on screen.
pub const NOTIFICATION_DURATION: Duration = Duration::from_secs(5);

/// Banner text shown when a form submit is blocked by validation.
pub const FORM_INVALID_MESSAGE: &str = "Please fill in all required fields correctly.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Error,
    Info,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Error => "error",
            NotificationKind::Info => "info",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            NotificationKind::Error => "Error:",
            NotificationKind::Info => "Info:",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Transient message banner shown at the top of the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn error(message: impl Into<String>) -> Self {
        Notification {
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Notification {
            kind: NotificationKind::Info,
            message: message.into(),
        }
    }

    /// True once a banner shown for `elapsed` should be taken down.
    pub fn is_expired(&self, elapsed: Duration) -> bool {
        elapsed >= NOTIFICATION_DURATION
    }

    /// Banner markup. The message is inserted as-is, callers own escaping.
    pub fn to_markup(&self) -> String {
        format!(
            "<div class=\"message message-{} fade-in\"><strong>{}</strong> {}</div>",
            self.kind,
            self.kind.label(),
            self.message
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(name: &str, issues: &[&str]) -> FieldOutcome {
        FieldOutcome {
            name: name.to_string(),
            issues: issues.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_result_is_and_of_fields() {
        let result: ValidationResult = vec![
            outcome("amount", &[]),
            outcome("originRoutingNumber", &["must be 9 digits"]),
        ]
        .into_iter()
        .collect();

        assert!(!result.is_valid());
        assert_eq!(result.field("amount"), Some(true));
        assert_eq!(result.field("originRoutingNumber"), Some(false));
        assert_eq!(result.field("missing"), None);
        assert_eq!(
            result.invalid_fields().collect::<Vec<_>>(),
            vec!["originRoutingNumber"]
        );
        assert_eq!(result.issues(), &["must be 9 digits".to_string()]);
    }

    #[test]
    fn test_empty_result_is_valid() {
        let result = ValidationResult::default();
        assert!(result.is_valid());
        assert!(result.is_empty());
    }

    #[test]
    fn test_duplicate_names_are_combined() {
        let result = ValidationResult::from_outcomes(vec![
            outcome("amount", &["negative"]),
            outcome("amount", &[]),
        ]);

        assert_eq!(result.len(), 1);
        assert_eq!(result.field("amount"), Some(false));
        assert!(!result.is_valid());
    }

    #[test]
    fn test_fields_keep_input_order() {
        let result = ValidationResult::from_outcomes(vec![
            outcome("zeta", &[]),
            outcome("alpha", &[]),
            outcome("mid", &[]),
        ]);

        let names: Vec<_> = result.fields().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_descriptor_defaults_from_yaml() {
        let yaml = r#"
- name: companyName
  value: Acme
  required: true
- name: amount
  value: "100"
  kind: number
- name: memo
"#;
        let fields: Vec<FieldDescriptor> = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(fields.len(), 3);
        assert_eq!(
            fields[0],
            FieldDescriptor::new("companyName", "Acme").required(true)
        );
        assert_eq!(fields[1].kind, FieldKind::Number);
        assert!(!fields[1].required);
        assert_eq!(fields[2].value, "");
        assert_eq!(fields[2].kind, FieldKind::Text);
    }

    #[test]
    fn test_result_serializes_to_json() {
        let result = ValidationResult::from_outcomes(vec![outcome("amount", &[])]);
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["is_valid"], serde_json::json!(true));
        assert_eq!(json["fields"]["amount"], serde_json::json!(true));
    }

    #[test]
    fn test_notification_markup() {
        let error = Notification::error(FORM_INVALID_MESSAGE);
        assert_eq!(
            error.to_markup(),
            "<div class=\"message message-error fade-in\"><strong>Error:</strong> Please fill in all required fields correctly.</div>"
        );

        let info = Notification::info("Saved");
        assert_eq!(
            info.to_markup(),
            "<div class=\"message message-info fade-in\"><strong>Info:</strong> Saved</div>"
        );
    }

    #[test]
    fn test_notification_expires_after_display_duration() {
        let banner = Notification::info("Saved");

        assert!(!banner.is_expired(Duration::ZERO));
        assert!(!banner.is_expired(Duration::from_millis(4999)));
        assert!(banner.is_expired(NOTIFICATION_DURATION));
        assert!(banner.is_expired(Duration::from_secs(60)));
    }
}
