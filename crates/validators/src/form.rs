use crate::routing::{is_routing_number, RoutingMatcher};
use models::{FieldDescriptor, FieldKind, FieldOutcome, ValidationResult};

/// What to do with a number field whose value does not parse as a number.
///
/// Blank values never reach this decision; required-ness covers them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NumericPolicy {
    /// Unparsable input fails the field.
    #[default]
    Reject,
    /// Unparsable input is not checked for sign. Same outcome as reading it as zero.
    Ignore,
}

/// Applies the per-field form rules. Holds only configuration, so one
/// instance can be shared by every form on the page.
#[derive(Debug, Clone, Default)]
pub struct FieldValidator {
    routing: RoutingMatcher,
    numeric_policy: NumericPolicy,
}

impl FieldValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_routing_matcher(mut self, routing: RoutingMatcher) -> Self {
        self.routing = routing;
        self
    }

    pub fn with_numeric_policy(mut self, policy: NumericPolicy) -> Self {
        self.numeric_policy = policy;
        self
    }

    pub fn routing_matcher(&self) -> &RoutingMatcher {
        &self.routing
    }

    pub fn numeric_policy(&self) -> NumericPolicy {
        self.numeric_policy
    }

    pub fn validate(&self, fields: &[FieldDescriptor]) -> ValidationResult {
        fields
            .iter()
            .map(|field| self.validate_field(field))
            .collect()
    }

    pub fn validate_field(&self, field: &FieldDescriptor) -> FieldOutcome {
        let mut issues = Vec::new();

        validate_required(field, &mut issues);

        if field.kind == FieldKind::Number {
            validate_non_negative(field, self.numeric_policy, &mut issues);
        }

        if self.routing.matches(&field.name) {
            validate_routing(field, &mut issues);
        }

        FieldOutcome {
            name: field.name.clone(),
            issues,
        }
    }
}

/// Validate with the default routing matcher and numeric policy.
pub fn validate_fields(fields: &[FieldDescriptor]) -> ValidationResult {
    FieldValidator::default().validate(fields)
}

fn validate_required(field: &FieldDescriptor, issues: &mut Vec<String>) {
    if field.required && field.value.trim().is_empty() {
        issues.push(format!("Field '{}': is required", field.name));
    }
}

fn validate_non_negative(
    field: &FieldDescriptor,
    policy: NumericPolicy,
    issues: &mut Vec<String>,
) {
    let value = field.value.trim();
    if value.is_empty() {
        return;
    }

    // Out-of-range input parses to an infinity, which still has a sign
    match value.parse::<f64>() {
        Ok(number) if !number.is_nan() => {
            if number < 0.0 {
                issues.push(format!(
                    "Field '{}': must not be negative (got {})",
                    field.name, value
                ));
            }
        }
        _ => {
            if policy == NumericPolicy::Reject {
                issues.push(format!(
                    "Field '{}': '{}' is not a number",
                    field.name, value
                ));
            }
        }
    }
}

fn validate_routing(field: &FieldDescriptor, issues: &mut Vec<String>) {
    // Checked untrimmed, surrounding whitespace is not part of a routing number
    if !is_routing_number(&field.value) {
        issues.push(format!(
            "Field '{}': routing number must be exactly 9 digits",
            field.name
        ));
    }
}
