use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // ASCII digits only; `\d` would also accept other Unicode digits
    static ref ROUTING_NUMBER: Regex = Regex::new(r"^[0-9]{9}$").unwrap();
}

const DEFAULT_ROUTING_PATTERNS: [&str; 3] = ["routing", "destination", "origin"];

/// True if `value` is exactly nine decimal digits, with nothing around them.
pub fn is_routing_number(value: &str) -> bool {
    ROUTING_NUMBER.is_match(value)
}

/// Decides which fields carry a routing number, by case-sensitive substring
/// match on the field name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutingMatcher {
    patterns: Vec<String>,
}

impl Default for RoutingMatcher {
    fn default() -> Self {
        Self::new(DEFAULT_ROUTING_PATTERNS)
    }
}

impl RoutingMatcher {
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        RoutingMatcher {
            patterns: patterns
                .into_iter()
                .map(Into::into)
                .filter(|pattern: &String| !pattern.is_empty())
                .collect(),
        }
    }

    /// A matcher that treats no field as routing-like.
    pub fn none() -> Self {
        RoutingMatcher {
            patterns: Vec::new(),
        }
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    pub fn matches(&self, field_name: &str) -> bool {
        self.patterns
            .iter()
            .any(|pattern| field_name.contains(pattern.as_str()))
    }
}
