// icons crate

mod builtin;
mod config;
mod resolver;

pub use config::IconConfig;
pub use resolver::IconResolver;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IconError {
    #[error("Icon '{0}' not found")]
    UnknownIcon(String),

    #[error("Symbol '{symbol}' maps to unknown icon '{icon}'")]
    UnmappedSymbol { symbol: String, icon: String },

    #[error("Fallback icon '{0}' is not in the icon table")]
    MissingFallback(String),

    #[error("Empty symbol mapped to icon '{0}'")]
    EmptySymbol(String),

    #[error("Invalid icon configuration: {0}")]
    Config(String),
}

/// Markup for `name` from the built-in table, falling back to the info icon.
pub fn resolve(name: &str) -> &'static str {
    IconResolver::builtin().resolve(name)
}

pub fn resolve_with_class(name: &str, extra_class: &str) -> String {
    IconResolver::builtin().resolve_with_class(name, extra_class)
}

/// Swap the built-in emoji placeholders in `text` for icon markup.
pub fn substitute_all(text: &str) -> String {
    IconResolver::builtin().substitute_all(text)
}
