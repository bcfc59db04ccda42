use crate::builtin::{builtin_icons, builtin_symbols, DEFAULT_FALLBACK};
use crate::{IconError, IconResolver};
use indexmap::IndexMap;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Icon table as written in a YAML file.
///
/// ```yaml
/// fallback: info
/// extend_builtin: true
/// icons:
///   bank: '<svg class="icon">...</svg>'
/// symbols:
///   "🏦": bank
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct IconConfig {
    #[serde(default = "default_fallback")]
    pub fallback: String,

    /// Start from the built-in table and layer this file on top of it
    #[serde(default)]
    pub extend_builtin: bool,

    #[serde(default)]
    pub icons: IndexMap<String, String>,

    #[serde(default)]
    pub symbols: IndexMap<String, String>,
}

fn default_fallback() -> String {
    DEFAULT_FALLBACK.to_string()
}

impl IconConfig {
    pub fn from_yaml_str(content: &str) -> Result<Self, IconError> {
        serde_yaml::from_str(content).map_err(|e| IconError::Config(e.to_string()))
    }

    pub fn from_path(path: &Path) -> Result<Self, IconError> {
        let content = fs::read_to_string(path).map_err(|e| {
            IconError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_yaml_str(&content)
    }

    pub fn into_resolver(self) -> Result<IconResolver, IconError> {
        let mut icons = IndexMap::new();
        let mut symbols = IndexMap::new();
        if self.extend_builtin {
            icons.extend(builtin_icons());
            symbols.extend(builtin_symbols());
        }

        // Overrides keep the position of the entry they replace
        icons.extend(self.icons);
        symbols.extend(self.symbols);

        IconResolver::new(icons, symbols, self.fallback)
    }
}
