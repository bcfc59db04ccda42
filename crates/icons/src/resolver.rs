use crate::builtin::{builtin_icons, builtin_symbols, DEFAULT_FALLBACK};
use crate::IconError;
use indexmap::IndexMap;
use once_cell::sync::Lazy;

static BUILTIN: Lazy<IconResolver> = Lazy::new(|| IconResolver {
    icons: builtin_icons(),
    symbols: builtin_symbols(),
    fallback: DEFAULT_FALLBACK.to_string(),
});

const BASE_CLASS_ATTR: &str = r#"class="icon""#;

/// Resolves icon names to markup and swaps emoji placeholders for icons.
///
/// The table is fixed at construction. Every symbol must map to a known icon
/// and the fallback icon must exist, so lookups through the recovering
/// methods always produce markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconResolver {
    icons: IndexMap<String, String>,
    symbols: IndexMap<String, String>,
    fallback: String,
}

impl IconResolver {
    pub fn new(
        icons: IndexMap<String, String>,
        symbols: IndexMap<String, String>,
        fallback: impl Into<String>,
    ) -> Result<Self, IconError> {
        let resolver = IconResolver {
            icons,
            symbols,
            fallback: fallback.into(),
        };
        resolver.check()?;
        Ok(resolver)
    }

    /// The process-wide resolver over the built-in table.
    pub fn builtin() -> &'static IconResolver {
        &BUILTIN
    }

    fn check(&self) -> Result<(), IconError> {
        if !self.icons.contains_key(&self.fallback) {
            return Err(IconError::MissingFallback(self.fallback.clone()));
        }

        for (symbol, name) in &self.symbols {
            if symbol.is_empty() {
                return Err(IconError::EmptySymbol(name.clone()));
            }
            if !self.icons.contains_key(name) {
                return Err(IconError::UnmappedSymbol {
                    symbol: symbol.clone(),
                    icon: name.clone(),
                });
            }
        }

        Ok(())
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    pub fn contains(&self, name: &str) -> bool {
        self.icons.contains_key(name)
    }

    pub fn icon_names(&self) -> impl Iterator<Item = &str> {
        self.icons.keys().map(String::as_str)
    }

    /// (symbol, icon name) pairs in substitution order.
    pub fn symbols(&self) -> impl Iterator<Item = (&str, &str)> {
        self.symbols
            .iter()
            .map(|(symbol, name)| (symbol.as_str(), name.as_str()))
    }

    pub fn try_resolve(&self, name: &str) -> Result<&str, IconError> {
        self.icons
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| IconError::UnknownIcon(name.to_string()))
    }

    /// Markup for `name`, or for the fallback icon when `name` is unknown.
    pub fn resolve(&self, name: &str) -> &str {
        match self.try_resolve(name) {
            Ok(markup) => markup,
            Err(e) => {
                logging::warning(&format!("{}, using '{}'", e, self.fallback));
                &self.icons[&self.fallback]
            }
        }
    }

    /// Like [`resolve`](Self::resolve), with `extra_class` appended to the
    /// fragment's `class="icon"` attribute. Fragments without that
    /// attribute come back unchanged.
    pub fn resolve_with_class(&self, name: &str, extra_class: &str) -> String {
        let markup = self.resolve(name);
        let extra_class = extra_class.trim();
        if extra_class.is_empty() {
            return markup.to_string();
        }

        markup.replacen(
            BASE_CLASS_ATTR,
            &format!(r#"class="icon {}""#, extra_class),
            1,
        )
    }

    /// Replace every mapped symbol in `text` with its icon markup.
    ///
    /// Symbols are replaced one after another in mapping order, each over
    /// the whole text. Text without any mapped symbol is returned as is.
    pub fn substitute_all(&self, text: &str) -> String {
        let mut output = text.to_string();
        for (symbol, name) in &self.symbols {
            if output.contains(symbol.as_str()) {
                output = output.replace(symbol.as_str(), self.resolve(name));
            }
        }
        output
    }
}
