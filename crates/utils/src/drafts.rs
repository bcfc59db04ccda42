use models::FieldDescriptor;
use std::collections::HashMap;

const KEY_PREFIX: &str = "form_";

/// Autosaved form values, kept in memory for the life of the page.
///
/// Values are keyed `form_<field name>`, so fields sharing a name across
/// forms share a draft.
#[derive(Debug, Clone, Default)]
pub struct DraftStore {
    entries: HashMap<String, String>,
}

fn key(field_name: &str) -> String {
    format!("{}{}", KEY_PREFIX, field_name)
}

impl DraftStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn save(&mut self, field_name: &str, value: &str) {
        self.entries.insert(key(field_name), value.to_string());
    }

    pub fn load(&self, field_name: &str) -> Option<&str> {
        self.entries.get(&key(field_name)).map(String::as_str)
    }

    /// Fill empty fields from their drafts. Returns how many were filled.
    pub fn restore(&self, fields: &mut [FieldDescriptor]) -> usize {
        let mut restored = 0;
        for field in fields.iter_mut().filter(|field| field.value.is_empty()) {
            if let Some(saved) = self.load(&field.name).filter(|saved| !saved.is_empty()) {
                field.value = saved.to_string();
                restored += 1;
            }
        }
        restored
    }

    /// Drop the drafts of these fields, typically after a successful submit.
    pub fn clear(&mut self, fields: &[FieldDescriptor]) {
        for field in fields {
            self.entries.remove(&key(&field.name));
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
