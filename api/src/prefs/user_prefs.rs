use serde::Deserialize;
use serde::Serialize;

use super::language::Language;
use crate::store;

/// Represents all user prefs. Loaded at startup, saved on change.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize, Default)]
pub struct UserPrefs {
    language: Language,
}

impl UserPrefs {
    pub fn language(&self) -> Language {
        self.language
    }

    /// Reads prefs from the key-value store; absent keys take defaults.
    pub fn load() -> Self {
        let language = store::get(store::LANGUAGE_KEY)
            .map(|code| Language::from_code(&code))
            .unwrap_or_default();
        Self { language }
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
        store::set(store::LANGUAGE_KEY, language.code());
    }
}
