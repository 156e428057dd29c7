use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::modules::document_store::application::domain::entities::{text, Fields};
use crate::modules::localization::application::domain::lang::Lang;
use crate::modules::localization::application::resolver::{fallback_chain, localized_key};
use crate::modules::localization::application::ui_strings::translate;

/// One string per supported locale, stored as `{base}_ar`, `{base}_en`,
/// `{base}_de` sibling fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    pub ar: String,
    pub en: String,
    pub de: String,
}

impl LocalizedText {
    pub fn new(ar: impl Into<String>, en: impl Into<String>, de: impl Into<String>) -> Self {
        Self {
            ar: ar.into(),
            en: en.into(),
            de: de.into(),
        }
    }

    pub fn read(fields: &Fields, base: &str) -> Self {
        Self {
            ar: text(fields, &localized_key(base, Lang::Ar)).to_string(),
            en: text(fields, &localized_key(base, Lang::En)).to_string(),
            de: text(fields, &localized_key(base, Lang::De)).to_string(),
        }
    }

    pub fn write(&self, fields: &mut Fields, base: &str) {
        for lang in Lang::ALL {
            fields.insert(
                localized_key(base, lang),
                Value::String(self.get(lang).to_string()),
            );
        }
    }

    pub fn get(&self, lang: Lang) -> &str {
        match lang {
            Lang::Ar => &self.ar,
            Lang::En => &self.en,
            Lang::De => &self.de,
        }
    }

    pub fn is_blank(&self) -> bool {
        Lang::ALL.iter().all(|l| self.get(*l).trim().is_empty())
    }

    pub fn resolve(&self, active: Lang) -> Option<&str> {
        fallback_chain(active)
            .into_iter()
            .map(|lang| self.get(lang))
            .find(|s| !s.trim().is_empty())
    }

    /// Resolved value, or the UI translation of `ui_key` when every locale
    /// is blank.
    pub fn resolve_or_translate(&self, active: Lang, ui_key: &str) -> String {
        self.resolve(active)
            .unwrap_or_else(|| translate(ui_key, active))
            .to_string()
    }
}
