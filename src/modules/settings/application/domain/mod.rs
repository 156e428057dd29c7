pub mod document_id;
pub mod entities;
pub mod navbar;
pub mod theme;

use serde_json::Value;

use crate::modules::document_store::application::domain::entities::{flag, Fields};

pub use document_id::{SettingsDocId, UnknownSettingsDocument};
pub use entities::{
    GeneralSettings, HeaderContent, PortfolioAbout, PreloaderContent, SeoContent,
    SettingsDocument,
};
pub use navbar::{NavSection, NavSectionConfig, NavbarContent};
pub use theme::{Theme, ThemeSettings};

/// Stored string, or `default` when absent or not a string.
pub(crate) fn text_or(fields: &Fields, key: &str, default: &str) -> String {
    match fields.get(key) {
        Some(Value::String(s)) => s.clone(),
        _ => default.to_string(),
    }
}

pub(crate) fn bool_or(fields: &Fields, key: &str, default: bool) -> bool {
    flag(fields, key).unwrap_or(default)
}
