use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::modules::document_store::application::domain::entities::Fields;
use crate::modules::settings::application::domain::entities::{
    GeneralSettings, HeaderContent, PortfolioAbout, PreloaderContent, SeoContent,
    SettingsDocument,
};
use crate::modules::settings::application::domain::navbar::NavbarContent;
use crate::modules::settings::application::domain::theme::ThemeSettings;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown settings document: {0}")]
pub struct UnknownSettingsDocument(pub String);

/// Well-known ids of the singleton documents in the `settings` collection.
///
/// These names are shared by the admin editor and the public site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum SettingsDocId {
    #[serde(rename = "generalSettings")]
    General,
    #[serde(rename = "navbarContent")]
    Navbar,
    #[serde(rename = "headerContent")]
    Header,
    #[serde(rename = "portfolioAbout")]
    About,
    #[serde(rename = "seoContent")]
    Seo,
    #[serde(rename = "themeSettings")]
    Theme,
    #[serde(rename = "preloaderContent")]
    Preloader,
}

impl SettingsDocId {
    pub const ALL: [SettingsDocId; 7] = [
        SettingsDocId::General,
        SettingsDocId::Navbar,
        SettingsDocId::Header,
        SettingsDocId::About,
        SettingsDocId::Seo,
        SettingsDocId::Theme,
        SettingsDocId::Preloader,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SettingsDocId::General => "generalSettings",
            SettingsDocId::Navbar => "navbarContent",
            SettingsDocId::Header => "headerContent",
            SettingsDocId::About => "portfolioAbout",
            SettingsDocId::Seo => "seoContent",
            SettingsDocId::Theme => "themeSettings",
            SettingsDocId::Preloader => "preloaderContent",
        }
    }

    pub fn parse(value: &str) -> Option<SettingsDocId> {
        Self::ALL.into_iter().find(|id| id.as_str() == value)
    }

    /// Every recognized field at its editor default.
    pub fn defaults(self) -> Fields {
        match self {
            SettingsDocId::General => GeneralSettings::default().to_fields(),
            SettingsDocId::Navbar => NavbarContent::default().to_fields(),
            SettingsDocId::Header => HeaderContent::default().to_fields(),
            SettingsDocId::About => PortfolioAbout::default().to_fields(),
            SettingsDocId::Seo => SeoContent::default().to_fields(),
            SettingsDocId::Theme => ThemeSettings::default().to_fields(),
            SettingsDocId::Preloader => PreloaderContent::default().to_fields(),
        }
    }

    /// Complete object for the admin editor: defaults overlaid with every
    /// stored value readers can interpret. Unrecognized stored fields are
    /// carried through untouched.
    pub fn normalize(self, stored: &Fields) -> Fields {
        let mut complete = self.defaults();

        for (key, value) in stored {
            let accepted = match complete.get(key) {
                Some(default) => self.check_field(key, value, default).is_ok(),
                None => true,
            };
            if accepted {
                complete.insert(key.clone(), value.clone());
            }
        }

        complete
    }

    /// Rejects values of recognized fields that readers could not interpret.
    /// Fields absent from `partial` are not checked.
    pub fn validate_partial(self, partial: &Fields) -> Result<(), String> {
        let defaults = self.defaults();

        partial.iter().try_for_each(|(key, value)| match defaults.get(key) {
            Some(default) => self.check_field(key, value, default),
            None => Ok(()),
        })
    }

    fn check_field(self, key: &str, value: &Value, default: &Value) -> Result<(), String> {
        match default {
            Value::Bool(_) if !value.is_boolean() => {
                return Err(format!("{key} must be a boolean"));
            }
            Value::String(_) if !value.is_string() => {
                return Err(format!("{key} must be a string"));
            }
            _ => {}
        }

        match self {
            SettingsDocId::General => GeneralSettings::check_field(key, value),
            SettingsDocId::Theme => ThemeSettings::check_field(key, value),
            _ => Ok(()),
        }
    }
}

impl FromStr for SettingsDocId {
    type Err = UnknownSettingsDocument;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SettingsDocId::parse(s).ok_or_else(|| UnknownSettingsDocument(s.to_string()))
    }
}

impl fmt::Display for SettingsDocId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
