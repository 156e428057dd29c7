use serde_json::Value;

use crate::modules::document_store::application::domain::entities::Fields;
use crate::modules::localization::{Lang, LocalizedText};
use crate::modules::settings::application::domain::document_id::SettingsDocId;
use crate::modules::settings::application::domain::{bool_or, text_or};

/// A typed view of one settings document.
///
/// `Default` holds the editor's initial values, used when the document was
/// never saved. `from_fields` never fails: missing or wrongly-typed fields
/// read as empty, leaving the localized fallback chain to fill them.
pub trait SettingsDocument: Default + Sized {
    const ID: SettingsDocId;

    fn from_fields(fields: &Fields) -> Self;

    fn to_fields(&self) -> Fields;
}

fn put(fields: &mut Fields, key: &str, value: impl Into<Value>) {
    fields.insert(key.to_string(), value.into());
}

//
// ──────────────────────────────────────────────────────────
// generalSettings
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeneralSettings {
    pub maintenance_mode: bool,
    pub default_lang: Lang,
    pub email: String,
    pub phone: String,
    pub location: LocalizedText,
    pub github: String,
    pub linkedin: String,
    pub twitter: String,
    pub formspree_url: String,
    pub footer: LocalizedText,
}

impl GeneralSettings {
    pub(crate) fn check_field(key: &str, value: &Value) -> Result<(), String> {
        match (key, value) {
            ("defaultLang", Value::String(code)) if Lang::parse(code).is_none() => {
                Err(format!("defaultLang must be one of ar, en, de (got {code})"))
            }
            _ => Ok(()),
        }
    }
}

impl SettingsDocument for GeneralSettings {
    const ID: SettingsDocId = SettingsDocId::General;

    fn from_fields(fields: &Fields) -> Self {
        Self {
            maintenance_mode: bool_or(fields, "maintenanceMode", false),
            default_lang: fields
                .get("defaultLang")
                .and_then(Value::as_str)
                .and_then(Lang::parse)
                .unwrap_or_default(),
            email: text_or(fields, "email", ""),
            phone: text_or(fields, "phone", ""),
            location: LocalizedText::read(fields, "location"),
            github: text_or(fields, "github", ""),
            linkedin: text_or(fields, "linkedin", ""),
            twitter: text_or(fields, "twitter", ""),
            formspree_url: text_or(fields, "formspreeUrl", ""),
            footer: LocalizedText::read(fields, "footer"),
        }
    }

    fn to_fields(&self) -> Fields {
        let mut f = Fields::new();
        put(&mut f, "maintenanceMode", self.maintenance_mode);
        put(&mut f, "defaultLang", self.default_lang.code());
        put(&mut f, "email", self.email.as_str());
        put(&mut f, "phone", self.phone.as_str());
        self.location.write(&mut f, "location");
        put(&mut f, "github", self.github.as_str());
        put(&mut f, "linkedin", self.linkedin.as_str());
        put(&mut f, "twitter", self.twitter.as_str());
        put(&mut f, "formspreeUrl", self.formspree_url.as_str());
        self.footer.write(&mut f, "footer");
        f
    }
}

//
// ──────────────────────────────────────────────────────────
// headerContent
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeaderContent {
    pub hero_title: LocalizedText,
    pub hero_subtitle: LocalizedText,
    /// Comma-joined, as edited.
    pub badges: String,
}

impl HeaderContent {
    pub fn badge_list(&self) -> Vec<String> {
        self.badges
            .split(',')
            .map(str::trim)
            .filter(|b| !b.is_empty())
            .map(str::to_string)
            .collect()
    }
}

impl SettingsDocument for HeaderContent {
    const ID: SettingsDocId = SettingsDocId::Header;

    fn from_fields(fields: &Fields) -> Self {
        Self {
            hero_title: LocalizedText::read(fields, "hero_title"),
            hero_subtitle: LocalizedText::read(fields, "hero_subtitle"),
            badges: text_or(fields, "badges", ""),
        }
    }

    fn to_fields(&self) -> Fields {
        let mut f = Fields::new();
        self.hero_title.write(&mut f, "hero_title");
        self.hero_subtitle.write(&mut f, "hero_subtitle");
        put(&mut f, "badges", self.badges.as_str());
        f
    }
}

//
// ──────────────────────────────────────────────────────────
// portfolioAbout
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PortfolioAbout {
    pub desc: LocalizedText,
    pub projects: String,
    pub clients: String,
    pub experience: String,
    pub commitment: String,
}

impl SettingsDocument for PortfolioAbout {
    const ID: SettingsDocId = SettingsDocId::About;

    fn from_fields(fields: &Fields) -> Self {
        Self {
            desc: LocalizedText::read(fields, "desc"),
            projects: text_or(fields, "projects", ""),
            clients: text_or(fields, "clients", ""),
            experience: text_or(fields, "experience", ""),
            commitment: text_or(fields, "commitment", ""),
        }
    }

    fn to_fields(&self) -> Fields {
        let mut f = Fields::new();
        self.desc.write(&mut f, "desc");
        put(&mut f, "projects", self.projects.as_str());
        put(&mut f, "clients", self.clients.as_str());
        put(&mut f, "experience", self.experience.as_str());
        put(&mut f, "commitment", self.commitment.as_str());
        f
    }
}

//
// ──────────────────────────────────────────────────────────
// seoContent
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeoContent {
    pub meta_description: LocalizedText,
    pub meta_keywords: String,
    pub meta_author: String,
}

impl SettingsDocument for SeoContent {
    const ID: SettingsDocId = SettingsDocId::Seo;

    fn from_fields(fields: &Fields) -> Self {
        Self {
            meta_description: LocalizedText::read(fields, "meta_description"),
            meta_keywords: text_or(fields, "meta_keywords", ""),
            meta_author: text_or(fields, "meta_author", ""),
        }
    }

    fn to_fields(&self) -> Fields {
        let mut f = Fields::new();
        self.meta_description.write(&mut f, "meta_description");
        put(&mut f, "meta_keywords", self.meta_keywords.as_str());
        put(&mut f, "meta_author", self.meta_author.as_str());
        f
    }
}

//
// ──────────────────────────────────────────────────────────
// preloaderContent
// ──────────────────────────────────────────────────────────
//

pub const DEFAULT_PRELOADER_ICON: &str = "fa-solid fa-layer-group";

#[derive(Debug, Clone, PartialEq)]
pub struct PreloaderContent {
    pub icon_class: String,
    pub text: LocalizedText,
}

impl PreloaderContent {
    fn default_text() -> LocalizedText {
        LocalizedText::new("جاري التحميل...", "Loading...", "Laden...")
    }
}

impl Default for PreloaderContent {
    fn default() -> Self {
        Self {
            icon_class: DEFAULT_PRELOADER_ICON.to_string(),
            text: Self::default_text(),
        }
    }
}

impl SettingsDocument for PreloaderContent {
    const ID: SettingsDocId = SettingsDocId::Preloader;

    fn from_fields(fields: &Fields) -> Self {
        Self {
            icon_class: text_or(fields, "icon_class", DEFAULT_PRELOADER_ICON),
            text: LocalizedText::read(fields, "text"),
        }
    }

    fn to_fields(&self) -> Fields {
        let mut f = Fields::new();
        put(&mut f, "icon_class", self.icon_class.as_str());
        self.text.write(&mut f, "text");
        f
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(value: Value) -> Fields {
        match value {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_general_settings_defaults() {
        let general = GeneralSettings::from_fields(&Fields::new());

        assert!(!general.maintenance_mode);
        assert_eq!(general.default_lang, Lang::Ar);
        assert_eq!(general.email, "");
    }

    #[test]
    fn test_general_settings_invalid_default_lang_reads_as_arabic() {
        let general = GeneralSettings::from_fields(&fields(json!({ "defaultLang": "fr" })));

        assert_eq!(general.default_lang, Lang::Ar);
    }

    #[test]
    fn test_general_settings_reads_stored_values() {
        let general = GeneralSettings::from_fields(&fields(json!({
            "maintenanceMode": true,
            "defaultLang": "de",
            "email": "me@example.com",
            "footer_en": "Built with care",
        })));

        assert!(general.maintenance_mode);
        assert_eq!(general.default_lang, Lang::De);
        assert_eq!(general.email, "me@example.com");
        assert_eq!(general.footer.resolve(Lang::De), Some("Built with care"));
    }

    #[test]
    fn test_badge_list_trims_and_drops_empties() {
        let header = HeaderContent {
            badges: " UI/UX Design, ,Mobile Apps ,".to_string(),
            ..Default::default()
        };

        assert_eq!(header.badge_list(), vec!["UI/UX Design", "Mobile Apps"]);
    }

    #[test]
    fn test_preloader_missing_locale_follows_fallback_chain() {
        let preloader = PreloaderContent::from_fields(&fields(json!({ "text_en": "Hold on" })));

        assert_eq!(preloader.icon_class, DEFAULT_PRELOADER_ICON);
        assert_eq!(preloader.text.resolve(Lang::De), Some("Hold on"));
    }

    #[test]
    fn test_preloader_default_carries_editor_text() {
        let preloader = PreloaderContent::default();

        assert_eq!(preloader.text.de, "Laden...");
        assert_eq!(preloader.text.ar, "جاري التحميل...");
    }

    #[test]
    fn test_about_round_trips_through_fields() {
        let about = PortfolioAbout {
            desc: LocalizedText::new("نبذة", "Bio", ""),
            projects: "40".into(),
            clients: "25".into(),
            experience: "6".into(),
            commitment: "100".into(),
        };

        assert_eq!(PortfolioAbout::from_fields(&about.to_fields()), about);
    }
}
