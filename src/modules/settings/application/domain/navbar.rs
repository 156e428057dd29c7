use serde::Serialize;

use crate::modules::document_store::application::domain::entities::Fields;
use crate::modules::localization::{translate, Lang, LocalizedText};
use crate::modules::settings::application::domain::document_id::SettingsDocId;
use crate::modules::settings::application::domain::entities::SettingsDocument;
use crate::modules::settings::application::domain::{bool_or, text_or};

pub const DEFAULT_LOGO_ICON: &str = "fa-solid fa-layer-group";

/// Page sections that can appear in the navigation, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NavSection {
    Home,
    About,
    Experience,
    Skills,
    Projects,
    Planner,
    Contact,
}

impl NavSection {
    pub const ALL: [NavSection; 7] = [
        NavSection::Home,
        NavSection::About,
        NavSection::Experience,
        NavSection::Skills,
        NavSection::Projects,
        NavSection::Planner,
        NavSection::Contact,
    ];

    /// Anchor id on the page; also the UI translation key of its label.
    pub fn id(self) -> &'static str {
        match self {
            NavSection::Home => "home",
            NavSection::About => "about",
            NavSection::Experience => "experience",
            NavSection::Skills => "skills",
            NavSection::Projects => "projects",
            NavSection::Planner => "planner",
            NavSection::Contact => "contact",
        }
    }

    /// `showHome`, `showPlanner`, ...
    pub fn show_key(self) -> String {
        let id = self.id();
        let mut key = String::with_capacity(4 + id.len());
        key.push_str("show");
        let mut chars = id.chars();
        if let Some(first) = chars.next() {
            key.extend(first.to_uppercase());
            key.push_str(chars.as_str());
        }
        key
    }

    /// Base of the `label_{section}_{lang}` fields.
    pub fn label_base(self) -> String {
        format!("label_{}", self.id())
    }

    pub fn builtin_label(self) -> LocalizedText {
        LocalizedText::new(
            translate(self.id(), Lang::Ar),
            translate(self.id(), Lang::En),
            translate(self.id(), Lang::De),
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NavSectionConfig {
    pub section: NavSection,
    pub visible: bool,
    pub label: LocalizedText,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NavbarContent {
    pub logo_icon_class: String,
    pub logo_text: LocalizedText,
    /// One entry per [`NavSection`], always in canonical order.
    pub sections: Vec<NavSectionConfig>,
}

impl NavbarContent {
    pub fn section(&self, section: NavSection) -> Option<&NavSectionConfig> {
        self.sections.iter().find(|s| s.section == section)
    }

    /// Sections default to visible when the navbar says nothing about them.
    pub fn is_visible(&self, section: NavSection) -> bool {
        self.section(section).map(|s| s.visible).unwrap_or(true)
    }
}

impl Default for NavbarContent {
    fn default() -> Self {
        Self {
            logo_icon_class: DEFAULT_LOGO_ICON.to_string(),
            logo_text: LocalizedText::new("معرض أعمالي", "My Portfolio", "Mein Portfolio"),
            sections: NavSection::ALL
                .into_iter()
                .map(|section| NavSectionConfig {
                    section,
                    visible: true,
                    label: section.builtin_label(),
                })
                .collect(),
        }
    }
}

impl SettingsDocument for NavbarContent {
    const ID: SettingsDocId = SettingsDocId::Navbar;

    fn from_fields(fields: &Fields) -> Self {
        Self {
            logo_icon_class: text_or(fields, "logoIconClass", DEFAULT_LOGO_ICON),
            logo_text: LocalizedText::read(fields, "logoText"),
            sections: NavSection::ALL
                .into_iter()
                .map(|section| NavSectionConfig {
                    section,
                    visible: bool_or(fields, &section.show_key(), true),
                    label: LocalizedText::read(fields, &section.label_base()),
                })
                .collect(),
        }
    }

    fn to_fields(&self) -> Fields {
        let mut f = Fields::new();
        f.insert("logoIconClass".into(), self.logo_icon_class.clone().into());
        self.logo_text.write(&mut f, "logoText");
        for config in &self.sections {
            f.insert(config.section.show_key(), config.visible.into());
            config.label.write(&mut f, &config.section.label_base());
        }
        f
    }
}
