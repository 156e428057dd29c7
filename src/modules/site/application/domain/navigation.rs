use serde::Serialize;

use crate::modules::localization::{translate, Lang};
use crate::modules::settings::application::domain::{NavSection, NavbarContent};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavEntry {
    pub section: NavSection,
    pub href: String,
    pub label: String,
}

/// Visible sections in canonical order, whatever order the navbar document
/// stores them in.
pub fn resolve_navigation(navbar: &NavbarContent, lang: Lang) -> Vec<NavEntry> {
    NavSection::ALL
        .into_iter()
        .filter(|section| navbar.is_visible(*section))
        .map(|section| {
            let label = match navbar.section(section) {
                Some(config) => config.label.resolve_or_translate(lang, section.id()),
                None => translate(section.id(), lang).to_string(),
            };
            NavEntry {
                section,
                href: format!("#{}", section.id()),
                label,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use crate::modules::settings::application::domain::SettingsDocument;
    use crate::tests::support::fixtures::fields;

    #[test]
    fn test_default_navbar_lists_every_section() {
        let entries = resolve_navigation(&NavbarContent::default(), Lang::En);

        let ids: Vec<&str> = entries.iter().map(|e| e.section.id()).collect();
        assert_eq!(
            ids,
            vec!["home", "about", "experience", "skills", "projects", "planner", "contact"]
        );
        assert_eq!(entries[0].label, "Home");
        assert_eq!(entries[0].href, "#home");
    }

    #[test]
    fn test_hidden_sections_are_skipped() {
        let navbar = NavbarContent::from_fields(&fields(json!({
            "showPlanner": false,
            "showSkills": false
        })));

        let entries = resolve_navigation(&navbar, Lang::Ar);

        assert_eq!(entries.len(), 5);
        assert!(entries.iter().all(|e| e.section != NavSection::Planner));
    }

    #[test]
    fn test_custom_label_falls_through_locales() {
        let navbar = NavbarContent::from_fields(&fields(json!({
            "label_projects_en": "Work"
        })));

        let entries = resolve_navigation(&navbar, Lang::De);
        let projects = entries
            .iter()
            .find(|e| e.section == NavSection::Projects)
            .unwrap();

        assert_eq!(projects.label, "Work");
    }
}
