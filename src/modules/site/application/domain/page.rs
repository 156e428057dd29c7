use serde::Serialize;

use crate::modules::content::application::domain::{Experience, Project, Skill, StoredRecord};
use crate::modules::localization::{translate, Lang, TextDirection};
use crate::modules::settings::application::domain::{
    GeneralSettings, HeaderContent, NavSection, NavbarContent, PortfolioAbout, PreloaderContent,
    SeoContent, Theme, ThemeSettings,
};
use crate::modules::settings::application::service::SettingsSnapshot;
use crate::modules::site::application::domain::navigation::{resolve_navigation, NavEntry};
use crate::modules::site::application::domain::palette::hex_to_hsl;
use crate::modules::site::application::domain::records::{
    ExperienceView, Presentable, ProjectView, SkillGroupView,
};

/// Hero badges shown while the header document has none.
pub const DEFAULT_BADGES: [&str; 3] = ["UI/UX Design", "Mobile Apps", "Web Development"];

/// The whole public page for one language, or the maintenance notice.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum SiteView {
    Maintenance(MaintenanceView),
    Normal(Box<PageView>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaintenanceView {
    pub lang: Lang,
    pub dir: TextDirection,
    pub title: String,
    pub notice: String,
}

impl MaintenanceView {
    pub fn new(lang: Lang) -> Self {
        Self {
            lang,
            dir: lang.direction(),
            title: translate("maintenance_title", lang).to_string(),
            notice: translate("maintenance_notice", lang).to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogoView {
    pub icon_class: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeroView {
    pub title: String,
    pub subtitle: String,
    pub badges: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatView {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AboutView {
    pub desc: String,
    pub stats: Vec<StatView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeoView {
    pub description: String,
    pub keywords: String,
    pub author: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThemeView {
    pub primary_color: String,
    /// `"H S% L%"`, ready for a CSS custom property.
    pub primary_hsl: String,
    pub default_theme: Theme,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreloaderView {
    pub icon_class: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FooterView {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactView {
    pub email: String,
    pub phone: String,
    pub location: String,
    pub github: String,
    pub linkedin: String,
    pub twitter: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageView {
    pub lang: Lang,
    pub dir: TextDirection,
    pub navigation: Vec<NavEntry>,
    pub visible_sections: Vec<NavSection>,
    pub logo: LogoView,
    pub hero: HeroView,
    pub about: AboutView,
    pub seo: SeoView,
    pub theme: ThemeView,
    pub preloader: PreloaderView,
    pub footer: FooterView,
    pub contact: ContactView,
    pub projects: Vec<ProjectView>,
    pub experiences: Vec<ExperienceView>,
    pub skills: Vec<SkillGroupView>,
}

/// Collection records fetched for the page. Hidden sections stay empty.
#[derive(Debug, Clone, Default)]
pub struct SiteContent {
    pub projects: Vec<StoredRecord<Project>>,
    pub experiences: Vec<StoredRecord<Experience>>,
    pub skills: Vec<StoredRecord<Skill>>,
}

impl PageView {
    pub fn compose(settings: &SettingsSnapshot, lang: Lang, content: &SiteContent) -> Self {
        let general: GeneralSettings = settings.get();
        let navbar: NavbarContent = settings.get();
        let header: HeaderContent = settings.get();
        let about: PortfolioAbout = settings.get();
        let seo: SeoContent = settings.get();
        let theme: ThemeSettings = settings.get();
        let preloader: PreloaderContent = settings.get();

        let navigation = resolve_navigation(&navbar, lang);
        let visible_sections = navigation.iter().map(|entry| entry.section).collect();

        let mut badges = header.badge_list();
        if badges.is_empty() {
            badges = DEFAULT_BADGES.iter().map(|b| b.to_string()).collect();
        }

        let stat = |value: &str, suffix: &str, label_key: &str| StatView {
            value: format!("{}{}", value.trim(), suffix),
            label: translate(label_key, lang).to_string(),
        };

        PageView {
            lang,
            dir: lang.direction(),
            navigation,
            visible_sections,
            logo: LogoView {
                icon_class: navbar.logo_icon_class.clone(),
                text: navbar.logo_text.resolve_or_translate(lang, "portfolio_title"),
            },
            hero: HeroView {
                title: header.hero_title.resolve_or_translate(lang, "hero_title"),
                subtitle: header.hero_subtitle.resolve_or_translate(lang, "hero_subtitle"),
                badges,
            },
            about: AboutView {
                desc: about.desc.resolve_or_translate(lang, "about_desc"),
                stats: vec![
                    stat(&about.projects, "+", "stat_projects"),
                    stat(&about.clients, "+", "stat_clients"),
                    stat(&about.experience, "+", "stat_experience"),
                    stat(&about.commitment, "%", "stat_commitment"),
                ],
            },
            seo: SeoView {
                description: seo.meta_description.resolve(lang).unwrap_or_default().to_string(),
                keywords: seo.meta_keywords,
                author: seo.meta_author,
            },
            theme: ThemeView {
                primary_hsl: hex_to_hsl(&theme.primary_color),
                primary_color: theme.primary_hex(),
                default_theme: theme.default_theme,
            },
            preloader: PreloaderView {
                icon_class: preloader.icon_class,
                text: preloader.text.resolve_or_translate(lang, "loading_text"),
            },
            footer: FooterView {
                text: general.footer.resolve_or_translate(lang, "footer_text"),
            },
            contact: ContactView {
                location: general.location.resolve(lang).unwrap_or_default().to_string(),
                email: general.email,
                phone: general.phone,
                github: general.github,
                linkedin: general.linkedin,
                twitter: general.twitter,
            },
            projects: Project::present(&content.projects, lang),
            experiences: Experience::present(&content.experiences, lang),
            skills: Skill::present(&content.skills, lang),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use crate::modules::settings::application::domain::theme::DEFAULT_PRIMARY_COLOR;
    use crate::tests::support::fixtures::document;

    fn snapshot(docs: Vec<(&str, serde_json::Value)>) -> SettingsSnapshot {
        SettingsSnapshot::from_documents(docs.into_iter().map(|(id, v)| document(id, v)).collect())
    }

    #[test]
    fn test_empty_settings_render_built_in_defaults() {
        let page = PageView::compose(
            &SettingsSnapshot::default(),
            Lang::En,
            &SiteContent::default(),
        );

        assert_eq!(page.dir, TextDirection::Ltr);
        assert_eq!(page.logo.text, "My Portfolio");
        assert_eq!(page.hero.badges, DEFAULT_BADGES.to_vec());
        assert_eq!(page.theme.primary_hsl, "184 100% 50%");
        assert_eq!(page.preloader.text, "Loading...");
        assert_eq!(page.navigation.len(), 7);
    }

    #[test]
    fn test_about_stats_carry_suffixes() {
        let settings = snapshot(vec![(
            "portfolioAbout",
            json!({ "projects": "40", "clients": "25", "experience": "6", "commitment": "100" }),
        )]);

        let page = PageView::compose(&settings, Lang::Ar, &SiteContent::default());

        let values: Vec<&str> = page.about.stats.iter().map(|s| s.value.as_str()).collect();
        assert_eq!(values, vec!["40+", "25+", "6+", "100%"]);
        assert_eq!(page.dir, TextDirection::Rtl);
    }

    #[test]
    fn test_stored_badges_and_bad_colour() {
        let settings = snapshot(vec![
            ("headerContent", json!({ "badges": "Rust, , Actix" })),
            ("themeSettings", json!({ "primaryColor": "teal", "defaultTheme": "light" })),
        ]);

        let page = PageView::compose(&settings, Lang::De, &SiteContent::default());

        assert_eq!(page.hero.badges, vec!["Rust", "Actix"]);
        assert_eq!(page.theme.primary_color, DEFAULT_PRIMARY_COLOR);
        assert_eq!(page.theme.primary_hsl, "194 98% 49%");
        assert_eq!(page.theme.default_theme, Theme::Light);
    }

    #[test]
    fn test_maintenance_view_serializes_state_tag() {
        let view = SiteView::Maintenance(MaintenanceView::new(Lang::En));

        let json = serde_json::to_value(&view).unwrap();

        assert_eq!(json["state"], "maintenance");
        assert_eq!(json["title"], "Site Under Maintenance");
        assert!(json["notice"].as_str().unwrap().starts_with("We are making"));
    }
}
