use crate::modules::localization::application::domain::lang::Lang;

/// Built-in UI strings, one column per locale in `Lang` index order
/// (ar, en, de). Last resort of every localized lookup.
static UI_STRINGS: &[(&str, [&str; 3])] = &[
    // Navigation, keyed by section id
    ("home", ["الرئيسية", "Home", "Startseite"]),
    ("about", ["من أنا", "About Me", "Über mich"]),
    ("experience", ["الخبرات", "Experience", "Erfahrung"]),
    ("skills", ["المهارات", "Skills", "Fähigkeiten"]),
    ("projects", ["المشاريع", "Projects", "Projekte"]),
    ("planner", ["مولد الأفكار", "Idea Generator", "Ideengenerator"]),
    ("contact", ["تواصل معي", "Contact", "Kontakt"]),
    // Page chrome
    ("portfolio_title", ["معرض أعمالي", "My Portfolio", "Mein Portfolio"]),
    ("loading_text", ["جاري التحميل...", "Loading...", "Laden..."]),
    (
        "maintenance_title",
        ["الموقع تحت الصيانة", "Site Under Maintenance", "Website in Wartung"],
    ),
    (
        "maintenance_notice",
        [
            "نحن نقوم ببعض التحديثات والتحسينات حالياً. سنعود قريباً، شكراً لصبركم!",
            "We are making some updates and improvements. We'll be back soon, thanks for your patience!",
            "Wir führen gerade Updates und Verbesserungen durch. Wir sind bald zurück, danke für Ihre Geduld!",
        ],
    ),
    (
        "hero_title",
        ["مرحباً، أنا مطور", "Hi, I'm a developer", "Hallo, ich bin Entwickler"],
    ),
    (
        "hero_subtitle",
        [
            "أبني تطبيقات الويب والموبايل",
            "I build web and mobile applications",
            "Ich entwickle Web- und Mobile-Anwendungen",
        ],
    ),
    ("about_desc", ["", "", ""]),
    (
        "footer_text",
        [
            "تم التصميم والبرمجة بكل شغف. © 2025",
            "Designed and built with passion. © 2025",
            "Mit Leidenschaft gestaltet und entwickelt. © 2025",
        ],
    ),
    ("current_job", ["حتى الآن", "Present", "Heute"]),
    // Skill categories
    ("skills_mobile_title", ["تطوير الموبايل", "Mobile Development", "Mobile Entwicklung"]),
    ("skills_web_title", ["تطوير الويب", "Web Development", "Webentwicklung"]),
    ("skills_data_title", ["البيانات", "Data", "Daten"]),
    ("skills_tools_title", ["الأدوات", "Tools", "Werkzeuge"]),
    // Project kinds
    ("project_type_web", ["تطبيق ويب", "Web App", "Web-App"]),
    ("project_type_mobile", ["تطبيق موبايل", "Mobile App", "Mobile App"]),
    // About stats
    ("stat_projects", ["مشروع منجز", "Projects Done", "Projekte"]),
    ("stat_clients", ["عميل سعيد", "Happy Clients", "Zufriedene Kunden"]),
    ("stat_experience", ["سنوات خبرة", "Years Experience", "Jahre Erfahrung"]),
    ("stat_commitment", ["التزام", "Commitment", "Engagement"]),
    // Contact and idea generator
    (
        "form_success_msg",
        [
            "تم إرسال رسالتك بنجاح!",
            "Your message was sent successfully!",
            "Ihre Nachricht wurde erfolgreich gesendet!",
        ],
    ),
    (
        "form_error_msg",
        [
            "حدث خطأ أثناء الإرسال، حاول مرة أخرى.",
            "Something went wrong, please try again.",
            "Etwas ist schiefgelaufen, bitte versuchen Sie es erneut.",
        ],
    ),
    (
        "generator_error_empty",
        [
            "الرجاء كتابة فكرتك أولاً.",
            "Please describe your idea first.",
            "Bitte beschreiben Sie zuerst Ihre Idee.",
        ],
    ),
    (
        "generator_error_failed",
        [
            "تعذر توليد الخطة، حاول مرة أخرى لاحقاً.",
            "Could not generate a plan, please try again later.",
            "Der Plan konnte nicht erstellt werden, bitte später erneut versuchen.",
        ],
    ),
];

/// UI string for `key` in `lang`.
///
/// Falls back to English when the locale's entry is empty, and to the key
/// itself when the table has no such entry.
pub fn translate<'a>(key: &'a str, lang: Lang) -> &'a str {
    match UI_STRINGS.iter().find(|(k, _)| *k == key) {
        Some((_, values)) => {
            let value = values[lang.index()];
            if value.is_empty() {
                values[Lang::En.index()]
            } else {
                value
            }
        }
        None => key,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_keys_match_section_ids() {
        for key in ["home", "about", "experience", "skills", "projects", "planner", "contact"] {
            assert_ne!(translate(key, Lang::En), key);
        }
    }

    #[test]
    fn test_unknown_key_returns_key() {
        assert_eq!(translate("no_such_key", Lang::De), "no_such_key");
    }

    #[test]
    fn test_every_entry_has_an_english_value_unless_intentionally_blank() {
        let blank: Vec<&str> = UI_STRINGS
            .iter()
            .filter(|(_, v)| v[Lang::En.index()].is_empty())
            .map(|(k, _)| *k)
            .collect();

        assert_eq!(blank, vec!["about_desc"]);
    }

    #[test]
    fn test_locale_column_is_selected() {
        assert_eq!(translate("loading_text", Lang::Ar), "جاري التحميل...");
        assert_eq!(translate("loading_text", Lang::De), "Laden...");
    }
}
