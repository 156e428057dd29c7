use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::modules::content::application::domain::record::{
    trimmed, CollectionRecord, StoredRecord, ValidationError,
};
use crate::modules::document_store::application::domain::entities::{collections, Fields};
use crate::modules::localization::{Lang, LocalizedText};

pub const DEFAULT_SKILL_COLOR: &str = "#00f0ff";
pub const SKILL_SCHEMA_VERSION: u64 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    #[default]
    Mobile,
    Web,
    Data,
    Tools,
}

impl SkillCategory {
    /// Canonical presentation order.
    pub const ALL: [SkillCategory; 4] = [
        SkillCategory::Mobile,
        SkillCategory::Web,
        SkillCategory::Data,
        SkillCategory::Tools,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SkillCategory::Mobile => "mobile",
            SkillCategory::Web => "web",
            SkillCategory::Data => "data",
            SkillCategory::Tools => "tools",
        }
    }

    pub fn parse(value: &str) -> Option<SkillCategory> {
        let value = value.trim();
        SkillCategory::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(value))
    }

    pub fn title_key(self) -> &'static str {
        match self {
            SkillCategory::Mobile => "skills_mobile_title",
            SkillCategory::Web => "skills_web_title",
            SkillCategory::Data => "skills_data_title",
            SkillCategory::Tools => "skills_tools_title",
        }
    }

    fn rank(category: Option<SkillCategory>) -> usize {
        category
            .and_then(|c| SkillCategory::ALL.iter().position(|x| *x == c))
            .unwrap_or(SkillCategory::ALL.len())
    }
}

/// Either a Font Awesome class or an image URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum SkillIcon {
    Class(String),
    Url(String),
}

impl SkillIcon {
    /// A non-blank URL wins over a class.
    fn pick(icon_url: &str, icon_class: &str) -> Option<SkillIcon> {
        let (url, class) = (icon_url.trim(), icon_class.trim());
        if !url.is_empty() {
            Some(SkillIcon::Url(url.to_string()))
        } else if !class.is_empty() {
            Some(SkillIcon::Class(class.to_string()))
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Skill {
    pub name: LocalizedText,
    pub icon: SkillIcon,
    /// `None` when the stored category is not one of the canonical four.
    pub category: Option<SkillCategory>,
    pub color: String,
}

impl Skill {
    pub fn name_in(&self, lang: Lang) -> &str {
        self.name.resolve(lang).unwrap_or_default()
    }
}

/// Every shape a skill has been stored in.
#[derive(Debug, Clone, PartialEq)]
pub enum SkillRevision {
    /// `name_ar`/`name_en` with an `icon_class`.
    V1Localized {
        name: LocalizedText,
        icon_class: String,
        category: String,
        color: String,
    },
    /// A single `name` with an `icon_url`.
    V1Plain {
        name: String,
        icon_url: String,
        category: String,
        color: String,
    },
    V2(Skill),
}

impl SkillRevision {
    pub fn read(fields: &Fields) -> SkillRevision {
        let category = trimmed(fields, "category");
        let color = trimmed(fields, "color");
        let version = fields.get("schemaVersion").and_then(Value::as_u64);

        if version == Some(SKILL_SCHEMA_VERSION) {
            let mut name = LocalizedText::read(fields, "name");
            let plain = trimmed(fields, "name");
            if name.is_blank() {
                name.en = plain;
            }
            return SkillRevision::V2(Skill {
                name,
                icon: SkillIcon::pick(
                    &trimmed(fields, "icon_url"),
                    &trimmed(fields, "icon_class"),
                )
                .unwrap_or_else(|| SkillIcon::Class(String::new())),
                category: SkillCategory::parse(&category),
                color: non_blank_color(color),
            });
        }

        let name = LocalizedText::read(fields, "name");
        if !name.is_blank() {
            let icon_class = match SkillIcon::pick(
                &trimmed(fields, "icon_url"),
                &trimmed(fields, "icon_class"),
            ) {
                Some(SkillIcon::Url(url)) => {
                    // Localized name with an uploaded icon: both survive.
                    return SkillRevision::V2(Skill {
                        name,
                        icon: SkillIcon::Url(url),
                        category: SkillCategory::parse(&category),
                        color: non_blank_color(color),
                    });
                }
                Some(SkillIcon::Class(class)) => class,
                None => String::new(),
            };
            return SkillRevision::V1Localized {
                name,
                icon_class,
                category,
                color,
            };
        }

        SkillRevision::V1Plain {
            name: trimmed(fields, "name"),
            icon_url: trimmed(fields, "icon_url"),
            category,
            color,
        }
    }

    pub fn normalize(self) -> Skill {
        match self {
            SkillRevision::V2(skill) => skill,
            SkillRevision::V1Localized {
                name,
                icon_class,
                category,
                color,
            } => Skill {
                name,
                icon: SkillIcon::Class(icon_class),
                category: SkillCategory::parse(&category),
                color: non_blank_color(color),
            },
            SkillRevision::V1Plain {
                name,
                icon_url,
                category,
                color,
            } => Skill {
                name: LocalizedText::new("", name, ""),
                icon: SkillIcon::Url(icon_url),
                category: SkillCategory::parse(&category),
                color: non_blank_color(color),
            },
        }
    }
}

fn non_blank_color(color: String) -> String {
    if color.trim().is_empty() {
        DEFAULT_SKILL_COLOR.to_string()
    } else {
        color
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SkillDraft {
    pub name_ar: String,
    pub name_en: String,
    pub name_de: String,
    pub category: String,
    pub icon_class: String,
    pub icon_url: String,
    pub color: String,
}

impl CollectionRecord for Skill {
    const COLLECTION: &'static str = collections::SKILLS;
    type Draft = SkillDraft;

    fn from_draft(draft: SkillDraft) -> Result<Self, ValidationError> {
        if draft.name_ar.trim().is_empty() {
            return Err(ValidationError::required("name_ar"));
        }
        let category = SkillCategory::parse(&draft.category).ok_or_else(|| {
            ValidationError(format!(
                "category must be one of mobile, web, data, tools (got '{}')",
                draft.category.trim()
            ))
        })?;
        let icon = SkillIcon::pick(&draft.icon_url, &draft.icon_class)
            .ok_or_else(|| ValidationError::required("icon_class"))?;

        Ok(Skill {
            name: LocalizedText::new(
                draft.name_ar.trim(),
                draft.name_en.trim(),
                draft.name_de.trim(),
            ),
            icon,
            category: Some(category),
            color: non_blank_color(draft.color.trim().to_string()),
        })
    }

    fn from_fields(fields: &Fields) -> Self {
        SkillRevision::read(fields).normalize()
    }

    fn to_fields(&self) -> Fields {
        let mut fields = Fields::new();
        fields.insert(
            "name".into(),
            Value::String(self.name.resolve(Lang::En).unwrap_or_default().to_string()),
        );
        self.name.write(&mut fields, "name");
        match &self.icon {
            SkillIcon::Class(class) => fields.insert("icon_class".into(), json!(class)),
            SkillIcon::Url(url) => fields.insert("icon_url".into(), json!(url)),
        };
        fields.insert(
            "category".into(),
            json!(self.category.map(SkillCategory::as_str).unwrap_or_default()),
        );
        fields.insert("color".into(), json!(self.color));
        fields.insert("schemaVersion".into(), json!(SKILL_SCHEMA_VERSION));
        fields
    }

    /// Stable sort by canonical category; unknown categories go last.
    fn order(records: &mut Vec<StoredRecord<Self>>) {
        records.sort_by_key(|r| SkillCategory::rank(r.record.category));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::fixtures::fields;

    #[test]
    fn test_legacy_localized_shape_is_normalized() {
        let skill = Skill::from_fields(&fields(json!({
            "name_ar": "فلاتر",
            "name_en": "Flutter",
            "icon_class": "fa-brands fa-flutter",
            "category": "mobile"
        })));

        assert_eq!(skill.name_in(Lang::De), "Flutter");
        assert_eq!(skill.icon, SkillIcon::Class("fa-brands fa-flutter".into()));
        assert_eq!(skill.category, Some(SkillCategory::Mobile));
        assert_eq!(skill.color, DEFAULT_SKILL_COLOR);
    }

    #[test]
    fn test_legacy_plain_shape_is_normalized() {
        let skill = Skill::from_fields(&fields(json!({
            "name": "Docker",
            "icon_url": "https://cdn/docker.svg",
            "category": "tools",
            "color": "#2496ed"
        })));

        assert_eq!(skill.name, LocalizedText::new("", "Docker", ""));
        assert_eq!(skill.name_in(Lang::Ar), "Docker");
        assert_eq!(skill.icon, SkillIcon::Url("https://cdn/docker.svg".into()));
        assert_eq!(skill.color, "#2496ed");
    }

    #[test]
    fn test_localized_name_with_icon_url_keeps_every_language() {
        let fields = fields(json!({
            "name_ar": "فلاتر",
            "name_en": "Flutter",
            "icon_url": "https://cdn/flutter.svg",
            "category": "mobile"
        }));

        let revision = SkillRevision::read(&fields);
        assert!(matches!(revision, SkillRevision::V2(_)));

        let skill = revision.normalize();
        assert_eq!(skill.name_in(Lang::Ar), "فلاتر");
        assert_eq!(skill.name_in(Lang::En), "Flutter");
        assert_eq!(skill.icon, SkillIcon::Url("https://cdn/flutter.svg".into()));
        assert_eq!(skill.category, Some(SkillCategory::Mobile));
    }

    #[test]
    fn test_current_shape_survives_write_then_read() {
        let written = Skill {
            name: LocalizedText::new("رست", "Rust", ""),
            icon: SkillIcon::Url("https://cdn/rust.svg".into()),
            category: Some(SkillCategory::Tools),
            color: "#000000".into(),
        }
        .to_fields();

        assert_eq!(written["schemaVersion"], json!(2));
        assert_eq!(written["name"], json!("Rust"));
        assert!(!written.contains_key("icon_class"));
        assert!(matches!(SkillRevision::read(&written), SkillRevision::V2(_)));
    }

    #[test]
    fn test_unknown_category_reads_as_none() {
        let skill = Skill::from_fields(&fields(json!({ "name": "X", "category": "games" })));

        assert_eq!(skill.category, None);
    }

    #[test]
    fn test_draft_requires_name_category_and_icon() {
        let base = json!({ "name_ar": "رست", "category": "web", "icon_class": "fa-rust" });
        assert!(Skill::from_draft(serde_json::from_value(base).unwrap()).is_ok());

        let no_name: SkillDraft =
            serde_json::from_value(json!({ "category": "web", "icon_class": "x" })).unwrap();
        let bad_category: SkillDraft = serde_json::from_value(json!({
            "name_ar": "a",
            "category": "games",
            "icon_class": "x"
        }))
        .unwrap();
        let no_icon: SkillDraft =
            serde_json::from_value(json!({ "name_ar": "a", "category": "web" })).unwrap();

        assert_eq!(
            Skill::from_draft(no_name).unwrap_err(),
            ValidationError::required("name_ar")
        );
        assert!(Skill::from_draft(bad_category).is_err());
        assert_eq!(
            Skill::from_draft(no_icon).unwrap_err(),
            ValidationError::required("icon_class")
        );
    }

    #[test]
    fn test_order_groups_by_category_preserving_storage_order() {
        let record = |id: &str, category: Option<SkillCategory>| {
            StoredRecord::new(
                id,
                Skill {
                    name: LocalizedText::default(),
                    icon: SkillIcon::Class(String::new()),
                    category,
                    color: DEFAULT_SKILL_COLOR.into(),
                },
            )
        };
        let mut records = vec![
            record("t1", Some(SkillCategory::Tools)),
            record("x", None),
            record("w1", Some(SkillCategory::Web)),
            record("m1", Some(SkillCategory::Mobile)),
            record("w2", Some(SkillCategory::Web)),
        ];

        Skill::order(&mut records);

        let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["m1", "w1", "w2", "t1", "x"]);
    }
}
