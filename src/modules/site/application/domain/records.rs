use serde::Serialize;

use crate::modules::content::application::domain::{
    group_skills, CollectionRecord, Experience, Project, ProjectKind, Skill, SkillCategory,
    SkillIcon, StoredRecord,
};
use crate::modules::localization::{translate, Lang};
use crate::modules::settings::application::domain::NavSection;

/// How an ordered collection snapshot is shown on the public site.
pub trait Presentable: CollectionRecord {
    type View: Serialize + Send + 'static;

    /// Navigation section whose `show{Section}` flag hides this collection.
    const SECTION: NavSection;

    fn present(records: &[StoredRecord<Self>], lang: Lang) -> Self::View;
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectView {
    pub id: String,
    pub title: String,
    pub desc: String,
    pub image: String,
    pub tech: Vec<String>,
    pub kind: ProjectKind,
    pub kind_label: String,
    pub icon_class: String,
    pub github_url: String,
    pub demo_url: String,
    pub gradient: String,
}

impl Presentable for Project {
    const SECTION: NavSection = NavSection::Projects;
    type View = Vec<ProjectView>;

    fn present(records: &[StoredRecord<Self>], lang: Lang) -> Vec<ProjectView> {
        records
            .iter()
            .map(|StoredRecord { id, record: p }| ProjectView {
                id: id.clone(),
                title: p.title.resolve(lang).unwrap_or_default().to_string(),
                desc: p.desc.resolve(lang).unwrap_or_default().to_string(),
                image: p.image.clone(),
                tech: p.tech.clone(),
                kind: p.kind,
                kind_label: translate(p.kind.label_key(), lang).to_string(),
                icon_class: p.icon_or_default().to_string(),
                github_url: p.github_url.clone(),
                demo_url: p.demo_url.clone(),
                gradient: p.gradient_or_default().to_string(),
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExperienceView {
    pub id: String,
    pub title: String,
    pub company: String,
    pub start_date: String,
    /// The stored end date, or the localized "present" label.
    pub end_date: String,
    pub is_current: bool,
    pub desc: String,
}

impl Presentable for Experience {
    const SECTION: NavSection = NavSection::Experience;
    type View = Vec<ExperienceView>;

    fn present(records: &[StoredRecord<Self>], lang: Lang) -> Vec<ExperienceView> {
        records
            .iter()
            .map(|StoredRecord { id, record: e }| ExperienceView {
                id: id.clone(),
                title: e.title.resolve(lang).unwrap_or_default().to_string(),
                company: e.company.clone(),
                start_date: e.start_date.clone(),
                end_date: if e.tenure.is_current() {
                    translate("current_job", lang).to_string()
                } else {
                    e.tenure.end_date().to_string()
                },
                is_current: e.tenure.is_current(),
                desc: e.desc.resolve(lang).unwrap_or_default().to_string(),
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillView {
    pub id: String,
    pub name: String,
    pub icon: SkillIcon,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillGroupView {
    pub category: SkillCategory,
    pub title: String,
    pub skills: Vec<SkillView>,
}

impl Presentable for Skill {
    const SECTION: NavSection = NavSection::Skills;
    type View = Vec<SkillGroupView>;

    fn present(records: &[StoredRecord<Self>], lang: Lang) -> Vec<SkillGroupView> {
        group_skills(records, |r| SkillView {
            id: r.id.clone(),
            name: r.record.name_in(lang).to_string(),
            icon: r.record.icon.clone(),
            color: r.record.color.clone(),
        })
        .into_iter()
        .map(|group| SkillGroupView {
            category: group.category,
            title: translate(group.category.title_key(), lang).to_string(),
            skills: group.items,
        })
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use crate::tests::support::fixtures::document;

    #[test]
    fn test_project_view_applies_defaults_and_translations() {
        let records = StoredRecord::<Project>::from_snapshot(&[document(
            "p1",
            json!({ "title_ar": "متجر", "type": "mobile" }),
        )]);

        let views = Project::present(&records, Lang::En);

        assert_eq!(views[0].title, "متجر");
        assert_eq!(views[0].kind_label, "Mobile App");
        assert_eq!(views[0].gradient, "from-cyan-400 to-green-400");
        assert_eq!(views[0].icon_class, "fa-solid fa-code");
    }

    #[test]
    fn test_current_experience_shows_present_label() {
        let records = StoredRecord::<Experience>::from_snapshot(&[
            document("e1", json!({ "company": "Old", "startDate": "2018", "endDate": "2020" })),
            document("e2", json!({ "company": "Now", "startDate": "2021", "isCurrent": true })),
        ]);

        let views = Experience::present(&records, Lang::De);

        assert_eq!(views[0].company, "Now");
        assert_eq!(views[0].end_date, "Heute");
        assert_eq!(views[1].end_date, "2020");
    }

    #[test]
    fn test_skill_groups_carry_translated_titles() {
        let records = StoredRecord::<Skill>::from_snapshot(&[
            document("s1", json!({ "name": "Pandas", "category": "data", "icon_url": "u" })),
            document(
                "s2",
                json!({
                    "name_ar": "فلاتر",
                    "name_en": "Flutter",
                    "category": "mobile",
                    "icon_class": "c"
                }),
            ),
        ]);

        let groups = Skill::present(&records, Lang::Ar);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].title, "تطوير الموبايل");
        assert_eq!(groups[0].skills[0].name, "فلاتر");
        assert_eq!(groups[1].skills[0].name, "Pandas");
    }
}
