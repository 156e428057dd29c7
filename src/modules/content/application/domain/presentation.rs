use serde::Serialize;

use crate::modules::content::application::domain::experience::Experience;
use crate::modules::content::application::domain::record::StoredRecord;
use crate::modules::content::application::domain::skill::{Skill, SkillCategory};

/// Current first, then start date descending, then id ascending.
pub fn order_experiences(records: &mut [StoredRecord<Experience>]) {
    records.sort_by(|a, b| a.record.display_cmp(&b.record).then_with(|| a.id.cmp(&b.id)));
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillGroup<T> {
    pub category: SkillCategory,
    pub items: Vec<T>,
}

/// One group per canonical category, in canonical order. Storage order is
/// kept inside a group, empty groups are dropped, and skills with an unknown
/// category are not shown.
pub fn group_skills<T>(
    records: &[StoredRecord<Skill>],
    mut view: impl FnMut(&StoredRecord<Skill>) -> T,
) -> Vec<SkillGroup<T>> {
    SkillCategory::ALL
        .into_iter()
        .filter_map(|category| {
            let items: Vec<T> = records
                .iter()
                .filter(|r| r.record.category == Some(category))
                .map(&mut view)
                .collect();
            (!items.is_empty()).then_some(SkillGroup { category, items })
        })
        .collect()
}
