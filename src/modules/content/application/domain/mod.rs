mod experience;
mod presentation;
mod project;
mod record;
mod skill;

pub use experience::{Experience, ExperienceDraft, Tenure};
pub use presentation::{group_skills, order_experiences, SkillGroup};
pub use project::{
    split_tech, Project, ProjectDraft, ProjectKind, TechInput, DEFAULT_GRADIENT,
    DEFAULT_PROJECT_ICON,
};
pub use record::{CollectionRecord, StoredRecord, ValidationError};
pub use skill::{
    Skill, SkillCategory, SkillDraft, SkillIcon, SkillRevision, DEFAULT_SKILL_COLOR,
    SKILL_SCHEMA_VERSION,
};
