use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::modules::content::application::domain::record::{
    trimmed, CollectionRecord, ValidationError,
};
use crate::modules::document_store::application::domain::entities::{collections, Fields};
use crate::modules::localization::LocalizedText;

pub const DEFAULT_PROJECT_ICON: &str = "fa-solid fa-code";
pub const DEFAULT_GRADIENT: &str = "from-cyan-400 to-green-400";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectKind {
    #[default]
    Web,
    Mobile,
}

impl ProjectKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ProjectKind::Web => "web",
            ProjectKind::Mobile => "mobile",
        }
    }

    pub fn parse(value: &str) -> Option<ProjectKind> {
        match value.trim().to_ascii_lowercase().as_str() {
            "web" => Some(ProjectKind::Web),
            "mobile" => Some(ProjectKind::Mobile),
            _ => None,
        }
    }

    /// UI translation key of the type badge.
    pub fn label_key(self) -> &'static str {
        match self {
            ProjectKind::Web => "project_type_web",
            ProjectKind::Mobile => "project_type_mobile",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub title: LocalizedText,
    pub desc: LocalizedText,
    pub image: String,
    pub tech: Vec<String>,
    pub kind: ProjectKind,
    pub icon_class: String,
    pub github_url: String,
    pub demo_url: String,
    pub gradient: String,
}

impl Project {
    pub fn gradient_or_default(&self) -> &str {
        if self.gradient.trim().is_empty() {
            DEFAULT_GRADIENT
        } else {
            &self.gradient
        }
    }

    pub fn icon_or_default(&self) -> &str {
        if self.icon_class.trim().is_empty() {
            DEFAULT_PROJECT_ICON
        } else {
            &self.icon_class
        }
    }
}

/// `"React, Firebase ,"` -> `["React", "Firebase"]`
pub fn split_tech(joined: &str) -> Vec<String> {
    joined
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Technologies as typed in the editor (comma-joined) or as a list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TechInput {
    List(Vec<String>),
    Joined(String),
}

impl Default for TechInput {
    fn default() -> Self {
        TechInput::Joined(String::new())
    }
}

impl TechInput {
    pub fn into_list(self) -> Vec<String> {
        match self {
            TechInput::Joined(joined) => split_tech(&joined),
            TechInput::List(items) => items
                .into_iter()
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProjectDraft {
    pub title_ar: String,
    pub title_en: String,
    pub title_de: String,
    pub desc_ar: String,
    pub desc_en: String,
    pub desc_de: String,
    pub image: String,
    pub tech: TechInput,
    #[serde(rename = "type")]
    pub kind: ProjectKind,
    pub icon_class: String,
    pub github_url: String,
    pub demo_url: String,
    pub gradient: String,
}

impl CollectionRecord for Project {
    const COLLECTION: &'static str = collections::PROJECTS;
    type Draft = ProjectDraft;

    fn from_draft(draft: ProjectDraft) -> Result<Self, ValidationError> {
        if draft.title_ar.trim().is_empty() {
            return Err(ValidationError::required("title_ar"));
        }
        if draft.title_en.trim().is_empty() {
            return Err(ValidationError::required("title_en"));
        }

        Ok(Project {
            title: LocalizedText::new(
                draft.title_ar.trim(),
                draft.title_en.trim(),
                draft.title_de.trim(),
            ),
            desc: LocalizedText::new(draft.desc_ar, draft.desc_en, draft.desc_de),
            image: draft.image.trim().to_string(),
            tech: draft.tech.into_list(),
            kind: draft.kind,
            icon_class: draft.icon_class.trim().to_string(),
            github_url: draft.github_url.trim().to_string(),
            demo_url: draft.demo_url.trim().to_string(),
            gradient: draft.gradient.trim().to_string(),
        })
    }

    fn from_fields(fields: &Fields) -> Self {
        let tech = match fields.get("tech") {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(Value::as_str)
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect(),
            Some(Value::String(joined)) => split_tech(joined),
            _ => Vec::new(),
        };

        Project {
            title: LocalizedText::read(fields, "title"),
            desc: LocalizedText::read(fields, "desc"),
            image: trimmed(fields, "image"),
            tech,
            kind: ProjectKind::parse(&trimmed(fields, "type")).unwrap_or_default(),
            icon_class: trimmed(fields, "icon_class"),
            github_url: trimmed(fields, "github_url"),
            demo_url: trimmed(fields, "demo_url"),
            gradient: trimmed(fields, "gradient"),
        }
    }

    fn to_fields(&self) -> Fields {
        let mut fields = Fields::new();
        self.title.write(&mut fields, "title");
        self.desc.write(&mut fields, "desc");
        fields.insert("image".into(), Value::String(self.image.clone()));
        fields.insert(
            "tech".into(),
            Value::Array(self.tech.iter().cloned().map(Value::String).collect()),
        );
        fields.insert("type".into(), Value::String(self.kind.as_str().into()));
        fields.insert("icon_class".into(), Value::String(self.icon_class.clone()));
        fields.insert("github_url".into(), Value::String(self.github_url.clone()));
        fields.insert("demo_url".into(), Value::String(self.demo_url.clone()));
        fields.insert("gradient".into(), Value::String(self.gradient.clone()));
        fields
    }
}
