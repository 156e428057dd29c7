use std::cmp::Ordering;

use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::modules::content::application::domain::presentation::order_experiences;
use crate::modules::content::application::domain::record::{
    trimmed, CollectionRecord, StoredRecord, ValidationError,
};
use crate::modules::document_store::application::domain::entities::{
    collections, flag, Fields,
};
use crate::modules::localization::LocalizedText;

/// Whether a position is still held. An ongoing position has no end date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tenure {
    Ongoing,
    Ended(String),
}

impl Tenure {
    pub fn is_current(&self) -> bool {
        matches!(self, Tenure::Ongoing)
    }

    pub fn end_date(&self) -> &str {
        match self {
            Tenure::Ongoing => "",
            Tenure::Ended(date) => date,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Experience {
    pub title: LocalizedText,
    pub company: String,
    pub start_date: String,
    pub tenure: Tenure,
    pub desc: LocalizedText,
}

impl Experience {
    /// `YYYY-MM-DD`, `YYYY-MM` or `YYYY`; anything else is `None`.
    pub fn started_on(&self) -> Option<NaiveDate> {
        parse_loose_date(&self.start_date)
    }

    /// Current positions first, then most recent start date. Unparseable
    /// start dates sort after every parseable one.
    pub fn display_cmp(&self, other: &Experience) -> Ordering {
        other
            .tenure
            .is_current()
            .cmp(&self.tenure.is_current())
            .then_with(|| match (self.started_on(), other.started_on()) {
                (Some(a), Some(b)) => b.cmp(&a),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            })
    }
}

fn parse_loose_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(&format!("{}-01", raw), "%Y-%m-%d"))
        .or_else(|_| NaiveDate::parse_from_str(&format!("{}-01-01", raw), "%Y-%m-%d"))
        .ok()
}

/// Editor payload. `isCurrent` and `endDate` exclude each other: setting
/// one clears the other, and a submitted `isCurrent: true` wins.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ExperienceDraft {
    pub title_ar: String,
    pub title_en: String,
    pub title_de: String,
    pub company: String,
    #[serde(rename = "startDate")]
    pub start_date: String,
    #[serde(rename = "endDate")]
    pub end_date: String,
    #[serde(rename = "isCurrent")]
    pub is_current: bool,
    pub desc_ar: String,
    pub desc_en: String,
    pub desc_de: String,
}

impl ExperienceDraft {
    pub fn set_current(&mut self, current: bool) {
        self.is_current = current;
        if current {
            self.end_date.clear();
        }
    }

    pub fn set_end_date(&mut self, end_date: impl Into<String>) {
        self.end_date = end_date.into();
        if !self.end_date.trim().is_empty() {
            self.is_current = false;
        }
    }
}

impl CollectionRecord for Experience {
    const COLLECTION: &'static str = collections::EXPERIENCES;
    type Draft = ExperienceDraft;

    fn from_draft(draft: ExperienceDraft) -> Result<Self, ValidationError> {
        if draft.title_ar.trim().is_empty() {
            return Err(ValidationError::required("title_ar"));
        }
        if draft.company.trim().is_empty() {
            return Err(ValidationError::required("company"));
        }
        if draft.start_date.trim().is_empty() {
            return Err(ValidationError::required("startDate"));
        }

        let tenure = if draft.is_current {
            Tenure::Ongoing
        } else {
            Tenure::Ended(draft.end_date.trim().to_string())
        };

        Ok(Experience {
            title: LocalizedText::new(
                draft.title_ar.trim(),
                draft.title_en.trim(),
                draft.title_de.trim(),
            ),
            company: draft.company.trim().to_string(),
            start_date: draft.start_date.trim().to_string(),
            tenure,
            desc: LocalizedText::new(draft.desc_ar, draft.desc_en, draft.desc_de),
        })
    }

    fn from_fields(fields: &Fields) -> Self {
        // Older public pages wrote the flag in snake case.
        let current = flag(fields, "isCurrent")
            .or_else(|| flag(fields, "is_current"))
            .unwrap_or(false);

        Experience {
            title: LocalizedText::read(fields, "title"),
            company: trimmed(fields, "company"),
            start_date: trimmed(fields, "startDate"),
            tenure: if current {
                Tenure::Ongoing
            } else {
                Tenure::Ended(trimmed(fields, "endDate"))
            },
            desc: LocalizedText::read(fields, "desc"),
        }
    }

    fn to_fields(&self) -> Fields {
        let mut fields = Fields::new();
        self.title.write(&mut fields, "title");
        fields.insert("company".into(), json!(self.company));
        fields.insert("startDate".into(), json!(self.start_date));
        fields.insert("endDate".into(), json!(self.tenure.end_date()));
        fields.insert("isCurrent".into(), Value::Bool(self.tenure.is_current()));
        self.desc.write(&mut fields, "desc");
        fields
    }

    fn order(records: &mut Vec<StoredRecord<Self>>) {
        order_experiences(records);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::fixtures::fields;

    fn draft(value: Value) -> ExperienceDraft {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_required_fields() {
        let cases = [
            (json!({ "company": "Acme", "startDate": "2020" }), "title_ar"),
            (json!({ "title_ar": "مطور", "startDate": "2020" }), "company"),
            (json!({ "title_ar": "مطور", "company": "Acme" }), "startDate"),
        ];

        for (payload, missing) in cases {
            assert_eq!(
                Experience::from_draft(draft(payload)).unwrap_err(),
                ValidationError::required(missing)
            );
        }
    }

    #[test]
    fn test_current_position_is_saved_without_end_date() {
        let d = draft(json!({
            "title_ar": "مطور",
            "company": "Acme",
            "startDate": "2021-03",
            "endDate": "2023-01",
            "isCurrent": true
        }));

        let fields = Experience::from_draft(d).unwrap().to_fields();

        assert_eq!(fields["endDate"], json!(""));
        assert_eq!(fields["isCurrent"], json!(true));
    }

    #[test]
    fn test_toggles_clear_each_other() {
        let mut d = ExperienceDraft::default();

        d.set_end_date("2022-05");
        d.set_current(true);
        assert!(d.is_current);
        assert_eq!(d.end_date, "");

        d.set_end_date("2024-01");
        assert!(!d.is_current);
    }

    #[test]
    fn test_snake_case_flag_is_read() {
        let experience = Experience::from_fields(&fields(json!({
            "company": "Acme",
            "is_current": true,
            "endDate": "stale"
        })));

        assert_eq!(experience.tenure, Tenure::Ongoing);
    }

    #[test]
    fn test_loose_dates() {
        assert_eq!(parse_loose_date("2021-03-15"), NaiveDate::from_ymd_opt(2021, 3, 15));
        assert_eq!(parse_loose_date("2021-03"), NaiveDate::from_ymd_opt(2021, 3, 1));
        assert_eq!(parse_loose_date("2019"), NaiveDate::from_ymd_opt(2019, 1, 1));
        assert_eq!(parse_loose_date("last spring"), None);
    }
}
