use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::analysis::fields::ExtractedFields;
use crate::analysis::level::ExperienceLevel;

/// Placeholder for the recommendation columns in the normal-user flow.
pub const NOT_APPLICABLE: &str = "N/A";
/// Only this many characters of the joined skill list are stored.
pub const SKILLS_COLUMN_LIMIT: usize = 500;
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H:%M:%S";

/// One analyzed upload as persisted in `user_data`. Absent fields are empty
/// strings, never NULL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct AnalysisRecord {
    pub name: String,
    #[sqlx(rename = "email_id")]
    pub email: String,
    pub resume_score: i32,
    pub timestamp: String,
    pub page_no: i32,
    pub predicted_field: String,
    pub user_level: String,
    pub actual_skills: String,
    pub recommended_skills: String,
    pub recommended_courses: String,
}

pub fn assemble(
    fields: &ExtractedFields,
    level: ExperienceLevel,
    score: u32,
    page_estimate: i64,
    timestamp: NaiveDateTime,
) -> AnalysisRecord {
    AnalysisRecord {
        name: fields.name.clone(),
        email: fields.email.clone(),
        resume_score: i32::try_from(score).unwrap_or(i32::MAX),
        timestamp: timestamp.format(TIMESTAMP_FORMAT).to_string(),
        page_no: page_estimate.clamp(i32::MIN.into(), i32::MAX.into()) as i32,
        predicted_field: NOT_APPLICABLE.to_string(),
        user_level: level.as_str().to_string(),
        actual_skills: fields
            .skills
            .join(", ")
            .chars()
            .take(SKILLS_COLUMN_LIMIT)
            .collect(),
        recommended_skills: NOT_APPLICABLE.to_string(),
        recommended_courses: NOT_APPLICABLE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    fn fields() -> ExtractedFields {
        ExtractedFields {
            name: "Jane Doe".to_string(),
            email: "jane@doe.dev".to_string(),
            phone: "555-1234".to_string(),
            skills: vec!["Python".to_string(), "SQL".to_string()],
        }
    }

    #[test]
    fn test_assemble_flat_record() {
        let record = assemble(&fields(), ExperienceLevel::Fresher, 60, 1, at(7, 5, 3));
        assert_eq!(record.name, "Jane Doe");
        assert_eq!(record.email, "jane@doe.dev");
        assert_eq!(record.resume_score, 60);
        assert_eq!(record.timestamp, "2024-03-09_07:05:03");
        assert_eq!(record.page_no, 1);
        assert_eq!(record.user_level, "Fresher");
        assert_eq!(record.actual_skills, "Python, SQL");
        assert_eq!(record.predicted_field, NOT_APPLICABLE);
        assert_eq!(record.recommended_skills, NOT_APPLICABLE);
        assert_eq!(record.recommended_courses, NOT_APPLICABLE);
    }

    #[test]
    fn test_absent_fields_stored_as_empty_strings() {
        let record = assemble(
            &ExtractedFields::default(),
            ExperienceLevel::Unclassified,
            0,
            0,
            at(0, 0, 0),
        );
        assert_eq!(record.name, "");
        assert_eq!(record.email, "");
        assert_eq!(record.user_level, "");
        assert_eq!(record.actual_skills, "");
    }

    #[test]
    fn test_skills_column_truncated_by_characters() {
        let mut f = fields();
        f.skills = (0..200).map(|i| format!("Ünïcode{i}")).collect();
        let record = assemble(&f, ExperienceLevel::Experienced, 0, 4, at(1, 2, 3));
        assert_eq!(record.actual_skills.chars().count(), SKILLS_COLUMN_LIMIT);
    }
}
