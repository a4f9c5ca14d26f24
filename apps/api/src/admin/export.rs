use anyhow::Result;

use crate::models::user_data::UserDataRow;

pub const EXPORT_FILE_NAME: &str = "User_Data.csv";

const HEADERS: [&str; 11] = [
    "ID",
    "Name",
    "Email",
    "Resume Score",
    "Timestamp",
    "Total Page",
    "Predicted Field",
    "User Level",
    "Actual Skills",
    "Recommended Skills",
    "Recommended Course",
];

/// Renders all rows as CSV with a header line.
pub fn records_to_csv(rows: &[UserDataRow]) -> Result<Vec<u8>> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record(HEADERS)?;

    for row in rows {
        let r = &row.record;
        wtr.write_record([
            row.id.to_string(),
            r.name.clone(),
            r.email.clone(),
            r.resume_score.to_string(),
            r.timestamp.clone(),
            r.page_no.to_string(),
            r.predicted_field.clone(),
            r.user_level.clone(),
            r.actual_skills.clone(),
            r.recommended_skills.clone(),
            r.recommended_courses.clone(),
        ])?;
    }

    wtr.into_inner().map_err(|e| anyhow::anyhow!("CSV flush failed: {}", e.error()))
}
