//! Axum route handler for résumé uploads.

use std::collections::BTreeMap;

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use chrono::Local;
use serde::Serialize;
use tracing::{error, info, warn};

use crate::analysis::analyze;
use crate::analysis::fields::ExtractedFields;
use crate::analysis::level::ExperienceLevel;
use crate::analysis::markers::MarkerCheck;
use crate::analysis::text::extract_pdf_text;
use crate::errors::AppError;
use crate::models::user_data::UserDataRow;
use crate::state::AppState;
use crate::tips::BonusVideos;

/// Multipart field that carries the PDF.
pub const RESUME_FIELD: &str = "resume";
const SCORE_NOTE: &str =
    "Note: This score is calculated based on the content you have added in your Resume.";

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub file_name: String,
    pub greeting: String,
    pub fields: ExtractedFields,
    pub page_estimate: i64,
    pub level: ExperienceLevel,
    pub level_message: Option<&'static str>,
    pub resume_score: u32,
    pub score_note: &'static str,
    pub presence: BTreeMap<&'static str, bool>,
    pub tips: Vec<MarkerCheck>,
    /// The stored row, absent when the insert failed.
    pub record: Option<UserDataRow>,
    pub storage_notice: Option<String>,
    pub archive_notice: Option<String>,
    pub bonus_videos: BonusVideos,
}

struct ResumeUpload {
    file_name: String,
    bytes: Bytes,
}

/// POST /api/v1/resumes
///
/// Analyzes an uploaded PDF résumé and stores the result. Archive and storage
/// failures are reported in the response; the analysis is returned regardless.
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    let upload = read_resume_part(&mut multipart).await?;

    let archive_notice = match state.archive.store(&upload.file_name, upload.bytes.clone()).await {
        Ok(_) => None,
        Err(e) => {
            warn!(file_name = %upload.file_name, "Resume archive failed: {e:#}");
            Some("Your resume could not be archived.".to_string())
        }
    };

    let raw = extract_pdf_text(upload.bytes).await;
    let analysis = analyze(&raw, &state.vocabulary);
    info!(
        file_name = %upload.file_name,
        score = analysis.markers.score,
        level = ?analysis.estimate.level,
        skills = analysis.fields.skills.len(),
        "Resume analyzed"
    );

    let record = analysis.to_record(Local::now().naive_local());
    let (record, storage_notice) = match state.store.insert(record).await {
        Ok(row) => {
            info!(id = row.id, "Analysis stored");
            (Some(row), None)
        }
        Err(e) => {
            error!("Error inserting data into the database: {e}");
            (
                None,
                Some(format!("Error inserting data into the database: {e}")),
            )
        }
    };

    let bonus_videos = state.videos.bonus_videos().await;

    Ok(Json(UploadResponse {
        file_name: upload.file_name,
        greeting: format!("Hello {}", analysis.fields.name),
        page_estimate: analysis.estimate.page_estimate,
        level: analysis.estimate.level,
        level_message: analysis.estimate.level.message(),
        resume_score: analysis.markers.score,
        score_note: SCORE_NOTE,
        presence: analysis.markers.presence(),
        tips: analysis.markers.checks,
        fields: analysis.fields,
        record,
        storage_notice,
        archive_notice,
        bonus_videos,
    }))
}

async fn read_resume_part(multipart: &mut Multipart) -> Result<ResumeUpload, AppError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(RESUME_FIELD) {
            continue;
        }

        let file_name = field.file_name().unwrap_or_default().to_string();
        let content_type = field.content_type().unwrap_or_default().to_string();
        if !is_pdf(&file_name, &content_type) {
            return Err(AppError::Validation(
                "Please upload a valid PDF file.".to_string(),
            ));
        }

        let bytes = field.bytes().await?;
        if bytes.is_empty() {
            return Err(AppError::Validation("Uploaded file is empty.".to_string()));
        }
        return Ok(ResumeUpload { file_name, bytes });
    }

    Err(AppError::Validation(
        "Please upload a valid PDF file.".to_string(),
    ))
}

fn is_pdf(file_name: &str, content_type: &str) -> bool {
    file_name.to_ascii_lowercase().ends_with(".pdf")
        || content_type.eq_ignore_ascii_case("application/pdf")
}
