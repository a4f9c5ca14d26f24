//! Axum route handlers for the admin dashboard.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use tracing::info;

use crate::admin::auth::AdminSession;
use crate::admin::distribution::{field_distribution, FieldShare};
use crate::admin::export::{records_to_csv, EXPORT_FILE_NAME};
use crate::errors::AppError;
use crate::models::user_data::UserDataRow;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct RecordListResponse {
    pub total: usize,
    pub records: Vec<UserDataRow>,
}

#[derive(Debug, Serialize)]
pub struct FieldDistributionResponse {
    pub title: &'static str,
    pub slices: Vec<FieldShare>,
}

/// GET /api/v1/admin/records
pub async fn handle_list_records(
    _admin: AdminSession,
    State(state): State<AppState>,
) -> Result<Json<RecordListResponse>, AppError> {
    let records = state.store.list_all().await?;
    info!(count = records.len(), "Admin listed user data");
    Ok(Json(RecordListResponse {
        total: records.len(),
        records,
    }))
}

/// GET /api/v1/admin/records/export
pub async fn handle_export_csv(
    _admin: AdminSession,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let records = state.store.list_all().await?;
    let csv = records_to_csv(&records)?;
    info!(count = records.len(), format = "csv", "User data exported");

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{EXPORT_FILE_NAME}\""),
            ),
        ],
        csv,
    ))
}

/// GET /api/v1/admin/records/field-distribution
pub async fn handle_field_distribution(
    _admin: AdminSession,
    State(state): State<AppState>,
) -> Result<Json<FieldDistributionResponse>, AppError> {
    let records = state.store.list_all().await?;
    Ok(Json(FieldDistributionResponse {
        title: "Predicted Field according to Skills",
        slices: field_distribution(&records),
    }))
}
