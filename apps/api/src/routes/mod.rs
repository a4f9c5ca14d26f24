pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::admin::handlers as admin;
use crate::analysis::handlers as analysis;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Normal user
        .route(
            "/api/v1/resumes",
            post(analysis::handle_upload).layer(DefaultBodyLimit::max(upload_limit)),
        )
        // Admin
        .route("/api/v1/admin/records", get(admin::handle_list_records))
        .route(
            "/api/v1/admin/records/export",
            get(admin::handle_export_csv),
        )
        .route(
            "/api/v1/admin/records/field-distribution",
            get(admin::handle_field_distribution),
        )
        .with_state(state)
}
