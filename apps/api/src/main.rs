mod admin;
mod analysis;
mod archive;
mod config;
mod db;
mod errors;
mod models;
mod routes;
mod state;
mod storage;
mod tips;

use anyhow::{Context, Result};
use aws_config::Region;
use aws_sdk_s3::config::Credentials;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::admin::auth::StaticTokenAuthenticator;
use crate::analysis::fields::SkillVocabulary;
use crate::archive::S3ResumeArchive;
use crate::config::Config;
use crate::db::{create_pool, ensure_schema};
use crate::routes::build_router;
use crate::state::AppState;
use crate::storage::postgres::PgAnalysisStore;
use crate::tips::{OEmbedTitleLookup, VideoTips};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting SkillMatch API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL
    let db = create_pool(&config.database_url).await?;
    ensure_schema(&db).await?;

    // Initialize S3 / MinIO
    let s3 = build_s3_client(&config).await;
    info!("S3 client initialized");

    let vocabulary = SkillVocabulary::new(&config.skill_vocabulary)
        .context("SKILL_VOCABULARY contains an entry that cannot be matched")?;
    info!(
        "Skill vocabulary: {}",
        vocabulary.labels().collect::<Vec<_>>().join(", ")
    );

    let videos = VideoTips::new(
        config.resume_video_urls.clone(),
        config.interview_video_urls.clone(),
        Arc::new(OEmbedTitleLookup::new()?),
    );

    // Build app state
    let state = AppState {
        vocabulary: Arc::new(vocabulary),
        store: Arc::new(PgAnalysisStore::new(db)),
        archive: Arc::new(S3ResumeArchive::new(s3, config.s3_bucket.clone())),
        videos: Arc::new(videos),
        admin_auth: Arc::new(StaticTokenAuthenticator::new(config.admin_token.clone())),
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Constructs an S3 client configured for MinIO (local) or AWS (production).
async fn build_s3_client(config: &Config) -> aws_sdk_s3::Client {
    let credentials = Credentials::new(
        &config.aws_access_key_id,
        &config.aws_secret_access_key,
        None,
        None,
        "skillmatch-static",
    );

    let s3_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(Region::new("us-east-1"))
        .credentials_provider(credentials)
        .endpoint_url(&config.s3_endpoint)
        .load()
        .await;

    aws_sdk_s3::Client::new(&s3_config)
}
