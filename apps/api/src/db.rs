use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

/// Creates and returns a PostgreSQL connection pool.
pub async fn create_pool(database_url: &str) -> Result<PgPool> {
    info!("Connecting to PostgreSQL...");

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await?;

    info!("PostgreSQL connection pool established");
    Ok(pool)
}

/// Free-text columns are unbounded `TEXT` so long names and emails insert as-is.
const USER_DATA_SCHEMA: &str = r#"
    CREATE TABLE IF NOT EXISTS user_data (
        id                  SERIAL PRIMARY KEY,
        name                TEXT    NOT NULL,
        email_id            TEXT    NOT NULL,
        resume_score        INTEGER NOT NULL,
        timestamp           TEXT    NOT NULL,
        page_no             INTEGER NOT NULL,
        predicted_field     TEXT    NOT NULL,
        user_level          TEXT    NOT NULL,
        actual_skills       TEXT    NOT NULL,
        recommended_skills  TEXT    NOT NULL,
        recommended_courses TEXT    NOT NULL
    )
"#;

/// Creates the `user_data` table if it does not exist yet.
pub async fn ensure_schema(pool: &PgPool) -> Result<()> {
    sqlx::query(USER_DATA_SCHEMA).execute(pool).await?;

    info!("Schema ready (user_data)");
    Ok(())
}
