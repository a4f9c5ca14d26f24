use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use super::{AnalysisStore, StorageError};
use crate::analysis::record::AnalysisRecord;
use crate::models::user_data::UserDataRow;

pub struct PgAnalysisStore {
    pool: PgPool,
}

impl PgAnalysisStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AnalysisStore for PgAnalysisStore {
    async fn insert(&self, record: AnalysisRecord) -> Result<UserDataRow, StorageError> {
        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO user_data
                (name, email_id, resume_score, timestamp, page_no, predicted_field,
                 user_level, actual_skills, recommended_skills, recommended_courses)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING id
            "#,
        )
        .bind(&record.name)
        .bind(&record.email)
        .bind(record.resume_score)
        .bind(&record.timestamp)
        .bind(record.page_no)
        .bind(&record.predicted_field)
        .bind(&record.user_level)
        .bind(&record.actual_skills)
        .bind(&record.recommended_skills)
        .bind(&record.recommended_courses)
        .fetch_one(&self.pool)
        .await?;

        debug!(id, "Inserted user_data row");
        Ok(UserDataRow { id, record })
    }

    async fn list_all(&self) -> Result<Vec<UserDataRow>, StorageError> {
        Ok(
            sqlx::query_as::<_, UserDataRow>("SELECT * FROM user_data ORDER BY id ASC")
                .fetch_all(&self.pool)
                .await?,
        )
    }
}
