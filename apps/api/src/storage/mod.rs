//! Storage of analysis records. The upload flow only inserts; the admin
//! dashboard only lists.

#[cfg(test)]
pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use thiserror::Error;

use crate::analysis::record::AnalysisRecord;
use crate::models::user_data::UserDataRow;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Carried in `AppState` as `Arc<dyn AnalysisStore>`.
#[async_trait]
pub trait AnalysisStore: Send + Sync {
    /// Single-row insert. The store owns the record afterwards.
    async fn insert(&self, record: AnalysisRecord) -> Result<UserDataRow, StorageError>;

    /// Every stored record, oldest first.
    async fn list_all(&self) -> Result<Vec<UserDataRow>, StorageError>;
}
