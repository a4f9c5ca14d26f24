//! In-memory store for tests.

use std::sync::Mutex;

use async_trait::async_trait;

use super::{AnalysisStore, StorageError};
use crate::analysis::record::AnalysisRecord;
use crate::models::user_data::UserDataRow;

#[derive(Default)]
pub struct MemoryAnalysisStore {
    rows: Mutex<Vec<UserDataRow>>,
    /// When set, every call fails with a pool timeout.
    failing: bool,
}

impl MemoryAnalysisStore {
    pub fn failing() -> Self {
        Self {
            rows: Mutex::default(),
            failing: true,
        }
    }

    pub fn with_records(records: Vec<AnalysisRecord>) -> Self {
        let rows = records
            .into_iter()
            .zip(1..)
            .map(|(record, id)| UserDataRow { id, record })
            .collect();
        Self {
            rows: Mutex::new(rows),
            failing: false,
        }
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl AnalysisStore for MemoryAnalysisStore {
    async fn insert(&self, record: AnalysisRecord) -> Result<UserDataRow, StorageError> {
        if self.failing {
            return Err(StorageError::Database(sqlx::Error::PoolTimedOut));
        }
        let mut rows = self.rows.lock().unwrap();
        let id = rows.len() as i32 + 1;
        let row = UserDataRow { id, record };
        rows.push(row.clone());
        Ok(row)
    }

    async fn list_all(&self) -> Result<Vec<UserDataRow>, StorageError> {
        if self.failing {
            return Err(StorageError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(self.rows.lock().unwrap().clone())
    }
}
