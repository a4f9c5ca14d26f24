use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::analysis::record::AnalysisRecord;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct UserDataRow {
    pub id: i32,
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub record: AnalysisRecord,
}
