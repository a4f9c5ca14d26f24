use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::user_data::UserDataRow;

/// One pie-chart slice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldShare {
    pub label: String,
    pub count: usize,
}

/// Counts records per predicted field, largest slice first, ties by label.
pub fn field_distribution(rows: &[UserDataRow]) -> Vec<FieldShare> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for row in rows {
        *counts.entry(row.record.predicted_field.as_str()).or_default() += 1;
    }

    let mut shares: Vec<FieldShare> = counts
        .into_iter()
        .map(|(label, count)| FieldShare {
            label: label.to_string(),
            count,
        })
        .collect();
    // stable sort keeps BTreeMap label order within equal counts
    shares.sort_by(|a, b| b.count.cmp(&a.count));
    shares
}
