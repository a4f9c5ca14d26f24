// Admin dashboard: stored record table, CSV export and the predicted-field
// distribution chart. Every route requires an `AdminSession`.

pub mod auth;
pub mod distribution;
pub mod export;
pub mod handlers;
