//! Shared query parameter types for API handlers.

use fusteria_core::types::DbId;
use serde::Deserialize;

/// Query parameters for the project list (`?limit=&offset=&category_id=`).
///
/// `limit`/`offset` are clamped via `fusteria_db::clamp_limit` /
/// `clamp_offset`; `category_id` narrows the list to one portfolio tab.
#[derive(Debug, Deserialize)]
pub struct ProjectListParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    pub category_id: Option<DbId>,
}
