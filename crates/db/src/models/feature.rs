//! Feature entity model.

use fusteria_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `features` table: one free-text selling point of a
/// project ("Cedar wood", "Waterproof finish", ...).
///
/// Features are owned by their project and replaced wholesale on every
/// update; there is no standalone create/update DTO.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Feature {
    pub id: DbId,
    pub project_id: DbId,
    pub description: String,
}
