//! Image entity model and the upload descriptor DTO.

use fusteria_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `images` table.
///
/// The image with the lowest (`sort_order`, `id`) pair is the project's
/// first/primary image, used as its gallery thumbnail.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Image {
    pub id: DbId,
    pub project_id: DbId,
    pub url: String,
    pub alt_text: String,
    pub sort_order: i32,
}

/// Descriptor for an image to insert, as submitted by the admin forms.
///
/// The wire field for `sort_order` is `order`, matching the upload
/// widget's JSON payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewImage {
    pub url: String,
    #[serde(default)]
    pub alt_text: String,
    #[serde(rename = "order", default)]
    pub sort_order: i32,
}
