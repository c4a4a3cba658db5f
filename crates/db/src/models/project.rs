//! Project entity model and write-path DTOs.
//!
//! A project is an aggregate: the row itself plus its owned feature and
//! image rows, kept consistent as one unit by `ProjectRepo`.

use fusteria_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

use crate::models::feature::Feature;
use crate::models::image::{Image, NewImage};

/// A row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub full_description: String,
    /// Display string, e.g. "March 2024". Not parsed server-side.
    pub completion_date: String,
    /// Display string, e.g. "6 weeks".
    pub duration: String,
    pub category_id: DbId,
    /// Name of the user who last wrote this row.
    pub updated_by: String,
    pub last_update: Timestamp,
}

/// A project as shown in list views: the row's headline fields plus its
/// first/primary image, if it has any images at all.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectSummary {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub category_id: DbId,
    pub last_update: Timestamp,
    pub first_image_url: Option<String>,
    pub first_image_alt: Option<String>,
}

/// A full project aggregate: the row plus all its children.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectDetails {
    #[serde(flatten)]
    pub project: Project,
    pub features: Vec<Feature>,
    pub images: Vec<Image>,
}

/// Input for creating a new project aggregate.
///
/// All fields are already validated and resolved: the API layer checks the
/// scalars are non-empty, parses the list fields, resolves the category
/// name to `category_id`, and fills `updated_by` from the authenticated
/// actor before this struct reaches the repository.
#[derive(Debug, Clone)]
pub struct CreateProject {
    pub title: String,
    pub description: String,
    pub full_description: String,
    pub completion_date: String,
    pub duration: String,
    pub category_id: DbId,
    pub updated_by: String,
    pub features: Vec<String>,
    pub images: Vec<NewImage>,
}

/// Input for updating an existing project aggregate.
///
/// `features` is the authoritative replacement set; `new_images` are
/// appended to whatever images the project already has.
#[derive(Debug, Clone)]
pub struct UpdateProject {
    pub title: String,
    pub description: String,
    pub full_description: String,
    pub completion_date: String,
    pub duration: String,
    pub category_id: DbId,
    pub updated_by: String,
    pub features: Vec<String>,
    pub new_images: Vec<NewImage>,
}
