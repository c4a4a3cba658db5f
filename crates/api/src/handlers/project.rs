//! Handlers for the `/projects` resource.
//!
//! The write handlers are the boundary of the project write service: they
//! authenticate the actor, validate the raw form fields, parse the
//! JSON-encoded list fields, and resolve the category name to an id --
//! all before a single row is written. The resolved input then goes to
//! `ProjectRepo`, which performs the multi-table write in one transaction.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::{Form, Json};
use fusteria_core::error::CoreError;
use fusteria_core::types::DbId;
use fusteria_db::models::image::NewImage;
use fusteria_db::models::project::{
    CreateProject, Project, ProjectDetails, ProjectSummary, UpdateProject,
};
use fusteria_db::repositories::{CategoryRepo, ProjectRepo};
use fusteria_db::{clamp_limit, clamp_offset};
use serde::Deserialize;
use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::query::ProjectListParams;
use crate::response::PageResponse;
use crate::state::AppState;
use crate::views::{admin_edit_view, portfolio_detail_view, ADMIN_VIEW, PORTFOLIO_VIEW};

// ---------------------------------------------------------------------------
// Form surfaces
// ---------------------------------------------------------------------------

/// Raw fields of the "new project" form.
///
/// Scalar fields arrive as plain strings; `features` and `images` arrive
/// JSON-encoded, exactly as the admin frontend serializes them.
#[derive(Debug, Deserialize)]
pub struct CreateProjectForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, rename = "fullDescription")]
    pub full_description: String,
    #[serde(default, rename = "completionDate")]
    pub completion_date: String,
    #[serde(default)]
    pub duration: String,
    /// JSON-encoded array of strings. Required.
    pub features: Option<String>,
    /// JSON-encoded array of `{url, alt_text, order}` descriptors. Optional.
    pub images: Option<String>,
}

/// Raw fields of the "edit project" form.
///
/// The category name travels as `project-category` on this form, and
/// `newImages` lists images to append; existing images are left alone.
/// The project id comes from the URL path.
#[derive(Debug, Deserialize)]
pub struct UpdateProjectForm {
    #[serde(default)]
    pub title: String,
    #[serde(default, rename = "project-category")]
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, rename = "fullDescription")]
    pub full_description: String,
    #[serde(default, rename = "completionDate")]
    pub completion_date: String,
    #[serde(default)]
    pub duration: String,
    /// JSON-encoded array of strings; the authoritative replacement set.
    pub features: Option<String>,
    /// JSON-encoded array of image descriptors to append. Optional.
    #[serde(rename = "newImages")]
    pub new_images: Option<String>,
}

// ---------------------------------------------------------------------------
// Validation helpers
// ---------------------------------------------------------------------------

fn validation(msg: impl Into<String>) -> AppError {
    AppError::Core(CoreError::Validation(msg.into()))
}

/// Reject empty (or whitespace-only) required form fields.
fn require(name: &'static str, value: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(validation(format!("{name} is required")));
    }
    Ok(trimmed.to_string())
}

/// Parse the JSON-encoded `features` field. The field itself is required;
/// an empty list must be submitted as `[]`.
fn parse_features(raw: Option<&str>) -> Result<Vec<String>, AppError> {
    let raw = match raw {
        Some(s) if !s.trim().is_empty() => s,
        _ => return Err(validation("features is required")),
    };
    serde_json::from_str(raw).map_err(|_| validation("features must be a JSON array of strings"))
}

/// Parse a JSON-encoded image descriptor list. Absent means "no images".
fn parse_images(field: &'static str, raw: Option<&str>) -> Result<Vec<NewImage>, AppError> {
    match raw {
        None => Ok(Vec::new()),
        Some(s) if s.trim().is_empty() => Ok(Vec::new()),
        Some(s) => serde_json::from_str(s)
            .map_err(|_| validation(format!("{field} must be a JSON array of image descriptors"))),
    }
}

/// Resolve a category name to its id, failing loudly when it does not
/// exist. A project row must never end up referencing a missing category.
async fn resolve_category(pool: &PgPool, name: &str) -> Result<DbId, AppError> {
    CategoryRepo::find_by_name(pool, name)
        .await?
        .map(|category| category.id)
        .ok_or_else(|| {
            AppError::Core(CoreError::Lookup {
                entity: "category",
                name: name.to_string(),
            })
        })
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/projects
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Form(form): Form<CreateProjectForm>,
) -> AppResult<(StatusCode, Json<Project>)> {
    let title = require("title", &form.title)?;
    let category = require("category", &form.category)?;
    let description = require("description", &form.description)?;
    let full_description = require("fullDescription", &form.full_description)?;
    let completion_date = require("completionDate", &form.completion_date)?;
    let duration = require("duration", &form.duration)?;
    let features = parse_features(form.features.as_deref())?;
    let images = parse_images("images", form.images.as_deref())?;

    let category_id = resolve_category(&state.pool, &category).await?;

    let project = ProjectRepo::create(
        &state.pool,
        &CreateProject {
            title,
            description,
            full_description,
            completion_date,
            duration,
            category_id,
            updated_by: user.name,
            features,
            images,
        },
    )
    .await?;

    state.views.invalidate([ADMIN_VIEW, PORTFOLIO_VIEW]).await;
    Ok((StatusCode::CREATED, Json(project)))
}

/// PUT /api/v1/projects/{id}
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Form(form): Form<UpdateProjectForm>,
) -> AppResult<Json<Project>> {
    let title = require("title", &form.title)?;
    let category = require("project-category", &form.category)?;
    let description = require("description", &form.description)?;
    let full_description = require("fullDescription", &form.full_description)?;
    let completion_date = require("completionDate", &form.completion_date)?;
    let duration = require("duration", &form.duration)?;
    let features = parse_features(form.features.as_deref())?;
    let new_images = parse_images("newImages", form.new_images.as_deref())?;

    let category_id = resolve_category(&state.pool, &category).await?;

    let project = ProjectRepo::update(
        &state.pool,
        id,
        &UpdateProject {
            title,
            description,
            full_description,
            completion_date,
            duration,
            category_id,
            updated_by: user.name,
            features,
            new_images,
        },
    )
    .await?
    .ok_or(AppError::Core(CoreError::NotFound {
        entity: "Project",
        id,
    }))?;

    state
        .views
        .invalidate([
            ADMIN_VIEW.to_string(),
            PORTFOLIO_VIEW.to_string(),
            admin_edit_view(id),
            portfolio_detail_view(id),
        ])
        .await;
    Ok(Json(project))
}

/// DELETE /api/v1/projects/{id}
pub async fn delete(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ProjectRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }));
    }

    state.views.invalidate([ADMIN_VIEW, PORTFOLIO_VIEW]).await;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/projects
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ProjectListParams>,
) -> AppResult<Json<PageResponse<ProjectSummary>>> {
    let limit = clamp_limit(params.limit);
    let offset = clamp_offset(params.offset);

    let projects = ProjectRepo::list(&state.pool, params.category_id, limit, offset).await?;
    let total = ProjectRepo::count(&state.pool, params.category_id).await?;

    Ok(Json(PageResponse {
        data: projects,
        total,
        limit,
        offset,
    }))
}

/// GET /api/v1/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ProjectDetails>> {
    let details = ProjectRepo::find_by_id_with_details(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    Ok(Json(details))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use fusteria_core::error::CoreError;

    use super::*;

    #[test]
    fn require_rejects_empty_and_whitespace() {
        assert_matches!(
            require("title", ""),
            Err(AppError::Core(CoreError::Validation(msg))) if msg == "title is required"
        );
        assert_matches!(require("title", "   "), Err(_));
        assert_eq!(require("title", " Deck A ").unwrap(), "Deck A");
    }

    #[test]
    fn features_must_be_present_and_parseable() {
        assert_matches!(parse_features(None), Err(_));
        assert_matches!(parse_features(Some("")), Err(_));
        assert_matches!(parse_features(Some("not json")), Err(_));
        assert_matches!(parse_features(Some("{\"a\":1}")), Err(_));

        assert_eq!(parse_features(Some("[]")).unwrap(), Vec::<String>::new());
        assert_eq!(
            parse_features(Some(r#"["Cedar","Waterproof"]"#)).unwrap(),
            vec!["Cedar".to_string(), "Waterproof".to_string()]
        );
    }

    #[test]
    fn images_default_to_empty_when_absent() {
        assert!(parse_images("images", None).unwrap().is_empty());
        assert!(parse_images("images", Some("")).unwrap().is_empty());
        assert_matches!(parse_images("images", Some("nope")), Err(_));

        let parsed = parse_images(
            "images",
            Some(r#"[{"url":"/img/a.jpg","alt_text":"a","order":2}]"#),
        )
        .unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].url, "/img/a.jpg");
        assert_eq!(parsed[0].sort_order, 2);
    }

    #[test]
    fn image_descriptor_fields_are_optional_except_url() {
        let parsed = parse_images("images", Some(r#"[{"url":"/img/a.jpg"}]"#)).unwrap();
        assert_eq!(parsed[0].alt_text, "");
        assert_eq!(parsed[0].sort_order, 0);

        assert_matches!(parse_images("images", Some(r#"[{"order":1}]"#)), Err(_));
    }
}
