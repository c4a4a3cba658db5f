//! Handlers for the `/categories` resource.
//!
//! Single-table CRUD; the only rule worth noting is that deletion is
//! blocked (409) while any project still references the category.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use fusteria_core::error::CoreError;
use fusteria_core::types::DbId;
use fusteria_db::models::category::{Category, CreateCategory};
use fusteria_db::repositories::CategoryRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// GET /api/v1/categories
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Category>>> {
    let categories = CategoryRepo::list(&state.pool).await?;
    Ok(Json(categories))
}

/// POST /api/v1/categories
pub async fn create(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(input): Json<CreateCategory>,
) -> AppResult<(StatusCode, Json<Category>)> {
    let name = input.name.trim();
    if name.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "name is required".into(),
        )));
    }
    // Stored trimmed so the name round-trips through the project forms,
    // which trim before resolving.
    let category = CategoryRepo::create(
        &state.pool,
        &CreateCategory {
            name: name.to_string(),
        },
    )
    .await?;
    Ok((StatusCode::CREATED, Json(category)))
}

/// DELETE /api/v1/categories/{id}
pub async fn delete(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = CategoryRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id,
        }))
    }
}
