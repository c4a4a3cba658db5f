//! Handler exposing the view-invalidation stamps.

use std::collections::HashMap;

use axum::extract::State;
use axum::Json;
use fusteria_core::types::Timestamp;

use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/views
///
/// Map from view path to the instant it was last invalidated. A renderer
/// refreshes any view stamped after its last render.
pub async fn stamps(
    State(state): State<AppState>,
) -> Json<DataResponse<HashMap<String, Timestamp>>> {
    Json(DataResponse {
        data: state.views.snapshot().await,
    })
}
