use std::sync::Arc;

use crate::config::ServerConfig;
use crate::views::ViewStamps;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: fusteria_db::DbPool,
    /// Server configuration (accessed by middleware and handlers).
    pub config: Arc<ServerConfig>,
    /// View-invalidation stamps bumped after every successful write.
    pub views: Arc<ViewStamps>,
}
