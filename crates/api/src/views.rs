//! View-invalidation stamps.
//!
//! The API does not cache rendered pages, but the frontend does. After any
//! successful write, handlers stamp the view paths whose cached renders are
//! now stale ("/admin", "/portfolio", a project's detail pages). A renderer
//! polls `GET /api/v1/views` and refreshes anything stamped after its last
//! render. This is purely the refresh signal; no content is stored here.

use std::collections::HashMap;

use chrono::Utc;
use fusteria_core::types::Timestamp;
use tokio::sync::RwLock;

/// View path for the admin project list.
pub const ADMIN_VIEW: &str = "/admin";
/// View path for the public portfolio list.
pub const PORTFOLIO_VIEW: &str = "/portfolio";

/// Shared map from view path to the instant it was last invalidated.
#[derive(Debug, Default)]
pub struct ViewStamps {
    inner: RwLock<HashMap<String, Timestamp>>,
}

impl ViewStamps {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the given view paths as stale as of now.
    pub async fn invalidate<I>(&self, paths: I)
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let now = Utc::now();
        let mut inner = self.inner.write().await;
        for path in paths {
            inner.insert(path.into(), now);
        }
    }

    /// Current stamps for all views invalidated since startup.
    pub async fn snapshot(&self) -> HashMap<String, Timestamp> {
        self.inner.read().await.clone()
    }
}

/// View path for a project's admin edit page.
pub fn admin_edit_view(id: i64) -> String {
    format!("/admin/projects/{id}/edit")
}

/// View path for a project's public detail page.
pub fn portfolio_detail_view(id: i64) -> String {
    format!("/portfolio/{id}")
}
