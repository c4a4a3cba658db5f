use crate::types::DbId;

/// Domain-level error taxonomy shared by the repository and API layers.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// A name-keyed lookup failed to resolve (e.g. an unknown category
    /// name on a project form). Distinct from `NotFound`: the request
    /// referenced something that does not exist, so the whole write is
    /// rejected before any row is touched.
    #[error("Unknown {entity}: {name}")]
    Lookup { entity: &'static str, name: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
