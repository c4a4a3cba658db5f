//! Shared domain types and error taxonomy for the fusteria workspace.

pub mod error;
pub mod types;
