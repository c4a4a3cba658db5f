//! HTTP handler functions, grouped by resource.

pub mod auth;
pub mod category;
pub mod project;
pub mod views;
