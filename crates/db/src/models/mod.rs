//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - `Deserialize` DTOs for the write paths that need them

pub mod category;
pub mod feature;
pub mod image;
pub mod project;
pub mod user;
