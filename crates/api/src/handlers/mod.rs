//! Request handlers.
//!
//! Each submodule provides async handler functions for a single resource.
//! Handlers delegate to the corresponding repository in `notestash_db`,
//! run the domain checks from `notestash_core` first, and map errors via
//! [`AppError`](crate::error::AppError).

pub mod folder;
pub mod note;
pub mod placement;
pub mod snippet;
pub mod trash;
