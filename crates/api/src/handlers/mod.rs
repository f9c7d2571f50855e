//! Request handlers for the marketplace resources.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers delegate to the corresponding repository in `adboard_db` and
//! map errors via [`crate::error::AppError`].

pub mod ads;
pub mod auth;
pub mod comments;
