//! Shared domain types and helpers for the adboard marketplace service.
//!
//! Kept free of HTTP and database dependencies so both `adboard-db` and
//! `adboard-api` can build on it.

pub mod error;
pub mod media;
pub mod pagination;
pub mod types;
