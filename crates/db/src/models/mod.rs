//! Row models and DTOs for the marketplace tables.

pub mod ad;
pub mod comment;
pub mod user;
