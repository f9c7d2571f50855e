use crate::types::DbId;

/// Domain-level error taxonomy.
///
/// `NotFound` covers both a genuinely missing row and a row that exists but
/// fails an ownership constraint; callers must not be able to tell the two
/// apart.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),
}
