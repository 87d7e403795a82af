//! Domain error taxonomy shared by all layers.

use crate::types::DbId;

/// Domain-level errors produced by handlers and resolvers.
///
/// The API layer maps each variant to an HTTP status and a stable error
/// code; see `flashdeck-api`'s `error` module.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The targeted entity does not exist, or a scoping predicate excludes it.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// Caller input fails a semantic constraint beyond basic shape checks
    /// (e.g. an update request with no fields to apply).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Declarative input validation failed (required/length/range checks).
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The write conflicts with existing state (unique constraint).
    #[error("Conflict: {0}")]
    Conflict(String),

    /// No identity is present on the request.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// An identity is present but lacks access to the targeted resource.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// An unexpected internal failure. The message is logged, not surfaced.
    #[error("Internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_display_names_entity_and_id() {
        let err = CoreError::NotFound {
            entity: "Deck",
            id: 42,
        };
        assert_eq!(err.to_string(), "Deck with id 42 not found");
    }

    #[test]
    fn invalid_argument_display_carries_message() {
        let err = CoreError::InvalidArgument("at least one field must be provided".into());
        assert_eq!(
            err.to_string(),
            "Invalid argument: at least one field must be provided"
        );
    }
}
