//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`RoomHubError`]
//! via `#[from]`.

use crate::id::{AmenityId, OwnerId};

/// Top-level error returned by services and ports.
#[derive(Debug, thiserror::Error)]
pub enum RoomHubError {
    #[error("validation error")]
    Validation(#[from] ValidationError),

    #[error("not found")]
    NotFound(#[from] NotFoundError),

    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// A domain invariant was violated by user input.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("name must not be empty")]
    EmptyName,

    #[error("name must be at most {max} characters")]
    NameTooLong { max: usize },

    #[error("username must not be empty")]
    EmptyUsername,

    #[error("username `{0}` is already taken")]
    DuplicateUsername(String),

    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    #[error("unknown kind `{0}`")]
    InvalidKind(String),

    #[error("price must be a non-negative integer, got {0}")]
    InvalidPrice(i64),

    #[error("{field} must be a non-negative integer, got {value}")]
    NegativeCount { field: &'static str, value: i64 },

    #[error("rating must be between 0 and 5, got {0}")]
    InvalidRating(f64),

    #[error("invalid identifier `{0}`")]
    InvalidId(String),

    #[error("invalid value `{value}` for filter `{field}`")]
    InvalidFilter { field: &'static str, value: String },

    #[error("owner {0} does not exist")]
    UnknownOwner(OwnerId),

    #[error("amenity {0} does not exist")]
    UnknownAmenity(AmenityId),

    #[error("unknown action `{0}`")]
    UnknownAction(String),

    #[error("malformed payload: {0}")]
    MalformedPayload(String),
}

/// A record looked up by identifier does not exist.
#[derive(Debug, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::RoomId;

    #[test]
    fn should_convert_validation_error_into_top_level_error() {
        let err: RoomHubError = ValidationError::EmptyName.into();
        assert!(matches!(
            err,
            RoomHubError::Validation(ValidationError::EmptyName)
        ));
    }

    #[test]
    fn should_format_not_found_with_entity_and_id() {
        let err = NotFoundError {
            entity: "Room",
            id: RoomId::from(7).to_string(),
        };
        assert_eq!(err.to_string(), "Room 7 not found");
    }

    #[test]
    fn should_describe_invalid_filter() {
        let err = ValidationError::InvalidFilter {
            field: "pet_friendly",
            value: "maybe".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid value `maybe` for filter `pet_friendly`"
        );
    }

    #[test]
    fn should_name_taken_username() {
        let err = ValidationError::DuplicateUsername("mina".to_string());
        assert_eq!(err.to_string(), "username `mina` is already taken");
    }
}
