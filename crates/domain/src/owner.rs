//! Owner — the user who manages one or more rooms.

use serde::{Deserialize, Serialize};

use crate::error::{RoomHubError, ValidationError};
use crate::id::OwnerId;
use crate::time::{Timestamp, now};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Owner {
    pub id: OwnerId,
    pub username: String,
    pub created_at: Timestamp,
}

/// An owner waiting for a primary key from storage.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOwner {
    pub username: String,
    pub created_at: Timestamp,
}

impl NewOwner {
    /// Validate `username` and stamp the creation time.
    ///
    /// # Errors
    ///
    /// Returns [`RoomHubError::Validation`] when the username is blank.
    pub fn new(username: impl Into<String>) -> Result<Self, RoomHubError> {
        let username = username.into();
        if username.trim().is_empty() {
            return Err(ValidationError::EmptyUsername.into());
        }
        Ok(Self {
            username,
            created_at: now(),
        })
    }

    #[must_use]
    pub fn with_id(self, id: OwnerId) -> Owner {
        Owner {
            id,
            username: self.username,
            created_at: self.created_at,
        }
    }
}
