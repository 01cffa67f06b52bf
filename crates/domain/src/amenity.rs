//! Amenity — a feature tag (wifi, kitchen, …) attachable to many rooms.

use serde::{Deserialize, Serialize};

use crate::error::{RoomHubError, ValidationError};
use crate::id::AmenityId;
use crate::time::{Timestamp, now};

/// Longest accepted amenity name.
pub const NAME_MAX_LEN: usize = 150;

/// A persisted amenity.
///
/// `created_at` and `updated_at` are owned by the server: they are set on
/// creation and on every save, never from client input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Amenity {
    pub id: AmenityId,
    pub name: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Amenity {
    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`RoomHubError::Validation`] when the name is empty or too long.
    pub fn validate(&self) -> Result<(), RoomHubError> {
        validate_name(&self.name)
    }

    /// Apply the editable fields of `patch` and bump `updated_at`.
    pub fn apply(&mut self, patch: AmenityPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        self.updated_at = now();
    }
}

fn validate_name(name: &str) -> Result<(), RoomHubError> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyName.into());
    }
    if name.chars().count() > NAME_MAX_LEN {
        return Err(ValidationError::NameTooLong { max: NAME_MAX_LEN }.into());
    }
    Ok(())
}

/// An amenity waiting for a primary key from storage.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAmenity {
    pub name: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl NewAmenity {
    /// Validate and stamp both timestamps with the current time.
    ///
    /// # Errors
    ///
    /// Returns [`RoomHubError::Validation`] when the name is empty or too long.
    pub fn new(name: impl Into<String>, description: Option<String>) -> Result<Self, RoomHubError> {
        let name = name.into();
        validate_name(&name)?;
        let created_at = now();
        Ok(Self {
            name,
            description,
            created_at,
            updated_at: created_at,
        })
    }

    #[must_use]
    pub fn with_id(self, id: AmenityId) -> Amenity {
        Amenity {
            id,
            name: self.name,
            description: self.description,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// The editable subset of an amenity.
///
/// `description: Some(None)` clears the description.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AmenityPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, with = "double_option")]
    pub description: Option<Option<String>>,
}

mod double_option {
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<String>::deserialize(deserializer).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored() -> Amenity {
        NewAmenity::new("Wifi", Some("Fast".to_string()))
            .unwrap()
            .with_id(AmenityId::from(1))
    }

    #[test]
    fn should_stamp_equal_timestamps_on_creation() {
        let amenity = NewAmenity::new("Kitchen", None).unwrap();
        assert_eq!(amenity.created_at, amenity.updated_at);
    }

    #[test]
    fn should_reject_empty_name() {
        assert!(matches!(
            NewAmenity::new("", None),
            Err(RoomHubError::Validation(ValidationError::EmptyName))
        ));
    }

    #[test]
    fn should_keep_description_when_patch_omits_it() {
        let mut amenity = stored();
        let patch: AmenityPatch = serde_json::from_str(r#"{"name":"Wi-Fi"}"#).unwrap();
        amenity.apply(patch);
        assert_eq!(amenity.name, "Wi-Fi");
        assert_eq!(amenity.description.as_deref(), Some("Fast"));
    }

    #[test]
    fn should_clear_description_when_patch_sets_null() {
        let mut amenity = stored();
        let patch: AmenityPatch = serde_json::from_str(r#"{"description":null}"#).unwrap();
        amenity.apply(patch);
        assert!(amenity.description.is_none());
    }

    #[test]
    fn should_refuse_unknown_patch_fields() {
        let result: Result<AmenityPatch, _> = serde_json::from_str(r#"{"colour":"red"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn should_never_move_created_at_on_apply() {
        let mut amenity = stored();
        let created = amenity.created_at;
        amenity.apply(AmenityPatch::default());
        assert_eq!(amenity.created_at, created);
        assert!(amenity.updated_at >= created);
    }
}
