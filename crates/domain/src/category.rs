//! Category — a classification for rooms and experiences.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{RoomHubError, ValidationError};
use crate::id::CategoryId;
use crate::time::{Timestamp, now};

/// Longest accepted category name.
pub const NAME_MAX_LEN: usize = 50;

/// What a category classifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryKind {
    Rooms,
    Experiences,
}

impl CategoryKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Rooms => "rooms",
            Self::Experiences => "experiences",
        }
    }
}

impl fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rooms" => Ok(Self::Rooms),
            "experiences" => Ok(Self::Experiences),
            other => Err(ValidationError::InvalidKind(other.to_string())),
        }
    }
}

/// A persisted category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub kind: CategoryKind,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Category {
    /// Create a builder for a category that has not been stored yet.
    #[must_use]
    pub fn builder() -> CategoryBuilder {
        CategoryBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`RoomHubError::Validation`] when the name is empty or too long.
    pub fn validate(&self) -> Result<(), RoomHubError> {
        validate_name(&self.name)
    }

    /// Apply the fields present in `patch`, leaving the others untouched.
    ///
    /// `updated_at` is bumped; the caller is expected to validate afterwards.
    pub fn apply(&mut self, patch: CategoryPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(kind) = patch.kind {
            self.kind = kind;
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

/// A validated category waiting for a primary key from storage.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCategory {
    pub name: String,
    pub kind: CategoryKind,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl NewCategory {
    /// Attach the storage-assigned primary key.
    #[must_use]
    pub fn with_id(self, id: CategoryId) -> Category {
        Category {
            id,
            name: self.name,
            kind: self.kind,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Partial update; `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryPatch {
    pub name: Option<String>,
    pub kind: Option<CategoryKind>,
}

/// Step-by-step builder for [`NewCategory`].
#[derive(Debug, Default)]
pub struct CategoryBuilder {
    name: Option<String>,
    kind: Option<CategoryKind>,
}

impl CategoryBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn kind(mut self, kind: CategoryKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Consume the builder, validate, and return a [`NewCategory`].
    ///
    /// # Errors
    ///
    /// Returns [`RoomHubError::Validation`] if `name` or `kind` is missing,
    /// or the name is empty or too long.
    pub fn build(self) -> Result<NewCategory, RoomHubError> {
        let name = self.name.ok_or(ValidationError::MissingField("name"))?;
        let kind = self.kind.ok_or(ValidationError::MissingField("kind"))?;
        validate_name(&name)?;

        let created_at = now();
        Ok(NewCategory {
            name,
            kind,
            created_at,
            updated_at: created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored() -> Category {
        Category::builder()
            .name("Cabins")
            .kind(CategoryKind::Rooms)
            .build()
            .unwrap()
            .with_id(CategoryId::from(1))
    }

    #[test]
    fn should_build_new_category_when_fields_provided() {
        let category = Category::builder()
            .name("Cabins")
            .kind(CategoryKind::Rooms)
            .build()
            .unwrap();
        assert_eq!(category.name, "Cabins");
        assert_eq!(category.created_at, category.updated_at);
    }

    #[test]
    fn should_reject_missing_name() {
        let result = Category::builder().kind(CategoryKind::Rooms).build();
        assert!(matches!(
            result,
            Err(RoomHubError::Validation(ValidationError::MissingField("name")))
        ));
    }

    #[test]
    fn should_reject_missing_kind() {
        let result = Category::builder().name("Cabins").build();
        assert!(matches!(
            result,
            Err(RoomHubError::Validation(ValidationError::MissingField("kind")))
        ));
    }

    #[test]
    fn should_reject_blank_name() {
        let result = Category::builder()
            .name("   ")
            .kind(CategoryKind::Rooms)
            .build();
        assert!(matches!(
            result,
            Err(RoomHubError::Validation(ValidationError::EmptyName))
        ));
    }

    #[test]
    fn should_reject_name_over_limit() {
        let result = Category::builder()
            .name("x".repeat(NAME_MAX_LEN + 1))
            .kind(CategoryKind::Experiences)
            .build();
        assert!(matches!(
            result,
            Err(RoomHubError::Validation(ValidationError::NameTooLong { .. }))
        ));
    }

    #[test]
    fn should_only_change_fields_present_in_patch() {
        let mut category = stored();
        category.apply(CategoryPatch {
            name: None,
            kind: Some(CategoryKind::Experiences),
        });
        assert_eq!(category.name, "Cabins");
        assert_eq!(category.kind, CategoryKind::Experiences);
        assert!(category.updated_at >= category.created_at);
    }

    #[test]
    fn should_parse_kind_from_str() {
        assert_eq!("rooms".parse::<CategoryKind>().unwrap(), CategoryKind::Rooms);
        assert!(matches!(
            "hotels".parse::<CategoryKind>(),
            Err(ValidationError::InvalidKind(_))
        ));
    }
}
