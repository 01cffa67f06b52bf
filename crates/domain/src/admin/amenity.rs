//! Amenity admin: displayed columns and read-only fields.

use serde_json::{Map, Value};

use super::{ChangeList, ChangeListRow, format_timestamp};
use crate::amenity::{Amenity, AmenityPatch};
use crate::error::ValidationError;

pub const TITLE: &str = "Amenities";

pub const LIST_DISPLAY: &[AmenityColumn] = &[
    AmenityColumn::Name,
    AmenityColumn::Description,
    AmenityColumn::CreatedAt,
    AmenityColumn::UpdatedAt,
];

/// Fields shown in the admin but never accepted from an edit payload.
pub const READONLY_FIELDS: &[&str] = &["created_at", "updated_at"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmenityColumn {
    Name,
    Description,
    CreatedAt,
    UpdatedAt,
}

impl AmenityColumn {
    #[must_use]
    pub fn header(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Description => "description",
            Self::CreatedAt => "created_at",
            Self::UpdatedAt => "updated_at",
        }
    }

    #[must_use]
    pub fn cell(self, amenity: &Amenity) -> String {
        match self {
            Self::Name => amenity.name.clone(),
            Self::Description => amenity.description.clone().unwrap_or_default(),
            Self::CreatedAt => format_timestamp(amenity.created_at),
            Self::UpdatedAt => format_timestamp(amenity.updated_at),
        }
    }
}

/// An edit payload with the read-only keys removed.
#[derive(Debug)]
pub struct SanitizedEdit {
    pub patch: AmenityPatch,
    /// Read-only keys that were present in the payload and dropped.
    pub ignored: Vec<&'static str>,
}

/// Strip [`READONLY_FIELDS`] from a raw edit payload and parse the rest.
///
/// # Errors
///
/// Returns [`ValidationError::MalformedPayload`] when the remaining fields do
/// not form a valid [`AmenityPatch`].
pub fn sanitize_edit(mut payload: Map<String, Value>) -> Result<SanitizedEdit, ValidationError> {
    let ignored = READONLY_FIELDS
        .iter()
        .copied()
        .filter(|field| payload.remove(*field).is_some())
        .collect();

    let patch = serde_json::from_value(Value::Object(payload))
        .map_err(|err| ValidationError::MalformedPayload(err.to_string()))?;

    Ok(SanitizedEdit { patch, ignored })
}

pub fn change_list<'a>(amenities: impl IntoIterator<Item = &'a Amenity>) -> ChangeList {
    let rows = amenities
        .into_iter()
        .map(|amenity| ChangeListRow {
            id: amenity.id.to_string(),
            cells: LIST_DISPLAY.iter().map(|c| c.cell(amenity)).collect(),
        })
        .collect();

    ChangeList {
        title: TITLE,
        headers: LIST_DISPLAY.iter().map(|c| c.header()).collect(),
        rows,
        filters: Vec::new(),
        search_fields: Vec::new(),
        actions: Vec::new(),
    }
}
