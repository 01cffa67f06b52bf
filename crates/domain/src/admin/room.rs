//! Room admin: displayed columns, filters, search fields and bulk actions.
//!
//! Search follows the usual admin convention: the query is split on
//! whitespace, double-quoted phrases stay together, and every term must
//! match at least one search field.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use super::{ActionInfo, ChangeList, ChangeListRow, DateFilter, format_timestamp};
use crate::error::ValidationError;
use crate::id::AmenityId;
use crate::owner::Owner;
use crate::room::{Room, RoomKind};
use crate::time::Timestamp;

pub const TITLE: &str = "Rooms";

/// Columns of the room change list, in display order.
///
/// There is no "total amenities" column.
pub const LIST_DISPLAY: &[RoomColumn] = &[
    RoomColumn::Name,
    RoomColumn::Price,
    RoomColumn::Kind,
    RoomColumn::Rating,
    RoomColumn::Owner,
    RoomColumn::CreatedAt,
    RoomColumn::UpdatedAt,
];

pub const LIST_FILTER: &[RoomFilterField] = &[
    RoomFilterField::Country,
    RoomFilterField::City,
    RoomFilterField::PetFriendly,
    RoomFilterField::Kind,
    RoomFilterField::Amenities,
    RoomFilterField::CreatedAt,
    RoomFilterField::UpdatedAt,
];

pub const SEARCH_FIELDS: &[RoomSearchField] = &[
    RoomSearchField::Name,
    RoomSearchField::PricePrefix,
    RoomSearchField::OwnerUsername,
];

pub const ACTIONS: &[RoomAction] = &[RoomAction::ResetPrices];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomColumn {
    Name,
    Price,
    Kind,
    Rating,
    Owner,
    CreatedAt,
    UpdatedAt,
}

impl RoomColumn {
    #[must_use]
    pub fn header(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Price => "price",
            Self::Kind => "kind",
            Self::Rating => "rating",
            Self::Owner => "owner",
            Self::CreatedAt => "created_at",
            Self::UpdatedAt => "updated_at",
        }
    }

    /// Render this column for one room.
    #[must_use]
    pub fn cell(self, room: &Room, owner: Option<&Owner>) -> String {
        match self {
            Self::Name => room.name.clone(),
            Self::Price => room.price.to_string(),
            Self::Kind => room.kind.label().to_string(),
            Self::Rating => format!("{:.1}", room.rating),
            Self::Owner => owner.map_or_else(|| "-".to_string(), |o| o.username.clone()),
            Self::CreatedAt => format_timestamp(room.created_at),
            Self::UpdatedAt => format_timestamp(room.updated_at),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomFilterField {
    Country,
    City,
    PetFriendly,
    Kind,
    Amenities,
    CreatedAt,
    UpdatedAt,
}

impl RoomFilterField {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Country => "country",
            Self::City => "city",
            Self::PetFriendly => "pet_friendly",
            Self::Kind => "kind",
            Self::Amenities => "amenities",
            Self::CreatedAt => "created_at",
            Self::UpdatedAt => "updated_at",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomSearchField {
    /// Case-insensitive substring of the room name.
    Name,
    /// Prefix of the decimal price.
    PricePrefix,
    /// Case-insensitive substring of the owner's username.
    OwnerUsername,
}

impl RoomSearchField {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::PricePrefix => "price",
            Self::OwnerUsername => "owner username",
        }
    }

    /// `term` must already be lowercased.
    fn matches(self, term: &str, room: &Room, owner: Option<&Owner>) -> bool {
        match self {
            Self::Name => room.name.to_lowercase().contains(term),
            Self::PricePrefix => room.price.to_string().starts_with(term),
            Self::OwnerUsername => {
                owner.is_some_and(|o| o.username.to_lowercase().contains(term))
            }
        }
    }
}

/// Bulk actions available on the room change list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomAction {
    /// Advertised as zeroing prices; only reports the selection.
    ResetPrices,
}

impl RoomAction {
    #[must_use]
    pub fn info(self) -> ActionInfo {
        match self {
            Self::ResetPrices => ActionInfo {
                name: "reset_prices",
                description: "Set all prices to zero",
            },
        }
    }
}

impl fmt::Display for RoomAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.info().name)
    }
}

impl FromStr for RoomAction {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ACTIONS
            .iter()
            .copied()
            .find(|action| action.info().name == s)
            .ok_or_else(|| ValidationError::UnknownAction(s.to_string()))
    }
}

/// Active filter values; `None` means "any".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoomFilters {
    pub country: Option<String>,
    pub city: Option<String>,
    pub pet_friendly: Option<bool>,
    pub kind: Option<RoomKind>,
    pub amenity: Option<AmenityId>,
    pub created: Option<DateFilter>,
    pub updated: Option<DateFilter>,
}

impl RoomFilters {
    #[must_use]
    pub fn matches(&self, room: &Room, now: Timestamp) -> bool {
        self.country.as_ref().is_none_or(|c| room.country == *c)
            && self.city.as_ref().is_none_or(|c| room.city == *c)
            && self.pet_friendly.is_none_or(|p| room.pet_friendly == p)
            && self.kind.is_none_or(|k| room.kind == k)
            && self.amenity.is_none_or(|a| room.has_amenity(a))
            && self.created.is_none_or(|d| d.matches(room.created_at, now))
            && self.updated.is_none_or(|d| d.matches(room.updated_at, now))
    }
}

/// Search plus filters for one change-list request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoomQuery {
    pub search: Option<String>,
    pub filters: RoomFilters,
}

impl RoomQuery {
    #[must_use]
    pub fn matches(&self, room: &Room, owner: Option<&Owner>, now: Timestamp) -> bool {
        self.filters.matches(room, now) && self.matches_search(room, owner)
    }

    fn matches_search(&self, room: &Room, owner: Option<&Owner>) -> bool {
        let Some(search) = &self.search else {
            return true;
        };
        search_terms(search).iter().all(|term| {
            SEARCH_FIELDS
                .iter()
                .any(|field| field.matches(term, room, owner))
        })
    }
}

/// Lowercased search terms; an unterminated quote runs to the end.
fn search_terms(search: &str) -> Vec<String> {
    let mut terms = Vec::new();
    let mut current = String::new();
    let mut quoted = false;
    for ch in search.chars() {
        match ch {
            '"' => quoted = !quoted,
            c if c.is_whitespace() && !quoted => {
                if !current.is_empty() {
                    terms.push(std::mem::take(&mut current).to_lowercase());
                }
            }
            c => current.push(c),
        }
    }
    if !current.is_empty() {
        terms.push(current.to_lowercase());
    }
    terms
}

/// Raw query-string parameters of the room change list.
///
/// Empty values are treated as absent, which is what an HTML form submits
/// for untouched inputs.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RoomChangeListParams {
    pub q: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub pet_friendly: Option<String>,
    pub kind: Option<String>,
    pub amenity: Option<String>,
    pub created: Option<String>,
    pub updated: Option<String>,
}

impl RoomChangeListParams {
    /// Parse into a typed [`RoomQuery`].
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidFilter`] for unparseable values.
    pub fn into_query(self) -> Result<RoomQuery, ValidationError> {
        let pet_friendly = non_empty(self.pet_friendly)
            .map(|v| match v.as_str() {
                "true" | "1" | "yes" => Ok(true),
                "false" | "0" | "no" => Ok(false),
                _ => Err(invalid("pet_friendly", v.clone())),
            })
            .transpose()?;
        let kind = non_empty(self.kind)
            .map(|v| v.parse::<RoomKind>().map_err(|_| invalid("kind", v)))
            .transpose()?;
        let amenity = non_empty(self.amenity)
            .map(|v| v.parse::<AmenityId>().map_err(|_| invalid("amenities", v)))
            .transpose()?;
        let created = non_empty(self.created)
            .map(|v| v.parse::<DateFilter>().map_err(|_| invalid("created_at", v)))
            .transpose()?;
        let updated = non_empty(self.updated)
            .map(|v| v.parse::<DateFilter>().map_err(|_| invalid("updated_at", v)))
            .transpose()?;

        Ok(RoomQuery {
            search: non_empty(self.q),
            filters: RoomFilters {
                country: non_empty(self.country),
                city: non_empty(self.city),
                pet_friendly,
                kind,
                amenity,
                created,
                updated,
            },
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn invalid(field: &'static str, value: String) -> ValidationError {
    ValidationError::InvalidFilter { field, value }
}

/// Build the room change list from already-filtered rooms and their owners.
pub fn change_list<'a>(
    entries: impl IntoIterator<Item = (&'a Room, Option<&'a Owner>)>,
) -> ChangeList {
    let rows = entries
        .into_iter()
        .map(|(room, owner)| ChangeListRow {
            id: room.id.to_string(),
            cells: LIST_DISPLAY
                .iter()
                .map(|column| column.cell(room, owner))
                .collect(),
        })
        .collect();

    ChangeList {
        title: TITLE,
        headers: LIST_DISPLAY.iter().map(|c| c.header()).collect(),
        rows,
        filters: LIST_FILTER.iter().map(|f| f.label()).collect(),
        search_fields: SEARCH_FIELDS.iter().map(|f| f.label()).collect(),
        actions: ACTIONS.iter().map(|a| a.info()).collect(),
    }
}
