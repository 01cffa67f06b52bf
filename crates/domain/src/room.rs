//! Room — the primary listing: where it is, what it costs, who owns it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{RoomHubError, ValidationError};
use crate::id::{AmenityId, OwnerId, RoomId};
use crate::time::{Timestamp, now};

/// Longest accepted room name.
pub const NAME_MAX_LEN: usize = 180;

/// Highest accepted rating.
pub const MAX_RATING: f64 = 5.0;

pub const DEFAULT_COUNTRY: &str = "South Korea";
pub const DEFAULT_CITY: &str = "Seoul";

/// How much of the place the guest gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomKind {
    EntirePlace,
    PrivateRoom,
    SharedRoom,
}

impl RoomKind {
    pub const ALL: [Self; 3] = [Self::EntirePlace, Self::PrivateRoom, Self::SharedRoom];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::EntirePlace => "entire_place",
            Self::PrivateRoom => "private_room",
            Self::SharedRoom => "shared_room",
        }
    }

    /// Human readable label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::EntirePlace => "Entire Place",
            Self::PrivateRoom => "Private Room",
            Self::SharedRoom => "Shared Room",
        }
    }
}

impl fmt::Display for RoomKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoomKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ValidationError::InvalidKind(s.to_string()))
    }
}

/// A persisted room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    pub country: String,
    pub city: String,
    pub price: u32,
    pub rooms: u32,
    pub toilets: u32,
    pub description: String,
    pub address: String,
    pub pet_friendly: bool,
    pub kind: RoomKind,
    pub rating: f64,
    pub owner_id: OwnerId,
    pub amenities: Vec<AmenityId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Room {
    /// Create a builder for a room that has not been stored yet.
    #[must_use]
    pub fn builder() -> RoomBuilder {
        RoomBuilder::default()
    }

    /// Whether `amenity` is attached to this room.
    #[must_use]
    pub fn has_amenity(&self, amenity: AmenityId) -> bool {
        self.amenities.contains(&amenity)
    }
}

/// A validated room waiting for a primary key from storage.
#[derive(Debug, Clone, PartialEq)]
pub struct NewRoom {
    pub name: String,
    pub country: String,
    pub city: String,
    pub price: u32,
    pub rooms: u32,
    pub toilets: u32,
    pub description: String,
    pub address: String,
    pub pet_friendly: bool,
    pub kind: RoomKind,
    pub rating: f64,
    pub owner_id: OwnerId,
    pub amenities: Vec<AmenityId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl NewRoom {
    #[must_use]
    pub fn with_id(self, id: RoomId) -> Room {
        Room {
            id,
            name: self.name,
            country: self.country,
            city: self.city,
            price: self.price,
            rooms: self.rooms,
            toilets: self.toilets,
            description: self.description,
            address: self.address,
            pet_friendly: self.pet_friendly,
            kind: self.kind,
            rating: self.rating,
            owner_id: self.owner_id,
            amenities: self.amenities,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Step-by-step builder for [`NewRoom`].
///
/// Numeric inputs are taken as `i64` so that negative values coming from
/// untrusted payloads surface as validation errors instead of parse failures.
#[derive(Debug, Default)]
pub struct RoomBuilder {
    name: Option<String>,
    country: Option<String>,
    city: Option<String>,
    price: Option<i64>,
    rooms: Option<i64>,
    toilets: Option<i64>,
    description: Option<String>,
    address: Option<String>,
    pet_friendly: Option<bool>,
    kind: Option<RoomKind>,
    rating: Option<f64>,
    owner_id: Option<OwnerId>,
    amenities: Vec<AmenityId>,
}

impl RoomBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    #[must_use]
    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    #[must_use]
    pub fn price(mut self, price: i64) -> Self {
        self.price = Some(price);
        self
    }

    #[must_use]
    pub fn rooms(mut self, rooms: i64) -> Self {
        self.rooms = Some(rooms);
        self
    }

    #[must_use]
    pub fn toilets(mut self, toilets: i64) -> Self {
        self.toilets = Some(toilets);
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    #[must_use]
    pub fn pet_friendly(mut self, pet_friendly: bool) -> Self {
        self.pet_friendly = Some(pet_friendly);
        self
    }

    #[must_use]
    pub fn kind(mut self, kind: RoomKind) -> Self {
        self.kind = Some(kind);
        self
    }

    #[must_use]
    pub fn rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    #[must_use]
    pub fn owner_id(mut self, owner_id: OwnerId) -> Self {
        self.owner_id = Some(owner_id);
        self
    }

    #[must_use]
    pub fn amenity(mut self, amenity: AmenityId) -> Self {
        if !self.amenities.contains(&amenity) {
            self.amenities.push(amenity);
        }
        self
    }

    #[must_use]
    pub fn amenities(self, amenities: impl IntoIterator<Item = AmenityId>) -> Self {
        amenities.into_iter().fold(self, Self::amenity)
    }

    /// Consume the builder, validate, and return a [`NewRoom`].
    ///
    /// # Errors
    ///
    /// Returns [`RoomHubError::Validation`] if `name`, `price`, `kind` or
    /// `owner_id` is missing, the name is empty or too long, a count is
    /// negative, or the rating is outside `0..=5`.
    pub fn build(self) -> Result<NewRoom, RoomHubError> {
        let name = self.name.ok_or(ValidationError::MissingField("name"))?;
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        if name.chars().count() > NAME_MAX_LEN {
            return Err(ValidationError::NameTooLong { max: NAME_MAX_LEN }.into());
        }

        let price = self.price.ok_or(ValidationError::MissingField("price"))?;
        let price = u32::try_from(price).map_err(|_| ValidationError::InvalidPrice(price))?;
        let rooms = non_negative("rooms", self.rooms.unwrap_or(1))?;
        let toilets = non_negative("toilets", self.toilets.unwrap_or(1))?;

        let kind = self.kind.ok_or(ValidationError::MissingField("kind"))?;
        let owner_id = self.owner_id.ok_or(ValidationError::MissingField("owner"))?;

        let rating = self.rating.unwrap_or(0.0);
        if !(0.0..=MAX_RATING).contains(&rating) {
            return Err(ValidationError::InvalidRating(rating).into());
        }

        let created_at = now();
        Ok(NewRoom {
            name,
            country: self.country.unwrap_or_else(|| DEFAULT_COUNTRY.to_string()),
            city: self.city.unwrap_or_else(|| DEFAULT_CITY.to_string()),
            price,
            rooms,
            toilets,
            description: self.description.unwrap_or_default(),
            address: self.address.unwrap_or_default(),
            pet_friendly: self.pet_friendly.unwrap_or(true),
            kind,
            rating,
            owner_id,
            amenities: self.amenities,
            created_at,
            updated_at: created_at,
        })
    }
}

fn non_negative(field: &'static str, value: i64) -> Result<u32, ValidationError> {
    u32::try_from(value).map_err(|_| ValidationError::NegativeCount { field, value })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder() -> RoomBuilder {
        Room::builder()
            .name("Cozy loft")
            .price(120)
            .kind(RoomKind::EntirePlace)
            .owner_id(OwnerId::from(1))
    }

    #[test]
    fn should_apply_defaults_when_optional_fields_missing() {
        let room = builder().build().unwrap();
        assert_eq!(room.country, DEFAULT_COUNTRY);
        assert_eq!(room.city, DEFAULT_CITY);
        assert!(room.pet_friendly);
        assert_eq!(room.rooms, 1);
        assert!(room.amenities.is_empty());
    }

    #[test]
    fn should_reject_negative_price() {
        let result = builder().price(-5).build();
        assert!(matches!(
            result,
            Err(RoomHubError::Validation(ValidationError::InvalidPrice(-5)))
        ));
    }

    #[test]
    fn should_reject_rating_above_five() {
        let result = builder().rating(5.5).build();
        assert!(matches!(
            result,
            Err(RoomHubError::Validation(ValidationError::InvalidRating(_)))
        ));
    }

    #[test]
    fn should_reject_missing_owner() {
        let result = Room::builder()
            .name("Loft")
            .price(10)
            .kind(RoomKind::SharedRoom)
            .build();
        assert!(matches!(
            result,
            Err(RoomHubError::Validation(ValidationError::MissingField("owner")))
        ));
    }

    #[test]
    fn should_deduplicate_amenities() {
        let room = builder()
            .amenities([AmenityId::from(1), AmenityId::from(2), AmenityId::from(1)])
            .build()
            .unwrap()
            .with_id(RoomId::from(3));
        assert_eq!(room.amenities.len(), 2);
        assert!(room.has_amenity(AmenityId::from(2)));
        assert!(!room.has_amenity(AmenityId::from(9)));
    }

    #[test]
    fn should_parse_every_kind_from_its_wire_name() {
        for kind in RoomKind::ALL {
            assert_eq!(kind.as_str().parse::<RoomKind>().unwrap(), kind);
        }
        assert!("castle".parse::<RoomKind>().is_err());
    }
}
