//! Typed identifier newtypes backed by storage-assigned integer keys.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($(#[doc = $doc:expr])* $name:ident) => {
        $(#[doc = $doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Access the inner primary key.
            #[must_use]
            pub fn as_i64(self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse().map(Self)
            }
        }
    };
}

define_id!(
    /// Primary key of a [`Category`](crate::category::Category).
    CategoryId
);

define_id!(
    /// Primary key of a [`Room`](crate::room::Room).
    RoomId
);

define_id!(
    /// Primary key of an [`Amenity`](crate::amenity::Amenity).
    AmenityId
);

define_id!(
    /// Primary key of an [`Owner`](crate::owner::Owner).
    OwnerId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_roundtrip_through_display_and_from_str() {
        let id = RoomId::from(42);
        let parsed: RoomId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn should_serialize_as_bare_integer() {
        let json = serde_json::to_string(&CategoryId::from(3)).unwrap();
        assert_eq!(json, "3");
    }

    #[test]
    fn should_return_error_when_parsing_non_numeric_id() {
        let result = AmenityId::from_str("abc");
        assert!(result.is_err());
    }

    #[test]
    fn should_expose_inner_value() {
        assert_eq!(OwnerId::from(9).as_i64(), 9);
    }
}
