//! Application services — use-case implementations.
//!
//! Each service struct accepts port trait implementations via generic parameters
//! (constructor injection), keeping this layer decoupled from concrete adapters.

pub mod amenity_service;
pub mod category_service;
pub mod owner_service;
pub mod room_service;
