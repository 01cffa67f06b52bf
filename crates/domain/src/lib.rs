//! # roomhub-domain
//!
//! Pure domain model for the roomhub listing service.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **Rooms** (listings with price, kind, location and owner)
//! - Define **Categories**, **Amenities** and **Owners**
//! - Describe the **admin surface** declaratively: displayed columns,
//!   filters, search fields, read-only fields and bulk actions
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod admin;
pub mod amenity;
pub mod category;
pub mod owner;
pub mod room;
