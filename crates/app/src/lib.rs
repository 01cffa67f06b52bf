//! # roomhub-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `CategoryRepository` — CRUD for categories
//!   - `RoomRepository` — rooms and their amenity links
//!   - `AmenityRepository` — CRUD for amenities
//!   - `OwnerRepository` — owners referenced by rooms
//! - Define **driving/inbound ports** as use-case structs:
//!   - `CategoryService` — list, create, retrieve, partial update, delete
//!   - `RoomService` — browse rooms, create rooms, admin change list, bulk actions
//!   - `AmenityService` — admin list, create, edit with read-only fields
//!   - `OwnerService` — create and list owners
//! - Orchestrate domain objects without knowing *how* persistence or IO works
//!
//! ## Dependency rule
//! Depends on `roomhub-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod request;
pub mod services;
