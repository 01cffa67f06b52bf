//! # roomhub-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `roomhub-app::ports::storage`
//! - Manage the `SQLite` connection pool and run embedded migrations
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `roomhub-app` (for port traits) and `roomhub-domain` (for domain types).
//! Neither of those crates may reference this adapter.

mod amenity_repo;
mod category_repo;
mod error;
mod owner_repo;
pub mod pool;
mod room_repo;
mod row;

pub use amenity_repo::SqliteAmenityRepository;
pub use category_repo::SqliteCategoryRepository;
pub use error::StorageError;
pub use owner_repo::SqliteOwnerRepository;
pub use pool::{Config, Database};
pub use room_repo::SqliteRoomRepository;
