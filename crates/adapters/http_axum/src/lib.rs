//! # roomhub-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **category JSON API** (`/categories/`, `/categories/{id}`)
//! - Serve the **server-side-rendered room pages** (`/rooms/`, `/rooms/{id}`)
//!   with askama templates
//! - Serve the **admin surface** under `/admin`: HTML change lists driven by
//!   the domain's admin metadata, plus JSON write endpoints
//! - Map HTTP requests into application service calls and application
//!   results into HTTP responses
//!
//! ## Dependency rule
//! Depends on `roomhub-app` (for port traits and services) and `roomhub-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod admin;
pub mod api;
pub mod error;
pub mod pages;
pub mod router;
pub mod state;
