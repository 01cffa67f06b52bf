//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod categories;

use axum::Router;
use axum::routing::get;

use roomhub_app::ports::{
    AmenityRepository, CategoryRepository, OwnerRepository, RoomRepository,
};

use crate::state::AppState;

/// Build the category API sub-router.
///
/// The collection route keeps its trailing slash: `/categories/` and
/// `/categories` are distinct paths.
pub fn routes<CR, RR, AR, OR>() -> Router<AppState<CR, RR, AR, OR>>
where
    CR: CategoryRepository + Send + Sync + 'static,
    RR: RoomRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    OR: OwnerRepository + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/categories/",
            get(categories::list::<CR, RR, AR, OR>).post(categories::create::<CR, RR, AR, OR>),
        )
        .route(
            "/categories/{id}",
            get(categories::get::<CR, RR, AR, OR>)
                .put(categories::update::<CR, RR, AR, OR>)
                .delete(categories::delete::<CR, RR, AR, OR>),
        )
}
