//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use roomhub_app::ports::{
    AmenityRepository, CategoryRepository, OwnerRepository, RoomRepository,
};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Merges the category API and the room pages at `/` and nests the admin
/// surface under `/admin`. Includes a [`TraceLayer`] that logs each HTTP
/// request/response at the `DEBUG` level using the `tracing` ecosystem.
pub fn build<CR, RR, AR, OR>(state: AppState<CR, RR, AR, OR>) -> Router
where
    CR: CategoryRepository + Send + Sync + 'static,
    RR: RoomRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    OR: OwnerRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .merge(crate::api::routes())
        .merge(crate::pages::routes())
        .nest("/admin", crate::admin::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
