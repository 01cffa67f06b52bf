//! Server-side rendered HTML pages.

#[allow(clippy::missing_errors_doc)]
pub mod rooms;

use askama::Template;
use axum::Router;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;

use roomhub_app::ports::{
    AmenityRepository, CategoryRepository, OwnerRepository, RoomRepository,
};

use crate::state::AppState;

/// Build the sub-router for the public room pages.
pub fn routes<CR, RR, AR, OR>() -> Router<AppState<CR, RR, AR, OR>>
where
    CR: CategoryRepository + Send + Sync + 'static,
    RR: RoomRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    OR: OwnerRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/rooms/", get(rooms::list::<CR, RR, AR, OR>))
        .route("/rooms/{id}", get(rooms::detail::<CR, RR, AR, OR>))
}

/// Render a template into an HTML response, or a bare 500 if rendering fails.
pub(crate) fn render(template: &impl Template) -> Response {
    match template.render() {
        Ok(body) => Html(body).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "template rendering failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
