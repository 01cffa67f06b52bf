//! Admin surface: HTML change lists and JSON write endpoints.
//!
//! Every model's change list is drawn by the same template from the
//! [`ChangeList`] its admin metadata produces.

#[allow(clippy::missing_errors_doc)]
pub mod amenities;
#[allow(clippy::missing_errors_doc)]
pub mod owners;
#[allow(clippy::missing_errors_doc)]
pub mod rooms;

use askama::Template;
use axum::Router;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, put};

use roomhub_app::ports::{
    AmenityRepository, CategoryRepository, OwnerRepository, RoomRepository,
};
use roomhub_domain::admin::ChangeList;

use crate::state::AppState;

/// Generic change-list page.
#[derive(Template)]
#[template(path = "admin_change_list.html")]
pub struct ChangeListTemplate {
    list: ChangeList,
    search: String,
}

impl ChangeListTemplate {
    #[must_use]
    pub fn new(list: ChangeList, search: Option<String>) -> Self {
        Self {
            list,
            search: search.unwrap_or_default(),
        }
    }
}

impl IntoResponse for ChangeListTemplate {
    fn into_response(self) -> Response {
        crate::pages::render(&self)
    }
}

/// Build the sub-router mounted under `/admin`.
pub fn routes<CR, RR, AR, OR>() -> Router<AppState<CR, RR, AR, OR>>
where
    CR: CategoryRepository + Send + Sync + 'static,
    RR: RoomRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    OR: OwnerRepository + Send + Sync + 'static,
{
    Router::new()
        // Rooms
        .route(
            "/rooms/",
            get(rooms::change_list::<CR, RR, AR, OR>).post(rooms::create::<CR, RR, AR, OR>),
        )
        .route(
            "/rooms/actions/{action}",
            post(rooms::run_action::<CR, RR, AR, OR>),
        )
        // Amenities
        .route(
            "/amenities/",
            get(amenities::change_list::<CR, RR, AR, OR>)
                .post(amenities::create::<CR, RR, AR, OR>),
        )
        .route(
            "/amenities/{id}",
            put(amenities::edit::<CR, RR, AR, OR>),
        )
        // Owners
        .route(
            "/owners/",
            get(owners::list::<CR, RR, AR, OR>).post(owners::create::<CR, RR, AR, OR>),
        )
}
