//! Room listing and detail pages.

use askama::Template;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};

use roomhub_app::ports::{
    AmenityRepository, CategoryRepository, OwnerRepository, RoomRepository,
};
use roomhub_app::services::room_service::RoomDetail;
use roomhub_domain::error::RoomHubError;
use roomhub_domain::id::RoomId;
use roomhub_domain::room::Room;

use crate::error::{ApiError, parse_id};
use crate::state::AppState;

/// Heading shown on the room listing.
pub const LIST_TITLE: &str = "Hello! this title from roomhub";

/// Room list page template.
#[derive(Template)]
#[template(path = "all_rooms.html")]
pub struct RoomListTemplate {
    title: &'static str,
    rooms: Vec<Room>,
}

impl IntoResponse for RoomListTemplate {
    fn into_response(self) -> Response {
        super::render(&self)
    }
}

/// What the detail page shows about a found room.
pub struct RoomView {
    room: Room,
    owner: String,
    amenities: Vec<String>,
}

impl From<RoomDetail> for RoomView {
    fn from(detail: RoomDetail) -> Self {
        Self {
            owner: detail
                .owner
                .map_or_else(|| "-".to_string(), |owner| owner.username),
            amenities: detail
                .amenities
                .into_iter()
                .map(|amenity| amenity.name)
                .collect(),
            room: detail.room,
        }
    }
}

/// Room detail page template.
///
/// A missing room renders this same page with `not_found` set.
#[derive(Template)]
#[template(path = "room_detail.html")]
pub struct RoomDetailTemplate {
    not_found: bool,
    detail: Option<RoomView>,
}

impl IntoResponse for RoomDetailTemplate {
    fn into_response(self) -> Response {
        super::render(&self)
    }
}

/// `GET /rooms/` — every room, unfiltered.
pub async fn list<CR, RR, AR, OR>(
    State(state): State<AppState<CR, RR, AR, OR>>,
) -> Result<RoomListTemplate, ApiError>
where
    CR: CategoryRepository + Send + Sync + 'static,
    RR: RoomRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    OR: OwnerRepository + Send + Sync + 'static,
{
    let rooms = state.room_service.list_rooms().await?;

    Ok(RoomListTemplate {
        title: LIST_TITLE,
        rooms,
    })
}

/// `GET /rooms/:id` — one room, or the not-found variant of the page.
pub async fn detail<CR, RR, AR, OR>(
    State(state): State<AppState<CR, RR, AR, OR>>,
    Path(id): Path<String>,
) -> Result<RoomDetailTemplate, ApiError>
where
    CR: CategoryRepository + Send + Sync + 'static,
    RR: RoomRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    OR: OwnerRepository + Send + Sync + 'static,
{
    let room_id: RoomId = parse_id(&id)?;

    match state.room_service.get_room(room_id).await {
        Ok(detail) => Ok(RoomDetailTemplate {
            not_found: false,
            detail: Some(RoomView::from(detail)),
        }),
        Err(RoomHubError::NotFound(_)) => Ok(RoomDetailTemplate {
            not_found: true,
            detail: None,
        }),
        Err(err) => Err(err.into()),
    }
}
