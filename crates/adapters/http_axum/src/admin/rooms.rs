//! Room admin: change list, creation and bulk actions.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{OriginalUri, Path, Query, State};
use axum::http::header::USER_AGENT;
use axum::http::{HeaderMap, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use roomhub_app::ports::{
    AmenityRepository, CategoryRepository, OwnerRepository, RoomRepository,
};
use roomhub_app::request::AdminRequestContext;
use roomhub_app::services::room_service::ActionReport;
use roomhub_domain::admin::room::{RoomAction, RoomChangeListParams};
use roomhub_domain::id::{AmenityId, OwnerId, RoomId};
use roomhub_domain::room::{Room, RoomKind};
use roomhub_domain::time::now;

use super::ChangeListTemplate;
use crate::error::ApiError;
use crate::state::AppState;

/// Request body for creating a room.
#[derive(Deserialize)]
pub struct CreateRoomRequest {
    pub name: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub price: Option<i64>,
    pub rooms: Option<i64>,
    pub toilets: Option<i64>,
    pub description: Option<String>,
    pub address: Option<String>,
    pub pet_friendly: Option<bool>,
    pub kind: Option<String>,
    pub rating: Option<f64>,
    pub owner: Option<i64>,
    #[serde(default)]
    pub amenities: Vec<i64>,
}

/// Request body for a bulk action.
#[derive(Deserialize)]
pub struct ActionRequest {
    pub ids: Vec<i64>,
}

/// JSON report returned after a bulk action.
#[derive(Debug, Serialize)]
pub struct ActionResponseBody {
    pub action: String,
    pub selected: usize,
    pub modified: usize,
}

impl From<ActionReport> for ActionResponseBody {
    fn from(report: ActionReport) -> Self {
        Self {
            action: report.action.to_string(),
            selected: report.selected,
            modified: report.modified,
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Room>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// `GET /admin/rooms/` — filtered, searchable change list.
pub async fn change_list<CR, RR, AR, OR>(
    State(state): State<AppState<CR, RR, AR, OR>>,
    Query(params): Query<RoomChangeListParams>,
) -> Result<ChangeListTemplate, ApiError>
where
    CR: CategoryRepository + Send + Sync + 'static,
    RR: RoomRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    OR: OwnerRepository + Send + Sync + 'static,
{
    let search = params.q.clone();
    let query = params.into_query()?;
    let list = state.room_service.change_list(&query, now()).await?;
    Ok(ChangeListTemplate::new(list, search))
}

/// `POST /admin/rooms/`
pub async fn create<CR, RR, AR, OR>(
    State(state): State<AppState<CR, RR, AR, OR>>,
    payload: Result<Json<CreateRoomRequest>, JsonRejection>,
) -> Result<CreateResponse, ApiError>
where
    CR: CategoryRepository + Send + Sync + 'static,
    RR: RoomRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    OR: OwnerRepository + Send + Sync + 'static,
{
    let Json(req) = payload?;

    let mut builder = Room::builder().amenities(req.amenities.into_iter().map(AmenityId::from));
    if let Some(name) = req.name {
        builder = builder.name(name);
    }
    if let Some(country) = req.country {
        builder = builder.country(country);
    }
    if let Some(city) = req.city {
        builder = builder.city(city);
    }
    if let Some(price) = req.price {
        builder = builder.price(price);
    }
    if let Some(rooms) = req.rooms {
        builder = builder.rooms(rooms);
    }
    if let Some(toilets) = req.toilets {
        builder = builder.toilets(toilets);
    }
    if let Some(description) = req.description {
        builder = builder.description(description);
    }
    if let Some(address) = req.address {
        builder = builder.address(address);
    }
    if let Some(pet_friendly) = req.pet_friendly {
        builder = builder.pet_friendly(pet_friendly);
    }
    if let Some(kind) = req.kind {
        builder = builder.kind(kind.parse::<RoomKind>()?);
    }
    if let Some(rating) = req.rating {
        builder = builder.rating(rating);
    }
    if let Some(owner) = req.owner {
        builder = builder.owner_id(OwnerId::from(owner));
    }

    let room = builder.build()?;
    let created = state.room_service.create_room(room).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `POST /admin/rooms/actions/:action`
pub async fn run_action<CR, RR, AR, OR>(
    State(state): State<AppState<CR, RR, AR, OR>>,
    Path(action): Path<String>,
    method: Method,
    OriginalUri(uri): OriginalUri,
    headers: HeaderMap,
    payload: Result<Json<ActionRequest>, JsonRejection>,
) -> Result<Json<ActionResponseBody>, ApiError>
where
    CR: CategoryRepository + Send + Sync + 'static,
    RR: RoomRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    OR: OwnerRepository + Send + Sync + 'static,
{
    let action = action.parse::<RoomAction>()?;
    let Json(req) = payload?;

    let ctx = AdminRequestContext {
        method: method.to_string(),
        path: uri.path().to_string(),
        user_agent: headers
            .get(USER_AGENT)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string),
    };
    let ids: Vec<RoomId> = req.ids.into_iter().map(RoomId::from).collect();

    let report = state.room_service.run_action(action, &ctx, &ids).await?;
    Ok(Json(ActionResponseBody::from(report)))
}
