//! Amenity admin: change list, creation and edits.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use serde_json::{Map, Value};

use roomhub_app::ports::{
    AmenityRepository, CategoryRepository, OwnerRepository, RoomRepository,
};
use roomhub_domain::amenity::{Amenity, NewAmenity};
use roomhub_domain::error::ValidationError;
use roomhub_domain::id::AmenityId;

use super::ChangeListTemplate;
use crate::error::{ApiError, parse_id};
use crate::state::AppState;

/// Request body for creating an amenity.
#[derive(Deserialize)]
pub struct CreateAmenityRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Amenity>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// `GET /admin/amenities/`
pub async fn change_list<CR, RR, AR, OR>(
    State(state): State<AppState<CR, RR, AR, OR>>,
) -> Result<ChangeListTemplate, ApiError>
where
    CR: CategoryRepository + Send + Sync + 'static,
    RR: RoomRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    OR: OwnerRepository + Send + Sync + 'static,
{
    let list = state.amenity_service.change_list().await?;
    Ok(ChangeListTemplate::new(list, None))
}

/// `POST /admin/amenities/`
pub async fn create<CR, RR, AR, OR>(
    State(state): State<AppState<CR, RR, AR, OR>>,
    payload: Result<Json<CreateAmenityRequest>, JsonRejection>,
) -> Result<CreateResponse, ApiError>
where
    CR: CategoryRepository + Send + Sync + 'static,
    RR: RoomRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    OR: OwnerRepository + Send + Sync + 'static,
{
    let Json(req) = payload?;
    let name = req.name.ok_or(ValidationError::MissingField("name"))?;

    let amenity = NewAmenity::new(name, req.description)?;
    let created = state.amenity_service.create_amenity(amenity).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PUT /admin/amenities/:id` — `created_at` and `updated_at` in the body
/// are ignored.
pub async fn edit<CR, RR, AR, OR>(
    State(state): State<AppState<CR, RR, AR, OR>>,
    Path(id): Path<String>,
    payload: Result<Json<Map<String, Value>>, JsonRejection>,
) -> Result<Json<Amenity>, ApiError>
where
    CR: CategoryRepository + Send + Sync + 'static,
    RR: RoomRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    OR: OwnerRepository + Send + Sync + 'static,
{
    let amenity_id: AmenityId = parse_id(&id)?;
    let Json(payload) = payload?;

    let updated = state
        .amenity_service
        .edit_amenity(amenity_id, payload)
        .await?;
    Ok(Json(updated))
}
