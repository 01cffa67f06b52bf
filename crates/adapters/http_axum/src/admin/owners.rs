//! Owner admin endpoints, used to seed rooms.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use roomhub_app::ports::{
    AmenityRepository, CategoryRepository, OwnerRepository, RoomRepository,
};
use roomhub_domain::error::ValidationError;
use roomhub_domain::owner::{NewOwner, Owner};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct CreateOwnerRequest {
    pub username: Option<String>,
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Owner>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// `GET /admin/owners/`
pub async fn list<CR, RR, AR, OR>(
    State(state): State<AppState<CR, RR, AR, OR>>,
) -> Result<Json<Vec<Owner>>, ApiError>
where
    CR: CategoryRepository + Send + Sync + 'static,
    RR: RoomRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    OR: OwnerRepository + Send + Sync + 'static,
{
    let owners = state.owner_service.list_owners().await?;
    Ok(Json(owners))
}

/// `POST /admin/owners/`
pub async fn create<CR, RR, AR, OR>(
    State(state): State<AppState<CR, RR, AR, OR>>,
    payload: Result<Json<CreateOwnerRequest>, JsonRejection>,
) -> Result<CreateResponse, ApiError>
where
    CR: CategoryRepository + Send + Sync + 'static,
    RR: RoomRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    OR: OwnerRepository + Send + Sync + 'static,
{
    let Json(req) = payload?;
    let username = req.username.ok_or(ValidationError::MissingField("username"))?;

    let owner = NewOwner::new(username)?;
    let created = state.owner_service.create_owner(owner).await?;
    Ok(CreateResponse::Created(Json(created)))
}
