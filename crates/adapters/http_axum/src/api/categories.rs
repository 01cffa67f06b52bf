//! JSON REST handlers for categories.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use roomhub_app::ports::{
    AmenityRepository, CategoryRepository, OwnerRepository, RoomRepository,
};
use roomhub_domain::category::{Category, CategoryKind, CategoryPatch};
use roomhub_domain::id::CategoryId;

use crate::error::{ApiError, parse_id};
use crate::state::AppState;

/// Request body for creating a category.
///
/// Fields are optional so that a missing one is reported as a validation
/// error naming the field, rather than a generic body rejection.
#[derive(Deserialize)]
pub struct CreateCategoryRequest {
    pub name: Option<String>,
    pub kind: Option<String>,
}

/// Request body for a partial update; absent fields are left unchanged.
#[derive(Deserialize)]
pub struct UpdateCategoryRequest {
    pub name: Option<String>,
    pub kind: Option<String>,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Category>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get and update endpoints.
pub enum GetResponse {
    Ok(Json<Category>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Category>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    NoContent,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

fn parse_kind(raw: Option<String>) -> Result<Option<CategoryKind>, ApiError> {
    raw.map(|kind| kind.parse::<CategoryKind>())
        .transpose()
        .map_err(ApiError::from)
}

/// `GET /categories/`
pub async fn list<CR, RR, AR, OR>(
    State(state): State<AppState<CR, RR, AR, OR>>,
) -> Result<ListResponse, ApiError>
where
    CR: CategoryRepository + Send + Sync + 'static,
    RR: RoomRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    OR: OwnerRepository + Send + Sync + 'static,
{
    let categories = state.category_service.list_categories().await?;
    Ok(ListResponse::Ok(Json(categories)))
}

/// `POST /categories/`
pub async fn create<CR, RR, AR, OR>(
    State(state): State<AppState<CR, RR, AR, OR>>,
    payload: Result<Json<CreateCategoryRequest>, JsonRejection>,
) -> Result<CreateResponse, ApiError>
where
    CR: CategoryRepository + Send + Sync + 'static,
    RR: RoomRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    OR: OwnerRepository + Send + Sync + 'static,
{
    let Json(req) = payload?;

    let mut builder = Category::builder();
    if let Some(name) = req.name {
        builder = builder.name(name);
    }
    if let Some(kind) = parse_kind(req.kind)? {
        builder = builder.kind(kind);
    }

    let category = builder.build()?;
    let created = state.category_service.create_category(category).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `GET /categories/:id`
pub async fn get<CR, RR, AR, OR>(
    State(state): State<AppState<CR, RR, AR, OR>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    CR: CategoryRepository + Send + Sync + 'static,
    RR: RoomRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    OR: OwnerRepository + Send + Sync + 'static,
{
    let category_id: CategoryId = parse_id(&id)?;
    let category = state.category_service.get_category(category_id).await?;
    Ok(GetResponse::Ok(Json(category)))
}

/// `PUT /categories/:id` — partial update.
pub async fn update<CR, RR, AR, OR>(
    State(state): State<AppState<CR, RR, AR, OR>>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateCategoryRequest>, JsonRejection>,
) -> Result<GetResponse, ApiError>
where
    CR: CategoryRepository + Send + Sync + 'static,
    RR: RoomRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    OR: OwnerRepository + Send + Sync + 'static,
{
    let category_id: CategoryId = parse_id(&id)?;
    let Json(req) = payload?;

    let patch = CategoryPatch {
        name: req.name,
        kind: parse_kind(req.kind)?,
    };
    let updated = state
        .category_service
        .update_category(category_id, patch)
        .await?;
    Ok(GetResponse::Ok(Json(updated)))
}

/// `DELETE /categories/:id`
pub async fn delete<CR, RR, AR, OR>(
    State(state): State<AppState<CR, RR, AR, OR>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    CR: CategoryRepository + Send + Sync + 'static,
    RR: RoomRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    OR: OwnerRepository + Send + Sync + 'static,
{
    let category_id: CategoryId = parse_id(&id)?;
    state.category_service.delete_category(category_id).await?;
    Ok(DeleteResponse::NoContent)
}
