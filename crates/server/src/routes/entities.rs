use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use models::{EntityCreateRequest, EntityUpdateRequest};

use crate::dto::EntityResponse;
use crate::errors::ApiError;
use crate::routes::resource;
use crate::state::AppState;

/// Get all entities
#[utoipa::path(get, path = "/api/v1/entities", tag = "entities",
    responses((status = 200, description = "All entities in insertion order", body = [EntityResponse])))]
pub async fn list_entities(State(state): State<AppState>) -> Json<Vec<EntityResponse>> {
    resource::list(&state.entities).await
}

/// Get entity by id
#[utoipa::path(get, path = "/api/v1/entities/{id}", tag = "entities",
    params(("id" = String, Path, description = "Entity id")),
    responses(
        (status = 200, description = "Entity", body = EntityResponse),
        (status = 404, description = "Not Found", body = crate::errors::ErrorResponse)
    ))]
pub async fn get_entity(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<EntityResponse>, ApiError> {
    resource::get(&state.entities, &id).await
}

/// Create entity
#[utoipa::path(post, path = "/api/v1/entities", tag = "entities",
    request_body = EntityCreateRequest,
    responses(
        (status = 200, description = "Created entity", body = EntityResponse),
        (status = 400, description = "Bad Request", body = crate::errors::ErrorResponse)
    ))]
pub async fn create_entity(
    State(state): State<AppState>,
    body: Result<Json<EntityCreateRequest>, JsonRejection>,
) -> Result<Json<EntityResponse>, ApiError> {
    resource::create(&state.entities, body).await
}

/// Updates or creates entity; the body must carry the path id
#[utoipa::path(put, path = "/api/v1/entities/{id}", tag = "entities",
    params(("id" = String, Path, description = "Entity id")),
    request_body = EntityUpdateRequest,
    responses(
        (status = 200, description = "Stored entity", body = EntityResponse),
        (status = 400, description = "Bad Request", body = crate::errors::ErrorResponse)
    ))]
pub async fn upsert_entity(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<EntityUpdateRequest>, JsonRejection>,
) -> Result<Json<EntityResponse>, ApiError> {
    resource::upsert(&state.entities, &id, body).await
}

/// Removes entity
#[utoipa::path(delete, path = "/api/v1/entities/{id}", tag = "entities",
    params(("id" = String, Path, description = "Entity id")),
    responses(
        (status = 200, description = "Removed"),
        (status = 404, description = "Not Found", body = crate::errors::ErrorResponse)
    ))]
pub async fn delete_entity(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    resource::delete(&state.entities, &id).await
}

/// Checks if entity exists
#[utoipa::path(head, path = "/api/v1/entities/{id}", tag = "entities",
    params(("id" = String, Path, description = "Entity id")),
    responses(
        (status = 200, description = "Exists"),
        (status = 404, description = "Not Found")
    ))]
pub async fn entity_exists(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    resource::exists(&state.entities, &id).await
}
