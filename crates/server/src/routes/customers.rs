use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use models::{CustomerCreateRequest, CustomerUpdateRequest};

use crate::dto::CustomerResponse;
use crate::errors::ApiError;
use crate::routes::resource;
use crate::state::AppState;

/// Get all customers
#[utoipa::path(get, path = "/api/v1/customers", tag = "customers",
    responses((status = 200, description = "All customers in insertion order", body = [CustomerResponse])))]
pub async fn list_customers(State(state): State<AppState>) -> Json<Vec<CustomerResponse>> {
    resource::list(&state.customers).await
}

/// Get customer by id
#[utoipa::path(get, path = "/api/v1/customers/{id}", tag = "customers",
    params(("id" = String, Path, description = "Customer id")),
    responses(
        (status = 200, description = "Customer", body = CustomerResponse),
        (status = 404, description = "Not Found", body = crate::errors::ErrorResponse)
    ))]
pub async fn get_customer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CustomerResponse>, ApiError> {
    resource::get(&state.customers, &id).await
}

/// Creates customer
#[utoipa::path(post, path = "/api/v1/customers", tag = "customers",
    request_body = CustomerCreateRequest,
    responses(
        (status = 200, description = "Created customer", body = CustomerResponse),
        (status = 400, description = "Bad Request", body = crate::errors::ErrorResponse)
    ))]
pub async fn create_customer(
    State(state): State<AppState>,
    body: Result<Json<CustomerCreateRequest>, JsonRejection>,
) -> Result<Json<CustomerResponse>, ApiError> {
    resource::create(&state.customers, body).await
}

/// Updates or creates customer; the body must carry the path id
#[utoipa::path(put, path = "/api/v1/customers/{id}", tag = "customers",
    params(("id" = String, Path, description = "Customer id")),
    request_body = CustomerUpdateRequest,
    responses(
        (status = 200, description = "Stored customer", body = CustomerResponse),
        (status = 400, description = "Bad Request", body = crate::errors::ErrorResponse)
    ))]
pub async fn upsert_customer(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<CustomerUpdateRequest>, JsonRejection>,
) -> Result<Json<CustomerResponse>, ApiError> {
    resource::upsert(&state.customers, &id, body).await
}

/// Removes customer
#[utoipa::path(delete, path = "/api/v1/customers/{id}", tag = "customers",
    params(("id" = String, Path, description = "Customer id")),
    responses(
        (status = 200, description = "Removed"),
        (status = 404, description = "Not Found", body = crate::errors::ErrorResponse)
    ))]
pub async fn delete_customer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    resource::delete(&state.customers, &id).await
}

/// Checks if customer exists
#[utoipa::path(head, path = "/api/v1/customers/{id}", tag = "customers",
    params(("id" = String, Path, description = "Customer id")),
    responses(
        (status = 200, description = "Exists"),
        (status = 404, description = "Not Found")
    ))]
pub async fn customer_exists(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    resource::exists(&state.customers, &id).await
}
