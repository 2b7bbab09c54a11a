use axum::{routing::get, Json, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Health;

use crate::openapi::ApiDoc;
use crate::state::AppState;

pub mod customers;
pub mod entities;
pub mod resource;

pub const CUSTOMERS: &str = "/api/v1/customers";
pub const CUSTOMER: &str = "/api/v1/customers/:id";
pub const ENTITIES: &str = "/api/v1/entities";
pub const ENTITY: &str = "/api/v1/entities/:id";

#[utoipa::path(get, path = "/health", tag = "health",
    responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Route table for both resource families. HEAD has its own handler so it
/// does not fall through to GET.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route(CUSTOMERS, get(customers::list_customers).post(customers::create_customer))
        .route(
            CUSTOMER,
            get(customers::get_customer)
                .put(customers::upsert_customer)
                .delete(customers::delete_customer)
                .head(customers::customer_exists),
        )
        .route(ENTITIES, get(entities::list_entities).post(entities::create_entity))
        .route(
            ENTITY,
            get(entities::get_entity)
                .put(entities::upsert_entity)
                .delete(entities::delete_entity)
                .head(entities::entity_exists),
        )
}

/// Build the full application router: health, API docs and the resource API.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json))
        .merge(api_routes())
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
