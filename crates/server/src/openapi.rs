use utoipa::OpenApi;
use utoipa::ToSchema;

use models::{CustomerCreateRequest, CustomerUpdateRequest, EntityCreateRequest, EntityUpdateRequest};

use crate::dto::{CustomerResponse, EntityResponse};
use crate::errors::ErrorResponse;

#[derive(ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::customers::list_customers,
        crate::routes::customers::get_customer,
        crate::routes::customers::create_customer,
        crate::routes::customers::upsert_customer,
        crate::routes::customers::delete_customer,
        crate::routes::customers::customer_exists,
        crate::routes::entities::list_entities,
        crate::routes::entities::get_entity,
        crate::routes::entities::create_entity,
        crate::routes::entities::upsert_entity,
        crate::routes::entities::delete_entity,
        crate::routes::entities::entity_exists,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorResponse,
            CustomerCreateRequest,
            CustomerUpdateRequest,
            CustomerResponse,
            EntityCreateRequest,
            EntityUpdateRequest,
            EntityResponse,
        )
    ),
    tags(
        (name = "health"),
        (name = "customers"),
        (name = "entities")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_resource_path() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();
        for p in ["/health", "/api/v1/customers", "/api/v1/customers/{id}", "/api/v1/entities", "/api/v1/entities/{id}"] {
            assert!(paths.iter().any(|k| k.as_str() == p), "missing {p} in {paths:?}");
        }
    }
}
