//! Handler bodies shared by every resource family. The per-resource modules
//! bind these to concrete record, request and representation types.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::Json;
use models::{CreateRequest, Record, UpdateRequest};
use serde::Serialize;
use service::ResourceService;
use tracing::debug;

use crate::errors::ApiError;

/// Unwrap an extracted body. A body that could not be decoded is treated as
/// absent so the validator reports it.
pub fn into_model<T>(body: Result<Json<T>, JsonRejection>) -> Option<T> {
    match body {
        Ok(Json(model)) => Some(model),
        Err(rejection) => {
            debug!(error = %rejection.body_text(), "rejected request body");
            None
        }
    }
}

pub async fn list<R, T>(svc: &ResourceService<R>) -> Json<Vec<T>>
where
    R: Record,
    T: for<'a> From<&'a R> + Serialize,
{
    Json(svc.list().await.iter().map(T::from).collect())
}

pub async fn get<R, T>(svc: &ResourceService<R>, id: &str) -> Result<Json<T>, ApiError>
where
    R: Record,
    T: for<'a> From<&'a R> + Serialize,
{
    let record = svc.get(id).await?;
    Ok(Json(T::from(&record)))
}

pub async fn create<R, C, T>(
    svc: &ResourceService<R>,
    body: Result<Json<C>, JsonRejection>,
) -> Result<Json<T>, ApiError>
where
    R: Record,
    C: CreateRequest<Record = R>,
    T: for<'a> From<&'a R> + Serialize,
{
    let record = svc.create(into_model(body)).await?;
    Ok(Json(T::from(&record)))
}

pub async fn upsert<R, U, T>(
    svc: &ResourceService<R>,
    id: &str,
    body: Result<Json<U>, JsonRejection>,
) -> Result<Json<T>, ApiError>
where
    R: Record,
    U: UpdateRequest<Record = R>,
    T: for<'a> From<&'a R> + Serialize,
{
    let record = svc.upsert(id, into_model(body)).await?;
    Ok(Json(T::from(&record)))
}

pub async fn delete<R: Record>(svc: &ResourceService<R>, id: &str) -> Result<StatusCode, ApiError> {
    svc.delete(id).await?;
    Ok(StatusCode::OK)
}

pub async fn exists<R: Record>(svc: &ResourceService<R>, id: &str) -> Result<StatusCode, ApiError> {
    svc.exists(id).await?;
    Ok(StatusCode::OK)
}
