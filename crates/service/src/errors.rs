use models::ValidationError;
use thiserror::Error;

use crate::storage::StoreError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Not found {0}")]
    NotFound(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ServiceError {
    /// Lookup miss, e.g. `customer id: 42`.
    pub fn missing_id(kind: &str, id: &str) -> Self {
        Self::NotFound(format!("{kind} id: {id}"))
    }

    /// Delete or probe miss, e.g. `entity with id 42`.
    pub fn missing_with_id(kind: &str, id: &str) -> Self {
        Self::NotFound(format!("{kind} with id {id}"))
    }
}
