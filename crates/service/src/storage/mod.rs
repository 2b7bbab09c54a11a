//! Storage abstractions for the service layer.
//!
//! `resource_store` defines the contract services depend on; `memory_store`
//! is the in-process implementation shared by every resource family.

use thiserror::Error;

pub mod memory_store;
pub mod resource_store;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("{kind} with id {id} already exists")]
    DuplicateId { kind: &'static str, id: String },
}
