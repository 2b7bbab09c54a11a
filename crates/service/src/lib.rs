//! Service layer for the warehouse resources.
//! - `storage` holds the in-memory, lock-guarded record collections.
//! - `resource` runs validate → mutate for one resource family.
//! - Errors are reported through [`errors::ServiceError`].

pub mod errors;
pub mod ids;
pub mod resource;
pub mod storage;

pub use errors::ServiceError;
pub use resource::ResourceService;
pub use storage::{memory_store::MemoryStore, resource_store::ResourceStore, StoreError};
