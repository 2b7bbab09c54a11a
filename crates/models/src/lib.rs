//! Warehouse domain records and the request shapes that create or replace them.
//!
//! Both resource families implement [`record::Record`] so storage and HTTP
//! handling can be written once and reused for customers and entities.

pub mod customer;
pub mod de;
pub mod entity;
pub mod errors;
pub mod record;
pub mod validation;

pub use customer::{Customer, CustomerCreateRequest, CustomerUpdateRequest};
pub use entity::{Entity, EntityCreateRequest, EntityUpdateRequest};
pub use errors::ValidationError;
pub use record::{CreateRequest, Record, UpdateRequest};
