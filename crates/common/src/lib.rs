//! Shared plumbing for the warehouse crates: logging bootstrap and small
//! wire types that are not tied to a resource.

pub mod types;
pub mod utils;
