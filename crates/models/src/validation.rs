//! Fail-fast request checks. Each function stops at the first violation and
//! never touches a store.

use crate::errors::ValidationError;
use crate::record::{CreateRequest, UpdateRequest};

pub const INVALID_MODEL: &str = "invalid model";
pub const ID_MISMATCH: &str = "different id in body and path";
pub const EMPTY_ID: &str = "empty id";

/// Fails with `reason` when `value` is empty. Whitespace counts as content.
pub fn require(value: &str, reason: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::new(reason));
    }
    Ok(())
}

/// Order: body present, then the resource's required fields.
pub fn validate_create<C: CreateRequest>(req: Option<C>) -> Result<C, ValidationError> {
    let req = req.ok_or_else(|| ValidationError::new(INVALID_MODEL))?;
    req.check_fields()?;
    Ok(req)
}

/// Order: body present, body id equals path id, id non-empty, then the
/// resource's required fields.
pub fn validate_update<U: UpdateRequest>(path_id: &str, req: Option<U>) -> Result<U, ValidationError> {
    let req = req.ok_or_else(|| ValidationError::new(INVALID_MODEL))?;
    if req.id() != path_id {
        return Err(ValidationError::new(ID_MISMATCH));
    }
    require(req.id(), EMPTY_ID)?;
    req.check_fields()?;
    Ok(req)
}
