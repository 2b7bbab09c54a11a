use uuid::Uuid;

/// Fresh record id: 32 lowercase hex digits of a random v4 UUID, no hyphens.
pub fn new_id() -> String {
    Uuid::new_v4().simple().to_string()
}
