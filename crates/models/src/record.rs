use chrono::{DateTime, Utc};

use crate::errors::ValidationError;

/// A stored domain record keyed by an opaque string id.
pub trait Record: Clone + Send + Sync + 'static {
    /// Lower-case resource name used in error descriptions and logs.
    const KIND: &'static str;

    fn id(&self) -> &str;

    fn created_at(&self) -> DateTime<Utc>;
}

/// Body of a create call. The server assigns id and creation time.
pub trait CreateRequest: Send + 'static {
    type Record: Record;

    /// Required-field checks, reported in declaration order.
    fn check_fields(&self) -> Result<(), ValidationError>;

    fn into_record(self, id: String, created_at: DateTime<Utc>) -> Self::Record;
}

/// Body of an upsert call. The caller supplies the id.
pub trait UpdateRequest: Send + 'static {
    type Record: Record;

    fn id(&self) -> &str;

    /// Required-field checks other than the id, reported in declaration order.
    fn check_fields(&self) -> Result<(), ValidationError>;

    fn into_record(self, created_at: DateTime<Utc>) -> Self::Record;
}
