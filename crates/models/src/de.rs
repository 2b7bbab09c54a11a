//! Decoding helpers shared by the request bodies.

use serde::{Deserialize, Deserializer};

/// Decode a string field where JSON `null` means the same as `""`, so the
/// field's own required-value check reports it.
pub fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}
