//! Outgoing representations. Each is a field-for-field copy of its record,
//! produced by an explicit `From<&Record>` mapping.

use chrono::{DateTime, Utc};
use models::{Customer, Entity};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct CustomerResponse {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub age: u8,
    pub creation_date: DateTime<Utc>,
}

impl From<&Customer> for CustomerResponse {
    fn from(c: &Customer) -> Self {
        Self {
            id: c.id.clone(),
            first_name: c.first_name.clone(),
            last_name: c.last_name.clone(),
            age: c.age,
            creation_date: c.creation_date,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct EntityResponse {
    pub id: String,
    pub name: String,
    pub created_date: DateTime<Utc>,
    pub available_quantity: i32,
}

impl From<&Entity> for EntityResponse {
    fn from(e: &Entity) -> Self {
        Self {
            id: e.id.clone(),
            name: e.name.clone(),
            created_date: e.created_date,
            available_quantity: e.available_quantity,
        }
    }
}
