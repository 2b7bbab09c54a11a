use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::de::null_as_empty;
use crate::errors::ValidationError;
use crate::record::{CreateRequest, Record, UpdateRequest};
use crate::validation::require;

/// A stocked warehouse item. Quantity is not range-checked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entity {
    pub id: String,
    pub name: String,
    pub created_date: DateTime<Utc>,
    pub available_quantity: i32,
}

impl Record for Entity {
    const KIND: &'static str = "entity";

    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_date
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default, rename_all = "PascalCase")]
pub struct EntityCreateRequest {
    #[serde(alias = "name", deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(alias = "availableQuantity")]
    pub available_quantity: i32,
}

impl CreateRequest for EntityCreateRequest {
    type Record = Entity;

    fn check_fields(&self) -> Result<(), ValidationError> {
        require(&self.name, "Empty Name")
    }

    fn into_record(self, id: String, created_at: DateTime<Utc>) -> Entity {
        Entity {
            id,
            name: self.name,
            created_date: created_at,
            available_quantity: self.available_quantity,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default, rename_all = "PascalCase")]
pub struct EntityUpdateRequest {
    #[serde(alias = "id", deserialize_with = "null_as_empty")]
    pub id: String,
    #[serde(alias = "name", deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(alias = "availableQuantity")]
    pub available_quantity: i32,
}

impl UpdateRequest for EntityUpdateRequest {
    type Record = Entity;

    fn id(&self) -> &str {
        &self.id
    }

    fn check_fields(&self) -> Result<(), ValidationError> {
        // Customer updates say "empty FirstName"; entities name their own field.
        require(&self.name, "empty Name")
    }

    fn into_record(self, created_at: DateTime<Utc>) -> Entity {
        Entity {
            id: self.id,
            name: self.name,
            created_date: created_at,
            available_quantity: self.available_quantity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_quantity_is_accepted() {
        let req: EntityCreateRequest =
            serde_json::from_str(r#"{"Name":"crate","AvailableQuantity":-3}"#).expect("decode");
        assert!(req.check_fields().is_ok());
        let entity = req.into_record("e1".into(), Utc::now());
        assert_eq!(entity.available_quantity, -3);
        assert_eq!(Entity::KIND, "entity");
    }

    #[test]
    fn null_name_reads_as_empty() {
        let req: EntityCreateRequest = serde_json::from_str(r#"{"Name":null}"#).expect("decode");
        assert_eq!(req.check_fields().unwrap_err().reason(), "Empty Name");

        let req: EntityUpdateRequest =
            serde_json::from_str(r#"{"id":"e1","name":null,"availableQuantity":2}"#).expect("decode");
        assert_eq!(req.id(), "e1");
        assert_eq!(req.available_quantity, 2);
        assert_eq!(req.check_fields().unwrap_err().reason(), "empty Name");
    }
}
