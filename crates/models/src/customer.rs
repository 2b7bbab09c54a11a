use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::de::null_as_empty;
use crate::errors::ValidationError;
use crate::record::{CreateRequest, Record, UpdateRequest};
use crate::validation::require;

/// Customer entity
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Customer {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub age: u8,
    pub creation_date: DateTime<Utc>,
}

impl Record for Customer {
    const KIND: &'static str = "customer";

    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.creation_date
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default, rename_all = "PascalCase")]
pub struct CustomerCreateRequest {
    #[serde(alias = "firstName", deserialize_with = "null_as_empty")]
    pub first_name: String,
    #[serde(alias = "lastName", deserialize_with = "null_as_empty")]
    pub last_name: String,
    #[serde(alias = "age")]
    pub age: u8,
}

impl CreateRequest for CustomerCreateRequest {
    type Record = Customer;

    fn check_fields(&self) -> Result<(), ValidationError> {
        require(&self.first_name, "Empty First Name")?;
        require(&self.last_name, "Empty Last Name")
    }

    fn into_record(self, id: String, created_at: DateTime<Utc>) -> Customer {
        Customer {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            age: self.age,
            creation_date: created_at,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default, rename_all = "PascalCase")]
pub struct CustomerUpdateRequest {
    #[serde(alias = "id", deserialize_with = "null_as_empty")]
    pub id: String,
    #[serde(alias = "firstName", deserialize_with = "null_as_empty")]
    pub first_name: String,
    #[serde(alias = "lastName", deserialize_with = "null_as_empty")]
    pub last_name: String,
    #[serde(alias = "age")]
    pub age: u8,
}

impl UpdateRequest for CustomerUpdateRequest {
    type Record = Customer;

    fn id(&self) -> &str {
        &self.id
    }

    fn check_fields(&self) -> Result<(), ValidationError> {
        require(&self.first_name, "empty FirstName")?;
        require(&self.last_name, "empty LastName")
    }

    fn into_record(self, created_at: DateTime<Utc>) -> Customer {
        Customer {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            age: self.age,
            creation_date: created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_decode_as_empty() {
        let req: CustomerCreateRequest =
            serde_json::from_str(r#"{"LastName":"Doe"}"#).expect("decode");
        assert_eq!(req.first_name, "");
        assert_eq!(req.last_name, "Doe");
        assert_eq!(req.age, 0);
    }

    #[test]
    fn null_fields_decode_as_empty() {
        let req: CustomerCreateRequest =
            serde_json::from_str(r#"{"FirstName":null,"LastName":"Doe"}"#).expect("decode");
        assert_eq!(req.first_name, "");
        assert_eq!(req.check_fields().unwrap_err().reason(), "Empty First Name");

        let req: CustomerUpdateRequest =
            serde_json::from_str(r#"{"Id":null,"FirstName":"John","LastName":null}"#).expect("decode");
        assert_eq!(req.id(), "");
        assert_eq!(req.check_fields().unwrap_err().reason(), "empty LastName");
    }

    #[test]
    fn camel_case_keys_are_accepted() {
        let req: CustomerUpdateRequest =
            serde_json::from_str(r#"{"id":"c1","firstName":"John","lastName":"Doe","age":4}"#).expect("decode");
        assert_eq!(
            req,
            CustomerUpdateRequest { id: "c1".into(), first_name: "John".into(), last_name: "Doe".into(), age: 4 }
        );
    }

    #[test]
    fn update_request_maps_every_field() {
        let now = Utc::now();
        let req = CustomerUpdateRequest {
            id: "c1".into(),
            first_name: "Ann".into(),
            last_name: "Lee".into(),
            age: 41,
        };
        let customer = req.into_record(now);
        assert_eq!(customer.id(), "c1");
        assert_eq!(customer.first_name, "Ann");
        assert_eq!(customer.last_name, "Lee");
        assert_eq!(customer.age, 41);
        assert_eq!(customer.created_at(), now);
    }

    #[test]
    fn age_out_of_range_is_rejected_by_decoder() {
        let res = serde_json::from_str::<CustomerCreateRequest>(r#"{"FirstName":"a","LastName":"b","Age":300}"#);
        assert!(res.is_err());
    }
}
