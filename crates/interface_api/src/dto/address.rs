//! Address DTOs

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use core_kernel::{AddressId, PersonId};
use domain_people::{Address, AddressDraft};

/// Request body for creating or updating an address
///
/// `person_id` names the owner and must agree with the path; the identifier
/// is absent on creation and present on updates.
#[derive(Debug, Deserialize, Validate)]
pub struct SaveAddressRequest {
    pub id: Option<Uuid>,
    #[validate(length(min = 1, max = 100, message = "must be between 1 and 100 characters"))]
    pub street: String,
    #[validate(length(min = 1, max = 10, message = "must be between 1 and 10 characters"))]
    pub number: String,
    #[validate(length(min = 1, max = 100, message = "must be between 1 and 100 characters"))]
    pub city: String,
    #[validate(length(min = 1, max = 10, message = "must be between 1 and 10 characters"))]
    pub postal_code: String,
    pub is_principal: bool,
    pub person_id: Option<Uuid>,
}

impl From<SaveAddressRequest> for AddressDraft {
    fn from(request: SaveAddressRequest) -> Self {
        AddressDraft {
            id: request.id.map(AddressId::from_uuid),
            street: request.street,
            number: request.number,
            city: request.city,
            postal_code: request.postal_code,
            is_principal: request.is_principal,
            person_id: request.person_id.map(PersonId::from_uuid),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AddressResponse {
    pub id: Uuid,
    pub street: String,
    pub number: String,
    pub city: String,
    pub postal_code: String,
    pub is_principal: bool,
    pub person_id: Uuid,
}

impl From<Address> for AddressResponse {
    fn from(address: Address) -> Self {
        AddressResponse {
            id: Uuid::from(address.id),
            street: address.street,
            number: address.number,
            city: address.city,
            postal_code: address.postal_code,
            is_principal: address.is_principal,
            person_id: Uuid::from(address.person_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> SaveAddressRequest {
        SaveAddressRequest {
            id: None,
            street: "Rua das Flores".to_string(),
            number: "100".to_string(),
            city: "Curitiba".to_string(),
            postal_code: "80010-000".to_string(),
            is_principal: false,
            person_id: Some(Uuid::new_v4()),
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(request().validate().is_ok());
    }

    #[test]
    fn test_number_over_limit_is_rejected() {
        let mut request = request();
        request.number = "12345678901".to_string();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_blank_street_is_rejected() {
        let mut request = request();
        request.street = String::new();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_conversion_keeps_owner() {
        let request = request();
        let owner = request.person_id.unwrap();

        let draft = AddressDraft::from(request);

        assert_eq!(draft.person_id, Some(PersonId::from_uuid(owner)));
        assert!(draft.id.is_none());
    }
}
