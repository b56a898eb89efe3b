//! Address types
//!
//! An address always carries its owner's identifier. A person's address set
//! is the derived `find_by_owner` query, not stored state on the person.

use core_kernel::{AddressId, DomainError, PersonId};
use serde::{Deserialize, Serialize};

use crate::messages;

/// A postal address owned by a person
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Address {
    pub id: AddressId,
    pub street: String,
    pub number: String,
    pub city: String,
    pub postal_code: String,
    pub is_principal: bool,
    pub person_id: PersonId,
}

impl Address {
    /// Materializes a stored address from a validated write shape
    pub fn from_record(record: AddressRecord, id: AddressId) -> Self {
        Self {
            id,
            street: record.street,
            number: record.number,
            city: record.city,
            postal_code: record.postal_code,
            is_principal: record.is_principal,
            person_id: record.person_id,
        }
    }
}

/// Write shape accepted by `AddressService`
///
/// Mirrors the wire: both the record identifier and the owner reference may
/// be absent. `id: None` creates; an absent owner is rejected by the
/// service, never silently defaulted.
#[derive(Debug, Clone)]
pub struct AddressDraft {
    pub id: Option<AddressId>,
    pub street: String,
    pub number: String,
    pub city: String,
    pub postal_code: String,
    pub is_principal: bool,
    pub person_id: Option<PersonId>,
}

impl AddressDraft {
    /// Returns the owner reference, or Invalid when it is absent
    pub fn owner(&self) -> Result<PersonId, DomainError> {
        self.person_id
            .ok_or_else(|| DomainError::invalid(messages::ADDRESS_OWNER_REQUIRED))
    }

    /// Fails unless the draft declares exactly `person_id` as its owner
    ///
    /// An absent owner reference counts as a mismatch.
    pub fn ensure_owner(&self, person_id: PersonId) -> Result<(), DomainError> {
        if self.person_id == Some(person_id) {
            Ok(())
        } else {
            Err(DomainError::not_found(messages::PERSON_NOT_FOUND))
        }
    }

    /// Fails unless the draft targets exactly `address_id`
    ///
    /// A missing identifier counts as a mismatch, never as an implicit
    /// create.
    pub fn ensure_identity(&self, address_id: AddressId) -> Result<(), DomainError> {
        if self.id == Some(address_id) {
            Ok(())
        } else {
            Err(DomainError::not_found(messages::ADDRESS_NOT_FOUND))
        }
    }

    /// Locks in the owner, producing the shape storage accepts
    pub fn into_record(self, person_id: PersonId) -> AddressRecord {
        AddressRecord {
            id: self.id,
            street: self.street,
            number: self.number,
            city: self.city,
            postal_code: self.postal_code,
            is_principal: self.is_principal,
            person_id,
        }
    }
}

impl From<Address> for AddressDraft {
    fn from(address: Address) -> Self {
        Self {
            id: Some(address.id),
            street: address.street,
            number: address.number,
            city: address.city,
            postal_code: address.postal_code,
            is_principal: address.is_principal,
            person_id: Some(address.person_id),
        }
    }
}

/// Validated write shape handed to storage
///
/// By the time a record reaches a port the owner is always known, so the
/// reference is concrete here.
#[derive(Debug, Clone)]
pub struct AddressRecord {
    pub id: Option<AddressId>,
    pub street: String,
    pub number: String,
    pub city: String,
    pub postal_code: String,
    pub is_principal: bool,
    pub person_id: PersonId,
}

impl From<Address> for AddressRecord {
    fn from(address: Address) -> Self {
        Self {
            id: Some(address.id),
            street: address.street,
            number: address.number,
            city: address.city,
            postal_code: address.postal_code,
            is_principal: address.is_principal,
            person_id: address.person_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft_for(person_id: Option<PersonId>) -> AddressDraft {
        AddressDraft {
            id: None,
            street: "Rua das Flores".to_string(),
            number: "72".to_string(),
            city: "Porto Alegre".to_string(),
            postal_code: "90000123".to_string(),
            is_principal: false,
            person_id,
        }
    }

    #[test]
    fn test_owner_rejects_absent_reference() {
        let error = draft_for(None).owner().unwrap_err();
        assert_eq!(error.to_string(), messages::ADDRESS_OWNER_REQUIRED);
        assert!(error.is_invalid());
    }

    #[test]
    fn test_ensure_owner_mismatch_reads_as_missing_person() {
        let draft = draft_for(Some(PersonId::new()));
        let error = draft.ensure_owner(PersonId::new()).unwrap_err();
        assert_eq!(error.to_string(), messages::PERSON_NOT_FOUND);
    }

    #[test]
    fn test_ensure_owner_accepts_declared_owner() {
        let owner = PersonId::new();
        assert!(draft_for(Some(owner)).ensure_owner(owner).is_ok());
    }

    #[test]
    fn test_ensure_identity_missing_id_is_a_mismatch() {
        let draft = draft_for(Some(PersonId::new()));
        let error = draft.ensure_identity(AddressId::new()).unwrap_err();
        assert_eq!(error.to_string(), messages::ADDRESS_NOT_FOUND);
    }

    #[test]
    fn test_into_record_keeps_fields() {
        let owner = PersonId::new();
        let record = draft_for(Some(owner)).into_record(owner);
        assert_eq!(record.person_id, owner);
        assert_eq!(record.street, "Rua das Flores");
        assert!(record.id.is_none());
    }
}
