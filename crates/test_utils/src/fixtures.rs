//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for people and addresses. These fixtures
//! are designed to be consistent and predictable for unit tests.

use chrono::NaiveDate;
use core_kernel::{AddressId, PersonId};
use domain_people::{Address, Person};

/// Fixture for person test data
pub struct PersonFixtures;

impl PersonFixtures {
    /// Standard birth date used across tests (Mar 25, 1990)
    pub fn birth_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(1990, 3, 25).unwrap()
    }

    /// A ready-made person with a fresh identifier
    pub fn joana() -> Person {
        Person::new("Joana Prado", Self::birth_date())
    }

    /// A second, distinct person
    pub fn rafael() -> Person {
        Person::new("Rafael Lima", NaiveDate::from_ymd_opt(1985, 7, 12).unwrap())
    }
}

/// Fixture for address test data
pub struct AddressFixtures;

impl AddressFixtures {
    /// A non-principal residential address for the given owner
    pub fn residential(owner: PersonId) -> Address {
        Address {
            id: AddressId::new(),
            street: "Rua das Flores".to_string(),
            number: "100".to_string(),
            city: "Curitiba".to_string(),
            postal_code: "80010-000".to_string(),
            is_principal: false,
            person_id: owner,
        }
    }

    /// A principal address for the given owner
    pub fn principal(owner: PersonId) -> Address {
        Address {
            id: AddressId::new(),
            street: "Avenida Paulista".to_string(),
            number: "1578".to_string(),
            city: "São Paulo".to_string(),
            postal_code: "01310-200".to_string(),
            is_principal: true,
            person_id: owner,
        }
    }
}
