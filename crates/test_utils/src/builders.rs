//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible
//! defaults. These builders allow tests to specify only the relevant fields
//! while using defaults for everything else.

use chrono::NaiveDate;
use core_kernel::{AddressId, PersonId};
use domain_people::{Address, Person};

use crate::fixtures::PersonFixtures;

/// Builder for constructing test people
pub struct PersonBuilder {
    id: PersonId,
    name: String,
    birth_date: NaiveDate,
}

impl Default for PersonBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PersonBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            id: PersonId::new(),
            name: "Joana Prado".to_string(),
            birth_date: PersonFixtures::birth_date(),
        }
    }

    /// Sets the identifier
    pub fn with_id(mut self, id: PersonId) -> Self {
        self.id = id;
        self
    }

    /// Sets the name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the birth date
    pub fn with_birth_date(mut self, birth_date: NaiveDate) -> Self {
        self.birth_date = birth_date;
        self
    }

    /// Builds the person
    pub fn build(self) -> Person {
        Person {
            id: self.id,
            name: self.name,
            birth_date: self.birth_date,
        }
    }
}

/// Builder for constructing test addresses
///
/// An address never exists without an owner, so the builder takes the owner
/// up front.
pub struct AddressBuilder {
    id: AddressId,
    street: String,
    number: String,
    city: String,
    postal_code: String,
    is_principal: bool,
    person_id: PersonId,
}

impl AddressBuilder {
    /// Creates a new builder owned by the given person
    pub fn new(owner: PersonId) -> Self {
        Self {
            id: AddressId::new(),
            street: "Rua das Flores".to_string(),
            number: "100".to_string(),
            city: "Curitiba".to_string(),
            postal_code: "80010-000".to_string(),
            is_principal: false,
            person_id: owner,
        }
    }

    /// Sets the identifier
    pub fn with_id(mut self, id: AddressId) -> Self {
        self.id = id;
        self
    }

    /// Sets the street
    pub fn with_street(mut self, street: impl Into<String>) -> Self {
        self.street = street.into();
        self
    }

    /// Sets the street number
    pub fn with_number(mut self, number: impl Into<String>) -> Self {
        self.number = number.into();
        self
    }

    /// Sets the city
    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }

    /// Sets the postal code
    pub fn with_postal_code(mut self, postal_code: impl Into<String>) -> Self {
        self.postal_code = postal_code.into();
        self
    }

    /// Marks the address as the principal one
    pub fn principal(mut self) -> Self {
        self.is_principal = true;
        self
    }

    /// Builds the address
    pub fn build(self) -> Address {
        Address {
            id: self.id,
            street: self.street,
            number: self.number,
            city: self.city,
            postal_code: self.postal_code,
            is_principal: self.is_principal,
            person_id: self.person_id,
        }
    }
}
