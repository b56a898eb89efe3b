//! Person entity and its write shape

use chrono::NaiveDate;
use core_kernel::{DomainError, PersonId};
use serde::{Deserialize, Serialize};

use crate::messages;

/// A registered person
///
/// Names are unique across the registry under case-insensitive comparison.
/// The rule is enforced at write time by `PersonService`, never by the
/// store, so the store may hold historical duplicates without breaking
/// reads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    pub birth_date: NaiveDate,
}

impl Person {
    /// Creates a person with a fresh identifier
    pub fn new(name: impl Into<String>, birth_date: NaiveDate) -> Self {
        Self {
            id: PersonId::new(),
            name: name.into(),
            birth_date,
        }
    }
}

/// Write shape for saving a person
///
/// `id: None` creates a new record and lets the store mint the identifier;
/// `id: Some` updates the record with that identifier.
#[derive(Debug, Clone)]
pub struct PersonRecord {
    pub id: Option<PersonId>,
    pub name: String,
    pub birth_date: NaiveDate,
}

impl PersonRecord {
    /// Write shape for a brand new person
    pub fn create(name: impl Into<String>, birth_date: NaiveDate) -> Self {
        Self {
            id: None,
            name: name.into(),
            birth_date,
        }
    }

    /// Fails unless this record targets exactly `person_id`
    ///
    /// A missing identifier counts as a mismatch, never as an implicit
    /// create.
    pub fn ensure_identity(&self, person_id: PersonId) -> Result<(), DomainError> {
        if self.id == Some(person_id) {
            Ok(())
        } else {
            Err(DomainError::not_found(messages::PERSON_NOT_FOUND))
        }
    }
}

impl From<Person> for PersonRecord {
    fn from(person: Person) -> Self {
        Self {
            id: Some(person.id),
            name: person.name,
            birth_date: person.birth_date,
        }
    }
}
