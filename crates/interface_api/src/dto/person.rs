//! Person DTOs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use core_kernel::PersonId;
use domain_people::{Person, PersonRecord};

/// Request body for creating or updating a person
///
/// The identifier is absent on creation and present on updates; update
/// handlers cross-check it against the path before saving.
#[derive(Debug, Deserialize, Validate)]
pub struct SavePersonRequest {
    pub id: Option<Uuid>,
    #[validate(length(min = 1, max = 100, message = "must be between 1 and 100 characters"))]
    pub name: String,
    pub birth_date: NaiveDate,
}

impl From<SavePersonRequest> for PersonRecord {
    fn from(request: SavePersonRequest) -> Self {
        PersonRecord {
            id: request.id.map(PersonId::from_uuid),
            name: request.name,
            birth_date: request.birth_date,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PersonResponse {
    pub id: Uuid,
    pub name: String,
    pub birth_date: NaiveDate,
}

impl From<Person> for PersonResponse {
    fn from(person: Person) -> Self {
        PersonResponse {
            id: Uuid::from(person.id),
            name: person.name,
            birth_date: person.birth_date,
        }
    }
}
