//! Request and response data transfer objects
//!
//! Field-shape validation (lengths, required fields) lives here on the
//! request types; business rules stay in the domain services.

pub mod address;
pub mod person;
