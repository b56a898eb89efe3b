//! People Registry Domain
//!
//! This crate manages people and the addresses they own.
//!
//! # Ownership model
//!
//! Ownership points one way: an `Address` carries the identifier of the
//! `Person` that owns it, and a person's address set is the derived
//! `find_by_owner` query. No address collection is stored on the person, so
//! the two records can never disagree about ownership.
//!
//! # The principal address
//!
//! At most one address per person is the principal one at any observable
//! rest point. The store does not enforce this; `AddressService` re-balances
//! on writes by demoting a person's existing addresses before a new
//! principal lands.
//!
//! # Examples
//!
//! ```rust
//! use domain_people::{AddressDraft, Person};
//! use chrono::NaiveDate;
//!
//! let person = Person::new("Ada Lovelace", NaiveDate::from_ymd_opt(1815, 12, 10).unwrap());
//!
//! let draft = AddressDraft {
//!     id: None,
//!     street: "Horsley Towers".to_string(),
//!     number: "1".to_string(),
//!     city: "East Horsley".to_string(),
//!     postal_code: "KT24".to_string(),
//!     is_principal: true,
//!     person_id: Some(person.id),
//! };
//!
//! // The draft targets the person it claims to belong to
//! assert!(draft.ensure_owner(person.id).is_ok());
//! ```

pub mod address;
pub mod messages;
pub mod person;
pub mod ports;
pub mod service;

pub use address::{Address, AddressDraft, AddressRecord};
pub use person::{Person, PersonRecord};
pub use ports::{AddressPort, PersonPort};
#[cfg(any(test, feature = "mock"))]
pub use ports::mock::{MockAddressPort, MockPersonPort};
pub use service::{AddressService, PersonService};
