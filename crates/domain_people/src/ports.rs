//! People Domain Ports
//!
//! This module defines the port interfaces for the people domain, enabling
//! swappable storage implementations (PostgreSQL, in-memory mock, etc.).
//!
//! # Architecture
//!
//! `PersonPort` and `AddressPort` define the storage capabilities the domain
//! consumes: load-by-id, the named lookups, and upsert. Misses are `Ok(None)`
//! or an empty vector; converting a miss into a typed not-found failure is
//! the caller's decision, made through `OrNotFound` in the services.
//!
//! # Usage
//!
//! ```rust,ignore
//! use domain_people::ports::PersonPort;
//! use std::sync::Arc;
//!
//! // Application services receive the port trait
//! pub struct PersonService {
//!     port: Arc<dyn PersonPort>,
//! }
//! ```

use async_trait::async_trait;
use core_kernel::{AddressId, DomainPort, PersonId, PortError};

use crate::address::{Address, AddressRecord};
use crate::person::{Person, PersonRecord};

/// Storage port for person records
///
/// All methods are async and return `Result<T, PortError>` so error handling
/// stays consistent across adapter implementations.
#[async_trait]
pub trait PersonPort: DomainPort {
    /// Retrieves every stored person
    ///
    /// No ordering guarantee beyond store iteration order.
    async fn find_all(&self) -> Result<Vec<Person>, PortError>;

    /// Looks up a person by identifier
    async fn find_by_id(&self, id: PersonId) -> Result<Option<Person>, PortError>;

    /// Case-insensitive lookup by exact name
    ///
    /// When several stored records match, the first one wins; the store
    /// never guarantees uniqueness.
    async fn find_by_name_ignore_case(&self, name: &str) -> Result<Option<Person>, PortError>;

    /// Persists the record
    ///
    /// Inserts when the record carries no identifier, minting a fresh one;
    /// updates (or revives the row under the given identifier) otherwise.
    /// Returns the record as stored.
    async fn upsert(&self, record: PersonRecord) -> Result<Person, PortError>;
}

/// Storage port for address records
#[async_trait]
pub trait AddressPort: DomainPort {
    /// Retrieves every address owned by `owner`
    ///
    /// Empty when the person owns none. No ordering guarantee beyond store
    /// iteration order.
    async fn find_by_owner(&self, owner: PersonId) -> Result<Vec<Address>, PortError>;

    /// Looks up an address by identifier
    async fn find_by_id(&self, id: AddressId) -> Result<Option<Address>, PortError>;

    /// Persists the record; insert-or-update semantics as for people
    async fn upsert(&self, record: AddressRecord) -> Result<Address, PortError>;
}

/// Mock implementations of the ports for testing
///
/// These adapters store records in memory and are useful for unit testing
/// without a database.
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    /// In-memory mock implementation of `PersonPort`
    ///
    /// Backed by a `Vec` so iteration order is insertion order, which keeps
    /// tests over `find_all` deterministic.
    #[derive(Debug, Default)]
    pub struct MockPersonPort {
        people: Arc<RwLock<Vec<Person>>>,
    }

    impl MockPersonPort {
        /// Creates an empty mock port
        pub fn new() -> Self {
            Self::default()
        }

        /// Pre-populates with people for testing
        pub async fn with_people(people: Vec<Person>) -> Self {
            let port = Self::new();
            port.people.write().await.extend(people);
            port
        }
    }

    impl DomainPort for MockPersonPort {}

    #[async_trait]
    impl PersonPort for MockPersonPort {
        async fn find_all(&self) -> Result<Vec<Person>, PortError> {
            Ok(self.people.read().await.clone())
        }

        async fn find_by_id(&self, id: PersonId) -> Result<Option<Person>, PortError> {
            Ok(self.people.read().await.iter().find(|p| p.id == id).cloned())
        }

        async fn find_by_name_ignore_case(&self, name: &str) -> Result<Option<Person>, PortError> {
            let needle = name.to_lowercase();
            Ok(self
                .people
                .read()
                .await
                .iter()
                .find(|p| p.name.to_lowercase() == needle)
                .cloned())
        }

        async fn upsert(&self, record: PersonRecord) -> Result<Person, PortError> {
            let mut people = self.people.write().await;
            let person = Person {
                id: record.id.unwrap_or_else(PersonId::new),
                name: record.name,
                birth_date: record.birth_date,
            };
            if let Some(existing) = people.iter_mut().find(|p| p.id == person.id) {
                *existing = person.clone();
            } else {
                people.push(person.clone());
            }
            Ok(person)
        }
    }

    /// In-memory mock implementation of `AddressPort`
    ///
    /// Insertion-ordered like the person mock, and additionally journals
    /// every upsert so tests can assert the order in which writes landed.
    #[derive(Debug, Default)]
    pub struct MockAddressPort {
        addresses: Arc<RwLock<Vec<Address>>>,
        journal: Arc<RwLock<Vec<Address>>>,
    }

    impl MockAddressPort {
        /// Creates an empty mock port
        pub fn new() -> Self {
            Self::default()
        }

        /// Pre-populates with addresses for testing
        ///
        /// Seeded records do not appear in the journal.
        pub async fn with_addresses(addresses: Vec<Address>) -> Self {
            let port = Self::new();
            port.addresses.write().await.extend(addresses);
            port
        }

        /// Every upsert in arrival order, as stored
        pub async fn journal(&self) -> Vec<Address> {
            self.journal.read().await.clone()
        }

        /// Current store contents in insertion order
        pub async fn snapshot(&self) -> Vec<Address> {
            self.addresses.read().await.clone()
        }
    }

    impl DomainPort for MockAddressPort {}

    #[async_trait]
    impl AddressPort for MockAddressPort {
        async fn find_by_owner(&self, owner: PersonId) -> Result<Vec<Address>, PortError> {
            Ok(self
                .addresses
                .read()
                .await
                .iter()
                .filter(|a| a.person_id == owner)
                .cloned()
                .collect())
        }

        async fn find_by_id(&self, id: AddressId) -> Result<Option<Address>, PortError> {
            Ok(self.addresses.read().await.iter().find(|a| a.id == id).cloned())
        }

        async fn upsert(&self, record: AddressRecord) -> Result<Address, PortError> {
            let mut addresses = self.addresses.write().await;
            let id = record.id.unwrap_or_else(AddressId::new);
            let address = Address::from_record(record, id);
            if let Some(existing) = addresses.iter_mut().find(|a| a.id == id) {
                *existing = address.clone();
            } else {
                addresses.push(address.clone());
            }
            self.journal.write().await.push(address.clone());
            Ok(address)
        }
    }
}
