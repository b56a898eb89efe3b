//! Domain services for people and their addresses
//!
//! `PersonService` owns the lookup-or-fail semantics and the write-time name
//! uniqueness rule. `AddressService` owns address persistence and the
//! principal re-balancing pass that keeps at most one principal address per
//! person at rest.

use std::sync::Arc;

use core_kernel::{DomainError, OrNotFound, PersonId};

use crate::address::{Address, AddressDraft, AddressRecord};
use crate::messages;
use crate::person::{Person, PersonRecord};
use crate::ports::{AddressPort, PersonPort};

/// Application service for person records
#[derive(Clone)]
pub struct PersonService {
    port: Arc<dyn PersonPort>,
}

impl PersonService {
    pub fn new(port: Arc<dyn PersonPort>) -> Self {
        Self { port }
    }

    /// Every stored person
    pub async fn find_all(&self) -> Result<Vec<Person>, DomainError> {
        Ok(self.port.find_all().await?)
    }

    /// The person with `id`, or NotFound
    pub async fn find_by_id(&self, id: PersonId) -> Result<Person, DomainError> {
        self.port
            .find_by_id(id)
            .await?
            .or_not_found(messages::PERSON_NOT_FOUND)
    }

    /// Persists the record, creating when it carries no identifier
    ///
    /// Names are unique ignoring case, and the uniqueness check compares
    /// identifiers, never values: a record may keep its own name on update,
    /// while a record with a different identifier (or none) claiming an
    /// already-taken name fails with Conflict.
    pub async fn save(&self, record: PersonRecord) -> Result<Person, DomainError> {
        if let Some(existing) = self.port.find_by_name_ignore_case(&record.name).await? {
            if record.id != Some(existing.id) {
                return Err(DomainError::conflict(messages::PERSON_ALREADY_REGISTERED));
            }
        }
        Ok(self.port.upsert(record).await?)
    }
}

/// Application service for address records
///
/// Holds the person port as well: re-balancing resolves the owning person
/// before it touches any address.
#[derive(Clone)]
pub struct AddressService {
    people: Arc<dyn PersonPort>,
    addresses: Arc<dyn AddressPort>,
}

impl AddressService {
    pub fn new(people: Arc<dyn PersonPort>, addresses: Arc<dyn AddressPort>) -> Self {
        Self { people, addresses }
    }

    /// Every address owned by `owner`; empty when there are none
    pub async fn find_by_owner(&self, owner: PersonId) -> Result<Vec<Address>, DomainError> {
        Ok(self.addresses.find_by_owner(owner).await?)
    }

    /// Persists the draft without touching sibling addresses
    ///
    /// Fails Invalid when the draft carries no owner reference. The single
    /// principal invariant is not checked here; writes that may change which
    /// address is principal go through `save_with_rebalance`.
    pub async fn save(&self, draft: AddressDraft) -> Result<Address, DomainError> {
        let owner = draft.owner()?;
        Ok(self.addresses.upsert(draft.into_record(owner)).await?)
    }

    /// Persists the draft, demoting the owner's current addresses first when
    /// the draft claims the principal slot
    ///
    /// The owning person must exist. When `is_principal` is false the
    /// demotion pass is skipped entirely and this behaves like `save`.
    ///
    /// The sequence is not transactional: each demotion is its own durable
    /// write, in store order, and the incoming address is written last. A
    /// failure mid-sequence leaves the owner with fewer principal addresses
    /// than before, never with two. Concurrent re-balancing of the same
    /// owner is not serialized here; the store decides how such writes
    /// interleave.
    pub async fn save_with_rebalance(&self, draft: AddressDraft) -> Result<Address, DomainError> {
        let owner = draft.owner()?;
        let person = self
            .people
            .find_by_id(owner)
            .await?
            .or_not_found(messages::PERSON_NOT_FOUND)?;

        if draft.is_principal {
            self.demote_existing(person.id).await?;
        }
        self.save(draft).await
    }

    /// Demotes every address currently owned by `owner`, one write per record
    async fn demote_existing(&self, owner: PersonId) -> Result<(), DomainError> {
        for address in self.addresses.find_by_owner(owner).await? {
            let mut record = AddressRecord::from(address);
            record.is_principal = false;
            self.addresses.upsert(record).await?;
        }
        Ok(())
    }
}
