//! Address repository implementation
//!
//! This module provides database access for the addresses owned by people.
//! Listing follows store order (insertion order by creation timestamp), which
//! is also the order the principal rebalancing sequence walks when demoting
//! rows one durable write at a time.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::{debug, instrument};
use uuid::Uuid;

use core_kernel::{AddressId, DomainPort, PersonId, PortError};
use domain_people::{Address, AddressPort, AddressRecord};

use crate::error::DatabaseError;

/// Database row for the `addresses` table
#[derive(Debug, sqlx::FromRow)]
pub struct AddressRow {
    pub id: Uuid,
    pub street: String,
    pub number: String,
    pub city: String,
    pub postal_code: String,
    pub is_principal: bool,
    pub person_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<AddressRow> for Address {
    fn from(row: AddressRow) -> Self {
        Address {
            id: AddressId::from_uuid(row.id),
            street: row.street,
            number: row.number,
            city: row.city,
            postal_code: row.postal_code,
            is_principal: row.is_principal,
            person_id: PersonId::from_uuid(row.person_id),
        }
    }
}

/// PostgreSQL-backed address storage
#[derive(Debug, Clone)]
pub struct AddressRepository {
    pool: PgPool,
}

impl AddressRepository {
    /// Creates a new repository over the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_by_owner(&self, owner: Uuid) -> Result<Vec<AddressRow>, DatabaseError> {
        sqlx::query_as::<_, AddressRow>(
            r#"
            SELECT id, street, number, city, postal_code, is_principal,
                   person_id, created_at, updated_at
            FROM addresses
            WHERE person_id = $1
            ORDER BY created_at, id
            "#,
        )
        .bind(owner)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DatabaseError::from(&e))
    }

    async fn fetch_by_id(&self, id: Uuid) -> Result<Option<AddressRow>, DatabaseError> {
        sqlx::query_as::<_, AddressRow>(
            r#"
            SELECT id, street, number, city, postal_code, is_principal,
                   person_id, created_at, updated_at
            FROM addresses
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DatabaseError::from(&e))
    }

    /// Single-statement upsert keyed on the identifier
    ///
    /// Each call is one durable write; the rebalancing sequence relies on
    /// that to keep a mid-sequence failure observable as fewer principal
    /// addresses, never two.
    async fn store(&self, record: AddressRecord) -> Result<AddressRow, DatabaseError> {
        let id = record.id.map(Uuid::from).unwrap_or_else(Uuid::new_v4);

        sqlx::query_as::<_, AddressRow>(
            r#"
            INSERT INTO addresses (id, street, number, city, postal_code, is_principal, person_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (id) DO UPDATE
            SET street = EXCLUDED.street,
                number = EXCLUDED.number,
                city = EXCLUDED.city,
                postal_code = EXCLUDED.postal_code,
                is_principal = EXCLUDED.is_principal,
                person_id = EXCLUDED.person_id,
                updated_at = now()
            RETURNING id, street, number, city, postal_code, is_principal,
                      person_id, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&record.street)
        .bind(&record.number)
        .bind(&record.city)
        .bind(&record.postal_code)
        .bind(record.is_principal)
        .bind(Uuid::from(record.person_id))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DatabaseError::from(&e))
    }
}

impl DomainPort for AddressRepository {}

#[async_trait]
impl AddressPort for AddressRepository {
    #[instrument(skip(self))]
    async fn find_by_owner(&self, owner: PersonId) -> Result<Vec<Address>, PortError> {
        debug!("Listing addresses by owner");

        let rows = self
            .fetch_by_owner(Uuid::from(owner))
            .await
            .map_err(PortError::from)?;
        Ok(rows.into_iter().map(Address::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: AddressId) -> Result<Option<Address>, PortError> {
        debug!("Fetching address by id");

        let row = self.fetch_by_id(Uuid::from(id)).await.map_err(PortError::from)?;
        Ok(row.map(Address::from))
    }

    #[instrument(skip(self, record), fields(update = record.id.is_some(), principal = record.is_principal))]
    async fn upsert(&self, record: AddressRecord) -> Result<Address, PortError> {
        debug!("Persisting address");

        let row = self.store(record).await.map_err(PortError::from)?;
        Ok(Address::from(row))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_converts_to_address() {
        let id = Uuid::new_v4();
        let owner = Uuid::new_v4();
        let row = AddressRow {
            id,
            street: "Rua das Flores".to_string(),
            number: "100".to_string(),
            city: "Curitiba".to_string(),
            postal_code: "80010-000".to_string(),
            is_principal: true,
            person_id: owner,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let address = Address::from(row);

        assert_eq!(address.id, AddressId::from_uuid(id));
        assert_eq!(address.person_id, PersonId::from_uuid(owner));
        assert!(address.is_principal);
        assert_eq!(address.postal_code, "80010-000");
    }
}
