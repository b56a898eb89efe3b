//! Person repository implementation
//!
//! This module provides database access for person records, implementing the
//! people storage port directly over a PostgreSQL pool. Rows carry audit
//! timestamps that never leave this layer; the domain model only sees the
//! identifier, name, and birth date.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;
use tracing::{debug, instrument};
use uuid::Uuid;

use core_kernel::{DomainPort, PersonId, PortError};
use domain_people::{Person, PersonPort, PersonRecord};

use crate::error::DatabaseError;

/// Database row for the `people` table
#[derive(Debug, sqlx::FromRow)]
pub struct PersonRow {
    pub id: Uuid,
    pub name: String,
    pub birth_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<PersonRow> for Person {
    fn from(row: PersonRow) -> Self {
        Person {
            id: PersonId::from_uuid(row.id),
            name: row.name,
            birth_date: row.birth_date,
        }
    }
}

/// PostgreSQL-backed person storage
///
/// Implements `PersonPort` over a connection pool. Row misses are reported
/// as `Ok(None)`; only failures of the store itself become errors.
#[derive(Debug, Clone)]
pub struct PersonRepository {
    pool: PgPool,
}

impl PersonRepository {
    /// Creates a new repository over the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_all(&self) -> Result<Vec<PersonRow>, DatabaseError> {
        sqlx::query_as::<_, PersonRow>(
            r#"
            SELECT id, name, birth_date, created_at, updated_at
            FROM people
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DatabaseError::from(&e))
    }

    async fn fetch_by_id(&self, id: Uuid) -> Result<Option<PersonRow>, DatabaseError> {
        sqlx::query_as::<_, PersonRow>(
            r#"
            SELECT id, name, birth_date, created_at, updated_at
            FROM people
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DatabaseError::from(&e))
    }

    /// Case-insensitive name lookup; the oldest matching row wins
    async fn fetch_by_name(&self, name: &str) -> Result<Option<PersonRow>, DatabaseError> {
        sqlx::query_as::<_, PersonRow>(
            r#"
            SELECT id, name, birth_date, created_at, updated_at
            FROM people
            WHERE lower(name) = lower($1)
            ORDER BY created_at, id
            LIMIT 1
            "#,
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DatabaseError::from(&e))
    }

    /// Single-statement upsert keyed on the identifier
    ///
    /// A record without an identifier is inserted under a freshly minted one;
    /// a record with an identifier updates the existing row, or recreates it
    /// when no row is left under that identifier.
    async fn store(&self, record: PersonRecord) -> Result<PersonRow, DatabaseError> {
        let id = record.id.map(Uuid::from).unwrap_or_else(Uuid::new_v4);

        sqlx::query_as::<_, PersonRow>(
            r#"
            INSERT INTO people (id, name, birth_date)
            VALUES ($1, $2, $3)
            ON CONFLICT (id) DO UPDATE
            SET name = EXCLUDED.name,
                birth_date = EXCLUDED.birth_date,
                updated_at = now()
            RETURNING id, name, birth_date, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&record.name)
        .bind(record.birth_date)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DatabaseError::from(&e))
    }
}

impl DomainPort for PersonRepository {}

#[async_trait]
impl PersonPort for PersonRepository {
    #[instrument(skip(self))]
    async fn find_all(&self) -> Result<Vec<Person>, PortError> {
        debug!("Listing all people");

        let rows = self.fetch_all().await.map_err(PortError::from)?;
        Ok(rows.into_iter().map(Person::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: PersonId) -> Result<Option<Person>, PortError> {
        debug!("Fetching person by id");

        let row = self.fetch_by_id(Uuid::from(id)).await.map_err(PortError::from)?;
        Ok(row.map(Person::from))
    }

    #[instrument(skip(self))]
    async fn find_by_name_ignore_case(&self, name: &str) -> Result<Option<Person>, PortError> {
        debug!("Fetching person by name");

        let row = self.fetch_by_name(name).await.map_err(PortError::from)?;
        Ok(row.map(Person::from))
    }

    #[instrument(skip(self, record), fields(update = record.id.is_some()))]
    async fn upsert(&self, record: PersonRecord) -> Result<Person, PortError> {
        debug!("Persisting person");

        let row = self.store(record).await.map_err(PortError::from)?;
        Ok(Person::from(row))
    }
}
