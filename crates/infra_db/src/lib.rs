//! Infrastructure Database Layer
//!
//! This crate provides the PostgreSQL infrastructure for the people registry,
//! implementing the domain storage ports with SQLx.
//!
//! # Architecture
//!
//! The crate follows the repository pattern: each repository owns the SQL
//! for one aggregate and implements the corresponding domain port, hiding
//! database details from the domain layer.
//!
//! Writes are single-statement upserts keyed on the row identifier. The
//! principal-address rebalancing sequence issues one durable write per
//! demoted row without a surrounding transaction; an interrupted run leaves
//! fewer principal addresses, never two.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{create_pool_from_url, run_migrations, PersonRepository};
//!
//! let pool = create_pool_from_url("postgres://localhost/people").await?;
//! run_migrations(&pool).await?;
//! let people = PersonRepository::new(pool);
//! ```

pub mod error;
pub mod pool;
pub mod repositories;

pub use error::DatabaseError;
pub use pool::{create_pool, create_pool_from_url, run_migrations, DatabaseConfig, DatabasePool};
pub use repositories::{AddressRepository, PersonRepository};
