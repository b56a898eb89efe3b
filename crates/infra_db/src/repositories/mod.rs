//! Repository implementations for domain entities
//!
//! This module provides concrete repository implementations that handle
//! database access for each aggregate. Repositories encapsulate SQL queries,
//! map between database rows and domain types, and implement the domain
//! storage ports directly so services stay storage-agnostic.

pub mod address;
pub mod person;

pub use address::AddressRepository;
pub use person::PersonRepository;
