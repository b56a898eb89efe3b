//! Core Kernel - Foundational types for the people registry
//!
//! This crate provides the building blocks shared by every domain module:
//! - Strongly-typed identifiers
//! - The failure taxonomy for domain operations
//! - Port infrastructure for storage adapters

pub mod error;
pub mod identifiers;
pub mod ports;

pub use error::{DomainError, OrNotFound};
pub use identifiers::{AddressId, PersonId};
pub use ports::{DomainPort, PortError};
