//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! people registry test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built test data for people and addresses
//! - `builders`: Builder patterns for test data construction
//! - `assertions`: Custom assertion helpers for domain types

pub mod assertions;
pub mod builders;
pub mod fixtures;

pub use assertions::*;
pub use builders::*;
pub use fixtures::*;
