//! Port infrastructure for storage adapters
//!
//! Each domain defines its own port trait for the storage it needs; adapters
//! implement those traits against a concrete store. Ports report misses as
//! `Ok(None)` or empty collections, never as errors, so `PortError` is
//! reserved for failures of the store itself.
//!
//! ```rust,ignore
//! // In a domain crate
//! #[async_trait]
//! pub trait PersonPort: DomainPort {
//!     async fn find_by_id(&self, id: PersonId) -> Result<Option<Person>, PortError>;
//! }
//!
//! // In infra_db
//! impl PersonPort for PersonRepository { ... }
//! ```

use thiserror::Error;

/// Error type for port operations
///
/// A unified error type that all port implementations use, keeping error
/// handling consistent across adapters.
#[derive(Debug, Error)]
pub enum PortError {
    /// Connection to the underlying store failed
    #[error("Connection error: {message}")]
    Connection { message: String },

    /// A query failed inside the store
    #[error("Query failed: {message}")]
    Query { message: String },

    /// The store rejected the write
    #[error("Constraint violated: {message}")]
    Constraint { message: String },
}

impl PortError {
    /// Creates a Connection error
    pub fn connection(message: impl Into<String>) -> Self {
        PortError::Connection {
            message: message.into(),
        }
    }

    /// Creates a Query error
    pub fn query(message: impl Into<String>) -> Self {
        PortError::Query {
            message: message.into(),
        }
    }

    /// Creates a Constraint error
    pub fn constraint(message: impl Into<String>) -> Self {
        PortError::Constraint {
            message: message.into(),
        }
    }

    /// Returns true if this error indicates a transient failure that may succeed on retry
    pub fn is_transient(&self) -> bool {
        matches!(self, PortError::Connection { .. })
    }
}

/// Marker trait for all domain ports
///
/// All port traits extend this marker to ensure they are thread-safe and
/// usable behind `Arc<dyn ..>` in async contexts.
pub trait DomainPort: Send + Sync + 'static {}
