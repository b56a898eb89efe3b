//! HTTP API Layer
//!
//! This crate provides the REST API for the people registry using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers for people and their addresses
//! - **DTOs**: Request/Response data transfer objects with field validation
//! - **Error Handling**: Consistent error responses
//!
//! Handlers run the cross-identity guards (path against body) before calling
//! into the domain services, so a mismatching body never reaches storage.
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, AppState};
//!
//! let app = create_router(AppState::new(pool));
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;

use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use domain_people::{AddressPort, AddressService, PersonPort, PersonService};
use infra_db::{AddressRepository, DatabasePool, PersonRepository};

use crate::handlers::{address, health, person};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub people: PersonService,
    pub addresses: AddressService,
}

impl AppState {
    /// Creates state backed by the PostgreSQL repositories
    pub fn new(pool: DatabasePool) -> Self {
        let people: Arc<dyn PersonPort> = Arc::new(PersonRepository::new(pool.clone()));
        let addresses: Arc<dyn AddressPort> = Arc::new(AddressRepository::new(pool));
        Self::with_ports(people, addresses)
    }

    /// Creates state over explicit port implementations
    ///
    /// Tests use this to run the full HTTP stack over in-memory stores.
    pub fn with_ports(people: Arc<dyn PersonPort>, addresses: Arc<dyn AddressPort>) -> Self {
        Self {
            people: PersonService::new(people.clone()),
            addresses: AddressService::new(people, addresses),
        }
    }
}

/// Creates the main API router
///
/// # Arguments
///
/// * `state` - Shared application state holding the domain services
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    // People routes, addresses nested under their owner
    let people_routes = Router::new()
        .route("/", get(person::list_people))
        .route("/", post(person::create_person))
        .route("/:id", get(person::get_person))
        .route("/:id", put(person::update_person))
        .route("/:id/addresses", get(address::list_addresses))
        .route("/:id/addresses", post(address::create_address))
        .route("/:id/addresses/:address_id", put(address::update_address));

    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api/v1/people", people_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
