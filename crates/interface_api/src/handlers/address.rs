//! Address handlers
//!
//! Every write runs the owner guard first, so a body that names a different
//! person than the path is rejected before the store is touched.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use core_kernel::{AddressId, PersonId};
use domain_people::AddressDraft;

use crate::dto::address::{AddressResponse, SaveAddressRequest};
use crate::error::ApiError;
use crate::AppState;

/// Lists the addresses owned by a person
///
/// The person is fetched first, so an unknown owner is a missing person,
/// while a known owner with no addresses yields an empty list.
pub async fn list_addresses(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<AddressResponse>>, ApiError> {
    let owner = PersonId::from_uuid(id);
    state.people.find_by_id(owner).await?;

    let addresses = state.addresses.find_by_owner(owner).await?;

    Ok(Json(
        addresses.into_iter().map(AddressResponse::from).collect(),
    ))
}

/// Adds an address to a person
pub async fn create_address(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<SaveAddressRequest>,
) -> Result<(StatusCode, Json<AddressResponse>), ApiError> {
    request.validate()?;

    let draft = AddressDraft::from(request);
    draft.ensure_owner(PersonId::from_uuid(id))?;

    let address = state.addresses.save_with_rebalance(draft).await?;

    Ok((StatusCode::CREATED, Json(AddressResponse::from(address))))
}

/// Replaces an address owned by a person
///
/// The body must name both the owner and the address from the path; either
/// mismatch reads as the corresponding entity being missing.
pub async fn update_address(
    State(state): State<AppState>,
    Path((id, address_id)): Path<(Uuid, Uuid)>,
    Json(request): Json<SaveAddressRequest>,
) -> Result<Json<AddressResponse>, ApiError> {
    request.validate()?;

    let draft = AddressDraft::from(request);
    draft.ensure_owner(PersonId::from_uuid(id))?;
    draft.ensure_identity(AddressId::from_uuid(address_id))?;

    let address = state.addresses.save_with_rebalance(draft).await?;

    Ok(Json(AddressResponse::from(address)))
}
