//! Person handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use core_kernel::PersonId;
use domain_people::PersonRecord;

use crate::dto::person::{PersonResponse, SavePersonRequest};
use crate::error::ApiError;
use crate::AppState;

/// Lists every registered person
pub async fn list_people(
    State(state): State<AppState>,
) -> Result<Json<Vec<PersonResponse>>, ApiError> {
    let people = state.people.find_all().await?;

    Ok(Json(people.into_iter().map(PersonResponse::from).collect()))
}

/// Gets a person by id
pub async fn get_person(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PersonResponse>, ApiError> {
    let person = state.people.find_by_id(PersonId::from_uuid(id)).await?;

    Ok(Json(PersonResponse::from(person)))
}

/// Registers a new person
pub async fn create_person(
    State(state): State<AppState>,
    Json(request): Json<SavePersonRequest>,
) -> Result<(StatusCode, Json<PersonResponse>), ApiError> {
    request.validate()?;

    let person = state.people.save(PersonRecord::from(request)).await?;

    Ok((StatusCode::CREATED, Json(PersonResponse::from(person))))
}

/// Updates an existing person
///
/// The body must identify the same person as the path; a mismatch (or a
/// body without an identifier) reads as a request for a missing person.
pub async fn update_person(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<SavePersonRequest>,
) -> Result<Json<PersonResponse>, ApiError> {
    request.validate()?;

    let record = PersonRecord::from(request);
    record.ensure_identity(PersonId::from_uuid(id))?;

    let person = state.people.save(record).await?;

    Ok(Json(PersonResponse::from(person)))
}
