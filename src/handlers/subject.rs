//! Subject handlers: create, list, read, update, delete.

use crate::error::AppError;
use crate::extractors::{SubjectId, ValidJson};
use crate::models::SubjectInput;
use crate::response::{created, deleted, ok};
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse};

pub async fn create(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<SubjectInput>,
) -> Result<impl IntoResponse, AppError> {
    let subject = state.subjects.create(input).await?;
    Ok(created(subject))
}

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let subjects = state.subjects.list_all().await?;
    Ok(ok(subjects))
}

pub async fn read(
    State(state): State<AppState>,
    SubjectId(id): SubjectId,
) -> Result<impl IntoResponse, AppError> {
    let subject = state.subjects.get_by_id(id).await?;
    Ok(ok(subject))
}

pub async fn update(
    State(state): State<AppState>,
    SubjectId(id): SubjectId,
    ValidJson(input): ValidJson<SubjectInput>,
) -> Result<impl IntoResponse, AppError> {
    let subject = state.subjects.update(id, input).await?;
    Ok(ok(subject))
}

pub async fn delete(
    State(state): State<AppState>,
    SubjectId(id): SubjectId,
) -> Result<impl IntoResponse, AppError> {
    state.subjects.delete(id).await?;
    Ok(deleted())
}
