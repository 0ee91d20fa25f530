//! Todo handlers. Create answers 200, not 201, and delete answers with an empty body.

use crate::error::AppError;
use crate::extractors::{TodoId, ValidJson};
use crate::models::TodoInput;
use crate::pagination::PageQuery;
use crate::response::ok;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse};

pub async fn list(State(state): State<AppState>, query: PageQuery) -> impl IntoResponse {
    ok(state.todos.list_all(query).await)
}

pub async fn create(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<TodoInput>,
) -> impl IntoResponse {
    ok(state.todos.create(input).await)
}

pub async fn read(
    State(state): State<AppState>,
    TodoId(id): TodoId,
) -> Result<impl IntoResponse, AppError> {
    let todo = state.todos.get_by_id(id).await?;
    Ok(ok(todo))
}

pub async fn update(
    State(state): State<AppState>,
    TodoId(id): TodoId,
    ValidJson(input): ValidJson<TodoInput>,
) -> Result<impl IntoResponse, AppError> {
    let todo = state.todos.update(id, input).await?;
    Ok(ok(todo))
}

pub async fn delete(
    State(state): State<AppState>,
    TodoId(id): TodoId,
) -> Result<impl IntoResponse, AppError> {
    state.todos.delete(id).await?;
    Ok(StatusCode::OK)
}
