//! /todos routes.

use crate::handlers::todo::{create, delete, list, read, update};
use crate::state::AppState;
use super::fallback;
use axum::{routing::get, Router};

pub fn todo_routes() -> Router<AppState> {
    Router::new()
        .route("/todos", get(list).post(create).fallback(fallback))
        .route("/todos/:id", get(read).put(update).delete(delete).fallback(fallback))
}
