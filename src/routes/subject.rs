//! /subjects routes.

use crate::handlers::subject::{create, delete, list, read, update};
use crate::state::AppState;
use super::fallback;
use axum::{routing::get, Router};

pub fn subject_routes() -> Router<AppState> {
    Router::new()
        .route("/subjects", get(list).post(create).fallback(fallback))
        .route("/subjects/:id", get(read).put(update).delete(delete).fallback(fallback))
}
