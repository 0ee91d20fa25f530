//! Router assembly: resource routes, common routes, fallback and layers.

mod common;
mod subject;
mod todo;

pub use common::common_routes;
pub use subject::subject_routes;
pub use todo::todo_routes;

use crate::config::AppConfig;
use crate::error::{expose_internal_errors, normalize_error_responses, AppError};
use crate::state::AppState;
use axum::{middleware, Router};
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

/// Answer for unknown paths, and for known paths with an unsupported method.
pub(crate) async fn fallback() -> AppError {
    AppError::NotFound("Resource not found".into())
}

/// The full application router.
pub fn app(state: AppState, config: &AppConfig) -> Router {
    let router = Router::new()
        .merge(common_routes())
        .merge(subject_routes())
        .merge(todo_routes())
        .fallback(fallback)
        .with_state(state);

    let router = if config.environment.is_production() {
        router
    } else {
        router.layer(middleware::from_fn(expose_internal_errors))
    };

    router
        .layer(RequestBodyLimitLayer::new(config.body_limit_bytes))
        .layer(middleware::from_fn(normalize_error_responses))
        .layer(TraceLayer::new_for_http())
}
