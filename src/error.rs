//! Typed errors and HTTP mapping.

use axum::{
    extract::Request,
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Message returned for internal failures when details are not exposed.
pub const REDACTED_INTERNAL_MESSAGE: &str = "Internal server error";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}' ({reason})")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Failures reported by a subject store. Callers match on the variant, never on the message.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("record not found")]
    RecordNotFound,
    #[error("database: {0}")]
    Database(#[from] sqlx::Error),
}

/// One rejected field of a request. `field` is a JSON pointer into the request (`/title`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub info: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, info: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            info: info.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("validation failed")]
    Validation(Vec<FieldError>),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    Forbidden(String),
    #[error("invalid request format: {0}")]
    Parse(String),
    #[error("{0}")]
    PayloadTooLarge(String),
    #[error("store: {0}")]
    Store(#[from] StoreError),
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn field(field: impl Into<String>, info: impl Into<String>) -> Self {
        AppError::Validation(vec![FieldError::new(field, info)])
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::Parse(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Store(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::Unauthorized(_) => "UNAUTHORIZED",
            AppError::Forbidden(_) => "FORBIDDEN",
            AppError::Parse(_) => "PARSE_ERROR",
            AppError::PayloadTooLarge(_) => "PAYLOAD_TOO_LARGE",
            AppError::Store(_) | AppError::Internal(_) => "INTERNAL_SERVER_ERROR",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub status: u16,
    pub code: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldError>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
}

/// Real message and debug chain of an internal failure. Attached to the response as an
/// extension; only [`expose_internal_errors`] puts it back into the body.
#[derive(Debug, Clone)]
pub struct InternalErrorDetail {
    pub message: String,
    pub stack: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code();
        if status.is_server_error() {
            tracing::error!(code, error = %self, "request failed");
        } else {
            tracing::warn!(code, error = %self, "request rejected");
        }

        let mut detail = None;
        let (message, errors) = match self {
            AppError::Validation(errors) => ("Validation failed".to_string(), Some(errors)),
            AppError::Parse(_) => ("Invalid request format".to_string(), None),
            AppError::NotFound(msg)
            | AppError::Unauthorized(msg)
            | AppError::Forbidden(msg)
            | AppError::PayloadTooLarge(msg) => (msg, None),
            err @ (AppError::Store(_) | AppError::Internal(_)) => {
                detail = Some(InternalErrorDetail {
                    message: err.to_string(),
                    stack: format!("{:?}", err),
                });
                (REDACTED_INTERNAL_MESSAGE.to_string(), None)
            }
        };

        let body = ErrorBody {
            status: status.as_u16(),
            code,
            message,
            errors,
            stack: None,
        };
        let mut response = (status, Json(body)).into_response();
        if let Some(detail) = detail {
            response.extensions_mut().insert(detail);
        }
        response
    }
}

/// Middleware for non-production deployments: re-renders redacted internal errors with their
/// real message and stack.
pub async fn expose_internal_errors(request: Request, next: Next) -> Response {
    let response = next.run(request).await;
    let Some(detail) = response.extensions().get::<InternalErrorDetail>().cloned() else {
        return response;
    };
    let status = response.status();
    let body = ErrorBody {
        status: status.as_u16(),
        code: "INTERNAL_SERVER_ERROR",
        message: detail.message,
        errors: None,
        stack: Some(detail.stack),
    };
    (status, Json(body)).into_response()
}

/// Message for bodies over the configured limit.
pub const PAYLOAD_TOO_LARGE_MESSAGE: &str = "Request body too large";

/// Middleware that re-renders plain responses produced by layers below the handlers (the body
/// limit layer answers 413 with a text body) as an [`ErrorBody`].
pub async fn normalize_error_responses(request: Request, next: Next) -> Response {
    let response = next.run(request).await;
    let is_json = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("application/json"));
    match response.status() {
        StatusCode::PAYLOAD_TOO_LARGE if !is_json => {
            AppError::PayloadTooLarge(PAYLOAD_TOO_LARGE_MESSAGE.into()).into_response()
        }
        _ => response,
    }
}
