//! Typed `:id` path parameters.

use crate::error::AppError;
use crate::service::validation::{UUID_V4, UUID_V4_PATTERN};
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use uuid::Uuid;

const ID_FIELD: &str = "/id";

async fn raw_id<S: Send + Sync>(parts: &mut Parts, state: &S) -> Result<String, AppError> {
    let Path(raw) = Path::<String>::from_request_parts(parts, state)
        .await
        .map_err(|rejection| AppError::field(ID_FIELD, rejection.body_text()))?;
    Ok(raw)
}

/// Subject id; must be a UUID v4.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubjectId(pub Uuid);

#[async_trait]
impl<S> FromRequestParts<S> for SubjectId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let raw = raw_id(parts, state).await?;
        let mismatch = || {
            AppError::field(
                ID_FIELD,
                format!("Expected string to match '{}'", UUID_V4_PATTERN),
            )
        };
        if !UUID_V4.is_match(&raw) {
            return Err(mismatch());
        }
        Uuid::parse_str(&raw).map(SubjectId).map_err(|_| mismatch())
    }
}

/// Todo id; must be an integer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TodoId(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for TodoId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let raw = raw_id(parts, state).await?;
        raw.trim()
            .parse()
            .map(TodoId)
            .map_err(|_| AppError::field(ID_FIELD, "Expected number"))
    }
}
