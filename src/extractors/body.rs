//! JSON body extraction into a validated request type.

use crate::error::{AppError, PAYLOAD_TOO_LARGE_MESSAGE};
use crate::service::RequestBody;
use async_trait::async_trait;
use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    Json,
};
use serde_json::Value;

/// Body parsed as JSON and validated into `T`. Malformed JSON or a missing JSON content type
/// is a parse error; well-formed JSON that breaks the field rules is a validation error.
#[derive(Debug, Clone)]
pub struct ValidJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidJson<T>
where
    S: Send + Sync,
    T: RequestBody,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(reject)?;
        match value {
            Value::Object(body) => T::from_body(&body)
                .map(ValidJson)
                .map_err(AppError::Validation),
            _ => Err(AppError::field("/", "Expected object")),
        }
    }
}

fn reject(rejection: JsonRejection) -> AppError {
    // A streamed body that crosses the limit surfaces as a read failure, not as bad JSON.
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(PAYLOAD_TOO_LARGE_MESSAGE.into())
    } else {
        AppError::Parse(rejection.body_text())
    }
}
