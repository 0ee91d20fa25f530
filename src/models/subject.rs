//! Subject model.

use crate::error::FieldError;
use crate::service::validation::{BodyValidator, RequestBody, StringRule};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

pub const NAME_MAX_LENGTH: usize = 30;

/// A row from the `subjects` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Subject {
    pub id: Uuid,
    pub name: String,
}

/// Body of `POST /subjects` and `PUT /subjects/:id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectInput {
    pub name: String,
}

impl RequestBody for SubjectInput {
    fn from_body(body: &Map<String, Value>) -> Result<Self, Vec<FieldError>> {
        let mut v = BodyValidator::new(body);
        let name = v.string(
            "name",
            StringRule {
                min_length: Some(1),
                max_length: Some(NAME_MAX_LENGTH),
                pattern: None,
            },
        );
        v.finish(|| Some(SubjectInput { name: name? }))
    }
}
