//! Todo model.

use crate::error::FieldError;
use crate::service::validation::{BodyValidator, RequestBody, StringRule};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            other => Err(format!("unknown priority: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub completed: bool,
    pub priority: Priority,
}

impl Todo {
    pub fn new(id: i64, input: TodoInput) -> Self {
        Self {
            id,
            title: input.title,
            completed: input.completed,
            priority: input.priority,
        }
    }
}

/// Body of `POST /todos` and `PUT /todos/:id`. All fields required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoInput {
    pub title: String,
    pub completed: bool,
    pub priority: Priority,
}

impl RequestBody for TodoInput {
    fn from_body(body: &Map<String, Value>) -> Result<Self, Vec<FieldError>> {
        let mut v = BodyValidator::new(body);
        let title = v.string("title", StringRule::default());
        let completed = v.boolean("completed");
        let priority = v.variant::<Priority>("priority");
        v.finish(|| {
            Some(TodoInput {
                title: title?,
                completed: completed?,
                priority: priority?,
            })
        })
    }
}
