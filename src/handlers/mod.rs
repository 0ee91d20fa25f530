//! HTTP handlers for the subject and todo resources.

pub mod subject;
pub mod todo;
