//! Request extractors that validate path ids, query strings and JSON bodies before handlers run.

pub mod body;
pub mod id;
pub mod page;

pub use body::ValidJson;
pub use id::{SubjectId, TodoId};
