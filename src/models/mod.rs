//! Resource types and their request bodies.

pub mod subject;
pub mod todo;

pub use subject::{Subject, SubjectInput};
pub use todo::{Priority, Todo, TodoInput};
