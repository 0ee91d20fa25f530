//! Resource services: validated input in, domain errors out.

mod subject;
mod todo;
pub mod validation;

pub use subject::SubjectService;
pub use todo::TodoService;
pub use validation::RequestBody;
