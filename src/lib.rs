//! tutors-api: REST backend for subjects (PostgreSQL) and todos (in memory).

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod migration;
pub mod models;
pub mod pagination;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::{AppConfig, Environment};
pub use error::{AppError, ConfigError, FieldError, StoreError};
pub use migration::apply_migrations;
pub use models::{Priority, Subject, SubjectInput, Todo, TodoInput};
pub use pagination::{PageMeta, PageQuery, PagedResponse};
pub use routes::app;
pub use service::{SubjectService, TodoService};
pub use state::AppState;
pub use store::{ensure_database_exists, MemorySubjectStore, PgSubjectStore, SubjectStore};
