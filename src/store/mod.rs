//! Subject persistence. `SubjectStore` is the seam between services and storage backends.

mod memory;
mod postgres;

pub use memory::MemorySubjectStore;
pub use postgres::{ensure_database_exists, PgSubjectStore};

use crate::error::StoreError;
use crate::models::Subject;
use async_trait::async_trait;
use uuid::Uuid;

#[async_trait]
pub trait SubjectStore: Send + Sync {
    /// All subjects in creation order.
    async fn list(&self) -> Result<Vec<Subject>, StoreError>;

    async fn find(&self, id: Uuid) -> Result<Option<Subject>, StoreError>;

    /// Insert a subject; the store generates the id.
    async fn insert(&self, name: &str) -> Result<Subject, StoreError>;

    /// Replace the name. `RecordNotFound` if no row has this id.
    async fn update(&self, id: Uuid, name: &str) -> Result<Subject, StoreError>;

    /// `RecordNotFound` if no row has this id.
    async fn delete(&self, id: Uuid) -> Result<(), StoreError>;

    /// Cheap liveness probe used by the readiness route.
    async fn ping(&self) -> Result<(), StoreError>;
}
