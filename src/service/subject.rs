//! Subject CRUD over a `SubjectStore`.

use crate::error::{AppError, StoreError};
use crate::models::{Subject, SubjectInput};
use crate::store::SubjectStore;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Clone)]
pub struct SubjectService {
    store: Arc<dyn SubjectStore>,
}

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Subject with id {} not found", id))
}

/// Map a store's missing-record condition to the domain not-found error.
fn translate(id: Uuid) -> impl FnOnce(StoreError) -> AppError {
    move |err| match err {
        StoreError::RecordNotFound => not_found(id),
        other => AppError::Store(other),
    }
}

impl SubjectService {
    pub fn new(store: Arc<dyn SubjectStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<dyn SubjectStore> {
        &self.store
    }

    pub async fn list_all(&self) -> Result<Vec<Subject>, AppError> {
        Ok(self.store.list().await?)
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Subject, AppError> {
        self.store.find(id).await?.ok_or_else(|| not_found(id))
    }

    pub async fn create(&self, input: SubjectInput) -> Result<Subject, AppError> {
        let subject = self.store.insert(&input.name).await?;
        tracing::info!(id = %subject.id, "subject created");
        Ok(subject)
    }

    pub async fn update(&self, id: Uuid, input: SubjectInput) -> Result<Subject, AppError> {
        self.store.update(id, &input.name).await.map_err(translate(id))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.store.delete(id).await.map_err(translate(id))?;
        tracing::info!(%id, "subject deleted");
        Ok(())
    }
}
