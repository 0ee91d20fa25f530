//! In-process subject store for running without a database.

use super::SubjectStore;
use crate::error::StoreError;
use crate::models::Subject;
use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Default)]
pub struct MemorySubjectStore {
    rows: RwLock<Vec<Subject>>,
}

impl MemorySubjectStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SubjectStore for MemorySubjectStore {
    async fn list(&self) -> Result<Vec<Subject>, StoreError> {
        Ok(self.rows.read().await.clone())
    }

    async fn find(&self, id: Uuid) -> Result<Option<Subject>, StoreError> {
        Ok(self.rows.read().await.iter().find(|s| s.id == id).cloned())
    }

    async fn insert(&self, name: &str) -> Result<Subject, StoreError> {
        let subject = Subject {
            id: Uuid::new_v4(),
            name: name.to_string(),
        };
        self.rows.write().await.push(subject.clone());
        Ok(subject)
    }

    async fn update(&self, id: Uuid, name: &str) -> Result<Subject, StoreError> {
        let mut rows = self.rows.write().await;
        let row = rows
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(StoreError::RecordNotFound)?;
        row.name = name.to_string();
        Ok(row.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        let mut rows = self.rows.write().await;
        let index = rows
            .iter()
            .position(|s| s.id == id)
            .ok_or(StoreError::RecordNotFound)?;
        rows.remove(index);
        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
