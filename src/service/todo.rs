//! Todo CRUD over a process-wide list.
//!
//! The list sits behind one `RwLock`: reads run concurrently and writes are serialized in
//! lock order, so the last update to acquire the lock wins. Ids are assigned under the
//! write lock as one past the highest id in the list.

use crate::error::AppError;
use crate::models::{Priority, Todo, TodoInput};
use crate::pagination::{PageQuery, PagedResponse};
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone, Default)]
pub struct TodoService {
    todos: Arc<RwLock<Vec<Todo>>>,
}

fn not_found(id: i64) -> AppError {
    AppError::NotFound(format!("Todo with id {} not found", id))
}

impl TodoService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with the demo item `Buy groceries`.
    pub fn seeded() -> Self {
        let todo = Todo {
            id: 1,
            title: "Buy groceries".into(),
            completed: false,
            priority: Priority::Medium,
        };
        Self {
            todos: Arc::new(RwLock::new(vec![todo])),
        }
    }

    pub async fn list_all(&self, query: PageQuery) -> PagedResponse<Todo> {
        let todos = self.todos.read().await;
        PagedResponse::from_slice(todos.as_slice(), query)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Todo, AppError> {
        self.todos
            .read()
            .await
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    pub async fn create(&self, input: TodoInput) -> Todo {
        let mut todos = self.todos.write().await;
        let id = todos.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        let todo = Todo::new(id, input);
        todos.push(todo.clone());
        tracing::debug!(id, "todo created");
        todo
    }

    pub async fn update(&self, id: i64, input: TodoInput) -> Result<Todo, AppError> {
        let mut todos = self.todos.write().await;
        let todo = todos.iter_mut().find(|t| t.id == id).ok_or_else(|| not_found(id))?;
        *todo = Todo::new(id, input);
        Ok(todo.clone())
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        let mut todos = self.todos.write().await;
        let index = todos.iter().position(|t| t.id == id).ok_or_else(|| not_found(id))?;
        todos.remove(index);
        tracing::debug!(id, "todo deleted");
        Ok(())
    }
}
