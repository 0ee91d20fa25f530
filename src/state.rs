//! Shared application state for all routes.

use crate::service::{SubjectService, TodoService};
use crate::store::SubjectStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub subjects: SubjectService,
    pub todos: TodoService,
}

impl AppState {
    pub fn new(store: Arc<dyn SubjectStore>, todos: TodoService) -> Self {
        Self {
            subjects: SubjectService::new(store),
            todos,
        }
    }
}
