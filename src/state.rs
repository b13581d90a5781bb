use std::sync::Arc;

use crate::repository::{InMemoryTodoRepository, TodoRepository};

#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn TodoRepository>,
}

impl AppState {
    pub fn new(repo: Arc<dyn TodoRepository>) -> Self {
        Self { repo }
    }

    /// State backed by a fresh, empty in-memory collection.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryTodoRepository::new()))
    }
}
