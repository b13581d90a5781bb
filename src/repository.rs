use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::models::Todo;

/// Storage for the todo collection.
///
/// Operations keyed by id act on every matching record and report how many
/// were touched; zero is not an error.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    async fn list(&self) -> Vec<Todo>;
    async fn create(&self, todo: Todo) -> Todo;
    async fn delete(&self, id: &str) -> usize;
    async fn replace(&self, id: &str, todo: Todo) -> usize;
    async fn count(&self) -> usize;
}

/// Insertion-ordered, process-local collection. Nothing survives a restart.
#[derive(Default)]
pub struct InMemoryTodoRepository {
    todos: RwLock<Vec<Todo>>,
}

impl InMemoryTodoRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_todos(todos: Vec<Todo>) -> Self {
        Self {
            todos: RwLock::new(todos),
        }
    }
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn list(&self) -> Vec<Todo> {
        self.todos.read().await.clone()
    }

    async fn create(&self, todo: Todo) -> Todo {
        let mut todos = self.todos.write().await;
        todos.push(todo.clone());
        debug!(id = ?todo.id(), total = todos.len(), "todo created");
        todo
    }

    async fn delete(&self, id: &str) -> usize {
        let mut todos = self.todos.write().await;
        let before = todos.len();
        todos.retain(|todo| !todo.has_id(id));
        let removed = before - todos.len();
        debug!(id, removed, total = todos.len(), "todo deleted");
        removed
    }

    async fn replace(&self, id: &str, todo: Todo) -> usize {
        let mut todos = self.todos.write().await;
        let mut replaced = 0;
        for slot in todos.iter_mut().filter(|existing| existing.has_id(id)) {
            *slot = todo.clone();
            replaced += 1;
        }
        debug!(id, replaced, "todo replaced");
        replaced
    }

    async fn count(&self) -> usize {
        self.todos.read().await.len()
    }
}
