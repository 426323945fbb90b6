pub mod codec;

use serde::{Deserialize, Serialize};
use tracing::error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub completed: bool,
}
impl Todo {
    pub fn new(id: i64, title: String) -> Self {
        Self {
            id,
            title,
            completed: false,
        }
    }
}

/// Ordered todo collection, newest first.
///
/// Every operation takes the list by reference and hands back a fresh one,
/// or `None` when nothing would change. Ids are not re-validated after
/// loading: with duplicate ids, `toggle` and `remove` act on the first match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoList(Vec<Todo>);

impl TodoList {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn as_slice(&self) -> &[Todo] {
        &self.0
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn iter(&self) -> std::slice::Iter<'_, Todo> {
        self.0.iter()
    }
    pub fn get(&self, id: i64) -> Option<&Todo> {
        self.0.iter().find(|todo| todo.id == id)
    }
    pub fn max_id(&self) -> Option<i64> {
        self.0.iter().map(|todo| todo.id).max()
    }
    pub fn completed_count(&self) -> usize {
        self.0.iter().filter(|todo| todo.completed).count()
    }

    /// Returns the list reordered by id, highest first.
    pub fn sorted_desc(mut self) -> Self {
        self.0.sort_by(|a, b| b.id.cmp(&a.id));
        self
    }

    /// Prepends a new incomplete todo whose id is one past the current maximum.
    ///
    /// Returns `None` for a blank title, or when the maximum id is already
    /// `i64::MAX` and no larger id exists.
    pub fn add(&self, title: &str) -> Option<Self> {
        if title.trim().is_empty() {
            return None;
        }
        let Some(id) = self.max_id().unwrap_or(0).checked_add(1) else {
            error!("todo ids exhausted, not adding");
            return None;
        };
        let mut todos = Vec::with_capacity(self.0.len() + 1);
        todos.push(Todo::new(id, title.to_string()));
        todos.extend(self.0.iter().cloned());
        Some(Self(todos))
    }

    pub fn toggle(&self, id: i64) -> Option<Self> {
        let index = self.position(id)?;
        let mut todos = self.0.clone();
        todos[index].completed = !todos[index].completed;
        Some(Self(todos))
    }

    pub fn remove(&self, id: i64) -> Option<Self> {
        let index = self.position(id)?;
        let mut todos = self.0.clone();
        todos.remove(index);
        Some(Self(todos))
    }

    fn position(&self, id: i64) -> Option<usize> {
        self.0.iter().position(|todo| todo.id == id)
    }
}

impl From<Vec<Todo>> for TodoList {
    fn from(todos: Vec<Todo>) -> Self {
        Self(todos)
    }
}
