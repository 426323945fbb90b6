use crate::error::StorageError;

use super::TodoList;

// JSON array of `{ "id", "title", "completed" }` objects
pub fn encode(todos: &TodoList) -> Result<String, StorageError> {
    Ok(serde_json::to_string(todos)?)
}

pub fn decode(text: &str) -> Result<TodoList, StorageError> {
    Ok(serde_json::from_str(text)?)
}
