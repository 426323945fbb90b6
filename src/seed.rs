use crate::models::{Todo, TodoList};

const SEED: &[(i64, &str, bool)] = &[
    (1, "Learn Rust ownership", false),
    (2, "Set up the embedded database", false),
    (3, "Render the list with maud", true),
    (4, "Wire up htmx actions", false),
    (5, "Persist every change", false),
    (6, "Add a dark theme", false),
    (7, "Write the tests", false),
    (8, "Ship it", false),
];

/// Bundled todos, used when nothing has been stored yet.
pub fn todos() -> TodoList {
    SEED.iter()
        .map(|&(id, title, completed)| Todo {
            id,
            title: title.to_string(),
            completed,
        })
        .collect::<Vec<_>>()
        .into()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_seed_ids_unique() {
        let todos = todos();
        let ids: HashSet<i64> = todos.iter().map(|todo| todo.id).collect();
        assert_eq!(ids.len(), todos.len());
        assert!(!todos.is_empty());
    }

    #[test]
    fn test_seed_titles_non_empty() {
        assert!(todos().iter().all(|todo| !todo.title.trim().is_empty()));
    }
}
