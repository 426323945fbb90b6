//! Owner of the working todo list.
//!
//! The list is loaded once from the store, falling back to the bundled seed,
//! and every transition after that is written back in full under
//! [`STORE_KEY`]. Writes are queued to a single background task so callers
//! never wait on them and the store always ends on the newest list; a failed
//! write is logged and the in-memory list stays authoritative.

use std::sync::Arc;

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, error, info};

use crate::{
    error::StorageError,
    models::{codec, Todo, TodoList},
    seed,
    store::KeyValueStore,
};

pub const STORE_KEY: &str = "TodoApp";

/// Called with the current list after each transition.
pub trait Listener: Send + Sync {
    fn on_change(&self, todos: &TodoList);
}

impl<F> Listener for F
where
    F: Fn(&TodoList) + Send + Sync,
{
    fn on_change(&self, todos: &TodoList) {
        self(todos)
    }
}

enum Persist {
    Write(String),
    Flush(oneshot::Sender<()>),
}

pub struct TodoController {
    store: Arc<dyn KeyValueStore>,
    todos: TodoList,
    listeners: Vec<Box<dyn Listener>>,
    writer: mpsc::UnboundedSender<Persist>,
}

impl TodoController {
    /// Creates a controller with an empty list. Call [`Self::load`] before use.
    ///
    /// Spawns the writer task, so this must run inside a tokio runtime.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        let (writer, queue) = mpsc::unbounded_channel();
        tokio::spawn(run_writer(Arc::clone(&store), queue));
        Self {
            store,
            todos: TodoList::new(),
            listeners: Vec::new(),
            writer,
        }
    }

    pub async fn open(store: Arc<dyn KeyValueStore>) -> Self {
        let mut controller = Self::new(store);
        controller.load().await;
        controller
    }

    pub fn subscribe<L: Listener + 'static>(&mut self, listener: L) {
        self.listeners.push(Box::new(listener));
    }

    /// Adopts the stored list, or the seed when the store has nothing usable.
    pub async fn load(&mut self) {
        let todos = match read_stored(self.store.as_ref()).await {
            Ok(Some(todos)) if !todos.is_empty() => {
                info!(count = todos.len(), "loaded stored todos");
                todos
            }
            Ok(_) => {
                info!("no stored todos, using seed data");
                seed::todos()
            }
            Err(err) => {
                error!(error = %err, "failed to load todos, using seed data");
                seed::todos()
            }
        };
        self.commit(todos.sorted_desc());
    }

    pub fn todos(&self) -> &TodoList {
        &self.todos
    }

    pub fn get(&self, id: i64) -> Option<&Todo> {
        self.todos.get(id)
    }

    /// Returns the new todo, or `None` when nothing was added.
    pub fn add(&mut self, title: &str) -> Option<&Todo> {
        let todos = self.todos.add(title)?;
        self.commit(todos);
        self.todos.iter().next()
    }

    pub fn toggle(&mut self, id: i64) -> bool {
        let next = self.todos.toggle(id);
        self.apply(next)
    }

    pub fn remove(&mut self, id: i64) -> bool {
        let next = self.todos.remove(id);
        self.apply(next)
    }

    /// Waits until every write queued so far has been attempted.
    pub async fn flush(&self) {
        let (done, wait) = oneshot::channel();
        if self.writer.send(Persist::Flush(done)).is_err() || wait.await.is_err() {
            error!("persistence task is gone, queued writes may be lost");
        }
    }

    fn apply(&mut self, next: Option<TodoList>) -> bool {
        match next {
            Some(todos) => {
                self.commit(todos);
                true
            }
            None => false,
        }
    }

    fn commit(&mut self, todos: TodoList) {
        debug!(count = todos.len(), "todo list changed");
        self.todos = todos;
        self.persist();
        for listener in &self.listeners {
            listener.on_change(&self.todos);
        }
    }

    fn persist(&self) {
        let text = match codec::encode(&self.todos) {
            Ok(text) => text,
            Err(err) => {
                error!(error = %err, "failed to serialize todos");
                return;
            }
        };
        if self.writer.send(Persist::Write(text)).is_err() {
            error!("persistence task is gone, change not stored");
        }
    }
}

async fn read_stored(store: &dyn KeyValueStore) -> Result<Option<TodoList>, StorageError> {
    match store.read(STORE_KEY).await? {
        Some(text) => Ok(Some(codec::decode(&text)?)),
        None => Ok(None),
    }
}

// Applies queued writes one at a time, in the order they were made. Exits
// once the controller is dropped and the queue is drained.
async fn run_writer(store: Arc<dyn KeyValueStore>, mut queue: mpsc::UnboundedReceiver<Persist>) {
    while let Some(command) = queue.recv().await {
        match command {
            Persist::Write(text) => {
                if let Err(err) = store.write(STORE_KEY, &text).await {
                    error!(error = %err, "failed to persist todos");
                }
            }
            Persist::Flush(done) => {
                let _ = done.send(());
            }
        }
    }
}

impl std::fmt::Debug for TodoController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TodoController")
            .field("todos", &self.todos)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
