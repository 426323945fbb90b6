use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::{delete, get, post, put},
    Form, Router,
};
use maud::{html, Markup};
use serde::Deserialize;
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, info};

use crate::{controller::TodoController, theme::ColorScheme, view};

// === App State ===
#[derive(Debug, Clone)]
pub struct AppState {
    todos: Arc<RwLock<TodoController>>,
    scheme: Arc<RwLock<ColorScheme>>,
}
impl AppState {
    pub fn new(controller: TodoController, scheme: ColorScheme) -> Self {
        Self {
            todos: Arc::new(RwLock::new(controller)),
            scheme: Arc::new(RwLock::new(scheme)),
        }
    }

    // borrow immutable state
    pub async fn read(&self) -> RwLockReadGuard<'_, TodoController> {
        self.todos.read().await
    }
    // borrow mutable state
    pub async fn write(&self) -> RwLockWriteGuard<'_, TodoController> {
        self.todos.write().await
    }
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/todos", get(todos))
        .route("/create_todo", put(create_todo))
        .route("/toggle_todo", post(toggle_todo))
        .route("/remove_todo", delete(remove_todo))
        .route("/toggle_theme", post(toggle_theme))
        .with_state(state)
}

// === Routes ===
async fn root(State(state): State<AppState>) -> Markup {
    let scheme = *state.scheme.read().await;
    let controller = state.read().await;
    view::page(controller.todos().as_slice(), scheme)
}

async fn todos(State(state): State<AppState>) -> Markup {
    let controller = state.read().await;
    view::todos_html(controller.todos().as_slice())
}

#[derive(Deserialize)]
struct CreateTodo {
    title: String,
}
async fn create_todo(
    State(state): State<AppState>,
    Form(CreateTodo { title }): Form<CreateTodo>,
) -> Markup {
    let mut controller = state.write().await;
    if let Some(todo) = controller.add(&title) {
        debug!(id = todo.id, "created todo");
    }
    view::todos_html(controller.todos().as_slice())
}

#[derive(Deserialize)]
struct TodoId {
    id: i64,
}
async fn toggle_todo(
    State(state): State<AppState>,
    Form(TodoId { id }): Form<TodoId>,
) -> Markup {
    let mut controller = state.write().await;
    if !controller.toggle(id) {
        debug!(id, "toggle for unknown todo");
        return html! {};
    }
    match controller.get(id) {
        Some(todo) => view::todo_html(todo),
        None => html! {},
    }
}

async fn remove_todo(
    State(state): State<AppState>,
    Query(TodoId { id }): Query<TodoId>,
) -> Markup {
    let mut controller = state.write().await;
    if !controller.remove(id) {
        debug!(id, "remove for unknown todo");
    }
    html! {}
}

async fn toggle_theme(State(state): State<AppState>) -> Markup {
    let scheme = {
        let mut scheme = state.scheme.write().await;
        *scheme = scheme.toggled();
        *scheme
    };
    info!(%scheme, "switched theme");
    let controller = state.read().await;
    view::body(controller.todos().as_slice(), scheme)
}
