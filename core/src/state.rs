//! The panel's State Store.

use crate::types::{Todo, TodoId};

/// Banner text shown after a failed load.
pub const FETCH_ERROR_MESSAGE: &str = "Failed to fetch todos. Please try again later.";

/// Everything the panel remembers between renders.
///
/// `todos` only ever reflects confirmed server responses; `error` is only
/// written by the load path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PanelState {
    pub todos: Vec<Todo>,
    pub input: String,
    pub error: Option<String>,
}

impl PanelState {
    pub fn with_todos(todos: Vec<Todo>) -> Self {
        Self {
            todos,
            ..Self::default()
        }
    }

    pub fn ids(&self) -> Vec<TodoId> {
        self.todos.iter().map(|todo| todo.id.clone()).collect()
    }

    pub fn completed_ids(&self) -> Vec<TodoId> {
        self.todos
            .iter()
            .filter(|todo| todo.checked)
            .map(|todo| todo.id.clone())
            .collect()
    }

    pub(crate) fn remove(&mut self, id: &TodoId) {
        self.todos.retain(|todo| &todo.id != id);
    }

    pub(crate) fn set_checked(&mut self, id: &TodoId, checked: bool) {
        for todo in self.todos.iter_mut().filter(|todo| &todo.id == id) {
            todo.checked = checked;
        }
    }

    pub(crate) fn drop_completed(&mut self) {
        self.todos.retain(|todo| !todo.checked);
    }
}
