//! The Sync Layer: user intents turned into requests, and confirmed
//! outcomes folded back into `PanelState`.
//!
//! Every operation returns an explicit `Result`. Only the load path writes
//! `PanelState::error`; mutation failures are logged and handed back to the
//! caller without touching the list.

use futures::stream::{self, TryStreamExt};
use tracing::{error, info};

use crate::error::{BulkDeleteError, SyncError};
use crate::state::{PanelState, FETCH_ERROR_MESSAGE};
use crate::transport::{TodoApi, Transport};
use crate::types::{NewTodo, TodoId};

/// Replace the whole list with the server's copy.
pub async fn fetch_all<T: Transport>(api: &TodoApi<T>, state: &mut PanelState) -> Result<(), SyncError> {
    match api.list().await {
        Ok(todos) => {
            info!(count = todos.len(), "fetched todos");
            state.todos = todos;
            state.error = None;
            Ok(())
        }
        Err(err) => {
            error!(error = %err, "error fetching todos");
            state.error = Some(FETCH_ERROR_MESSAGE.to_string());
            Err(err.into())
        }
    }
}

/// Create a todo from the input buffer.
///
/// The buffer is sent as typed; only the blank check trims it. It is
/// cleared after the server confirms and kept on failure.
pub async fn add<T: Transport>(api: &TodoApi<T>, state: &mut PanelState) -> Result<(), SyncError> {
    if state.input.trim().is_empty() {
        return Err(SyncError::EmptyInput);
    }

    let created = api
        .create(&NewTodo::unchecked(state.input.as_str()))
        .await
        .inspect_err(|err| error!(error = %err, "error adding todo"))?;
    info!(id = %created.id, "added todo");
    state.todos.push(created);
    state.input.clear();
    Ok(())
}

pub async fn delete<T: Transport>(api: &TodoApi<T>, state: &mut PanelState, id: &TodoId) -> Result<(), SyncError> {
    api.delete(id)
        .await
        .inspect_err(|err| error!(id = %id, error = %err, "error deleting todo"))?;
    info!(id = %id, "deleted todo");
    state.remove(id);
    Ok(())
}

/// Flip `checked` on the server, then apply the flipped value locally.
///
/// `checked` is the value the caller saw when the toggle was triggered.
pub async fn toggle<T: Transport>(
    api: &TodoApi<T>,
    state: &mut PanelState,
    id: &TodoId,
    checked: bool,
) -> Result<(), SyncError> {
    let next = !checked;
    api.set_checked(id, next)
        .await
        .inspect_err(|err| error!(id = %id, error = %err, "error toggling todo"))?;
    info!(id = %id, checked = next, "toggled todo");
    state.set_checked(id, next);
    Ok(())
}

/// Delete every checked todo, one request at a time.
///
/// The local list drops all checked records even when the pipeline aborts
/// part way; nothing already deleted is restored.
pub async fn clear_completed<T: Transport>(api: &TodoApi<T>, state: &mut PanelState) -> Result<(), SyncError> {
    let outcome = delete_in_order(api, &state.completed_ids()).await;
    state.drop_completed();
    finish_bulk(outcome, "cleared completed todos", "error clearing completed todos")
}

/// Delete every todo, one request at a time, then empty the local list
/// regardless of how far the pipeline got.
pub async fn remove_all<T: Transport>(api: &TodoApi<T>, state: &mut PanelState) -> Result<(), SyncError> {
    let outcome = delete_in_order(api, &state.ids()).await;
    state.todos.clear();
    finish_bulk(outcome, "removed all todos", "error removing all todos")
}

pub fn update_input(state: &mut PanelState, text: impl Into<String>) {
    state.input = text.into();
}

/// Issue deletes strictly in sequence, stopping at the first failure.
///
/// Yields the number of completed deletes.
async fn delete_in_order<T: Transport>(api: &TodoApi<T>, ids: &[TodoId]) -> Result<usize, BulkDeleteError> {
    stream::iter(ids.iter().map(Ok::<_, BulkDeleteError>))
        .try_fold(0usize, |deleted, id| async move {
            api.delete(id)
                .await
                .map(|()| deleted + 1)
                .map_err(|source| BulkDeleteError {
                    id: id.clone(),
                    deleted,
                    source,
                })
        })
        .await
}

fn finish_bulk(outcome: Result<usize, BulkDeleteError>, done: &str, failed: &str) -> Result<(), SyncError> {
    match outcome {
        Ok(deleted) => {
            info!(deleted, "{done}");
            Ok(())
        }
        Err(err) => {
            error!(id = %err.id, deleted = err.deleted, error = %err.source, "{failed}");
            Err(err.into())
        }
    }
}
