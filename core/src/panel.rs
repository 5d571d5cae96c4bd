//! The Todo Panel: owns the State Store and routes intents to the sync
//! layer.

use crate::error::SyncError;
use crate::state::PanelState;
use crate::sync;
use crate::transport::{TodoApi, Transport};
use crate::types::TodoId;
use crate::view::PanelView;

/// A discrete user action coming from one of the panel's controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Reload,
    InputChanged(String),
    Add,
    Toggle { id: TodoId, checked: bool },
    Delete(TodoId),
    ClearCompleted,
    RemoveAll,
}

/// Owns the State Store for one panel.
///
/// `dispatch` takes `&mut self`, so a host that awaits each call handles
/// one intent at a time; that serialization is the panel's only in-flight
/// guard.
pub struct TodoPanel<T> {
    api: TodoApi<T>,
    state: PanelState,
}

impl<T: Transport> TodoPanel<T> {
    /// Build the panel and perform its single on-mount load.
    ///
    /// A failed load is recorded in the error banner, so the panel is
    /// returned either way.
    pub async fn mount(api: TodoApi<T>) -> Self {
        let mut panel = Self {
            api,
            state: PanelState::default(),
        };
        let _ = sync::fetch_all(&panel.api, &mut panel.state).await;
        panel
    }

    pub async fn dispatch(&mut self, intent: Intent) -> Result<(), SyncError> {
        let (api, state) = (&self.api, &mut self.state);
        match intent {
            Intent::Reload => sync::fetch_all(api, state).await,
            Intent::InputChanged(text) => {
                sync::update_input(state, text);
                Ok(())
            }
            Intent::Add => sync::add(api, state).await,
            Intent::Toggle { id, checked } => sync::toggle(api, state, &id, checked).await,
            Intent::Delete(id) => sync::delete(api, state, &id).await,
            Intent::ClearCompleted => sync::clear_completed(api, state).await,
            Intent::RemoveAll => sync::remove_all(api, state).await,
        }
    }

    pub fn state(&self) -> &PanelState {
        &self.state
    }

    pub fn view(&self) -> PanelView {
        PanelView::from_state(&self.state)
    }
}
