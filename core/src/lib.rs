//! Client core for a single todo panel backed by a remote collection
//! endpoint.
//!
//! # Overview
//! `TodoClient` builds and parses plain-data HTTP messages (host-does-IO);
//! a `Transport` performs the round-trip. The sync layer drives both and
//! reconciles `PanelState` with confirmed outcomes, and `PanelView` renders
//! that state.
//!
//! # Design
//! - The list only changes after the server confirms a request. Bulk
//!   deletes are the exception: they abort on the first failure without
//!   rollback and still apply their local filter.
//! - Load failures set the banner; mutation failures are logged through
//!   `tracing` and returned as `SyncError`.
//! - A panel handles one intent at a time through `&mut self`; there is no
//!   in-flight guard or request de-duplication.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod panel;
pub mod state;
pub mod sync;
pub mod transport;
pub mod types;
pub mod view;

#[cfg(test)]
mod testing;

pub use client::TodoClient;
pub use config::PanelConfig;
pub use error::{ApiError, BulkDeleteError, SyncError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use panel::{Intent, TodoPanel};
pub use state::{PanelState, FETCH_ERROR_MESSAGE};
pub use transport::{TodoApi, Transport};
pub use types::{CheckedPatch, NewTodo, Todo, TodoId};
pub use view::{PanelView, TodoRow};
