//! Error types for the todo client and its sync layer.
//!
//! # Design
//! The panel treats every failure of a given operation the same way, so
//! `ApiError` does not single out particular status codes. The status and
//! body are still kept for the diagnostic log.

use thiserror::Error;

use crate::types::TodoId;

/// Errors produced while executing or interpreting a single request.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (connection refused, DNS, ...).
    #[error("transport failed: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),
}

/// A sequential bulk delete stopped at its first failing request.
///
/// Deletes issued before `id` stay applied on the server.
#[derive(Debug, Error)]
#[error("bulk delete aborted at todo {id} after {deleted} deletion(s): {source}")]
pub struct BulkDeleteError {
    pub id: TodoId,
    pub deleted: usize,
    pub source: ApiError,
}

/// Outcome of a failed sync-layer operation.
#[derive(Debug, Error)]
pub enum SyncError {
    /// Add was requested with a blank input buffer. No request was sent.
    #[error("You must write something!")]
    EmptyInput,

    #[error(transparent)]
    Request(#[from] ApiError),

    #[error(transparent)]
    Bulk(#[from] BulkDeleteError),
}
