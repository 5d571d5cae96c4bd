//! The I/O seam between the pure client and the network.
//!
//! # Design
//! `Transport` is the only place a request leaves the process. `TodoApi`
//! pairs it with a `TodoClient` so the sync layer can call typed operations
//! without repeating the build / execute / parse sequence.

use async_trait::async_trait;
use tracing::debug;

use crate::client::TodoClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::{CheckedPatch, NewTodo, Todo, TodoId};

/// Executes one HTTP round-trip.
///
/// Implementations return non-2xx responses as data; only failures that
/// produce no response at all map to `ApiError::Transport`.
#[async_trait]
pub trait Transport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

#[async_trait]
impl<T: Transport + Send + Sync + ?Sized> Transport for &T {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        (**self).execute(request).await
    }
}

/// Typed operations against the collection endpoint.
#[derive(Debug, Clone)]
pub struct TodoApi<T> {
    client: TodoClient,
    transport: T,
}

impl<T: Transport> TodoApi<T> {
    pub fn new(client: TodoClient, transport: T) -> Self {
        Self { client, transport }
    }

    pub async fn list(&self) -> Result<Vec<Todo>, ApiError> {
        let response = self.send(self.client.build_list_todos()).await?;
        self.client.parse_list_todos(response)
    }

    pub async fn create(&self, input: &NewTodo) -> Result<Todo, ApiError> {
        let response = self.send(self.client.build_create_todo(input)?).await?;
        self.client.parse_create_todo(response)
    }

    pub async fn set_checked(&self, id: &TodoId, checked: bool) -> Result<(), ApiError> {
        let request = self.client.build_update_todo(id, &CheckedPatch { checked })?;
        let response = self.send(request).await?;
        self.client.parse_update_todo(response)
    }

    pub async fn delete(&self, id: &TodoId) -> Result<(), ApiError> {
        let response = self.send(self.client.build_delete_todo(id)).await?;
        self.client.parse_delete_todo(response)
    }

    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        debug!(method = %request.method, path = %request.path, "sending request");
        let response = self.transport.execute(request).await?;
        debug!(status = response.status, "received response");
        Ok(response)
    }
}
