//! ureq-backed `Transport` for the terminal host.

use async_trait::async_trait;
use todo_core::{ApiError, HttpMethod, HttpRequest, HttpResponse, Transport};

#[derive(Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    /// 4xx/5xx responses come back as data; only connection-level failures
    /// become `ApiError::Transport`.
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

fn with_headers<B>(mut builder: ureq::RequestBuilder<B>, headers: &[(String, String)]) -> ureq::RequestBuilder<B> {
    for (key, value) in headers {
        builder = builder.header(key.as_str(), value.as_str());
    }
    builder
}

fn execute_blocking(agent: &ureq::Agent, req: HttpRequest) -> Result<HttpResponse, ApiError> {
    let headers = &req.headers;
    let result = match (req.method, req.body.as_deref()) {
        (HttpMethod::Get, _) => with_headers(agent.get(&req.path), headers).call(),
        (HttpMethod::Delete, _) => with_headers(agent.delete(&req.path), headers).call(),
        (HttpMethod::Post, Some(body)) => with_headers(agent.post(&req.path), headers).send(body.as_bytes()),
        (HttpMethod::Post, None) => with_headers(agent.post(&req.path), headers).send_empty(),
        (HttpMethod::Patch, Some(body)) => with_headers(agent.patch(&req.path), headers).send(body.as_bytes()),
        (HttpMethod::Patch, None) => with_headers(agent.patch(&req.path), headers).send_empty(),
    };
    let mut response = result.map_err(|e| ApiError::Transport(e.to_string()))?;

    let status = response.status().as_u16();
    let headers = response
        .headers()
        .iter()
        .filter_map(|(name, value)| Some((name.as_str().to_string(), value.to_str().ok()?.to_string())))
        .collect();
    let body = response
        .body_mut()
        .read_to_string()
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    Ok(HttpResponse { status, headers, body })
}

#[async_trait]
impl Transport for UreqTransport {
    /// Runs the blocking agent on tokio's blocking pool so the event loop
    /// keeps turning while a request is in flight.
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let agent = self.agent.clone();
        tokio::task::spawn_blocking(move || execute_blocking(&agent, request))
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?
    }
}
