//! End-to-end tests against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port and talks to it through the same
//! `UreqTransport` the `todo-panel` binary ships with. Covers the transport
//! itself (header forwarding, response headers, connection failures) and
//! full panel lifecycles on top of it.

use mock_server::Todo as ServerTodo;
use todo_core::{
    ApiError, CheckedPatch, HttpRequest, Intent, NewTodo, SyncError, TodoApi, TodoClient, TodoId, TodoPanel, Transport,
    FETCH_ERROR_MESSAGE,
};
use todo_panel::transport::UreqTransport;

/// Serve `seed` on a random port and return the base url.
async fn start_server(seed: Vec<ServerTodo>) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(mock_server::serve(listener, mock_server::app_with(seed)));
    format!("http://{addr}")
}

fn api(base_url: &str) -> TodoApi<UreqTransport> {
    TodoApi::new(TodoClient::new(base_url), UreqTransport::new())
}

fn seed(items: &[(&str, bool)]) -> Vec<ServerTodo> {
    items
        .iter()
        .map(|(id, checked)| ServerTodo {
            id: id.to_string(),
            text: format!("item {id}"),
            checked: *checked,
        })
        .collect()
}

fn ids(panel: &TodoPanel<UreqTransport>) -> Vec<String> {
    panel
        .state()
        .todos
        .iter()
        .map(|todo| todo.id.to_string())
        .collect()
}

#[tokio::test(flavor = "multi_thread")]
async fn panel_lifecycle() {
    let base_url = start_server(Vec::new()).await;

    // Step 1: mount with an empty list and no banner.
    let mut panel = TodoPanel::mount(api(&base_url)).await;
    assert!(panel.state().todos.is_empty());
    assert_eq!(panel.state().error, None);

    // Step 2: blank input never reaches the server.
    panel
        .dispatch(Intent::InputChanged("   ".to_string()))
        .await
        .unwrap();
    let err = panel.dispatch(Intent::Add).await.unwrap_err();
    assert!(matches!(err, SyncError::EmptyInput));

    // Step 3: add.
    panel
        .dispatch(Intent::InputChanged("Integration test".to_string()))
        .await
        .unwrap();
    panel.dispatch(Intent::Add).await.unwrap();
    assert_eq!(panel.state().todos.len(), 1);
    assert_eq!(panel.state().todos[0].text, "Integration test");
    assert!(panel.state().input.is_empty());

    // Step 4: toggle, then reload to see the server agrees.
    let toggle = panel.view().row(1).unwrap().toggle_intent();
    panel.dispatch(toggle).await.unwrap();
    assert!(panel.state().todos[0].checked);
    panel.dispatch(Intent::Reload).await.unwrap();
    assert!(panel.state().todos[0].checked);

    // Step 5: delete.
    let delete = panel.view().row(1).unwrap().delete_intent();
    panel.dispatch(delete).await.unwrap();
    assert!(panel.state().todos.is_empty());

    // Step 6: deleting a vanished id fails and changes nothing.
    let err = panel
        .dispatch(Intent::Delete(TodoId::from("gone")))
        .await
        .unwrap_err();
    assert!(matches!(err, SyncError::Request(ApiError::Status { status: 404, .. })));

    panel.dispatch(Intent::Reload).await.unwrap();
    assert!(panel.state().todos.is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn clear_completed_partial_failure_diverges_from_server() {
    let base_url = start_server(seed(&[("1", true), ("2", false), ("3", true), ("4", true)])).await;
    let mut panel = TodoPanel::mount(api(&base_url)).await;
    assert_eq!(ids(&panel), ["1", "2", "3", "4"]);

    // Someone else removes "3" behind the panel's back.
    api(&base_url).delete(&TodoId::from("3")).await.unwrap();

    let err = panel.dispatch(Intent::ClearCompleted).await.unwrap_err();
    match err {
        SyncError::Bulk(bulk) => {
            assert_eq!(bulk.id, TodoId::from("3"));
            assert_eq!(bulk.deleted, 1);
        }
        other => panic!("expected bulk failure, got {other:?}"),
    }

    // Locally every checked item is gone; "4" was never attempted.
    assert_eq!(ids(&panel), ["2"]);
    panel.dispatch(Intent::Reload).await.unwrap();
    assert_eq!(ids(&panel), ["2", "4"]);
}

#[tokio::test(flavor = "multi_thread")]
async fn remove_all_clears_server_and_panel() {
    let base_url = start_server(seed(&[("1", false), ("2", true), ("3", false)])).await;
    let mut panel = TodoPanel::mount(api(&base_url)).await;

    panel.dispatch(Intent::RemoveAll).await.unwrap();
    assert!(panel.state().todos.is_empty());

    panel.dispatch(Intent::Reload).await.unwrap();
    assert!(panel.state().todos.is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn unreachable_service_shows_banner() {
    let closed = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = closed.local_addr().unwrap();
    drop(closed);

    let panel = TodoPanel::mount(api(&format!("http://{addr}"))).await;

    assert!(panel.state().todos.is_empty());
    assert_eq!(panel.state().error.as_deref(), Some(FETCH_ERROR_MESSAGE));
    assert!(panel.view().to_markup().contains(FETCH_ERROR_MESSAGE));
}

// ---------------------------------------------------------------------------
// Transport
// ---------------------------------------------------------------------------

fn without_headers(mut request: HttpRequest) -> HttpRequest {
    request.headers.clear();
    request
}

#[tokio::test(flavor = "multi_thread")]
async fn transport_forwards_json_content_type() {
    let base_url = start_server(Vec::new()).await;
    let client = TodoClient::new(&base_url);
    let transport = UreqTransport::new();

    let request = client.build_create_todo(&NewTodo::unchecked("walk dog")).unwrap();
    let response = transport.execute(request.clone()).await.unwrap();
    assert_eq!(response.status, 201);
    assert_eq!(client.parse_create_todo(response).unwrap().text, "walk dog");

    // The server only accepts JSON bodies that say so.
    let response = transport.execute(without_headers(request)).await.unwrap();
    assert_eq!(response.status, 415);
}

#[tokio::test(flavor = "multi_thread")]
async fn transport_forwards_headers_on_patch() {
    let base_url = start_server(seed(&[("1", false)])).await;
    let client = TodoClient::new(&base_url);
    let transport = UreqTransport::new();

    let request = client
        .build_update_todo(&TodoId::from("1"), &CheckedPatch { checked: true })
        .unwrap();
    let response = transport.execute(without_headers(request.clone())).await.unwrap();
    assert_eq!(response.status, 415);
    let response = transport.execute(request).await.unwrap();
    assert_eq!(response.status, 200);
}

#[tokio::test(flavor = "multi_thread")]
async fn transport_collects_response_headers() {
    let base_url = start_server(Vec::new()).await;
    let client = TodoClient::new(&base_url);

    let response = UreqTransport::new().execute(client.build_list_todos()).await.unwrap();

    assert_eq!(response.status, 200);
    assert!(response
        .headers
        .iter()
        .any(|(name, value)| name == "content-type" && value.starts_with("application/json")));
    assert_eq!(response.body, "[]");
}

#[tokio::test(flavor = "multi_thread")]
async fn transport_reports_error_statuses_as_data() {
    let base_url = start_server(Vec::new()).await;
    let client = TodoClient::new(&base_url);

    let response = UreqTransport::new()
        .execute(client.build_delete_todo(&TodoId::from("missing")))
        .await
        .unwrap();

    assert_eq!(response.status, 404);
}

#[tokio::test(flavor = "multi_thread")]
async fn ids_with_reserved_characters_reach_the_right_record() {
    let base_url = start_server(seed(&[("a/b?c", true), ("2", false)])).await;
    let mut panel = TodoPanel::mount(api(&base_url)).await;

    let toggle = panel.view().row(1).unwrap().toggle_intent();
    panel.dispatch(toggle).await.unwrap();
    assert!(!panel.state().todos[0].checked);

    panel
        .dispatch(Intent::Delete(TodoId::from("a/b?c")))
        .await
        .unwrap();
    panel.dispatch(Intent::Reload).await.unwrap();
    assert_eq!(ids(&panel), ["2"]);
}
