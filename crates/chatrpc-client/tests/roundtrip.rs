//! Client against a live in-process server.

use std::collections::HashSet;
use std::net::SocketAddr;

use chatrpc_client::{ClientError, RpcClient};
use chatrpc_proto::RpcErrorCode;
use chatrpc_server::{http::create_router, AppState, Config};
use tokio::net::TcpListener;

async fn spawn_server(seed: bool) -> SocketAddr {
    let config = Config::new("127.0.0.1", 0, seed);
    let state = AppState::from_config(&config);
    let listener = TcpListener::bind(&config.bind_addr).await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, create_router(state)).await.unwrap();
    });
    addr
}

fn client(addr: SocketAddr) -> RpcClient {
    RpcClient::new(&format!("http://{}/", addr))
}

#[tokio::test]
async fn test_greeting_and_health() {
    let client = client(spawn_server(false).await);
    assert!(client.health().await.unwrap());

    let first = client.greeting().await.unwrap();
    let second = client.greeting().await.unwrap();
    assert_eq!(first, second);
    assert_eq!(first.message, "Greetings from /trpc/hello :)");
    assert!(client.get_messages(None).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_seeded_history() {
    let client = client(spawn_server(true).await);
    let messages = client.get_messages(None).await.unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].user, "User1");
    assert_eq!(messages[1].user, "User2");
}

#[tokio::test]
async fn test_add_and_tail() {
    let client = client(spawn_server(false).await);

    let echoed = client.add_message("A", "hi").await.unwrap();
    assert_eq!(echoed.user, "A");
    assert_eq!(echoed.message, "hi");
    client.add_message("A", "hi").await.unwrap();
    client.add_message("B", "later").await.unwrap();

    let last = client.get_messages(Some(1)).await.unwrap();
    assert_eq!(last.len(), 1);
    assert_eq!(last[0].message, "later");

    let all = client.get_messages(Some(100)).await.unwrap();
    assert_eq!(all.len(), 3);
    let ids: HashSet<_> = all.iter().map(|m| m.id.clone()).collect();
    assert_eq!(ids.len(), 3);

    assert!(client.get_messages(Some(0)).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_connection_refused() {
    // Bind then drop to get a port nothing listens on.
    let addr = TcpListener::bind("127.0.0.1:0")
        .await
        .unwrap()
        .local_addr()
        .unwrap();
    let err = client(addr).greeting().await.unwrap_err();
    assert!(matches!(err, ClientError::Connection(_)));
}

#[tokio::test]
async fn test_rpc_error_surfaces() {
    let addr = spawn_server(false).await;
    match post_invalid_message(addr).await {
        ClientError::Rpc {
            code, path, issues, ..
        } => {
            assert_eq!(code, RpcErrorCode::BadRequest);
            assert_eq!(path.as_deref(), Some("addMessage"));
            assert_eq!(issues.len(), 1);
            assert_eq!(issues[0].path, vec!["message"]);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

/// Send an `addMessage` without `message` through the raw HTTP helper.
async fn post_invalid_message(addr: SocketAddr) -> ClientError {
    let http = chatrpc_client::HttpClient::new(&format!("http://{}", addr));
    let raw = http
        .post_json("/trpc/addMessage", &serde_json::json!({ "user": "A" }))
        .await
        .unwrap();
    assert_eq!(raw.status, 400);
    chatrpc_client::decode_envelope::<serde_json::Value>(raw.status, &raw.body).unwrap_err()
}

#[tokio::test]
async fn test_undecodable_query_string_is_rpc_error() {
    let addr = spawn_server(false).await;
    let http = chatrpc_client::HttpClient::new(&format!("http://{}", addr));
    let raw = http
        .get(
            "/trpc/getMessages",
            &[("input", "1".to_string()), ("input", "2".to_string())],
        )
        .await
        .unwrap();
    assert_eq!(raw.status, 400);

    let err = chatrpc_client::decode_envelope::<serde_json::Value>(raw.status, &raw.body)
        .unwrap_err();
    assert!(matches!(
        err,
        ClientError::Rpc {
            code: RpcErrorCode::ParseError,
            ..
        }
    ));
}
