use std::time::Duration;

use labflow::api::webhook::{WebhookClient, WebhookError, CONNECTIVITY_REPLY, NO_CONTENT_REPLY};
use labflow::session::history::{Message, MessageKind, Role};
use mockito::{Matcher, Server};
use serde_json::json;

fn client_for(server: &Server) -> WebhookClient {
    WebhookClient::new(format!("{}/webhook/lab", server.url()), Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn test_posts_payload_and_extracts_answer() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/webhook/lab")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({
            "chatInput": "stok aseton?",
            "query": "stok aseton?",
            "user": "Ana",
            "history": [
                {"role": "user", "content": "halo"},
                {"role": "model", "content": "Halo Ana"}
            ]
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"output": "Sisa 2 liter"}]"#)
        .create_async()
        .await;

    let history = vec![Message::user("halo"), Message::model("Halo Ana").with_kind(MessageKind::Text)];
    let replies = client_for(&server).send_message(&history, "stok aseton?", "Ana").await;

    mock.assert_async().await;
    assert_eq!(replies.len(), 1);
    assert_eq!(replies[0].role, Role::Model);
    assert_eq!(replies[0].kind, MessageKind::Text);
    assert_eq!(replies[0].content, "Sisa 2 liter");
}

#[tokio::test]
async fn test_plain_text_response() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/webhook/lab")
        .with_status(200)
        .with_header("content-type", "text/plain")
        .with_body("Order ORD-XXX-001 set to Pending")
        .create_async()
        .await;

    let replies = client_for(&server).send_message(&[], "update order", "Ana").await;
    assert_eq!(replies[0].content, "Order ORD-XXX-001 set to Pending");
}

#[tokio::test]
async fn test_empty_object_gives_no_content_advisory() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/webhook/lab")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("{}")
        .create_async()
        .await;

    let client = client_for(&server);
    let replies = client.send_message(&[], "anything", "Ana").await;
    assert_eq!(replies.len(), 1);
    assert_eq!(replies[0].content, NO_CONTENT_REPLY);
}

#[tokio::test]
async fn test_workflow_started_gives_no_content_advisory() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/webhook/lab")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"message": "Workflow was started"}"#)
        .create_async()
        .await;

    let err = client_for(&server).request(&[], "anything", "Ana").await.unwrap_err();
    assert!(matches!(err, WebhookError::NoContent));
}

#[tokio::test]
async fn test_server_error_reports_status() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/webhook/lab")
        .with_status(500)
        .with_body("boom")
        .expect(1)
        .create_async()
        .await;

    let replies = client_for(&server).send_message(&[], "hi", "Ana").await;
    mock.assert_async().await;
    assert_eq!(replies.len(), 1);
    assert_eq!(replies[0].role, Role::Model);
    assert!(replies[0].content.contains("500"));
    assert_eq!(replies[0].content, "System Error: 500 - Internal Server Error");
}

#[tokio::test]
async fn test_timeout_returns_connectivity_message() {
    // Accepts connections and never answers.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });

    let client = WebhookClient::new(format!("http://{addr}/webhook/lab"), Duration::from_millis(200)).unwrap();
    match client.request(&[], "hi", "Ana").await {
        Err(WebhookError::Transport(e)) => assert!(e.is_timeout()),
        other => panic!("expected timeout, got {other:?}"),
    }

    let replies = client.send_message(&[], "hi", "Ana").await;
    assert_eq!(replies.len(), 1);
    assert_eq!(replies[0].role, Role::Model);
    assert_eq!(replies[0].content, CONNECTIVITY_REPLY);
}

#[tokio::test]
async fn test_connection_refused_returns_connectivity_message() {
    let addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };
    let client = WebhookClient::new(format!("http://{addr}/webhook/lab"), Duration::from_secs(2)).unwrap();
    let replies = client.send_message(&[], "hi", "Ana").await;
    assert_eq!(replies.len(), 1);
    assert_eq!(replies[0].content, CONNECTIVITY_REPLY);
}

#[tokio::test]
async fn test_each_reply_gets_fresh_id() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/webhook/lab")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"answer": "ok"}"#)
        .expect(2)
        .create_async()
        .await;

    let client = client_for(&server);
    let a = client.send_message(&[], "one", "Ana").await;
    let b = client.send_message(&[], "two", "Ana").await;
    assert_ne!(a[0].id, b[0].id);
}

#[tokio::test]
async fn test_nonstandard_status_has_fallback_reason() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/webhook/lab")
        .with_status(599)
        .create_async()
        .await;

    let replies = client_for(&server).send_message(&[], "hi", "Ana").await;
    assert_eq!(replies[0].content, "System Error: 599 - Unknown Status");
}
