//! Integration tests for the project client against a wiremock server.

use serde_json::json;
use shared::client::{ProjectClient, ProjectClientError};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_string, header, method, path},
};

const CREATE_PATH: &str = "/api/project/create";

#[tokio::test]
async fn test_create_project_success_returns_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(CREATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "p1"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ProjectClient::new(&mock_server.uri());
    let result = client.create_project().await.unwrap();

    assert_eq!(result, json!({"id": "p1"}));
}

#[tokio::test]
async fn test_create_project_sends_json_content_type_and_empty_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(CREATE_PATH))
        .and(header("content-type", "application/json"))
        .and(body_string(""))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "p2"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ProjectClient::new(&mock_server.uri());
    let result = client.create_project().await.unwrap();
    assert_eq!(result.as_value()["id"], "p2");

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].body.is_empty());
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn test_create_project_server_error_fails_with_fixed_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(CREATE_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "error": "INTERNAL",
            "message": "database unavailable"
        })))
        .mount(&mock_server)
        .await;

    let client = ProjectClient::new(&mock_server.uri());
    let err = client.create_project().await.unwrap_err();

    assert_eq!(err.to_string(), "Failed to create project");
    assert!(matches!(
        err,
        ProjectClientError::CreationFailed { status } if status.as_u16() == 500
    ));
}

#[tokio::test]
async fn test_create_project_client_errors_are_not_distinguished() {
    for status in [400_u16, 401, 403, 404, 409] {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(CREATE_PATH))
            .respond_with(ResponseTemplate::new(status))
            .mount(&mock_server)
            .await;

        let client = ProjectClient::new(&mock_server.uri());
        let err = client.create_project().await.unwrap_err();

        assert_eq!(err.to_string(), "Failed to create project", "status {status}");
        assert_eq!(err.status().map(|s| s.as_u16()), Some(status));
    }
}

#[tokio::test]
async fn test_create_project_connection_refused_is_transport_error() {
    // Reserve a port, then release it so nothing is listening there.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let client = ProjectClient::new(&format!("http://127.0.0.1:{port}"));
    let err = client.create_project().await.unwrap_err();

    match err {
        ProjectClientError::Transport(inner) => {
            assert!(inner.is_connect(), "expected connect error, got {inner:?}");
            assert!(inner.status().is_none());
        }
        other => panic!("expected transport error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_create_project_malformed_json_propagates_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(CREATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&mock_server)
        .await;

    let client = ProjectClient::new(&mock_server.uri());
    let err = client.create_project().await.unwrap_err();

    match err {
        ProjectClientError::Transport(inner) => assert!(inner.is_decode()),
        other => panic!("expected decode error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_concurrent_calls_issue_independent_requests() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(CREATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "p1"})))
        .expect(2)
        .mount(&mock_server)
        .await;

    let client = ProjectClient::new(&mock_server.uri());
    let other = client.clone();
    let (first, second) = tokio::join!(client.create_project(), other.create_project());

    assert_eq!(first.unwrap(), json!({"id": "p1"}));
    assert_eq!(second.unwrap(), json!({"id": "p1"}));
    assert_eq!(mock_server.received_requests().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_concurrent_calls_do_not_share_outcomes() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(CREATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "first"})))
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path(CREATE_PATH))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let client = ProjectClient::new(&mock_server.uri());
    let results = futures::future::join_all([client.create_project(), client.create_project()]).await;

    let successes = results.iter().filter(|r| r.is_ok()).count();
    let failures = results
        .iter()
        .filter(|r| matches!(r, Err(ProjectClientError::CreationFailed { .. })))
        .count();
    assert_eq!(successes, 1);
    assert_eq!(failures, 1);
}
