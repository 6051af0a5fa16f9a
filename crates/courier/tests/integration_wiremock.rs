//! End-to-end tests over real HTTP using wiremock

mod common;

use assert_matches::assert_matches;
use courier::{ClientConfig, ClientError, HttpClient, Method, RequestOptions, TransportClient, UploadOptions};
use serde::Deserialize;
use serde_json::{Value, json};
use std::time::Duration;
use wiremock::matchers::{body_json, header, header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Debug, Deserialize, PartialEq)]
struct Attachment {
    id: String,
    size: usize,
}

fn client() -> TransportClient {
    common::init_tracing();
    TransportClient::new().expect("Failed to build client")
}

#[tokio::test]
async fn test_get_with_query_parameters() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/bugs"))
        .and(query_param("q", "cats"))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": 1}])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let bugs: Vec<Value> = client()
        .perform_request(
            Method::Get,
            &format!("{}/bugs", mock_server.uri()),
            RequestOptions::new().param("q", "cats").param("limit", 10),
        )
        .await
        .expect("Request failed");

    assert_eq!(bugs, vec![json!({"id": 1})]);
    mock_server.verify().await;
}

#[tokio::test]
async fn test_post_json_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/bugs"))
        .and(header("content-type", "application/json"))
        .and(header("x-api-key", "test-key"))
        .and(body_json(json!({"a": 1})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 99})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let created: Value = client()
        .perform_request(
            Method::Post,
            &format!("{}/bugs", mock_server.uri()),
            RequestOptions::new()
                .param("a", 1)
                .header("x-api-key", "test-key")
                .json(),
        )
        .await
        .expect("Request failed");

    assert_eq!(created, json!({"id": 99}));
    mock_server.verify().await;
}

#[tokio::test]
async fn test_error_status_fails_without_decoding() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"id": "x", "size": 1})))
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/upload"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&mock_server)
        .await;

    let client = client();
    let err = client
        .perform_request::<Attachment>(
            Method::Get,
            &format!("{}/missing", mock_server.uri()),
            RequestOptions::new(),
        )
        .await
        .unwrap_err();
    assert_matches!(err, ClientError::BadServerResponse { status: 404 });

    let err = client
        .upload_multipart::<Attachment>(
            &format!("{}/upload", mock_server.uri()),
            UploadOptions::new(vec![1u8, 2, 3]),
        )
        .await
        .unwrap_err();
    assert_matches!(err, ClientError::BadServerResponse { status: 500 });
}

#[tokio::test]
async fn test_upload_multipart_end_to_end() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/attachments"))
        .and(header_exists("content-type"))
        .and(header("x-api-key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "att_1", "size": 4})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let file = vec![0xFFu8, 0xD8, 0xFF, 0xE0];
    let attachment: Attachment = client()
        .upload_multipart(
            &format!("{}/attachments", mock_server.uri()),
            UploadOptions::new(file.clone())
                .file_name("crash.jpg")
                .field("bug_id", "42")
                .header("x-api-key", "test-key"),
        )
        .await
        .expect("Upload failed");

    assert_eq!(
        attachment,
        Attachment {
            id: "att_1".to_string(),
            size: 4
        }
    );

    let received = mock_server.received_requests().await.unwrap();
    assert_eq!(received.len(), 1);
    let content_type = received[0]
        .headers
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    let boundary = common::boundary_of(&content_type);
    let parts = common::parse_multipart(received[0].body.clone().into(), &boundary).await;

    assert_eq!(parts.len(), 2);
    assert_eq!(parts[0].name.as_deref(), Some("bug_id"));
    assert_eq!(&parts[0].data[..], b"42");
    assert_eq!(parts[1].name.as_deref(), Some("image"));
    assert_eq!(parts[1].file_name.as_deref(), Some("crash.jpg"));
    assert_eq!(&parts[1].data[..], &file[..]);
}

#[tokio::test]
async fn test_raw_bytes_download() {
    let mock_server = MockServer::start().await;
    let payload = b"\x00binary\xffpayload".to_vec();

    Mock::given(method("GET"))
        .and(path("/logs/1"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(payload.clone()))
        .mount(&mock_server)
        .await;

    let body = client()
        .perform_request_bytes(
            Method::Get,
            &format!("{}/logs/1", mock_server.uri()),
            RequestOptions::new(),
        )
        .await
        .unwrap();

    assert_eq!(&body[..], &payload[..]);
}

#[tokio::test]
async fn test_timeout_is_connectivity_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
        .mount(&mock_server)
        .await;

    let client = TransportClient::from_config(
        ClientConfig::builder()
            .timeout(Duration::from_millis(200))
            .build(),
    )
    .unwrap();

    let err = client
        .perform_request_bytes(Method::Get, &mock_server.uri(), RequestOptions::new())
        .await
        .unwrap_err();
    assert_matches!(err, ClientError::Connectivity(_));
}

#[tokio::test]
async fn test_default_headers_and_user_agent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/bugs/3"))
        .and(header("user-agent", "bug-reporter/1.0"))
        .and(header("x-app-version", "1.0"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = TransportClient::from_config(
        ClientConfig::builder()
            .user_agent("bug-reporter/1.0")
            .default_header("x-app-version", "1.0")
            .build(),
    )
    .unwrap();

    let body = client
        .perform_request_bytes(
            Method::Delete,
            &format!("{}/bugs/3", mock_server.uri()),
            RequestOptions::new(),
        )
        .await
        .unwrap();

    assert!(body.is_empty());
    mock_server.verify().await;
}
