//! Client tests against loopback stub endpoints

use std::net::SocketAddr;
use std::time::Duration;

use axum::http::StatusCode;
use axum::{routing::post, Json, Router};
use generation_client::{GenerateError, GenerationClient};
use serde_json::{json, Value};

/// Serves a stub endpoint router on an ephemeral local port
async fn spawn_stub(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub listener");
    let addr = listener.local_addr().expect("Failed to read local addr");

    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("Stub server failed");
    });

    addr
}

#[tokio::test]
async fn test_generate_returns_trimmed_content() {
    let router = Router::new().route(
        "/v1/generate",
        post(|| async { Json(json!({ "content": "  A generated post.  " })) }),
    );
    let addr = spawn_stub(router).await;

    let client = GenerationClient::new(format!("http://{addr}/"));
    let content = client
        .generate("space travel", "casual")
        .await
        .expect("generation should succeed");

    assert_eq!(content, "A generated post.");
}

#[tokio::test]
async fn test_generate_sends_topic_and_tone() {
    let router = Router::new().route(
        "/v1/generate",
        post(|Json(payload): Json<Value>| async move {
            assert_eq!(payload["topic"].as_str(), Some("space travel"));
            assert_eq!(payload["tone"].as_str(), Some("casual"));
            Json(json!({ "content": "ok" }))
        }),
    );
    let addr = spawn_stub(router).await;

    let client = GenerationClient::new(format!("http://{addr}"));
    client
        .generate("space travel", "casual")
        .await
        .expect("generation should succeed");
}

#[tokio::test]
async fn test_empty_content_maps_to_upstream_empty() {
    let router = Router::new().route(
        "/v1/generate",
        post(|| async { Json(json!({ "content": "   " })) }),
    );
    let addr = spawn_stub(router).await;

    let client = GenerationClient::new(format!("http://{addr}"));
    let err = client
        .generate("rust", "casual")
        .await
        .expect_err("blank content must be an error");

    assert!(matches!(err, GenerateError::UpstreamEmpty));
}

#[tokio::test]
async fn test_missing_content_field_maps_to_upstream_empty() {
    let router = Router::new().route("/v1/generate", post(|| async { Json(json!({})) }));
    let addr = spawn_stub(router).await;

    let client = GenerationClient::new(format!("http://{addr}"));
    let err = client
        .generate("rust", "casual")
        .await
        .expect_err("absent content must be an error");

    assert!(matches!(err, GenerateError::UpstreamEmpty));
}

#[tokio::test]
async fn test_bad_request_envelope_maps_to_bad_request() {
    let router = Router::new().route(
        "/v1/generate",
        post(|| async {
            (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "allowRetry": false,
                    "error": {
                        "code": "missing_field",
                        "message": "Both topic and tone are required"
                    }
                })),
            )
        }),
    );
    let addr = spawn_stub(router).await;

    let client = GenerationClient::new(format!("http://{addr}"));
    let err = client
        .generate("", "casual")
        .await
        .expect_err("400 must be an error");

    assert!(matches!(
        err,
        GenerateError::BadRequest(ref msg) if msg == "Both topic and tone are required"
    ));
}

#[tokio::test]
async fn test_upstream_empty_envelope_maps_to_upstream_empty() {
    let router = Router::new().route(
        "/v1/generate",
        post(|| async {
            (
                StatusCode::BAD_GATEWAY,
                Json(json!({
                    "allowRetry": true,
                    "error": {
                        "code": "upstream_empty",
                        "message": "The model returned no content"
                    }
                })),
            )
        }),
    );
    let addr = spawn_stub(router).await;

    let client = GenerationClient::new(format!("http://{addr}"));
    let err = client
        .generate("rust", "casual")
        .await
        .expect_err("502 must be an error");

    assert!(matches!(err, GenerateError::UpstreamEmpty));
}

#[tokio::test]
async fn test_server_error_maps_to_upstream() {
    let router = Router::new().route(
        "/v1/generate",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let addr = spawn_stub(router).await;

    let client = GenerationClient::new(format!("http://{addr}"));
    let err = client
        .generate("rust", "casual")
        .await
        .expect_err("500 must be an error");

    assert!(matches!(err, GenerateError::Upstream(_)));
}

#[tokio::test]
async fn test_slow_endpoint_times_out_as_upstream() {
    let router = Router::new().route(
        "/v1/generate",
        post(|| async {
            tokio::time::sleep(Duration::from_secs(2)).await;
            Json(json!({ "content": "too late" }))
        }),
    );
    let addr = spawn_stub(router).await;

    let client = GenerationClient::new(format!("http://{addr}"))
        .with_request_timeout(Duration::from_millis(100));
    let err = client
        .generate("rust", "casual")
        .await
        .expect_err("slow endpoint must time out");

    assert!(matches!(err, GenerateError::Upstream(_)));
}

#[tokio::test]
async fn test_unreachable_endpoint_maps_to_upstream() {
    // Port 9 (discard) is assumed closed
    let client = GenerationClient::new("http://127.0.0.1:9")
        .with_request_timeout(Duration::from_millis(500));
    let err = client
        .generate("rust", "casual")
        .await
        .expect_err("unreachable endpoint must be an error");

    assert!(matches!(err, GenerateError::Upstream(_)));
}
