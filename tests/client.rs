// tests/client.rs

use review_service::client::{ClientError, ReviewClient};
use review_service::config::AppConfig;
use review_service::{app, build_state};

/// Serve the router on an ephemeral local port
async fn spawn_server() -> u16 {
    let state = build_state(&AppConfig::default());
    state.health.set_serving();

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        axum::serve(listener, app(state)).await.unwrap();
    });

    port
}

#[tokio::test]
async fn client_fetches_category_reviews() {
    let port = spawn_server().await;
    let client = ReviewClient::new("127.0.0.1", port).unwrap();

    let reviews = client.get_reviews("decor").await.unwrap();
    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0].text, "Nice Candle holder!");
}

#[tokio::test]
async fn client_default_key_gets_fallback_sample() {
    let port = spawn_server().await;
    let client = ReviewClient::new("127.0.0.1", port).unwrap();

    let reviews = client.get_reviews("camera").await.unwrap();
    assert_eq!(reviews.len(), 2);
}

#[tokio::test]
async fn client_reports_connection_failure() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let client = ReviewClient::new("127.0.0.1", port).unwrap();
    let err = client.get_reviews("kitchen").await.unwrap_err();
    assert!(matches!(err, ClientError::Request(_)));
}

#[tokio::test]
async fn client_keeps_error_body_on_failed_status() {
    use axum::http::StatusCode;
    use axum::routing::post;

    let router = axum::Router::new().route(
        "/reviews",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "index unavailable") }),
    );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    let client = ReviewClient::new("127.0.0.1", port).unwrap();
    let err = client.get_reviews("kitchen").await.unwrap_err();
    match err {
        ClientError::Status { status, body } => {
            assert_eq!(status.as_u16(), 500);
            assert_eq!(body, "index unavailable");
        }
        other => panic!("unexpected error: {other}"),
    }
}
