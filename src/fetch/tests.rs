use crate::fetch::OriginFetcher;
use crate::http::tests::spawn_origin;
use axum::body::Bytes;
use axum::http::StatusCode;

#[tokio::test]
async fn test_fetch_returns_body() {
    let base_url = spawn_origin(StatusCode::OK, Bytes::from_static(b"payload")).await;
    let fetcher = OriginFetcher::new(base_url);

    let body = fetcher.fetch("/some/image.jpg").await.expect("Fetch failed.");

    assert_eq!(body.as_ref(), b"payload");
}

#[tokio::test]
async fn test_fetch_returns_body_for_non_2xx_statuses() {
    let base_url =
        spawn_origin(StatusCode::NOT_FOUND, Bytes::from_static(b"<html>not found</html>")).await;
    let fetcher = OriginFetcher::new(base_url);

    let body = fetcher.fetch("/missing.jpg").await.expect("Fetch failed.");

    assert_eq!(body.as_ref(), b"<html>not found</html>");
}

#[tokio::test]
async fn test_fetch_reports_transport_failures() {
    let fetcher = OriginFetcher::new(String::from("http://127.0.0.1:1"));

    let result = fetcher.fetch("/image.jpg").await;

    let err = result.expect_err("Expected a transport failure.");
    assert!(err.to_string().starts_with("invalid request URL:"));
}

#[tokio::test]
async fn test_fetch_rejects_relative_urls() {
    let fetcher = OriginFetcher::new(String::new());

    let result = fetcher.fetch("/image.jpg").await;

    assert!(result.is_err());
}
