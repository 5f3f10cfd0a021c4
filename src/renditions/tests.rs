use crate::app_context::AppContext;
use crate::fetch::OriginFetcher;
use crate::http::tests::{spawn_origin, test_server};
use crate::pipeline::engine::ImageEngine;
use crate::pipeline::raster::RasterEngine;
use crate::pipeline::tests::{sample_image_bytes, FailAt, FakeEngine};
use crate::renditions::requests::TransformRequest;
use axum::body::Bytes;
use axum::http::StatusCode;
use axum_test::TestServer;
use image::ImageFormat;

async fn proxy_for<E>(engine: E, status: StatusCode, body: Bytes) -> TestServer
where
    E: ImageEngine + Clone + Send + Sync + 'static,
{
    let base_url = spawn_origin(status, body).await;
    test_server(AppContext {
        engine,
        fetcher: OriginFetcher::new(base_url),
    })
}

fn decoded_dimensions(body: &[u8]) -> (u32, u32) {
    let image = image::load_from_memory(body).expect("Failed to decode the response body.");
    (image.width(), image.height())
}

#[test]
fn test_transform_request_combines_path_and_query() {
    let request = TransformRequest::new("/cat.jpg", Some("w=100&h=50"));

    assert_eq!(
        request,
        TransformRequest {
            path: String::from("/cat.jpg"),
            width: 100,
            height: 50,
        }
    );
    assert_eq!(TransformRequest::new("/cat.jpg", None).width, 0);
}

#[tokio::test]
async fn test_stretch_to_requested_dimensions() {
    let origin_body = sample_image_bytes(400, 200, ImageFormat::Jpeg);
    let server = proxy_for(RasterEngine, StatusCode::OK, origin_body).await;

    let response = server
        .get("/cat.jpg")
        .add_query_param("w", "100")
        .add_query_param("h", "50")
        .await;

    response.assert_status_ok();
    assert_eq!(decoded_dimensions(response.as_bytes().as_ref()), (100, 50));
}

#[tokio::test]
async fn test_aspect_preserved_when_only_width_given() {
    let origin_body = sample_image_bytes(400, 200, ImageFormat::Jpeg);
    let server = proxy_for(RasterEngine, StatusCode::OK, origin_body).await;

    let response = server.get("/cat.jpg").add_query_param("w", "100").await;

    response.assert_status_ok();
    assert_eq!(decoded_dimensions(response.as_bytes().as_ref()), (100, 50));
}

#[tokio::test]
async fn test_aspect_preserved_when_only_height_given() {
    let origin_body = sample_image_bytes(400, 200, ImageFormat::Jpeg);
    let server = proxy_for(RasterEngine, StatusCode::OK, origin_body).await;

    let response = server.get("/cat.jpg").add_query_param("h", "100").await;

    response.assert_status_ok();
    assert_eq!(decoded_dimensions(response.as_bytes().as_ref()), (200, 100));
}

#[tokio::test]
async fn test_source_dimensions_kept_without_query() {
    let origin_body = sample_image_bytes(400, 200, ImageFormat::Jpeg);
    let server = proxy_for(RasterEngine, StatusCode::OK, origin_body).await;

    let response = server.get("/cat.jpg").await;

    response.assert_status_ok();
    assert_eq!(decoded_dimensions(response.as_bytes().as_ref()), (400, 200));
}

#[tokio::test]
async fn test_non_image_origin_body_is_rejected() {
    let server = proxy_for(
        RasterEngine,
        StatusCode::NOT_FOUND,
        Bytes::from_static(b"<html>not found</html>"),
    )
    .await;

    let response = server
        .get("/missing.jpg")
        .add_query_param("w", "10")
        .add_query_param("h", "10")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(response.text().starts_with("error decoding image,"));
}

#[tokio::test]
async fn test_truncated_origin_image_is_rejected() {
    let png = sample_image_bytes(64, 64, ImageFormat::Png);
    let server = proxy_for(RasterEngine, StatusCode::OK, png.slice(..32)).await;

    let response = server
        .get("/truncated.png")
        .add_query_param("w", "10")
        .add_query_param("h", "10")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(response.text().starts_with("error reading image header,"));
}

#[tokio::test]
async fn test_favicon_is_not_found() {
    let origin_body = sample_image_bytes(400, 200, ImageFormat::Jpeg);
    let server = proxy_for(RasterEngine, StatusCode::OK, origin_body).await;

    let response = server.get("/favicon.ico").add_query_param("w", "10").await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_response_headers() {
    let origin_body = sample_image_bytes(400, 200, ImageFormat::Jpeg);
    let server = proxy_for(RasterEngine, StatusCode::OK, origin_body).await;

    let response = server.get("/cat.jpg").add_query_param("w", "100").await;

    response.assert_status_ok();
    assert_eq!(response.header("content-type"), "image/jpeg");
    let content_length: usize = response
        .header("content-length")
        .to_str()
        .expect("Failed to read the content-length header.")
        .parse()
        .expect("Failed to parse the content-length header.");
    assert_eq!(content_length, response.as_bytes().len());
}

#[tokio::test]
async fn test_fetch_failures_map_to_bad_request() {
    let server = test_server(AppContext {
        engine: RasterEngine,
        fetcher: OriginFetcher::new(String::from("http://127.0.0.1:1")),
    });

    let response = server.get("/cat.jpg").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(response.text().starts_with("invalid request URL:"));
}

#[tokio::test]
async fn test_transform_failures_map_to_bad_request() {
    let engine = FakeEngine::new(400, 200, ".jpeg").failing_at(FailAt::Transform);
    let server = proxy_for(engine, StatusCode::OK, Bytes::from_static(b"img")).await;

    let response = server.get("/cat.jpg").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.text(), "error transforming image, encode failed");
}
