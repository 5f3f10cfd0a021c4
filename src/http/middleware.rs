use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;

pub async fn tracing(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let start_time = Instant::now();
    let response = next.run(request).await;
    let elapsed_time = start_time.elapsed();

    tracing::info!(
        http_method = %method,
        endpoint = %path,
        status = %response.status(),
        processing_time_ms = elapsed_time.as_millis() as u64,
    );

    response
}
