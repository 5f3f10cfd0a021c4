use crate::app_context::AppContext;
use crate::pipeline::driver;
use crate::pipeline::engine::ImageEngine;
use crate::renditions::requests::TransformRequest;
use crate::renditions::responses;
use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::response::Response;
use tokio::task;

/// Catch-all proxy handler: fetches the origin image named by the path,
/// resizes it per the query and streams the rendition back.
pub async fn rendition<E>(State(app_context): State<AppContext<E>>, uri: Uri) -> Response
where
    E: ImageEngine + Clone + Send + Sync + 'static,
{
    let request = TransformRequest::new(uri.path(), uri.query());

    let source = match app_context.fetcher.fetch(&request.path).await {
        Ok(body) => body,
        Err(err) => {
            tracing::error!(path = %request.path, error = %err, "Origin fetch failed.");
            return responses::bad_request(err);
        }
    };

    // The engine call is CPU-bound, potentially for seconds on large
    // sources, so it runs off the async workers.
    let engine = app_context.engine.clone();
    let rendered = task::spawn_blocking(move || {
        driver::render(&engine, source, request.width, request.height)
    })
    .await;

    match rendered {
        Ok(Ok(rendition)) => {
            tracing::info!(
                output_width = rendition.width,
                output_height = rendition.height,
                output_bytes = rendition.bytes.len(),
                "Produced rendition."
            );
            responses::rendition(rendition)
        }
        Ok(Err(err)) => {
            tracing::error!(error = %err, "Pipeline failed.");
            responses::bad_request(err)
        }
        Err(err) => {
            tracing::error!(error = %err, "Transform task failed.");
            responses::internal_error()
        }
    }
}

#[axum::debug_handler]
pub async fn favicon() -> StatusCode {
    StatusCode::NOT_FOUND
}
