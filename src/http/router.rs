use crate::app_context::AppContext;
use crate::pipeline::engine::ImageEngine;
use crate::renditions;
use axum::routing::get;
use axum::Router;

/// Builds the two-route surface: the favicon shortcut and a catch-all that
/// treats every other path as an origin image path.
pub fn new<E>(app_context: AppContext<E>) -> Router
where
    E: ImageEngine + Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/favicon.ico", get(renditions::handlers::favicon))
        .fallback(renditions::handlers::rendition::<E>)
        .with_state(app_context)
        .layer(axum::middleware::from_fn(crate::http::middleware::tracing))
}
