use crate::cli::Args;
use clap::Parser;

mod app_context;
mod cli;
mod fetch;
mod http;
mod logging;
mod pipeline;
mod query_params;
mod renditions;

#[tokio::main]
async fn main() {
    let args = Args::parse();
    logging::init();
    let app_context = app_context::init(&args);
    let router = crate::http::router::new(app_context);
    let listener = tokio::net::TcpListener::bind(&args.addr)
        .await
        .expect("Failed to bind the listening address.");
    tracing::info!(addr = %args.addr, base_url = %args.base_url, "Starting server.");
    axum::serve(listener, router).await.expect("Server failed.");
}
