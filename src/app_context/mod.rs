use crate::cli::Args;
use crate::fetch::OriginFetcher;
use crate::pipeline::raster::RasterEngine;

/// Immutable per-process state handed to every request handler. Generic
/// over the engine so tests can substitute a recording fake.
#[derive(Clone)]
pub struct AppContext<E> {
    pub engine: E,
    pub fetcher: OriginFetcher,
}

pub fn init(args: &Args) -> AppContext<RasterEngine> {
    AppContext {
        engine: RasterEngine,
        fetcher: OriginFetcher::new(args.base_url.clone()),
    }
}
