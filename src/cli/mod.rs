use clap::Parser;


#[derive(Debug, Parser)]
pub struct Args {
    /// TCP address to listen on.
    #[arg(long)]
    #[arg(default_value = "localhost:8080")]
    pub addr: String,
    /// Base URL prepended to incoming request paths to form origin URLs.
    #[arg(long)]
    #[arg(default_value = "")]
    pub base_url: String,
}
