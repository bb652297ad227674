mod fetch_error;
mod fetcher;

use tracing_subscriber::EnvFilter;

fn init_tracing() {
    // Quiet unless RUST_LOG asks for more, so stderr only carries real errors
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();
    init_tracing();

    fetcher::run().await;
}
