#![cfg(not(tarpaulin_include))]

use flashcards::app;
use flashcards::config::Config;

/// Main entry point for the flashcard web server
///
/// Serves the word list at `/api/words` and the browser client from the
/// public directory.
///
/// # Configuration
/// * First argument or `FLASHCARDS_CSV` - word list path (default `data/index.csv`)
/// * `FLASHCARDS_PUBLIC` - static asset directory (default `public`)
/// * `FLASHCARDS_ADDR` - bind address (default `127.0.0.1:3000`)
/// * `RUST_LOG` - log filter (default `info`)
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env();
    app::run(config).await
}
