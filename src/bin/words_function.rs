#![cfg(not(tarpaulin_include))]

use flashcards::config::Config;
use flashcards::function;

/// One invocation of the word endpoint as a standalone function
///
/// Reads the configured word list, then prints the response envelope
/// (`statusCode`, `headers`, `body`) as JSON on stdout.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env();
    let response = function::handle(&config.csv_path);
    println!("{}", serde_json::to_string(&response)?);

    Ok(())
}
