use axum::{
    Router,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;

use crate::config::Config;
use crate::error::LoadError;
use crate::loader::parse_words;
use crate::service::{self, WordsReply};

pub struct AppState {
    csv_path: PathBuf,
}

/// Build the router: the word endpoint plus static assets for everything else
pub fn router(config: &Config) -> Router {
    let app_state = Arc::new(AppState {
        csv_path: config.csv_path.clone(),
    });

    Router::new()
        .route("/api/words", get(get_words))
        .fallback_service(ServeDir::new(&config.public_dir))
        .with_state(app_state)
}

pub async fn run(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let app = router(&config);

    let listener = TcpListener::bind(config.addr.as_str()).await?;
    log::info!("Flashcards running, visit http://{}", config.addr);
    log::info!("Serving words from {}", config.csv_path.display());
    axum::serve(listener, app).await?;

    Ok(())
}

// The file is re-read on every request so edits show up without a restart.
async fn get_words(State(state): State<Arc<AppState>>) -> Response {
    let result = tokio::fs::read_to_string(&state.csv_path)
        .await
        .map(|text| parse_words(&text))
        .map_err(|source| LoadError {
            path: state.csv_path.clone(),
            source,
        });

    json_response(service::reply(result))
}

fn json_response(reply: WordsReply) -> Response {
    let status = StatusCode::from_u16(reply.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, [(header::CONTENT_TYPE, "application/json")], reply.body).into_response()
}
