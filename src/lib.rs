/*!
# Flashcards

A vocabulary flashcard trainer: a small Rust server hands out a CSV word list as
JSON, and a browser client runs flashcard rounds over it.

## Architecture

### Backend
- **Technologies**: Rust, axum, tokio
- **Key Components**:
  - Word Store Loader - Splits, trims, lowercases and deduplicates the CSV rows
  - Word Service - `GET /api/words`, re-reading the file on every call
  - Function variant - The same endpoint as a one-shot invocation that prints a
    serverless response envelope

### Frontend Layer
- **Technologies**: HTML, JavaScript, WebAssembly
- **Key Components**:
  - Session Controller - Round setup, shuffling, cursor movement
  - History Tracker - Revealed words, "marked" flags, pagination
  - View Projection - Plain data the page copies onto elements
  - Graph - Words sharing a root linked into cliques, highlight and drag state;
    the physics and drawing stay in the page's graph library

All client state lives in memory and is gone on reload.

## Source file format

UTF-8 text, comma separated. The first line is a header and is skipped. Column 0
is the word; the rest of the line is the meaning, commas included.

```text
word,meaning
run,ran,to move quickly
cat,a small feline
```

## Modules

- **word**: `WordEntry`, the unit served to clients
- **loader**: CSV parsing and the shared JSON serializer
- **service**: status/body pair for the word endpoint
- **function**: serverless response envelope
- **config**: environment-driven settings
- **history**: ordered, deduplicated reveal history and paging
- **session**: round state machine and events
- **view**: render-ready projection of the session
- **graph**: node/link shaping, highlight and drag pins
- **app**: axum router and server loop (feature `web`)
- **wasm_api**: browser binding (feature `wasm`)

## REST API Endpoints

- `GET /api/words` - Every word as `[{"word": ..., "meaning": ...}]`, or a 500
  with `{"error": "Failed to read words file."}`
- Anything else - static files from the public directory
*/

pub mod config;
pub mod error;
pub mod function;
pub mod graph;
pub mod history;
pub mod loader;
pub mod service;
pub mod session;
pub mod view;
pub mod word;

#[cfg(feature = "web")]
pub mod app;

#[cfg(feature = "wasm")]
pub mod wasm_api;

/// Re-export the types most callers need
pub use error::{LoadError, SessionError};
pub use graph::{GraphData, GraphState, RootedWord, build_graph};
pub use history::{History, HistoryEntry, HistoryPage};
pub use loader::{load_words, parse_words, words_json};
pub use session::{Event, Outcome, SessionState, Trainer};
pub use view::View;
pub use word::WordEntry;
