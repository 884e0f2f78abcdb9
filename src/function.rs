//! On-demand variant of the word endpoint.
//!
//! Each invocation reads the word list once and returns the response envelope
//! a serverless platform expects (`statusCode`, `headers`, `body`). The body is
//! produced by the same code path as the HTTP server.

use crate::service::{self, WordsReply};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

impl From<WordsReply> for FunctionResponse {
    fn from(reply: WordsReply) -> Self {
        let mut headers = BTreeMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        FunctionResponse {
            status_code: reply.status,
            headers,
            body: reply.body,
        }
    }
}

/// Handle one invocation against the word list at `csv_path`
pub fn handle(csv_path: impl AsRef<Path>) -> FunctionResponse {
    service::fetch_words(csv_path).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::{load_words, words_json};
    use std::fs;

    #[test]
    fn body_matches_server_serialization() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.csv");
        fs::write(&path, "word,meaning\ncat,a small feline\ndog,a loyal friend\n").unwrap();

        let response = handle(&path);
        assert_eq!(response.status_code, 200);
        assert_eq!(response.body, words_json(&load_words(&path).unwrap()).unwrap());
        assert_eq!(
            response.headers.get("Content-Type").map(String::as_str),
            Some("application/json")
        );
    }

    #[test]
    fn envelope_field_names() {
        let dir = tempfile::tempdir().unwrap();
        let response = handle(dir.path().join("missing.csv"));
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["statusCode"], 500);
        assert_eq!(json["body"], r#"{"error":"Failed to read words file."}"#);
    }
}
