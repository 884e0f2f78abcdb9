use crate::error::LoadError;
use crate::loader::{error_json, load_words, words_json};
use crate::word::WordEntry;
use std::path::Path;

pub const STATUS_OK: u16 = 200;
pub const STATUS_INTERNAL_ERROR: u16 = 500;

/// Status and JSON body for one call of the word endpoint
///
/// Shared by the HTTP server and the function variant so both answer with the
/// same bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordsReply {
    pub status: u16,
    pub body: String,
}

impl WordsReply {
    /// 500 with the generic failure body
    pub fn internal_error() -> Self {
        WordsReply {
            status: STATUS_INTERNAL_ERROR,
            body: error_json(),
        }
    }
}

/// Turn a load result into the endpoint reply, logging the outcome
pub fn reply(result: Result<Vec<WordEntry>, LoadError>) -> WordsReply {
    match result {
        Ok(words) => match words_json(&words) {
            Ok(body) => {
                log::info!("CSV read complete. Total unique words sent: {}", words.len());
                WordsReply {
                    status: STATUS_OK,
                    body,
                }
            }
            Err(e) => {
                log::error!("Error serializing the word list: {}", e);
                WordsReply::internal_error()
            }
        },
        Err(e) => {
            log::error!("Error reading the CSV file: {}", e);
            WordsReply::internal_error()
        }
    }
}

/// Read `csv_path` fresh and build the reply
pub fn fetch_words(csv_path: impl AsRef<Path>) -> WordsReply {
    reply(load_words(csv_path))
}
