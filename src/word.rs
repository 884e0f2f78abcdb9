use serde::{Deserialize, Serialize};

/// A single vocabulary entry as served by the word endpoint
///
/// `word` is the identity key: it is trimmed, lowercased and unique within a
/// loaded word list. Serializes as exactly `{"word": ..., "meaning": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    /// Lowercased, trimmed headword
    pub word: String,

    /// Free-form meaning text, may itself contain commas
    pub meaning: String,
}

impl WordEntry {
    pub fn new(word: impl Into<String>, meaning: impl Into<String>) -> Self {
        WordEntry {
            word: word.into(),
            meaning: meaning.into(),
        }
    }
}
