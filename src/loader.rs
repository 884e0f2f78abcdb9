use crate::error::LoadError;
use crate::word::WordEntry;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Message returned to clients when the word list cannot be read
pub const LOAD_FAILURE_MESSAGE: &str = "Failed to read words file.";

/// Parse a word list from CSV text
///
/// The first line is a header and is always discarded. Blank lines are skipped.
/// Column 0 is the word (trimmed, lowercased); every following column is joined
/// back with `,` to form the meaning, since meanings may contain commas.
/// Lines without a comma, or with an empty word, are dropped.
///
/// When a word appears more than once the last meaning wins, but the entry keeps
/// the position of its first occurrence.
///
/// # Arguments
/// * `text` - Raw file contents
///
/// # Returns
/// * `Vec<WordEntry>` - Deduplicated entries
///
/// # Examples
/// ```
/// use flashcards::loader::parse_words;
///
/// let words = parse_words("word,meaning\nRun, ran,to move quickly\n");
/// assert_eq!(words[0].word, "run");
/// assert_eq!(words[0].meaning, "ran,to move quickly");
/// ```
pub fn parse_words(text: &str) -> Vec<WordEntry> {
    let mut entries: Vec<WordEntry> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for line in text.split('\n').skip(1) {
        if line.trim().is_empty() {
            continue;
        }

        let Some(entry) = parse_line(line) else {
            continue;
        };

        match positions.get(&entry.word) {
            Some(&index) => entries[index].meaning = entry.meaning,
            None => {
                positions.insert(entry.word.clone(), entries.len());
                entries.push(entry);
            }
        }
    }

    entries
}

// Split one data row into word and meaning
fn parse_line(line: &str) -> Option<WordEntry> {
    let (word, meaning) = line.split_once(',')?;
    let word = word.trim().to_lowercase();
    if word.is_empty() {
        return None;
    }

    Some(WordEntry {
        word,
        meaning: meaning.trim().to_string(),
    })
}

/// Read and parse the word list at `filepath`
///
/// The file is read in full on every call; nothing is cached.
///
/// # Errors
/// * `LoadError` if the file is missing, unreadable, or not UTF-8
///
/// # Examples
/// ```no_run
/// use flashcards::loader::load_words;
///
/// match load_words("data/index.csv") {
///     Ok(words) => println!("Loaded {} words", words.len()),
///     Err(e) => eprintln!("Error loading words: {}", e),
/// }
/// ```
pub fn load_words(filepath: impl AsRef<Path>) -> Result<Vec<WordEntry>, LoadError> {
    let path = filepath.as_ref();
    let text = fs::read_to_string(path).map_err(|source| LoadError {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(parse_words(&text))
}

/// Serialize a word list to the JSON body served by every deployment
///
/// Both the always-on server and the function variant go through here so
/// their bodies are byte-identical for the same input.
///
/// # Errors
/// * `serde_json::Error` if serialization fails; callers answer with a 500
pub fn words_json(words: &[WordEntry]) -> Result<String, serde_json::Error> {
    serde_json::to_string(words)
}

/// JSON body sent alongside a 500 when the word list cannot be read
pub fn error_json() -> String {
    serde_json::json!({ "error": LOAD_FAILURE_MESSAGE }).to_string()
}
