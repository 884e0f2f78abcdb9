use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// The word list could not be read from disk
///
/// Carries the path that was attempted so the server log says which file is
/// missing; the HTTP body never includes it.
#[derive(Debug)]
pub struct LoadError {
    pub path: PathBuf,
    pub source: io::Error,
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to read words file {}: {}", self.path.display(), self.source)
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.source)
    }
}

/// User-facing failures of a session action
///
/// None of these mutate session state; the action is simply refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Round size was not a positive integer
    InvalidRoundSize(String),

    /// The word library is empty (or not loaded yet)
    EmptyStore,

    /// The word list could not be fetched by the client
    FetchFailure(String),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::InvalidRoundSize(input) => {
                write!(f, "Please enter a valid number of words (got {:?})", input)
            }
            SessionError::EmptyStore => write!(f, "The word library is empty, cannot start"),
            SessionError::FetchFailure(reason) => write!(f, "Failed to load words: {}", reason),
        }
    }
}

impl Error for SessionError {}
