use std::env;
use std::path::PathBuf;

pub const DEFAULT_CSV_PATH: &str = "data/index.csv";
pub const DEFAULT_PUBLIC_DIR: &str = "public";
pub const DEFAULT_ADDR: &str = "127.0.0.1:3000";

/// Runtime settings for the server and the function binary
///
/// Every field has a default so the binaries run with no setup from the
/// repository root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Word list to read on every request
    pub csv_path: PathBuf,

    /// Directory served for every path other than the API
    pub public_dir: PathBuf,

    /// Address the server binds to
    pub addr: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            csv_path: PathBuf::from(DEFAULT_CSV_PATH),
            public_dir: PathBuf::from(DEFAULT_PUBLIC_DIR),
            addr: DEFAULT_ADDR.to_string(),
        }
    }
}

impl Config {
    /// Read `FLASHCARDS_CSV`, `FLASHCARDS_PUBLIC` and `FLASHCARDS_ADDR`
    ///
    /// A first command-line argument, when present, overrides the CSV path.
    pub fn from_env() -> Self {
        let arg = env::args().nth(1);
        Self::from_sources(arg, |key| env::var(key).ok())
    }

    fn from_sources(arg: Option<String>, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Config::default();
        let csv_path = arg
            .or_else(|| lookup("FLASHCARDS_CSV"))
            .map(PathBuf::from)
            .unwrap_or(defaults.csv_path);
        let public_dir = lookup("FLASHCARDS_PUBLIC")
            .map(PathBuf::from)
            .unwrap_or(defaults.public_dir);
        let addr = lookup("FLASHCARDS_ADDR").unwrap_or(defaults.addr);

        Config {
            csv_path,
            public_dir,
            addr,
        }
    }
}
