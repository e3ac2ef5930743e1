use std::path::PathBuf;

mod dataset;
mod entry;
mod history;
mod index;
mod normalize;

pub use dataset::{fallback_index, DatasetDocument, DatasetLoader, DatasetSource};
pub use entry::{Definition, Meaning, WordEntry};
pub use history::{HistoryLog, MAX_HISTORY};
pub use index::{NotFound, WordIndex, DEFAULT_SUGGESTION_LIMIT};
pub use normalize::normalize;

/// Why a dataset could not be loaded.
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("failed to fetch dataset: {0}")]
    Fetch(reqwest::Error),
    #[error("dataset request returned {0}")]
    Status(reqwest::StatusCode),
    #[error("failed to decode dataset response: {0}")]
    Deserialize(reqwest::Error),
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid dataset: {0}")]
    Parse(serde_json::Error),
}
