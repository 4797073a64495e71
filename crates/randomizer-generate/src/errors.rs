use std::path::PathBuf;

use thiserror::Error;

/// Errors emitted while loading word lists or generating addresses.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("asset error: {0}")]
    Asset(String),
    #[error("asset not found: {}", path.display())]
    MissingAsset { path: PathBuf },
    #[error("word list is empty: {0}")]
    EmptyWordList(String),
    #[error("word list not loaded: {0}")]
    MissingWordList(String),
    #[error("word lists {states} and {codes} are not aligned ({state_count} vs {code_count} entries)")]
    MisalignedWordLists {
        states: String,
        codes: String,
        state_count: usize,
        code_count: usize,
    },
    #[error("country has no address builder: {0}")]
    UnhandledCountry(String),
}
