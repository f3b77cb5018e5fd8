use crate::snapshot::ItemId;
use thiserror::Error;

/// Top-level error type shared by every `coolbar` crate.
#[derive(Debug, Error)]
pub enum CoolBarError {
    /// An index fell outside `0..len` (or `0..=len` for insertion points).
    #[error("index {index} out of range (len {len})")]
    InvalidRange { index: usize, len: usize },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The item was destroyed, or never belonged to this bar.
    #[error("item {0} is disposed")]
    Disposed(ItemId),

    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("layout snapshot error: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },
}

pub type Result<T, E = CoolBarError> = std::result::Result<T, E>;
