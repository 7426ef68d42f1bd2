// src/error.rs
use thiserror::Error;

/// A price cell that is not a number after cleaning.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unparsable price `{raw}` (cleaned to `{cleaned}`)")]
pub struct PriceError {
    pub raw: String,
    pub cleaned: String,
}

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("fetch failed: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("invalid selector `{0}`")]
    Selector(String),

    #[error("no player name cells found; the page layout may have changed")]
    NoPlayers,

    #[error("centered cell sequence of {len} cells is not a multiple of the record stride {stride}")]
    Misaligned { len: usize, stride: usize },

    #[error("data integrity: column `{column}` has {found} values, expected {expected}")]
    LengthMismatch {
        column: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("player {entry}: {source}")]
    Price {
        entry: usize,
        #[source]
        source: PriceError,
    },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
