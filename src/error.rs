// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong between fetching a ranking page and writing
/// the export. Per-URL variants are caught by the collector; the rest reach
/// the binary.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("could not build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("invalid URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("invalid structural query {query:?}: {reason}")]
    Selector { query: String, reason: String },

    #[error("{field} for row {row} not found at {path}")]
    Structure {
        field: &'static str,
        row: usize,
        path: String,
    },

    #[error("no records collected; every URL failed")]
    NoRecords,

    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read URL list {}: {source}", path.display())]
    UrlList {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ScrapeError {
    /// Short tag used in log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            ScrapeError::Network { .. } => "network",
            ScrapeError::Client(_) => "client",
            ScrapeError::InvalidUrl { .. } => "url",
            ScrapeError::Selector { .. } | ScrapeError::Structure { .. } => "structure",
            ScrapeError::NoRecords => "aggregation",
            ScrapeError::Io { .. } => "io",
            ScrapeError::UrlList { .. } => "config",
        }
    }
}
