// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    /// Ranking pages to scrape, in output order.
    pub urls: Vec<String>,
    /// Per-request timeout. `None` leaves the client without one.
    pub timeout: Option<Duration>,
    pub export: ExportOptions,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            urls: DEFAULT_URLS.iter().map(|u| s!(*u)).collect(),
            timeout: None,
            export: ExportOptions::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub out_path: PathBuf,
    pub include_headers: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            out_path: PathBuf::from(DEFAULT_OUT_FILE),
            include_headers: true,
        }
    }
}

impl ExportOptions {
    pub fn delim(&self) -> char {
        self.format.delim()
    }

    pub fn headers(&self) -> Option<Vec<String>> {
        self.include_headers
            .then(|| HEADERS.iter().map(|h| s!(*h)).collect())
    }
}
