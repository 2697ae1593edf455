// src/progress.rs
use std::io::Write;
use std::path::Path;

use crate::error::ScrapeError;

/// Lightweight progress reporting used by the scrape run.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// One page was fetched and all four scopes were read.
    fn item_done(&mut self, _url: &str) {}

    /// One page was skipped.
    fn item_failed(&mut self, _url: &str, _err: &ScrapeError) {}

    /// The export file was written.
    fn saved(&mut self, _path: &Path) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Plain text lines, one per URL plus a completion line.
/// The CLI hands it stdout.
pub struct ConsoleProgress<W: Write> {
    out: W,
}

impl<W: Write> ConsoleProgress<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

// Write errors on the console are ignored.
impl<W: Write> Progress for ConsoleProgress<W> {
    fn item_done(&mut self, url: &str) {
        let _ = writeln!(self.out, "Scraped: {url}");
    }

    fn item_failed(&mut self, url: &str, err: &ScrapeError) {
        let _ = writeln!(self.out, "Failed to scrape {url}: {err}");
    }

    fn saved(&mut self, path: &Path) {
        let _ = writeln!(self.out, "All data saved to {}", path.display());
    }
}
