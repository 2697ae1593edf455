// src/runner.rs
use std::path::PathBuf;

use crate::{
    config::options::ScrapeOptions,
    core::net::Fetch,
    error::ScrapeError,
    file::write_table,
    progress::Progress,
    scrape::{collect_ranks, current_year},
};

/// Summary of what was produced.
#[derive(Debug)]
pub struct RunSummary {
    pub file_written: PathBuf,
    pub records: usize,
    pub failed: Vec<String>,
}

/// Top-level runner: collect every page, then write the export.
/// `progress` can be None (no UI updates) or Some(&mut impl Progress).
///
/// Fails with [`ScrapeError::NoRecords`] without touching the output file
/// when every page was skipped.
pub fn run(
    opts: &ScrapeOptions,
    fetcher: &dyn Fetch,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, ScrapeError> {
    let year = current_year();
    let batch = collect_ranks(
        &opts.urls,
        fetcher,
        year,
        progress.as_mut().map(|p| &mut **p as &mut dyn Progress),
    );

    if batch.records.is_empty() {
        return Err(ScrapeError::NoRecords);
    }

    let path = write_table(&opts.export, &batch.records)?;
    tracing::info!(
        path = %path.display(),
        records = batch.records.len(),
        failed = batch.failed.len(),
        "export written"
    );

    if let Some(p) = progress.as_deref_mut() {
        p.saved(&path);
    }

    Ok(RunSummary {
        file_written: path,
        records: batch.records.len(),
        failed: batch.failed,
    })
}
