// src/cli.rs
use std::{path::PathBuf, time::Duration};

use clap::{Parser, ValueEnum};

use crate::config::options::{ExportFormat, ScrapeOptions};
use crate::core::net::HttpFetcher;
use crate::error::ScrapeError;
use crate::file::read_url_list;
use crate::progress::ConsoleProgress;
use crate::runner::{self, RunSummary};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Csv,
    Tsv,
}

impl From<Format> for ExportFormat {
    fn from(f: Format) -> Self {
        match f { Format::Csv => ExportFormat::Csv, Format::Tsv => ExportFormat::Tsv }
    }
}

/// Scrape World/Asia/national/City ranks from EduRank university pages.
///
/// Without arguments the built-in batch is scraped into `university_ranks.csv`.
#[derive(Debug, Parser)]
#[command(name = "edurank_scrape", version, about)]
pub struct Args {
    /// University page to scrape (repeatable). Replaces the built-in batch.
    #[arg(short, long = "url", value_name = "URL")]
    pub urls: Vec<String>,

    /// File with one URL per line (`#` starts a comment). Appended after --url.
    #[arg(long, value_name = "PATH")]
    pub urls_file: Option<PathBuf>,

    /// Output file (overwritten).
    #[arg(short, long, value_name = "PATH")]
    pub out: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = Format::Csv)]
    pub format: Format,

    /// Leave out the header row.
    #[arg(long)]
    pub no_headers: bool,

    /// Per-request timeout in seconds. Default: wait indefinitely.
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// More log output on stderr (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn into_options(self) -> Result<ScrapeOptions, ScrapeError> {
        let mut opts = ScrapeOptions::default();

        // Any explicit URL source replaces the built-in batch, even if it lists nothing.
        let supplied = !self.urls.is_empty() || self.urls_file.is_some();
        let mut urls = self.urls;
        if let Some(path) = &self.urls_file {
            urls.extend(read_url_list(path)?);
        }
        if supplied {
            opts.urls = urls;
        }

        if let Some(out) = self.out {
            opts.export.out_path = out;
        }
        opts.export.format = self.format.into();
        opts.export.include_headers = !self.no_headers;
        opts.timeout = self.timeout.map(Duration::from_secs);
        Ok(opts)
    }
}

pub fn run(args: Args) -> Result<RunSummary, ScrapeError> {
    crate::log::init(args.verbose);
    let opts = args.into_options()?;
    let fetcher = HttpFetcher::new(opts.timeout)?;
    let mut progress = ConsoleProgress::new(std::io::stdout());
    runner::run(&opts, &fetcher, Some(&mut progress))
}
