// src/scrape.rs
use chrono::Datelike;

use crate::{
    core::{net::Fetch, sanitize::university_name},
    data::RankRecord,
    error::ScrapeError,
    progress::Progress,
    specs::ranks,
};

pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Name, fetch and read one ranking page. Any error aborts the whole page.
/// A URL that does not parse is rejected before any request goes out.
pub fn scrape_university(
    fetcher: &dyn Fetch,
    url: &str,
    year: i32,
) -> Result<Vec<RankRecord>, ScrapeError> {
    let name = university_name(url)?;
    let body = fetcher.fetch(url)?;
    let scopes = ranks::extract_ranks(&body)?;

    Ok(scopes
        .into_iter()
        .map(|sr| RankRecord::new(&name, year, sr))
        .collect())
}

/// Records of every page that made it, plus the URLs that did not.
#[derive(Debug, Default)]
pub struct Batch {
    pub records: Vec<RankRecord>,
    pub failed: Vec<String>,
}

/// Scrape every URL in order. Failed pages are reported and skipped;
/// records keep URL order, four per page, in scope order.
pub fn collect_ranks(
    urls: &[String],
    fetcher: &dyn Fetch,
    year: i32,
    mut progress: Option<&mut dyn Progress>,
) -> Batch {
    let mut batch = Batch {
        records: Vec::with_capacity(urls.len() * ranks::SCOPE_ROWS.len()),
        failed: Vec::new(),
    };

    for url in urls {
        match scrape_university(fetcher, url, year) {
            Ok(mut rows) => {
                tracing::debug!(url = %url, rows = rows.len(), "scraped");
                batch.records.append(&mut rows);
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(url);
                }
            }
            Err(e) => {
                tracing::warn!(url = %url, kind = e.kind(), error = %e, "skipping page");
                if let Some(p) = progress.as_deref_mut() {
                    p.item_failed(url, &e);
                }
                batch.failed.push(url.clone());
            }
        }
    }

    batch
}
