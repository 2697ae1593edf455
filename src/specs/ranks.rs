// src/specs/ranks.rs
//! Scraping *spec* for a university ranking page (`/uni/<slug>/`).
//!
//! Purpose:
//! - Read the four scoped rank figures from the first ranking table:
//!   `#content > div > main > article > section[1] > table > tbody > tr[n] > td`,
//!   where `span[2]` holds the rank ("#1,523") and `span[3]` the total ("of 14,131").
//! - Row `n` is mapped to a [`Scope`] by [`SCOPE_ROWS`].
//!
//! Responsibilities:
//! - Parse raw markup with `scraper`.
//! - Return exactly four [`ScopeRank`]s in `SCOPE_ROWS` order, or fail.
//!
//! Non-Responsibilities:
//! - **No networking.** The caller hands in the body bytes.
//! - **No naming / dating.** University name and year are attached by the collector.
//!
//! The path is positional on purpose: if the site moves the table, a row goes
//! missing, or an interstitial page is served instead, extraction fails with
//! [`ScrapeError::Structure`] and the whole page is skipped. Unreadable digits
//! inside an existing span are not a failure; they come back as `None`.
//!
//! The HTML5 parser inserts the implied `<tbody>`, so a table written without
//! one still matches the `table > tbody` step.

use scraper::Html;

use crate::core::html::{first_match, text_content, Step, StructuralPath};
use crate::core::sanitize::extract_digits;
use crate::data::{Scope, ScopeRank};
use crate::error::ScrapeError;

/// Table row (1-based) → scope.
pub const SCOPE_ROWS: [(usize, Scope); 4] = [
    (1, Scope::World),
    (2, Scope::Asia),
    (3, Scope::Country),
    (4, Scope::City),
];

const ANCHOR_ID: &str = "content";

const TABLE_PATH: [Step; 6] = [
    Step::any("div"),
    Step::any("main"),
    Step::any("article"),
    Step::nth("section", 1),
    Step::any("table"),
    Step::any("tbody"),
];

/// Named cell fields and the span they live in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub span: usize,
}

pub const RANK: Field = Field { name: "rank", span: 2 };
pub const TOTAL: Field = Field { name: "total_ranked", span: 3 };

pub fn field_path(row: usize, field: Field) -> StructuralPath {
    StructuralPath::new(ANCHOR_ID)
        .extend(&TABLE_PATH)
        .then(Step::nth("tr", row))
        .then(Step::any("td"))
        .then(Step::nth("span", field.span))
}

pub fn extract_ranks(body: &[u8]) -> Result<Vec<ScopeRank>, ScrapeError> {
    let markup = String::from_utf8_lossy(body);
    let doc = Html::parse_document(&markup);
    parse_doc(&doc)
}

pub fn parse_doc(doc: &Html) -> Result<Vec<ScopeRank>, ScrapeError> {
    SCOPE_ROWS
        .iter()
        .map(|&(row, scope)| {
            let rank = read_field(doc, row, RANK)?;
            let total_ranked = read_field(doc, row, TOTAL)?;
            Ok(ScopeRank { scope, rank, total_ranked })
        })
        .collect()
}

fn read_field(doc: &Html, row: usize, field: Field) -> Result<Option<u32>, ScrapeError> {
    let path = field_path(row, field);
    let el = first_match(doc, &path)?.ok_or_else(|| ScrapeError::Structure {
        field: field.name,
        row,
        path: path.to_css(),
    })?;
    let text = text_content(el);
    tracing::trace!(row, field = field.name, text = %text, "cell");
    Ok(extract_digits(&text))
}
