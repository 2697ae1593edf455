// src/specs/mod.rs
//! # Scraping “specs” module
//!
//! This module hosts the **page-specific scraping specifications** for the site.
//! Each spec focuses on a single page template and encodes *where the ground truth
//! lives in the HTML* and *how to read it*.
//!
//! ## What lives here
//! - **Pure HTML parsing** of already-fetched markup.
//! - **Structural paths** (`core::html::StructuralPath`) naming the exact nodes read.
//! - **Light shaping** of results into small typed structs (`data::ScopeRank`).
//!
//! ## What does **not** live here
//! - **Networking** – `core::net` fetches, the collector decides when.
//! - **Export formatting** – `csv` / `file`.
//! - **Failure policy** – specs return typed errors; `scrape::collect_ranks`
//!   decides that a failed page is skipped.
//!
//! ## Typical call chain
//! ```text
//! runner → scrape::collect_ranks → Fetch::fetch(url)
//!                                ↘ specs::ranks::extract_ranks(body)
//!        → file::write_table
//! ```
//!
//! ## Testing notes
//! - Specs are testable **offline** against captured fixtures (`tests/fixtures/`).
pub mod ranks;
