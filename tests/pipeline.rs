// tests/pipeline.rs
//
// Collector + runner scenarios against in-memory pages (no network).
//
use std::collections::HashMap;
use std::fs;

use edurank_scrape::config::options::{ExportFormat, ExportOptions, ScrapeOptions};
use edurank_scrape::core::net::Fetch;
use edurank_scrape::progress::{ConsoleProgress, NullProgress};
use edurank_scrape::scrape::{collect_ranks, current_year};
use edurank_scrape::specs::ranks::{field_path, RANK};
use edurank_scrape::{runner, ScrapeError};

const PAGE: &str = include_str!("fixtures/university.html");
const DRIFTED: &str = r#"<html><body><div id="content"><main><p>New layout</p></main></div></body></html>"#;

const URLS: [&str; 3] = [
    "https://edurank.org/uni/muhammadiyah-university-of-surakarta/",
    "https://edurank.org/uni/muhammadiyah-university-of-yogyakarta/",
    "https://edurank.org/uni/ahmad-dahlan-university/",
];

/// Serves canned bodies; anything unknown gets a page without the ranking table.
struct FixtureFetcher {
    pages: HashMap<String, &'static str>,
}

impl FixtureFetcher {
    fn all(body: &'static str) -> Self {
        Self { pages: URLS.iter().map(|u| (u.to_string(), body)).collect() }
    }
}

impl Fetch for FixtureFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, ScrapeError> {
        Ok(self.pages.get(url).copied().unwrap_or(DRIFTED).as_bytes().to_vec())
    }
}

fn console() -> ConsoleProgress<Vec<u8>> {
    ConsoleProgress::new(Vec::new())
}

fn console_lines(console: ConsoleProgress<Vec<u8>>) -> Vec<String> {
    String::from_utf8(console.into_inner()).unwrap().lines().map(str::to_owned).collect()
}

fn options(out: &std::path::Path) -> ScrapeOptions {
    ScrapeOptions {
        urls: URLS.iter().map(|u| u.to_string()).collect(),
        timeout: None,
        export: ExportOptions { out_path: out.to_path_buf(), ..ExportOptions::default() },
    }
}

#[test]
fn all_pages_give_twelve_rows_in_url_order() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("university_ranks.csv");
    let mut con = console();

    let summary = runner::run(&options(&out), &FixtureFetcher::all(PAGE), Some(&mut con)).unwrap();
    assert_eq!(summary.records, 12);
    assert!(summary.failed.is_empty());
    assert_eq!(summary.file_written, out);

    let text = fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 13);
    assert_eq!(lines[0], "university,year,scope,rank,total_ranked");

    let year = current_year().to_string();
    let names = [
        "Muhammadiyah University Of Surakarta",
        "Muhammadiyah University Of Yogyakarta",
        "Ahmad Dahlan University",
    ];
    let scopes = ["World", "Asia", "Indonesia", "City"];
    for (i, line) in lines[1..].iter().enumerate() {
        let cells: Vec<&str> = line.split(',').collect();
        assert_eq!(cells[0], names[i / 4]);
        assert_eq!(cells[1], year);
        assert_eq!(cells[2], scopes[i % 4]);
    }
    assert_eq!(lines[1], format!("Muhammadiyah University Of Surakarta,{year},World,1523,14131"));

    assert_eq!(
        console_lines(con),
        [
            format!("Scraped: {}", URLS[0]),
            format!("Scraped: {}", URLS[1]),
            format!("Scraped: {}", URLS[2]),
            format!("All data saved to {}", out.display()),
        ]
    );
}

#[test]
fn drifted_page_is_skipped() {
    let mut fetcher = FixtureFetcher::all(PAGE);
    fetcher.pages.insert(URLS[1].to_string(), DRIFTED);
    let mut con = console();

    let batch = collect_ranks(
        &URLS.iter().map(|u| u.to_string()).collect::<Vec<_>>(),
        &fetcher,
        2025,
        Some(&mut con),
    );
    assert_eq!(batch.records.len(), 8);
    assert_eq!(batch.failed, [URLS[1]]);
    assert_eq!(batch.records[3].university, "Muhammadiyah University Of Surakarta");
    assert_eq!(batch.records[4].university, "Ahmad Dahlan University");
    assert!(batch.records.iter().all(|r| r.year == 2025));

    assert_eq!(
        console_lines(con),
        [
            format!("Scraped: {}", URLS[0]),
            format!(
                "Failed to scrape {}: rank for row 1 not found at {}",
                URLS[1],
                field_path(1, RANK).to_css()
            ),
            format!("Scraped: {}", URLS[2]),
        ]
    );
}

#[test]
fn partial_run_prints_failure_and_save_lines() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("university_ranks.csv");
    let mut fetcher = FixtureFetcher::all(PAGE);
    fetcher.pages.insert(URLS[2].to_string(), DRIFTED);
    let mut con = console();

    let summary = runner::run(&options(&out), &fetcher, Some(&mut con)).unwrap();
    assert_eq!(summary.records, 8);

    let lines = console_lines(con);
    assert_eq!(lines.len(), 4);
    assert!(lines[2].starts_with(&format!("Failed to scrape {}: ", URLS[2])));
    assert_eq!(lines[3], format!("All data saved to {}", out.display()));
}

#[test]
fn every_page_failing_is_fatal_and_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("university_ranks.csv");

    let err = runner::run(&options(&out), &FixtureFetcher::all(DRIFTED), None).unwrap_err();
    assert!(matches!(err, ScrapeError::NoRecords));
    assert!(!out.exists());
}

#[test]
fn empty_url_list_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let mut opts = options(&dir.path().join("r.csv"));
    opts.urls.clear();
    assert!(matches!(
        runner::run(&opts, &FixtureFetcher::all(PAGE), None),
        Err(ScrapeError::NoRecords)
    ));
}

#[test]
fn rerun_overwrites_with_identical_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("nested").join("ranks.csv");
    let opts = options(&out);
    let fetcher = FixtureFetcher::all(PAGE);

    runner::run(&opts, &fetcher, Some(&mut NullProgress)).unwrap();
    let first = fs::read(&out).unwrap();
    runner::run(&opts, &fetcher, None).unwrap();
    let second = fs::read(&out).unwrap();
    assert_eq!(first, second);
}

#[test]
fn tsv_without_headers() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("ranks.tsv");
    let mut opts = options(&out);
    opts.export.format = ExportFormat::Tsv;
    opts.export.include_headers = false;
    opts.urls.truncate(1);

    runner::run(&opts, &FixtureFetcher::all(PAGE), None).unwrap();
    let text = fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[2].ends_with("\tIndonesia\t27\t381"));
}
