// src/core/sanitize.rs
use url::Url;

use crate::error::ScrapeError;

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Zero code points of the decimal digit blocks that show up in scraped
/// text. Each block holds ten consecutive digits.
const DIGIT_ZEROS: [u32; 12] = [
    0x0030, // ASCII
    0x0660, // Arabic-Indic
    0x06F0, // Extended Arabic-Indic
    0x0966, // Devanagari
    0x09E6, // Bengali
    0x0BE6, // Tamil
    0x0E50, // Thai
    0x0ED0, // Lao
    0x0F20, // Tibetan
    0x1040, // Myanmar
    0x17E0, // Khmer
    0xFF10, // Fullwidth
];

fn decimal_value(c: char) -> Option<u32> {
    let cp = c as u32;
    DIGIT_ZEROS
        .iter()
        .find_map(|&zero| cp.checked_sub(zero).filter(|d| *d < 10))
}

/// Keep only decimal digits (any script in `DIGIT_ZEROS`) and read them as one number.
/// `"1,234"` → 1234, `"#007"` → 7, `"١٢٣"` → 123. No digits (or overflow) → `None`.
pub fn extract_digits(s: &str) -> Option<u32> {
    let mut seen = false;
    let mut n: u32 = 0;
    for d in s.trim().chars().filter_map(decimal_value) {
        seen = true;
        n = n.checked_mul(10)?.checked_add(d)?;
    }
    seen.then_some(n)
}

/// Uppercase the first char of every whitespace-delimited word, lowercase the rest.
/// Whitespace is copied through untouched, runs included.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut word_start = true;
    for ch in s.chars() {
        if ch.is_whitespace() {
            out.push(ch);
            word_start = true;
        } else if word_start {
            out.extend(ch.to_uppercase());
            word_start = false;
        } else {
            out.extend(ch.to_lowercase());
        }
    }
    out
}

/// Institution name from the last path segment of its ranking URL:
/// `https://edurank.org/uni/ahmad-dahlan-university/` → `Ahmad Dahlan University`.
pub fn university_name(url: &str) -> Result<String, ScrapeError> {
    let parsed = Url::parse(url).map_err(|source| ScrapeError::InvalidUrl {
        url: s!(url),
        source,
    })?;
    let slug = parsed
        .path()
        .trim_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or("");
    Ok(title_case(&slug.replace('-', " ")))
}
