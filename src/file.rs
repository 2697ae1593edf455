// src/file.rs

use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::config::options::ExportOptions;
use crate::csv::write_records;
use crate::data::RankRecord;
use crate::error::ScrapeError;

/// Write the export file described by `export`, truncating any previous one.
/// Returns the final path written to.
pub fn write_table(export: &ExportOptions, records: &[RankRecord]) -> Result<PathBuf, ScrapeError> {
    let path = export.out_path.clone();
    let io_err = |source| ScrapeError::Io { path: path.clone(), source };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent).map_err(io_err)?;
        }
    }

    let file = File::create(&path).map_err(io_err)?; // truncate/overwrite
    let mut out = BufWriter::new(file);
    let headers = export.headers();
    write_records(&mut out, headers.as_deref(), records, export.delim()).map_err(io_err)?;
    out.flush().map_err(io_err)?;
    Ok(path)
}

pub fn ensure_directory(dir: &Path) -> io::Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("Path exists but is not a directory: {}", dir.display()),
        ));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

/// One URL per line; blank lines and `#` comments are skipped.
pub fn read_url_list(path: &Path) -> Result<Vec<String>, ScrapeError> {
    let text = fs::read_to_string(path).map_err(|source| ScrapeError::UrlList {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_url_list(&text))
}

pub fn parse_url_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .map(String::from)
        .collect()
}
