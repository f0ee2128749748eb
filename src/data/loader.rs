//! Sample File Loader Module
//! Reads newline-delimited numeric values from a text file.

use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("cannot open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A non-blank line that did not parse as a number.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedLine {
    /// 1-based line number in the source file.
    pub line_number: usize,
    pub content: String,
}

/// Outcome of a successful load. `values` may be empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadReport {
    pub values: Vec<f64>,
    pub skipped: Vec<SkippedLine>,
}

impl LoadReport {
    /// One-line summary for the status bar, naming the first rejected line.
    pub fn summary(&self) -> String {
        match self.skipped.first() {
            None => format!("Loaded {} values", self.values.len()),
            Some(first) => format!(
                "Loaded {} values ({} lines skipped, first at line {}: {:?})",
                self.values.len(),
                self.skipped.len(),
                first.line_number,
                first.content
            ),
        }
    }
}

/// Loads sample values, one per line.
pub struct SampleLoader;

impl SampleLoader {
    /// Load a text file of numeric values.
    pub fn load_file(path: &Path) -> Result<LoadReport, LoaderError> {
        let file = File::open(path).map_err(|source| LoaderError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let report = Self::parse_lines(file).map_err(|source| {
            LoaderError::Read {
                path: path.to_path_buf(),
                source,
            }
        })?;

        log::info!(
            "loaded {} values from {} ({} lines skipped)",
            report.values.len(),
            path.display(),
            report.skipped.len()
        );
        Ok(report)
    }

    /// Parse values from any UTF-8 source. Lines may end in `\n`, `\r\n` or a
    /// lone `\r`. Blank lines are ignored; lines that fail to parse are
    /// recorded and logged, and parsing continues.
    pub fn parse_lines<R: Read>(mut reader: R) -> io::Result<LoadReport> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;

        let mut report = LoadReport::default();
        for (index, line) in split_lines(&text).enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            match trimmed.parse::<f64>() {
                Ok(value) => report.values.push(value),
                Err(_) => {
                    let line_number = index + 1;
                    log::warn!("line {line_number} is not a number, skipped: {trimmed:?}");
                    report.skipped.push(SkippedLine {
                        line_number,
                        content: trimmed.to_string(),
                    });
                }
            }
        }

        Ok(report)
    }
}

/// Split on `\n`, `\r\n` and lone `\r`. A trailing terminator does not
/// start an extra line.
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        match rest.find(|c: char| c == '\r' || c == '\n') {
            Some(pos) => {
                let line = &rest[..pos];
                let skip = if rest[pos..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[pos + skip..];
                Some(line)
            }
            None => Some(std::mem::take(&mut rest)),
        }
    })
}
