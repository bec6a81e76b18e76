//! Loader for match tables: CSV files that list which residues are already matched.
//!
//! A row contributes its residue index to the [`ExclusionSet`] when its match
//! confidence reaches the threshold and the index is not the "no match"
//! sentinel. Rows with unusable cells are skipped and reported, never fatal.

use crate::core::models::ExclusionSet;
use std::fmt;
use std::io::Read;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info, warn};

pub const MATCHED_COLUMN: &str = "Matched";
pub const RESIDUE_INDEX_COLUMN: &str = "Residue Index";
pub const DEFAULT_THRESHOLD: f64 = 1.0;
pub const NO_MATCH_SENTINEL: isize = -1;

#[derive(Debug, Clone, PartialEq)]
pub struct MatchTableOptions {
    pub matched_column: String,
    pub residue_column: String,
    pub threshold: f64,
    pub sentinel: isize,
}

impl Default for MatchTableOptions {
    fn default() -> Self {
        Self {
            matched_column: MATCHED_COLUMN.to_string(),
            residue_column: RESIDUE_INDEX_COLUMN.to_string(),
            threshold: DEFAULT_THRESHOLD,
            sentinel: NO_MATCH_SENTINEL,
        }
    }
}

#[derive(Debug, Error)]
pub enum MatchTableError {
    #[error("Malformed input: missing required column(s) {}", .missing.join(", "))]
    MissingColumns { missing: Vec<String> },
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowIssue {
    #[error("missing value for '{column}'")]
    MissingValue { column: String },
    #[error("invalid number format for '{column}' (value: '{value}')")]
    InvalidNumber { column: String, value: String },
}

/// A row that was skipped while loading a match table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowParseWarning {
    pub line: u64,
    pub row: Vec<String>,
    pub issue: RowIssue,
}

impl fmt::Display for RowParseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {} in row {:?}", self.line, self.issue, self.row)
    }
}

/// The result of loading a match table.
///
/// A new load always produces a new table; callers replace the previous one
/// wholesale instead of merging.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchTable {
    pub exclusions: ExclusionSet,
    pub skipped: Vec<RowParseWarning>,
}

impl MatchTable {
    /// Loads a match table from a CSV file on disk.
    ///
    /// # Errors
    ///
    /// Returns [`MatchTableError::Io`] if the file cannot be opened,
    /// [`MatchTableError::MissingColumns`] if a required header is absent, and
    /// [`MatchTableError::Csv`] for malformed CSV data.
    pub fn load(path: &Path, options: &MatchTableOptions) -> Result<Self, MatchTableError> {
        debug!("Loading match table from {:?}", path);
        let file = std::fs::File::open(path).map_err(|e| MatchTableError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        Self::read_from(file, options)
    }

    /// Loads a match table from any reader producing CSV text with a header row.
    pub fn read_from(reader: impl Read, options: &MatchTableOptions) -> Result<Self, MatchTableError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::Fields)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        let matched_idx = headers.iter().position(|h| h == options.matched_column);
        let residue_idx = headers.iter().position(|h| h == options.residue_column);

        let (matched_idx, residue_idx) = match (matched_idx, residue_idx) {
            (Some(m), Some(r)) => (m, r),
            (m, r) => {
                let mut missing = Vec::new();
                if m.is_none() {
                    missing.push(options.matched_column.clone());
                }
                if r.is_none() {
                    missing.push(options.residue_column.clone());
                }
                return Err(MatchTableError::MissingColumns { missing });
            }
        };

        let mut table = MatchTable::default();
        for result in csv_reader.records() {
            let record = result?;
            let line = record.position().map_or(0, |p| p.line());

            match parse_row(&record, matched_idx, residue_idx, options) {
                Ok(Some(residue)) => {
                    table.exclusions.insert(residue);
                }
                Ok(None) => {}
                Err(issue) => {
                    let warning = RowParseWarning {
                        line,
                        row: record.iter().map(str::to_string).collect(),
                        issue,
                    };
                    warn!("Skipping row: {}", warning);
                    table.skipped.push(warning);
                }
            }
        }

        if table.exclusions.is_empty() {
            warn!("No valid residue indices found in the file based on the specified criteria.");
        } else {
            info!(
                "Loaded {} residue indices from match table ({} row(s) skipped).",
                table.exclusions.len(),
                table.skipped.len()
            );
        }
        Ok(table)
    }

    /// Sorted residue indices, for display.
    pub fn sorted_indices(&self) -> Vec<isize> {
        self.exclusions.iter().copied().collect()
    }
}

fn parse_row(
    record: &csv::StringRecord,
    matched_idx: usize,
    residue_idx: usize,
    options: &MatchTableOptions,
) -> Result<Option<isize>, RowIssue> {
    let matched_str = cell(record, matched_idx, &options.matched_column)?;
    let residue_str = cell(record, residue_idx, &options.residue_column)?;

    let matched: f64 = matched_str.parse().map_err(|_| RowIssue::InvalidNumber {
        column: options.matched_column.clone(),
        value: matched_str.to_string(),
    })?;
    let residue: isize = residue_str.parse().map_err(|_| RowIssue::InvalidNumber {
        column: options.residue_column.clone(),
        value: residue_str.to_string(),
    })?;

    if matched >= options.threshold && residue != options.sentinel {
        Ok(Some(residue))
    } else {
        Ok(None)
    }
}

fn cell<'r>(record: &'r csv::StringRecord, idx: usize, column: &str) -> Result<&'r str, RowIssue> {
    match record.get(idx) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(RowIssue::MissingValue {
            column: column.to_string(),
        }),
    }
}
