//! Exportable solution reports.
//!
//! A report is intended to be:
//! - **stable**: it carries a format version so old files stay readable,
//! - **self-checking**: the count and every stored placement are re-validated
//!   on load, and
//! - **deterministic**: solutions are stored in sorted order.
//!
//! See `src/bin/export_report.rs` for the user-facing tool.

use std::fs;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::placement::Placement;
use crate::rules::is_valid_for;
use crate::search::SearchError;

pub const FORMAT_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolveReport {
    pub format_version: u32,
    pub board: usize,
    pub count: u64,
    pub solutions: Vec<Vec<u16>>,
}

impl SolveReport {
    /// Build a report from a solution set.
    ///
    /// Solutions are sorted lexicographically so serialized output is
    /// deterministic regardless of hash-set iteration order.
    pub fn from_solutions(board: usize, solutions: &FxHashSet<Placement>) -> Self {
        let mut cols: Vec<Vec<u16>> = solutions.iter().map(|p| p.cols().to_vec()).collect();
        cols.sort_unstable();

        Self {
            format_version: FORMAT_VERSION,
            board,
            count: cols.len() as u64,
            solutions: cols,
        }
    }

    pub fn placements(&self) -> Vec<Placement> {
        self.solutions
            .iter()
            .cloned()
            .map(Placement::from_cols)
            .collect()
    }
}

pub fn write_report(path: &Path, report: &SolveReport) -> Result<(), SearchError> {
    let f = fs::File::create(path).map_err(|e| SearchError::Io {
        stage: "report_write_create",
        path: path.display().to_string(),
        error: e.to_string(),
    })?;
    let mut w = BufWriter::new(f);
    serde_json::to_writer_pretty(&mut w, report).map_err(|e| SearchError::Io {
        stage: "report_write_serialize",
        path: path.display().to_string(),
        error: e.to_string(),
    })?;
    w.flush().map_err(|e| SearchError::Io {
        stage: "report_write_flush",
        path: path.display().to_string(),
        error: e.to_string(),
    })
}

pub fn read_report(path: &Path) -> Result<SolveReport, SearchError> {
    let f = fs::File::open(path).map_err(|e| SearchError::Io {
        stage: "report_read_open",
        path: path.display().to_string(),
        error: e.to_string(),
    })?;
    let r = BufReader::new(f);
    let report: SolveReport = serde_json::from_reader(r).map_err(|e| SearchError::Io {
        stage: "report_read_parse",
        path: path.display().to_string(),
        error: e.to_string(),
    })?;

    validate(&report)?;
    Ok(report)
}

fn validate(report: &SolveReport) -> Result<(), SearchError> {
    if report.format_version != FORMAT_VERSION {
        return Err(SearchError::InvalidReport {
            reason: format!(
                "unsupported format_version {} (expected {FORMAT_VERSION})",
                report.format_version
            ),
        });
    }

    if report.count != report.solutions.len() as u64 {
        return Err(SearchError::InvalidReport {
            reason: format!(
                "count {} mismatches stored solutions {}",
                report.count,
                report.solutions.len()
            ),
        });
    }

    for (i, cols) in report.solutions.iter().enumerate() {
        let p = Placement::from_cols(cols.clone());
        if !is_valid_for(&p, report.board) {
            return Err(SearchError::InvalidReport {
                reason: format!(
                    "solution {i} is not a valid placement for board {}",
                    report.board
                ),
            });
        }
    }

    Ok(())
}
