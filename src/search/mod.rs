//! Backtracking search: enumeration entry points, budgets and errors.

use std::fmt;

pub mod enumerate;
pub mod resources;

#[derive(Debug, Clone, Copy)]
/// Search budgets used to bound memory/time consumption.
///
/// These are not exact byte limits, but correlate strongly with allocation
/// size and runtime:
/// - `max_solutions`: number of solutions admitted to the result set
/// - `max_nodes`: number of candidate squares examined by the search
pub struct SearchLimits {
    pub max_solutions: u64,
    pub max_nodes: u64,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            max_solutions: 10_000_000,
            max_nodes: 5_000_000_000,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Running counters tracked during a search.
pub struct SearchCounts {
    pub solutions: u64,
    pub nodes: u64,
}

#[derive(Debug)]
/// Structured errors returned by budgeted search routines and report I/O.
pub enum SearchError {
    /// A configured resource limit was exceeded.
    LimitExceeded {
        stage: &'static str,
        metric: &'static str,
        limit: u64,
        observed: u64,
        counts: SearchCounts,
    },
    /// I/O failure while reading or writing a solution report.
    Io {
        stage: &'static str,
        path: String,
        error: String,
    },
    /// A loaded report is internally inconsistent.
    InvalidReport { reason: String },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::LimitExceeded {
                stage,
                metric,
                limit,
                observed,
                counts,
            } => write!(
                f,
                "limit exceeded at {stage}: {metric} (limit={limit}, observed={observed}); \
                 counts(solutions={}, nodes={})",
                counts.solutions, counts.nodes
            ),
            SearchError::Io { stage, path, error } => {
                write!(f, "io error at {stage} for {path}: {error}")
            }
            SearchError::InvalidReport { reason } => write!(f, "invalid report: {reason}"),
        }
    }
}

impl std::error::Error for SearchError {}
