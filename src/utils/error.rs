// File: error.rs
// Description: error taxonomy. Every variant is fatal at the CLI.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, BenchError>;

#[derive(Debug, Error)]
pub enum BenchError {
    #[error("{0}")]
    Usage(String),

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}: row {row}, column {column}: cannot parse {value:?} as a number", path.display())]
    Parse {
        path: PathBuf,
        row: usize,
        column: usize,
        value: String,
    },

    #[error("{}: expected {expected} rows (one per domain) but found {found}", path.display())]
    RowCount {
        path: PathBuf,
        expected: usize,
        found: usize,
    },

    #[error("{}: row {row} has {found} fields but there are {expected} domains", path.display())]
    FieldCount {
        path: PathBuf,
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("matrices have different shapes: {} row {row}: {detail}", path.display())]
    MergeShape {
        path: PathBuf,
        row: usize,
        detail: String,
    },

    #[error("domain {label} appears twice in the domain list (line {line})")]
    DuplicateDomain { label: String, line: usize },

    #[error("found ID in {source_name} that isn't in the list of domains provided: {label}")]
    UnknownDomain { source_name: String, label: String },

    #[error("{source_name}: feature vector of {label} has {found} dimensions, expected {expected}")]
    DimensionMismatch {
        source_name: String,
        label: String,
        expected: usize,
        found: usize,
    },

    #[error("{source_name} has no feature vector for query domain {label}")]
    MissingFeatureVector { source_name: String, label: String },

    #[error(
        "something is wrong: the AUC of the best-of-all matrix with respect to itself is {auc}, \
         but it should be 1.0 (domain ordering mismatch?)"
    )]
    SelfCheck { auc: f64 },

    #[error("no query domains left to benchmark")]
    NoQueries,

    #[error("invalid config: {0}")]
    Config(String),

    #[error("failed to build worker pool: {0}")]
    ThreadPool(String),
}

impl BenchError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        BenchError::Io { path: path.into(), source }
    }

    pub fn is_usage(&self) -> bool {
        matches!(self, BenchError::Usage(_))
    }
}
