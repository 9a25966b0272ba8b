// File: mod.rs
// Description: interface to approximate-search databases of per-domain
// feature vectors. The benchmark only needs `read_all` and `search`; the
// engine behind them is pluggable.

pub mod flat;

use std::fmt;
use std::path::Path;

use crate::utils::error::Result;

/// Metric results are ranked by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortBy {
    Cosine,
    Euclid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortBy {
    pub fn get_with_str(sort_by: &str) -> Option<Self> {
        match sort_by {
            "cosine" | "Cosine" | "cos" => Some(Self::Cosine),
            "euclid" | "Euclid" | "euclidean" => Some(Self::Euclid),
            _ => None,
        }
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SortBy::Cosine => write!(f, "cosine"),
            SortBy::Euclid => write!(f, "euclid"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchOptions {
    /// Maximum number of hits, `None` for all.
    pub limit: Option<usize>,
    /// Inclusive bounds on the `sort_by` distance.
    pub min: f64,
    pub max: f64,
    pub sort_by: SortBy,
    pub order: SortOrder,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self { limit: Some(25), min: 0.0, max: f64::MAX, sort_by: SortBy::Cosine, order: SortOrder::Asc }
    }
}

impl SearchOptions {
    /// Every entry of the database, closest first by cosine distance.
    pub fn exhaustive() -> Self {
        Self { limit: None, ..Self::default() }
    }
}

/// A database record: an identifier and its feature vector.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchEntry {
    pub id: String,
    pub vector: Vec<f32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit {
    pub id: String,
    pub cosine: f64,
    pub euclid: f64,
}

impl SearchHit {
    pub fn distance(&self, sort_by: SortBy) -> f64 {
        match sort_by {
            SortBy::Cosine => self.cosine,
            SortBy::Euclid => self.euclid,
        }
    }
}

pub trait SearchDatabase: Send + Sync {
    fn open(path: &Path) -> Result<Self>
    where
        Self: Sized;

    /// Name used in log and error messages, usually the path.
    fn name(&self) -> String;

    fn read_all(&self) -> Result<Vec<SearchEntry>>;

    /// Hits for `query` ordered as requested by `options`.
    fn search(&self, options: &SearchOptions, query: &[f32]) -> Result<Vec<SearchHit>>;

    fn close(self: Box<Self>) -> Result<()>;
}

/// Cosine distance `1 - cos(a, b)` clamped to `[0, 2]`. Two zero vectors are
/// identical; a zero vector against anything else is at distance 1.
pub fn cosine_distance(a: &[f32], b: &[f32]) -> f64 {
    let mut dot = 0.0f64;
    let mut norm_a = 0.0f64;
    let mut norm_b = 0.0f64;
    for (&x, &y) in a.iter().zip(b.iter()) {
        let (x, y) = (x as f64, y as f64);
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }
    if norm_a == 0.0 && norm_b == 0.0 {
        return 0.0;
    }
    if norm_a == 0.0 || norm_b == 0.0 {
        return 1.0;
    }
    (1.0 - dot / (norm_a * norm_b).sqrt()).clamp(0.0, 2.0)
}

pub fn euclidean_distance(a: &[f32], b: &[f32]) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(&x, &y)| {
            let d = x as f64 - y as f64;
            d * d
        })
        .sum::<f64>()
        .sqrt()
}
