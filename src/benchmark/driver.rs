// File: driver.rs
// Description: mean AUC over all query domains, the ground truth self-check
// and parallel evaluation of candidate sources.

use std::io::Write;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::benchmark::gold::build_gold_sets;
use crate::benchmark::rank::{MatrixRanker, Ranker, SearchRanker};
use crate::benchmark::roc::{auc, roc_curve};
use crate::domain::DomainList;
use crate::matrix::table::{read_matrix, DistanceTable};
use crate::search::flat::FlatVectorDb;
use crate::search::SearchDatabase;
use crate::utils::error::{BenchError, Result};
use crate::utils::log::{print_log_msg, INFO};
use crate::utils::reader::create_output;

/// Extension that marks a candidate as a search database.
pub const SEARCH_DB_EXTENSION: &str = "bowdb";

/// Mean over all query domains of the AUC of `ranker` against the gold sets
/// derived from `boa` at `threshold`.
pub fn mean_auc<R: Ranker + ?Sized>(
    domains: &DomainList, boa: &DistanceTable, ranker: &R, threshold: f64,
) -> Result<f64> {
    if domains.is_empty() {
        return Err(BenchError::NoQueries);
    }
    let mut sum_auc = 0.0;
    for &query in domains.atoms.iter() {
        let gold = build_gold_sets(domains, boa, query, threshold);
        let ranked = ranker.rank(domains, query)?;
        sum_auc += auc(&roc_curve(&ranked, &gold));
    }
    Ok(sum_auc / domains.len() as f64)
}

/// The best-of-all matrix must score exactly 1.0 against itself. Anything
/// else means the domain list and the matrices disagree on ordering.
pub fn check_self_auc(domains: &DomainList, boa: &DistanceTable, threshold: f64) -> Result<()> {
    let ranker = MatrixRanker::new("best-of-all", boa);
    let self_auc = mean_auc(domains, boa, &ranker, threshold)?;
    if self_auc != 1.0 {
        return Err(BenchError::SelfCheck { auc: self_auc });
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq)]
pub enum CandidateSource {
    Matrix(PathBuf),
    Search(PathBuf),
}

impl CandidateSource {
    /// Files with a `.bowdb` extension are search databases, anything else
    /// is a matrix.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        if path.extension().map_or(false, |ext| ext == SEARCH_DB_EXTENSION) {
            CandidateSource::Search(path)
        } else {
            CandidateSource::Matrix(path)
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            CandidateSource::Matrix(path) | CandidateSource::Search(path) => path,
        }
    }

    pub fn is_search(&self) -> bool {
        matches!(self, CandidateSource::Search(_))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkTask {
    pub source: CandidateSource,
    pub output: PathBuf,
}

impl BenchmarkTask {
    pub fn new(source: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self { source: CandidateSource::from_path(source), output: output.into() }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TaskResult {
    pub source: PathBuf,
    pub output: PathBuf,
    pub auc: f64,
}

pub fn write_auc(path: &Path, value: f64) -> Result<()> {
    let mut out = create_output(path)?;
    writeln!(out, "{:.6}", value).map_err(|e| BenchError::io(path, e))?;
    out.flush().map_err(|e| BenchError::io(path, e))
}

/// Load one candidate source, score it and write its AUC.
pub fn run_task(
    task: &BenchmarkTask, domains: &DomainList, boa: &DistanceTable, threshold: f64, verbose: bool,
) -> Result<TaskResult> {
    let path = task.source.path();
    if verbose {
        print_log_msg(INFO, &format!("Computing AUC for {}", path.display()));
    }
    let value = match &task.source {
        CandidateSource::Matrix(path) => {
            let table = read_matrix(&domains.registry, path)?;
            let ranker = MatrixRanker::new(path.display().to_string(), &table);
            mean_auc(domains, boa, &ranker, threshold)?
        }
        CandidateSource::Search(path) => {
            let db = FlatVectorDb::open(path)?;
            let ranker = SearchRanker::new(Box::new(db), &domains.registry)?;
            let value = mean_auc(domains, boa, &ranker, threshold)?;
            ranker.close()?;
            value
        }
    };
    write_auc(&task.output, value)?;
    if verbose {
        print_log_msg(INFO, &format!("{}: AUC {:.6} written to {}", path.display(), value, task.output.display()));
    }
    Ok(TaskResult { source: path.to_path_buf(), output: task.output.clone(), auc: value })
}

/// Worker pool of `threads` workers. Zero uses every available core.
pub fn build_pool(threads: usize) -> Result<rayon::ThreadPool> {
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .map_err(|e| BenchError::ThreadPool(e.to_string()))
}

/// Evaluate every task on a pool of `threads` workers. The domain list and
/// ground truth are shared read-only. The first failing task fails the run.
pub fn run_benchmarks(
    tasks: &[BenchmarkTask], domains: &DomainList, boa: &DistanceTable, threshold: f64,
    threads: usize, verbose: bool,
) -> Result<Vec<TaskResult>> {
    let pool = build_pool(threads)?;
    pool.install(|| {
        tasks
            .par_iter()
            .map(|task| run_task(task, domains, boa, threshold, verbose))
            .collect::<Result<Vec<_>>>()
    })
}
