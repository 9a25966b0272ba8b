//! # About project
//!
//! Boabench measures how well structural aligners retrieve true relatives of
//! a protein domain. A trusted "best-of-all" distance matrix defines, for each
//! query domain, which other domains are positives. Every candidate source
//! (a dense score matrix or a vector search database) ranks all domains per
//! query and is scored by the mean area under the ROC curve.
//!
//! The best-of-all matrix itself is built by [`matrix::merge`], which keeps
//! the lowest score per cell over several aligner matrices.

pub mod benchmark;
pub mod cli;
pub mod domain;
pub mod matrix;
pub mod search;
pub mod utils;

pub mod prelude {
    pub use crate::benchmark::driver::{
        check_self_auc, mean_auc, run_benchmarks, BenchmarkTask, CandidateSource, TaskResult,
    };
    pub use crate::benchmark::gold::{build_gold_sets, GoldSets};
    pub use crate::benchmark::rank::{MatrixRanker, Ranker, SearchRanker};
    pub use crate::benchmark::roc::{auc, roc_curve, RocPoint};
    pub use crate::domain::{Atom, DomainList, DomainRegistry};
    pub use crate::matrix::merge::{merge_matrices, merge_matrix_files};
    pub use crate::matrix::table::{read_matrix, DistanceTable};
    pub use crate::search::flat::FlatVectorDb;
    pub use crate::search::{SearchDatabase, SearchEntry, SearchHit, SearchOptions, SortBy, SortOrder};
    pub use crate::utils::cath::{normalize_domain_label, CathDir};
    pub use crate::utils::error::{BenchError, Result};
    pub use crate::utils::log::{log_msg, print_log_msg, DONE, FAIL, INFO, WARN};
    pub use crate::measure_time;
}
