//! Command line interface for Boabench

// File: mod.rs
// Description: arguments of the CLI app are defined here

pub mod config;
pub mod workflows;

use std::ffi::OsString;

use crate::utils::error::{BenchError, Result};

pub enum AppArgs {
    Global {
        help: bool,
    },
    Make {
        // output file followed by the matrices to merge
        paths: Vec<String>,
        verbose: bool,
        help: bool,
    },
    Auc {
        // domain labels, best-of-all matrix, then (candidate, output) pairs
        paths: Vec<String>,
        threshold: Option<f64>,
        threads: Option<usize>,
        cath_dir: Option<String>,
        config: Option<String>,
        verbose: bool,
        help: bool,
    },
    Ordering {
        paths: Vec<String>,
        limit: Option<usize>,
        sort_by: Option<String>,
        verbose: bool,
        help: bool,
    },
}

/// Remaining free arguments as UTF-8 strings. Leftover flags are rejected.
pub fn free_args(args: Vec<OsString>) -> Result<Vec<String>> {
    let mut paths = Vec::with_capacity(args.len());
    for arg in args {
        let arg = arg
            .into_string()
            .map_err(|arg| BenchError::Usage(format!("argument is not valid UTF-8: {:?}", arg)))?;
        if arg.starts_with('-') && arg.len() > 1 {
            return Err(BenchError::Usage(format!("unknown option: {}", arg)));
        }
        paths.push(arg);
    }
    Ok(paths)
}

/// Candidate/output pairs after the two leading positional arguments.
pub fn split_pairs(paths: &[String]) -> Result<Vec<(String, String)>> {
    if paths.len() < 4 {
        return Err(BenchError::Usage(
            "expected domain labels, a best-of-all matrix and at least one candidate/output pair".to_string(),
        ));
    }
    if paths.len() % 2 != 0 {
        return Err(BenchError::Usage(
            "there must be an out file for each matrix or bowdb file".to_string(),
        ));
    }
    Ok(paths[2..].chunks(2).map(|pair| (pair[0].clone(), pair[1].clone())).collect())
}
