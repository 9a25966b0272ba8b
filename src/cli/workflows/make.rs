// File: make.rs
// Description: workflow for building the best-of-all matrix.
// All given matrices must have exactly the same size.

use std::path::{Path, PathBuf};

use crate::cli::AppArgs;
use crate::matrix::merge::merge_matrix_files;
use crate::prelude::*;

pub const HELP_MAKE: &str = "\
usage: boabench make <OUT_FILE> <MATRIX> [<MATRIX> ...]

Combines the input matrices into a 'best-of-all' matrix by using the best
(lowest) score for each pair. All given matrices must be exactly the same
size. Inputs and output ending in .gz are (de)compressed transparently.

options:
 -v, --verbose                    Print verbose messages
 -h, --help                       Print this help menu
";

pub fn make_best_of_all(env: AppArgs) {
    match env {
        AppArgs::Make { paths, verbose, help: _ } => {
            if paths.len() < 2 {
                print_log_msg(FAIL, "An output file and at least one matrix are required");
                eprintln!("{}", HELP_MAKE);
                std::process::exit(1);
            }
            let out_path = Path::new(&paths[0]);
            let matrix_paths: Vec<PathBuf> = paths[1..].iter().map(PathBuf::from).collect();
            if verbose {
                print_log_msg(INFO, &format!(
                    "Merging {} matrices into {}", matrix_paths.len(), out_path.display()
                ));
            }
            let merged = if verbose {
                measure_time!(merge_matrix_files(out_path, &matrix_paths))
            } else {
                merge_matrix_files(out_path, &matrix_paths)
            };
            match merged {
                Ok(rows) => {
                    if verbose {
                        print_log_msg(DONE, &format!("{} rows written to {}", rows, out_path.display()));
                    }
                }
                Err(e) => {
                    print_log_msg(FAIL, &e.to_string());
                    std::process::exit(1);
                }
            }
        }
        _ => {
            eprintln!("Invalid subcommand");
            std::process::exit(1);
        }
    }
}
