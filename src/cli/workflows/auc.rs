// File: auc.rs
// Description: workflow for computing the AUC of aligner matrices and vector
// databases with respect to a best-of-all matrix.

use std::path::Path;

use peak_alloc::PeakAlloc;

use crate::cli::config::{config_to_string, read_config_from_file, BenchmarkConfig};
use crate::cli::{split_pairs, AppArgs};
use crate::domain::read_domains;
use crate::prelude::*;

// Reads the counters of the global allocator installed by the binary.
// Outside the binary they stay at zero.
static PEAK_ALLOC: PeakAlloc = PeakAlloc;

pub const HELP_AUC: &str = "\
usage: boabench auc [OPTIONS] <DOMAINS> <BOA_MATRIX> <CANDIDATE> <OUT_FILE> [<CANDIDATE> <OUT_FILE> ...]

Computes the AUC of each aligner matrix (or BOW database) given with respect
to the 'best-of-all' matrix given. Each AUC is written to a separate out file.
The sizes of all matrices must be exactly equivalent. Files are interpreted as
BOW databases if they have a '.bowdb' file extension.

input:
 <DOMAINS>                        Domain labels, one per line, in matrix row order
 <BOA_MATRIX>                     Best-of-all (ground truth) matrix

options:
 -d, --threshold <FLOAT>          Distance threshold defining true relatives [0.0]
 -t, --threads <INT>              Number of candidate sources evaluated in parallel, 0 for all cores [0]
 --cath-dir <PATH>                Drop domains without a structure file in this directory
 -c, --config <PATH>              TOML config (threshold, threads, cath_dir, verbose)
 -v, --verbose                    Print verbose messages
 -h, --help                       Print this help menu

examples:
boabench auc -d 2.0 -t 4 domains.txt boa.txt tmalign.txt tmalign.auc fragbag.bowdb fragbag.auc
";

/// Load everything, run the self-check and evaluate all candidates.
pub fn compute_aucs(paths: &[String], config: &BenchmarkConfig) -> Result<Vec<TaskResult>> {
    let pairs = split_pairs(paths)?;
    let verbose = config.verbose;
    let domain_path = Path::new(&paths[0]);
    let boa_path = Path::new(&paths[1]);

    let mut domains = if verbose {
        measure_time!(read_domains(domain_path))?
    } else {
        read_domains(domain_path)?
    };
    if verbose {
        print_log_msg(INFO, &format!("Read {} domains from {}", domains.total(), domain_path.display()));
    }
    let boa = if verbose {
        measure_time!(read_matrix(&domains.registry, boa_path))?
    } else {
        read_matrix(&domains.registry, boa_path)?
    };
    let tasks: Vec<BenchmarkTask> = pairs
        .into_iter()
        .map(|(source, output)| BenchmarkTask::new(source, output))
        .collect();

    // Matrices are laid out against every domain in the list, including ones
    // whose structure is gone, so only the query list is filtered.
    if let Some(cath_dir) = &config.cath_dir {
        let cath = CathDir::new(cath_dir);
        let removed = domains.retain(|id| cath.exists(id));
        if removed > 0 {
            print_log_msg(WARN, &format!(
                "Removed {} domains without a structure file in {}", removed, cath.root().display()
            ));
        }
    }

    check_self_auc(&domains, &boa, config.threshold)?;
    if verbose {
        print_log_msg(INFO, &format!(
            "Best-of-all self-check passed over {} query domains (Allocated {}MB)",
            domains.len(), PEAK_ALLOC.current_usage_as_mb()
        ));
    }

    let num_matrices = tasks.iter().filter(|t| !t.source.is_search()).count();
    if num_matrices > 0 {
        print_log_msg(INFO, &format!("Computing AUC for {} aligners...", num_matrices));
    }
    if num_matrices < tasks.len() {
        print_log_msg(INFO, &format!("Computing AUC for {} bowdbs...", tasks.len() - num_matrices));
    }
    let results = run_benchmarks(&tasks, &domains, &boa, config.threshold, config.threads, verbose)?;
    if verbose {
        print_log_msg(INFO, &format!("Peak memory usage: {}MB", PEAK_ALLOC.peak_usage_as_mb()));
    }
    Ok(results)
}

pub fn compute_auc(env: AppArgs) {
    match env {
        AppArgs::Auc { paths, threshold, threads, cath_dir, config, verbose, help: _ } => {
            let base = match config {
                Some(path) => read_config_from_file(&path).unwrap_or_else(|e| {
                    print_log_msg(FAIL, &e.to_string());
                    std::process::exit(1);
                }),
                None => BenchmarkConfig::default(),
            };
            let config = base.with_overrides(threshold, threads, cath_dir, verbose);
            if config.verbose {
                match config_to_string(&config) {
                    Ok(text) => print_log_msg(INFO, &format!("Effective config:\n{}", text.trim_end())),
                    Err(e) => print_log_msg(WARN, &e.to_string()),
                }
            }
            match compute_aucs(&paths, &config) {
                Ok(results) => {
                    for result in results {
                        print_log_msg(DONE, &format!(
                            "{}\t{:.6}\t{}", result.source.display(), result.auc, result.output.display()
                        ));
                    }
                }
                Err(e) => {
                    print_log_msg(FAIL, &e.to_string());
                    if e.is_usage() {
                        eprintln!("{}", HELP_AUC);
                    }
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
