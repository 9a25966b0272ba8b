// File: main.rs
// Description: entry point of the boabench binary

use boabench::cli::workflows::auc::{compute_auc, HELP_AUC};
use boabench::cli::workflows::make::{make_best_of_all, HELP_MAKE};
use boabench::cli::workflows::ordering::{ordering, HELP_ORDERING};
use boabench::cli::{free_args, AppArgs};
use boabench::prelude::*;
use peak_alloc::PeakAlloc;

#[global_allocator]
static PEAK_ALLOC: PeakAlloc = PeakAlloc;

const HELP: &str = "\
usage: boabench <SUBCOMMAND> [OPTIONS] <ARGS...>

subcommands:
  make        Combine aligner matrices into a best-of-all matrix
  auc         Compute the AUC of aligner matrices and BOW databases against a best-of-all matrix
  ordering    All-against-all search of a BOW database
options:
  -h, --help  Print this help menu
";

fn parse_arg() -> std::result::Result<AppArgs, Box<dyn std::error::Error>> {
    let mut args = pico_args::Arguments::from_env();
    match args.subcommand()?.as_deref() {
        Some("make") => {
            let help = args.contains(["-h", "--help"]);
            let verbose = args.contains(["-v", "--verbose"]);
            Ok(AppArgs::Make { paths: free_args(args.finish())?, verbose, help })
        }
        Some("auc") => {
            let help = args.contains(["-h", "--help"]);
            let verbose = args.contains(["-v", "--verbose"]);
            let threshold = args.opt_value_from_str(["-d", "--threshold"])?;
            let threads = args.opt_value_from_str(["-t", "--threads"])?;
            let cath_dir = args.opt_value_from_str("--cath-dir")?;
            let config = args.opt_value_from_str(["-c", "--config"])?;
            Ok(AppArgs::Auc {
                paths: free_args(args.finish())?,
                threshold,
                threads,
                cath_dir,
                config,
                verbose,
                help,
            })
        }
        Some("ordering") => {
            let help = args.contains(["-h", "--help"]);
            let verbose = args.contains(["-v", "--verbose"]);
            let limit = args.opt_value_from_str(["-l", "--limit"])?;
            let sort_by = args.opt_value_from_str(["-s", "--sort-by"])?;
            Ok(AppArgs::Ordering { paths: free_args(args.finish())?, limit, sort_by, verbose, help })
        }
        Some(other) => Err(format!("Invalid subcommand: {}", other).into()),
        None => Ok(AppArgs::Global { help: args.contains(["-h", "--help"]) }),
    }
}

fn main() {
    let parsed_args = parse_arg().unwrap_or_else(|e| {
        print_log_msg(FAIL, &e.to_string());
        eprintln!("{}", HELP);
        std::process::exit(1);
    });
    match parsed_args {
        AppArgs::Global { help } => {
            if help {
                println!("{}", HELP);
            } else {
                eprintln!("No subcommand specified. Try `boabench --help` for more information.");
                std::process::exit(1);
            }
        }
        AppArgs::Make { help: true, .. } => println!("{}", HELP_MAKE),
        AppArgs::Auc { help: true, .. } => println!("{}", HELP_AUC),
        AppArgs::Ordering { help: true, .. } => println!("{}", HELP_ORDERING),
        env @ AppArgs::Make { .. } => make_best_of_all(env),
        env @ AppArgs::Auc { .. } => compute_auc(env),
        env @ AppArgs::Ordering { .. } => ordering(env),
    }
}
