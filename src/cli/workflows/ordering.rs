// File: ordering.rs
// Description: all-against-all search of a vector database, writing the
// ordering of each search.

use std::io::Write;
use std::path::Path;

use crate::cli::AppArgs;
use crate::prelude::*;
use crate::utils::reader::create_output;

pub const HELP_ORDERING: &str = "\
usage: boabench ordering [OPTIONS] <BOWDB> <OUT_FILE>

Searches every entry of the database against the whole database and writes
one tab separated line per hit: QueryID, ResultID, Cosine, Euclid. A blank
line follows the hits of each query.

options:
 -l, --limit <INT>                Maximum number of hits per query [all]
 -s, --sort-by <STR>              Metric to order hits by (cosine, euclid) [cosine]
 -v, --verbose                    Print verbose messages
 -h, --help                       Print this help menu
";

pub fn write_ordering<W: Write>(
    db: &dyn SearchDatabase, options: &SearchOptions, out: &mut W,
) -> Result<usize> {
    let name = db.name();
    let write_err = |e: std::io::Error| BenchError::io(&name, e);
    writeln!(out, "QueryID\tResultID\tCosine\tEuclid").map_err(write_err)?;
    let entries = db.read_all()?;
    for entry in entries.iter() {
        for hit in db.search(options, &entry.vector)? {
            writeln!(out, "{}\t{}\t{:.4}\t{:.4}", entry.id, hit.id, hit.cosine, hit.euclid)
                .map_err(write_err)?;
        }
        writeln!(out).map_err(write_err)?;
    }
    out.flush().map_err(write_err)?;
    Ok(entries.len())
}

fn run_ordering(db_path: &Path, out_path: &Path, options: &SearchOptions) -> Result<usize> {
    let db = FlatVectorDb::open(db_path)?;
    let mut out = create_output(out_path)?;
    let queries = write_ordering(&db, options, &mut out)?;
    Box::new(db).close()?;
    Ok(queries)
}

pub fn ordering(env: AppArgs) {
    match env {
        AppArgs::Ordering { paths, limit, sort_by, verbose, help: _ } => {
            if paths.len() != 2 {
                print_log_msg(FAIL, "A database and an output file are required");
                eprintln!("{}", HELP_ORDERING);
                std::process::exit(1);
            }
            let sort_by = match sort_by.as_deref() {
                None => SortBy::Cosine,
                Some(s) => SortBy::get_with_str(s).unwrap_or_else(|| {
                    print_log_msg(FAIL, &format!("Invalid sort metric: {}", s));
                    eprintln!("{}", HELP_ORDERING);
                    std::process::exit(1);
                }),
            };
            let options = SearchOptions { limit, sort_by, ..SearchOptions::default() };
            let (db_path, out_path) = (Path::new(&paths[0]), Path::new(&paths[1]));
            if verbose {
                print_log_msg(INFO, &format!("Searching {} against itself by {}", db_path.display(), sort_by));
            }
            match run_ordering(db_path, out_path, &options) {
                Ok(queries) => {
                    if verbose {
                        print_log_msg(DONE, &format!("{} queries written to {}", queries, out_path.display()));
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
