// File: merge.rs
// Description: best-of-all merge. Streams N matrices row by row in lock-step
// and writes the lowest score of every cell.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::matrix::parser::parse_row_into;
use crate::utils::error::{BenchError, Result};
use crate::utils::log::{print_log_msg, WARN};
use crate::utils::reader::{create_output, LineReader};

/// One input of a merge, named for error messages.
pub struct MatrixInput {
    pub path: PathBuf,
    pub reader: LineReader,
}

impl MatrixInput {
    pub fn open(path: &Path) -> Result<Self> {
        Ok(Self { path: path.to_path_buf(), reader: LineReader::open(path)? })
    }
}

/// Write one merged cell. Exact zeros are written as a bare `0`, everything
/// else with six decimals, so `1` comes out as `1.000000`.
#[inline]
fn write_cell<W: Write>(out: &mut W, value: f64) -> std::io::Result<()> {
    if value == 0.0 {
        out.write_all(b"0")
    } else {
        write!(out, "{:.6}", value)
    }
}

/// Merge `inputs` into `out` and return the number of rows written.
///
/// The first input drives the merge: its end of input ends the merge. Any
/// other input running out early, or a row whose width differs from the
/// first input's row, is a shape mismatch.
pub fn merge_matrices<W: Write>(
    inputs: &mut [MatrixInput], out: &mut W, out_path: &Path,
) -> Result<usize> {
    if inputs.is_empty() {
        return Err(BenchError::Usage("at least one matrix is required to merge".to_string()));
    }
    let mut rows: Vec<Vec<f64>> = vec![Vec::new(); inputs.len()];
    let mut row = 0usize;
    loop {
        let (first, rest) = inputs.split_at_mut(1);
        let first = &mut first[0];
        match first.reader.next_line().map_err(|e| BenchError::io(&first.path, e))? {
            Some(line) => parse_row_into(line, &mut rows[0], &first.path, row)?,
            None => {
                for input in rest.iter_mut() {
                    let leftover = input.reader.next_line().map_err(|e| BenchError::io(&input.path, e))?;
                    if leftover.is_some() {
                        print_log_msg(WARN, &format!(
                            "{} has more rows than {}; extra rows ignored",
                            input.path.display(), first.path.display()
                        ));
                    }
                }
                break;
            }
        }
        let columns = rows[0].len();
        for (k, input) in rest.iter_mut().enumerate() {
            let line = input.reader.next_line().map_err(|e| BenchError::io(&input.path, e))?;
            let line = line.ok_or_else(|| BenchError::MergeShape {
                path: input.path.clone(),
                row,
                detail: format!("input ended but {} continues", first.path.display()),
            })?;
            parse_row_into(line, &mut rows[k + 1], &input.path, row)?;
            if rows[k + 1].len() != columns {
                return Err(BenchError::MergeShape {
                    path: input.path.clone(),
                    row,
                    detail: format!("{} columns, expected {}", rows[k + 1].len(), columns),
                });
            }
        }

        let write_row = |out: &mut W| -> std::io::Result<()> {
            for j in 0..columns {
                let mut best = rows[0][j];
                for scores in rows[1..].iter() {
                    if scores[j] < best {
                        best = scores[j];
                    }
                }
                if j > 0 {
                    out.write_all(b" ")?;
                }
                write_cell(out, best)?;
            }
            out.write_all(b"\n")
        };
        write_row(out).map_err(|e| BenchError::io(out_path, e))?;
        row += 1;
    }
    out.flush().map_err(|e| BenchError::io(out_path, e))?;
    Ok(row)
}

/// Merge matrix files into `out_path`.
pub fn merge_matrix_files(out_path: &Path, matrix_paths: &[PathBuf]) -> Result<usize> {
    let mut inputs = matrix_paths
        .iter()
        .map(|path| MatrixInput::open(path))
        .collect::<Result<Vec<_>>>()?;
    let mut out = create_output(out_path)?;
    merge_matrices(&mut inputs, &mut out, out_path)
}
