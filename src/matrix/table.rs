// File: table.rs
// Description: symmetric pairwise score table over atoms.
// Only the strict upper triangle is stored; the diagonal is zero and unset
// pairs read as zero.

use std::path::Path;

use crate::domain::{Atom, DomainRegistry};
use crate::matrix::parser::{fields, parse_field};
use crate::utils::error::{BenchError, Result};
use crate::utils::reader::LineReader;

#[derive(Debug, Clone, PartialEq)]
pub struct DistanceTable {
    size: usize,
    values: Vec<f64>, // packed row-major upper triangle, i < j
}

impl DistanceTable {
    pub fn new(size: usize) -> Self {
        let cells = size * size.saturating_sub(1) / 2;
        Self { size, values: vec![0.0; cells] }
    }

    #[inline(always)]
    fn offset(&self, i: Atom, j: Atom) -> usize {
        // Pairs before row i: sum_{r<i} (size - r - 1)
        i * (2 * self.size - i - 1) / 2 + (j - i - 1)
    }

    /// Store a score for the unordered pair `{a, b}`. Diagonal writes are
    /// dropped.
    #[inline]
    pub fn set(&mut self, a: Atom, b: Atom, value: f64) {
        if a == b {
            return;
        }
        let (i, j) = if a < b { (a, b) } else { (b, a) };
        let offset = self.offset(i, j);
        self.values[offset] = value;
    }

    #[inline]
    pub fn get(&self, a: Atom, b: Atom) -> f64 {
        if a == b {
            return 0.0;
        }
        let (i, j) = if a < b { (a, b) } else { (b, a) };
        self.values[self.offset(i, j)]
    }
}

/// Load a matrix file laid out against the full domain registry: row `i` and
/// column `j` belong to atom `i` and atom `j`. Only fields with `j > i` are
/// parsed, the rest are counted but not validated. Fields past column `N`
/// are ignored.
pub fn read_matrix(registry: &DomainRegistry, path: &Path) -> Result<DistanceTable> {
    let size = registry.len();
    let mut table = DistanceTable::new(size);
    let mut reader = LineReader::open(path)?;
    let mut row = 0usize;
    while let Some(line) = reader.next_line().map_err(|e| BenchError::io(path, e))? {
        if row >= size {
            row += 1;
            continue;
        }
        let mut count = 0usize;
        for (column, field) in fields(line).take(size).enumerate() {
            count += 1;
            if column > row {
                let value = parse_field(field, path, row, column)?;
                table.set(row, column, value);
            }
        }
        if count < size {
            return Err(BenchError::FieldCount {
                path: path.to_path_buf(),
                row,
                expected: size,
                found: count,
            });
        }
        row += 1;
    }
    if row != size {
        return Err(BenchError::RowCount { path: path.to_path_buf(), expected: size, found: row });
    }
    Ok(table)
}
