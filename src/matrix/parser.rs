// File: parser.rs
// Description: allocation-free field scanning for whitespace delimited rows

use std::path::Path;

use crate::utils::error::{BenchError, Result};

/// Iterator over whitespace separated fields of a row. Borrowed slices only.
pub struct Fields<'a> {
    line: &'a [u8],
    pos: usize,
}

impl<'a> Iterator for Fields<'a> {
    type Item = &'a [u8];

    #[inline]
    fn next(&mut self) -> Option<&'a [u8]> {
        let line = self.line;
        while self.pos < line.len() && line[self.pos].is_ascii_whitespace() {
            self.pos += 1;
        }
        if self.pos == line.len() {
            return None;
        }
        let start = self.pos;
        while self.pos < line.len() && !line[self.pos].is_ascii_whitespace() {
            self.pos += 1;
        }
        Some(&line[start..self.pos])
    }
}

#[inline]
pub fn fields(line: &[u8]) -> Fields<'_> {
    Fields { line, pos: 0 }
}

/// Parse one field as `f64`. `row` and `column` are zero based and only used
/// for the error message.
#[inline]
pub fn parse_field(field: &[u8], path: &Path, row: usize, column: usize) -> Result<f64> {
    std::str::from_utf8(field)
        .ok()
        .and_then(|s| s.parse::<f64>().ok())
        .ok_or_else(|| BenchError::Parse {
            path: path.to_path_buf(),
            row,
            column,
            value: String::from_utf8_lossy(field).into_owned(),
        })
}

/// Parse a whole row into `out`, reusing its allocation.
pub fn parse_row_into(line: &[u8], out: &mut Vec<f64>, path: &Path, row: usize) -> Result<()> {
    out.clear();
    for (column, field) in fields(line).enumerate() {
        out.push(parse_field(field, path, row, column)?);
    }
    Ok(())
}
