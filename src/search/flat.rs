// File: flat.rs
// Description: flat-file vector database searched exhaustively.
// Format: one entry per line, `id<TAB>f1 f2 ... fk`. Blank lines are skipped.

use std::path::{Path, PathBuf};

use crate::matrix::parser::{fields, parse_field};
use crate::search::{
    cosine_distance, euclidean_distance, SearchDatabase, SearchEntry, SearchHit, SearchOptions,
    SortOrder,
};
use crate::utils::error::{BenchError, Result};
use crate::utils::reader::LineReader;

#[derive(Debug, Clone)]
pub struct FlatVectorDb {
    path: PathBuf,
    entries: Vec<SearchEntry>,
    dim: usize,
}

impl FlatVectorDb {
    pub fn from_entries(path: impl Into<PathBuf>, entries: Vec<SearchEntry>) -> Result<Self> {
        let path = path.into();
        let dim = entries.first().map_or(0, |e| e.vector.len());
        for entry in entries.iter() {
            if entry.vector.len() != dim {
                return Err(BenchError::DimensionMismatch {
                    source_name: path.display().to_string(),
                    label: entry.id.clone(),
                    expected: dim,
                    found: entry.vector.len(),
                });
            }
        }
        Ok(Self { path, entries, dim })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn dim(&self) -> usize {
        self.dim
    }
}

fn parse_entry(line: &[u8], path: &Path, row: usize) -> Result<Option<SearchEntry>> {
    let mut columns = fields(line);
    let id = match columns.next() {
        Some(id) => String::from_utf8_lossy(id).into_owned(),
        None => return Ok(None),
    };
    let mut vector = Vec::new();
    for (column, field) in columns.enumerate() {
        vector.push(parse_field(field, path, row, column + 1)? as f32);
    }
    Ok(Some(SearchEntry { id, vector }))
}

impl SearchDatabase for FlatVectorDb {
    fn open(path: &Path) -> Result<Self> {
        let mut reader = LineReader::open(path)?;
        let mut entries = Vec::new();
        let mut row = 0usize;
        while let Some(line) = reader.next_line().map_err(|e| BenchError::io(path, e))? {
            if let Some(entry) = parse_entry(line, path, row)? {
                entries.push(entry);
            }
            row += 1;
        }
        Self::from_entries(path, entries)
    }

    fn name(&self) -> String {
        self.path.display().to_string()
    }

    fn read_all(&self) -> Result<Vec<SearchEntry>> {
        Ok(self.entries.clone())
    }

    fn search(&self, options: &SearchOptions, query: &[f32]) -> Result<Vec<SearchHit>> {
        if !self.entries.is_empty() && query.len() != self.dim {
            return Err(BenchError::DimensionMismatch {
                source_name: self.name(),
                label: "query".to_string(),
                expected: self.dim,
                found: query.len(),
            });
        }
        let mut hits: Vec<SearchHit> = self
            .entries
            .iter()
            .map(|entry| SearchHit {
                id: entry.id.clone(),
                cosine: cosine_distance(query, &entry.vector),
                euclid: euclidean_distance(query, &entry.vector),
            })
            .filter(|hit| {
                let d = hit.distance(options.sort_by);
                d >= options.min && d <= options.max
            })
            .collect();
        // Stable: equal distances keep database order
        match options.order {
            SortOrder::Asc => hits.sort_by(|a, b| {
                a.distance(options.sort_by).total_cmp(&b.distance(options.sort_by))
            }),
            SortOrder::Desc => hits.sort_by(|a, b| {
                b.distance(options.sort_by).total_cmp(&a.distance(options.sort_by))
            }),
        }
        if let Some(limit) = options.limit {
            hits.truncate(limit);
        }
        Ok(hits)
    }

    fn close(self: Box<Self>) -> Result<()> {
        Ok(())
    }
}
