// File: rank.rs
// Description: rankers turn a candidate source into an ordering of domains
// for one query, most similar first.

use crate::domain::{Atom, DomainList, DomainRegistry};
use crate::matrix::table::DistanceTable;
use crate::search::{SearchDatabase, SearchOptions};
use crate::utils::error::{BenchError, Result};

pub trait Ranker: Sync {
    /// Name used in log and error messages.
    fn name(&self) -> String;

    fn rank(&self, domains: &DomainList, query: Atom) -> Result<Vec<Atom>>;
}

/// Ranks the query domains by ascending distance in a dense matrix.
pub struct MatrixRanker<'a> {
    pub name: String,
    pub table: &'a DistanceTable,
}

impl<'a> MatrixRanker<'a> {
    pub fn new(name: impl Into<String>, table: &'a DistanceTable) -> Self {
        Self { name: name.into(), table }
    }
}

impl<'a> Ranker for MatrixRanker<'a> {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn rank(&self, domains: &DomainList, query: Atom) -> Result<Vec<Atom>> {
        let mut ranked: Vec<(Atom, f64)> = domains
            .atoms
            .iter()
            .map(|&other| (other, self.table.get(query, other)))
            .collect();
        // Stable and total, so ties keep domain-list order
        ranked.sort_by(|a, b| a.1.total_cmp(&b.1));
        Ok(ranked.into_iter().map(|(atom, _)| atom).collect())
    }
}

/// Ranks by searching a vector database with the query's own vector.
pub struct SearchRanker {
    db: Box<dyn SearchDatabase>,
    vectors: Vec<Option<Vec<f32>>>, // indexed by atom
    registry: DomainRegistry,
    options: SearchOptions,
}

impl SearchRanker {
    /// Load every vector of `db`. Each id must be a known domain.
    pub fn new(db: Box<dyn SearchDatabase>, registry: &DomainRegistry) -> Result<Self> {
        let mut vectors = vec![None; registry.len()];
        for entry in db.read_all()? {
            let atom = registry.atom(&entry.id).ok_or_else(|| BenchError::UnknownDomain {
                source_name: db.name(),
                label: entry.id.clone(),
            })?;
            vectors[atom] = Some(entry.vector);
        }
        Ok(Self { db, vectors, registry: registry.clone(), options: SearchOptions::exhaustive() })
    }

    pub fn close(self) -> Result<()> {
        self.db.close()
    }
}

impl Ranker for SearchRanker {
    fn name(&self) -> String {
        self.db.name()
    }

    fn rank(&self, _domains: &DomainList, query: Atom) -> Result<Vec<Atom>> {
        let vector = self.vectors[query].as_ref().ok_or_else(|| BenchError::MissingFeatureVector {
            source_name: self.db.name(),
            label: self.registry.label(query).to_string(),
        })?;
        let hits = self.db.search(&self.options, vector)?;
        let mut ranked = Vec::with_capacity(hits.len());
        for hit in hits {
            let atom = self.registry.atom(&hit.id).ok_or_else(|| BenchError::UnknownDomain {
                source_name: self.db.name(),
                label: hit.id.clone(),
            })?;
            ranked.push(atom);
        }
        Ok(ranked)
    }
}
