// File: mod.rs
// Description: domain registry (label interning) and the ordered domain list
// that defines row/column order of every matrix.

use std::path::Path;

use rustc_hash::FxHashMap;

use crate::utils::cath::normalize_domain_label;
use crate::utils::error::{BenchError, Result};
use crate::utils::reader::LineReader;

/// Dense zero-based identifier of an interned domain label.
pub type Atom = usize;

/// Interns domain labels into atoms. Atoms are handed out in first-seen
/// order and never change for the lifetime of the registry.
#[derive(Debug, Default, Clone)]
pub struct DomainRegistry {
    atoms: FxHashMap<String, Atom>,
    labels: Vec<String>,
}

impl DomainRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let mut atoms = FxHashMap::default();
        atoms.reserve(capacity);
        Self { atoms, labels: Vec::with_capacity(capacity) }
    }

    /// Atom of `label`, assigning the next free one on first sighting.
    pub fn intern(&mut self, label: &str) -> Atom {
        if let Some(&atom) = self.atoms.get(label) {
            return atom;
        }
        let atom = self.labels.len();
        self.labels.push(label.to_string());
        self.atoms.insert(label.to_string(), atom);
        atom
    }

    pub fn atom(&self, label: &str) -> Option<Atom> {
        self.atoms.get(label).copied()
    }

    pub fn exists(&self, label: &str) -> bool {
        self.atoms.contains_key(label)
    }

    pub fn label(&self, atom: Atom) -> &str {
        &self.labels[atom]
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// The domains of a run in file order plus the subset currently used as
/// queries. The registry always keeps every domain from the file since
/// matrix rows and columns are laid out against the full list.
#[derive(Debug, Clone)]
pub struct DomainList {
    pub registry: DomainRegistry,
    pub ids: Vec<String>,
    pub atoms: Vec<Atom>,
}

impl DomainList {
    /// Build from labels in file order. A repeated label is rejected because
    /// two matrix rows would then map to the same atom.
    pub fn from_labels<I, S>(labels: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = DomainList::new();
        for (i, label) in labels.into_iter().enumerate() {
            list.push(normalize_domain_label(label.as_ref()), i + 1)?;
        }
        Ok(list)
    }

    pub fn new() -> Self {
        DomainList {
            registry: DomainRegistry::with_capacity(2000),
            ids: Vec::with_capacity(2000),
            atoms: Vec::with_capacity(2000),
        }
    }

    fn push(&mut self, label: &str, line: usize) -> Result<()> {
        if self.registry.exists(label) {
            return Err(BenchError::DuplicateDomain { label: label.to_string(), line });
        }
        let atom = self.registry.intern(label);
        self.ids.push(label.to_string());
        self.atoms.push(atom);
        Ok(())
    }

    /// Number of domains in the registry, including filtered ones. This is
    /// the size of every matrix and of every membership array.
    pub fn total(&self) -> usize {
        self.registry.len()
    }

    /// Number of domains used as queries.
    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// Keep only the domains for which `keep` holds. The registry and atom
    /// values are untouched; only the iteration list shrinks.
    pub fn retain<F>(&mut self, mut keep: F) -> usize
    where
        F: FnMut(&str) -> bool,
    {
        let before = self.atoms.len();
        let mut ids = Vec::with_capacity(before);
        let mut atoms = Vec::with_capacity(before);
        for (id, &atom) in self.ids.iter().zip(self.atoms.iter()) {
            if keep(id) {
                ids.push(id.clone());
                atoms.push(atom);
            }
        }
        self.ids = ids;
        self.atoms = atoms;
        before - self.atoms.len()
    }
}

/// Read domain labels, one per line, taking the first whitespace separated
/// field. Blank lines are skipped.
pub fn read_domains(path: &Path) -> Result<DomainList> {
    let mut reader = LineReader::open(path)?;
    let mut list = DomainList::new();
    loop {
        let line_no = reader.line_no() + 1;
        let line = match reader.next_line().map_err(|e| BenchError::io(path, e))? {
            Some(line) => line,
            None => break,
        };
        let first = match line.split(|b| b.is_ascii_whitespace()).find(|f| !f.is_empty()) {
            Some(field) => field,
            None => continue,
        };
        let label = String::from_utf8_lossy(first);
        list.push(normalize_domain_label(&label), line_no)?;
    }
    Ok(list)
}
