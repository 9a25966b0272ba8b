// File: gold.rs
// Description: positive/negative gold sets of a query, derived from the
// best-of-all matrix and a distance threshold.

use crate::domain::{Atom, DomainList};
use crate::matrix::table::DistanceTable;

/// Membership arrays indexed by atom and sized to the full registry.
/// Domains outside the query list are in neither set.
#[derive(Debug, Clone, PartialEq)]
pub struct GoldSets {
    pub positives: Vec<bool>,
    pub negatives: Vec<bool>,
    pub num_positives: usize,
    pub num_negatives: usize,
}

impl GoldSets {
    #[inline]
    pub fn is_positive(&self, atom: Atom) -> bool {
        self.positives[atom]
    }

    #[inline]
    pub fn is_negative(&self, atom: Atom) -> bool {
        self.negatives[atom]
    }
}

/// Domains within `threshold` of `query` are positives, the rest negatives.
/// The query itself is at distance zero and so is always a positive.
pub fn build_gold_sets(
    domains: &DomainList, boa: &DistanceTable, query: Atom, threshold: f64,
) -> GoldSets {
    let total = domains.total();
    let mut positives = vec![false; total];
    let mut negatives = vec![false; total];
    let mut num_positives = 0usize;
    let mut num_negatives = 0usize;
    for &other in domains.atoms.iter() {
        if boa.get(query, other) <= threshold {
            positives[other] = true;
            num_positives += 1;
        } else {
            negatives[other] = true;
            num_negatives += 1;
        }
    }
    GoldSets { positives, negatives, num_positives, num_negatives }
}
