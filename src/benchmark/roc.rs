// File: roc.rs
// Description: ROC curve of a ranking against gold sets and its trapezoidal
// area.

use crate::benchmark::gold::GoldSets;
use crate::domain::Atom;

/// One point of a ROC curve: `x` is the fraction of negatives ranked so far,
/// `y` the fraction of positives.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RocPoint {
    pub x: f64,
    pub y: f64,
}

#[inline]
fn rate(gold_len: usize, hits: usize) -> f64 {
    if gold_len == 0 || hits == 0 {
        return 0.0;
    }
    hits as f64 / gold_len as f64
}

/// Walk the ranking once and emit a point per rank position, preceded by
/// the origin. Ranked atoms in neither gold set advance neither axis.
pub fn roc_curve(ranked: &[Atom], gold: &GoldSets) -> Vec<RocPoint> {
    let mut points = Vec::with_capacity(ranked.len() + 1);
    let mut tp_hits = 0usize;
    let mut tn_hits = 0usize;
    points.push(RocPoint { x: 0.0, y: 0.0 });
    for &hit in ranked {
        if gold.is_positive(hit) {
            tp_hits += 1;
        } else if gold.is_negative(hit) {
            tn_hits += 1;
        }
        points.push(RocPoint {
            x: rate(gold.num_negatives, tn_hits),
            y: rate(gold.num_positives, tp_hits),
        });
    }
    points
}

/// Trapezoidal area under `points`, which must be ordered by `x`.
pub fn auc(points: &[RocPoint]) -> f64 {
    let mut area = 0.0;
    for pair in points.windows(2) {
        let (p0, p1) = (pair[0], pair[1]);
        area += (p1.x - p0.x) * (p1.y + p0.y);
    }
    area / 2.0
}
