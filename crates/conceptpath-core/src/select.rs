//! # Multi-Path Selection
//!
//! Ranks rendered candidate paths and keeps at most a budget of them.
//! Fewer hops rank first; among equal hop counts, a larger product of hop
//! weights ranks first. The sort is stable, so remaining ties keep their
//! input order and the selection is deterministic.

use crate::render::NaturalPath;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Selector budget used when the caller does not pick one.
pub const DEFAULT_MAX_PATHS: usize = 10;

/// A rendered path and the weight of each of its hops.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathCandidate {
    pub text: String,
    pub weights: Vec<f64>,
}

impl PathCandidate {
    #[must_use]
    pub fn new(text: impl Into<String>, weights: Vec<f64>) -> Self {
        Self {
            text: text.into(),
            weights,
        }
    }

    /// Number of hops.
    #[must_use]
    pub fn hops(&self) -> usize {
        self.weights.len()
    }

    /// Product of the hop weights; 1 for a zero-hop path.
    #[must_use]
    pub fn strength(&self) -> f64 {
        self.weights.iter().product()
    }
}

impl From<NaturalPath> for PathCandidate {
    fn from(path: NaturalPath) -> Self {
        Self {
            text: path.text,
            weights: path.weights,
        }
    }
}

/// Keep at most `budget` candidates.
///
/// Within budget the input is returned untouched, order included.
#[must_use]
pub fn select_paths(mut candidates: Vec<PathCandidate>, budget: usize) -> Vec<PathCandidate> {
    if candidates.len() <= budget {
        return candidates;
    }

    tracing::debug!(candidates = candidates.len(), budget, "truncating candidate paths");

    candidates.sort_by(rank);
    candidates.truncate(budget);
    candidates
}

/// Fewer hops first, then larger weight product. An unknown (NaN) product
/// ranks after every known one.
fn rank(a: &PathCandidate, b: &PathCandidate) -> Ordering {
    let (a_strength, b_strength) = (a.strength(), b.strength());
    a.hops()
        .cmp(&b.hops())
        .then_with(|| a_strength.is_nan().cmp(&b_strength.is_nan()))
        .then_with(|| b_strength.total_cmp(&a_strength))
}
