//! # Knowledge Summary
//!
//! Connects every premise term with every choice term, tells each found
//! path as sentences and keeps the best ones within a budget.

use crate::normalize::Normalizer;
use crate::pathfinder::PathFinder;
use crate::render::{NaturalRenderer, PathRenderer};
use crate::select::{select_paths, PathCandidate};
use crate::ConceptPathError;
use serde::{Deserialize, Serialize};

/// The selected paths for one premise/choice pair of term sets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Knowledge {
    pub paths: Vec<PathCandidate>,
}

impl Knowledge {
    /// All selected path texts joined by spaces.
    #[must_use]
    pub fn summary(&self) -> String {
        self.paths
            .iter()
            .map(|p| p.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

/// Gather natural-language paths between two term sets.
///
/// Pairs are visited premise-major in input order. Pairs without a path,
/// and zero-hop paths, contribute nothing.
pub fn gather_knowledge<N, P, C>(
    finder: &PathFinder<'_, N>,
    premise_terms: &[P],
    choice_terms: &[C],
    max_paths: usize,
) -> Result<Knowledge, ConceptPathError>
where
    N: Normalizer,
    P: AsRef<str>,
    C: AsRef<str>,
{
    let mut candidates = Vec::new();

    for premise in premise_terms {
        for choice in choice_terms {
            let path = finder.find_word_path(premise.as_ref(), choice.as_ref())?;
            let told = NaturalRenderer.render(&path, finder.graph())?;
            if !told.is_empty() {
                candidates.push(PathCandidate::from(told));
            }
        }
    }

    Ok(Knowledge {
        paths: select_paths(candidates, max_paths),
    })
}
