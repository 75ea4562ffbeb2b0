//! # Path Resolution
//!
//! Term-level entry point: normalize two terms, look them up in the graph,
//! run the bounded search and optionally render the result.

use crate::graph::ConceptGraph;
use crate::normalize::Normalizer;
use crate::render::PathRenderer;
use crate::search::search_shortest_path;
use crate::{ConceptPathError, NodeId, RawPath};

/// Default bound on the number of nodes in a path.
pub const DEFAULT_MAX_PATH_LEN: usize = 3;

/// Finds paths between terms of a borrowed graph.
#[derive(Debug, Clone)]
pub struct PathFinder<'g, N> {
    graph: &'g ConceptGraph,
    normalizer: N,
    max_path_len: usize,
}

impl<'g, N: Normalizer> PathFinder<'g, N> {
    #[must_use]
    pub fn new(graph: &'g ConceptGraph, normalizer: N) -> Self {
        Self {
            graph,
            normalizer,
            max_path_len: DEFAULT_MAX_PATH_LEN,
        }
    }

    /// Bound paths to at most `max_path_len` nodes.
    #[must_use]
    pub fn with_max_path_len(mut self, max_path_len: usize) -> Self {
        self.max_path_len = max_path_len;
        self
    }

    #[must_use]
    pub fn graph(&self) -> &'g ConceptGraph {
        self.graph
    }

    #[must_use]
    pub fn max_path_len(&self) -> usize {
        self.max_path_len
    }

    /// Normalize a term and look it up. `None` if the graph lacks it.
    pub fn resolve_term(&self, term: &str) -> Option<NodeId> {
        let normalized = self.normalizer.normalize(term);
        let found = self.graph.node_id(&normalized);
        if found.is_none() {
            tracing::debug!(term, normalized = %normalized, "term not in graph, skipping");
        }
        found
    }

    /// Raw shortest path between two terms.
    ///
    /// Empty when either term is unknown or no path fits the bound.
    pub fn find_word_path(&self, start_term: &str, end_term: &str) -> Result<RawPath, ConceptPathError> {
        let (Some(start), Some(end)) = (self.resolve_term(start_term), self.resolve_term(end_term))
        else {
            return Ok(Vec::new());
        };
        search_shortest_path(start, end, self.graph, self.max_path_len)
    }

    /// Shortest path between two terms, rendered.
    ///
    /// A missing term or path renders as the renderer's empty output.
    pub fn find_word_path_rendered<R: PathRenderer>(
        &self,
        start_term: &str,
        end_term: &str,
        renderer: &R,
    ) -> Result<R::Output, ConceptPathError> {
        let path = self.find_word_path(start_term, end_term)?;
        renderer.render(&path, self.graph)
    }
}
