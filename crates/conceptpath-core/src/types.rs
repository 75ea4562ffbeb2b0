//! # Core Types
//!
//! Identifiers, edge descriptors and the error type shared by every module.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use thiserror::Error;

// =============================================================================
// IDENTIFIERS
// =============================================================================

/// Index of a concept node, in `[0, node_count)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Position of this node in the graph's name table.
    #[must_use]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Index of a relation label, in `[0, label_count)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LabelId(pub u32);

impl LabelId {
    #[must_use]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for LabelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An ordered sequence of adjacent nodes. Empty means "no path found".
pub type RawPath = Vec<NodeId>;

// =============================================================================
// EDGE DESCRIPTOR
// =============================================================================

/// One directed, labeled, weighted assertion as it appeared in the source corpus.
///
/// Several descriptors may exist for the same ordered node pair. They are
/// kept in a `BTreeSet`, so equality and ordering cover the full triple;
/// weights are compared with `f64::total_cmp`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EdgeDescriptor {
    /// Relation label of the assertion.
    pub label: LabelId,
    /// Strength of the assertion.
    pub weight: f64,
    /// Row of the assertion in the source dump.
    pub source_row: u64,
}

impl EdgeDescriptor {
    #[must_use]
    pub fn new(label: LabelId, weight: f64, source_row: u64) -> Self {
        Self {
            label,
            weight,
            source_row,
        }
    }
}

impl PartialEq for EdgeDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for EdgeDescriptor {}

impl Ord for EdgeDescriptor {
    fn cmp(&self, other: &Self) -> Ordering {
        self.label
            .cmp(&other.label)
            .then_with(|| self.weight.total_cmp(&other.weight))
            .then_with(|| self.source_row.cmp(&other.source_row))
    }
}

impl PartialOrd for EdgeDescriptor {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// =============================================================================
// ERRORS
// =============================================================================

/// Errors raised by the graph core.
///
/// A term or path that cannot be found is not an error; these variants are
/// reserved for caller contract violations and corrupt graph data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConceptPathError {
    /// A node was reached that has no adjacency entry.
    #[error("node {node} has no adjacency entry")]
    MissingAdjacency { node: NodeId },

    /// Adjacency claims an edge that has no descriptors in either direction.
    #[error("illegal state: edge descriptors missing for edge present in graph ({from}, {to})")]
    MissingEdgeDescriptors { from: NodeId, to: NodeId },

    /// A relation label has no sentence template.
    #[error("edge type {label} has no sentence template")]
    MissingTemplate { label: String },

    /// Node id outside the name table.
    #[error("unknown node id {0}")]
    UnknownNode(NodeId),

    /// Label id outside the label table.
    #[error("unknown label id {0}")]
    UnknownLabel(LabelId),

    /// The supplied tables violate a graph invariant.
    #[error("invalid graph: {0}")]
    InvalidGraph(String),

    /// Snapshot encoding or decoding failed.
    #[error("serialization error: {0}")]
    Serialization(String),
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn descriptors_deduplicate_on_full_triple() {
        let mut set = BTreeSet::new();
        set.insert(EdgeDescriptor::new(LabelId(1), 2.0, 7));
        set.insert(EdgeDescriptor::new(LabelId(1), 2.0, 7));
        set.insert(EdgeDescriptor::new(LabelId(1), 2.0, 8));
        set.insert(EdgeDescriptor::new(LabelId(2), 2.0, 7));

        assert_eq!(set.len(), 3);
    }

    #[test]
    fn descriptors_order_by_label_then_weight() {
        let a = EdgeDescriptor::new(LabelId(0), 9.0, 0);
        let b = EdgeDescriptor::new(LabelId(1), 1.0, 0);
        let c = EdgeDescriptor::new(LabelId(1), 2.0, 0);

        assert!(a < b);
        assert!(b < c);
    }

    #[test]
    fn nan_weights_still_form_a_total_order() {
        let nan = EdgeDescriptor::new(LabelId(0), f64::NAN, 0);
        assert_eq!(nan, nan);
    }

    #[test]
    fn error_names_offending_pair() {
        let err = ConceptPathError::MissingEdgeDescriptors {
            from: NodeId(4),
            to: NodeId(9),
        };
        assert!(err.to_string().contains("(4, 9)"));
    }
}
