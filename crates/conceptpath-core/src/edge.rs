//! # Edge Resolution
//!
//! Maps a traversed hop `(u, v)` back to the descriptors recorded in the
//! source corpus. The attribute table keeps only the original direction,
//! so a hop walked against it resolves to `(v, u)` with `reversed` set.

use crate::graph::ConceptGraph;
use crate::{ConceptPathError, EdgeDescriptor, NodeId};
use std::cmp::Ordering;
use std::collections::BTreeSet;

/// Descriptors for one hop of a path.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedEdge<'g> {
    /// All parallel descriptors stored for the hop.
    pub descriptors: &'g BTreeSet<EdgeDescriptor>,
    /// True when the descriptors were recorded as `to -> from`.
    pub reversed: bool,
}

impl<'g> ResolvedEdge<'g> {
    /// The representative descriptor: highest weight, lowest source row on ties.
    pub fn strongest(&self) -> Option<&'g EdgeDescriptor> {
        self.descriptors.iter().max_by(|a, b| strength_order(a, b))
    }
}

/// Resolve the hop `from -> to`, falling back to the reverse direction.
///
/// Fails with `MissingEdgeDescriptors` when neither direction is present;
/// for a hop taken from adjacency that means the graph store is corrupt.
pub fn resolve_edge(
    graph: &ConceptGraph,
    from: NodeId,
    to: NodeId,
) -> Result<ResolvedEdge<'_>, ConceptPathError> {
    if let Some(descriptors) = graph.edge_descriptors(from, to) {
        return Ok(ResolvedEdge {
            descriptors,
            reversed: false,
        });
    }
    if let Some(descriptors) = graph.edge_descriptors(to, from) {
        return Ok(ResolvedEdge {
            descriptors,
            reversed: true,
        });
    }
    Err(ConceptPathError::MissingEdgeDescriptors { from, to })
}

/// Resolve a hop and pick its strongest descriptor.
pub fn strongest_edge(
    graph: &ConceptGraph,
    from: NodeId,
    to: NodeId,
) -> Result<(&EdgeDescriptor, bool), ConceptPathError> {
    let resolved = resolve_edge(graph, from, to)?;
    let best = resolved
        .strongest()
        .ok_or(ConceptPathError::MissingEdgeDescriptors { from, to })?;
    Ok((best, resolved.reversed))
}

/// Orders descriptors by strength. NaN weights rank below every number;
/// equal weights prefer the lower source row.
fn strength_order(a: &EdgeDescriptor, b: &EdgeDescriptor) -> Ordering {
    let a_known = !a.weight.is_nan();
    let b_known = !b.weight.is_nan();
    a_known
        .cmp(&b_known)
        .then_with(|| a.weight.total_cmp(&b.weight))
        .then_with(|| b.source_row.cmp(&a.source_row))
}

// =============================================================================
// TESTS
// =============================================================================
