//! # Shortest-Path Search
//!
//! Breadth-first search over integer node ids, bounded by the number of
//! nodes in the returned path. The search knows nothing about names,
//! labels or weights; it only asks an [`Adjacency`] for neighbors.

use crate::{ConceptPathError, NodeId, RawPath};
use std::collections::{BTreeMap, HashMap, VecDeque};

/// Neighbor lookup consumed by the search.
///
/// Returns `None` when the node has no adjacency entry at all, which is a
/// caller contract violation. An isolated node must still have an entry.
pub trait Adjacency {
    fn neighbors(&self, node: NodeId) -> Option<impl Iterator<Item = NodeId>>;
}

impl<S> Adjacency for BTreeMap<NodeId, S>
where
    for<'a> &'a S: IntoIterator<Item = &'a NodeId>,
{
    fn neighbors(&self, node: NodeId) -> Option<impl Iterator<Item = NodeId>> {
        self.get(&node).map(|set| set.into_iter().copied())
    }
}

impl<S> Adjacency for HashMap<NodeId, S>
where
    for<'a> &'a S: IntoIterator<Item = &'a NodeId>,
{
    fn neighbors(&self, node: NodeId) -> Option<impl Iterator<Item = NodeId>> {
        self.get(&node).map(|set| set.into_iter().copied())
    }
}

/// Find the first shortest path from `start` to `end` with at most
/// `max_len` nodes.
///
/// Nodes are marked visited as soon as they are discovered, but only
/// enqueued while `distance + 1 < max_len`; nodes at the bound block
/// rediscovery without being expanded. Among equally short paths the one
/// returned follows the adjacency's neighbor iteration order.
///
/// `start == end` yields `[start]` regardless of `max_len`. An empty path
/// means no path exists within the bound.
pub fn search_shortest_path<A: Adjacency + ?Sized>(
    start: NodeId,
    end: NodeId,
    adjacency: &A,
    max_len: usize,
) -> Result<RawPath, ConceptPathError> {
    for node in [start, end] {
        if adjacency.neighbors(node).is_none() {
            return Err(ConceptPathError::MissingAdjacency { node });
        }
    }

    // node -> predecessor; the start maps to None
    let mut predecessors: BTreeMap<NodeId, Option<NodeId>> = BTreeMap::new();
    let mut queue = VecDeque::new();

    predecessors.insert(start, None);
    queue.push_back((start, 0usize));

    while let Some((node, distance)) = queue.pop_front() {
        if node == end {
            let path = reconstruct(&predecessors, node);
            tracing::debug!(%start, %end, nodes = path.len(), "path found");
            return Ok(path);
        }

        let neighbors = adjacency
            .neighbors(node)
            .ok_or(ConceptPathError::MissingAdjacency { node })?;

        for neighbor in neighbors {
            if predecessors.contains_key(&neighbor) {
                continue;
            }
            predecessors.insert(neighbor, Some(node));

            let next = distance.saturating_add(1);
            if next < max_len {
                queue.push_back((neighbor, next));
            }
        }
    }

    tracing::debug!(%start, %end, max_len, "no path within bound");
    Ok(Vec::new())
}

/// Walk predecessor links back to the start.
fn reconstruct(predecessors: &BTreeMap<NodeId, Option<NodeId>>, end: NodeId) -> RawPath {
    let mut path = vec![end];
    let mut current = predecessors.get(&end).copied().flatten();
    while let Some(node) = current {
        path.push(node);
        current = predecessors.get(&node).copied().flatten();
    }
    path.reverse();
    path
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::BTreeSet;

    fn adj(entries: &[(u32, &[u32])]) -> BTreeMap<NodeId, Vec<NodeId>> {
        entries
            .iter()
            .map(|(node, neighbors)| {
                (NodeId(*node), neighbors.iter().map(|n| NodeId(*n)).collect())
            })
            .collect()
    }

    fn ids(raw: &[u32]) -> RawPath {
        raw.iter().map(|n| NodeId(*n)).collect()
    }

    #[test]
    fn finds_simple_path_both_ways() -> Result<(), ConceptPathError> {
        let adjacency = adj(&[(0, &[1]), (1, &[0, 2]), (2, &[1])]);

        assert_eq!(search_shortest_path(NodeId(0), NodeId(2), &adjacency, 3)?, ids(&[0, 1, 2]));
        assert_eq!(search_shortest_path(NodeId(2), NodeId(0), &adjacency, 3)?, ids(&[2, 1, 0]));
        Ok(())
    }

    #[test]
    fn picks_shortest_among_alternatives() -> Result<(), ConceptPathError> {
        let adjacency = adj(&[
            (0, &[1, 3]),
            (1, &[0, 2, 3]),
            (2, &[1, 4]),
            (3, &[0, 1, 4]),
            (4, &[2, 3]),
        ]);

        assert_eq!(search_shortest_path(NodeId(0), NodeId(2), &adjacency, 3)?, ids(&[0, 1, 2]));
        assert_eq!(search_shortest_path(NodeId(2), NodeId(0), &adjacency, 3)?, ids(&[2, 1, 0]));
        Ok(())
    }

    #[test]
    fn bound_too_tight_yields_empty() -> Result<(), ConceptPathError> {
        let adjacency = adj(&[(0, &[1]), (1, &[0, 2]), (2, &[1])]);
        assert!(search_shortest_path(NodeId(0), NodeId(2), &adjacency, 2)?.is_empty());

        let chain = adj(&[(0, &[1]), (1, &[0, 2]), (2, &[1, 3]), (3, &[2, 4]), (4, &[3])]);
        assert!(search_shortest_path(NodeId(0), NodeId(4), &chain, 3)?.is_empty());
        assert_eq!(
            search_shortest_path(NodeId(0), NodeId(4), &chain, 5)?,
            ids(&[0, 1, 2, 3, 4])
        );
        Ok(())
    }

    #[test]
    fn disconnected_components_yield_empty() -> Result<(), ConceptPathError> {
        let adjacency = adj(&[(0, &[1]), (1, &[0]), (2, &[3]), (3, &[2])]);
        assert!(search_shortest_path(NodeId(0), NodeId(2), &adjacency, 3)?.is_empty());
        Ok(())
    }

    #[test]
    fn singleton_edge_cases() -> Result<(), ConceptPathError> {
        let single: BTreeMap<NodeId, BTreeSet<NodeId>> = BTreeMap::from([(NodeId(0), BTreeSet::new())]);
        assert_eq!(search_shortest_path(NodeId(0), NodeId(0), &single, 1)?, ids(&[0]));
        assert_eq!(search_shortest_path(NodeId(0), NodeId(0), &single, 0)?, ids(&[0]));

        let pair: BTreeMap<NodeId, BTreeSet<NodeId>> =
            BTreeMap::from([(NodeId(0), BTreeSet::new()), (NodeId(1), BTreeSet::new())]);
        assert!(search_shortest_path(NodeId(0), NodeId(1), &pair, 1)?.is_empty());
        Ok(())
    }

    #[test]
    fn missing_start_entry_is_contract_violation() {
        let adjacency = adj(&[(0, &[1]), (1, &[0])]);
        assert_eq!(
            search_shortest_path(NodeId(7), NodeId(0), &adjacency, 3),
            Err(ConceptPathError::MissingAdjacency { node: NodeId(7) })
        );
    }

    #[test]
    fn missing_neighbor_entry_is_contract_violation() {
        // 1 is referenced as a neighbor but has no entry of its own
        let adjacency = adj(&[(0, &[1]), (2, &[])]);
        assert_eq!(
            search_shortest_path(NodeId(0), NodeId(2), &adjacency, 3),
            Err(ConceptPathError::MissingAdjacency { node: NodeId(1) })
        );
    }

    #[test]
    fn works_over_hash_maps() -> Result<(), ConceptPathError> {
        let adjacency: HashMap<NodeId, Vec<NodeId>> = adj(&[(0, &[1]), (1, &[0])]).into_iter().collect();
        assert_eq!(search_shortest_path(NodeId(0), NodeId(1), &adjacency, 3)?, ids(&[0, 1]));
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Properties
    // -------------------------------------------------------------------------

    const NODES: u32 = 8;

    fn undirected(edges: &[(u32, u32)]) -> BTreeMap<NodeId, BTreeSet<NodeId>> {
        let mut adjacency: BTreeMap<NodeId, BTreeSet<NodeId>> =
            (0..NODES).map(|n| (NodeId(n), BTreeSet::new())).collect();
        for &(a, b) in edges {
            adjacency.entry(NodeId(a)).or_default().insert(NodeId(b));
            adjacency.entry(NodeId(b)).or_default().insert(NodeId(a));
        }
        adjacency
    }

    /// Unbounded BFS distance in nodes, as a reference.
    fn reference_nodes(adjacency: &BTreeMap<NodeId, BTreeSet<NodeId>>, start: NodeId, end: NodeId) -> Option<usize> {
        let mut seen = BTreeMap::from([(start, 1usize)]);
        let mut queue = VecDeque::from([start]);
        while let Some(node) = queue.pop_front() {
            let here = seen.get(&node).copied().unwrap_or(0);
            if node == end {
                return Some(here);
            }
            for next in adjacency.get(&node).into_iter().flatten() {
                if !seen.contains_key(next) {
                    seen.insert(*next, here + 1);
                    queue.push_back(*next);
                }
            }
        }
        None
    }

    proptest! {
        #[test]
        fn returns_a_minimal_walk_within_bound(
            edges in proptest::collection::vec((0..NODES, 0..NODES), 0..20),
            start in 0..NODES,
            end in 0..NODES,
            max_len in 1usize..6,
        ) {
            let adjacency = undirected(&edges);
            let path = search_shortest_path(NodeId(start), NodeId(end), &adjacency, max_len)
                .map_err(|e| TestCaseError::fail(e.to_string()))?;

            match reference_nodes(&adjacency, NodeId(start), NodeId(end)) {
                Some(nodes) if nodes <= max_len || start == end => prop_assert_eq!(path.len(), nodes),
                _ => prop_assert!(path.is_empty()),
            }

            for pair in path.windows(2) {
                prop_assert!(adjacency[&pair[0]].contains(&pair[1]));
            }
            if let (Some(first), Some(last)) = (path.first(), path.last()) {
                prop_assert_eq!(*first, NodeId(start));
                prop_assert_eq!(*last, NodeId(end));
            }
        }

        #[test]
        fn reverse_search_has_equal_length(
            edges in proptest::collection::vec((0..NODES, 0..NODES), 0..20),
            start in 0..NODES,
            end in 0..NODES,
        ) {
            let adjacency = undirected(&edges);
            let forward = search_shortest_path(NodeId(start), NodeId(end), &adjacency, 4)
                .map_err(|e| TestCaseError::fail(e.to_string()))?;
            let backward = search_shortest_path(NodeId(end), NodeId(start), &adjacency, 4)
                .map_err(|e| TestCaseError::fail(e.to_string()))?;
            prop_assert_eq!(forward.len(), backward.len());
        }
    }
}
