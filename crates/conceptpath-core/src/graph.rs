//! # Graph Store
//!
//! The immutable in-memory concept graph.
//!
//! Traversal treats the graph as undirected: every assertion `a -> b` puts
//! `b` in `adj(a)` and `a` in `adj(b)`. The edge-descriptor table keeps only
//! the direction in which an assertion was recorded, so consumers resolve an
//! edge by trying `(u, v)` first and `(v, u)` second (see [`crate::edge`]).
//!
//! All containers are `BTreeMap`/`BTreeSet`, so neighbor iteration is in
//! ascending node id and every traversal is reproducible.

use crate::search::Adjacency;
use crate::{ConceptPathError, EdgeDescriptor, LabelId, NodeId};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Undirected adjacency: node -> set of one-hop neighbors.
pub type AdjacencyLists = BTreeMap<NodeId, BTreeSet<NodeId>>;

/// Directed attribute table: ordered pair -> descriptors recorded in that direction.
pub type EdgeTable = BTreeMap<(NodeId, NodeId), BTreeSet<EdgeDescriptor>>;

// =============================================================================
// CONCEPT GRAPH
// =============================================================================

/// The read-only graph store.
///
/// Built once, then shared by reference across any number of searches and
/// renderings. Nothing in this crate mutates it after construction.
#[derive(Debug, Clone, Default)]
pub struct ConceptGraph {
    /// NodeId -> normalized name
    node_names: Vec<String>,

    /// Normalized name -> NodeId
    node_index: BTreeMap<String, NodeId>,

    /// LabelId -> relation name
    label_names: Vec<String>,

    /// Relation name -> LabelId
    label_index: BTreeMap<String, LabelId>,

    /// One entry (possibly empty) per node.
    adjacency: AdjacencyLists,

    /// Descriptors keyed by their original direction.
    edge_descriptors: EdgeTable,
}

impl ConceptGraph {
    /// Assemble a graph from the four tables produced by an ingestion step.
    ///
    /// Nodes without an adjacency entry get an empty one. Fails with
    /// `InvalidGraph` when an id is out of range, adjacency is not symmetric,
    /// an adjacent pair has no descriptors in either direction, or a
    /// descriptor key is not backed by adjacency.
    pub fn from_parts(
        nodes: Vec<String>,
        labels: Vec<String>,
        mut adjacency: AdjacencyLists,
        edge_descriptors: EdgeTable,
    ) -> Result<Self, ConceptPathError> {
        let node_count = nodes.len();
        let label_count = labels.len();

        let node_index = index_names(&nodes, NodeId)?;
        let label_index = index_names(&labels, LabelId)?;

        for (&node, neighbors) in &adjacency {
            check_node(node, node_count)?;
            for &neighbor in neighbors {
                check_node(neighbor, node_count)?;
                let symmetric = adjacency
                    .get(&neighbor)
                    .is_some_and(|back| back.contains(&node));
                if !symmetric {
                    return Err(ConceptPathError::InvalidGraph(format!(
                        "adjacency is not symmetric for ({node}, {neighbor})"
                    )));
                }
                if !edge_descriptors.contains_key(&(node, neighbor))
                    && !edge_descriptors.contains_key(&(neighbor, node))
                {
                    return Err(ConceptPathError::MissingEdgeDescriptors {
                        from: node,
                        to: neighbor,
                    });
                }
            }
        }

        for (&(from, to), descriptors) in &edge_descriptors {
            let backed = adjacency.get(&from).is_some_and(|n| n.contains(&to));
            if !backed {
                return Err(ConceptPathError::InvalidGraph(format!(
                    "edge ({from}, {to}) has descriptors but is missing from adjacency"
                )));
            }
            if descriptors.is_empty() {
                return Err(ConceptPathError::InvalidGraph(format!(
                    "edge ({from}, {to}) has an empty descriptor set"
                )));
            }
            if let Some(bad) = descriptors.iter().find(|d| d.label.index() >= label_count) {
                return Err(ConceptPathError::UnknownLabel(bad.label));
            }
        }

        for index in 0..node_count {
            adjacency.entry(NodeId(index as u32)).or_default();
        }

        Ok(Self {
            node_names: nodes,
            node_index,
            label_names: labels,
            label_index,
            adjacency,
            edge_descriptors,
        })
    }

    /// Name of a node.
    pub fn node_name(&self, id: NodeId) -> Result<&str, ConceptPathError> {
        self.node_names
            .get(id.index())
            .map(String::as_str)
            .ok_or(ConceptPathError::UnknownNode(id))
    }

    /// Node for an already-normalized name.
    #[must_use]
    pub fn node_id(&self, name: &str) -> Option<NodeId> {
        self.node_index.get(name).copied()
    }

    /// Name of a relation label.
    pub fn label_name(&self, id: LabelId) -> Result<&str, ConceptPathError> {
        self.label_names
            .get(id.index())
            .map(String::as_str)
            .ok_or(ConceptPathError::UnknownLabel(id))
    }

    /// Label for a relation name.
    #[must_use]
    pub fn label_id(&self, name: &str) -> Option<LabelId> {
        self.label_index.get(name).copied()
    }

    /// One-hop neighbors in ascending id order. Empty for unknown nodes.
    pub fn neighbors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.adjacency
            .get(&node)
            .into_iter()
            .flat_map(|targets| targets.iter().copied())
    }

    /// Descriptors recorded in the direction `from -> to`, if any.
    #[must_use]
    pub fn edge_descriptors(&self, from: NodeId, to: NodeId) -> Option<&BTreeSet<EdgeDescriptor>> {
        self.edge_descriptors.get(&(from, to))
    }

    /// The undirected adjacency table.
    #[must_use]
    pub fn adjacency(&self) -> &AdjacencyLists {
        &self.adjacency
    }

    /// All directed edges with their descriptors, in key order.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId, &BTreeSet<EdgeDescriptor>)> {
        self.edge_descriptors
            .iter()
            .map(|(&(from, to), descriptors)| (from, to, descriptors))
    }

    #[must_use]
    pub fn contains_node(&self, id: NodeId) -> bool {
        id.index() < self.node_names.len()
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.node_names.len()
    }

    #[must_use]
    pub fn label_count(&self) -> usize {
        self.label_names.len()
    }

    /// Number of ordered node pairs with descriptors.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_descriptors.len()
    }

    /// Number of descriptors across all pairs, parallel edges included.
    #[must_use]
    pub fn descriptor_count(&self) -> usize {
        self.edge_descriptors.values().map(BTreeSet::len).sum()
    }
}

impl Adjacency for ConceptGraph {
    fn neighbors(&self, node: NodeId) -> Option<impl Iterator<Item = NodeId>> {
        self.adjacency.get(&node).map(|set| set.iter().copied())
    }
}

/// Build a name -> id index. The last occurrence of a duplicate name wins,
/// since ingestion attaches every edge to that id.
fn index_names<I>(
    names: &[String],
    make_id: impl Fn(u32) -> I,
) -> Result<BTreeMap<String, I>, ConceptPathError> {
    let mut index = BTreeMap::new();
    for (position, name) in names.iter().enumerate() {
        let raw = u32::try_from(position).map_err(|_| {
            ConceptPathError::InvalidGraph(format!("too many entries ({})", names.len()))
        })?;
        index.insert(name.clone(), make_id(raw));
    }
    Ok(index)
}

fn check_node(node: NodeId, node_count: usize) -> Result<(), ConceptPathError> {
    if node.index() < node_count {
        Ok(())
    } else {
        Err(ConceptPathError::UnknownNode(node))
    }
}

// =============================================================================
// GRAPH BUILDER
// =============================================================================

/// Incremental constructor for a [`ConceptGraph`].
///
/// Names are taken as given; normalizing them is the caller's job.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    node_names: Vec<String>,
    node_index: BTreeMap<String, NodeId>,
    label_names: Vec<String>,
    label_index: BTreeMap<String, LabelId>,
    adjacency: AdjacencyLists,
    edge_descriptors: EdgeTable,
    next_row: u64,
}

impl GraphBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node. Returns the existing id if the name is already known.
    pub fn add_node(&mut self, name: impl Into<String>) -> Result<NodeId, ConceptPathError> {
        let name = name.into();
        if let Some(&id) = self.node_index.get(&name) {
            return Ok(id);
        }
        let id = NodeId(next_index(self.node_names.len())?);
        self.node_names.push(name.clone());
        self.node_index.insert(name, id);
        self.adjacency.insert(id, BTreeSet::new());
        Ok(id)
    }

    /// Insert a relation label. Returns the existing id if already known.
    pub fn add_label(&mut self, name: impl Into<String>) -> Result<LabelId, ConceptPathError> {
        let name = name.into();
        if let Some(&id) = self.label_index.get(&name) {
            return Ok(id);
        }
        let id = LabelId(next_index(self.label_names.len())?);
        self.label_names.push(name.clone());
        self.label_index.insert(name, id);
        Ok(id)
    }

    /// Record the assertion `start --label--> end` with the next source row.
    pub fn add_edge(
        &mut self,
        start: &str,
        label: &str,
        end: &str,
        weight: f64,
    ) -> Result<(), ConceptPathError> {
        let row = self.next_row;
        self.add_edge_with_row(start, label, end, weight, row)
    }

    /// Record an assertion with an explicit source row.
    pub fn add_edge_with_row(
        &mut self,
        start: &str,
        label: &str,
        end: &str,
        weight: f64,
        source_row: u64,
    ) -> Result<(), ConceptPathError> {
        let from = self.add_node(start)?;
        let to = self.add_node(end)?;
        let label = self.add_label(label)?;

        self.adjacency.entry(from).or_default().insert(to);
        self.adjacency.entry(to).or_default().insert(from);
        self.edge_descriptors
            .entry((from, to))
            .or_default()
            .insert(EdgeDescriptor::new(label, weight, source_row));

        self.next_row = self.next_row.max(source_row.saturating_add(1));
        Ok(())
    }

    /// Freeze into a read-only graph.
    #[must_use]
    pub fn build(self) -> ConceptGraph {
        ConceptGraph {
            node_names: self.node_names,
            node_index: self.node_index,
            label_names: self.label_names,
            label_index: self.label_index,
            adjacency: self.adjacency,
            edge_descriptors: self.edge_descriptors,
        }
    }
}

fn next_index(len: usize) -> Result<u32, ConceptPathError> {
    u32::try_from(len)
        .map_err(|_| ConceptPathError::InvalidGraph(format!("too many entries ({len})")))
}

// =============================================================================
// SERIALIZATION SUPPORT
// =============================================================================

/// One assertion in its original direction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SerializedEdge {
    pub from: NodeId,
    pub to: NodeId,
    pub label: LabelId,
    pub weight: f64,
    pub source_row: u64,
}

/// Serializable representation of the graph.
///
/// Adjacency is not stored; it is rebuilt from the edges on load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SerializableGraph {
    pub nodes: Vec<String>,
    pub labels: Vec<String>,
    pub edges: Vec<SerializedEdge>,
}

impl From<&ConceptGraph> for SerializableGraph {
    fn from(graph: &ConceptGraph) -> Self {
        let edges = graph
            .edges()
            .flat_map(|(from, to, descriptors)| {
                descriptors.iter().map(move |d| SerializedEdge {
                    from,
                    to,
                    label: d.label,
                    weight: d.weight,
                    source_row: d.source_row,
                })
            })
            .collect();

        Self {
            nodes: graph.node_names.clone(),
            labels: graph.label_names.clone(),
            edges,
        }
    }
}

impl TryFrom<SerializableGraph> for ConceptGraph {
    type Error = ConceptPathError;

    fn try_from(sg: SerializableGraph) -> Result<Self, Self::Error> {
        let mut adjacency = AdjacencyLists::new();
        let mut edge_descriptors = EdgeTable::new();

        for edge in sg.edges {
            adjacency.entry(edge.from).or_default().insert(edge.to);
            adjacency.entry(edge.to).or_default().insert(edge.from);
            edge_descriptors
                .entry((edge.from, edge.to))
                .or_default()
                .insert(EdgeDescriptor::new(edge.label, edge.weight, edge.source_row));
        }

        Self::from_parts(sg.nodes, sg.labels, adjacency, edge_descriptors)
    }
}

// =============================================================================
// TESTS
// =============================================================================
