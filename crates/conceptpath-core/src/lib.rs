//! # conceptpath-core
//!
//! The graph core for connecting terms through a commonsense concept graph.
//!
//! Given a read-only [`ConceptGraph`], this crate finds the shortest path
//! between two terms (breadth-first, bounded by node count), renders the
//! path as text and ranks many candidate paths against a budget.
//!
//! ## Data Flow
//!
//! ```text
//! terms -> Normalizer -> PathFinder -> search_shortest_path -> RawPath
//!       -> PathRenderer (verbose | brief | natural) -> text
//! many (text, weights) -> select_paths -> Knowledge::summary
//! ```
//!
//! ## Architectural Constraints
//!
//! - No async, no network, no file I/O
//! - Deterministic containers: neighbor order is ascending node id
//! - The graph is never mutated after construction and may be shared
//!   across threads without locking

// =============================================================================
// MODULES
// =============================================================================

pub mod edge;
pub mod formats;
pub mod graph;
pub mod knowledge;
pub mod normalize;
pub mod pathfinder;
pub mod render;
pub mod search;
pub mod select;
pub mod types;

// =============================================================================
// RE-EXPORTS: Core Types
// =============================================================================

pub use types::{ConceptPathError, EdgeDescriptor, LabelId, NodeId, RawPath};

// =============================================================================
// RE-EXPORTS: Graph Core
// =============================================================================

pub use edge::{resolve_edge, strongest_edge, ResolvedEdge};
pub use graph::{ConceptGraph, GraphBuilder, SerializableGraph, SerializedEdge};
pub use knowledge::{gather_knowledge, Knowledge};
pub use normalize::{CaseFoldNormalizer, ConceptUriNormalizer, Normalizer};
pub use pathfinder::{PathFinder, DEFAULT_MAX_PATH_LEN};
pub use render::{BriefRenderer, NaturalPath, NaturalRenderer, PathRenderer, VerboseRenderer};
pub use search::{search_shortest_path, Adjacency};
pub use select::{select_paths, PathCandidate, DEFAULT_MAX_PATHS};

// =============================================================================
// RE-EXPORTS: Formats
// =============================================================================

pub use formats::{graph_from_bytes, graph_to_bytes, SnapshotHeader};
