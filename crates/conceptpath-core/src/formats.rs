//! # Snapshot Format
//!
//! Binary graph snapshots: a fixed header followed by a postcard-encoded
//! [`SerializableGraph`]. Only format conversion lives here; reading and
//! writing files is the application's job.

use crate::graph::{ConceptGraph, SerializableGraph};
use crate::ConceptPathError;
use serde::{Deserialize, Serialize};

/// Magic bytes at the start of every snapshot.
pub const SNAPSHOT_MAGIC: [u8; 4] = *b"CPGS";

/// Current snapshot version.
pub const SNAPSHOT_VERSION: u16 = 1;

/// Header preceding the encoded graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotHeader {
    pub magic: [u8; 4],
    pub version: u16,
}

impl SnapshotHeader {
    #[must_use]
    pub fn current() -> Self {
        Self {
            magic: SNAPSHOT_MAGIC,
            version: SNAPSHOT_VERSION,
        }
    }
}

#[derive(Serialize, Deserialize)]
struct Snapshot {
    header: SnapshotHeader,
    graph: SerializableGraph,
}

/// Encode a graph as a binary snapshot.
pub fn graph_to_bytes(graph: &ConceptGraph) -> Result<Vec<u8>, ConceptPathError> {
    let snapshot = Snapshot {
        header: SnapshotHeader::current(),
        graph: SerializableGraph::from(graph),
    };
    postcard::to_stdvec(&snapshot).map_err(|e| ConceptPathError::Serialization(e.to_string()))
}

/// Decode and validate a binary snapshot.
pub fn graph_from_bytes(bytes: &[u8]) -> Result<ConceptGraph, ConceptPathError> {
    let snapshot: Snapshot =
        postcard::from_bytes(bytes).map_err(|e| ConceptPathError::Serialization(e.to_string()))?;

    if snapshot.header.magic != SNAPSHOT_MAGIC {
        return Err(ConceptPathError::Serialization(
            "not a concept graph snapshot".to_string(),
        ));
    }
    if snapshot.header.version != SNAPSHOT_VERSION {
        return Err(ConceptPathError::Serialization(format!(
            "unsupported snapshot version {}",
            snapshot.header.version
        )));
    }

    ConceptGraph::try_from(snapshot.graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphBuilder;

    #[test]
    fn snapshot_roundtrip() -> Result<(), ConceptPathError> {
        let mut builder = GraphBuilder::new();
        builder.add_edge("baggage", "/r/AtLocation", "airport", 3.464)?;
        let graph = builder.build();

        let restored = graph_from_bytes(&graph_to_bytes(&graph)?)?;
        assert_eq!(restored.node_id("airport"), graph.node_id("airport"));
        assert_eq!(restored.descriptor_count(), 1);
        Ok(())
    }

    #[test]
    fn rejects_foreign_bytes() {
        let result = graph_from_bytes(&[0xde, 0xad, 0xbe, 0xef, 0x01]);
        assert!(matches!(result, Err(ConceptPathError::Serialization(_))));
    }

    #[test]
    fn rejects_future_versions() -> Result<(), ConceptPathError> {
        let snapshot = Snapshot {
            header: SnapshotHeader {
                magic: SNAPSHOT_MAGIC,
                version: SNAPSHOT_VERSION + 1,
            },
            graph: SerializableGraph::default(),
        };
        let bytes = postcard::to_stdvec(&snapshot)
            .map_err(|e| ConceptPathError::Serialization(e.to_string()))?;

        assert!(matches!(
            graph_from_bytes(&bytes),
            Err(ConceptPathError::Serialization(msg)) if msg.contains("version")
        ));
        Ok(())
    }
}
