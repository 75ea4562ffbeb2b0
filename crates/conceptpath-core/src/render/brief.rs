use super::{strip_relation_prefix, PathRenderer};
use crate::edge::strongest_edge;
use crate::graph::ConceptGraph;
use crate::{ConceptPathError, NodeId};

/// Renders a path as `airport <--AtLocation-- baggage`.
///
/// Each hop shows only its strongest edge; the arrow points in the
/// direction the assertion was recorded.
#[derive(Debug, Clone, Copy, Default)]
pub struct BriefRenderer;

impl PathRenderer for BriefRenderer {
    type Output = String;

    fn render(&self, path: &[NodeId], graph: &ConceptGraph) -> Result<String, ConceptPathError> {
        let Some(&first) = path.first() else {
            return Ok(String::new());
        };

        let mut parts = vec![graph.node_name(first)?.to_string()];

        for hop in path.windows(2) {
            let (from, to) = (hop[0], hop[1]);
            let (best, reversed) = strongest_edge(graph, from, to)?;
            let label = strip_relation_prefix(graph.label_name(best.label)?);

            parts.push(if reversed {
                format!("<--{label}--")
            } else {
                format!("--{label}-->")
            });
            parts.push(graph.node_name(to)?.to_string());
        }

        Ok(parts.join(" "))
    }
}
