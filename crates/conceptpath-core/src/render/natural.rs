use super::templates::{fill_template, relation_template};
use super::{strip_relation_prefix, PathRenderer};
use crate::edge::strongest_edge;
use crate::graph::ConceptGraph;
use crate::{ConceptPathError, NodeId};
use serde::{Deserialize, Serialize};

/// A path told as sentences, with the weight of each hop's chosen edge.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NaturalPath {
    /// Hop sentences joined by single spaces.
    pub text: String,
    /// One weight per hop, `path.len() - 1` entries.
    pub weights: Vec<f64>,
}

impl NaturalPath {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Renders each hop as a sentence from the relation template table.
///
/// Reversed hops swap subject and object, so every sentence reads in the
/// direction the assertion was recorded. A label without a template is an
/// error, not a skipped hop.
#[derive(Debug, Clone, Copy, Default)]
pub struct NaturalRenderer;

impl PathRenderer for NaturalRenderer {
    type Output = NaturalPath;

    fn render(&self, path: &[NodeId], graph: &ConceptGraph) -> Result<NaturalPath, ConceptPathError> {
        let mut sentences = Vec::with_capacity(path.len().saturating_sub(1));
        let mut weights = Vec::with_capacity(path.len().saturating_sub(1));

        for hop in path.windows(2) {
            let (from, to) = (hop[0], hop[1]);
            let (best, reversed) = strongest_edge(graph, from, to)?;
            let relation = strip_relation_prefix(graph.label_name(best.label)?);

            let template = relation_template(relation).ok_or_else(|| {
                ConceptPathError::MissingTemplate {
                    label: relation.to_string(),
                }
            })?;

            let (subject, object) = if reversed { (to, from) } else { (from, to) };
            let mut sentence =
                fill_template(template, graph.node_name(subject)?, graph.node_name(object)?);
            sentence.push('.');

            sentences.push(sentence);
            weights.push(best.weight);
        }

        Ok(NaturalPath {
            text: sentences.join(" "),
            weights,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphBuilder;

    #[test]
    fn reversed_hop_reads_in_recorded_direction() -> Result<(), ConceptPathError> {
        let mut builder = GraphBuilder::new();
        builder.add_edge("baggage", "/r/AtLocation", "airport", 3.464)?;
        let graph = builder.build();

        let rendered = NaturalRenderer.render(&[NodeId(1), NodeId(0)], &graph)?;
        assert_eq!(rendered.text, "You are likely to find baggage in airport.");
        assert_eq!(rendered.weights, vec![3.464]);
        Ok(())
    }

    #[test]
    fn joins_hop_sentences_with_spaces() -> Result<(), ConceptPathError> {
        let mut builder = GraphBuilder::new();
        builder.add_edge("wheel", "/r/PartOf", "car", 2.0)?;
        builder.add_edge("car", "/r/UsedFor", "driving", 1.5)?;
        let graph = builder.build();

        let rendered = NaturalRenderer.render(&[NodeId(0), NodeId(1), NodeId(2)], &graph)?;
        assert_eq!(rendered.text, "car has wheel. car is used for driving.");
        assert_eq!(rendered.weights.len(), 2);
        Ok(())
    }

    #[test]
    fn empty_and_single_node_paths() -> Result<(), ConceptPathError> {
        let mut builder = GraphBuilder::new();
        builder.add_node("solo")?;
        let graph = builder.build();

        assert_eq!(NaturalRenderer.render(&[], &graph)?, NaturalPath::default());
        assert_eq!(NaturalRenderer.render(&[NodeId(0)], &graph)?, NaturalPath::default());
        Ok(())
    }

    #[test]
    fn unknown_relation_is_fatal() -> Result<(), ConceptPathError> {
        let mut builder = GraphBuilder::new();
        builder.add_edge("a", "/r/Inventedby", "b", 1.0)?;
        let graph = builder.build();

        let err = NaturalRenderer.render(&[NodeId(0), NodeId(1)], &graph).err();
        assert_eq!(
            err,
            Some(ConceptPathError::MissingTemplate {
                label: "Inventedby".to_string()
            })
        );
        Ok(())
    }
}
