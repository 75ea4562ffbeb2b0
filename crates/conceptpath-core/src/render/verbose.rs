use super::PathRenderer;
use crate::edge::resolve_edge;
use crate::graph::ConceptGraph;
use crate::{ConceptPathError, NodeId};

/// Renders nodes and all parallel edges, with ids and weights.
///
/// Output alternates node and edge entries, so a path of `n` nodes yields
/// `2n - 1` strings, e.g.
///
/// ```text
/// ["airport (35496)",
///  "/r/AtLocation (idx 1, weight 2.828, reversed),/r/AtLocation (idx 1, weight 3.464, reversed)",
///  "baggage (121612)"]
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct VerboseRenderer;

impl PathRenderer for VerboseRenderer {
    type Output = Vec<String>;

    fn render(&self, path: &[NodeId], graph: &ConceptGraph) -> Result<Vec<String>, ConceptPathError> {
        let Some(&first) = path.first() else {
            return Ok(Vec::new());
        };

        let mut rendered = Vec::with_capacity(path.len().saturating_mul(2));
        rendered.push(node_entry(graph, first)?);

        for hop in path.windows(2) {
            let (from, to) = (hop[0], hop[1]);
            let resolved = resolve_edge(graph, from, to)?;
            let suffix = if resolved.reversed { ", reversed" } else { "" };

            let edges = resolved
                .descriptors
                .iter()
                .map(|d| -> Result<String, ConceptPathError> {
                    Ok(format!(
                        "{} (idx {}, weight {}{})",
                        graph.label_name(d.label)?,
                        d.label,
                        format_weight(d.weight),
                        suffix
                    ))
                })
                .collect::<Result<Vec<_>, _>>()?;

            rendered.push(edges.join(","));
            rendered.push(node_entry(graph, to)?);
        }

        Ok(rendered)
    }
}

fn node_entry(graph: &ConceptGraph, node: NodeId) -> Result<String, ConceptPathError> {
    Ok(format!("{} ({})", graph.node_name(node)?, node))
}

/// Shortest round-trip text for a weight: `1.0`, `3.464`, `1e+16`,
/// `1.5e-05`, `nan`, `inf`.
///
/// Plain decimal for exponents in `-4..16`, scientific notation outside it
/// with a signed exponent of at least two digits.
fn format_weight(weight: f64) -> String {
    if weight.is_nan() {
        return "nan".to_string();
    }
    if weight.is_infinite() {
        return if weight > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let scientific = format!("{weight:e}");
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return format!("{weight:?}");
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return format!("{weight:?}");
    };

    if (-4..16).contains(&exponent) {
        let decimal = weight.to_string();
        if decimal.contains('.') {
            decimal
        } else {
            format!("{decimal}.0")
        }
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{mantissa}e{sign}{:02}", exponent.unsigned_abs())
    }
}
