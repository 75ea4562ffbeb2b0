//! # Path Renderers
//!
//! Three interchangeable strategies that turn a raw path into text:
//!
//! - [`VerboseRenderer`]: every node with its id, every parallel edge
//! - [`BriefRenderer`]: one arrow per hop, strongest edge only
//! - [`NaturalRenderer`]: one sentence per hop, plus the hop weights
//!
//! All of them resolve hops through [`crate::edge`] and return an empty
//! rendering for an empty path.

mod brief;
mod natural;
mod templates;
mod verbose;

pub use brief::BriefRenderer;
pub use natural::{NaturalPath, NaturalRenderer};
pub use templates::{relation_template, RELATION_TEMPLATES};
pub use verbose::VerboseRenderer;

use crate::graph::ConceptGraph;
use crate::{ConceptPathError, NodeId};

/// Namespace prefix carried by relation labels in the source corpus.
pub const RELATION_PREFIX: &str = "/r/";

/// A strategy for rendering a raw path.
pub trait PathRenderer {
    type Output;

    fn render(&self, path: &[NodeId], graph: &ConceptGraph)
        -> Result<Self::Output, ConceptPathError>;
}

/// Strip the relation namespace, e.g. `/r/AtLocation` -> `AtLocation`.
#[must_use]
pub fn strip_relation_prefix(label: &str) -> &str {
    label.strip_prefix(RELATION_PREFIX).unwrap_or(label)
}
