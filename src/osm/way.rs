use super::node::NodeKey;
use crate::attributes::Attributes;
use crate::error::{OsmError, Result};

slotmap::new_key_type! {
    /// Identity of a way inside an [`OsmMap`](super::OsmMap).
    pub struct WayKey;
}

/// An ordered sequence of at least two node references.
///
/// A way is closed when its first and last references are the same node.
#[derive(Debug, Clone)]
pub struct OsmWay {
    id: i64,
    nodes: Vec<NodeKey>,
    attributes: Attributes,
}

impl OsmWay {
    /// Creates a way.
    ///
    /// # Errors
    ///
    /// Returns `OsmError::TooFewNodes` if fewer than two nodes are given.
    pub fn new(id: i64, nodes: Vec<NodeKey>, attributes: Attributes) -> Result<Self> {
        if nodes.len() < 2 {
            return Err(OsmError::TooFewNodes {
                id,
                count: nodes.len(),
            }
            .into());
        }
        Ok(Self {
            id,
            nodes,
            attributes,
        })
    }

    #[must_use]
    pub fn id(&self) -> i64 {
        self.id
    }

    #[must_use]
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    #[must_use]
    pub fn nodes(&self) -> &[NodeKey] {
        &self.nodes
    }

    #[must_use]
    pub fn nodes_count(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn first_node(&self) -> NodeKey {
        self.nodes[0]
    }

    #[must_use]
    pub fn last_node(&self) -> NodeKey {
        self.nodes[self.nodes.len() - 1]
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.first_node() == self.last_node()
    }

    /// Node references without the closing repetition of a closed way.
    #[must_use]
    pub fn non_repeating_nodes(&self) -> &[NodeKey] {
        if self.is_closed() {
            &self.nodes[..self.nodes.len() - 1]
        } else {
            &self.nodes
        }
    }
}
