use crate::attributes::Attributes;
use crate::projection::PointGeo;

slotmap::new_key_type! {
    /// Identity of a node inside an [`OsmMap`](super::OsmMap).
    pub struct NodeKey;
}

/// An OSM node: a geographic position with attributes.
#[derive(Debug, Clone)]
pub struct OsmNode {
    id: i64,
    position: PointGeo,
    attributes: Attributes,
}

impl OsmNode {
    #[must_use]
    pub fn new(id: i64, position: PointGeo, attributes: Attributes) -> Self {
        Self {
            id,
            position,
            attributes,
        }
    }

    #[must_use]
    pub fn id(&self) -> i64 {
        self.id
    }

    #[must_use]
    pub fn position(&self) -> PointGeo {
        self.position
    }

    #[must_use]
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }
}
