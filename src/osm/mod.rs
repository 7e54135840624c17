pub mod node;
pub mod relation;
pub mod way;

pub use node::{NodeKey, OsmNode};
pub use relation::{Member, MemberRef, OsmRelation, RelationKey};
pub use way::{OsmWay, WayKey};

use std::collections::HashMap;

use crate::error::{OsmError, Result};
use slotmap::SlotMap;

/// Arena owning every node, way and relation of one OSM extract.
///
/// Entities reference each other through typed keys, so identity comparisons
/// never depend on structural equality. Nothing is ever removed, which keeps
/// iteration in insertion order.
#[derive(Debug, Default)]
pub struct OsmMap {
    nodes: SlotMap<NodeKey, OsmNode>,
    ways: SlotMap<WayKey, OsmWay>,
    relations: SlotMap<RelationKey, OsmRelation>,
}

impl OsmMap {
    #[must_use]
    pub fn builder() -> OsmMapBuilder {
        OsmMapBuilder::default()
    }

    /// Returns the node for `key`.
    ///
    /// # Errors
    ///
    /// Returns `OsmError::UnknownKey` if the key belongs to another map.
    pub fn node(&self, key: NodeKey) -> Result<&OsmNode> {
        self.nodes
            .get(key)
            .ok_or_else(|| OsmError::UnknownKey { kind: "node" }.into())
    }

    /// Returns the way for `key`.
    ///
    /// # Errors
    ///
    /// Returns `OsmError::UnknownKey` if the key belongs to another map.
    pub fn way(&self, key: WayKey) -> Result<&OsmWay> {
        self.ways
            .get(key)
            .ok_or_else(|| OsmError::UnknownKey { kind: "way" }.into())
    }

    /// Returns the relation for `key`.
    ///
    /// # Errors
    ///
    /// Returns `OsmError::UnknownKey` if the key belongs to another map.
    pub fn relation(&self, key: RelationKey) -> Result<&OsmRelation> {
        self.relations
            .get(key)
            .ok_or_else(|| OsmError::UnknownKey { kind: "relation" }.into())
    }

    pub fn nodes(&self) -> impl Iterator<Item = (NodeKey, &OsmNode)> {
        self.nodes.iter()
    }

    pub fn ways(&self) -> impl Iterator<Item = (WayKey, &OsmWay)> {
        self.ways.iter()
    }

    pub fn relations(&self) -> impl Iterator<Item = (RelationKey, &OsmRelation)> {
        self.relations.iter()
    }

    #[must_use]
    pub fn way_count(&self) -> usize {
        self.ways.len()
    }

    #[must_use]
    pub fn relation_count(&self) -> usize {
        self.relations.len()
    }
}

/// Builds an [`OsmMap`], checking id uniqueness and member references.
///
/// Entities must be added bottom-up: nodes before the ways using them, ways
/// and relations before the relations referencing them.
#[derive(Debug, Default)]
pub struct OsmMapBuilder {
    map: OsmMap,
    node_ids: HashMap<i64, NodeKey>,
    way_ids: HashMap<i64, WayKey>,
    relation_ids: HashMap<i64, RelationKey>,
}

impl OsmMapBuilder {
    /// Adds a node.
    ///
    /// # Errors
    ///
    /// Returns `OsmError::DuplicateId` if a node with the same id was added.
    pub fn add_node(&mut self, node: OsmNode) -> Result<NodeKey> {
        let id = node.id();
        if self.node_ids.contains_key(&id) {
            return Err(OsmError::DuplicateId { kind: "node", id }.into());
        }
        let key = self.map.nodes.insert(node);
        self.node_ids.insert(id, key);
        Ok(key)
    }

    /// Adds a way whose nodes were all added to this builder.
    ///
    /// # Errors
    ///
    /// Returns `OsmError::DuplicateId` for a repeated way id and
    /// `OsmError::UnknownKey` for a node reference this builder does not own.
    pub fn add_way(&mut self, way: OsmWay) -> Result<WayKey> {
        let id = way.id();
        if self.way_ids.contains_key(&id) {
            return Err(OsmError::DuplicateId { kind: "way", id }.into());
        }
        if way.nodes().iter().any(|&n| !self.map.nodes.contains_key(n)) {
            return Err(OsmError::UnknownKey { kind: "node" }.into());
        }
        let key = self.map.ways.insert(way);
        self.way_ids.insert(id, key);
        Ok(key)
    }

    /// Adds a relation whose members were all added to this builder.
    ///
    /// # Errors
    ///
    /// Returns `OsmError::DuplicateId` for a repeated relation id and
    /// `OsmError::UnknownKey` for a member this builder does not own.
    pub fn add_relation(&mut self, relation: OsmRelation) -> Result<RelationKey> {
        let id = relation.id();
        if self.relation_ids.contains_key(&id) {
            return Err(OsmError::DuplicateId {
                kind: "relation",
                id,
            }
            .into());
        }
        for member in relation.members() {
            let (known, kind) = match member.target() {
                MemberRef::Node(k) => (self.map.nodes.contains_key(k), "node"),
                MemberRef::Way(k) => (self.map.ways.contains_key(k), "way"),
                MemberRef::Relation(k) => (self.map.relations.contains_key(k), "relation"),
            };
            if !known {
                return Err(OsmError::UnknownKey { kind }.into());
            }
        }
        let key = self.map.relations.insert(relation);
        self.relation_ids.insert(id, key);
        Ok(key)
    }

    #[must_use]
    pub fn node_for_id(&self, id: i64) -> Option<NodeKey> {
        self.node_ids.get(&id).copied()
    }

    #[must_use]
    pub fn way_for_id(&self, id: i64) -> Option<WayKey> {
        self.way_ids.get(&id).copied()
    }

    #[must_use]
    pub fn relation_for_id(&self, id: i64) -> Option<RelationKey> {
        self.relation_ids.get(&id).copied()
    }

    #[must_use]
    pub fn build(self) -> OsmMap {
        self.map
    }
}
