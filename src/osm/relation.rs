use super::node::NodeKey;
use super::way::WayKey;
use crate::attributes::Attributes;

slotmap::new_key_type! {
    /// Identity of a relation inside an [`OsmMap`](super::OsmMap).
    pub struct RelationKey;
}

/// The entity a relation member points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberRef {
    Node(NodeKey),
    Way(WayKey),
    Relation(RelationKey),
}

/// One member of a relation: an entity and its declared role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    target: MemberRef,
    role: String,
}

impl Member {
    #[must_use]
    pub fn new(target: MemberRef, role: impl Into<String>) -> Self {
        Self {
            target,
            role: role.into(),
        }
    }

    #[must_use]
    pub fn target(&self) -> MemberRef {
        self.target
    }

    #[must_use]
    pub fn role(&self) -> &str {
        &self.role
    }

    /// Returns the way key if this member references a way.
    #[must_use]
    pub fn way(&self) -> Option<WayKey> {
        match self.target {
            MemberRef::Way(key) => Some(key),
            MemberRef::Node(_) | MemberRef::Relation(_) => None,
        }
    }
}

/// A group of members with roles, e.g. a multipolygon.
#[derive(Debug, Clone)]
pub struct OsmRelation {
    id: i64,
    members: Vec<Member>,
    attributes: Attributes,
}

impl OsmRelation {
    #[must_use]
    pub fn new(id: i64, members: Vec<Member>, attributes: Attributes) -> Self {
        Self {
            id,
            members,
            attributes,
        }
    }

    #[must_use]
    pub fn id(&self) -> i64 {
        self.id
    }

    #[must_use]
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    #[must_use]
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Ways referenced with the given role, in member order.
    pub fn ways_with_role<'a>(&'a self, role: &'a str) -> impl Iterator<Item = WayKey> + 'a {
        self.members
            .iter()
            .filter(move |m| m.role == role)
            .filter_map(Member::way)
    }
}
