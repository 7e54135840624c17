use std::collections::BTreeSet;

use tracing::debug;

use super::build_graph::graph_from_ways;
use super::extract_rings::ExtractRings;
use crate::attributes::Attributed;
use crate::error::Result;
use crate::geometry::polygon::PolygonBuilder;
use crate::geometry::{Polygon, Ring};
use crate::osm::{OsmMap, OsmRelation, OsmWay};
use crate::projection::Projection;

/// Member role of a hole boundary.
pub const INNER_ROLE: &str = "inner";

/// Member role of a shell boundary.
pub const OUTER_ROLE: &str = "outer";

/// Assembles the polygons described by a multipolygon relation.
///
/// # Algorithm
///
/// 1. Split the relation's way members into `inner` and `outer` roles.
/// 2. Build one node graph per role and extract its rings.
/// 3. Sort shells by ascending area and give each inner ring to the first
///    shell that contains the inner ring's first point.
///
/// Relations without outer rings yield nothing. Inner rings that no shell
/// contains are dropped.
pub struct AssemblePolygons<'a> {
    relation: &'a OsmRelation,
    polygon_keys: &'a BTreeSet<String>,
}

impl<'a> AssemblePolygons<'a> {
    /// Creates the operation; the relation's attributes are restricted to
    /// `polygon_keys` on output.
    #[must_use]
    pub fn new(relation: &'a OsmRelation, polygon_keys: &'a BTreeSet<String>) -> Self {
        Self {
            relation,
            polygon_keys,
        }
    }

    /// Executes the assembly.
    ///
    /// # Errors
    ///
    /// Returns `OsmError::UnknownKey` if a member does not belong to `map`.
    pub fn execute<P: Projection>(
        &self,
        map: &OsmMap,
        projection: &P,
    ) -> Result<Vec<Attributed<Polygon>>> {
        let outer = self.rings_for_role(OUTER_ROLE, map, projection)?;
        if outer.is_empty() {
            debug!(relation = self.relation.id(), "relation has no outer ring");
            return Ok(Vec::new());
        }
        let inner = self.rings_for_role(INNER_ROLE, map, projection)?;

        let attributes = self.relation.attributes().keep_only_keys(self.polygon_keys);
        let polygons = nest_holes(outer, inner)
            .into_iter()
            .map(|polygon| Attributed::new(polygon, attributes.clone()))
            .collect();
        Ok(polygons)
    }

    fn rings_for_role<P: Projection>(
        &self,
        role: &str,
        map: &OsmMap,
        projection: &P,
    ) -> Result<Vec<Ring>> {
        let ways = self
            .relation
            .ways_with_role(role)
            .map(|key| map.way(key))
            .collect::<Result<Vec<&OsmWay>>>()?;
        let graph = graph_from_ways(ways)?;
        ExtractRings::new(&graph)
            .execute(|node| map.node(node).map(|n| projection.project(n.position())))
    }
}

/// Nests holes into shells.
///
/// Shells are ordered by ascending area (ties keep their input order). Each
/// hole goes to the first shell containing its first point; holes no shell
/// contains are dropped.
#[must_use]
pub fn nest_holes(mut shells: Vec<Ring>, holes: Vec<Ring>) -> Vec<Polygon> {
    shells.sort_by(|a, b| a.area().total_cmp(&b.area()));
    let mut builders: Vec<PolygonBuilder> = shells.into_iter().map(PolygonBuilder::new).collect();

    for hole in holes {
        let first = hole.first_point();
        match builders.iter_mut().find(|b| b.shell().contains_point(&first)) {
            Some(builder) => builder.add_hole(hole),
            None => debug!(at = %first, "inner ring lies outside every outer ring"),
        }
    }

    builders.into_iter().map(PolygonBuilder::build).collect()
}
