use std::collections::HashSet;

use tracing::{debug, debug_span};

use super::params::TransformParams;
use crate::error::Result;
use crate::map::GeoMap;
use crate::operations::assembly::{AssemblePolygons, INNER_ROLE, OUTER_ROLE};
use crate::operations::classify::{ClassifyWay, WayFeature};
use crate::osm::{OsmMap, WayKey};
use crate::projection::Projection;

/// Converts an [`OsmMap`] into renderable planar geometry.
///
/// Standalone ways go through [`ClassifyWay`]; every relation goes through
/// [`AssemblePolygons`]. Ways used as `inner` or `outer` members of a relation
/// only contribute through that relation.
///
/// The transform is a pure function of its input: the same map, projection
/// and parameters always produce the same [`GeoMap`], in the same order.
#[derive(Debug)]
pub struct OsmToGeo<P> {
    projection: P,
    params: TransformParams,
}

impl<P: Projection> OsmToGeo<P> {
    /// Creates a transformer with default [`TransformParams`].
    #[must_use]
    pub fn new(projection: P) -> Self {
        Self {
            projection,
            params: TransformParams::default(),
        }
    }

    /// Overrides the classification and filtering parameters.
    #[must_use]
    pub fn with_params(mut self, params: TransformParams) -> Self {
        self.params = params;
        self
    }

    #[must_use]
    pub fn params(&self) -> &TransformParams {
        &self.params
    }

    /// Executes the transform.
    ///
    /// # Errors
    ///
    /// Returns an error only on internal API misuse, such as an entity key
    /// that does not belong to `osm`.
    pub fn transform(&self, osm: &OsmMap) -> Result<GeoMap> {
        let _span = debug_span!(
            "transform",
            ways = osm.way_count(),
            relations = osm.relation_count()
        )
        .entered();

        let members = multipolygon_member_ways(osm);
        let mut builder = GeoMap::builder();

        for (key, way) in osm.ways() {
            if members.contains(&key) {
                continue;
            }
            match ClassifyWay::new(way, &self.params).execute(osm, &self.projection)? {
                Some(WayFeature::PolyLine(polyline)) => builder.add_polyline(polyline),
                Some(WayFeature::Polygon(polygon)) => builder.add_polygon(polygon),
                None => {}
            }
        }

        for (_, relation) in osm.relations() {
            let polygons = AssemblePolygons::new(relation, &self.params.polygon_keys)
                .execute(osm, &self.projection)?;
            for polygon in polygons {
                builder.add_polygon(polygon);
            }
        }

        let map = builder.build();
        debug!(
            polylines = map.polylines().len(),
            polygons = map.polygons().len(),
            "transform finished"
        );
        Ok(map)
    }
}

/// Ways referenced with an `inner` or `outer` role by any relation.
fn multipolygon_member_ways(osm: &OsmMap) -> HashSet<WayKey> {
    osm.relations()
        .flat_map(|(_, relation)| {
            relation
                .ways_with_role(INNER_ROLE)
                .chain(relation.ways_with_role(OUTER_ROLE))
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::attributes::Attributes;
    use crate::geometry::Ring;
    use crate::math::Point2;
    use crate::osm::{Member, MemberRef, NodeKey, OsmMapBuilder, OsmNode, OsmRelation, OsmWay};
    use crate::projection::{Ch1903, Equirectangular, PointGeo};
    use approx::assert_relative_eq;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    fn tags(pairs: &[(&str, &str)]) -> Attributes {
        pairs.iter().copied().collect()
    }

    /// Builds maps with automatically numbered entities; coordinates in degrees.
    #[derive(Default)]
    struct TestMap {
        builder: OsmMapBuilder,
        next_id: i64,
    }

    impl TestMap {
        fn id(&mut self) -> i64 {
            self.next_id += 1;
            self.next_id
        }

        fn node(&mut self, lon: f64, lat: f64) -> NodeKey {
            let id = self.id();
            let position = PointGeo::from_degrees(lon, lat).unwrap();
            self.builder
                .add_node(OsmNode::new(id, position, Attributes::default()))
                .unwrap()
        }

        fn nodes(&mut self, coords: &[(f64, f64)]) -> Vec<NodeKey> {
            coords.iter().map(|&(lon, lat)| self.node(lon, lat)).collect()
        }

        fn way(&mut self, nodes: &[NodeKey], pairs: &[(&str, &str)]) -> WayKey {
            let id = self.id();
            let way = OsmWay::new(id, nodes.to_vec(), tags(pairs)).unwrap();
            self.builder.add_way(way).unwrap()
        }

        /// Closed way through `nodes`.
        fn ring_way(&mut self, nodes: &[NodeKey]) -> WayKey {
            let mut closed = nodes.to_vec();
            closed.push(nodes[0]);
            self.way(&closed, &[])
        }

        fn relation(&mut self, members: &[(WayKey, &str)], pairs: &[(&str, &str)]) {
            let id = self.id();
            let members = members
                .iter()
                .map(|&(way, role)| Member::new(MemberRef::Way(way), role))
                .collect();
            self.builder
                .add_relation(OsmRelation::new(id, members, tags(pairs)))
                .unwrap();
        }

        fn transform(self) -> GeoMap {
            init_tracing();
            OsmToGeo::new(Equirectangular)
                .transform(&self.builder.build())
                .unwrap()
        }
    }

    fn project(lon: f64, lat: f64) -> Point2 {
        Equirectangular.project(PointGeo::from_degrees(lon, lat).unwrap())
    }

    fn sorted_points(ring: &Ring) -> Vec<(f64, f64)> {
        let mut points: Vec<(f64, f64)> = ring.points().iter().map(|p| (p.x, p.y)).collect();
        points.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.total_cmp(&b.1)));
        points
    }

    const OUTER: [(f64, f64); 4] = [(47.0, 7.0), (47.0, 6.0), (46.0, 6.0), (46.0, 7.0)];
    const INNER: [(f64, f64); 4] = [(46.8, 6.8), (46.8, 6.2), (46.2, 6.2), (46.2, 6.8)];

    #[test]
    fn relation_with_one_hole() {
        let mut t = TestMap::default();
        let outer = t.nodes(&OUTER);
        let inner = t.nodes(&INNER);
        let outer = t.ring_way(&outer);
        let inner = t.ring_way(&inner);
        t.relation(
            &[(outer, "outer"), (inner, "inner")],
            &[("type", "multipolygon"), ("natural", "water")],
        );

        let map = t.transform();
        assert!(map.polylines().is_empty());
        assert_eq!(map.polygons().len(), 1);
        let polygon = &map.polygons()[0];
        assert_eq!(polygon.value().holes().len(), 1);
        assert_eq!(polygon.attributes(), &tags(&[("natural", "water")]));
        assert!(polygon.value().area() < polygon.value().shell().area());
    }

    #[test]
    fn relation_with_two_disjoint_shells() {
        let mut t = TestMap::default();
        let a = t.nodes(&OUTER);
        let b = t.nodes(&[(40.0, 7.0), (40.0, 6.0), (39.0, 6.0)]);
        let a = t.ring_way(&a);
        let b = t.ring_way(&b);
        t.relation(&[(a, "outer"), (b, "outer")], &[("landuse", "forest")]);

        let map = t.transform();
        assert_eq!(map.polygons().len(), 2);
        for polygon in map.polygons() {
            assert!(polygon.value().holes().is_empty());
            assert_eq!(polygon.attribute_value("landuse"), Some("forest"));
        }
        // Ascending shell area.
        assert!(map.polygons()[0].value().area() < map.polygons()[1].value().area());
    }

    #[test]
    fn split_boundary_matches_single_way() {
        let mut split = TestMap::default();
        let n = split.nodes(&OUTER);
        let west = split.way(&[n[0], n[1], n[2]], &[]);
        let east = split.way(&[n[2], n[3], n[0]], &[]);
        split.relation(&[(east, "outer"), (west, "outer")], &[("natural", "wood")]);

        let mut whole = TestMap::default();
        let n = whole.nodes(&OUTER);
        let way = whole.ring_way(&n);
        whole.relation(&[(way, "outer")], &[("natural", "wood")]);

        let split = split.transform();
        let whole = whole.transform();
        assert_eq!(split.polygons().len(), 1);
        assert_eq!(whole.polygons().len(), 1);
        let a = split.polygons()[0].value().shell();
        let b = whole.polygons()[0].value().shell();
        assert_eq!(sorted_points(a), sorted_points(b));
        assert_relative_eq!(a.area(), b.area());
    }

    #[test]
    fn rotated_closed_way_gives_same_ring() {
        let mut results = Vec::new();
        for rotation in 0..4 {
            let mut t = TestMap::default();
            let mut n = t.nodes(&OUTER);
            n.rotate_left(rotation);
            let way = t.ring_way(&n);
            t.relation(&[(way, "outer")], &[("building", "yes")]);
            let map = t.transform();
            assert_eq!(map.polygons().len(), 1);
            results.push(map.polygons()[0].value().shell().clone());
        }
        for ring in &results[1..] {
            assert_eq!(sorted_points(ring), sorted_points(&results[0]));
            assert_relative_eq!(ring.area(), results[0].area());
        }
    }

    #[test]
    fn open_highway_becomes_polyline() {
        let mut t = TestMap::default();
        let n = t.nodes(&[(47.0, 7.0), (47.0, 6.0)]);
        t.way(&n, &[("highway", "unclassified")]);

        let map = t.transform();
        assert!(map.polygons().is_empty());
        assert_eq!(map.polylines().len(), 1);
        let line = &map.polylines()[0];
        assert!(!line.value().is_closed());
        assert_eq!(line.attributes(), &tags(&[("highway", "unclassified")]));
        assert_eq!(line.value().points(), &[project(47.0, 7.0), project(47.0, 6.0)]);
    }

    #[test]
    fn closed_park_becomes_polygon() {
        let mut t = TestMap::default();
        let n = t.nodes(&OUTER);
        let mut closed = n.clone();
        closed.push(n[0]);
        t.way(&closed, &[("leisure", "park")]);

        let map = t.transform();
        assert!(map.polylines().is_empty());
        assert_eq!(map.polygons().len(), 1);
        let polygon = &map.polygons()[0];
        let expected: Vec<Point2> = OUTER.iter().map(|&(lon, lat)| project(lon, lat)).collect();
        assert_eq!(polygon.value().shell().points(), expected.as_slice());
        assert!(polygon.value().holes().is_empty());
        assert_eq!(polygon.attributes(), &tags(&[("leisure", "park")]));
    }

    #[test]
    fn member_ways_are_not_emitted_standalone() {
        let mut t = TestMap::default();
        let n = t.nodes(&OUTER);
        let mut closed = n.clone();
        closed.push(n[0]);
        let way = t.way(&closed, &[("building", "yes"), ("highway", "footway")]);
        t.relation(&[(way, "outer")], &[("leisure", "garden"), ("name", "Jardin")]);

        let map = t.transform();
        assert!(map.polylines().is_empty());
        assert_eq!(map.polygons().len(), 1);
        assert_eq!(map.polygons()[0].attributes(), &tags(&[("leisure", "garden")]));
    }

    #[test]
    fn relation_without_outer_ring_is_ignored() {
        let mut t = TestMap::default();
        let n = t.nodes(&INNER);
        let inner = t.ring_way(&n);
        let m = t.nodes(&[(10.0, 10.0), (11.0, 10.0)]);
        let open = t.way(&m, &[]);
        t.relation(&[(inner, "inner"), (open, "outer")], &[("natural", "water")]);

        assert!(t.transform().is_empty());
    }

    #[test]
    fn malformed_outer_component_is_skipped() {
        let mut t = TestMap::default();
        let good = t.nodes(&OUTER);
        let bad = t.nodes(&[(30.0, 5.0), (31.0, 5.0), (31.0, 6.0), (32.0, 7.0)]);
        let good = t.ring_way(&good);
        // Triangle with a tail hanging off its third corner.
        let spur = t.way(&[bad[0], bad[1], bad[2], bad[0]], &[]);
        let tail = t.way(&[bad[2], bad[3]], &[]);
        t.relation(
            &[(spur, "outer"), (tail, "outer"), (good, "outer")],
            &[("natural", "scrub")],
        );

        let map = t.transform();
        assert_eq!(map.polygons().len(), 1);
        let shell = map.polygons()[0].value().shell();
        assert_eq!(shell.points().len(), 4);
    }

    #[test]
    fn orphan_hole_and_other_roles_are_dropped() {
        let mut t = TestMap::default();
        let outer = t.nodes(&OUTER);
        let far = t.nodes(&[(20.0, 20.0), (21.0, 20.0), (21.0, 21.0)]);
        let outer = t.ring_way(&outer);
        let far = t.ring_way(&far);
        let label = t.node(46.5, 6.5);
        let id = t.id();
        t.builder
            .add_relation(OsmRelation::new(
                id,
                vec![
                    Member::new(MemberRef::Way(outer), "outer"),
                    Member::new(MemberRef::Way(far), "inner"),
                    Member::new(MemberRef::Node(label), "label"),
                ],
                tags(&[("natural", "water")]),
            ))
            .unwrap();

        let map = t.transform();
        assert_eq!(map.polygons().len(), 1);
        assert!(map.polygons()[0].value().holes().is_empty());
    }

    #[test]
    fn relation_polygon_is_kept_without_polygon_keys() {
        let mut t = TestMap::default();
        let n = t.nodes(&OUTER);
        let way = t.ring_way(&n);
        t.relation(&[(way, "outer")], &[("type", "multipolygon")]);

        let map = t.transform();
        assert_eq!(map.polygons().len(), 1);
        assert!(map.polygons()[0].attributes().is_empty());
    }

    #[test]
    fn custom_params_change_classification() {
        let mut t = TestMap::default();
        let n = t.nodes(&[(47.0, 7.0), (47.0, 6.0)]);
        t.way(&n, &[("power", "line")]);
        let osm = t.builder.build();

        let default = OsmToGeo::new(Equirectangular).transform(&osm).unwrap();
        assert!(default.is_empty());

        let mut params = TransformParams::default();
        params.polyline_keys.insert("power".to_owned());
        let custom = OsmToGeo::new(Equirectangular)
            .with_params(params)
            .transform(&osm)
            .unwrap();
        assert_eq!(custom.polylines().len(), 1);
    }

    #[test]
    fn swiss_projection_end_to_end() {
        init_tracing();
        let mut t = TestMap::default();
        // Around Lausanne.
        let n = t.nodes(&[(6.60, 46.50), (6.70, 46.50), (6.70, 46.55), (6.60, 46.55)]);
        let mut closed = n.clone();
        closed.push(n[0]);
        t.way(&closed, &[("landuse", "residential")]);
        let osm = t.builder.build();

        let map = OsmToGeo::new(Ch1903).transform(&osm).unwrap();
        assert_eq!(map.polygons().len(), 1);
        let shell = map.polygons()[0].value().shell();
        // Roughly 7.7 km by 5.6 km.
        assert!(shell.area() > 3.5e7 && shell.area() < 5.0e7, "area = {}", shell.area());
        assert!(shell.signed_area() > 0.0);
    }
}
