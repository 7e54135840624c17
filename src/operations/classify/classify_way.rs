use crate::attributes::Attributed;
use crate::error::Result;
use crate::geometry::{PolyLine, Polygon, Ring};
use crate::math::Point2;
use crate::operations::convert::TransformParams;
use crate::osm::{OsmMap, OsmWay};
use crate::projection::Projection;

/// Geometry produced from a standalone way.
#[derive(Debug, Clone, PartialEq)]
pub enum WayFeature {
    PolyLine(Attributed<PolyLine>),
    Polygon(Attributed<Polygon>),
}

/// Returns `true` if the way describes a surface rather than a line.
#[must_use]
pub fn is_area(way: &OsmWay, params: &TransformParams) -> bool {
    let attributes = way.attributes();
    attributes
        .get("area")
        .is_some_and(|v| params.area_values.contains(v))
        || attributes.contains_any(&params.surface_keys)
}

/// Turns a way into a polygon or a polyline with filtered attributes.
///
/// A closed surface way becomes a hole-free polygon; any other way becomes an
/// open or closed polyline. Ways left without attributes after filtering carry
/// nothing to render and yield `None`.
pub struct ClassifyWay<'a> {
    way: &'a OsmWay,
    params: &'a TransformParams,
}

impl<'a> ClassifyWay<'a> {
    #[must_use]
    pub fn new(way: &'a OsmWay, params: &'a TransformParams) -> Self {
        Self { way, params }
    }

    /// Executes the classification.
    ///
    /// # Errors
    ///
    /// Returns `OsmError::UnknownKey` if a node of the way is not in `map`.
    pub fn execute<P: Projection>(
        &self,
        map: &OsmMap,
        projection: &P,
    ) -> Result<Option<WayFeature>> {
        let closed = self.way.is_closed();

        if closed && is_area(self.way, self.params) {
            let attributes = self.way.attributes().keep_only_keys(&self.params.polygon_keys);
            if attributes.is_empty() {
                return Ok(None);
            }
            let shell = Ring::new(self.project_nodes(map, projection)?)?;
            return Ok(Some(WayFeature::Polygon(Attributed::new(
                Polygon::from_shell(shell),
                attributes,
            ))));
        }

        let attributes = self.way.attributes().keep_only_keys(&self.params.polyline_keys);
        if attributes.is_empty() {
            return Ok(None);
        }
        let points = self.project_nodes(map, projection)?;
        let polyline = if closed {
            PolyLine::closed(points)?
        } else {
            PolyLine::open(points)?
        };
        Ok(Some(WayFeature::PolyLine(Attributed::new(polyline, attributes))))
    }

    fn project_nodes<P: Projection>(&self, map: &OsmMap, projection: &P) -> Result<Vec<Point2>> {
        self.way
            .non_repeating_nodes()
            .iter()
            .map(|&key| map.node(key).map(|node| projection.project(node.position())))
            .collect()
    }
}
