use crate::attributes::Attributed;
use crate::geometry::{PolyLine, Polygon};

/// Renderable output: attributed polylines and polygons, in production order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeoMap {
    polylines: Vec<Attributed<PolyLine>>,
    polygons: Vec<Attributed<Polygon>>,
}

impl GeoMap {
    #[must_use]
    pub fn new(polylines: Vec<Attributed<PolyLine>>, polygons: Vec<Attributed<Polygon>>) -> Self {
        Self {
            polylines,
            polygons,
        }
    }

    #[must_use]
    pub fn builder() -> GeoMapBuilder {
        GeoMapBuilder::default()
    }

    #[must_use]
    pub fn polylines(&self) -> &[Attributed<PolyLine>] {
        &self.polylines
    }

    #[must_use]
    pub fn polygons(&self) -> &[Attributed<Polygon>] {
        &self.polygons
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.polylines.is_empty() && self.polygons.is_empty()
    }
}

/// Accumulates features for a [`GeoMap`].
#[derive(Debug, Default)]
pub struct GeoMapBuilder {
    polylines: Vec<Attributed<PolyLine>>,
    polygons: Vec<Attributed<Polygon>>,
}

impl GeoMapBuilder {
    pub fn add_polyline(&mut self, polyline: Attributed<PolyLine>) {
        self.polylines.push(polyline);
    }

    pub fn add_polygon(&mut self, polygon: Attributed<Polygon>) {
        self.polygons.push(polygon);
    }

    #[must_use]
    pub fn build(self) -> GeoMap {
        GeoMap::new(self.polylines, self.polygons)
    }
}
