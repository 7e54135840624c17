mod osm_to_geo;
mod params;

pub use osm_to_geo::OsmToGeo;
pub use params::{TransformParams, AREA_VALUES, POLYGON_KEYS, POLYLINE_KEYS, SURFACE_KEYS};
