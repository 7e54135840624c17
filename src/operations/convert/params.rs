use std::collections::BTreeSet;

use crate::attributes::key_set;

/// Keys that make a closed way a surface.
pub const SURFACE_KEYS: [&str; 20] = [
    "aeroway",
    "amenity",
    "building",
    "harbour",
    "historic",
    "landuse",
    "leisure",
    "man_made",
    "military",
    "natural",
    "office",
    "place",
    "power",
    "public_transport",
    "shop",
    "sport",
    "tourism",
    "water",
    "waterway",
    "wetland",
];

/// Keys kept on polylines.
pub const POLYLINE_KEYS: [&str; 7] = [
    "bridge", "highway", "layer", "man_made", "railway", "tunnel", "waterway",
];

/// Keys kept on polygons.
pub const POLYGON_KEYS: [&str; 6] = [
    "building", "landuse", "layer", "leisure", "natural", "waterway",
];

/// Values of the `area` key that mark a way as a surface.
pub const AREA_VALUES: [&str; 3] = ["true", "yes", "1"];

/// Parameters controlling way classification and attribute filtering.
#[derive(Debug, Clone)]
pub struct TransformParams {
    /// A way carrying any of these keys is a surface.
    pub surface_keys: BTreeSet<String>,
    /// Accepted values of the `area` key.
    pub area_values: BTreeSet<String>,
    /// Attribute allow-list for polylines.
    pub polyline_keys: BTreeSet<String>,
    /// Attribute allow-list for polygons, standalone or assembled.
    pub polygon_keys: BTreeSet<String>,
}

impl Default for TransformParams {
    fn default() -> Self {
        Self {
            surface_keys: key_set(&SURFACE_KEYS),
            area_values: key_set(&AREA_VALUES),
            polyline_keys: key_set(&POLYLINE_KEYS),
            polygon_keys: key_set(&POLYGON_KEYS),
        }
    }
}
