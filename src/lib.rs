pub mod attributes;
pub mod error;
pub mod geometry;
pub mod graph;
pub mod map;
pub mod math;
pub mod operations;
pub mod osm;
pub mod projection;

pub use attributes::{Attributed, Attributes};
pub use error::{Error, Result};
pub use map::GeoMap;
pub use operations::convert::{OsmToGeo, TransformParams};
