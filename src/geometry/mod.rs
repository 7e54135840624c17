pub mod polygon;
pub mod polyline;
pub mod ring;

pub use polygon::Polygon;
pub use polyline::{PolyLine, PolyLineBuilder};
pub use ring::Ring;
