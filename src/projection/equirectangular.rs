use super::{PointGeo, Projection};
use crate::error::Result;
use crate::math::Point2;

/// Plate carrée: longitude and latitude (radians) used directly as `x` and `y`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Equirectangular;

impl Projection for Equirectangular {
    fn project(&self, point: PointGeo) -> Point2 {
        Point2::new(point.longitude(), point.latitude())
    }

    fn inverse(&self, point: Point2) -> Result<PointGeo> {
        PointGeo::new(point.x, point.y)
    }
}
