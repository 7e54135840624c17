use crate::error::{GeometryError, Result};
use crate::math::polygon_2d::{point_in_polygon_2d, signed_area_2d};
use crate::math::Point2;

/// A simple closed sequence of planar points used as a polygon shell or hole.
///
/// The last point implicitly connects back to the first; the closing point is
/// never repeated.
#[derive(Debug, Clone, PartialEq)]
pub struct Ring {
    points: Vec<Point2>,
}

impl Ring {
    /// Creates a ring from its points.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::EmptyPoints` if `points` is empty.
    pub fn new(points: Vec<Point2>) -> Result<Self> {
        if points.is_empty() {
            return Err(GeometryError::EmptyPoints("ring").into());
        }
        Ok(Self { points })
    }

    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    #[must_use]
    pub fn first_point(&self) -> Point2 {
        self.points[0]
    }

    /// Shoelace area, positive iff the ring winds counter-clockwise.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        signed_area_2d(&self.points)
    }

    #[must_use]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Crossing-number containment test. Results for points lying exactly on
    /// the ring are unspecified.
    #[must_use]
    pub fn contains_point(&self, q: &Point2) -> bool {
        point_in_polygon_2d(&self.points, q)
    }

    /// Returns the same ring traversed in the opposite direction.
    #[must_use]
    pub fn reversed(&self) -> Self {
        let mut points = self.points.clone();
        points.reverse();
        Self { points }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn rectangle() -> Ring {
        Ring::new(vec![p(0.0, 0.0), p(4.0, 0.0), p(4.0, 2.0), p(0.0, 2.0)]).unwrap()
    }

    #[test]
    fn empty_ring_is_rejected() {
        assert!(Ring::new(Vec::new()).is_err());
    }

    #[test]
    fn area_is_absolute_signed_area() {
        let ring = rectangle();
        assert_relative_eq!(ring.signed_area(), 8.0);
        assert_relative_eq!(ring.area(), ring.signed_area().abs());

        let rev = ring.reversed();
        assert_relative_eq!(rev.signed_area(), -8.0);
        assert_relative_eq!(rev.area(), 8.0);
    }

    #[test]
    fn containment_ignores_orientation() {
        let ring = rectangle();
        let rev = ring.reversed();
        for q in [
            p(1.0, 1.0),
            p(3.9, 0.1),
            p(5.0, 1.0),
            p(-1.0, 1.0),
            p(2.0, 3.0),
            p(2.0, -0.5),
        ] {
            assert_eq!(ring.contains_point(&q), rev.contains_point(&q), "at {q}");
        }
        assert!(ring.contains_point(&p(1.0, 1.0)));
        assert!(!ring.contains_point(&p(5.0, 1.0)));
    }

    #[test]
    fn first_point_is_first_input_point() {
        let ring = rectangle();
        assert_eq!(ring.first_point(), p(0.0, 0.0));
        assert_eq!(ring.reversed().first_point(), p(0.0, 2.0));
    }

    #[test]
    fn single_point_ring_has_no_area() {
        let ring = Ring::new(vec![p(1.0, 1.0)]).unwrap();
        assert_relative_eq!(ring.area(), 0.0);
        assert!(!ring.contains_point(&p(1.0, 1.0)));
    }
}
