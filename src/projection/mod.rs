mod ch1903;
mod equirectangular;

pub use ch1903::Ch1903;
pub use equirectangular::Equirectangular;

use std::f64::consts::{FRAC_PI_2, PI};

use crate::error::{GeometryError, Result};
use crate::math::Point2;

/// A point on the WGS 84 ellipsoid, in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointGeo {
    longitude: f64,
    latitude: f64,
}

impl PointGeo {
    /// Creates a geographic point from radians.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::CoordinateOutOfRange` if the longitude is
    /// outside `[-π, π]` or the latitude outside `[-π/2, π/2]`.
    pub fn new(longitude: f64, latitude: f64) -> Result<Self> {
        check_range("longitude", longitude, PI)?;
        check_range("latitude", latitude, FRAC_PI_2)?;
        Ok(Self {
            longitude,
            latitude,
        })
    }

    /// Creates a geographic point from degrees.
    ///
    /// # Errors
    ///
    /// Same conditions as [`PointGeo::new`].
    pub fn from_degrees(longitude: f64, latitude: f64) -> Result<Self> {
        Self::new(longitude.to_radians(), latitude.to_radians())
    }

    #[must_use]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    #[must_use]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }
}

fn check_range(coordinate: &'static str, value: f64, bound: f64) -> Result<()> {
    if (-bound..=bound).contains(&value) {
        Ok(())
    } else {
        Err(GeometryError::CoordinateOutOfRange {
            coordinate,
            value,
            min: -bound,
            max: bound,
        }
        .into())
    }
}

/// Maps geographic points to the plane and back.
pub trait Projection {
    /// Projects a geographic point onto the plane.
    fn project(&self, point: PointGeo) -> Point2;

    /// Maps a planar point back to geographic coordinates.
    ///
    /// # Errors
    ///
    /// Returns an error if the planar point has no valid geographic image.
    fn inverse(&self, point: Point2) -> Result<PointGeo>;
}

impl<P: Projection + ?Sized> Projection for &P {
    fn project(&self, point: PointGeo) -> Point2 {
        (**self).project(point)
    }

    fn inverse(&self, point: Point2) -> Result<PointGeo> {
        (**self).inverse(point)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn accepts_bounds() {
        assert!(PointGeo::new(PI, FRAC_PI_2).is_ok());
        assert!(PointGeo::new(-PI, -FRAC_PI_2).is_ok());
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(PointGeo::new(PI + 0.001, 0.0).is_err());
        assert!(PointGeo::new(0.0, -FRAC_PI_2 - 0.001).is_err());
        assert!(PointGeo::from_degrees(0.0, 91.0).is_err());
        assert!(PointGeo::new(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn degrees_are_converted() {
        let p = PointGeo::from_degrees(180.0, -45.0).unwrap();
        assert!((p.longitude() - PI).abs() < 1e-12);
        assert!((p.latitude() + PI / 4.0).abs() < 1e-12);
    }
}
