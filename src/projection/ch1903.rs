use super::{PointGeo, Projection};
use crate::error::Result;
use crate::math::Point2;

/// Swiss CH1903 (LV03) projection using swisstopo's approximate formulas.
///
/// Accurate to about a metre inside Switzerland; `x` is the easting and `y`
/// the northing.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ch1903;

impl Projection for Ch1903 {
    fn project(&self, point: PointGeo) -> Point2 {
        let lon1 = (point.longitude().to_degrees() * 3600.0 - 26_782.5) / 10_000.0;
        let lat1 = (point.latitude().to_degrees() * 3600.0 - 169_028.66) / 10_000.0;

        let x = 600_072.37 + 211_455.93 * lon1
            - 10_938.51 * lon1 * lat1
            - 0.36 * lon1 * lat1.powi(2)
            - 44.54 * lon1.powi(3);
        let y = 200_147.07 + 308_807.95 * lat1 + 3_745.25 * lon1.powi(2) + 76.63 * lat1.powi(2)
            - 194.56 * lon1.powi(2) * lat1
            + 119.79 * lat1.powi(3);

        Point2::new(x, y)
    }

    fn inverse(&self, point: Point2) -> Result<PointGeo> {
        let x1 = (point.x - 600_000.0) / 1_000_000.0;
        let y1 = (point.y - 200_000.0) / 1_000_000.0;

        let lon0 = 2.677_909_4 + 4.728_982 * x1 + 0.791_484 * x1 * y1 + 0.1306 * x1 * y1.powi(2)
            - 0.0436 * x1.powi(3);
        let lat0 = 16.902_389_2 + 3.238_272 * y1
            - 0.270_978 * x1.powi(2)
            - 0.002_528 * y1.powi(2)
            - 0.0447 * x1.powi(2) * y1
            - 0.0140 * y1.powi(3);

        PointGeo::from_degrees(lon0 * 100.0 / 36.0, lat0 * 100.0 / 36.0)
    }
}
