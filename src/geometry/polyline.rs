use super::ring::Ring;
use crate::error::{GeometryError, Result};
use crate::math::Point2;

/// A connected series of line segments.
///
/// A `Closed` polyline connects its last point back to the first without
/// repeating it; an `Open` one does not.
#[derive(Debug, Clone, PartialEq)]
pub enum PolyLine {
    Open(Vec<Point2>),
    Closed(Vec<Point2>),
}

impl PolyLine {
    /// Creates an open polyline.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::EmptyPoints` if `points` is empty.
    pub fn open(points: Vec<Point2>) -> Result<Self> {
        if points.is_empty() {
            return Err(GeometryError::EmptyPoints("polyline").into());
        }
        Ok(Self::Open(points))
    }

    /// Creates a closed polyline.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::EmptyPoints` if `points` is empty.
    pub fn closed(points: Vec<Point2>) -> Result<Self> {
        if points.is_empty() {
            return Err(GeometryError::EmptyPoints("polyline").into());
        }
        Ok(Self::Closed(points))
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        matches!(self, Self::Closed(_))
    }

    #[must_use]
    pub fn points(&self) -> &[Point2] {
        match self {
            Self::Open(points) | Self::Closed(points) => points,
        }
    }

    #[must_use]
    pub fn first_point(&self) -> Point2 {
        self.points()[0]
    }

    /// Returns the ring traced by a closed polyline, or `None` for an open one.
    #[must_use]
    pub fn as_ring(&self) -> Option<Ring> {
        match self {
            Self::Closed(points) => Ring::new(points.clone()).ok(),
            Self::Open(_) => None,
        }
    }
}

/// Accumulates points and builds either polyline variant.
#[derive(Debug, Clone, Default)]
pub struct PolyLineBuilder {
    points: Vec<Point2>,
}

impl PolyLineBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a point.
    pub fn add_point(&mut self, point: Point2) -> &mut Self {
        self.points.push(point);
        self
    }

    /// Builds an open polyline from the points added so far.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::EmptyPoints` if no point was added.
    pub fn build_open(&self) -> Result<PolyLine> {
        PolyLine::open(self.points.clone())
    }

    /// Builds a closed polyline from the points added so far.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::EmptyPoints` if no point was added.
    pub fn build_closed(&self) -> Result<PolyLine> {
        PolyLine::closed(self.points.clone())
    }
}
