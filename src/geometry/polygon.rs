use super::ring::Ring;

/// A shell ring with zero or more holes.
///
/// Holes are expected to lie inside the shell; the assembler only attaches a
/// hole to a shell that contains the hole's first point.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    shell: Ring,
    holes: Vec<Ring>,
}

impl Polygon {
    #[must_use]
    pub fn new(shell: Ring, holes: Vec<Ring>) -> Self {
        Self { shell, holes }
    }

    /// Creates a polygon without holes.
    #[must_use]
    pub fn from_shell(shell: Ring) -> Self {
        Self::new(shell, Vec::new())
    }

    #[must_use]
    pub fn shell(&self) -> &Ring {
        &self.shell
    }

    #[must_use]
    pub fn holes(&self) -> &[Ring] {
        &self.holes
    }

    /// Shell area minus the area of every hole.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.shell.area() - self.holes.iter().map(Ring::area).sum::<f64>()
    }
}

/// Collects holes for one shell while a relation is being assembled.
#[derive(Debug)]
pub(crate) struct PolygonBuilder {
    shell: Ring,
    holes: Vec<Ring>,
}

impl PolygonBuilder {
    pub(crate) fn new(shell: Ring) -> Self {
        Self {
            shell,
            holes: Vec::new(),
        }
    }

    pub(crate) fn shell(&self) -> &Ring {
        &self.shell
    }

    pub(crate) fn add_hole(&mut self, hole: Ring) {
        self.holes.push(hole);
    }

    pub(crate) fn build(self) -> Polygon {
        Polygon::new(self.shell, self.holes)
    }
}
