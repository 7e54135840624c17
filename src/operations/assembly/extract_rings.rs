use std::collections::BTreeSet;
use std::fmt::Debug;
use std::hash::Hash;

use tracing::{debug, trace};

use crate::error::Result;
use crate::geometry::Ring;
use crate::graph::Graph;
use crate::math::Point2;

/// Outcome of walking one connected component.
#[derive(Debug)]
enum Walk {
    Closed(Ring),
    /// The component branches, dangles or loops onto itself at arena index `at`.
    Aborted { at: usize },
}

/// Decomposes a graph whose components are simple cycles into rings.
///
/// Components are walked starting from the first unvisited node in insertion
/// order. A component containing a node whose degree is not exactly two is
/// abandoned, and the nodes visited before the walk stopped stay consumed:
/// they are not offered to any later walk.
pub struct ExtractRings<'a, N> {
    graph: &'a Graph<N>,
}

impl<'a, N: Copy + Eq + Hash + Debug> ExtractRings<'a, N> {
    #[must_use]
    pub fn new(graph: &'a Graph<N>) -> Self {
        Self { graph }
    }

    /// Executes the extraction. `position` is called once per visited node.
    ///
    /// # Errors
    ///
    /// Propagates errors returned by `position`.
    pub fn execute<F>(&self, mut position: F) -> Result<Vec<Ring>>
    where
        F: FnMut(N) -> Result<Point2>,
    {
        let mut unvisited: BTreeSet<usize> = (0..self.graph.len()).collect();
        let mut rings = Vec::new();

        while let Some(&start) = unvisited.first() {
            match self.walk(start, &mut unvisited, &mut position)? {
                Walk::Closed(ring) => {
                    trace!(points = ring.points().len(), "ring closed");
                    rings.push(ring);
                }
                Walk::Aborted { at } => {
                    debug!(
                        node = ?self.graph.node_at(at),
                        "component is not a simple cycle, dropping it"
                    );
                }
            }
        }

        Ok(rings)
    }

    /// Walks the component containing `start`, removing every node it steps
    /// on from `unvisited`.
    fn walk<F>(
        &self,
        start: usize,
        unvisited: &mut BTreeSet<usize>,
        position: &mut F,
    ) -> Result<Walk>
    where
        F: FnMut(N) -> Result<Point2>,
    {
        let mut points = Vec::new();
        let mut previous: Option<usize> = None;
        let mut current = start;

        loop {
            unvisited.remove(&current);
            points.push(position(self.graph.node_at(current))?);

            let neighbors = self.graph.neighbor_indices(current);
            let next = match previous {
                None if neighbors.len() == 2 => neighbors.first().copied(),
                None => None,
                Some(prev) => {
                    let mut candidates = neighbors.iter().copied().filter(|&j| j != prev);
                    match (candidates.next(), candidates.next()) {
                        (Some(j), None) => Some(j),
                        _ => None,
                    }
                }
            };

            // A self-loop edge makes a node its own successor.
            let Some(next) = next.filter(|&j| j != current) else {
                return Ok(Walk::Aborted { at: current });
            };

            previous = Some(current);
            current = next;

            if current == start {
                return Ok(Walk::Closed(Ring::new(points)?));
            }
            if !unvisited.contains(&current) {
                return Ok(Walk::Aborted { at: current });
            }
        }
    }
}
