mod assemble_polygons;
mod build_graph;
mod extract_rings;

pub use assemble_polygons::{nest_holes, AssemblePolygons, INNER_ROLE, OUTER_ROLE};
pub use build_graph::graph_from_ways;
pub use extract_rings::ExtractRings;
