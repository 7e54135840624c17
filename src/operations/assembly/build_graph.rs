use crate::error::Result;
use crate::graph::Graph;
use crate::osm::{NodeKey, OsmWay};

/// Builds the undirected node graph of a set of ways.
///
/// Every pair of consecutive node references becomes an edge, so ways that
/// share end nodes join into a single component.
///
/// # Errors
///
/// Propagates `GraphError::UnknownNode`, which would indicate a bug here since
/// both endpoints are inserted before the edge.
pub fn graph_from_ways<'a, I>(ways: I) -> Result<Graph<NodeKey>>
where
    I: IntoIterator<Item = &'a OsmWay>,
{
    let mut graph = Graph::new();
    for way in ways {
        let nodes = way.nodes();
        graph.add_node(nodes[0]);
        for pair in nodes.windows(2) {
            graph.add_node(pair[1]);
            graph.add_edge(pair[0], pair[1])?;
        }
    }
    Ok(graph)
}
