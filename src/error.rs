use thiserror::Error;

/// Top-level error type for the OSM geometry transform.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Osm(#[from] OsmError),
}

/// Errors related to planar and geographic values.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("{0} requires at least one point")]
    EmptyPoints(&'static str),

    #[error("{coordinate} = {value} is out of range [{min}, {max}]")]
    CoordinateOutOfRange {
        coordinate: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

/// Misuse of the [`Graph`](crate::graph::Graph) API.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("node {0} was not added to the graph")]
    UnknownNode(String),
}

/// Errors raised while assembling an [`OsmMap`](crate::osm::OsmMap).
#[derive(Debug, Error)]
pub enum OsmError {
    #[error("way {id} has {count} node(s), at least 2 are required")]
    TooFewNodes { id: i64, count: usize },

    #[error("duplicate {kind} id {id}")]
    DuplicateId { kind: &'static str, id: i64 },

    #[error("{kind} key is not owned by this map")]
    UnknownKey { kind: &'static str },
}

/// Convenience type alias for results using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
