pub mod error;
pub mod geometry;
pub mod id;
pub mod mesh;
pub mod model;
pub mod network;
pub mod path;
pub mod route;

pub use error::NetworkError;
pub use geometry::{Extent, Location};
pub use id::{EdgeId, NodeId};
pub use model::{Junction, NetworkData, SimpleEdge, SimpleNode, Trail};
pub use network::{TrailNetwork, parse_network};
pub use path::{EdgePoint, OrientedEdge, Path, PathSegment};
pub use route::RouteNetwork;

// Re-export petgraph types so downstream crates don't need a direct dependency
pub use petgraph::graph::{EdgeIndex, NodeIndex};
