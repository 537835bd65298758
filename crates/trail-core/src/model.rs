//! Network definition and derived graph weights.
//!
//! The on-disk form is a flat list of junctions and trails (`NetworkData`).
//! `TrailNetwork::create` turns it into a petgraph graph whose node weights
//! are `Junction`s and edge weights are `Trail`s.

use crate::geometry::{Location, polyline_length};
use crate::id::{EdgeId, NodeId};
use petgraph::graph::NodeIndex;
use serde::{Deserialize, Serialize};

/// A junction as written in a network data file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimpleNode {
    pub id: NodeId,
    pub location: Location,
}

/// A trail as written in a network data file.
///
/// The trail runs from `start_node_id` through `inner_locations` to
/// `end_node_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleEdge {
    pub id: EdgeId,
    pub start_node_id: NodeId,
    pub end_node_id: NodeId,
    #[serde(default)]
    pub inner_locations: Vec<Location>,
}

/// A whole network data file: `{ "nodes": [...], "edges": [...] }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkData {
    pub nodes: Vec<SimpleNode>,
    pub edges: Vec<SimpleEdge>,
}

impl NetworkData {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Graph node weight.
#[derive(Debug, Clone, PartialEq)]
pub struct Junction {
    pub id: NodeId,
    pub location: Location,
}

/// Graph edge weight: a polyline between two junctions.
#[derive(Debug, Clone, PartialEq)]
pub struct Trail {
    pub id: EdgeId,
    pub start: NodeIndex,
    pub end: NodeIndex,
    /// Full polyline including both junction locations.
    pub locations: Vec<Location>,
    pub length: f64,
}

impl Trail {
    pub(crate) fn new(id: EdgeId, start: NodeIndex, end: NodeIndex, locations: Vec<Location>) -> Self {
        let length = polyline_length(&locations);
        Self {
            id,
            start,
            end,
            locations,
            length,
        }
    }

    /// Junction reached by walking from `from` along this trail.
    pub fn opposite(&self, from: NodeIndex) -> NodeIndex {
        if from == self.start { self.end } else { self.start }
    }

    /// Offset of the given end junction along the polyline (0 or `length`).
    /// A loop trail resolves to its start.
    pub fn offset_of(&self, junction: NodeIndex) -> f64 {
        if junction == self.start { 0.0 } else { self.length }
    }

    /// Both ends as `(junction, offset)` pairs. A loop trail lists its one
    /// junction twice, once at each offset.
    pub fn ends(&self) -> [(NodeIndex, f64); 2] {
        [(self.start, 0.0), (self.end, self.length)]
    }
}
