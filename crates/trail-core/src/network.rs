//! The trail network and its queries.
//!
//! Junctions and trails live in an undirected petgraph `Graph`. Trails carry
//! their own polylines, so every query (nearest point, routing, resolving
//! an `EdgePoint`) works on actual trail geometry, not straight edges.

use crate::error::NetworkError;
use crate::geometry::{Extent, Location, bounding_box, point_along, sub_polyline};
use crate::id::{EdgeId, NodeId};
use crate::mesh::{SegmentGrid, SegmentHit, SegmentRef, closer};
use crate::model::{Junction, NetworkData, SimpleEdge, SimpleNode, Trail};
use crate::path::{EdgePoint, Path, PathSegment};
use crate::route::RouteNetwork;
use petgraph::algo::astar;
use petgraph::graph::{EdgeIndex, NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use smallvec::{SmallVec, smallvec};
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct TrailNetwork {
    pub graph: UnGraph<Junction, Trail>,
    node_index: HashMap<NodeId, NodeIndex>,
    edge_index: HashMap<EdgeId, EdgeIndex>,
    mesh: Option<SegmentGrid>,
    mesh_cell: Option<f64>,
}

/// Parse a JSON network definition and build the graph.
pub fn parse_network(json: &str) -> Result<TrailNetwork, NetworkError> {
    let data = NetworkData::from_json(json)?;
    TrailNetwork::create(data.nodes, data.edges)
}

impl TrailNetwork {
    pub fn create(nodes: Vec<SimpleNode>, edges: Vec<SimpleEdge>) -> Result<Self, NetworkError> {
        let mut graph = UnGraph::with_capacity(nodes.len(), edges.len());
        let mut node_index = HashMap::with_capacity(nodes.len());
        let mut edge_index = HashMap::with_capacity(edges.len());

        for node in nodes {
            if !node.location.is_finite() {
                return Err(NetworkError::NonFinite(format!("junction {}", node.id)));
            }
            if node_index.contains_key(&node.id) {
                return Err(NetworkError::DuplicateNode(node.id));
            }
            let idx = graph.add_node(Junction {
                id: node.id,
                location: node.location,
            });
            node_index.insert(node.id, idx);
        }

        for edge in edges {
            if edge_index.contains_key(&edge.id) {
                return Err(NetworkError::DuplicateEdge(edge.id));
            }
            if edge.inner_locations.iter().any(|l| !l.is_finite()) {
                return Err(NetworkError::NonFinite(format!("trail {}", edge.id)));
            }
            let lookup = |node: NodeId| {
                node_index
                    .get(&node)
                    .copied()
                    .ok_or(NetworkError::UnknownNode { edge: edge.id, node })
            };
            let start = lookup(edge.start_node_id)?;
            let end = lookup(edge.end_node_id)?;

            let mut locations = Vec::with_capacity(edge.inner_locations.len() + 2);
            locations.push(graph[start].location);
            locations.extend(edge.inner_locations.iter().copied());
            locations.push(graph[end].location);

            let idx = graph.add_edge(start, end, Trail::new(edge.id, start, end, locations));
            edge_index.insert(edge.id, idx);
        }

        log::debug!(
            "trail network: {} junctions, {} trails",
            graph.node_count(),
            graph.edge_count()
        );

        Ok(Self {
            graph,
            node_index,
            edge_index,
            mesh: None,
            mesh_cell: None,
        })
    }

    /// Index trail segments in a uniform grid of `cell_size` network units.
    pub fn with_closest_point_mesh(mut self, cell_size: f64) -> Result<Self, NetworkError> {
        let mesh =
            SegmentGrid::build(&self.segments(), cell_size).ok_or(NetworkError::InvalidMesh(cell_size))?;
        self.mesh = Some(mesh);
        self.mesh_cell = Some(cell_size);
        Ok(self)
    }

    /// Translate every location so the junction bounding box is centered on
    /// the origin.
    pub fn recentered(mut self) -> Result<Self, NetworkError> {
        let Some((min, max)) = bounding_box(self.all_node_locations()) else {
            return Ok(self);
        };
        let center = min.lerp(max, 0.5);
        for junction in self.graph.node_weights_mut() {
            junction.location = junction.location - center;
        }
        for trail in self.graph.edge_weights_mut() {
            for loc in &mut trail.locations {
                *loc = *loc - center;
            }
        }
        match self.mesh_cell {
            Some(cell) => self.with_closest_point_mesh(cell),
            None => Ok(self),
        }
    }

    pub fn junction(&self, id: NodeId) -> Option<&Junction> {
        self.node_index.get(&id).map(|&idx| &self.graph[idx])
    }

    pub fn trail(&self, id: EdgeId) -> Option<&Trail> {
        self.edge_index.get(&id).map(|&idx| &self.graph[idx])
    }

    pub fn trails(&self) -> impl Iterator<Item = &Trail> {
        self.graph.edge_weights()
    }

    fn trail_or_err(&self, id: EdgeId) -> Result<&Trail, NetworkError> {
        self.trail(id).ok_or(NetworkError::UnknownEdge(id))
    }

    fn segments(&self) -> Vec<SegmentRef> {
        let mut out = Vec::new();
        for edge in self.graph.edge_references() {
            let mut offset = 0.0;
            for w in edge.weight().locations.windows(2) {
                out.push(SegmentRef {
                    edge: edge.id(),
                    a: w[0],
                    b: w[1],
                    offset,
                });
                offset += w[0].distance(w[1]);
            }
        }
        out
    }

    fn nearest_hit(&self, location: Location) -> Option<SegmentHit> {
        match &self.mesh {
            Some(mesh) => mesh.nearest(location),
            None => self
                .segments()
                .iter()
                .fold(None, |best, seg| closer(best, seg.hit(location))),
        }
    }

    /// Directed interval along a trail between two offsets.
    fn segment(&self, trail: &Trail, from: f64, to: f64) -> PathSegment {
        PathSegment {
            edge_id: trail.id,
            from: from.clamp(0.0, trail.length),
            to: to.clamp(0.0, trail.length),
        }
    }

    fn build_path(&self, start: EdgePoint, end: EdgePoint, segments: SmallVec<[PathSegment; 4]>) -> Path {
        let mut locations: Vec<Location> = Vec::new();
        for seg in &segments {
            if let Some(trail) = self.trail(seg.edge_id) {
                for loc in sub_polyline(&trail.locations, seg.from, seg.to) {
                    if locations.last() != Some(&loc) {
                        locations.push(loc);
                    }
                }
            }
        }
        let length = segments.iter().map(PathSegment::length).sum();
        Path {
            start,
            end,
            segments,
            locations,
            length,
        }
    }

    /// Cheapest trail directly joining two adjacent junctions.
    fn connecting_trail(&self, a: NodeIndex, b: NodeIndex) -> Option<&Trail> {
        self.graph
            .edges_connecting(a, b)
            .map(|e| e.weight())
            .min_by(|x, y| x.length.total_cmp(&y.length))
    }
}

impl RouteNetwork for TrailNetwork {
    fn closest_point(&self, location: Location) -> Result<EdgePoint, NetworkError> {
        let hit = self.nearest_hit(location).ok_or(NetworkError::Empty)?;
        Ok(EdgePoint::new(self.graph[hit.edge].id, hit.distance_along))
    }

    fn location_of(&self, point: &EdgePoint) -> Result<Location, NetworkError> {
        let trail = self.trail_or_err(point.edge_id)?;
        Ok(point_along(&trail.locations, point.distance))
    }

    fn shortest_path(&self, start: &EdgePoint, end: &EdgePoint) -> Result<Path, NetworkError> {
        let s_trail = self.trail_or_err(start.edge_id)?;
        let e_trail = self.trail_or_err(end.edge_id)?;
        let s_off = start.distance.clamp(0.0, s_trail.length);
        let e_off = end.distance.clamp(0.0, e_trail.length);

        let mut best: Option<(f64, SmallVec<[PathSegment; 4]>)> = None;

        if start.edge_id == end.edge_id {
            best = Some(((e_off - s_off).abs(), smallvec![self.segment(s_trail, s_off, e_off)]));
        }

        for (s_node, s_exit) in s_trail.ends() {
            let s_cost = (s_exit - s_off).abs();
            for (t_node, t_entry) in e_trail.ends() {
                let t_cost = (t_entry - e_off).abs();
                let target = self.graph[t_node].location;
                let Some((cost, nodes)) = astar(
                    &self.graph,
                    s_node,
                    |n| n == t_node,
                    |e| e.weight().length,
                    |n| self.graph[n].location.distance(target),
                ) else {
                    continue;
                };
                let total = s_cost + cost + t_cost;
                if best.as_ref().is_some_and(|(b, _)| *b <= total) {
                    continue;
                }

                let mut segments: SmallVec<[PathSegment; 4]> = SmallVec::new();
                segments.push(self.segment(s_trail, s_off, s_exit));
                for pair in nodes.windows(2) {
                    if let Some(trail) = self.connecting_trail(pair[0], pair[1]) {
                        segments.push(self.segment(trail, trail.offset_of(pair[0]), trail.offset_of(pair[1])));
                    }
                }
                segments.push(self.segment(e_trail, t_entry, e_off));
                best = Some((total, segments));
            }
        }

        let (_, segments) = best.ok_or(NetworkError::NoRoute {
            from: *start,
            to: *end,
        })?;
        // Zero-length junction stubs add nothing to the polyline.
        let mut segments: SmallVec<[PathSegment; 4]> =
            segments.into_iter().filter(|s| s.length() > 0.0).collect();
        if segments.is_empty() {
            segments.push(self.segment(s_trail, s_off, s_off));
        }
        Ok(self.build_path(
            EdgePoint::new(start.edge_id, s_off),
            EdgePoint::new(end.edge_id, e_off),
            segments,
        ))
    }

    fn advance_along_path(&self, path: &Path, distance: f64) -> Path {
        path.advanced(distance)
    }

    fn all_node_locations(&self) -> Vec<Location> {
        self.graph.node_weights().map(|j| j.location).collect()
    }
}

impl TrailNetwork {
    /// Bounding size of all junction locations.
    pub fn extent(&self) -> Extent {
        RouteNetwork::extent(self)
    }
}
