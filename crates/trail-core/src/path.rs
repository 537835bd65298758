//! Points on the network and routes between them.

use crate::geometry::{Location, trim_polyline_start};
use crate::id::EdgeId;
use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};

/// A locator on the network: a trail plus an offset along its polyline,
/// measured from the trail's start junction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgePoint {
    pub edge_id: EdgeId,
    pub distance: f64,
}

impl EdgePoint {
    pub fn new(edge_id: EdgeId, distance: f64) -> Self {
        Self { edge_id, distance }
    }
}

/// A trail traversed in a given direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrientedEdge {
    pub edge_id: EdgeId,
    /// `true` when walking from the trail's start junction to its end.
    pub forward: bool,
}

/// A directed interval along one trail.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathSegment {
    pub edge_id: EdgeId,
    pub from: f64,
    pub to: f64,
}

impl PathSegment {
    pub fn length(&self) -> f64 {
        (self.to - self.from).abs()
    }

    pub fn forward(&self) -> bool {
        self.to >= self.from
    }
}

/// A route along the network.
///
/// Immutable per step: shortening produces a new `Path`, see `advanced`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Path {
    pub start: EdgePoint,
    pub end: EdgePoint,
    pub segments: SmallVec<[PathSegment; 4]>,
    /// Polyline in network space, from `start` to `end`.
    pub locations: Vec<Location>,
    pub length: f64,
}

impl Path {
    /// A zero-length path sitting at `point`.
    pub fn at(point: EdgePoint, location: Location) -> Self {
        Self {
            start: point,
            end: point,
            segments: smallvec![PathSegment {
                edge_id: point.edge_id,
                from: point.distance,
                to: point.distance,
            }],
            locations: vec![location],
            length: 0.0,
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.length <= 0.0
    }

    /// Trails crossed by this path, in walking order.
    pub fn oriented_edges(&self) -> impl Iterator<Item = OrientedEdge> + '_ {
        self.segments.iter().map(|s| OrientedEdge {
            edge_id: s.edge_id,
            forward: s.forward(),
        })
    }

    /// Drop the first `distance` units of the path.
    ///
    /// The result has length `max(0, length - distance)`. Negative and NaN
    /// distances are treated as zero.
    pub fn advanced(&self, distance: f64) -> Path {
        let distance = if distance > 0.0 { distance } else { 0.0 };
        if distance == 0.0 {
            return self.clone();
        }
        if distance >= self.length {
            let end_location = self.locations.last().copied().unwrap_or_default();
            return Path::at(self.end, end_location);
        }

        let mut remaining = distance;
        let mut segments: SmallVec<[PathSegment; 4]> = SmallVec::new();
        for seg in &self.segments {
            let len = seg.length();
            if !segments.is_empty() {
                segments.push(*seg);
            } else if remaining < len {
                let dir = if seg.forward() { 1.0 } else { -1.0 };
                segments.push(PathSegment {
                    edge_id: seg.edge_id,
                    from: seg.from + dir * remaining,
                    to: seg.to,
                });
            } else {
                remaining -= len;
            }
        }
        // Rounding can consume every segment even though distance < length.
        let Some(first) = segments.first() else {
            let end_location = self.locations.last().copied().unwrap_or_default();
            return Path::at(self.end, end_location);
        };

        Path {
            start: EdgePoint::new(first.edge_id, first.from),
            end: self.end,
            locations: trim_polyline_start(&self.locations, distance),
            length: self.length - distance,
            segments,
        }
    }
}
