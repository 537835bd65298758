//! Shared fixtures for unit tests.

use trail_core::{EdgeId, EdgePoint, Location, NetworkError, Path, RouteNetwork};

/// A single straight 100-unit trail along the x axis centered on the
/// origin. Edge point `d` resolves to `(d - 50, 0)`.
pub struct Line;

pub fn at(d: f64) -> EdgePoint {
    EdgePoint::new(EdgeId::intern("line"), d)
}

fn resolve(d: f64) -> Location {
    Location::new(d - 50.0, 0.0)
}

impl RouteNetwork for Line {
    fn closest_point(&self, location: Location) -> Result<EdgePoint, NetworkError> {
        Ok(at((location.x + 50.0).clamp(0.0, 100.0)))
    }

    fn location_of(&self, point: &EdgePoint) -> Result<Location, NetworkError> {
        Ok(resolve(point.distance))
    }

    fn shortest_path(&self, start: &EdgePoint, end: &EdgePoint) -> Result<Path, NetworkError> {
        let mut path = Path::at(*start, resolve(start.distance));
        path.end = *end;
        path.segments[0].to = end.distance;
        path.length = (end.distance - start.distance).abs();
        if path.length > 0.0 {
            path.locations.push(resolve(end.distance));
        }
        Ok(path)
    }

    fn advance_along_path(&self, path: &Path, distance: f64) -> Path {
        path.advanced(distance)
    }

    fn all_node_locations(&self) -> Vec<Location> {
        vec![Location::new(-50.0, -10.0), Location::new(50.0, 10.0)]
    }
}

/// A network with no trails at all.
pub struct Empty;

impl RouteNetwork for Empty {
    fn closest_point(&self, _: Location) -> Result<EdgePoint, NetworkError> {
        Err(NetworkError::Empty)
    }

    fn location_of(&self, point: &EdgePoint) -> Result<Location, NetworkError> {
        Err(NetworkError::UnknownEdge(point.edge_id))
    }

    fn shortest_path(&self, start: &EdgePoint, end: &EdgePoint) -> Result<Path, NetworkError> {
        Err(NetworkError::NoRoute { from: *start, to: *end })
    }

    fn advance_along_path(&self, path: &Path, distance: f64) -> Path {
        path.advanced(distance)
    }

    fn all_node_locations(&self) -> Vec<Location> {
        vec![Location::new(0.0, 0.0), Location::new(10.0, 10.0)]
    }
}
