//! The query surface the interaction layer needs from a network.

use crate::error::NetworkError;
use crate::geometry::{Extent, Location, bounding_box};
use crate::path::{EdgePoint, Path};

/// Network queries consumed by the viewer.
///
/// `TrailNetwork` is the production implementation; the viewer stays
/// generic so it can run against any graph backend.
pub trait RouteNetwork {
    /// Nearest point on any trail. Fails with `NetworkError::Empty` when the
    /// network has no trails.
    fn closest_point(&self, location: Location) -> Result<EdgePoint, NetworkError>;

    fn location_of(&self, point: &EdgePoint) -> Result<Location, NetworkError>;

    fn shortest_path(&self, start: &EdgePoint, end: &EdgePoint) -> Result<Path, NetworkError>;

    /// A path of length `max(0, path.length - distance)`, truncated from the
    /// start.
    fn advance_along_path(&self, path: &Path, distance: f64) -> Path;

    fn all_node_locations(&self) -> Vec<Location>;

    /// Axis-aligned bounding size of all junction locations.
    fn extent(&self) -> Extent {
        match bounding_box(self.all_node_locations()) {
            Some((min, max)) => Extent::new(max.x - min.x, max.y - min.y),
            None => Extent::default(),
        }
    }
}
