//! What the presentation layer receives on every re-render.

use crate::exiting::ExitingPath;
use crate::mapping::CoordinateMapping;
use serde::Serialize;
use trail_core::{Location, Path};

/// Snapshot of everything visible. Network-space geometry plus the mapping
/// that projects it; the renderer does the projection.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderFrame<'a> {
    pub mapping: CoordinateMapping,
    /// Resolved hover point, if the pointer is over the surface.
    pub hover: Option<Location>,
    /// Live route while dragging.
    pub preview: Option<Path>,
    /// Retracting paths with their lifecycle tags, in commit order.
    pub exiting: &'a [ExitingPath],
}
