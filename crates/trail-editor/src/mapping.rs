//! Network-space ↔ viewport-space transform.
//!
//! A mapping is a single uniform `scale` (network units per viewport unit)
//! plus the viewport center, which corresponds to the network origin. It is
//! fitted so the whole network bounding box is visible: the constraining
//! axis touches the viewport edges, the other axis is centered.
//!
//! Mappings are immutable. A resize computes a fresh one.

use crate::error::MappingError;
use serde::Serialize;
use trail_core::{Extent, Location};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CoordinateMapping {
    scale: f64,
    center: Location,
    viewport: Extent,
}

impl CoordinateMapping {
    /// Fit `network` into `viewport`.
    ///
    /// The scale is the larger of the per-axis ratios, so a network that is
    /// relatively wider than the viewport is fitted by width and a taller
    /// one by height.
    pub fn compute(network: Extent, viewport: Extent) -> Result<Self, MappingError> {
        if network.is_degenerate() {
            return Err(MappingError::DegenerateNetwork(network));
        }
        if viewport.is_degenerate() {
            return Err(MappingError::DegenerateViewport(viewport));
        }

        let network_aspect = network.width / network.height;
        let viewport_aspect = viewport.width / viewport.height;
        let scale = if network_aspect > viewport_aspect {
            network.width / viewport.width
        } else {
            network.height / viewport.height
        };

        Ok(Self {
            scale,
            center: Location::new(viewport.width / 2.0, viewport.height / 2.0),
            viewport,
        })
    }

    /// Network units per viewport unit.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Viewport location of the network origin.
    pub fn center(&self) -> Location {
        self.center
    }

    pub fn viewport(&self) -> Extent {
        self.viewport
    }

    pub fn to_viewport(&self, location: Location) -> Location {
        self.center + location / self.scale
    }

    pub fn to_network(&self, location: Location) -> Location {
        (location - self.center) * self.scale
    }

    /// Length of the viewport diagonal measured in network units.
    pub fn viewport_diagonal_in_network_units(&self) -> f64 {
        self.viewport.diagonal() * self.scale
    }
}
