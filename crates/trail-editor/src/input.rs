//! Input abstraction layer.
//!
//! The platform delivers pointer positions already normalized to viewport
//! coordinates; these events are what the controller consumes.

use trail_core::{Extent, Location};

/// A normalized input event from the hosting surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer pressed inside the viewport.
    PointerDown { x: f64, y: f64 },

    /// Pointer moved, pressed or not.
    PointerMove { x: f64, y: f64 },

    /// Pointer released. The position is irrelevant: the last hover wins.
    PointerUp,

    /// Pointer left the interactive surface.
    PointerLeave,

    /// Viewport resized.
    Resize { width: f64, height: f64 },

    /// Display refresh callback with its timestamp in milliseconds.
    AnimationFrame { timestamp_ms: f64 },
}

impl InputEvent {
    pub fn from_pointer_down(x: f64, y: f64) -> Self {
        Self::PointerDown { x, y }
    }

    pub fn from_pointer_move(x: f64, y: f64) -> Self {
        Self::PointerMove { x, y }
    }

    /// Extract position if this is a positioned pointer event.
    pub fn position(&self) -> Option<Location> {
        match self {
            Self::PointerDown { x, y } | Self::PointerMove { x, y } => Some(Location::new(*x, *y)),
            _ => None,
        }
    }

    pub fn extent(&self) -> Option<Extent> {
        match self {
            Self::Resize { width, height } => Some(Extent::new(*width, *height)),
            _ => None,
        }
    }
}
