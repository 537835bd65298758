//! Interaction core for the trail viewer.
//!
//! - `mapping`: network ↔ viewport transform fitted to the viewport.
//! - `selection`: press/move/release/leave state machine.
//! - `exiting`: released paths retracting with two-phase removal.
//! - `animation`: per-frame driver for the exiting registry.
//! - `controller`: owns all of the above and handles host events.

pub mod animation;
pub mod config;
pub mod controller;
pub mod error;
pub mod exiting;
pub mod frame;
pub mod input;
pub mod mapping;
pub mod selection;

#[cfg(test)]
mod test_support;

pub use animation::AnimationDriver;
pub use config::ViewerConfig;
pub use controller::ViewportController;
pub use error::{ConfigError, MappingError, ViewerError};
pub use exiting::{ExitingPath, ExitingPathRegistry, Lifecycle};
pub use frame::RenderFrame;
pub use input::InputEvent;
pub use mapping::CoordinateMapping;
pub use selection::{SelectionMachine, SelectionPhase, SelectionState};
