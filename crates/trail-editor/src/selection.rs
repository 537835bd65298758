//! Drag-to-route selection.
//!
//! Two phases, `Idle` and `Pressed`, with the hover point tracked
//! independently of either. A release while pressed over the network
//! commits the route between the press point and the hover point.
//!
//! | Event   | Idle                 | Pressed                                |
//! |---------|----------------------|----------------------------------------|
//! | press   | → Pressed            | → Pressed (new start)                  |
//! | move    | hover updated        | hover updated, preview recomputed      |
//! | release | no-op                | → Idle, commit if hover is present     |
//! | leave   | hover cleared        | → Idle, hover cleared, never commits   |

use serde::Serialize;
use trail_core::{EdgePoint, NetworkError, Path, RouteNetwork};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SelectionPhase {
    Idle,
    Pressed,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionState {
    /// Set only between a press and the matching release or leave.
    pub pressed_start: Option<EdgePoint>,
    /// Most recent pointer position on the network.
    pub hover: Option<EdgePoint>,
}

#[derive(Debug, Clone, Default)]
pub struct SelectionMachine {
    state: SelectionState,
}

impl SelectionMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn phase(&self) -> SelectionPhase {
        if self.state.pressed_start.is_some() {
            SelectionPhase::Pressed
        } else {
            SelectionPhase::Idle
        }
    }

    pub fn press(&mut self, point: EdgePoint) {
        self.state.pressed_start = Some(point);
    }

    pub fn move_to(&mut self, point: EdgePoint) {
        self.state.hover = Some(point);
    }

    /// End the gesture. Returns the committed route when the machine was
    /// pressed and a hover point is known.
    ///
    /// The machine is idle afterwards even if routing fails; the routing
    /// error is returned and nothing is committed.
    pub fn release<N: RouteNetwork>(&mut self, network: &N) -> Result<Option<Path>, NetworkError> {
        let Some(start) = self.state.pressed_start.take() else {
            return Ok(None);
        };
        match self.state.hover {
            Some(hover) => network.shortest_path(&start, &hover).map(Some),
            None => Ok(None),
        }
    }

    /// Abandon the gesture. Idempotent.
    pub fn leave(&mut self) {
        self.state = SelectionState::default();
    }

    /// Route from the press point to the hover point, recomputed on every
    /// call since the hover point moves.
    pub fn preview<N: RouteNetwork>(&self, network: &N) -> Result<Option<Path>, NetworkError> {
        match (self.state.pressed_start, self.state.hover) {
            (Some(start), Some(hover)) => network.shortest_path(&start, &hover).map(Some),
            _ => Ok(None),
        }
    }
}
