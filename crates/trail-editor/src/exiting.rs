//! Released paths retracting toward zero length.
//!
//! Removal is two-phase. An entry whose path runs out is only marked
//! `PendingRemoval`; it stays in the registry, and its visual element stays
//! attached, until `flush()` runs at the next pointer release. Detaching an
//! element while a pointer gesture is still in flight over it is exactly
//! what the deferred flush avoids.

use serde::Serialize;
use trail_core::{Path, RouteNetwork};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Lifecycle {
    /// Still retracting; advanced every frame.
    Active,
    /// Fully retracted, hidden, awaiting `flush()`.
    PendingRemoval,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExitingPath {
    /// Stable key for the presentation layer.
    pub id: u64,
    pub path: Path,
    pub lifecycle: Lifecycle,
}

/// Owns every exiting path, in commit order.
#[derive(Debug, Clone, Default)]
pub struct ExitingPathRegistry {
    entries: Vec<ExitingPath>,
    next_id: u64,
}

impl ExitingPathRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start retracting a released path. Overlapping paths are kept as
    /// separate entries.
    pub fn commit(&mut self, path: Path) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        log::debug!("exiting path #{id} committed, length {:.2}", path.length);
        self.entries.push(ExitingPath {
            id,
            path,
            lifecycle: Lifecycle::Active,
        });
        id
    }

    /// Shorten every active path by `distance`. Returns how many entries
    /// became `PendingRemoval` during this call.
    pub fn advance<N: RouteNetwork>(&mut self, network: &N, distance: f64) -> usize {
        let mut exhausted = 0;
        for entry in self
            .entries
            .iter_mut()
            .filter(|e| e.lifecycle == Lifecycle::Active)
        {
            entry.path = network.advance_along_path(&entry.path, distance);
            if entry.path.is_exhausted() {
                entry.lifecycle = Lifecycle::PendingRemoval;
                exhausted += 1;
                log::trace!("exiting path #{} fully retracted", entry.id);
            }
        }
        exhausted
    }

    /// Drop every `PendingRemoval` entry. Call only at a pointer-release
    /// boundary. Returns the number of entries removed.
    pub fn flush(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|e| e.lifecycle == Lifecycle::Active);
        let removed = before - self.entries.len();
        if removed > 0 {
            log::debug!("flushed {removed} retracted path(s)");
        }
        removed
    }

    pub fn entries(&self) -> &[ExitingPath] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn active_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.lifecycle == Lifecycle::Active)
            .count()
    }

    pub fn pending_count(&self) -> usize {
        self.len() - self.active_count()
    }
}
