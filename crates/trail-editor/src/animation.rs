//! Frame-driven retraction of exiting paths.
//!
//! The host calls `tick` once per display refresh (e.g. from
//! `requestAnimationFrame`) and re-arms its callback every frame whether or
//! not anything is animating; an idle tick is a cheap no-op. The driver has
//! no stopped state of its own.

use crate::exiting::ExitingPathRegistry;
use crate::mapping::CoordinateMapping;
use trail_core::RouteNetwork;

#[derive(Debug, Clone)]
pub struct AnimationDriver {
    crossing_duration_ms: f64,
    /// Network units per millisecond.
    speed: f64,
    previous_timestamp: Option<f64>,
}

impl AnimationDriver {
    pub fn new(crossing_duration_ms: f64, mapping: &CoordinateMapping) -> Self {
        let mut driver = Self {
            crossing_duration_ms,
            speed: 0.0,
            previous_timestamp: None,
        };
        driver.retune(mapping);
        driver
    }

    /// Recompute the speed for a new mapping so a path spanning the viewport
    /// diagonal always retracts in `crossing_duration_ms`.
    pub fn retune(&mut self, mapping: &CoordinateMapping) {
        self.speed = mapping.viewport_diagonal_in_network_units() / self.crossing_duration_ms;
        log::debug!("retraction speed {:.4} units/ms", self.speed);
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn crossing_duration_ms(&self) -> f64 {
        self.crossing_duration_ms
    }

    /// Advance exiting paths by the time elapsed since the previous frame.
    ///
    /// The first frame has `dt = 0`. Returns `true` when the registry was
    /// non-empty and a re-render is needed.
    pub fn tick<N: RouteNetwork>(
        &mut self,
        timestamp_ms: f64,
        registry: &mut ExitingPathRegistry,
        network: &N,
    ) -> bool {
        let dt = match self.previous_timestamp {
            None => 0.0,
            Some(prev) if timestamp_ms < prev => {
                log::warn!("frame timestamp went backwards ({prev} -> {timestamp_ms}), using dt = 0");
                0.0
            }
            Some(prev) => timestamp_ms - prev,
        };
        self.previous_timestamp = Some(timestamp_ms);

        if registry.is_empty() {
            return false;
        }
        let distance = dt * self.speed;
        log::trace!("tick dt={dt:.2}ms advance={distance:.3}");
        registry.advance(network, distance);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exiting::Lifecycle;
    use crate::test_support::{Line, at};
    use trail_core::Extent;

    fn mapping(view: Extent) -> CoordinateMapping {
        CoordinateMapping::compute(Extent::new(100.0, 20.0), view).unwrap()
    }

    #[test]
    fn diagonal_retracts_in_crossing_duration_at_any_size() {
        for view in [Extent::new(960.0, 500.0), Extent::new(200.0, 900.0), Extent::new(50.0, 50.0)] {
            let m = mapping(view);
            let driver = AnimationDriver::new(1000.0, &m);
            let diagonal = m.viewport_diagonal_in_network_units();
            assert!((driver.speed() * 1000.0 - diagonal).abs() < 1e-9);
        }
    }

    #[test]
    fn first_frame_does_not_jump() {
        let mut driver = AnimationDriver::new(1000.0, &mapping(Extent::new(960.0, 500.0)));
        let mut reg = ExitingPathRegistry::new();
        reg.commit(Line.shortest_path(&at(0.0), &at(100.0)).unwrap());

        assert!(driver.tick(123_456.0, &mut reg, &Line));
        assert_eq!(reg.entries()[0].path.length, 100.0);

        assert!(driver.tick(123_466.0, &mut reg, &Line));
        let expected = 100.0 - 10.0 * driver.speed();
        assert!((reg.entries()[0].path.length - expected).abs() < 1e-9);
    }

    #[test]
    fn idle_ticks_request_nothing_but_keep_the_clock() {
        let mut driver = AnimationDriver::new(1000.0, &mapping(Extent::new(960.0, 500.0)));
        let mut reg = ExitingPathRegistry::new();
        assert!(!driver.tick(0.0, &mut reg, &Line));
        assert!(!driver.tick(16.0, &mut reg, &Line));

        reg.commit(Line.shortest_path(&at(0.0), &at(100.0)).unwrap());
        driver.tick(32.0, &mut reg, &Line);
        let expected = 100.0 - 16.0 * driver.speed();
        assert!((reg.entries()[0].path.length - expected).abs() < 1e-9);
    }

    #[test]
    fn backwards_timestamps_are_clamped() {
        let mut driver = AnimationDriver::new(1000.0, &mapping(Extent::new(960.0, 500.0)));
        let mut reg = ExitingPathRegistry::new();
        reg.commit(Line.shortest_path(&at(0.0), &at(100.0)).unwrap());
        driver.tick(500.0, &mut reg, &Line);
        driver.tick(400.0, &mut reg, &Line);
        assert_eq!(reg.entries()[0].path.length, 100.0);
    }

    #[test]
    fn path_retires_exactly_when_its_length_is_covered() {
        let m = mapping(Extent::new(960.0, 500.0));
        let mut driver = AnimationDriver::new(250.0, &m);
        let mut reg = ExitingPathRegistry::new();
        reg.commit(Line.shortest_path(&at(0.0), &at(100.0)).unwrap());
        let lifetime = 100.0 / driver.speed();

        driver.tick(0.0, &mut reg, &Line);
        driver.tick(lifetime * 0.99, &mut reg, &Line);
        assert_eq!(reg.entries()[0].lifecycle, Lifecycle::Active);
        driver.tick(lifetime * 1.01, &mut reg, &Line);
        assert_eq!(reg.entries()[0].lifecycle, Lifecycle::PendingRemoval);
    }
}
