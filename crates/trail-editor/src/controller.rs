//! Viewport controller: the single owner of all interaction state.
//!
//! Pointer, resize and frame events come in here and are routed to the
//! selection machine, the exiting-path registry, the coordinate mapping and
//! the animation driver. Every handler returns whether the host should
//! re-render; the host then asks for a `RenderFrame`.
//!
//! Resizing swaps in a new mapping and leaves selection and exiting paths
//! untouched: only their projection changes.

use crate::animation::AnimationDriver;
use crate::config::ViewerConfig;
use crate::error::ViewerError;
use crate::exiting::ExitingPathRegistry;
use crate::frame::RenderFrame;
use crate::input::InputEvent;
use crate::mapping::CoordinateMapping;
use crate::selection::{SelectionMachine, SelectionPhase, SelectionState};
use trail_core::{EdgePoint, Extent, Location, NetworkError, Path, RouteNetwork};

pub struct ViewportController<N: RouteNetwork> {
    network: N,
    /// Computed once at construction.
    network_extent: Extent,
    mapping: CoordinateMapping,
    selection: SelectionMachine,
    exiting: ExitingPathRegistry,
    driver: AnimationDriver,
}

impl<N: RouteNetwork> ViewportController<N> {
    /// Fails when the network or viewport extent is degenerate or the
    /// configuration is invalid.
    pub fn new(network: N, viewport: Extent, config: &ViewerConfig) -> Result<Self, ViewerError> {
        config.validate()?;
        let network_extent = network.extent();
        let mapping = CoordinateMapping::compute(network_extent, viewport)?;
        let driver = AnimationDriver::new(config.crossing_duration_ms, &mapping);
        Ok(Self {
            network,
            network_extent,
            mapping,
            selection: SelectionMachine::new(),
            exiting: ExitingPathRegistry::new(),
            driver,
        })
    }

    // ─── Accessors ───────────────────────────────────────────────────────

    pub fn network(&self) -> &N {
        &self.network
    }

    pub fn network_extent(&self) -> Extent {
        self.network_extent
    }

    pub fn mapping(&self) -> &CoordinateMapping {
        &self.mapping
    }

    pub fn selection(&self) -> &SelectionState {
        self.selection.state()
    }

    pub fn phase(&self) -> SelectionPhase {
        self.selection.phase()
    }

    pub fn exiting(&self) -> &ExitingPathRegistry {
        &self.exiting
    }

    pub fn driver(&self) -> &AnimationDriver {
        &self.driver
    }

    // ─── Input ───────────────────────────────────────────────────────────

    /// Nearest network point under a viewport location.
    pub fn hit_test(&self, viewport_location: Location) -> Result<EdgePoint, NetworkError> {
        self.network
            .closest_point(self.mapping.to_network(viewport_location))
    }

    pub fn on_pointer_press(&mut self, viewport_location: Location) -> Result<bool, ViewerError> {
        let point = self.hit_test(viewport_location)?;
        log::debug!("press on {} at {:.2}", point.edge_id, point.distance);
        self.selection.press(point);
        Ok(true)
    }

    pub fn on_pointer_move(&mut self, viewport_location: Location) -> Result<bool, ViewerError> {
        let point = self.hit_test(viewport_location)?;
        let changed = self.selection.state().hover != Some(point);
        log::trace!("hover on {} at {:.2}", point.edge_id, point.distance);
        self.selection.move_to(point);
        Ok(changed)
    }

    /// Ends the gesture, commits the released route to the exiting
    /// registry, then flushes retracted paths. Release is the only point
    /// at which retracted paths are removed.
    pub fn on_pointer_release(&mut self) -> Result<bool, ViewerError> {
        let was_pressed = self.selection.phase() == SelectionPhase::Pressed;
        let committed = match self.selection.release(&self.network) {
            Ok(path) => path,
            Err(err) => {
                self.exiting.flush();
                return Err(err.into());
            }
        };
        if let Some(path) = committed {
            self.exiting.commit(path);
        }
        let flushed = self.exiting.flush();
        Ok(was_pressed || flushed > 0)
    }

    pub fn on_pointer_leave(&mut self) -> bool {
        let changed = *self.selection.state() != SelectionState::default();
        if changed {
            log::debug!("pointer left, gesture abandoned");
        }
        self.selection.leave();
        changed
    }

    pub fn on_resize(&mut self, viewport: Extent) -> Result<bool, ViewerError> {
        let mapping = CoordinateMapping::compute(self.network_extent, viewport)?;
        log::debug!(
            "viewport {}x{}, scale {:.4}",
            viewport.width,
            viewport.height,
            mapping.scale()
        );
        self.mapping = mapping;
        self.driver.retune(&self.mapping);
        Ok(true)
    }

    pub fn on_animation_frame(&mut self, timestamp_ms: f64) -> bool {
        self.driver
            .tick(timestamp_ms, &mut self.exiting, &self.network)
    }

    /// Dispatch a normalized input event.
    pub fn handle(&mut self, event: &InputEvent) -> Result<bool, ViewerError> {
        match *event {
            InputEvent::PointerDown { x, y } => self.on_pointer_press(Location::new(x, y)),
            InputEvent::PointerMove { x, y } => self.on_pointer_move(Location::new(x, y)),
            InputEvent::PointerUp => self.on_pointer_release(),
            InputEvent::PointerLeave => Ok(self.on_pointer_leave()),
            InputEvent::Resize { width, height } => self.on_resize(Extent::new(width, height)),
            InputEvent::AnimationFrame { timestamp_ms } => Ok(self.on_animation_frame(timestamp_ms)),
        }
    }

    // ─── Output ──────────────────────────────────────────────────────────

    /// Build the current re-render payload. The preview route is recomputed
    /// here from the live hover point; when no route exists the frame simply
    /// has no preview; the error surfaces only on release.
    pub fn frame(&self) -> Result<RenderFrame<'_>, ViewerError> {
        let hover = self
            .selection
            .state()
            .hover
            .map(|p| self.network.location_of(&p))
            .transpose()?;
        Ok(RenderFrame {
            mapping: self.mapping,
            hover,
            preview: self.preview(),
            exiting: self.exiting.entries(),
        })
    }

    fn preview(&self) -> Option<Path> {
        match self.selection.preview(&self.network) {
            Ok(path) => path,
            Err(err) => {
                log::debug!("no preview: {err}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exiting::Lifecycle;
    use crate::test_support::{Empty, Line, at};
    use trail_core::{EdgeId, NodeId, SimpleEdge, SimpleNode, TrailNetwork};

    fn controller() -> ViewportController<Line> {
        // Line spans 100x20 network units; in a 500x100 viewport the scale
        // is 0.2, so viewport x = 250 + network x * 5.
        ViewportController::new(Line, Extent::new(500.0, 100.0), &ViewerConfig::default()).unwrap()
    }

    #[test]
    fn hit_test_goes_through_the_mapping() {
        let c = controller();
        assert_eq!(c.hit_test(Location::new(250.0, 50.0)).unwrap(), at(50.0));
        assert_eq!(c.hit_test(Location::new(300.0, 0.0)).unwrap(), at(60.0));
    }

    #[test]
    fn drag_and_release_commits_one_active_path() {
        let mut c = controller();
        assert!(c.on_pointer_press(Location::new(250.0, 50.0)).unwrap());
        assert!(c.on_pointer_move(Location::new(300.0, 50.0)).unwrap());
        assert_eq!(c.frame().unwrap().preview.unwrap().length, 10.0);

        assert!(c.on_pointer_release().unwrap());
        assert_eq!(c.phase(), SelectionPhase::Idle);
        assert_eq!(c.exiting().len(), 1);
        assert_eq!(c.exiting().entries()[0].lifecycle, Lifecycle::Active);
        assert!(c.frame().unwrap().preview.is_none());
    }

    #[test]
    fn pending_paths_are_flushed_only_on_release() {
        let mut c = controller();
        c.on_pointer_press(Location::new(250.0, 50.0)).unwrap();
        c.on_pointer_move(Location::new(260.0, 50.0)).unwrap();
        c.on_pointer_release().unwrap();

        c.on_animation_frame(0.0);
        c.on_animation_frame(10_000.0);
        assert_eq!(c.exiting().pending_count(), 1);

        // A new gesture in progress must not detach the retracted path.
        c.on_pointer_press(Location::new(100.0, 50.0)).unwrap();
        c.on_pointer_move(Location::new(120.0, 50.0)).unwrap();
        c.on_pointer_leave();
        c.on_animation_frame(20_000.0);
        assert_eq!(c.exiting().pending_count(), 1);

        assert!(c.on_pointer_release().unwrap());
        assert!(c.exiting().is_empty());
    }

    #[test]
    fn resize_keeps_logical_state() {
        let mut c = controller();
        c.on_pointer_press(Location::new(250.0, 50.0)).unwrap();
        c.on_pointer_move(Location::new(300.0, 50.0)).unwrap();
        let before = *c.selection();
        let speed_before = c.driver().speed();

        // Narrower than the network: now fitted by width.
        assert!(c.on_resize(Extent::new(250.0, 100.0)).unwrap());
        assert_eq!(*c.selection(), before);
        assert_eq!(c.mapping().scale(), 0.4);
        assert!(c.driver().speed() != speed_before);

        // Same network point now projects elsewhere.
        assert_eq!(c.hit_test(Location::new(150.0, 50.0)).unwrap(), at(60.0));
    }

    #[test]
    fn degenerate_resize_is_rejected_and_keeps_the_old_mapping() {
        let mut c = controller();
        let err = c.on_resize(Extent::new(0.0, 100.0)).unwrap_err();
        assert!(matches!(err, ViewerError::Mapping(_)));
        assert_eq!(c.mapping().scale(), 0.2);
    }

    #[test]
    fn empty_network_press_is_a_hard_error() {
        let mut c =
            ViewportController::new(Empty, Extent::new(100.0, 100.0), &ViewerConfig::default()).unwrap();
        let err = c.on_pointer_press(Location::new(1.0, 1.0)).unwrap_err();
        assert!(matches!(err, ViewerError::Network(NetworkError::Empty)));
        assert_eq!(c.phase(), SelectionPhase::Idle);
    }

    #[test]
    fn unroutable_drag_still_renders_without_preview() {
        let network = TrailNetwork::create(
            vec![
                SimpleNode { id: NodeId::intern("a"), location: Location::new(0.0, 0.0) },
                SimpleNode { id: NodeId::intern("b"), location: Location::new(10.0, 0.0) },
                SimpleNode { id: NodeId::intern("c"), location: Location::new(0.0, 20.0) },
                SimpleNode { id: NodeId::intern("d"), location: Location::new(10.0, 20.0) },
            ],
            vec![
                SimpleEdge {
                    id: EdgeId::intern("ab"),
                    start_node_id: NodeId::intern("a"),
                    end_node_id: NodeId::intern("b"),
                    inner_locations: Vec::new(),
                },
                SimpleEdge {
                    id: EdgeId::intern("cd"),
                    start_node_id: NodeId::intern("c"),
                    end_node_id: NodeId::intern("d"),
                    inner_locations: Vec::new(),
                },
            ],
        )
        .unwrap();
        let config = ViewerConfig {
            closest_point_mesh: None,
            recenter_network: false,
            ..ViewerConfig::default()
        };
        // 10x20 network in a 100x200 viewport: scale 0.1, origin at (50, 100).
        let mut c = ViewportController::new(network, Extent::new(100.0, 200.0), &config).unwrap();
        c.on_pointer_press(Location::new(100.0, 100.0)).unwrap();
        c.on_pointer_move(Location::new(100.0, 300.0)).unwrap();

        let frame = c.frame().unwrap();
        assert!(frame.preview.is_none());
        assert_eq!(frame.hover, Some(Location::new(5.0, 20.0)));

        let err = c.on_pointer_release().unwrap_err();
        assert!(matches!(err, ViewerError::Network(NetworkError::NoRoute { .. })));
        assert_eq!(c.phase(), SelectionPhase::Idle);
        assert!(c.exiting().is_empty());
    }

    #[test]
    fn events_dispatch_to_handlers() {
        let mut c = controller();
        for event in [
            InputEvent::from_pointer_down(250.0, 50.0),
            InputEvent::from_pointer_move(275.0, 50.0),
            InputEvent::PointerUp,
        ] {
            c.handle(&event).unwrap();
        }
        assert_eq!(c.exiting().len(), 1);
        assert!(c.handle(&InputEvent::AnimationFrame { timestamp_ms: 1.0 }).unwrap());
        assert!(c.handle(&InputEvent::PointerLeave).unwrap());
        assert_eq!(*c.selection(), SelectionState::default());
    }
}
