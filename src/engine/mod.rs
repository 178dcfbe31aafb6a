//! Frame-driven host for the drag controller.
//!
//! [`PanEngine`] ties a [`CameraDragController`] to an [`EventSource`]
//! through a scoped [`Subscription`]. Each [`PanEngine::frame`] drains the
//! events queued since the last frame, dispatches them in arrival order and
//! then runs the smoothing step.

use glam::Vec2;

use crate::camera::controller::CameraDragController;
use crate::camera::core::Camera2d;
use crate::input::{EventSource, InputEvent, Subscription};
use crate::options::Options;
use crate::picking::HitTesters;

/// What happened during one [`PanEngine::frame`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameReport {
    /// Events dispatched to the controller.
    pub dispatched: usize,
    /// Drag starts that were swallowed by UI or a world object.
    pub gated: usize,
    /// Whether a context reset moved the camera back to its default.
    pub reset: bool,
}

/// Owns the pan controller and, while active, its event subscription.
pub struct PanEngine {
    controller: CameraDragController,
    subscription: Option<Subscription>,
}

impl PanEngine {
    /// Build an inactive engine from options. The camera starts at
    /// `options.camera.start_position`, which becomes the default position.
    #[must_use]
    pub fn new(options: &Options) -> Self {
        let camera = Camera2d::from_options(&options.camera);
        Self::with_camera(camera, options)
    }

    /// Build an inactive engine around an existing camera.
    #[must_use]
    pub fn with_camera(camera: Camera2d, options: &Options) -> Self {
        Self {
            controller: CameraDragController::new(
                camera,
                options.pan.clone(),
                options.bounds.clone(),
            ),
            subscription: None,
        }
    }

    /// Start receiving events from `source`. Re-activating replaces the
    /// previous subscription.
    pub fn activate(&mut self, source: &EventSource) {
        self.subscription = Some(source.subscribe());
        log::debug!("pan engine activated");
    }

    /// Stop receiving events. Anything still queued is discarded.
    pub fn deactivate(&mut self) {
        if self.subscription.take().is_some() {
            log::debug!("pan engine deactivated");
        }
    }

    /// Whether the engine is subscribed to an event source.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.subscription.is_some()
    }

    /// The drag controller.
    #[must_use]
    pub fn controller(&self) -> &CameraDragController {
        &self.controller
    }

    /// The camera, for renderers.
    #[must_use]
    pub fn camera(&self) -> &Camera2d {
        self.controller.camera()
    }

    /// Forward a viewport resize.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.controller.resize(width, height);
    }

    /// Run one frame: dispatch pending events, then smooth the camera.
    pub fn frame(&mut self, dt: f32, hits: HitTesters<'_>) -> FrameReport {
        let events = self
            .subscription
            .as_ref()
            .map(Subscription::drain)
            .unwrap_or_default();

        let mut report = FrameReport::default();
        for event in events {
            self.dispatch(event, dt, hits, &mut report);
        }

        self.controller.update(dt);
        report
    }

    /// Route one event to the matching controller handler.
    fn dispatch(
        &mut self,
        event: InputEvent,
        dt: f32,
        hits: HitTesters<'_>,
        report: &mut FrameReport,
    ) {
        report.dispatched += 1;
        match event {
            InputEvent::DragStart { x, y } => {
                let gate = self.controller.on_drag_start(Vec2::new(x, y), hits);
                if !gate.started() {
                    report.gated += 1;
                }
            }
            InputEvent::Drag { x, y } => {
                self.controller.on_drag(Vec2::new(x, y), dt);
            }
            InputEvent::DragEnd { x, y } => {
                self.controller.on_drag_end(Vec2::new(x, y));
            }
            InputEvent::ContextReset => {
                report.reset |= self.controller.on_context_reset();
            }
        }
    }
}
