use glam::{Vec2, Vec3};

use crate::camera::core::Camera2d;
use crate::options::{BoundsOptions, PanOptions};
use crate::picking::{DragGate, HitTesters};

/// Whether the pointer is currently panning the camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    /// No pointer-follow; the camera only moves under inertia.
    #[default]
    Idle,
    /// Pointer deltas feed the drag offset.
    Dragging,
}

/// Drag-to-pan camera controller.
///
/// Pointer events move a *target* offset from the start-up position; the
/// per-frame [`update`](Self::update) eases the camera toward it. Input
/// cadence and render cadence are decoupled: drag handlers never touch the
/// camera position directly.
pub struct CameraDragController {
    /// Camera whose position this controller owns.
    camera: Camera2d,
    /// Camera position captured at construction.
    default_position: Vec3,
    /// Target displacement from `default_position`, always within bounds
    /// after a drag.
    drag_offset: Vec2,
    state: DragState,
    last_pointer: Vec2,

    options: PanOptions,
    bounds: BoundsOptions,
}

impl CameraDragController {
    /// Take ownership of `camera`, capturing its current position as the
    /// default pan anchor.
    #[must_use]
    pub fn new(
        camera: Camera2d,
        options: PanOptions,
        bounds: BoundsOptions,
    ) -> Self {
        if bounds.is_inverted() {
            log::warn!(
                "pan bounds min {:?} exceeds max {:?}; inverted axes collapse",
                bounds.min,
                bounds.max
            );
        }
        Self {
            default_position: camera.position,
            camera,
            drag_offset: Vec2::ZERO,
            state: DragState::Idle,
            last_pointer: Vec2::ZERO,
            options,
            bounds,
        }
    }

    /// The controlled camera. Renderers read its position from here.
    #[must_use]
    pub fn camera(&self) -> &Camera2d {
        &self.camera
    }

    /// Current camera position.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.camera.position
    }

    /// Start-up position the controller resets to.
    #[must_use]
    pub fn default_position(&self) -> Vec3 {
        self.default_position
    }

    /// Target displacement from the default position.
    #[must_use]
    pub fn drag_offset(&self) -> Vec2 {
        self.drag_offset
    }

    /// Current drag state.
    #[must_use]
    pub fn state(&self) -> DragState {
        self.state
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.state == DragState::Dragging
    }

    /// Pan tunables.
    #[must_use]
    pub fn options(&self) -> &PanOptions {
        &self.options
    }

    /// Offset bounds.
    #[must_use]
    pub fn bounds(&self) -> &BoundsOptions {
        &self.bounds
    }

    /// Update the viewport size after a window resize.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera.resize(width, height);
    }

    /// Try to begin a drag at `screen_pos`.
    ///
    /// UI under the pointer wins first, then interactive world objects.
    /// Neither abort path changes any state.
    pub fn on_drag_start(
        &mut self,
        screen_pos: Vec2,
        hits: HitTesters<'_>,
    ) -> DragGate {
        if hits.ui.any_ui_under_point(screen_pos) {
            log::debug!("drag start at {screen_pos} consumed by UI");
            return DragGate::ConsumedByUi;
        }

        let world_pos = self.camera.screen_to_world(screen_pos);
        if hits.world.any_object_at_world_point(world_pos) {
            log::debug!("drag start at {world_pos} consumed by world object");
            return DragGate::ConsumedByObject;
        }

        self.last_pointer = screen_pos;
        self.state = DragState::Dragging;
        log::debug!("camera drag started at {screen_pos}");
        DragGate::Started
    }

    /// Accumulate a pointer move into the drag offset. Ignored while idle.
    ///
    /// The pixel delta is normalized by viewport height so drag speed does
    /// not depend on resolution.
    pub fn on_drag(&mut self, screen_pos: Vec2, dt: f32) {
        if self.state != DragState::Dragging {
            log::trace!("stale drag event at {screen_pos} ignored");
            return;
        }

        let height = self.camera.viewport_height();
        let delta = if height > 0.0 {
            (screen_pos - self.last_pointer) / height
        } else {
            Vec2::ZERO
        };
        self.last_pointer = screen_pos;

        self.drag_offset += delta * (dt * self.options.drag_gain());
        self.drag_offset = self.bounds.clamp(self.drag_offset);
        log::trace!("drag delta {delta} -> offset {}", self.drag_offset);
    }

    /// Finish the drag.
    ///
    /// Without inertia the target snaps to where the camera is *displayed*
    /// right now, so it stops dead instead of drifting through the
    /// remaining smoothing lag. With inertia the target is left alone and
    /// the camera coasts onto it.
    pub fn on_drag_end(&mut self, _screen_pos: Vec2) {
        self.state = DragState::Idle;
        if !self.options.inertia {
            self.drag_offset =
                (self.camera.position - self.default_position).truncate();
        }
    }

    /// Scene/context reload. Returns `true` if the camera was reset.
    pub fn on_context_reset(&mut self) -> bool {
        if !self.options.reset_on_context_reload {
            return false;
        }
        self.camera.position = self.default_position;
        self.drag_offset = Vec2::ZERO;
        self.state = DragState::Idle;
        log::info!("camera reset to {}", self.default_position);
        true
    }

    /// Per-frame smoothing step.
    ///
    /// Eases the camera toward `default + offset` while dragging, and after
    /// release too when inertia is on. The lerp factor is clamped to
    /// `[0, 1]` so a long frame can land on the target but never pass it.
    pub fn update(&mut self, dt: f32) {
        if self.state != DragState::Dragging && !self.options.inertia {
            return;
        }
        let target = self.default_position.truncate() + self.drag_offset;
        let t = (dt * self.options.smoothness).clamp(0.0, 1.0);
        let pos = self.camera.position;
        self.camera.position = pos.truncate().lerp(target, t).extend(pos.z);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::core::OrthographicProjection;
    use crate::picking::NoHits;

    const EPS: f32 = 1e-5;

    fn camera_at(position: Vec3) -> Camera2d {
        Camera2d {
            position,
            projection: OrthographicProjection {
                half_height: 5.0,
                viewport_width: 1000.0,
                viewport_height: 1000.0,
                znear: 0.1,
                zfar: 1000.0,
            },
        }
    }

    fn controller(options: PanOptions) -> CameraDragController {
        CameraDragController::new(
            camera_at(Vec3::ZERO),
            options,
            BoundsOptions::default(),
        )
    }

    fn start(c: &mut CameraDragController, x: f32, y: f32) -> DragGate {
        c.on_drag_start(Vec2::new(x, y), HitTesters::none())
    }

    #[test]
    fn default_position_captured_from_camera() {
        let c = CameraDragController::new(
            camera_at(Vec3::new(3.0, -2.0, -10.0)),
            PanOptions::default(),
            BoundsOptions::default(),
        );
        assert_eq!(c.default_position(), Vec3::new(3.0, -2.0, -10.0));
        assert_eq!(c.drag_offset(), Vec2::ZERO);
        assert_eq!(c.state(), DragState::Idle);
    }

    #[test]
    fn drag_follows_formula_and_clamps() {
        // 50 px over a 1000 px viewport at dt 0.1 and velocity 50:
        // 0.05 * 0.1 * 50 * 50 = 12.5, clamped to the +5 bound.
        let mut c = controller(PanOptions::default());
        assert_eq!(start(&mut c, 100.0, 100.0), DragGate::Started);
        c.on_drag(Vec2::new(150.0, 100.0), 0.1);
        assert_eq!(c.drag_offset(), Vec2::new(5.0, 0.0));
    }

    #[test]
    fn drag_inside_bounds_is_unclamped() {
        let mut c = CameraDragController::new(
            camera_at(Vec3::ZERO),
            PanOptions::default(),
            BoundsOptions::new(Vec2::splat(-100.0), Vec2::splat(100.0)),
        );
        let _ = start(&mut c, 100.0, 100.0);
        c.on_drag(Vec2::new(150.0, 100.0), 0.1);
        assert!((c.drag_offset().x - 12.5).abs() < EPS);
        assert_eq!(c.drag_offset().y, 0.0);

        // Second move is relative to the last pointer, not the start.
        c.on_drag(Vec2::new(150.0, 90.0), 0.1);
        assert!((c.drag_offset().x - 12.5).abs() < EPS);
        assert!((c.drag_offset().y + 2.5).abs() < EPS);
    }

    #[test]
    fn invert_reverses_direction() {
        let mut c = controller(PanOptions {
            invert: true,
            drag_velocity: 10.0,
            ..PanOptions::default()
        });
        let _ = start(&mut c, 0.0, 0.0);
        c.on_drag(Vec2::new(100.0, 0.0), 0.01);
        // 0.1 * 0.01 * 50 * 10 = 0.5, negated.
        assert!((c.drag_offset().x + 0.5).abs() < EPS);
    }

    #[test]
    fn far_drag_clamps_to_corner() {
        let mut c = controller(PanOptions::default());
        let _ = start(&mut c, 0.0, 0.0);
        c.on_drag(Vec2::new(2000.0, 2000.0), 0.1);
        assert_eq!(c.drag_offset(), Vec2::new(5.0, 5.0));
    }

    #[test]
    fn offset_stays_in_bounds_for_any_drag_sequence() {
        let mut c = controller(PanOptions::default());
        let _ = start(&mut c, 500.0, 500.0);
        let path = [
            (900.0, 100.0),
            (-400.0, 1200.0),
            (510.0, 505.0),
            (3000.0, -3000.0),
            (499.0, 499.0),
        ];
        for (x, y) in path {
            c.on_drag(Vec2::new(x, y), 0.05);
            assert!(c.bounds().contains(c.drag_offset()), "{}", c.drag_offset());
        }
    }

    #[test]
    fn ui_hit_blocks_drag_regardless_of_objects() {
        for object_under_pointer in [false, true] {
            let mut c = controller(PanOptions::default());
            let object_queried = std::cell::Cell::new(false);
            let ui = |_: Vec2| true;
            let world = |_: Vec2| {
                object_queried.set(true);
                object_under_pointer
            };

            let gate = c.on_drag_start(
                Vec2::new(10.0, 10.0),
                HitTesters::new(&ui, &world),
            );
            assert_eq!(gate, DragGate::ConsumedByUi);
            assert!(!object_queried.get());
            assert_eq!(c.state(), DragState::Idle);

            // Later moves are stale and change nothing.
            c.on_drag(Vec2::new(400.0, 400.0), 0.1);
            assert_eq!(c.drag_offset(), Vec2::ZERO);
            assert_eq!(c.state(), DragState::Idle);
        }
    }

    #[test]
    fn object_hit_is_tested_in_world_space() {
        let mut c = controller(PanOptions::default());
        // Viewport center maps to the camera position (origin).
        let world = |p: Vec2| p.length() < 0.5;
        let gate = c.on_drag_start(
            Vec2::new(500.0, 500.0),
            HitTesters::new(&NoHits, &world),
        );
        assert_eq!(gate, DragGate::ConsumedByObject);
        assert!(!c.is_dragging());

        let gate = c.on_drag_start(
            Vec2::new(900.0, 500.0),
            HitTesters::new(&NoHits, &world),
        );
        assert!(gate.started());
    }

    #[test]
    fn update_does_not_move_idle_camera_without_inertia() {
        let mut c = controller(PanOptions::default());
        c.update(0.1);
        assert_eq!(c.position(), Vec3::ZERO);
    }

    #[test]
    fn no_inertia_snaps_offset_to_displayed_position() {
        let mut c = controller(PanOptions::default());
        let _ = start(&mut c, 0.0, 0.0);
        c.on_drag(Vec2::new(40.0, 20.0), 0.1);
        c.update(0.016);
        let displayed = c.position();
        assert_ne!(displayed.truncate(), c.drag_offset());

        c.on_drag_end(Vec2::new(40.0, 20.0));
        assert_eq!(c.state(), DragState::Idle);
        assert_eq!(
            c.drag_offset(),
            (c.position() - c.default_position()).truncate()
        );

        // Camera stays put once released.
        c.update(0.016);
        assert_eq!(c.position(), displayed);
    }

    #[test]
    fn inertia_keeps_target_and_converges_without_overshoot() {
        let mut c = controller(PanOptions {
            inertia: true,
            smoothness: 10.0,
            ..PanOptions::default()
        });
        let _ = start(&mut c, 0.0, 0.0);
        c.on_drag(Vec2::new(40.0, -20.0), 0.1);
        let target = c.drag_offset();
        c.on_drag_end(Vec2::new(40.0, -20.0));
        assert_eq!(c.drag_offset(), target);

        let target = c.default_position() + target.extend(0.0);
        let mut last_distance = c.position().distance(target);
        for _ in 0..200 {
            c.update(0.016);
            let distance = c.position().distance(target);
            assert!(distance <= last_distance);
            assert!(c.position().x <= target.x + EPS);
            assert!(c.position().y >= target.y - EPS);
            last_distance = distance;
        }
        assert!(last_distance < 1e-3);
    }

    #[test]
    fn long_frame_lands_on_target() {
        let mut c = controller(PanOptions::default());
        let _ = start(&mut c, 0.0, 0.0);
        c.on_drag(Vec2::new(10.0, 0.0), 0.1);
        c.update(5.0);
        assert_eq!(c.position().truncate(), c.drag_offset());
    }

    #[test]
    fn update_keeps_depth_fixed() {
        let mut c = CameraDragController::new(
            camera_at(Vec3::new(1.0, 1.0, -10.0)),
            PanOptions::default(),
            BoundsOptions::default(),
        );
        let _ = start(&mut c, 0.0, 0.0);
        c.on_drag(Vec2::new(30.0, 30.0), 0.1);
        for _ in 0..10 {
            c.update(0.016);
        }
        assert_eq!(c.position().z, -10.0);
    }

    #[test]
    fn context_reset_is_idempotent() {
        let mut c = controller(PanOptions::default());
        let _ = start(&mut c, 0.0, 0.0);
        c.on_drag(Vec2::new(30.0, 30.0), 0.1);
        c.update(0.05);

        for _ in 0..3 {
            assert!(c.on_context_reset());
            assert_eq!(c.position(), c.default_position());
            assert_eq!(c.drag_offset(), Vec2::ZERO);
            assert_eq!(c.state(), DragState::Idle);
        }
    }

    #[test]
    fn context_reset_disabled_is_noop() {
        let mut c = controller(PanOptions {
            reset_on_context_reload: false,
            ..PanOptions::default()
        });
        let _ = start(&mut c, 0.0, 0.0);
        c.on_drag(Vec2::new(30.0, 0.0), 0.1);
        c.update(0.05);
        let position = c.position();

        assert!(!c.on_context_reset());
        assert_eq!(c.position(), position);
        assert!(c.is_dragging());
    }

    #[test]
    fn zero_height_viewport_ignores_motion() {
        let mut c = controller(PanOptions::default());
        c.resize(800, 0);
        let _ = start(&mut c, 0.0, 0.0);
        c.on_drag(Vec2::new(100.0, 100.0), 0.1);
        assert_eq!(c.drag_offset(), Vec2::ZERO);
    }
}
