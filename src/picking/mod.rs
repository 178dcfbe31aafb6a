//! Hit tests that gate whether a pointer-down may start a camera drag.
//!
//! UI surfaces take priority over world objects, and world objects take
//! priority over panning. Both oracles are injected as traits so hosts can
//! plug in their own UI tree or physics world, and tests can use closures.

mod colliders;
mod ui_layer;

use glam::Vec2;

pub use colliders::{Collider, ColliderSet};
pub use ui_layer::{ScreenRect, UiLayer};

/// Answers whether an interactive UI surface occludes a screen point.
pub trait UiHitTest {
    /// `true` if any UI element is under `screen` (pixels, bottom-left
    /// origin).
    fn any_ui_under_point(&self, screen: Vec2) -> bool;
}

/// Answers whether an interactive 2D object occupies a world point.
pub trait WorldHitTest {
    /// `true` if any object contains `world`.
    fn any_object_at_world_point(&self, world: Vec2) -> bool;
}

impl<F: Fn(Vec2) -> bool> UiHitTest for F {
    fn any_ui_under_point(&self, screen: Vec2) -> bool {
        self(screen)
    }
}

impl<F: Fn(Vec2) -> bool> WorldHitTest for F {
    fn any_object_at_world_point(&self, world: Vec2) -> bool {
        self(world)
    }
}

/// Oracle that never reports a hit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoHits;

impl UiHitTest for NoHits {
    fn any_ui_under_point(&self, _screen: Vec2) -> bool {
        false
    }
}

impl WorldHitTest for NoHits {
    fn any_object_at_world_point(&self, _world: Vec2) -> bool {
        false
    }
}

/// The two oracles borrowed for the duration of one dispatch.
#[derive(Clone, Copy)]
pub struct HitTesters<'a> {
    /// UI occlusion oracle.
    pub ui: &'a dyn UiHitTest,
    /// World-object oracle.
    pub world: &'a dyn WorldHitTest,
}

impl<'a> HitTesters<'a> {
    /// Bundle a UI oracle and a world oracle.
    #[must_use]
    pub fn new(ui: &'a dyn UiHitTest, world: &'a dyn WorldHitTest) -> Self {
        Self { ui, world }
    }
}

impl HitTesters<'static> {
    /// Testers that never block a drag.
    #[must_use]
    pub fn none() -> Self {
        Self {
            ui: &NoHits,
            world: &NoHits,
        }
    }
}

/// Outcome of a drag-start attempt. Exactly one per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragGate {
    /// A UI element was under the pointer.
    ConsumedByUi,
    /// An interactive world object was under the pointer.
    ConsumedByObject,
    /// Nothing blocked the pointer; the camera drag started.
    Started,
}

impl DragGate {
    /// Whether the drag started.
    #[must_use]
    pub fn started(self) -> bool {
        matches!(self, Self::Started)
    }
}
