use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Fixed scale tying `drag_velocity` to a comfortable screen-relative speed.
pub const DRAG_SCALE: f32 = 50.0;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Pan", inline)]
#[serde(default)]
/// Drag and smoothing tunables for the pan controller.
pub struct PanOptions {
    /// Pan with the pointer instead of against it.
    #[schemars(title = "Invert Direction")]
    pub invert: bool,
    /// Drag sensitivity multiplier.
    #[schemars(title = "Drag Velocity", range(min = 10.0, max = 100.0), extend("step" = 1.0))]
    pub drag_velocity: f32,
    /// Keep easing toward the last drag target after release.
    #[schemars(title = "Inertia")]
    pub inertia: bool,
    /// Exponential approach rate; higher converges faster.
    #[schemars(title = "Smoothness", range(min = 3.0, max = 30.0), extend("step" = 0.5))]
    pub smoothness: f32,
    /// Snap back to the start-up position when the scene reloads.
    #[schemars(title = "Reset On Context Reload")]
    pub reset_on_context_reload: bool,
}

impl Default for PanOptions {
    fn default() -> Self {
        Self {
            invert: false,
            drag_velocity: 50.0,
            inertia: false,
            smoothness: 10.0,
            reset_on_context_reload: true,
        }
    }
}

impl PanOptions {
    /// Signed world-offset gain applied to a viewport-normalized pointer
    /// delta, before the frame delta is factored in.
    #[must_use]
    pub fn drag_gain(&self) -> f32 {
        let sign = if self.invert { -1.0 } else { 1.0 };
        DRAG_SCALE * self.drag_velocity * sign
    }
}
