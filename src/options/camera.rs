use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Orthographic projection and start-up placement.
pub struct CameraOptions {
    /// Half the visible height in world units.
    #[schemars(title = "Ortho Size", range(min = 0.5, max = 50.0), extend("step" = 0.5))]
    pub ortho_half_height: f32,
    /// Camera position at start-up. Becomes the default pan anchor.
    #[schemars(skip)]
    pub start_position: [f32; 3],
    /// Initial viewport width in physical pixels.
    #[schemars(skip)]
    pub viewport_width: u32,
    /// Initial viewport height in physical pixels.
    #[schemars(skip)]
    pub viewport_height: u32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            ortho_half_height: 5.0,
            start_position: [0.0, 0.0, -10.0],
            viewport_width: 1920,
            viewport_height: 1080,
        }
    }
}
