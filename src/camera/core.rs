use glam::{Mat4, Vec2, Vec3};

use crate::options::CameraOptions;

/// Orthographic projection for a 2D camera.
///
/// Screen space is physical pixels with the origin at the bottom-left of the
/// viewport and y pointing up, matching the world's y axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrthographicProjection {
    /// Half the visible height in world units.
    pub half_height: f32,
    /// Viewport width in physical pixels.
    pub viewport_width: f32,
    /// Viewport height in physical pixels.
    pub viewport_height: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl OrthographicProjection {
    /// Viewport width / height. Falls back to 1.0 for a zero-height viewport.
    #[must_use]
    pub fn aspect(&self) -> f32 {
        if self.viewport_height > 0.0 {
            self.viewport_width / self.viewport_height
        } else {
            1.0
        }
    }

    /// World units covered by one screen pixel.
    #[must_use]
    pub fn world_per_pixel(&self) -> f32 {
        if self.viewport_height > 0.0 {
            2.0 * self.half_height / self.viewport_height
        } else {
            0.0
        }
    }
}

/// 2D camera: a world position plus an orthographic projection.
///
/// The renderer reads [`Camera2d::position`]; only the drag controller
/// writes it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera2d {
    /// Camera position in world space. Z is a fixed depth.
    pub position: Vec3,
    /// Projection parameters.
    pub projection: OrthographicProjection,
}

impl Camera2d {
    /// Build a camera from start-up options.
    #[must_use]
    pub fn from_options(options: &CameraOptions) -> Self {
        Self {
            position: Vec3::from_array(options.start_position),
            projection: OrthographicProjection {
                half_height: options.ortho_half_height,
                viewport_width: options.viewport_width as f32,
                viewport_height: options.viewport_height as f32,
                znear: 0.1,
                zfar: 1000.0,
            },
        }
    }

    /// Update the viewport size after a window resize.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.projection.viewport_width = width as f32;
        self.projection.viewport_height = height as f32;
    }

    /// Viewport height in physical pixels.
    #[must_use]
    pub fn viewport_height(&self) -> f32 {
        self.projection.viewport_height
    }

    /// Project a screen-space pixel position onto the world plane.
    #[must_use]
    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        let p = &self.projection;
        let center = Vec2::new(p.viewport_width, p.viewport_height) * 0.5;
        self.position.truncate() + (screen - center) * p.world_per_pixel()
    }

    /// Inverse of [`Self::screen_to_world`].
    #[must_use]
    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        let p = &self.projection;
        let center = Vec2::new(p.viewport_width, p.viewport_height) * 0.5;
        let scale = p.world_per_pixel();
        if scale == 0.0 {
            return center;
        }
        center + (world - self.position.truncate()) / scale
    }

    /// Build the combined view-projection matrix.
    #[must_use]
    pub fn build_matrix(&self) -> Mat4 {
        let p = &self.projection;
        let half_width = p.half_height * p.aspect();
        // Camera looks down -Z from its position.
        let eye = self.position;
        let view = Mat4::look_at_rh(eye, eye - Vec3::Z, Vec3::Y);
        let proj = Mat4::orthographic_rh(
            -half_width,
            half_width,
            -p.half_height,
            p.half_height,
            p.znear,
            p.zfar,
        );
        proj * view
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform buffer holding the view-projection matrix and camera position.
pub struct CameraUniform {
    /// Combined view-projection matrix.
    pub view_proj: [[f32; 4]; 4],
    /// Camera world-space position.
    pub position: [f32; 3],
    /// Viewport aspect ratio.
    pub aspect: f32,
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Create a new camera uniform with identity view-projection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            position: [0.0; 3],
            aspect: 1.0,
        }
    }

    /// Update uniform fields from the given camera's current state.
    pub fn update_view_proj(&mut self, camera: &Camera2d) {
        self.view_proj = camera.build_matrix().to_cols_array_2d();
        self.position = camera.position.to_array();
        self.aspect = camera.projection.aspect();
    }
}
