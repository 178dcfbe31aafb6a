//! Camera system for 2D scene viewing.
//!
//! Provides an orthographic 2D camera and the drag-to-pan controller that
//! owns its position.

/// Drag/inertia state machine that owns the camera position.
pub mod controller;
/// Core camera struct, projection and GPU uniform types.
pub mod core;
