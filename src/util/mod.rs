//! Shared utilities.

/// Frame delta clock with a smoothed FPS readout.
pub mod frame_timing;
