// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Drag-to-pan camera controller for 2D scene viewers.
//!
//! The user presses and drags a pointer, the view pans, is clamped to a
//! rectangular bound, optionally keeps easing after release, and snaps back
//! to its start-up position when the scene reloads.
//!
//! # Key entry points
//!
//! - [`engine::PanEngine`] - owns the controller and its event subscription
//! - [`camera::controller::CameraDragController`] - the drag/inertia state
//!   machine
//! - [`picking`] - the UI and world-object hit tests that gate drag start
//! - [`input`] - drag events, the pointer processor and the event source
//! - [`options::Options`] - designer tunables with TOML preset support
//!
//! # Frame model
//!
//! Input arrives as discrete events on the same thread as the per-frame
//! tick. [`engine::PanEngine::frame`] dispatches every pending event before
//! running the smoothing step, so the camera always eases toward the final
//! drag offset of that frame.

pub mod camera;
pub mod engine;
pub mod error;
pub mod input;
pub mod options;
pub mod picking;
pub mod util;
