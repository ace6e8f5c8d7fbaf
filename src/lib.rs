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
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Camera math compares against exact defaults in a few places
#![allow(clippy::float_cmp)]

//! Platform-neutral pointer-gesture camera controller for 3D viewers.
//!
//! `pivotcam` translates raw pointer events (button down/up, move, wheel)
//! plus modifier-key state into orbital camera operations — rotate, pan,
//! and zoom — on a [`TargetCamera`], subject to configurable
//! button+modifier trigger conditions.
//!
//! The crate owns no window and no renderer. Hosts feed it
//! [`PointerEvent`] values (hand-built, or translated from winit via the
//! `winit` feature) and provide scene access through the [`SceneView`]
//! trait: viewport size, an optional hit-test query used to anchor
//! rotation and zoom at the 3D point under the pointer, and optional
//! pointer-capture hooks.
//!
//! # Key entry points
//!
//! - [`camera::PointerCameraController`] - the gesture state machine
//! - [`camera::TargetCamera`] - heading/attitude/distance orbital camera
//! - [`options::ControllerOptions`] - trigger conditions, speeds, and
//!   thresholds (TOML presets, JSON-schema generation)
//!
//! # Example
//!
//! ```
//! use glam::Vec2;
//! use pivotcam::camera::{HeadlessView, PointerCameraController, TargetCamera};
//! use pivotcam::input::{PointerConditions, PointerEvent};
//!
//! let mut controller = PointerCameraController::new();
//! let mut camera = TargetCamera::default();
//! let mut view = HeadlessView::new(Vec2::new(1280.0, 800.0));
//!
//! // Left-drag rotates by default.
//! let down = PointerEvent::Pressed {
//!     position: Vec2::new(100.0, 100.0),
//!     conditions: PointerConditions::LEFT_BUTTON,
//! };
//! assert!(controller.process_event(&mut camera, &mut view, &down));
//! ```

pub mod camera;
pub mod error;
pub mod input;
pub mod options;

pub use camera::{PointerCameraController, SceneView, TargetCamera};
pub use error::PivotcamError;
pub use input::{PointerConditions, PointerEvent};
pub use options::{ControllerOptions, ZoomMode};
