//! Camera system: the orbital target camera, the pointer-gesture
//! controller that drives it, and the host view abstraction.

/// Pointer-gesture state machine driving the camera.
pub mod controller;
/// Orbital target camera and its math.
pub mod core;
/// Host view abstraction: viewport metrics, hit-testing, capture.
pub mod view;

pub use controller::{Gesture, PointerCameraController};
pub use core::TargetCamera;
pub use view::{HeadlessView, SceneView};
