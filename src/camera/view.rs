//! Host view abstraction: viewport metrics, hit-testing, pointer capture.

use glam::{Vec2, Vec3};

/// Scene access the controller needs from its host view.
///
/// The controller owns neither a window nor a scene; the host hands it
/// one of these alongside the camera on every call. Only
/// [`viewport_size`](Self::viewport_size) is required — hit-testing and
/// pointer capture are optional capabilities that default to "not
/// supported", and every controller feature that relies on them degrades
/// gracefully when they are absent.
pub trait SceneView {
    /// Viewport size in physical pixels.
    fn viewport_size(&self) -> Vec2;

    /// Closest 3D scene point along the ray under the given screen
    /// position, if any. Anchors rotate-around-pointer and
    /// zoom-toward-pointer. Default: no scene, no hit.
    fn closest_hit(&self, position: Vec2) -> Option<Vec3> {
        let _ = position;
        None
    }

    /// Acquire pointer capture so move events keep arriving outside the
    /// view bounds. Called at gesture start. Default: no-op.
    fn capture_pointer(&mut self) {}

    /// Release pointer capture. Called at gesture end. Default: no-op.
    fn release_pointer(&mut self) {}
}

/// Minimal [`SceneView`] for hosts without hit-testing or capture, and
/// for driving the controller in tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeadlessView {
    /// Viewport size in physical pixels.
    pub size: Vec2,
    /// Fixed hit-test answer returned for every position.
    pub hit_result: Option<Vec3>,
    captured: bool,
    capture_count: u32,
    release_count: u32,
}

impl HeadlessView {
    /// Create a view of the given pixel size with no scene to hit.
    #[must_use]
    pub const fn new(size: Vec2) -> Self {
        Self {
            size,
            hit_result: None,
            captured: false,
            capture_count: 0,
            release_count: 0,
        }
    }

    /// Same view, but every hit-test returns `point`.
    #[must_use]
    pub const fn with_hit_result(mut self, point: Vec3) -> Self {
        self.hit_result = Some(point);
        self
    }

    /// Whether pointer capture is currently held.
    #[must_use]
    pub const fn is_captured(&self) -> bool {
        self.captured
    }

    /// How many times capture was acquired.
    #[must_use]
    pub const fn capture_count(&self) -> u32 {
        self.capture_count
    }

    /// How many times capture was released.
    #[must_use]
    pub const fn release_count(&self) -> u32 {
        self.release_count
    }
}

impl SceneView for HeadlessView {
    fn viewport_size(&self) -> Vec2 {
        self.size
    }

    fn closest_hit(&self, _position: Vec2) -> Option<Vec3> {
        self.hit_result
    }

    fn capture_pointer(&mut self) {
        self.captured = true;
        self.capture_count += 1;
    }

    fn release_pointer(&mut self) {
        self.captured = false;
        self.release_count += 1;
    }
}
