//! Orbital target camera and its math.

use glam::{Quat, Vec2, Vec3};

/// Orbital camera described by heading/attitude angles around a target
/// point.
///
/// The eye position is derived: with zero heading and attitude the camera
/// sits on the +Z axis at `distance` from `target_position`, looking down
/// -Z. Positive heading orbits around the world +Y axis; negative
/// attitude raises the camera above the target. Angles are degrees.
///
/// `view_width` is the world-space width of the view plane for hosts
/// driving an orthographic projection; zoom operations scale it together
/// with `distance` so both projection styles stay in sync.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetCamera {
    /// Rotation around the world up axis, in degrees.
    pub heading: f32,
    /// Elevation angle in degrees; negative looks down from above.
    pub attitude: f32,
    /// Distance from the eye to the target position.
    pub distance: f32,
    /// World-space width of the view plane (orthographic hosts).
    pub view_width: f32,
    /// Vertical field of view in degrees (perspective hosts).
    pub field_of_view: f32,
    /// Point the camera looks at and orbits by default.
    pub target_position: Vec3,
    /// Optional pivot the camera rotates around instead of the target.
    pub rotation_center: Option<Vec3>,
}

impl Default for TargetCamera {
    fn default() -> Self {
        Self {
            heading: 0.0,
            attitude: -30.0,
            distance: 150.0,
            view_width: 100.0,
            field_of_view: 45.0,
            target_position: Vec3::ZERO,
            rotation_center: None,
        }
    }
}

impl TargetCamera {
    /// Orientation rotating the reference frame (+Z toward the eye) into
    /// the camera's frame.
    #[must_use]
    pub fn orientation(&self) -> Quat {
        Quat::from_rotation_y(self.heading.to_radians())
            * Quat::from_rotation_x(self.attitude.to_radians())
    }

    /// Derived eye position in world space.
    #[must_use]
    pub fn eye_position(&self) -> Vec3 {
        self.target_position + self.orientation() * Vec3::new(0.0, 0.0, self.distance)
    }

    /// Unit vector from the eye toward the target.
    #[must_use]
    pub fn view_direction(&self) -> Vec3 {
        -(self.orientation() * Vec3::Z)
    }

    /// Camera-space up direction in world space.
    #[must_use]
    pub fn up_direction(&self) -> Vec3 {
        self.orientation() * Vec3::Y
    }

    /// Change heading and attitude, orbiting the eye around the target.
    pub fn rotate(&mut self, heading_change: f32, attitude_change: f32) {
        self.heading += heading_change;
        self.attitude += attitude_change;
    }

    /// Change heading and attitude while pivoting around an arbitrary
    /// world point instead of the target.
    ///
    /// The target position is swung around `center` by the same rotation
    /// the angle change applies to the camera frame, which keeps the eye
    /// on a fixed-radius orbit around `center`.
    pub fn rotate_around(
        &mut self,
        center: Vec3,
        heading_change: f32,
        attitude_change: f32,
    ) {
        let before = self.orientation();
        self.heading += heading_change;
        self.attitude += attitude_change;
        let rotation = self.orientation() * before.inverse();
        self.target_position =
            center + rotation * (self.target_position - center);
    }

    /// Wrap heading into [-180, 180) without changing the orientation.
    pub fn normalize_heading(&mut self) {
        self.heading = (self.heading + 180.0).rem_euclid(360.0) - 180.0;
    }

    /// World units covered by one vertical pixel at target depth, for a
    /// viewport of the given pixel height.
    #[must_use]
    pub fn world_units_per_pixel(&self, viewport_height: f32) -> f32 {
        if viewport_height <= 0.0 {
            return 0.0;
        }
        let half_fov = (self.field_of_view * 0.5).to_radians();
        2.0 * self.distance * half_fov.tan() / viewport_height
    }

    /// Pan the target in the view plane so the scene follows a pointer
    /// drag of `delta` pixels in a viewport of `viewport` pixels.
    pub fn pan_by_pixels(&mut self, delta: Vec2, viewport: Vec2) {
        let units = self.world_units_per_pixel(viewport.y);
        let right = self.orientation() * Vec3::X;
        let up = self.orientation() * Vec3::Y;
        self.target_position +=
            right * (-delta.x * units) + up * (delta.y * units);
    }

    /// Scale distance (and view width) by `scale`, keeping `anchor`
    /// fixed in the view by shifting the target — and the rotation
    /// center, when set — toward or away from it proportionally.
    ///
    /// The new distance clamps to `max_distance` unless that is NaN.
    pub fn zoom_toward(&mut self, anchor: Vec3, scale: f32, max_distance: f32) {
        if self.distance <= 0.0 || scale <= 0.0 {
            return;
        }
        let mut new_distance = self.distance * scale;
        if !max_distance.is_nan() {
            new_distance = new_distance.min(max_distance);
        }
        let ratio = new_distance / self.distance;
        self.target_position =
            anchor + (self.target_position - anchor) * ratio;
        if let Some(center) = self.rotation_center {
            self.rotation_center = Some(anchor + (center - anchor) * ratio);
        }
        self.view_width *= ratio;
        self.distance = new_distance;
    }
}
