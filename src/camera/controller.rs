//! Pointer-gesture camera controller.
//!
//! The controller is a small state machine: a pointer press whose
//! button/modifier combination exactly matches one of the configured
//! condition masks arms a gesture (rotate, move, or quick-zoom), pointer
//! movement past the move threshold drives the camera, and release (or
//! losing a required button/modifier) returns it to idle. The wheel
//! zooms independently of the state machine.
//!
//! The controller owns neither the camera nor the view; both are passed
//! into every call, so a gesture only ever mutates state the host has
//! handed over for that event.

use glam::{Vec2, Vec3};

use super::core::TargetCamera;
use super::view::SceneView;
use crate::input::{PointerConditions, PointerEvent};
use crate::options::{ControllerOptions, ZoomMode};

/// Which drag gesture is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    /// Heading/attitude rotation.
    Rotate,
    /// View-plane pan.
    Move,
    /// Button-driven zoom (touch/trackpad parity for the wheel).
    QuickZoom,
}

/// Transient drag state between pointer down and up.
#[derive(Debug, Clone, Copy, PartialEq)]
enum DragState {
    Idle,
    Dragging {
        gesture: Gesture,
        /// Mask that armed the gesture, frozen at press time so option
        /// changes take effect on the next gesture only.
        mask: PointerConditions,
        start: Vec2,
        last: Vec2,
        /// Set once movement from `start` reaches the move threshold;
        /// no camera mutation happens before that.
        exceeded_threshold: bool,
        /// Rotate pivot or quick-zoom anchor, resolved once when the
        /// threshold is crossed.
        pivot: Option<Vec3>,
    },
}

/// Translates pointer events into rotate/move/zoom operations on a
/// [`TargetCamera`].
///
/// All behavior is configured through the public [`options`](Self::options)
/// field; changes apply from the next gesture. See the crate docs for a
/// usage example.
#[derive(Debug)]
pub struct PointerCameraController {
    /// Trigger conditions, speeds, and thresholds.
    pub options: ControllerOptions,
    drag: DragState,
}

impl Default for PointerCameraController {
    fn default() -> Self {
        Self::new()
    }
}

impl PointerCameraController {
    /// Create a controller with default options (left-drag rotates,
    /// ctrl+left-drag moves, left+right-drag quick-zooms).
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(ControllerOptions::default())
    }

    /// Create a controller with the given options.
    #[must_use]
    pub const fn with_options(options: ControllerOptions) -> Self {
        Self {
            options,
            drag: DragState::Idle,
        }
    }

    /// The gesture currently in progress, if any.
    #[must_use]
    pub const fn active_gesture(&self) -> Option<Gesture> {
        match self.drag {
            DragState::Idle => None,
            DragState::Dragging { gesture, .. } => Some(gesture),
        }
    }

    /// Dispatch a pointer event to the matching operation. Returns
    /// whether the event was consumed by the camera.
    pub fn process_event<V: SceneView + ?Sized>(
        &mut self,
        camera: &mut TargetCamera,
        view: &mut V,
        event: &PointerEvent,
    ) -> bool {
        match *event {
            PointerEvent::Pressed {
                position,
                conditions,
            } => self.pointer_pressed(view, position, conditions),
            PointerEvent::Moved {
                position,
                conditions,
            } => self.pointer_moved(camera, view, position, conditions),
            PointerEvent::Released { conditions, .. } => {
                self.pointer_released(view, conditions)
            }
            PointerEvent::Wheel { position, delta } => {
                self.pointer_wheel(camera, view, position, delta)
            }
        }
    }

    /// A pointer button went down: arm the first gesture whose condition
    /// mask exactly matches the active buttons and modifiers.
    ///
    /// Matching priority is fixed: rotate, then move, then quick-zoom.
    /// Returns whether a gesture was armed. The camera is not touched
    /// until movement exceeds the move threshold.
    pub fn pointer_pressed<V: SceneView + ?Sized>(
        &mut self,
        view: &mut V,
        position: Vec2,
        conditions: PointerConditions,
    ) -> bool {
        if self.drag != DragState::Idle {
            self.end_gesture(view);
        }

        let candidates = [
            (Gesture::Rotate, self.options.rotate_conditions),
            (Gesture::Move, self.options.move_conditions),
            (Gesture::QuickZoom, self.options.quick_zoom_conditions),
        ];
        let Some((gesture, mask)) = candidates
            .into_iter()
            .find(|(_, mask)| mask.matches(conditions))
        else {
            return false;
        };

        log::trace!("{gesture:?} gesture armed at {position} ({mask})");
        view.capture_pointer();
        self.drag = DragState::Dragging {
            gesture,
            mask,
            start: position,
            last: position,
            exceeded_threshold: false,
            pivot: None,
        };
        true
    }

    /// The pointer moved: drive the active gesture, if any.
    ///
    /// The gesture ends (unconsumed) when a required button or modifier
    /// is no longer held. Movement below the move threshold is consumed
    /// but leaves the camera untouched; the first move at or past it
    /// applies the full delta from the down position.
    pub fn pointer_moved<V: SceneView + ?Sized>(
        &mut self,
        camera: &mut TargetCamera,
        view: &mut V,
        position: Vec2,
        conditions: PointerConditions,
    ) -> bool {
        let DragState::Dragging {
            gesture,
            mask,
            start,
            last,
            exceeded_threshold,
            pivot,
        } = &mut self.drag
        else {
            return false;
        };

        if !mask.matches(conditions) {
            log::trace!("{gesture:?} gesture lost its conditions, ending");
            self.end_gesture(view);
            return false;
        }

        if !*exceeded_threshold {
            if position.distance(*start) < self.options.mouse_move_threshold {
                return true;
            }
            *exceeded_threshold = true;
            // The first applied delta spans from the down position.
            *last = *start;
        }

        let delta = position - *last;
        *last = position;
        let gesture = *gesture;
        let start = *start;

        match gesture {
            Gesture::Rotate => {
                if self.options.rotate_around_pointer_position
                    && pivot.is_none()
                {
                    *pivot = Some(rotation_pivot(camera, view, start));
                }
                let rotate_pivot = *pivot;
                self.apply_rotation(camera, rotate_pivot, delta);
            }
            Gesture::Move => {
                camera.pan_by_pixels(delta, view.viewport_size());
            }
            Gesture::QuickZoom => {
                if pivot.is_none() {
                    *pivot = Some(resolve_zoom_anchor(
                        self.options.zoom_mode,
                        camera,
                        view,
                        start,
                    ));
                }
                let anchor = pivot.unwrap_or(camera.target_position);
                let scale = self
                    .options
                    .wheel_distance_change_factor
                    .powf(delta.y * self.options.quick_zoom_speed);
                camera.zoom_toward(
                    anchor,
                    scale,
                    self.options.max_camera_distance,
                );
            }
        }
        true
    }

    /// A pointer button went up: end any active gesture and release
    /// capture.
    ///
    /// Returns `true` only if the gesture moved past the threshold, so
    /// hosts can treat an unconsumed press/release pair as an ordinary
    /// click without duplicate event handling.
    pub fn pointer_released<V: SceneView + ?Sized>(
        &mut self,
        view: &mut V,
        _conditions: PointerConditions,
    ) -> bool {
        let DragState::Dragging {
            gesture,
            exceeded_threshold,
            ..
        } = self.drag
        else {
            return false;
        };
        log::trace!("{gesture:?} gesture ended (dragged: {exceeded_threshold})");
        self.end_gesture(view);
        exceeded_threshold
    }

    /// The wheel turned: zoom toward the anchor selected by
    /// [`ZoomMode`]. Positive `delta` zooms out (distance multiplied by
    /// the wheel factor per tick), negative zooms in.
    pub fn pointer_wheel<V: SceneView + ?Sized>(
        &mut self,
        camera: &mut TargetCamera,
        view: &mut V,
        position: Vec2,
        delta: f32,
    ) -> bool {
        if !self.options.is_pointer_wheel_zoom_enabled || delta == 0.0 {
            return false;
        }
        let anchor =
            resolve_zoom_anchor(self.options.zoom_mode, camera, view, position);
        let scale = self.options.wheel_distance_change_factor.powf(delta);
        camera.zoom_toward(anchor, scale, self.options.max_camera_distance);
        true
    }

    fn apply_rotation(
        &self,
        camera: &mut TargetCamera,
        pivot: Option<Vec3>,
        delta: Vec2,
    ) {
        let x_sign = if self.options.is_x_axis_inverted { -1.0 } else { 1.0 };
        let y_sign = if self.options.is_y_axis_inverted { -1.0 } else { 1.0 };
        let heading_change = delta.x * self.options.rotation_speed * x_sign;
        let attitude_change = delta.y * self.options.rotation_speed * y_sign;
        match pivot {
            Some(center) => {
                camera.rotate_around(center, heading_change, attitude_change);
            }
            None => camera.rotate(heading_change, attitude_change),
        }
    }

    fn end_gesture<V: SceneView + ?Sized>(&mut self, view: &mut V) {
        if self.drag != DragState::Idle {
            view.release_pointer();
            self.drag = DragState::Idle;
        }
    }
}

/// Pivot for rotate-around-pointer: the scene point under the gesture's
/// down position, then the configured rotation center, then the target.
fn rotation_pivot<V: SceneView + ?Sized>(
    camera: &TargetCamera,
    view: &V,
    position: Vec2,
) -> Vec3 {
    view.closest_hit(position)
        .or(camera.rotation_center)
        .unwrap_or(camera.target_position)
}

/// 3D anchor a zoom scales toward, per [`ZoomMode`]. Hit-test misses
/// fall back to the view center (the camera target).
fn resolve_zoom_anchor<V: SceneView + ?Sized>(
    mode: ZoomMode,
    camera: &TargetCamera,
    view: &V,
    position: Vec2,
) -> Vec3 {
    match mode {
        ZoomMode::ViewCenter => camera.target_position,
        ZoomMode::CameraRotationCenter => camera
            .rotation_center
            .unwrap_or(camera.target_position),
        ZoomMode::PointerPosition => {
            view.closest_hit(position).unwrap_or_else(|| {
                log::trace!(
                    "no scene hit at {position}, zooming toward view center"
                );
                camera.target_position
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::view::HeadlessView;

    fn setup() -> (PointerCameraController, TargetCamera, HeadlessView) {
        (
            PointerCameraController::new(),
            TargetCamera::default(),
            HeadlessView::new(Vec2::new(1280.0, 800.0)),
        )
    }

    fn press(
        c: &mut PointerCameraController,
        v: &mut HeadlessView,
        pos: (f32, f32),
        conditions: PointerConditions,
    ) -> bool {
        c.pointer_pressed(v, Vec2::new(pos.0, pos.1), conditions)
    }

    fn drag_to(
        c: &mut PointerCameraController,
        cam: &mut TargetCamera,
        v: &mut HeadlessView,
        pos: (f32, f32),
        conditions: PointerConditions,
    ) -> bool {
        c.pointer_moved(cam, v, Vec2::new(pos.0, pos.1), conditions)
    }

    const LEFT: PointerConditions = PointerConditions::LEFT_BUTTON;

    #[test]
    fn press_triggers_only_on_exact_mask_match() {
        let (mut c, _cam, mut v) = setup();
        assert!(press(&mut c, &mut v, (10.0, 10.0), LEFT));
        c.end_gesture(&mut v);

        // Extra modifier breaks the exact match.
        assert!(!press(
            &mut c,
            &mut v,
            (10.0, 10.0),
            LEFT | PointerConditions::SHIFT
        ));
        // Wrong button entirely.
        assert!(!press(
            &mut c,
            &mut v,
            (10.0, 10.0),
            PointerConditions::MIDDLE_BUTTON
        ));
        // Left+control is the default move mask.
        assert!(press(
            &mut c,
            &mut v,
            (10.0, 10.0),
            LEFT | PointerConditions::CONTROL
        ));
        assert_eq!(c.active_gesture(), Some(Gesture::Move));
    }

    #[test]
    fn disabled_mask_never_triggers() {
        let (mut c, _cam, mut v) = setup();
        c.options.rotate_conditions =
            LEFT | PointerConditions::DISABLED;
        assert!(!press(&mut c, &mut v, (0.0, 0.0), LEFT));
        assert_eq!(c.active_gesture(), None);
    }

    #[test]
    fn priority_is_rotate_then_move_then_quick_zoom() {
        let (mut c, _cam, mut v) = setup();
        c.options.rotate_conditions = LEFT;
        c.options.move_conditions = LEFT;
        c.options.quick_zoom_conditions = LEFT;
        assert!(press(&mut c, &mut v, (0.0, 0.0), LEFT));
        assert_eq!(c.active_gesture(), Some(Gesture::Rotate));

        c.options.rotate_conditions = PointerConditions::DISABLED;
        let _ = c.pointer_released(&mut v, PointerConditions::NONE);
        assert!(press(&mut c, &mut v, (0.0, 0.0), LEFT));
        assert_eq!(c.active_gesture(), Some(Gesture::Move));
    }

    #[test]
    fn movement_below_threshold_never_touches_camera() {
        let (mut c, mut cam, mut v) = setup();
        c.options.mouse_move_threshold = 5.0;
        let before = cam;
        assert!(press(&mut c, &mut v, (100.0, 100.0), LEFT));
        // 4.9 px is strictly below the threshold.
        assert!(drag_to(&mut c, &mut cam, &mut v, (104.9, 100.0), LEFT));
        assert_eq!(cam, before);
        // Release without a drag: unconsumed, host may treat as a click.
        assert!(!c.pointer_released(&mut v, PointerConditions::NONE));
        assert_eq!(cam, before);
    }

    #[test]
    fn first_threshold_crossing_applies_delta_from_down_position() {
        let (mut c, mut cam, mut v) = setup();
        c.options.mouse_move_threshold = 3.0;
        let heading_before = cam.heading;
        assert!(press(&mut c, &mut v, (100.0, 100.0), LEFT));
        assert!(drag_to(&mut c, &mut cam, &mut v, (150.0, 100.0), LEFT));
        let expected = 50.0 * c.options.rotation_speed;
        assert!((cam.heading - heading_before - expected).abs() < 1e-4);
        assert_eq!(cam.attitude, TargetCamera::default().attitude);
    }

    #[test]
    fn released_gesture_stops_driving_the_camera() {
        let (mut c, mut cam, mut v) = setup();
        assert!(press(&mut c, &mut v, (100.0, 100.0), LEFT));
        assert!(drag_to(&mut c, &mut cam, &mut v, (150.0, 100.0), LEFT));
        // A real drag happened, so the release is consumed.
        assert!(c.pointer_released(&mut v, PointerConditions::NONE));
        let heading = cam.heading;
        assert!(!drag_to(
            &mut c,
            &mut cam,
            &mut v,
            (300.0, 300.0),
            PointerConditions::NONE
        ));
        assert_eq!(cam.heading, heading);
    }

    #[test]
    fn losing_required_conditions_ends_the_gesture() {
        let (mut c, mut cam, mut v) = setup();
        c.options.rotate_conditions = LEFT | PointerConditions::SHIFT;
        assert!(press(
            &mut c,
            &mut v,
            (0.0, 0.0),
            LEFT | PointerConditions::SHIFT
        ));
        // Shift released mid-drag: gesture ends, event unconsumed.
        assert!(!drag_to(&mut c, &mut cam, &mut v, (50.0, 0.0), LEFT));
        assert_eq!(c.active_gesture(), None);
        assert_eq!(v.release_count(), 1);
    }

    #[test]
    fn axis_inversion_flips_rotation_signs() {
        let (mut c, mut cam, mut v) = setup();
        c.options.mouse_move_threshold = 0.0;
        assert!(press(&mut c, &mut v, (0.0, 0.0), LEFT));
        assert!(drag_to(&mut c, &mut cam, &mut v, (40.0, 30.0), LEFT));
        let _ = c.pointer_released(&mut v, PointerConditions::NONE);
        let normal_heading = cam.heading - TargetCamera::default().heading;
        let normal_attitude = cam.attitude - TargetCamera::default().attitude;

        let mut inverted_cam = TargetCamera::default();
        c.options.is_x_axis_inverted = true;
        c.options.is_y_axis_inverted = true;
        assert!(press(&mut c, &mut v, (0.0, 0.0), LEFT));
        assert!(drag_to(&mut c, &mut inverted_cam, &mut v, (40.0, 30.0), LEFT));
        assert!(
            (inverted_cam.heading - TargetCamera::default().heading
                + normal_heading)
                .abs()
                < 1e-4
        );
        assert!(
            (inverted_cam.attitude - TargetCamera::default().attitude
                + normal_attitude)
                .abs()
                < 1e-4
        );
    }

    #[test]
    fn wheel_ticks_compound_multiplicatively() {
        let (mut c, mut cam, mut v) = setup();
        cam.distance = 100.0;
        let f = c.options.wheel_distance_change_factor;
        for _ in 0..4 {
            assert!(c.pointer_wheel(&mut cam, &mut v, Vec2::ZERO, 1.0));
        }
        assert!((cam.distance - 100.0 * f.powi(4)).abs() < 1e-3);
        for _ in 0..4 {
            assert!(c.pointer_wheel(&mut cam, &mut v, Vec2::ZERO, -1.0));
        }
        assert!((cam.distance - 100.0).abs() < 1e-3);
    }

    #[test]
    fn zoom_out_never_exceeds_max_camera_distance() {
        let (mut c, mut cam, mut v) = setup();
        cam.distance = 100.0;
        c.options.max_camera_distance = 140.0;
        for _ in 0..200 {
            let _ = c.pointer_wheel(&mut cam, &mut v, Vec2::ZERO, 1.0);
        }
        assert!(cam.distance <= 140.0);
    }

    #[test]
    fn wheel_zoom_can_be_disabled() {
        let (mut c, mut cam, mut v) = setup();
        c.options.is_pointer_wheel_zoom_enabled = false;
        let before = cam;
        assert!(!c.pointer_wheel(&mut cam, &mut v, Vec2::ZERO, 1.0));
        assert_eq!(cam, before);
    }

    #[test]
    fn pointer_position_zoom_pulls_target_toward_hit_point() {
        let (mut c, mut cam, _) = setup();
        let mut v = HeadlessView::new(Vec2::new(1280.0, 800.0))
            .with_hit_result(Vec3::new(10.0, 5.0, 0.0));
        c.options.zoom_mode = ZoomMode::PointerPosition;
        cam.distance = 100.0;
        cam.target_position = Vec3::ZERO;

        // One zoom-in tick.
        assert!(c.pointer_wheel(&mut cam, &mut v, Vec2::new(640.0, 400.0), -1.0));
        let ratio = 1.0 / c.options.wheel_distance_change_factor;
        assert!((cam.distance - 100.0 * ratio).abs() < 1e-3);
        let expected =
            Vec3::new(10.0, 5.0, 0.0) * (1.0 - ratio);
        assert!((cam.target_position - expected).length() < 1e-3);
    }

    #[test]
    fn pointer_position_zoom_falls_back_to_view_center_on_miss() {
        let (mut c, mut cam, mut v) = setup();
        c.options.zoom_mode = ZoomMode::PointerPosition;
        let target = cam.target_position;
        assert!(c.pointer_wheel(&mut cam, &mut v, Vec2::new(12.0, 34.0), -1.0));
        assert_eq!(cam.target_position, target);
        assert!(cam.distance < TargetCamera::default().distance);
    }

    #[test]
    fn rotation_center_zoom_uses_target_when_center_unset() {
        let (mut c, mut cam, mut v) = setup();
        c.options.zoom_mode = ZoomMode::CameraRotationCenter;
        let target = cam.target_position;
        assert!(c.pointer_wheel(&mut cam, &mut v, Vec2::ZERO, 1.0));
        assert_eq!(cam.target_position, target);
    }

    #[test]
    fn quick_zoom_drag_zooms_without_a_wheel() {
        let (mut c, mut cam, mut v) = setup();
        c.options.mouse_move_threshold = 0.0;
        cam.distance = 100.0;
        let combo = LEFT | PointerConditions::RIGHT_BUTTON;
        assert!(press(&mut c, &mut v, (200.0, 200.0), combo));
        assert_eq!(c.active_gesture(), Some(Gesture::QuickZoom));
        // Drag down 100 px: zoom out by factor^(100 * quick_zoom_speed).
        assert!(drag_to(&mut c, &mut cam, &mut v, (200.0, 300.0), combo));
        let expected = 100.0
            * c.options
                .wheel_distance_change_factor
                .powf(100.0 * c.options.quick_zoom_speed);
        assert!((cam.distance - expected).abs() < 1e-2);
        // Horizontal motion alone leaves distance unchanged.
        let distance = cam.distance;
        assert!(drag_to(&mut c, &mut cam, &mut v, (260.0, 300.0), combo));
        assert!((cam.distance - distance).abs() < 1e-4);
    }

    #[test]
    fn quick_zoom_respects_max_distance() {
        let (mut c, mut cam, mut v) = setup();
        c.options.mouse_move_threshold = 0.0;
        c.options.max_camera_distance = 120.0;
        cam.distance = 100.0;
        let combo = LEFT | PointerConditions::RIGHT_BUTTON;
        assert!(press(&mut c, &mut v, (0.0, 0.0), combo));
        assert!(drag_to(&mut c, &mut cam, &mut v, (0.0, 5000.0), combo));
        assert!(cam.distance <= 120.0);
    }

    #[test]
    fn move_gesture_pans_in_view_plane() {
        let (mut c, mut cam, mut v) = setup();
        cam.heading = 0.0;
        cam.attitude = 0.0;
        let combo = LEFT | PointerConditions::CONTROL;
        assert!(press(&mut c, &mut v, (100.0, 100.0), combo));
        assert!(drag_to(&mut c, &mut cam, &mut v, (180.0, 100.0), combo));
        assert!(cam.target_position.x < 0.0);
        assert_eq!(cam.target_position.z, 0.0);
    }

    #[test]
    fn rotate_around_pointer_pivots_on_hit_point() {
        let (mut c, mut cam, _) = setup();
        let pivot = Vec3::new(30.0, 0.0, -10.0);
        let mut v = HeadlessView::new(Vec2::new(1280.0, 800.0))
            .with_hit_result(pivot);
        c.options.rotate_around_pointer_position = true;
        c.options.mouse_move_threshold = 0.0;

        let radius_before = cam.eye_position().distance(pivot);
        assert!(press(&mut c, &mut v, (400.0, 300.0), LEFT));
        assert!(drag_to(&mut c, &mut cam, &mut v, (480.0, 330.0), LEFT));
        let radius_after = cam.eye_position().distance(pivot);
        assert!((radius_before - radius_after).abs() < 1e-2);
        // The target was swung around the pivot, not left in place.
        assert!(cam.target_position.distance(Vec3::ZERO) > 1e-3);
    }

    #[test]
    fn rotate_around_pointer_falls_back_to_target_without_hit() {
        let (mut c, mut cam, mut v) = setup();
        c.options.rotate_around_pointer_position = true;
        c.options.mouse_move_threshold = 0.0;
        assert!(press(&mut c, &mut v, (0.0, 0.0), LEFT));
        assert!(drag_to(&mut c, &mut cam, &mut v, (50.0, 0.0), LEFT));
        // Pivoting on the target is plain rotation: target stays put.
        assert_eq!(cam.target_position, Vec3::ZERO);
        assert!(cam.heading != 0.0);
    }

    #[test]
    fn capture_follows_gesture_lifetime() {
        let (mut c, mut cam, mut v) = setup();
        assert!(press(&mut c, &mut v, (0.0, 0.0), LEFT));
        assert!(v.is_captured());
        assert_eq!(v.capture_count(), 1);
        assert!(drag_to(&mut c, &mut cam, &mut v, (50.0, 0.0), LEFT));
        assert!(v.is_captured());
        let _ = c.pointer_released(&mut v, PointerConditions::NONE);
        assert!(!v.is_captured());
        assert_eq!(v.release_count(), 1);
    }

    #[test]
    fn only_one_gesture_active_at_a_time() {
        let (mut c, _cam, mut v) = setup();
        assert!(press(&mut c, &mut v, (0.0, 0.0), LEFT));
        // A second press re-arms rather than stacking gestures.
        assert!(press(
            &mut c,
            &mut v,
            (10.0, 0.0),
            LEFT | PointerConditions::CONTROL
        ));
        assert_eq!(c.active_gesture(), Some(Gesture::Move));
        assert_eq!(v.release_count(), 1);
        assert_eq!(v.capture_count(), 2);
    }

    #[test]
    fn events_are_dispatched_through_process_event() {
        let (mut c, mut cam, mut v) = setup();
        let down = PointerEvent::Pressed {
            position: Vec2::new(10.0, 10.0),
            conditions: LEFT,
        };
        let moved = PointerEvent::Moved {
            position: Vec2::new(60.0, 10.0),
            conditions: LEFT,
        };
        let up = PointerEvent::Released {
            position: Vec2::new(60.0, 10.0),
            conditions: PointerConditions::NONE,
        };
        assert!(c.process_event(&mut cam, &mut v, &down));
        assert!(c.process_event(&mut cam, &mut v, &moved));
        assert!(c.process_event(&mut cam, &mut v, &up));
        assert!(cam.heading != TargetCamera::default().heading);
    }
}
