//! Translates winit window events into [`PointerEvent`]s.
//!
//! winit delivers button changes, cursor motion, and modifier changes as
//! separate events without the combined state the controller matches
//! against, so the adapter tracks pressed buttons and active modifiers
//! across events.

use ::winit::event::{ElementState, MouseScrollDelta, WindowEvent};
use glam::Vec2;

use super::conditions::PointerConditions;
use super::event::PointerEvent;

/// Per-pixel scroll scaled down to roughly one tick per notch.
const PIXEL_SCROLL_SCALE: f32 = 0.01;

/// Accumulates winit button/modifier state and emits [`PointerEvent`]s.
///
/// One adapter per window. Feed every [`WindowEvent`] through
/// [`translate`](Self::translate) and forward the returned events to the
/// controller.
#[derive(Debug, Default)]
pub struct WinitPointerAdapter {
    conditions: PointerConditions,
    position: Vec2,
}

impl WinitPointerAdapter {
    /// Create an adapter with no buttons or modifiers active.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Buttons and modifiers currently tracked as active.
    #[must_use]
    pub const fn conditions(&self) -> PointerConditions {
        self.conditions
    }

    /// Last known cursor position in physical pixels.
    #[must_use]
    pub const fn position(&self) -> Vec2 {
        self.position
    }

    /// Translate a winit event into a pointer event, updating tracked
    /// state. Returns `None` for events the controller has no use for
    /// (including bare modifier changes).
    pub fn translate(&mut self, event: &WindowEvent) -> Option<PointerEvent> {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.position =
                    Vec2::new(position.x as f32, position.y as f32);
                Some(PointerEvent::Moved {
                    position: self.position,
                    conditions: self.conditions,
                })
            }
            WindowEvent::MouseInput { state, button, .. } => {
                let flag = match button {
                    ::winit::event::MouseButton::Right => {
                        PointerConditions::RIGHT_BUTTON
                    }
                    ::winit::event::MouseButton::Middle => {
                        PointerConditions::MIDDLE_BUTTON
                    }
                    _ => PointerConditions::LEFT_BUTTON,
                };
                let pressed = *state == ElementState::Pressed;
                self.conditions = self.conditions.with(flag, pressed);
                Some(if pressed {
                    PointerEvent::Pressed {
                        position: self.position,
                        conditions: self.conditions,
                    }
                } else {
                    PointerEvent::Released {
                        position: self.position,
                        conditions: self.conditions,
                    }
                })
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let ticks = match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    MouseScrollDelta::PixelDelta(pos) => {
                        pos.y as f32 * PIXEL_SCROLL_SCALE
                    }
                };
                // Wheel up (positive in winit) zooms in, which the
                // controller expects as a negative delta.
                Some(PointerEvent::Wheel {
                    position: self.position,
                    delta: -ticks,
                })
            }
            WindowEvent::ModifiersChanged(modifiers) => {
                let state = modifiers.state();
                self.conditions = self
                    .conditions
                    .with(PointerConditions::SHIFT, state.shift_key())
                    .with(PointerConditions::CONTROL, state.control_key())
                    .with(PointerConditions::ALT, state.alt_key());
                None
            }
            _ => None,
        }
    }
}
