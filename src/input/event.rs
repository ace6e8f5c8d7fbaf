//! Platform-agnostic pointer events.
//!
//! These are fed into a
//! [`PointerCameraController`](crate::camera::PointerCameraController),
//! either built by hand or translated from native window events (see the
//! `winit` feature).
//!
//! # Example
//!
//! ```ignore
//! let consumed = controller.process_event(
//!     &mut camera,
//!     &mut view,
//!     &PointerEvent::Moved { position, conditions },
//! );
//! ```

use glam::Vec2;

use super::conditions::PointerConditions;

/// A raw pointer event with the button/modifier state active at the time
/// it fired.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// A pointer button went down.
    Pressed {
        /// Pointer position in physical pixels.
        position: Vec2,
        /// Buttons and modifiers active after the press.
        conditions: PointerConditions,
    },
    /// The pointer moved.
    Moved {
        /// Pointer position in physical pixels.
        position: Vec2,
        /// Buttons and modifiers currently active.
        conditions: PointerConditions,
    },
    /// A pointer button went up.
    Released {
        /// Pointer position in physical pixels.
        position: Vec2,
        /// Buttons and modifiers active after the release.
        conditions: PointerConditions,
    },
    /// Scroll wheel turned (positive = zoom out, negative = zoom in).
    Wheel {
        /// Pointer position in physical pixels.
        position: Vec2,
        /// Scroll amount in wheel ticks.
        delta: f32,
    },
}

impl PointerEvent {
    /// Pointer position carried by the event.
    #[must_use]
    pub const fn position(&self) -> Vec2 {
        match self {
            Self::Pressed { position, .. }
            | Self::Moved { position, .. }
            | Self::Released { position, .. }
            | Self::Wheel { position, .. } => *position,
        }
    }
}
