//! Input handling: condition masks, platform-agnostic pointer events,
//! and the optional winit event adapter.

/// Button and modifier-key condition masks.
pub mod conditions;
/// Platform-agnostic pointer events.
pub mod event;
/// Adapter translating winit window events.
#[cfg(feature = "winit")]
pub mod winit;

pub use conditions::PointerConditions;
pub use event::PointerEvent;
#[cfg(feature = "winit")]
pub use winit::WinitPointerAdapter;
