//! Pointer event types consumed by the tool controller.

/// A pointer event on the surface, in surface pixel coordinates.
///
/// Backends map their native events to these values; the pad only ever sees a
/// single pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    /// Primary button pressed at (x, y)
    Down { x: i32, y: i32 },
    /// Pointer moved to (x, y)
    Move { x: i32, y: i32 },
    /// Primary button released
    Up,
    /// Pointer left the surface
    Leave,
}
