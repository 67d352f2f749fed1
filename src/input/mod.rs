//! Input handling and tool state machine.
//!
//! This module translates pointer events and control changes into marks for
//! the raster surface. It maintains the current tool, the drag state and the
//! style parameters (color, brush width, font size, text input).

pub mod events;
pub mod state;
pub mod tool;

// Re-export commonly used types at module level
pub use events::PointerEvent;
pub use state::{DrawingState, InputState};
pub use tool::{Cursor, Tool};
