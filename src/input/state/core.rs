//! Drag state machine and tool controller state.

use crate::draw::{BACKGROUND, Color, FontDescriptor};
use crate::input::tool::{Cursor, Tool};

/// Pointer drag state.
///
/// A drag starts on pointer-down with a stroke tool, is consulted on every
/// pointer-move and ends on pointer-up or pointer-leave.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawingState {
    /// No drag in progress
    Idle,
    /// Primary button held with a stroke tool
    Drawing {
        /// X coordinate of the previous pointer sample
        last_x: i32,
        /// Y coordinate of the previous pointer sample
        last_y: i32,
    },
}

/// Tool controller state for one drawing session.
///
/// Holds the selected tool, the drag state and every style parameter the
/// controls feed into the pad. Pointer handlers return the [`Shape`] to
/// rasterize (if any); the state itself never touches pixels.
///
/// [`Shape`]: crate::draw::Shape
#[derive(Debug, Clone)]
pub struct InputState {
    /// Currently selected tool
    pub(super) tool: Tool,
    /// Current drag state
    pub state: DrawingState,
    /// Current stroke and text color
    pub current_color: Color,
    /// Current brush width in pixels (pen and eraser)
    pub current_thickness: f64,
    /// Current font size in pixels
    pub current_font_size: f64,
    /// Font face used for text stamps
    pub font_descriptor: FontDescriptor,
    /// Contents of the text input control
    pub text_input: String,
}

impl InputState {
    /// Creates a controller with the pen selected and no drag in progress.
    ///
    /// # Arguments
    /// * `color` - Initial stroke/text color
    /// * `thickness` - Initial brush width in pixels
    /// * `font_size` - Initial font size in pixels
    /// * `font_descriptor` - Font face for text stamps
    pub fn with_defaults(
        color: Color,
        thickness: f64,
        font_size: f64,
        font_descriptor: FontDescriptor,
    ) -> Self {
        Self {
            tool: Tool::Pen,
            state: DrawingState::Idle,
            current_color: color,
            current_thickness: thickness,
            current_font_size: font_size,
            font_descriptor,
            text_input: String::new(),
        }
    }

    /// Currently selected tool.
    pub fn tool(&self) -> Tool {
        self.tool
    }

    /// Cursor affordance for the selected tool.
    pub fn cursor(&self) -> Cursor {
        self.tool.cursor()
    }

    /// Whether `tool` is the one marked active in the tool selector.
    pub fn is_tool_active(&self, tool: Tool) -> bool {
        self.tool == tool
    }

    /// Whether a drag is in progress.
    pub fn is_drawing(&self) -> bool {
        matches!(self.state, DrawingState::Drawing { .. })
    }

    /// Resolves the stroke style for the selected tool.
    ///
    /// Called for every segment, so changing tool or style mid-drag takes
    /// effect on the next pointer-move.
    ///
    /// # Returns
    /// `(color, width)` for pen and eraser, `None` for text.
    pub fn stroke_style(&self) -> Option<(Color, f64)> {
        match self.tool {
            Tool::Pen => Some((self.current_color, self.current_thickness)),
            Tool::Eraser => Some((BACKGROUND, self.current_thickness)),
            Tool::Text => None,
        }
    }
}
