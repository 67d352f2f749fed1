use crate::draw::Color;
use crate::input::tool::Tool;
use crate::util;

use super::{DrawingState, InputState};

impl InputState {
    /// Selects a tool.
    ///
    /// Exactly one tool is active at a time; selecting the active tool again
    /// is harmless. Switching between pen and eraser keeps an in-flight drag
    /// (the next segment uses the new tool's style). Selecting the text tool
    /// ends the drag, since text never drags.
    pub fn select_tool(&mut self, tool: Tool) {
        if tool == Tool::Text && self.is_drawing() {
            self.state = DrawingState::Idle;
        }

        if self.tool != tool {
            log::debug!(
                "Tool changed: {} -> {} (cursor {:?})",
                self.tool.name(),
                tool.name(),
                tool.cursor()
            );
        }
        self.tool = tool;
    }

    /// Sets the stroke/text color. Any color is accepted.
    pub fn set_color(&mut self, color: Color) {
        log::debug!("Color set to {}", util::color_to_name(&color));
        self.current_color = color;
    }

    /// Sets the brush width in pixels. Any value is accepted.
    pub fn set_thickness(&mut self, thickness: f64) {
        self.current_thickness = thickness;
    }

    /// Sets the font size in pixels. Any value is accepted.
    pub fn set_font_size(&mut self, size: f64) {
        self.current_font_size = size;
    }

    /// Replaces the text input contents.
    pub fn set_text_input(&mut self, text: impl Into<String>) {
        self.text_input = text.into();
    }
}
