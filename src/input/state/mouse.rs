use crate::draw::Shape;
use crate::input::{events::PointerEvent, tool::Tool};

use super::{DrawingState, InputState};

impl InputState {
    /// Routes a pointer event to its handler.
    pub fn on_pointer_event(&mut self, event: PointerEvent) -> Option<Shape> {
        match event {
            PointerEvent::Down { x, y } => self.on_pointer_down(x, y),
            PointerEvent::Move { x, y } => self.on_pointer_move(x, y),
            PointerEvent::Up => {
                self.on_pointer_up();
                None
            }
            PointerEvent::Leave => {
                self.on_pointer_leave();
                None
            }
        }
    }

    /// Processes a primary button press.
    ///
    /// # Behavior
    /// - Text tool: stamps the current text input at (x, y); no drag starts
    /// - Pen/eraser: starts a drag anchored at (x, y); nothing is drawn yet
    pub fn on_pointer_down(&mut self, x: i32, y: i32) -> Option<Shape> {
        if !self.tool.draws_strokes() {
            return self.stamp_text(x, y);
        }

        self.state = DrawingState::Drawing {
            last_x: x,
            last_y: y,
        };
        None
    }

    /// Processes pointer motion.
    ///
    /// # Behavior
    /// While a drag is active with a stroke tool, returns the segment from the
    /// previous sample to (x, y) in the style of the current tool and advances
    /// the previous sample. Otherwise does nothing.
    pub fn on_pointer_move(&mut self, x: i32, y: i32) -> Option<Shape> {
        let DrawingState::Drawing { last_x, last_y } = self.state else {
            return None;
        };
        let (color, thick) = self.stroke_style()?;

        self.state = DrawingState::Drawing {
            last_x: x,
            last_y: y,
        };

        Some(Shape::Segment {
            x1: last_x,
            y1: last_y,
            x2: x,
            y2: y,
            color,
            thick,
        })
    }

    /// Processes a primary button release. Ends any drag.
    pub fn on_pointer_up(&mut self) {
        self.end_drag();
    }

    /// Processes the pointer leaving the surface. Ends any drag.
    pub fn on_pointer_leave(&mut self) {
        self.end_drag();
    }

    fn end_drag(&mut self) {
        if self.is_drawing() {
            log::trace!("Drag ended");
        }
        self.state = DrawingState::Idle;
    }

    /// Builds a text stamp at (x, y) from the current text input.
    ///
    /// Returns `None` unless the text tool is selected and the input has
    /// non-whitespace content. The text is stamped as entered, untrimmed.
    pub fn stamp_text(&mut self, x: i32, y: i32) -> Option<Shape> {
        if self.tool != Tool::Text || self.text_input.trim().is_empty() {
            return None;
        }

        Some(Shape::Text {
            x,
            y,
            text: self.text_input.clone(),
            color: self.current_color,
            size: self.current_font_size,
            font_descriptor: self.font_descriptor.clone(),
        })
    }
}
