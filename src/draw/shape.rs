//! Marks produced by the tool controller for immediate rasterization.

use super::color::Color;
use super::font::FontDescriptor;

/// A single mark to rasterize onto the surface.
///
/// Marks are not retained: the pad renders each one as soon as the tool
/// controller produces it, and the pixels are all that remain.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    /// One stroke segment between two consecutive pointer samples
    Segment {
        /// Starting X coordinate (previous pointer sample)
        x1: i32,
        /// Starting Y coordinate
        y1: i32,
        /// Ending X coordinate (current pointer sample)
        x2: i32,
        /// Ending Y coordinate
        y2: i32,
        /// Stroke color
        color: Color,
        /// Line thickness in pixels
        thick: f64,
    },
    /// Stamped text, left-aligned and vertically centered on (x, y)
    Text {
        /// Left edge X coordinate
        x: i32,
        /// Vertical center Y coordinate
        y: i32,
        /// Text content, rendered as entered
        text: String,
        /// Fill color
        color: Color,
        /// Font size in pixels
        size: f64,
        /// Font face
        font_descriptor: FontDescriptor,
    },
}

impl Shape {
    /// Short label for log output.
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Segment { .. } => "segment",
            Shape::Text { .. } => "text",
        }
    }
}
