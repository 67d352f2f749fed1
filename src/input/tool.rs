//! Drawing tool selection.

use serde::{Deserialize, Serialize};

/// Drawing tool selection.
///
/// The active tool determines what a pointer press does: pen and eraser start
/// a drag that emits stroke segments, text stamps the current text input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    /// Freehand drawing in the current color (default)
    #[default]
    Pen,
    /// Paints the background color over existing pixels
    Eraser,
    /// Stamps the current text input at the pressed point
    Text,
}

/// Pointer cursor shown over the surface for the active tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cursor {
    Crosshair,
    Grab,
    Text,
}

impl Tool {
    /// All tools in selector order.
    pub const ALL: [Tool; 3] = [Tool::Pen, Tool::Eraser, Tool::Text];

    /// Cursor affordance for this tool.
    pub fn cursor(self) -> Cursor {
        match self {
            Tool::Pen => Cursor::Crosshair,
            Tool::Eraser => Cursor::Grab,
            Tool::Text => Cursor::Text,
        }
    }

    /// Whether pressing with this tool starts a drag.
    pub fn draws_strokes(self) -> bool {
        !matches!(self, Tool::Text)
    }

    /// Lowercase identifier used by the command parser and logs.
    pub fn name(self) -> &'static str {
        match self {
            Tool::Pen => "pen",
            Tool::Eraser => "eraser",
            Tool::Text => "text",
        }
    }

    /// Parses a tool identifier (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|tool| tool.name().eq_ignore_ascii_case(name.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursors_match_tools() {
        assert_eq!(Tool::Pen.cursor(), Cursor::Crosshair);
        assert_eq!(Tool::Eraser.cursor(), Cursor::Grab);
        assert_eq!(Tool::Text.cursor(), Cursor::Text);
    }

    #[test]
    fn names_round_trip() {
        for tool in Tool::ALL {
            assert_eq!(Tool::from_name(tool.name()), Some(tool));
        }
        assert_eq!(Tool::from_name("ERASER"), Some(Tool::Eraser));
        assert_eq!(Tool::from_name("brush"), None);
    }
}
