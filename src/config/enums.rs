//! Configuration enum types.

use crate::draw::{Color, color::BLACK};
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Color specification - a color string or RGB values.
///
/// # Examples
/// ```toml
/// # Named color
/// default_color = "red"
///
/// # Hex color, as a color picker reports it
/// default_color = "#1e90ff"
///
/// # Custom RGB color (0-255 per component)
/// default_color = [255, 128, 0]  # Orange
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color (red, green, blue, yellow, orange, pink, white, black) or
    /// hex string (#rgb, #rrggbb, #rrggbbaa)
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the color specification to a [`Color`] struct.
    ///
    /// Strings go through [`Color::parse`]; unparseable strings fall back to
    /// black with a warning. RGB arrays are converted from 0-255 range to
    /// 0.0-1.0 range with full opacity.
    pub fn to_color(&self) -> Color {
        match self {
            ColorSpec::Name(name) => Color::parse(name).unwrap_or_else(|err| {
                warn!("{}, using black", err);
                BLACK
            }),
            ColorSpec::Rgb([r, g, b]) => Color::from_rgb8(*r, *g, *b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{RED, WHITE};

    #[test]
    fn color_spec_accepts_names_hex_and_rgb() {
        assert_eq!(ColorSpec::Name("red".into()).to_color(), RED);
        assert_eq!(ColorSpec::Name("#ffffff".into()).to_color(), WHITE);
        assert_eq!(
            ColorSpec::Rgb([255, 128, 0]).to_color(),
            Color::from_rgb8(255, 128, 0)
        );
    }

    #[test]
    fn unknown_color_falls_back_to_black() {
        assert_eq!(ColorSpec::Name("mauve-ish".into()).to_color(), BLACK);
    }
}
