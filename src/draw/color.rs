//! RGBA color type, color parsing and predefined color constants.

use thiserror::Error;

/// Represents an RGBA color with floating-point components.
///
/// All components are in the range 0.0 (minimum) to 1.0 (maximum).
///
/// # Examples
///
/// ```
/// use drawpad::draw::Color;
/// let red = Color { r: 1.0, g: 0.0, b: 0.0, a: 1.0 };
/// let semi_transparent_blue = Color { r: 0.0, g: 0.0, b: 1.0, a: 0.5 };
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red component (0.0 = no red, 1.0 = full red)
    pub r: f64,
    /// Green component (0.0 = no green, 1.0 = full green)
    pub g: f64,
    /// Blue component (0.0 = no blue, 1.0 = full blue)
    pub b: f64,
    /// Alpha/transparency (0.0 = fully transparent, 1.0 = fully opaque)
    pub a: f64,
}

/// Error returned when a color string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid color '{0}' (expected #rgb, #rrggbb, #rrggbbaa or a color name)")]
pub struct ColorParseError(pub String);

impl Color {
    /// Creates a new color from RGBA components.
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color from 8-bit channels.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba8(r, g, b, 255)
    }

    /// Creates a color from 8-bit channels including alpha.
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: a as f64 / 255.0,
        }
    }

    /// Parses a color value as a color picker would report it.
    ///
    /// Accepts `#rgb`, `#rrggbb`, `#rrggbbaa` and the predefined color names
    /// (see [`crate::util::name_to_color`]).
    pub fn parse(value: &str) -> Result<Self, ColorParseError> {
        let trimmed = value.trim();
        let Some(hex) = trimmed.strip_prefix('#') else {
            return crate::util::name_to_color(trimmed)
                .ok_or_else(|| ColorParseError(value.to_string()));
        };

        let err = || ColorParseError(value.to_string());
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(err());
        }

        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| err());
        match hex.len() {
            3 => {
                // Shorthand: each digit is doubled (#f80 == #ff8800)
                let digit = |i: usize| channel(&hex[i..i + 1]).map(|v| v * 17);
                Ok(Self::from_rgb8(digit(0)?, digit(1)?, digit(2)?))
            }
            6 => Ok(Self::from_rgb8(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            8 => Ok(Self::from_rgba8(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
                channel(&hex[6..8])?,
            )),
            _ => Err(err()),
        }
    }
}

impl std::str::FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// ============================================================================
// Predefined Color Constants (ZoomIt-inspired palette)
// ============================================================================

/// Predefined red color (R=1.0, G=0.0, B=0.0)
pub const RED: Color = Color {
    r: 1.0,
    g: 0.0,
    b: 0.0,
    a: 1.0,
};

/// Predefined green color (R=0.0, G=1.0, B=0.0)
pub const GREEN: Color = Color {
    r: 0.0,
    g: 1.0,
    b: 0.0,
    a: 1.0,
};

/// Predefined blue color (R=0.0, G=0.0, B=1.0)
pub const BLUE: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 1.0,
    a: 1.0,
};

/// Predefined yellow color (R=1.0, G=1.0, B=0.0)
pub const YELLOW: Color = Color {
    r: 1.0,
    g: 1.0,
    b: 0.0,
    a: 1.0,
};

/// Predefined orange color (R=1.0, G=0.5, B=0.0)
pub const ORANGE: Color = Color {
    r: 1.0,
    g: 0.5,
    b: 0.0,
    a: 1.0,
};

/// Predefined pink/magenta color (R=1.0, G=0.0, B=1.0)
pub const PINK: Color = Color {
    r: 1.0,
    g: 0.0,
    b: 1.0,
    a: 1.0,
};

/// Predefined white color (R=1.0, G=1.0, B=1.0)
pub const WHITE: Color = Color {
    r: 1.0,
    g: 1.0,
    b: 1.0,
    a: 1.0,
};

/// Predefined black color (R=0.0, G=0.0, B=0.0)
pub const BLACK: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 1.0,
};

/// Fully transparent color (what a cleared surface holds)
pub const TRANSPARENT: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 0.0,
};

/// Color painted by the eraser.
///
/// The eraser overwrites pixels with this color instead of clearing them, so
/// it also covers a composited image.
pub const BACKGROUND: Color = WHITE;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_long_hex() {
        assert_eq!(Color::parse("#000000").unwrap(), BLACK);
        assert_eq!(Color::parse("#FF0000").unwrap(), RED);
        assert_eq!(Color::parse("#ffffff").unwrap(), WHITE);
    }

    #[test]
    fn parse_short_hex_doubles_digits() {
        assert_eq!(Color::parse("#f00").unwrap(), RED);
        assert_eq!(
            Color::parse("#f80").unwrap(),
            Color::from_rgb8(0xff, 0x88, 0x00)
        );
    }

    #[test]
    fn parse_hex_with_alpha() {
        let color = Color::parse("#0000ff80").unwrap();
        assert_eq!(color.b, 1.0);
        assert!((color.a - 128.0 / 255.0).abs() < 1e-9);
    }

    #[test]
    fn parse_names_case_insensitive() {
        assert_eq!(Color::parse("Orange").unwrap(), ORANGE);
        assert_eq!(" pink ".parse::<Color>().unwrap(), PINK);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(Color::parse("#12345").is_err());
        assert!(Color::parse("#gg0000").is_err());
        assert!(Color::parse("chartreuse").is_err());
        assert!(Color::parse("#").is_err());
    }
}
