//! Configuration type definitions.

use super::enums::ColorSpec;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Drawing-related settings.
///
/// Controls the style the pad starts with. The controls can change color,
/// brush width and font size at runtime; the font face stays fixed.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Initial pen and text color - a named color (red, green, blue, yellow,
    /// orange, pink, white, black), a hex string like `"#1e90ff"`, or an RGB
    /// array like `[255, 0, 0]`
    #[serde(default = "default_color")]
    pub default_color: ColorSpec,

    /// Initial brush width in pixels (valid range: 1 - 100)
    #[serde(default = "default_brush_size")]
    pub default_brush_size: u32,

    /// Initial font size for text stamps in pixels (valid range: 8 - 200)
    #[serde(default = "default_font_size")]
    pub default_font_size: u32,

    /// Font family name for text stamps (e.g., "Sans", "Arial", "DejaVu Serif")
    /// Pango falls back to a default face if the family is not installed
    #[serde(default = "default_font_family")]
    pub font_family: String,

    /// Font weight (e.g., "normal", "bold", "light", 400, 700)
    /// Can be a named weight or a numeric value (100-900)
    #[serde(default = "default_font_weight")]
    pub font_weight: String,

    /// Font style (e.g., "normal", "italic", "oblique")
    #[serde(default = "default_font_style")]
    pub font_style: String,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            default_brush_size: default_brush_size(),
            default_font_size: default_font_size(),
            font_family: default_font_family(),
            font_weight: default_font_weight(),
            font_style: default_font_style(),
        }
    }
}

/// PNG export settings.
///
/// The file name is always `drawing-pad-image.png`; only its directory is
/// configurable.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ExportConfig {
    /// Directory the exported PNG is written to (`~` is expanded)
    #[serde(default = "default_save_directory")]
    pub save_directory: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            save_directory: default_save_directory(),
        }
    }
}

fn default_color() -> ColorSpec {
    ColorSpec::Name("#000000".to_string())
}

fn default_brush_size() -> u32 {
    5
}

fn default_font_size() -> u32 {
    20
}

fn default_font_family() -> String {
    "Sans".to_string()
}

fn default_font_weight() -> String {
    "normal".to_string()
}

fn default_font_style() -> String {
    "normal".to_string()
}

fn default_save_directory() -> String {
    dirs::download_dir()
        .map(|dir| dir.to_string_lossy().into_owned())
        .unwrap_or_else(|| ".".to_string())
}
