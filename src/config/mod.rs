//! Configuration file support for drawpad.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/drawpad/config.toml`. Settings include the drawing defaults
//! and where exported images are written.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{DrawingConfig, ExportConfig};

use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// default_color = "#000000"
/// default_brush_size = 5
/// default_font_size = 20
/// font_family = "Sans"
/// font_weight = "normal"
/// font_style = "normal"
///
/// [export]
/// save_directory = "~/Downloads"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Drawing defaults (color, brush width, font)
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// PNG export settings
    #[serde(default)]
    pub export: ExportConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `default_brush_size`: 1 - 100
    /// - `default_font_size`: 8 - 200
    /// - `font_family`: non-empty
    /// - `font_weight`: a Pango weight name or 100 - 900
    /// - `font_style`: normal, italic or oblique
    fn validate_and_clamp(&mut self) {
        if !(1..=100).contains(&self.drawing.default_brush_size) {
            log::warn!(
                "Invalid default_brush_size {}, clamping to 1-100 range",
                self.drawing.default_brush_size
            );
            self.drawing.default_brush_size = self.drawing.default_brush_size.clamp(1, 100);
        }

        if !(8..=200).contains(&self.drawing.default_font_size) {
            log::warn!(
                "Invalid default_font_size {}, clamping to 8-200 range",
                self.drawing.default_font_size
            );
            self.drawing.default_font_size = self.drawing.default_font_size.clamp(8, 200);
        }

        if self.drawing.font_family.trim().is_empty() {
            log::warn!("Empty font_family, falling back to 'Sans'");
            self.drawing.font_family = "Sans".to_string();
        }

        let valid_weight = matches!(
            self.drawing.font_weight.to_lowercase().as_str(),
            "normal" | "bold" | "light" | "ultralight" | "heavy" | "ultrabold"
        ) || self
            .drawing
            .font_weight
            .parse::<u32>()
            .is_ok_and(|w| (100..=900).contains(&w));

        if !valid_weight {
            log::warn!(
                "Invalid font_weight '{}', falling back to 'normal'",
                self.drawing.font_weight
            );
            self.drawing.font_weight = "normal".to_string();
        }

        if !matches!(
            self.drawing.font_style.to_lowercase().as_str(),
            "normal" | "italic" | "oblique"
        ) {
            log::warn!(
                "Invalid font_style '{}', falling back to 'normal'",
                self.drawing.font_style
            );
            self.drawing.font_style = "normal".to_string();
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/drawpad/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("drawpad");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default path, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Loads configuration from `config_path`, or returns defaults if it doesn't exist.
    ///
    /// All loaded values are validated and clamped to acceptable ranges.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        config.validate_and_clamp();
        Ok(config)
    }

    /// Parses configuration from a TOML string and validates it.
    pub fn from_toml(source: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(source)?;
        config.validate_and_clamp();
        Ok(config)
    }

    /// Returns the JSON schema describing the config file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::Color;

    #[test]
    fn empty_config_uses_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config.drawing.default_brush_size, 5);
        assert_eq!(config.drawing.default_font_size, 20);
        assert_eq!(config.drawing.font_family, "Sans");
        assert_eq!(
            config.drawing.default_color.to_color(),
            Color::from_rgb8(0, 0, 0)
        );
    }

    #[test]
    fn parses_drawing_and_export_sections() {
        let config = Config::from_toml(
            r##"
            [drawing]
            default_color = "#1e90ff"
            default_brush_size = 12
            default_font_size = 48
            font_family = "Serif"
            font_weight = "bold"
            font_style = "italic"

            [export]
            save_directory = "/tmp/pads"
            "##,
        )
        .unwrap();

        assert_eq!(
            config.drawing.default_color.to_color(),
            Color::from_rgb8(0x1e, 0x90, 0xff)
        );
        assert_eq!(config.drawing.default_brush_size, 12);
        assert_eq!(config.drawing.default_font_size, 48);
        assert_eq!(config.drawing.font_family, "Serif");
        assert_eq!(config.drawing.font_weight, "bold");
        assert_eq!(config.drawing.font_style, "italic");
        assert_eq!(config.export.save_directory, "/tmp/pads");
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let config = Config::from_toml(
            r#"
            [drawing]
            default_brush_size = 0
            default_font_size = 999
            font_family = "   "
            font_weight = "chunky"
            font_style = "slanted"
            "#,
        )
        .unwrap();

        assert_eq!(config.drawing.default_brush_size, 1);
        assert_eq!(config.drawing.default_font_size, 200);
        assert_eq!(config.drawing.font_family, "Sans");
        assert_eq!(config.drawing.font_weight, "normal");
        assert_eq!(config.drawing.font_style, "normal");
    }

    #[test]
    fn export_filename_is_not_configurable() {
        let config = Config::from_toml(
            r#"
            [export]
            save_directory = "/tmp/pads"
            filename = "other.png"
            "#,
        )
        .unwrap();
        let target = crate::export::ExportTarget::from_config(&config.export);
        assert_eq!(
            target.path(),
            PathBuf::from("/tmp/pads/drawing-pad-image.png")
        );
    }

    #[test]
    fn invalid_toml_is_an_error() {
        assert!(Config::from_toml("[drawing\ndefault_brush_size = ").is_err());
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.drawing.default_brush_size, 5);
    }

    #[test]
    fn load_from_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[drawing]\ndefault_brush_size = 9\n").unwrap();
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.drawing.default_brush_size, 9);
    }

    #[test]
    fn schema_names_sections() {
        let schema = serde_json::to_string(&Config::json_schema()).unwrap();
        assert!(schema.contains("drawing"));
        assert!(schema.contains("export"));
    }
}
