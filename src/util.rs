//! Utility functions for colors and surface geometry.
//!
//! This module provides:
//! - Color name lookup used by the config file and the command parser
//! - Aspect-fit placement of images on the drawing surface

use crate::draw::{Color, color::*};

// ============================================================================
// Color Mapping
// ============================================================================

/// Maps color name strings to Color values.
///
/// Used by the configuration system and the command parser.
///
/// # Supported Names (case-insensitive)
/// - "red", "green", "blue", "yellow", "orange", "pink", "white", "black"
///
/// # Returns
/// - `Some(Color)` if the name matches a predefined color
/// - `None` if the name is not recognized
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "yellow" => Some(YELLOW),
        "orange" => Some(ORANGE),
        "pink" => Some(PINK),
        "white" => Some(WHITE),
        "black" => Some(BLACK),
        _ => None,
    }
}

/// Maps a Color value to its human-readable name.
///
/// Uses approximate matching (threshold-based) to identify colors.
/// Used when logging the active style.
///
/// # Returns
/// A static string with the color name, or "Custom" if the color doesn't
/// match any predefined color.
pub fn color_to_name(color: &Color) -> &'static str {
    if color.r > 0.9 && color.g < 0.1 && color.b < 0.1 {
        "Red"
    } else if color.r < 0.1 && color.g > 0.9 && color.b < 0.1 {
        "Green"
    } else if color.r < 0.1 && color.g < 0.1 && color.b > 0.9 {
        "Blue"
    } else if color.r > 0.9 && color.g > 0.9 && color.b < 0.1 {
        "Yellow"
    } else if color.r > 0.9 && (0.4..=0.6).contains(&color.g) && color.b < 0.1 {
        "Orange"
    } else if color.r > 0.9 && color.g < 0.1 && color.b > 0.9 {
        "Pink"
    } else if color.r > 0.9 && color.g > 0.9 && color.b > 0.9 {
        "White"
    } else if color.r < 0.1 && color.g < 0.1 && color.b < 0.1 {
        "Black"
    } else {
        "Custom"
    }
}

// ============================================================================
// Geometry Utilities
// ============================================================================

/// Placement of an image scaled to fit inside a target area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitRect {
    /// Left offset of the scaled image
    pub x: f64,
    /// Top offset of the scaled image
    pub y: f64,
    /// Scaled width
    pub width: f64,
    /// Scaled height
    pub height: f64,
    /// Uniform scale factor applied to both axes
    pub scale: f64,
}

/// Computes the aspect-fit placement of an image inside a surface.
///
/// The scale factor is `min(surface_w / image_w, surface_h / image_h)`, applied
/// to both axes, and the scaled image is centered. Images smaller than the
/// surface are scaled up by the same rule.
///
/// Returns `None` when either image dimension is zero.
pub fn fit_rect(surface_w: u32, surface_h: u32, image_w: u32, image_h: u32) -> Option<FitRect> {
    if image_w == 0 || image_h == 0 {
        return None;
    }

    let (sw, sh) = (surface_w as f64, surface_h as f64);
    let (iw, ih) = (image_w as f64, image_h as f64);

    let scale = (sw / iw).min(sh / ih);
    let width = iw * scale;
    let height = ih * scale;

    Some(FitRect {
        x: (sw - width) / 2.0,
        y: (sh - height) / 2.0,
        width,
        height,
        scale,
    })
}
