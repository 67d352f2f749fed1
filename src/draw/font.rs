//! Font descriptor for text stamping.

/// Font configuration for text rendering.
///
/// The face is fixed for a session; only the pixel size changes at runtime.
#[derive(Debug, Clone, PartialEq)]
pub struct FontDescriptor {
    /// Font family name (e.g., "Sans", "Arial", "DejaVu Serif")
    pub family: String,

    /// Font weight (e.g., "normal", "bold", "light" or numeric 100-900)
    pub weight: String,

    /// Font style (e.g., "normal", "italic", "oblique")
    pub style: String,
}

impl Default for FontDescriptor {
    fn default() -> Self {
        Self {
            family: "Sans".to_string(),
            weight: "normal".to_string(),
            style: "normal".to_string(),
        }
    }
}

impl FontDescriptor {
    /// Creates a new font descriptor with the specified parameters.
    pub fn new(family: String, weight: String, style: String) -> Self {
        Self {
            family,
            weight,
            style,
        }
    }

    /// Converts this descriptor to a size-less Pango font description string.
    ///
    /// Format: "Family Style Weight"
    /// Example: "Sans" or "Monospace Italic Bold"
    pub fn to_pango_string(&self) -> String {
        let mut parts = vec![self.family.clone()];

        if self.style.to_lowercase() != "normal" {
            parts.push(capitalize_first(&self.style));
        }

        if self.weight.to_lowercase() != "normal" {
            parts.push(capitalize_first(&self.weight));
        }

        parts.join(" ")
    }

    /// Builds a Pango font description sized in device pixels.
    ///
    /// Pango string sizes are in points; the pad's font size control is in
    /// pixels, so the absolute size is set explicitly.
    pub fn to_pango_description(&self, size_px: f64) -> pango::FontDescription {
        let mut desc = pango::FontDescription::from_string(&self.to_pango_string());
        desc.set_absolute_size(size_px.max(1.0) * pango::SCALE as f64);
        desc
    }
}

/// Capitalizes the first letter of a string.
fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pango_string_default() {
        let font = FontDescriptor::default();
        assert_eq!(font.to_pango_string(), "Sans");
    }

    #[test]
    fn test_pango_string_italic() {
        let font = FontDescriptor::new(
            "Monospace".to_string(),
            "normal".to_string(),
            "italic".to_string(),
        );
        assert_eq!(font.to_pango_string(), "Monospace Italic");
    }

    #[test]
    fn test_pango_string_custom() {
        let font = FontDescriptor::new(
            "JetBrains Mono".to_string(),
            "light".to_string(),
            "normal".to_string(),
        );
        assert_eq!(font.to_pango_string(), "JetBrains Mono Light");
    }

    #[test]
    fn test_pango_description_uses_pixel_size() {
        let font = FontDescriptor::new(
            "Arial".to_string(),
            "normal".to_string(),
            "normal".to_string(),
        );
        let desc = font.to_pango_description(24.0);
        assert!(desc.is_size_absolute());
        assert_eq!(desc.size(), 24 * pango::SCALE);
        assert_eq!(desc.family().as_deref(), Some("Arial"));
    }
}
