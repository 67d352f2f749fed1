//! Pad session: the value object that owns every piece of drawing state.
//!
//! A [`Pad`] ties the tool controller to the raster surface. Pointer
//! handlers on [`InputState`] return marks; the pad rasterizes them. It also
//! holds the loaded image underlay, the upload manager feeding it and the
//! export target.

mod dispatch;
mod underlay;

use crate::config::Config;
use crate::draw::{Color, FontDescriptor, LoadedImage, Shape, Surface, SurfaceError};
use crate::export::{self, ExportError, ExportTarget};
use crate::input::{InputState, PointerEvent, Tool};
use crate::upload::{UploadError, UploadManager};
use std::path::PathBuf;
use thiserror::Error;

/// Errors returned by pad operations.
#[derive(Debug, Error)]
pub enum PadError {
    #[error(transparent)]
    Surface(#[from] SurfaceError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error(transparent)]
    Upload(#[from] UploadError),
}

/// One drawing session.
pub struct Pad {
    input: InputState,
    surface: Surface,
    loaded_image: Option<LoadedImage>,
    uploads: Option<UploadManager>,
    export_target: ExportTarget,
}

impl Pad {
    /// Creates a pad with a blank 800×600 surface, the pen selected and
    /// library default styles.
    pub fn new() -> Result<Self, PadError> {
        Self::from_config(&Config::default())
    }

    /// Creates a pad whose defaults come from the loaded configuration.
    pub fn from_config(config: &Config) -> Result<Self, PadError> {
        let drawing = &config.drawing;
        let input = InputState::with_defaults(
            drawing.default_color.to_color(),
            drawing.default_brush_size as f64,
            drawing.default_font_size as f64,
            FontDescriptor::new(
                drawing.font_family.clone(),
                drawing.font_weight.clone(),
                drawing.font_style.clone(),
            ),
        );

        log::debug!(
            "Pad created: brush {}px, font {}px {} {} {}",
            drawing.default_brush_size,
            drawing.default_font_size,
            drawing.font_family,
            drawing.font_weight,
            drawing.font_style
        );

        Ok(Self {
            input,
            surface: Surface::new()?,
            loaded_image: None,
            uploads: None,
            export_target: ExportTarget::from_config(&config.export),
        })
    }

    /// Attaches an upload manager; without one, `upload` fails with
    /// [`UploadError::NotRunning`].
    pub fn with_uploads(mut self, uploads: UploadManager) -> Self {
        self.uploads = Some(uploads);
        self
    }

    /// Overrides where `save` writes the PNG.
    pub fn set_save_directory(&mut self, directory: impl Into<PathBuf>) {
        self.export_target.save_directory = directory.into();
    }

    /// The raster surface.
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// The tool controller.
    pub fn input(&self) -> &InputState {
        &self.input
    }

    /// The current export target.
    pub fn export_target(&self) -> &ExportTarget {
        &self.export_target
    }

    // Tool controller passthroughs

    pub fn select_tool(&mut self, tool: Tool) {
        self.input.select_tool(tool);
    }

    pub fn set_color(&mut self, color: Color) {
        self.input.set_color(color);
    }

    pub fn set_brush_size(&mut self, size: u32) {
        self.input.set_thickness(size as f64);
    }

    pub fn set_font_size(&mut self, size: u32) {
        self.input.set_font_size(size as f64);
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.input.set_text_input(text);
    }

    /// Feeds one pointer event to the tool controller and rasterizes the
    /// mark it produces, if any.
    pub fn pointer(&mut self, event: PointerEvent) -> Result<(), PadError> {
        if let Some(shape) = self.input.on_pointer_event(event) {
            self.apply_shape(&shape)?;
        }
        Ok(())
    }

    fn apply_shape(&mut self, shape: &Shape) -> Result<(), PadError> {
        log::trace!("Rasterizing {}", shape.kind());
        self.surface.draw(shape)?;
        Ok(())
    }

    /// Clears drawings and re-composites the retained image, if any.
    pub fn clear_drawings(&mut self) -> Result<(), PadError> {
        self.surface.composite_image(self.loaded_image.as_ref())?;
        log::info!("Drawings cleared");
        Ok(())
    }

    /// Clears the surface and drops the loaded image.
    pub fn clear_all(&mut self) -> Result<(), PadError> {
        self.surface.clear()?;
        self.loaded_image = None;
        log::info!("Surface cleared");
        Ok(())
    }

    /// Applies the grayscale filter to the whole surface.
    pub fn apply_grayscale(&mut self) -> Result<(), PadError> {
        self.surface.apply_grayscale()?;
        log::info!("Grayscale filter applied");
        Ok(())
    }

    /// Encodes the surface as PNG bytes.
    pub fn export_png(&self) -> Result<Vec<u8>, PadError> {
        Ok(self.surface.export_png()?)
    }

    /// Encodes the surface and writes it to the export target.
    ///
    /// # Returns
    /// Path of the written file
    pub fn save(&self) -> Result<PathBuf, PadError> {
        let bytes = self.export_png()?;
        Ok(export::save_png(&bytes, &self.export_target)?)
    }
}
