//! Raster surface adapter over a Cairo image surface.
//!
//! Every drawing operation creates a short-lived [`cairo::Context`] and drops
//! it before returning, so the pixel buffer is never shared with an
//! outstanding context when the grayscale filter takes exclusive access.

use super::color::Color;
use super::loaded_image::{ImageError, LoadedImage};
use super::render;
use super::shape::Shape;
use crate::util::{self, FitRect};
use thiserror::Error;

/// Fixed surface width in pixels.
pub const SURFACE_WIDTH: u32 = 800;
/// Fixed surface height in pixels.
pub const SURFACE_HEIGHT: u32 = 600;

/// Errors raised by surface operations.
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("Cairo error: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("Surface pixel buffer unavailable: {0}")]
    Borrow(#[from] cairo::BorrowError),

    #[error("PNG encoding failed: {0}")]
    Png(#[from] cairo::IoError),

    #[error(transparent)]
    Image(#[from] ImageError),
}

/// The drawing surface: an ARGB32 pixel grid plus the primitives that write it.
pub struct Surface {
    surface: cairo::ImageSurface,
    width: u32,
    height: u32,
}

impl std::fmt::Debug for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Surface")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

impl Surface {
    /// Creates a blank 800×600 surface.
    pub fn new() -> Result<Self, SurfaceError> {
        Self::with_size(SURFACE_WIDTH, SURFACE_HEIGHT)
    }

    /// Creates a blank surface of arbitrary size.
    pub fn with_size(width: u32, height: u32) -> Result<Self, SurfaceError> {
        let surface =
            cairo::ImageSurface::create(cairo::Format::ARgb32, width as i32, height as i32)?;
        Ok(Self {
            surface,
            width,
            height,
        })
    }

    /// Surface width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Surface height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    fn context(&self) -> Result<cairo::Context, SurfaceError> {
        Ok(cairo::Context::new(&self.surface)?)
    }

    /// Rasterizes one mark produced by the tool controller.
    ///
    /// Segments go through [`stroke_segment`](Self::stroke_segment); text is
    /// laid out with Pango.
    pub fn draw(&mut self, shape: &Shape) -> Result<(), SurfaceError> {
        match shape {
            Shape::Segment {
                x1,
                y1,
                x2,
                y2,
                color,
                thick,
            } => self.stroke_segment((*x1, *y1), (*x2, *y2), *color, *thick),
            Shape::Text { .. } => {
                let ctx = self.context()?;
                render::render_shape(&ctx, shape);
                Ok(())
            }
        }
    }

    /// Appends a round-cap, round-join line segment.
    pub fn stroke_segment(
        &mut self,
        from: (i32, i32),
        to: (i32, i32),
        color: Color,
        width: f64,
    ) -> Result<(), SurfaceError> {
        let ctx = self.context()?;
        render::render_segment(&ctx, from.0, from.1, to.0, to.1, color, width);
        Ok(())
    }

    /// Clears every pixel to fully transparent.
    pub fn clear(&mut self) -> Result<(), SurfaceError> {
        let ctx = self.context()?;
        render::clear_surface(&ctx);
        Ok(())
    }

    /// Clears the surface, then draws `image` (if any) at its aspect-fit position.
    ///
    /// The image is wrapped for Cairo before anything is cleared, so an image
    /// that cannot be painted leaves the surface as it was.
    ///
    /// Returns the placement used, or `None` when nothing was drawn.
    pub fn composite_image(
        &mut self,
        image: Option<&LoadedImage>,
    ) -> Result<Option<FitRect>, SurfaceError> {
        let placement = match image {
            Some(image) => {
                let fit = util::fit_rect(self.width, self.height, image.width(), image.height());
                match fit {
                    Some(fit) => Some((image, image.to_cairo_surface()?, fit)),
                    None => None,
                }
            }
            None => None,
        };

        let ctx = self.context()?;
        render::clear_surface(&ctx);

        let Some((image, source, fit)) = placement else {
            return Ok(None);
        };

        render::render_fitted_image(&ctx, &source, fit)?;
        log::debug!(
            "Composited {}x{} image at ({:.1}, {:.1}) size {:.1}x{:.1} (scale {:.3})",
            image.width(),
            image.height(),
            fit.x,
            fit.y,
            fit.width,
            fit.height,
            fit.scale
        );
        Ok(Some(fit))
    }

    /// Replaces R, G and B of every pixel with their unweighted average.
    ///
    /// Alpha is untouched. Cairo stores premultiplied channels; averaging them
    /// equals premultiplying the straight average, so no conversion is needed.
    /// Once R = G = B the average reproduces itself, which makes the filter
    /// idempotent.
    pub fn apply_grayscale(&mut self) -> Result<(), SurfaceError> {
        let stride = self.surface.stride() as usize;
        let row_bytes = self.width as usize * 4;
        let mut data = self.surface.data()?;

        for row in data.chunks_exact_mut(stride) {
            for px in row[..row_bytes].chunks_exact_mut(4) {
                let pixel = u32::from_ne_bytes([px[0], px[1], px[2], px[3]]);
                let a = pixel >> 24;
                let r = (pixel >> 16) & 0xff;
                let g = (pixel >> 8) & 0xff;
                let b = pixel & 0xff;
                let avg = (r + g + b) / 3;
                let gray = (a << 24) | (avg << 16) | (avg << 8) | avg;
                px.copy_from_slice(&gray.to_ne_bytes());
            }
        }

        Ok(())
    }

    /// Encodes the current contents as PNG bytes.
    ///
    /// Encoding only reads the buffer; a failure leaves the surface as it was.
    pub fn export_png(&self) -> Result<Vec<u8>, SurfaceError> {
        let mut bytes = Vec::new();
        self.surface.write_to_png(&mut bytes)?;
        Ok(bytes)
    }

    /// Reads one pixel as straight (non-premultiplied) `[r, g, b, a]`.
    ///
    /// Returns `None` for coordinates outside the surface.
    pub fn pixel(&self, x: i32, y: i32) -> Option<[u8; 4]> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }

        let stride = self.surface.stride() as usize;
        let offset = y as usize * stride + x as usize * 4;
        let mut out = None;

        self.surface.flush();
        self.surface
            .with_data(|data| {
                let px = &data[offset..offset + 4];
                out = Some(unpremultiply(u32::from_ne_bytes([
                    px[0], px[1], px[2], px[3],
                ])));
            })
            .ok()?;

        out
    }

    /// Counts pixels with non-zero alpha.
    pub fn painted_pixel_count(&self) -> usize {
        let stride = self.surface.stride() as usize;
        let row_bytes = self.width as usize * 4;
        let mut count = 0;

        self.surface.flush();
        let _ = self.surface.with_data(|data| {
            count = data
                .chunks_exact(stride)
                .flat_map(|row| row[..row_bytes].chunks_exact(4))
                .filter(|px| u32::from_ne_bytes([px[0], px[1], px[2], px[3]]) >> 24 != 0)
                .count();
        });

        count
    }

    /// True when no pixel has been painted.
    pub fn is_blank(&self) -> bool {
        self.painted_pixel_count() == 0
    }
}

fn unpremultiply(pixel: u32) -> [u8; 4] {
    let a = pixel >> 24;
    if a == 0 {
        return [0, 0, 0, 0];
    }
    let channel = |shift: u32| {
        let c = (pixel >> shift) & 0xff;
        ((c * 255 + a / 2) / a).min(255) as u8
    };
    [channel(16), channel(8), channel(0), a as u8]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{BLACK, RED, WHITE};

    fn solid_image(width: u32, height: u32, rgba: [u8; 4]) -> LoadedImage {
        let data: Vec<u8> = rgba
            .iter()
            .copied()
            .cycle()
            .take(width as usize * height as usize * 4)
            .collect();
        LoadedImage::from_rgba(width, height, &data).unwrap()
    }

    #[test]
    fn new_surface_is_blank_and_fixed_size() {
        let surface = Surface::new().unwrap();
        assert_eq!((surface.width(), surface.height()), (800, 600));
        assert!(surface.is_blank());
        assert_eq!(surface.pixel(799, 599), Some([0, 0, 0, 0]));
        assert_eq!(surface.pixel(800, 0), None);
        assert_eq!(surface.pixel(-1, 0), None);
    }

    #[test]
    fn horizontal_segment_has_expected_thickness() {
        let mut surface = Surface::new().unwrap();
        surface.stroke_segment((10, 10), (100, 10), BLACK, 5.0).unwrap();

        // A 5px line centered on y=10 fully covers rows 8..=11
        for y in 8..=11 {
            assert_eq!(surface.pixel(50, y), Some([0, 0, 0, 255]), "row {y}");
        }
        assert_eq!(surface.pixel(50, 5).unwrap()[3], 0);
        assert_eq!(surface.pixel(50, 15).unwrap()[3], 0);
        // Round cap extends past the endpoint
        assert_eq!(surface.pixel(101, 10).unwrap()[3], 255);
        assert_eq!(surface.pixel(110, 10).unwrap()[3], 0);
    }

    #[test]
    fn drawing_a_segment_mark_strokes_it() {
        let mut via_mark = Surface::new().unwrap();
        via_mark
            .draw(&Shape::Segment {
                x1: 20,
                y1: 30,
                x2: 220,
                y2: 130,
                color: RED,
                thick: 7.0,
            })
            .unwrap();

        let mut direct = Surface::new().unwrap();
        direct.stroke_segment((20, 30), (220, 130), RED, 7.0).unwrap();

        assert!(!direct.is_blank());
        assert_eq!(via_mark.export_png().unwrap(), direct.export_png().unwrap());
    }

    #[test]
    fn consecutive_segments_leave_no_gap_at_shared_endpoint() {
        let mut surface = Surface::new().unwrap();
        surface.stroke_segment((10, 10), (50, 10), BLACK, 6.0).unwrap();
        surface.stroke_segment((50, 10), (50, 60), BLACK, 6.0).unwrap();

        // The joint is covered by the round caps
        assert_eq!(surface.pixel(51, 9), Some([0, 0, 0, 255]));
        assert_eq!(surface.pixel(50, 10), Some([0, 0, 0, 255]));
    }

    #[test]
    fn zero_length_segment_paints_a_dot() {
        let mut surface = Surface::new().unwrap();
        surface.stroke_segment((30, 30), (30, 30), RED, 8.0).unwrap();
        assert_eq!(surface.pixel(30, 30), Some([255, 0, 0, 255]));
    }

    #[test]
    fn composite_without_image_yields_blank_surface() {
        let mut surface = Surface::new().unwrap();
        surface.stroke_segment((0, 0), (799, 599), RED, 10.0).unwrap();
        assert!(!surface.is_blank());

        assert_eq!(surface.composite_image(None).unwrap(), None);
        assert!(surface.is_blank());
    }

    #[test]
    fn composite_letterboxes_wide_image() {
        let mut surface = Surface::new().unwrap();
        let image = solid_image(120, 60, [0, 0, 255, 255]);

        let fit = surface.composite_image(Some(&image)).unwrap().unwrap();
        assert!((fit.width / fit.height - 2.0).abs() < 1e-9);
        assert!((fit.y - 100.0).abs() < 1e-9);

        assert_eq!(surface.pixel(400, 50).unwrap()[3], 0);
        assert_eq!(surface.pixel(400, 300), Some([0, 0, 255, 255]));
        assert_eq!(surface.pixel(400, 550).unwrap()[3], 0);
        assert_eq!(surface.pixel(2, 300), Some([0, 0, 255, 255]));
    }

    #[test]
    fn composite_replaces_previous_drawing() {
        let mut surface = Surface::new().unwrap();
        surface.stroke_segment((400, 20), (400, 80), RED, 10.0).unwrap();

        let image = solid_image(30, 30, [0, 255, 0, 255]);
        surface.composite_image(Some(&image)).unwrap();

        // Square image fills the middle 600x600 block; the stroke is gone
        assert_eq!(surface.pixel(400, 50), Some([0, 255, 0, 255]));
        assert_eq!(surface.pixel(50, 50).unwrap()[3], 0);
    }

    #[test]
    fn grayscale_uses_unweighted_average() {
        let mut surface = Surface::new().unwrap();
        surface.stroke_segment((10, 10), (60, 10), RED, 8.0).unwrap();
        surface.apply_grayscale().unwrap();

        assert_eq!(surface.pixel(30, 10), Some([85, 85, 85, 255]));
        // Transparent pixels stay transparent
        assert_eq!(surface.pixel(300, 300), Some([0, 0, 0, 0]));
    }

    #[test]
    fn grayscale_is_idempotent() {
        let mut surface = Surface::new().unwrap();
        let image = solid_image(8, 6, [200, 40, 10, 255]);
        surface.composite_image(Some(&image)).unwrap();
        surface
            .stroke_segment((100, 100), (300, 200), Color::from_rgba8(10, 200, 90, 128), 12.0)
            .unwrap();

        surface.apply_grayscale().unwrap();
        let once = surface.export_png().unwrap();
        surface.apply_grayscale().unwrap();
        let twice = surface.export_png().unwrap();

        assert_eq!(once, twice);
    }

    #[test]
    fn eraser_color_overwrites_stroke() {
        let mut surface = Surface::new().unwrap();
        surface.stroke_segment((10, 50), (200, 50), BLACK, 4.0).unwrap();
        surface.stroke_segment((10, 50), (200, 50), WHITE, 10.0).unwrap();
        assert_eq!(surface.pixel(100, 50), Some([255, 255, 255, 255]));
    }

    #[test]
    fn export_png_produces_png_signature() {
        let surface = Surface::new().unwrap();
        let bytes = surface.export_png().unwrap();
        assert!(bytes.starts_with(&[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a]));
    }
}
