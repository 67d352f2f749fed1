//! Decoded raster images used as the pad's underlay.

use thiserror::Error;

/// Largest width or height Cairo can wrap in an image surface.
pub const MAX_IMAGE_DIMENSION: u32 = 32767;

/// Errors produced while turning encoded bytes into a [`LoadedImage`].
#[derive(Debug, Error)]
pub enum ImageError {
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("image has no pixels ({width}x{height})")]
    Empty { width: u32, height: u32 },

    #[error("image is {width}x{height}, larger than the {max}px limit")]
    TooLarge { width: u32, height: u32, max: u32 },

    #[error("pixel buffer holds {actual} bytes, expected {expected}")]
    InvalidDataLength { expected: usize, actual: usize },

    #[error("Cairo error: {0}")]
    Cairo(#[from] cairo::Error),
}

/// A decoded image held by the pad session.
///
/// Pixels are stored in Cairo's ARGB32 layout (premultiplied alpha, one
/// native-endian `u32` per pixel) so compositing only has to wrap the buffer.
/// The buffer is plain memory, which lets decoding happen on worker threads.
#[derive(Debug, Clone)]
pub struct LoadedImage {
    width: u32,
    height: u32,
    stride: usize,
    data: Vec<u8>,
}

impl LoadedImage {
    /// Decodes encoded image bytes (PNG, JPEG, GIF, BMP, WebP).
    pub fn decode(bytes: &[u8]) -> Result<Self, ImageError> {
        let decoded = image::load_from_memory(bytes)?.to_rgba8();
        let (width, height) = decoded.dimensions();
        Self::from_rgba(width, height, decoded.as_raw())
    }

    /// Builds an image from straight (non-premultiplied) RGBA bytes.
    pub fn from_rgba(width: u32, height: u32, rgba: &[u8]) -> Result<Self, ImageError> {
        if width == 0 || height == 0 {
            return Err(ImageError::Empty { width, height });
        }
        if width > MAX_IMAGE_DIMENSION || height > MAX_IMAGE_DIMENSION {
            return Err(ImageError::TooLarge {
                width,
                height,
                max: MAX_IMAGE_DIMENSION,
            });
        }

        let expected = width as usize * height as usize * 4;
        if rgba.len() != expected {
            return Err(ImageError::InvalidDataLength {
                expected,
                actual: rgba.len(),
            });
        }

        let stride = cairo::Format::ARgb32.stride_for_width(width)? as usize;
        let mut data = vec![0u8; stride * height as usize];

        for (src_row, dst_row) in rgba
            .chunks_exact(width as usize * 4)
            .zip(data.chunks_exact_mut(stride))
        {
            for (src, dst) in src_row.chunks_exact(4).zip(dst_row.chunks_exact_mut(4)) {
                let a = src[3] as u32;
                let premultiply = |c: u8| (c as u32 * a + 127) / 255;
                let pixel = (a << 24)
                    | (premultiply(src[0]) << 16)
                    | (premultiply(src[1]) << 8)
                    | premultiply(src[2]);
                dst.copy_from_slice(&pixel.to_ne_bytes());
            }
        }

        Ok(Self {
            width,
            height,
            stride,
            data,
        })
    }

    /// Image width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Wraps a copy of the pixels in a Cairo surface for use as a paint source.
    pub fn to_cairo_surface(&self) -> Result<cairo::ImageSurface, ImageError> {
        let surface = cairo::ImageSurface::create_for_data(
            self.data.clone(),
            cairo::Format::ARgb32,
            self.width as i32,
            self.height as i32,
            self.stride as i32,
        )?;
        Ok(surface)
    }
}
