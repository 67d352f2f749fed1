//! Rendering primitives and the raster surface (Cairo-based).
//!
//! This module defines the core drawing types used by the pad:
//! - [`Color`]: RGBA color representation with predefined color constants
//! - [`Shape`]: Marks produced by the tool controller (segments, text)
//! - [`LoadedImage`]: Decoded image used as the underlay
//! - [`Surface`]: The 800×600 pixel grid and the primitives that write it

pub mod color;
pub mod font;
pub mod loaded_image;
pub mod render;
pub mod shape;
pub mod surface;

// Re-export commonly used types at module level
pub use color::{Color, ColorParseError};
pub use font::FontDescriptor;
pub use loaded_image::{ImageError, LoadedImage};
pub use render::{render_segment, render_shape, render_text};
pub use shape::Shape;
pub use surface::{SURFACE_HEIGHT, SURFACE_WIDTH, Surface, SurfaceError};

pub use color::{BACKGROUND, BLACK, BLUE, GREEN, ORANGE, PINK, RED, TRANSPARENT, WHITE, YELLOW};
