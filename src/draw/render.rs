//! Cairo-based rendering functions for marks and the image underlay.

use super::color::Color;
use super::font::FontDescriptor;
use super::shape::Shape;
use crate::util::FitRect;

/// Renders a single mark to a Cairo context.
///
/// Dispatches to the appropriate internal rendering function based on shape type.
///
/// # Arguments
/// * `ctx` - Cairo drawing context to render to
/// * `shape` - The mark to render
pub fn render_shape(ctx: &cairo::Context, shape: &Shape) {
    match shape {
        Shape::Segment {
            x1,
            y1,
            x2,
            y2,
            color,
            thick,
        } => {
            render_segment(ctx, *x1, *y1, *x2, *y2, *color, *thick);
        }
        Shape::Text {
            x,
            y,
            text,
            color,
            size,
            font_descriptor,
        } => {
            render_text(ctx, *x, *y, text, *color, *size, font_descriptor);
        }
    }
}

/// Render one stroke segment with round caps and joins.
///
/// Round caps make consecutive segments that share an endpoint overlap in a
/// full disc, so a polyline assembled segment by segment has no gaps.
pub fn render_segment(
    ctx: &cairo::Context,
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
    color: Color,
    thick: f64,
) {
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.set_line_width(thick);
    ctx.set_line_cap(cairo::LineCap::Round);
    ctx.set_line_join(cairo::LineJoin::Round);

    ctx.move_to(x1 as f64, y1 as f64);
    ctx.line_to(x2 as f64, y2 as f64);
    if let Err(err) = ctx.stroke() {
        log::debug!("Segment stroke failed: {err}");
    }
}

/// Renders text with its left edge at `x` and its vertical center at `y`.
///
/// Uses Pango for font selection and shaping. Text containing newline
/// characters is laid out across several lines and the whole block is
/// centered on `y`.
///
/// # Arguments
/// * `ctx` - Cairo drawing context to render to
/// * `x` - Left edge of the text
/// * `y` - Vertical center of the text block
/// * `text` - Text content to render
/// * `color` - Fill color
/// * `size` - Font size in pixels
/// * `font_descriptor` - Font face
pub fn render_text(
    ctx: &cairo::Context,
    x: i32,
    y: i32,
    text: &str,
    color: Color,
    size: f64,
    font_descriptor: &FontDescriptor,
) {
    ctx.save().ok();

    let layout = pangocairo::functions::create_layout(ctx);
    layout.set_font_description(Some(&font_descriptor.to_pango_description(size)));
    layout.set_alignment(pango::Alignment::Left);
    layout.set_text(text);

    let (_, logical_height) = layout.pixel_size();
    let top = y as f64 - logical_height as f64 / 2.0;

    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.move_to(x as f64, top);
    pangocairo::functions::show_layout(ctx, &layout);

    ctx.restore().ok();
}

/// Draws an image scaled into its aspect-fit rectangle.
///
/// The caller computes `fit` with [`crate::util::fit_rect`] and wraps the
/// pixels with [`to_cairo_surface`](super::LoadedImage::to_cairo_surface); this only applies the
/// transform and paints the image area.
pub fn render_fitted_image(
    ctx: &cairo::Context,
    source: &cairo::ImageSurface,
    fit: FitRect,
) -> Result<(), cairo::Error> {
    ctx.save()?;
    ctx.translate(fit.x, fit.y);
    ctx.scale(fit.scale, fit.scale);
    ctx.set_source_surface(source, 0.0, 0.0)?;
    // Pad keeps edge pixels opaque when the filter samples past the border
    ctx.source().set_extend(cairo::Extend::Pad);
    ctx.rectangle(0.0, 0.0, source.width() as f64, source.height() as f64);
    let filled = ctx.fill();
    ctx.restore()?;
    filled
}

/// Clears every pixel of the target to fully transparent.
pub fn clear_surface(ctx: &cairo::Context) {
    ctx.save().ok();
    ctx.set_operator(cairo::Operator::Clear);
    let _ = ctx.paint();
    ctx.restore().ok();
}
