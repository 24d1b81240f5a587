use ab_glyph::{Font, PxScale, ScaleFont, point};
use egui::{Color32, Pos2};

use crate::raster::RasterBuffer;

/// Blend `color` over the existing pixel with the given coverage
fn blend(dst: Color32, color: Color32, coverage: f32) -> Color32 {
    let a = coverage.clamp(0.0, 1.0);
    let lerp = |d: u8, s: u8| (d as f32 + (s as f32 - d as f32) * a).round() as u8;
    Color32::from_rgba_premultiplied(
        lerp(dst.r(), color.r()),
        lerp(dst.g(), color.g()),
        lerp(dst.b(), color.b()),
        lerp(dst.a(), color.a()),
    )
}

/// Rasterize a line of text into the buffer.
///
/// `pos` is the baseline origin of the first glyph, matching the
/// draw-at-point semantics of the text tool. The chrome resolves the
/// font descriptor (family, size) and passes the loaded face; the core
/// only stamps glyph coverage. Glyphs running past the canvas edge are
/// clipped.
pub fn draw_text<F: Font>(
    buf: &mut RasterBuffer,
    pos: Pos2,
    text: &str,
    font: &F,
    size: f32,
    color: Color32,
) {
    let scale = PxScale::from(size);
    let scaled = font.as_scaled(scale);

    let mut caret = pos.x;
    let mut previous = None;
    for ch in text.chars() {
        let id = font.glyph_id(ch);
        if let Some(prev) = previous {
            caret += scaled.kern(prev, id);
        }
        let glyph = id.with_scale_and_position(scale, point(caret, pos.y));
        caret += scaled.h_advance(id);
        previous = Some(id);

        if let Some(outlined) = font.outline_glyph(glyph) {
            let bounds = outlined.px_bounds();
            outlined.draw(|gx, gy, coverage| {
                if coverage <= 0.0 {
                    return;
                }
                let x = bounds.min.x as i32 + gx as i32;
                let y = bounds.min.y as i32 + gy as i32;
                if let Ok(under) = buf.get(x, y) {
                    buf.set_clipped(x, y, blend(under, color, coverage));
                }
            });
        }
    }
}
