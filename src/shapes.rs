use egui::{Color32, Pos2, Rect};

use crate::raster::RasterBuffer;

/// Length of the two arrowhead strokes, in canvas units
pub const ARROW_HEAD_LENGTH: f32 = 15.0;
/// Half-angle of the arrowhead, measured from the reversed line direction
const ARROW_HEAD_ANGLE: f32 = std::f32::consts::FRAC_PI_6;

/// The primitive shapes committed between two drag points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    /// Rectangle outline over the normalized bounding box
    Square,
    /// Ellipse outline inscribed in the normalized bounding box
    Circle,
    /// Straight segment between the two points
    Line,
    /// Segment plus a two-stroke head at the end point
    Arrow,
}

impl ShapeKind {
    pub fn from_tool(tool: crate::tools::Tool) -> Option<Self> {
        match tool {
            crate::tools::Tool::Square => Some(ShapeKind::Square),
            crate::tools::Tool::Circle => Some(ShapeKind::Circle),
            crate::tools::Tool::Line => Some(ShapeKind::Line),
            crate::tools::Tool::Arrow => Some(ShapeKind::Arrow),
            _ => None,
        }
    }
}

fn to_pixel(pos: Pos2) -> (i32, i32) {
    (pos.x.round() as i32, pos.y.round() as i32)
}

/// Stamp a filled disc of the given radius; pixels past the canvas edge
/// are clipped.
fn stamp_disc(buf: &mut RasterBuffer, cx: i32, cy: i32, radius: i32, color: Color32) {
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy <= radius * radius {
                buf.set_clipped(cx + dx, cy + dy, color);
            }
        }
    }
}

/// A straight stroke between two points with a width and color: the
/// atomic unit freehand drawing is decomposed into as the pointer moves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeSegment {
    pub a: Pos2,
    pub b: Pos2,
    pub width: u32,
    pub color: Color32,
}

impl StrokeSegment {
    pub fn rasterize(&self, buf: &mut RasterBuffer) {
        draw_segment(buf, self.a, self.b, self.width, self.color);
    }
}

/// Draw one freehand stroke segment: a Bresenham walk from `a` to `b`,
/// stamping a disc of radius `width / 2` at every step.
pub fn draw_segment(buf: &mut RasterBuffer, a: Pos2, b: Pos2, width: u32, color: Color32) {
    let (x0, y0) = to_pixel(a);
    let (x1, y1) = to_pixel(b);
    let radius = (width / 2) as i32;

    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    let (mut x, mut y) = (x0, y0);

    loop {
        stamp_disc(buf, x, y, radius, color);
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            if x == x1 {
                break;
            }
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            if y == y1 {
                break;
            }
            err += dx;
            y += sy;
        }
    }
}

/// Rectangle outline: four thick edges centered on the box border
fn draw_rect_outline(buf: &mut RasterBuffer, rect: Rect, width: u32, color: Color32) {
    let (x0, y0) = to_pixel(rect.min);
    let (x1, y1) = to_pixel(rect.max);
    let half = (width / 2) as i32;
    let rest = width as i32 - 1 - half;

    // horizontal edges
    buf.fill_rect(x0 - half, y0 - half, x1 + half, y0 + rest, color);
    buf.fill_rect(x0 - half, y1 - half, x1 + half, y1 + rest, color);
    // vertical edges
    buf.fill_rect(x0 - half, y0 - half, x0 + rest, y1 + rest, color);
    buf.fill_rect(x1 - half, y0 - half, x1 + rest, y1 + rest, color);
}

/// Ellipse outline inscribed in `rect`. A pixel belongs to the outline
/// when it is inside the half-width-expanded ellipse but outside the
/// half-width-shrunk one; the annulus test gives clean thick outlines
/// without scan artifacts.
fn draw_ellipse_outline(buf: &mut RasterBuffer, rect: Rect, width: u32, color: Color32) {
    let center = rect.center();
    let (cx, cy) = to_pixel(center);
    let rx = (rect.width() / 2.0) as f64;
    let ry = (rect.height() / 2.0) as f64;
    if rx <= 0.0 || ry <= 0.0 {
        return;
    }

    let half = width as f64 / 2.0;
    let orx = rx + half;
    let ory = ry + half;
    let irx = (rx - half).max(0.0);
    let iry = (ry - half).max(0.0);

    let max_rx = orx.ceil() as i32;
    let max_ry = ory.ceil() as i32;

    for dy in -max_ry..=max_ry {
        for dx in -max_rx..=max_rx {
            let nx = dx as f64 / orx;
            let ny = dy as f64 / ory;
            if nx * nx + ny * ny > 1.0 {
                continue;
            }
            if irx > 0.0 && iry > 0.0 {
                let nx = dx as f64 / irx;
                let ny = dy as f64 / iry;
                if nx * nx + ny * ny < 1.0 {
                    continue;
                }
            }
            buf.set_clipped(cx + dx, cy + dy, color);
        }
    }
}

/// The two short strokes forming the arrowhead at `end`, each rotated
/// half the head angle away from the direction pointing back at `start`.
fn arrow_head_points(start: Pos2, end: Pos2) -> (Pos2, Pos2) {
    let angle = (start.y - end.y).atan2(start.x - end.x);
    let p1 = Pos2::new(
        end.x + ARROW_HEAD_LENGTH * (angle + ARROW_HEAD_ANGLE).cos(),
        end.y + ARROW_HEAD_LENGTH * (angle + ARROW_HEAD_ANGLE).sin(),
    );
    let p2 = Pos2::new(
        end.x + ARROW_HEAD_LENGTH * (angle - ARROW_HEAD_ANGLE).cos(),
        end.y + ARROW_HEAD_LENGTH * (angle - ARROW_HEAD_ANGLE).sin(),
    );
    (p1, p2)
}

/// Draw the final (or previewed) shape between the two drag points.
///
/// Square and Circle use the normalized bounding box of the points, so
/// dragging in any of the four directions commits the same pixels.
pub fn draw_shape(
    buf: &mut RasterBuffer,
    kind: ShapeKind,
    start: Pos2,
    end: Pos2,
    width: u32,
    color: Color32,
) {
    match kind {
        ShapeKind::Square => {
            draw_rect_outline(buf, Rect::from_two_pos(start, end), width, color);
        }
        ShapeKind::Circle => {
            draw_ellipse_outline(buf, Rect::from_two_pos(start, end), width, color);
        }
        ShapeKind::Line => {
            draw_segment(buf, start, end, width, color);
        }
        ShapeKind::Arrow => {
            draw_segment(buf, start, end, width, color);
            let (p1, p2) = arrow_head_points(start, end);
            draw_segment(buf, end, p1, width, color);
            draw_segment(buf, end, p2, width, color);
        }
    }
}
