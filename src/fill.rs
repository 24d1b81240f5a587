use egui::Color32;

use crate::error::PaintError;
use crate::raster::RasterBuffer;

/// 4-connected flood fill: recolor the contiguous region of pixels that
/// match the seed's color, reachable through edge-adjacent (never
/// diagonal) neighbors.
///
/// Uses an explicit work stack so large regions cannot exhaust the call
/// stack, and compares against a copy of the pre-fill pixels so writes
/// made during the fill are never re-read as the target color. An
/// out-of-bounds seed mutates nothing and reports `OutOfBounds`.
pub fn flood_fill(
    buffer: &mut RasterBuffer,
    x: i32,
    y: i32,
    fill: Color32,
) -> Result<(), PaintError> {
    let target = buffer.get(x, y)?;
    if target == fill {
        // Already that color; recoloring would visit every pixel for nothing.
        log::debug!("flood fill at ({x}, {y}): target equals fill color, skipping");
        return Ok(());
    }

    let width = buffer.width() as usize;
    let height = buffer.height() as usize;
    let before = buffer.pixels().to_vec();
    let mut visited = vec![false; width * height];
    let mut stack = vec![(x, y)];
    let mut touched = 0usize;

    while let Some((x, y)) = stack.pop() {
        let idx = y as usize * width + x as usize;
        if visited[idx] {
            continue;
        }
        visited[idx] = true;

        if before[idx] != target {
            continue;
        }
        buffer.set(x, y, fill)?;
        touched += 1;

        for (nx, ny) in [(x - 1, y), (x + 1, y), (x, y - 1), (x, y + 1)] {
            if nx >= 0 && ny >= 0 && (nx as usize) < width && (ny as usize) < height {
                stack.push((nx, ny));
            }
        }
    }

    log::debug!("flood fill at ({x}, {y}): recolored {touched} pixels");
    Ok(())
}
