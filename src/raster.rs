use egui::{Color32, ColorImage};
use image::RgbaImage;

use crate::error::PaintError;

/// A fixed-dimension RGBA pixel grid. Dimensions never change after
/// creation; resizing the canvas is not supported.
#[derive(Clone)]
pub struct RasterBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Color32>,
}

/// Immutable full copy of a buffer's pixel contents at one instant.
///
/// Snapshots never alias the live buffer, so later edits cannot corrupt
/// recorded history.
#[derive(Clone, PartialEq)]
pub struct Snapshot {
    pixels: Vec<Color32>,
}

impl RasterBuffer {
    pub fn new(width: u32, height: u32, background: Color32) -> Self {
        Self {
            width,
            height,
            pixels: vec![background; (width * height) as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    fn index(&self, x: i32, y: i32) -> Result<usize, PaintError> {
        if self.contains(x, y) {
            Ok(y as usize * self.width as usize + x as usize)
        } else {
            Err(PaintError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }

    pub fn get(&self, x: i32, y: i32) -> Result<Color32, PaintError> {
        Ok(self.pixels[self.index(x, y)?])
    }

    pub fn set(&mut self, x: i32, y: i32, color: Color32) -> Result<(), PaintError> {
        let idx = self.index(x, y)?;
        self.pixels[idx] = color;
        Ok(())
    }

    /// Write a pixel, silently skipping coordinates off the canvas.
    ///
    /// Only for the rasterizer: a wide brush stamped along the border
    /// legitimately spills past the edge. Everything else goes through
    /// the strict [`RasterBuffer::set`].
    pub(crate) fn set_clipped(&mut self, x: i32, y: i32, color: Color32) {
        if self.contains(x, y) {
            let idx = y as usize * self.width as usize + x as usize;
            self.pixels[idx] = color;
        }
    }

    /// Overwrite every pixel unconditionally ("new image", eraser bucket)
    pub fn fill_all(&mut self, color: Color32) {
        self.pixels.fill(color);
    }

    /// Filled axis-aligned rectangle with inclusive corners, clipped to
    /// the canvas. Corners may be given in any order.
    pub fn fill_rect(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color32) {
        let (x0, x1) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
        let (y0, y1) = if y0 <= y1 { (y0, y1) } else { (y1, y0) };
        let x0 = x0.max(0);
        let y0 = y0.max(0);
        let x1 = x1.min(self.width as i32 - 1);
        let y1 = y1.min(self.height as i32 - 1);
        for y in y0..=y1 {
            let row = y as usize * self.width as usize;
            for x in x0..=x1 {
                self.pixels[row + x as usize] = color;
            }
        }
    }

    /// Full deep copy of the current pixel contents
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            pixels: self.pixels.clone(),
        }
    }

    /// Atomic whole-buffer replacement from a snapshot (undo/redo path).
    /// Snapshots only ever come from this buffer, so the lengths match.
    pub fn restore(&mut self, snapshot: &Snapshot) {
        debug_assert_eq!(self.pixels.len(), snapshot.pixels.len());
        self.pixels.copy_from_slice(&snapshot.pixels);
    }

    pub fn pixels(&self) -> &[Color32] {
        &self.pixels
    }

    /// Render/clipboard surface for the egui chrome
    pub fn to_color_image(&self) -> ColorImage {
        ColorImage {
            size: [self.width as usize, self.height as usize],
            pixels: self.pixels.clone(),
        }
    }

    /// Export surface for the external PNG encoder
    pub fn to_rgba_image(&self) -> RgbaImage {
        let mut out = RgbaImage::new(self.width, self.height);
        for (i, px) in self.pixels.iter().enumerate() {
            let x = (i % self.width as usize) as u32;
            let y = (i / self.width as usize) as u32;
            out.put_pixel(x, y, image::Rgba(px.to_array()));
        }
        out
    }

    /// Adopt decoded pixel data from the load path
    pub fn from_rgba_image(img: &RgbaImage) -> Self {
        let pixels = img
            .pixels()
            .map(|p| Color32::from_rgba_premultiplied(p[0], p[1], p[2], p[3]))
            .collect();
        Self {
            width: img.width(),
            height: img.height(),
            pixels,
        }
    }
}
