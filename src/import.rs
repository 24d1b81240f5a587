use image::{DynamicImage, imageops::FilterType};

use crate::error::PaintError;
use crate::raster::RasterBuffer;

/// Transform a decoded source image of arbitrary dimensions into a
/// canvas-sized buffer: scale so the source covers the canvas while
/// preserving aspect, then center-crop the overflowing axis to exactly
/// `width` x `height`.
///
/// File decoding is the collaborator's job; this is a pure pixel
/// transform. A zero-sized source is rejected.
pub fn fit_to_canvas(
    source: &DynamicImage,
    width: u32,
    height: u32,
) -> Result<RasterBuffer, PaintError> {
    let (sw, sh) = (source.width(), source.height());
    if sw == 0 || sh == 0 {
        return Err(PaintError::InvalidImageSource(format!(
            "source image is {sw}x{sh}"
        )));
    }

    // Compare source and canvas aspect ratios without division:
    // sw/width vs sh/height.
    let wide = (sw as u64) * (height as u64);
    let tall = (sh as u64) * (width as u64);

    let (scaled_w, scaled_h) = if wide > tall {
        // wider than the canvas: scale to canvas height, crop width
        let w = ((sw as u64 * height as u64) / sh as u64) as u32;
        (w.max(width), height)
    } else if wide < tall {
        // taller than the canvas: scale to canvas width, crop height
        let h = ((sh as u64 * width as u64) / sw as u64) as u32;
        (width, h.max(height))
    } else {
        (width, height)
    };

    log::info!(
        "importing {sw}x{sh} source: scaling to {scaled_w}x{scaled_h}, cropping to {width}x{height}"
    );

    let scaled = source.resize_exact(scaled_w, scaled_h, FilterType::Triangle);
    let x_off = (scaled_w - width) / 2;
    let y_off = (scaled_h - height) / 2;
    let cropped = scaled.crop_imm(x_off, y_off, width, height).to_rgba8();

    Ok(RasterBuffer::from_rgba_image(&cropped))
}
