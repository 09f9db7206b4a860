// Turn a frame buffer back into an RGB image and write it as PNG.
// Only used by `--headless ... --snapshot out.png`.

use crate::error::Error;
use crate::types::FrameBuffer;
use image::{ImageBuffer, Rgb, RgbImage};
use log::info;
use std::path::Path;

/// Unpack 0x??RRGGBB pixels into an `ImageBuffer<Rgb<u8>, Vec<u8>>`; alpha is dropped.
pub fn to_rgb_image(fb: &FrameBuffer) -> RgbImage {
    ImageBuffer::from_fn(fb.width as u32, fb.height as u32, |x, y| {
        let px = fb.pixels[y as usize * fb.width + x as usize];
        Rgb([(px >> 16) as u8, (px >> 8) as u8, px as u8])
    })
}

/// Save the frame; the format follows the file extension (use `.png`).
pub fn save(fb: &FrameBuffer, path: &Path) -> Result<(), Error> {
    to_rgb_image(fb)
        .save(path)
        .map_err(|e| Error::Snapshot(format!("{}: {e}", path.display())))?;
    info!("wrote {}x{} snapshot to {}", fb.width, fb.height, path.display());
    Ok(())
}
