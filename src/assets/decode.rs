use std::path::Path;

use crate::foundation::{
    core::CanvasSize,
    error::{YearbarError, YearbarResult},
};

/// Decoded base image, flattened to opaque RGBA8.
///
/// Any alpha in the source is discarded (not composited), so every pixel has
/// `a == 255` and the buffer is valid as both straight and premultiplied RGBA.
#[derive(Clone, Debug)]
pub struct BaseImage {
    pub size: CanvasSize,
    /// Row-major, tightly packed.
    pub rgba8: Vec<u8>,
}

/// Read and decode the base image at `path`.
pub fn load_base_image(path: &Path) -> YearbarResult<BaseImage> {
    let bytes = std::fs::read(path).map_err(|e| YearbarError::resource(path, e))?;
    decode_base_image(&bytes).map_err(|e| YearbarError::resource(path, format!("{e:#}")))
}

/// Decode base image bytes in any format the `image` crate recognizes.
pub fn decode_base_image(bytes: &[u8]) -> anyhow::Result<BaseImage> {
    use anyhow::Context as _;

    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    let rgb = dyn_img.to_rgb8();
    let (width, height) = rgb.dimensions();

    let mut rgba8 = Vec::with_capacity(width as usize * height as usize * 4);
    for px in rgb.pixels() {
        rgba8.extend_from_slice(&[px[0], px[1], px[2], 255]);
    }

    Ok(BaseImage {
        size: CanvasSize { width, height },
        rgba8,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
