use std::sync::Arc;

use anyhow::Context;

use crate::foundation::error::BinderyResult;

#[derive(Clone, Debug)]
/// Decoded raster cover in straight RGBA8 form.
pub struct PreparedImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Decoded pixels, shared so plans can reference one cover many times.
    pub rgba8: Arc<image::RgbaImage>,
}

/// Decode encoded image bytes (any format the `image` crate recognizes) to RGBA8.
pub fn decode_image(bytes: &[u8]) -> BinderyResult<PreparedImage> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();

    Ok(PreparedImage {
        width,
        height,
        rgba8: Arc::new(rgba),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
