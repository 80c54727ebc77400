use std::io::Write;

use anyhow::Context;
use image::{ExtendedColorType, ImageEncoder};

use crate::{
    config::args::ImageFormat,
    foundation::error::RasterResult,
    render::FrameRGBA,
};

pub const JPEG_QUALITY: u8 = 90;

/// Encode one frame. Opaque formats expect a frame already flattened over its background.
pub fn encode_still<W: Write>(frame: &FrameRGBA, format: ImageFormat, out: W) -> RasterResult<()> {
    let rgba = frame.to_straight_rgba();
    let (w, h) = (frame.width, frame.height);
    match format {
        ImageFormat::Png => image::codecs::png::PngEncoder::new(out)
            .write_image(&rgba, w, h, ExtendedColorType::Rgba8)
            .context("encode png")?,
        ImageFormat::Jpeg => {
            let rgb = drop_alpha(&rgba);
            image::codecs::jpeg::JpegEncoder::new_with_quality(out, JPEG_QUALITY)
                .encode(&rgb, w, h, ExtendedColorType::Rgb8)
                .context("encode jpeg")?;
        }
        ImageFormat::Gif => image::codecs::gif::GifEncoder::new(out)
            .encode(&rgba, w, h, ExtendedColorType::Rgba8)
            .context("encode gif")?,
    }
    Ok(())
}

/// Encode into a fresh buffer.
pub fn encode_to_vec(frame: &FrameRGBA, format: ImageFormat) -> RasterResult<Vec<u8>> {
    let mut out = Vec::new();
    encode_still(frame, format, &mut out)?;
    Ok(out)
}

pub(crate) fn drop_alpha(rgba: &[u8]) -> Vec<u8> {
    let mut rgb = Vec::with_capacity(rgba.len() / 4 * 3);
    for px in rgba.chunks_exact(4) {
        rgb.extend_from_slice(&px[..3]);
    }
    rgb
}

#[cfg(test)]
#[path = "../../tests/unit/encode/still.rs"]
mod tests;
