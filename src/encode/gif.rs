use std::io::Write;

use anyhow::Context;
use image::{
    Delay, Frame, RgbaImage,
    codecs::gif::{GifEncoder, Repeat},
};

use crate::{
    encode::sink::{FrameSink, SinkConfig},
    foundation::error::{RasterError, RasterResult},
    render::FrameRGBA,
};

/// Display time of each animation frame.
pub const FRAME_DELAY_MS: u32 = 1000;
/// Quantizer speed passed to the GIF encoder; 10 is the usual quality/speed balance.
const QUANTIZER_SPEED: i32 = 10;

/// Animated GIF writer: infinite loop, fixed frame delay.
///
/// The encoder is created lazily in `begin`, so nothing is written to `out` when a render
/// fails before its first frame. The GIF trailer is written by `end`.
pub struct GifSink<W: Write> {
    out: Option<W>,
    encoder: Option<GifEncoder<W>>,
    cfg: Option<SinkConfig>,
    last_column: Option<usize>,
}

impl<W: Write> GifSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Some(out),
            encoder: None,
            cfg: None,
            last_column: None,
        }
    }
}

impl<W: Write> FrameSink for GifSink<W> {
    fn begin(&mut self, cfg: SinkConfig) -> RasterResult<()> {
        if cfg.width == 0 || cfg.height == 0 {
            return Err(RasterError::invalid_operation(
                "gif sink width/height must be non-zero",
            ));
        }
        if cfg.width > u32::from(u16::MAX) || cfg.height > u32::from(u16::MAX) {
            return Err(RasterError::invalid_operation(format!(
                "gif frames are limited to {0}x{0}, got {1}x{2}",
                u16::MAX,
                cfg.width,
                cfg.height
            )));
        }
        let out = self
            .out
            .take()
            .ok_or_else(|| RasterError::invalid_operation("gif sink already started"))?;

        let mut encoder = GifEncoder::new_with_speed(out, QUANTIZER_SPEED);
        encoder
            .set_repeat(Repeat::Infinite)
            .context("gif loop extension")?;
        self.encoder = Some(encoder);
        self.cfg = Some(cfg);
        Ok(())
    }

    fn push_frame(&mut self, column: usize, frame: &FrameRGBA) -> RasterResult<()> {
        let (Some(cfg), Some(encoder)) = (self.cfg.as_ref(), self.encoder.as_mut()) else {
            return Err(RasterError::invalid_operation(
                "gif sink push_frame called before begin",
            ));
        };
        if self.last_column.is_some_and(|last| column <= last) {
            return Err(RasterError::invalid_operation(format!(
                "gif frames must be pushed in column order ({column} after {:?})",
                self.last_column
            )));
        }
        if frame.width != cfg.width || frame.height != cfg.height {
            return Err(RasterError::invalid_operation(format!(
                "frame is {}x{}, sink expects {}x{}",
                frame.width, frame.height, cfg.width, cfg.height
            )));
        }

        let image = RgbaImage::from_raw(frame.width, frame.height, frame.to_straight_rgba())
            .ok_or_else(|| RasterError::invalid_operation("frame buffer size mismatch"))?;
        let delay = Delay::from_numer_denom_ms(cfg.frame_delay_ms, 1);
        encoder
            .encode_frame(Frame::from_parts(image, 0, 0, delay))
            .with_context(|| format!("encode gif frame {column}"))?;
        self.last_column = Some(column);
        tracing::debug!(column, "gif frame encoded");
        Ok(())
    }

    fn end(&mut self) -> RasterResult<()> {
        // Dropping the encoder writes the trailer.
        if self.encoder.take().is_none() {
            return Err(RasterError::invalid_operation("gif sink end called before begin"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/gif.rs"]
mod tests;
