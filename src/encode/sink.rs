use crate::{foundation::error::RasterResult, render::FrameRGBA};

/// Configuration provided to a [`FrameSink`] before the first frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinkConfig {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Display time of each frame.
    pub frame_delay_ms: u32,
    /// Number of frames that will be pushed.
    pub frames: usize,
}

/// Sink contract for consuming animation frames.
///
/// Ordering contract: `push_frame` is called with strictly increasing column indices, each
/// frame fully painted before the next one is started.
pub trait FrameSink {
    /// Called once before any frames are pushed.
    fn begin(&mut self, cfg: SinkConfig) -> RasterResult<()>;
    /// Push the frame of one expression column.
    fn push_frame(&mut self, column: usize, frame: &FrameRGBA) -> RasterResult<()>;
    /// Called once after the last frame is pushed.
    fn end(&mut self) -> RasterResult<()>;
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<(usize, FrameRGBA)>,
    finished: bool,
}

impl InMemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration captured in `begin`, if any.
    pub fn config(&self) -> Option<&SinkConfig> {
        self.cfg.as_ref()
    }

    /// Captured frames in push order.
    pub fn frames(&self) -> &[(usize, FrameRGBA)] {
        &self.frames
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> RasterResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        self.finished = false;
        Ok(())
    }

    fn push_frame(&mut self, column: usize, frame: &FrameRGBA) -> RasterResult<()> {
        self.frames.push((column, frame.clone()));
        Ok(())
    }

    fn end(&mut self) -> RasterResult<()> {
        self.finished = true;
        Ok(())
    }
}
