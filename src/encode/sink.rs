use crate::foundation::error::{BlastError, BlastResult};
use crate::job::model::Quality;

/// Configuration provided to a [`VideoSink`] before the first frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SinkConfig {
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Output frames per second, from the host time unit table.
    pub fps: f64,
    /// Quality preset selecting the codec.
    pub quality: Quality,
}

/// One decoded frame as packed row-major RGB8.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// `width * height * 3` bytes of packed RGB.
    pub data: Vec<u8>,
}

/// Sink contract for encoding one job's frames in playback order.
///
/// Lifecycle: `begin` once, `push_frame` per frame in playback order, `end`
/// once. A sink instance produces exactly one video stream.
pub trait VideoSink {
    /// Called once before any frames are pushed.
    fn begin(&mut self, cfg: SinkConfig) -> BlastResult<()>;
    /// Push one frame in playback order.
    fn push_frame(&mut self, frame: &FrameImage) -> BlastResult<()>;
    /// Finalize and close the stream after the last frame.
    fn end(&mut self) -> BlastResult<()>;
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<FrameImage>,
    finalized: bool,
}

impl InMemorySink {
    /// Create a new in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the configuration captured in `begin`, if any.
    pub fn config(&self) -> Option<SinkConfig> {
        self.cfg
    }

    /// Borrow the captured frames.
    pub fn frames(&self) -> &[FrameImage] {
        &self.frames
    }

    /// Return `true` once `end` has run.
    pub fn is_finalized(&self) -> bool {
        self.finalized
    }
}

impl VideoSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> BlastResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        self.finalized = false;
        Ok(())
    }

    fn push_frame(&mut self, frame: &FrameImage) -> BlastResult<()> {
        if self.cfg.is_none() {
            return Err(BlastError::encode("in-memory sink not started"));
        }
        self.frames.push(frame.clone());
        Ok(())
    }

    fn end(&mut self) -> BlastResult<()> {
        if self.cfg.is_none() {
            return Err(BlastError::encode("in-memory sink not started"));
        }
        self.finalized = true;
        Ok(())
    }
}
