use crate::foundation::core::FrameIndex;
use crate::foundation::error::{GaltonError, GaltonResult};
use crate::render::backend::Frame;

/// Configuration provided to a [`FrameSink`] before the first frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SinkConfig {
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Output frames per second.
    pub fps: u32,
}

impl SinkConfig {
    /// Reject zero sizes and a zero frame rate.
    pub fn validate(&self) -> GaltonResult<()> {
        if self.fps == 0 {
            return Err(GaltonError::validation("fps must be non-zero"));
        }
        if self.width == 0 || self.height == 0 {
            return Err(GaltonError::validation("sink width/height must be non-zero"));
        }
        Ok(())
    }
}

/// Consumer of rendered frames.
///
/// `push_frame` is called in strictly increasing [`FrameIndex`] order between one `begin` and
/// one `end`.
pub trait FrameSink {
    /// Called once before any frames are pushed.
    fn begin(&mut self, cfg: SinkConfig) -> GaltonResult<()>;
    /// Push one frame.
    fn push_frame(&mut self, idx: FrameIndex, frame: &Frame) -> GaltonResult<()>;
    /// Called once after the last frame is pushed.
    fn end(&mut self) -> GaltonResult<()>;
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<(FrameIndex, Frame)>,
    finished: bool,
}

impl InMemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration captured in `begin`, if any.
    pub fn config(&self) -> Option<&SinkConfig> {
        self.cfg.as_ref()
    }

    /// Captured frames in push order.
    pub fn frames(&self) -> &[(FrameIndex, Frame)] {
        &self.frames
    }

    /// `true` once `end` has been called.
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> GaltonResult<()> {
        cfg.validate()?;
        self.cfg = Some(cfg);
        self.frames.clear();
        self.finished = false;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &Frame) -> GaltonResult<()> {
        if self.cfg.is_none() {
            return Err(GaltonError::encode("in-memory sink not started"));
        }
        check_order(self.frames.last().map(|(i, _)| *i), idx)?;
        self.frames.push((idx, frame.clone()));
        Ok(())
    }

    fn end(&mut self) -> GaltonResult<()> {
        self.finished = true;
        Ok(())
    }
}

pub(crate) fn check_order(last: Option<FrameIndex>, idx: FrameIndex) -> GaltonResult<()> {
    if let Some(last) = last
        && idx <= last
    {
        return Err(GaltonError::encode(format!(
            "out-of-order frame index {} after {}",
            idx.0, last.0
        )));
    }
    Ok(())
}

pub(crate) fn check_frame_size(cfg: &SinkConfig, frame: &Frame) -> GaltonResult<()> {
    if frame.width != cfg.width || frame.height != cfg.height {
        return Err(GaltonError::validation(format!(
            "frame size mismatch: got {}x{}, expected {}x{}",
            frame.width, frame.height, cfg.width, cfg.height
        )));
    }
    if frame.data.len() != (cfg.width as usize) * (cfg.height as usize) * 4 {
        return Err(GaltonError::validation(
            "frame.data size mismatch with width*height*4",
        ));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sink.rs"]
mod tests;
