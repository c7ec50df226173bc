use crate::encode::sink::{FrameSink, SinkConfig, check_frame_size, check_order};
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{GaltonError, GaltonResult};
use crate::render::backend::Frame;
use anyhow::Context as _;
use std::path::{Path, PathBuf};

/// Writes every frame as `<dir>/<prefix>_<index:05>.png` (straight alpha).
#[derive(Debug)]
pub struct PngSequenceSink {
    dir: PathBuf,
    prefix: String,
    cfg: Option<SinkConfig>,
    last_idx: Option<FrameIndex>,
    written: Vec<PathBuf>,
}

impl PngSequenceSink {
    /// Create a sink writing into `dir` with the default `frame` prefix.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            prefix: "frame".to_owned(),
            cfg: None,
            last_idx: None,
            written: Vec::new(),
        }
    }

    /// Override the file-name prefix.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Path a given frame is written to.
    pub fn frame_path(&self, idx: FrameIndex) -> PathBuf {
        self.dir.join(format!("{}_{:05}.png", self.prefix, idx.0))
    }

    /// Files written so far, in order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl FrameSink for PngSequenceSink {
    fn begin(&mut self, cfg: SinkConfig) -> GaltonResult<()> {
        cfg.validate()?;
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("failed to create frame directory '{}'", self.dir.display()))?;
        self.cfg = Some(cfg);
        self.last_idx = None;
        self.written.clear();
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &Frame) -> GaltonResult<()> {
        let cfg = self
            .cfg
            .as_ref()
            .ok_or_else(|| GaltonError::encode("png sink not started"))?;
        check_order(self.last_idx, idx)?;
        check_frame_size(cfg, frame)?;
        self.last_idx = Some(idx);

        let path = self.frame_path(idx);
        if frame.premultiplied {
            write_png(&path, &frame.clone().into_straight())?;
        } else {
            write_png(&path, frame)?;
        }
        tracing::trace!(path = %path.display(), "wrote frame");
        self.written.push(path);
        Ok(())
    }

    fn end(&mut self) -> GaltonResult<()> {
        if self.cfg.take().is_none() {
            return Err(GaltonError::encode("png sink not started"));
        }
        tracing::debug!(frames = self.written.len(), dir = %self.dir.display(), "png sequence done");
        Ok(())
    }
}

/// Write a straight-alpha frame as a PNG file.
pub fn write_png(path: &Path, frame: &Frame) -> GaltonResult<()> {
    image::save_buffer_with_format(
        path,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
