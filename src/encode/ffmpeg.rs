use crate::encode::sink::{FrameSink, SinkConfig, check_frame_size, check_order};
use crate::encode::{ensure_parent_dir, flatten_premul_over_bg};
use crate::foundation::core::{FrameIndex, Rgba8};
use crate::foundation::error::{GaltonError, GaltonResult};
use crate::render::backend::Frame;
use std::io::Read;
use std::path::PathBuf;
use std::process::{Child, ChildStdin, Command, Stdio};

/// Options for [`FfmpegSink`] MP4 output.
#[derive(Clone, Debug)]
pub struct FfmpegSinkOpts {
    /// Output MP4 file path.
    pub out_path: PathBuf,
    /// Overwrite the output file if it already exists.
    pub overwrite: bool,
    /// Background used to flatten alpha.
    pub bg: Rgba8,
}

impl FfmpegSinkOpts {
    /// Options for writing an MP4 to `out_path` over black.
    pub fn new(out_path: impl Into<PathBuf>) -> Self {
        Self {
            out_path: out_path.into(),
            overwrite: true,
            bg: Rgba8::rgb(0, 0, 0),
        }
    }
}

/// Spawns the system `ffmpeg` and streams raw opaque RGBA frames to its stdin.
pub struct FfmpegSink {
    opts: FfmpegSinkOpts,

    child: Option<Child>,
    stdin: Option<ChildStdin>,
    stderr_drain: Option<std::thread::JoinHandle<std::io::Result<Vec<u8>>>>,

    scratch: Vec<u8>,
    cfg: Option<SinkConfig>,
    last_idx: Option<FrameIndex>,
}

impl FfmpegSink {
    /// Create a sink that streams into `ffmpeg`.
    pub fn new(opts: FfmpegSinkOpts) -> Self {
        Self {
            opts,
            child: None,
            stdin: None,
            stderr_drain: None,
            scratch: Vec::new(),
            cfg: None,
            last_idx: None,
        }
    }
}

impl FrameSink for FfmpegSink {
    fn begin(&mut self, cfg: SinkConfig) -> GaltonResult<()> {
        cfg.validate()?;
        // yuv420p needs even dimensions.
        if !cfg.width.is_multiple_of(2) || !cfg.height.is_multiple_of(2) {
            return Err(GaltonError::validation(
                "ffmpeg sink width/height must be even",
            ));
        }

        ensure_parent_dir(&self.opts.out_path)?;
        if !self.opts.overwrite && self.opts.out_path.exists() {
            return Err(GaltonError::validation(format!(
                "output file '{}' already exists",
                self.opts.out_path.display()
            )));
        }
        if !is_ffmpeg_on_path() {
            return Err(GaltonError::encode(
                "ffmpeg is required for MP4 encoding, but was not found on PATH",
            ));
        }

        let mut cmd = Command::new("ffmpeg");
        cmd.stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped());
        cmd.arg(if self.opts.overwrite { "-y" } else { "-n" });
        cmd.args([
            "-loglevel",
            "error",
            "-f",
            "rawvideo",
            "-pix_fmt",
            "rgba",
            "-s",
            &format!("{}x{}", cfg.width, cfg.height),
            "-r",
            &cfg.fps.to_string(),
            "-i",
            "pipe:0",
            "-an",
            "-c:v",
            "libx264",
            "-pix_fmt",
            "yuv420p",
            "-movflags",
            "+faststart",
        ]);
        cmd.arg(&self.opts.out_path);

        let mut child = cmd.spawn().map_err(|e| {
            GaltonError::encode(format!(
                "failed to spawn ffmpeg (is it installed and on PATH?): {e}"
            ))
        })?;
        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| GaltonError::encode("failed to open ffmpeg stdin"))?;
        let mut stderr = child
            .stderr
            .take()
            .ok_or_else(|| GaltonError::encode("failed to open ffmpeg stderr"))?;
        let stderr_drain = std::thread::spawn(move || {
            let mut bytes = Vec::new();
            stderr.read_to_end(&mut bytes)?;
            Ok(bytes)
        });

        tracing::debug!(
            out = %self.opts.out_path.display(),
            width = cfg.width,
            height = cfg.height,
            fps = cfg.fps,
            "spawned ffmpeg"
        );
        self.scratch = vec![0u8; (cfg.width as usize) * (cfg.height as usize) * 4];
        self.child = Some(child);
        self.stdin = Some(stdin);
        self.stderr_drain = Some(stderr_drain);
        self.cfg = Some(cfg);
        self.last_idx = None;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &Frame) -> GaltonResult<()> {
        let cfg = self
            .cfg
            .as_ref()
            .ok_or_else(|| GaltonError::encode("ffmpeg sink not started"))?;
        check_order(self.last_idx, idx)?;
        check_frame_size(cfg, frame)?;
        self.last_idx = Some(idx);

        if frame.premultiplied {
            flatten_premul_over_bg(&mut self.scratch, &frame.data, self.opts.bg)?;
        } else {
            let premul = premultiply(&frame.data);
            flatten_premul_over_bg(&mut self.scratch, &premul, self.opts.bg)?;
        }

        let Some(stdin) = self.stdin.as_mut() else {
            return Err(GaltonError::encode("ffmpeg sink is already finalized"));
        };
        use std::io::Write as _;
        stdin.write_all(&self.scratch).map_err(|e| {
            GaltonError::encode(format!("failed to write frame to ffmpeg stdin: {e}"))
        })?;
        Ok(())
    }

    fn end(&mut self) -> GaltonResult<()> {
        drop(self.stdin.take());
        let mut child = self
            .child
            .take()
            .ok_or_else(|| GaltonError::encode("ffmpeg sink not started"))?;

        let status = child
            .wait()
            .map_err(|e| GaltonError::encode(format!("failed to wait for ffmpeg: {e}")))?;
        let stderr_bytes = match self.stderr_drain.take() {
            Some(handle) => handle
                .join()
                .map_err(|_| GaltonError::encode("ffmpeg stderr drain thread panicked"))?
                .map_err(|e| GaltonError::encode(format!("ffmpeg stderr read failed: {e}")))?,
            None => Vec::new(),
        };
        if !status.success() {
            let stderr = String::from_utf8_lossy(&stderr_bytes);
            return Err(GaltonError::encode(format!(
                "ffmpeg exited with status {}: {}",
                status,
                stderr.trim()
            )));
        }

        self.cfg = None;
        Ok(())
    }
}

fn premultiply(straight: &[u8]) -> Vec<u8> {
    straight
        .chunks_exact(4)
        .flat_map(|px| Rgba8::rgba(px[0], px[1], px[2], px[3]).to_premul())
        .collect()
}

/// Return `true` when `ffmpeg` can be invoked from `PATH`.
pub fn is_ffmpeg_on_path() -> bool {
    Command::new("ffmpeg")
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

#[cfg(test)]
#[path = "../../tests/unit/encode/ffmpeg.rs"]
mod tests;
