//! Galton renders generative "falling path" artwork.
//!
//! A batch of balls random-walks down a grid; the paths are revealed one at a time on a fixed
//! timer and drawn as gradient strokes with a tinted glow. The public API is built around:
//!
//! - An [`AnimatorConfig`] (JSON-loadable, with `mint` and `preview` presets)
//! - A [`PathAnimator`] driven by a [`Scheduler`] and reporting to [`AnimationEvents`]
//! - A [`CpuRenderer`] that redraws the revealed paths onto an RGBA8 surface
//! - Headless [`play_to_sink`] export into a [`FrameSink`]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod animator;
pub(crate) mod color;
pub(crate) mod config;
/// Frame sinks for exported animations.
pub mod encode;
pub(crate) mod playback;
pub(crate) mod render;
pub(crate) mod sim;

pub use crate::foundation::core::{Canvas, Direction, FrameIndex, Point, Rgba8};
pub use crate::foundation::error::{GaltonError, GaltonResult};
pub use crate::foundation::rng::Rng64;

pub use crate::animator::scheduler::{Scheduler, TimerId, VirtualScheduler};
pub use crate::animator::{AnimationEvents, AnimatorHandle, EventFns, PathAnimator, RevealState};
pub use crate::color::gradient::{Gradient, lerp_rgba8};
pub use crate::color::hex::{format_hex, parse_color};
pub use crate::color::scheme::{ColorScheme, Palette, TintPair};
pub use crate::config::{AnimatorConfig, StrokeStyle, VISIBLE_RENDER_FRACTION};
pub use crate::encode::ffmpeg::{FfmpegSink, FfmpegSinkOpts, is_ffmpeg_on_path};
pub use crate::encode::png::{PngSequenceSink, write_png};
pub use crate::encode::sink::{FrameSink, InMemorySink, SinkConfig};
pub use crate::playback::{
    PathsDump, PlaybackOpts, PlaybackStats, play_to_sink, render_still, resolve_seed,
    run_to_completion, simulate_generation,
};
pub use crate::render::backend::{Frame, RenderBackend};
pub use crate::render::cpu::CpuRenderer;
pub use crate::sim::grid::GridSpec;
pub use crate::sim::path::{Path, PathPoint, Segment, simulate_batch, simulate_path};
