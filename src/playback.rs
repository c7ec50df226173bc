//! Headless driver: virtual clock → animator → renderer → sink.

use crate::animator::scheduler::VirtualScheduler;
use crate::animator::{AnimationEvents, AnimatorHandle, PathAnimator};
use crate::color::scheme::ColorScheme;
use crate::config::AnimatorConfig;
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::{Canvas, FrameIndex};
use crate::foundation::error::{GaltonError, GaltonResult};
use crate::foundation::rng::Rng64;
use crate::render::backend::{Frame, RenderBackend};
use crate::render::cpu::CpuRenderer;
use crate::sim::path::Path;
use std::time::Duration;

/// Frame pacing for exported animations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlaybackOpts {
    /// Output frame rate. One frame is emitted per reveal tick.
    pub fps: u32,
    /// Copies of the final frame appended after the reveal completes.
    pub hold_frames: u32,
    /// Stop after this many frames (hold frames included).
    pub max_frames: Option<u64>,
}

impl Default for PlaybackOpts {
    fn default() -> Self {
        Self {
            fps: 20,
            hold_frames: 20,
            max_frames: None,
        }
    }
}

impl PlaybackOpts {
    /// Pace frames at the reveal interval of `cfg` and hold the result for one second.
    pub fn for_config(cfg: &AnimatorConfig) -> Self {
        let fps = (1000 / cfg.reveal_interval_ms.max(1)).clamp(1, 240) as u32;
        Self {
            fps,
            hold_frames: fps,
            max_frames: None,
        }
    }
}

/// Summary of one playback run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlaybackStats {
    /// Frames pushed to the sink.
    pub frames: u64,
    /// Timers dispatched to the animator.
    pub ticks: u64,
    /// Virtual time at which the reveal completed.
    pub elapsed: Duration,
}

/// Seed recorded in `cfg`, drawing and storing a fresh one when it is unset.
pub fn resolve_seed(cfg: &mut AnimatorConfig) -> u64 {
    *cfg.seed.get_or_insert_with(|| Rng64::from_entropy().next_u64())
}

/// Fire `animator`'s timers until a generation is fully revealed.
///
/// A generation already in progress is played out as is. An idle or completed animator is
/// mounted first, so its deferred kick-off starts a fresh generation. `on_redraw` runs after
/// every dispatched timer that changed the revealed set or scheme.
pub fn run_to_completion<E, F>(
    animator: &mut PathAnimator<VirtualScheduler, E>,
    mut on_redraw: F,
) -> GaltonResult<u64>
where
    E: AnimationEvents,
    F: FnMut(&PathAnimator<VirtualScheduler, E>) -> GaltonResult<bool>,
{
    let idle = animator.generation() == 0 || animator.is_complete();
    if idle {
        animator.mount();
    }
    let target = animator.generation() + u64::from(idle);
    let mut ticks = 0u64;
    while animator.generation() < target || !animator.is_complete() {
        let Some(id) = animator.scheduler_mut().fire_next() else {
            return Err(GaltonError::render("playback stalled: no live timers"));
        };
        if !animator.on_timer(id) {
            continue;
        }
        ticks += 1;
        if animator.take_redraw() && !on_redraw(animator)? {
            break;
        }
    }
    Ok(ticks)
}

/// Play one generation into `sink`, one frame per reveal tick plus `hold_frames` at the end.
#[tracing::instrument(skip_all, fields(fps = opts.fps, hold = opts.hold_frames))]
pub fn play_to_sink<E, R, K>(
    animator: &mut PathAnimator<VirtualScheduler, E>,
    renderer: &mut R,
    sink: &mut K,
    opts: &PlaybackOpts,
) -> GaltonResult<PlaybackStats>
where
    E: AnimationEvents,
    R: RenderBackend,
    K: FrameSink + ?Sized,
{
    let canvas = animator.config().canvas;
    sink.begin(SinkConfig {
        width: canvas.width,
        height: canvas.height,
        fps: opts.fps,
    })?;

    let limit = opts.max_frames.unwrap_or(u64::MAX);
    let mut frames = 0u64;
    let mut last: Option<Frame> = None;

    let ticks = run_to_completion(animator, |a| {
        if frames >= limit {
            return Ok(false);
        }
        renderer.redraw(a.scheme(), a.revealed())?;
        let frame = renderer
            .snapshot()
            .ok_or_else(|| GaltonError::render("renderer has no surface attached"))?;
        sink.push_frame(FrameIndex(frames), &frame)?;
        frames += 1;
        last = Some(frame);
        Ok(true)
    })?;

    if let Some(frame) = last.as_ref() {
        for _ in 0..opts.hold_frames {
            if frames >= limit {
                break;
            }
            sink.push_frame(FrameIndex(frames), frame)?;
            frames += 1;
        }
    }
    sink.end()?;

    let elapsed = animator.scheduler().now();
    tracing::debug!(frames, ticks, elapsed_ms = elapsed.as_millis() as u64, "playback done");
    Ok(PlaybackStats {
        frames,
        ticks,
        elapsed,
    })
}

/// Render the fully revealed first generation of `cfg`.
#[tracing::instrument(skip_all)]
pub fn render_still(cfg: AnimatorConfig) -> GaltonResult<Frame> {
    let mut renderer = CpuRenderer::with_surface(cfg.canvas, cfg.stroke)?;
    let mut animator = PathAnimator::new(cfg, VirtualScheduler::new(), ())?;
    run_to_completion(&mut animator, |_| Ok(true))?;
    renderer.redraw(animator.scheme(), animator.revealed())?;
    renderer
        .snapshot()
        .ok_or_else(|| GaltonError::render("renderer has no surface attached"))
}

/// One simulated generation, serializable for inspection.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PathsDump {
    /// Seed the generation was drawn from.
    pub seed: Option<u64>,
    /// Canvas the paths were centred for.
    pub canvas: Canvas,
    /// Scheme shared by every path.
    pub scheme: ColorScheme,
    /// Simulated paths in reveal order.
    pub paths: Vec<Path>,
}

/// Simulate the first generation of `cfg` without rendering it.
pub fn simulate_generation(cfg: AnimatorConfig) -> GaltonResult<PathsDump> {
    let seed = cfg.seed;
    let canvas = cfg.canvas;
    let mut animator = PathAnimator::new(cfg, VirtualScheduler::new(), ())?;
    animator.regenerate();
    let scheme = animator
        .scheme()
        .cloned()
        .ok_or_else(|| GaltonError::render("no color scheme after regenerate"))?;
    Ok(PathsDump {
        seed,
        canvas,
        scheme,
        paths: animator.batch().to_vec(),
    })
}

#[cfg(test)]
#[path = "../tests/unit/playback.rs"]
mod tests;
