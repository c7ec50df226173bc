//! The path animator: generation lifecycle, reveal timer, host notifications.

pub(crate) mod scheduler;

use crate::animator::scheduler::{Scheduler, TimerId};
use crate::color::scheme::ColorScheme;
use crate::config::AnimatorConfig;
use crate::foundation::error::GaltonResult;
use crate::foundation::rng::Rng64;
use crate::sim::path::{Path, simulate_batch};

/// Host notifications fired by the animator.
pub trait AnimationEvents {
    /// Called synchronously at the top of every `regenerate`.
    fn on_animation_start(&mut self) {}
    /// Called once after the last path of a completed generation is revealed.
    fn on_animation_end(&mut self) {}
}

impl AnimationEvents for () {}

/// Adapts a pair of closures into [`AnimationEvents`].
pub struct EventFns<S, E> {
    /// Start callback.
    pub start: S,
    /// End callback.
    pub end: E,
}

impl<S: FnMut(), E: FnMut()> AnimationEvents for EventFns<S, E> {
    fn on_animation_start(&mut self) {
        (self.start)()
    }

    fn on_animation_end(&mut self) {
        (self.end)()
    }
}

/// Capabilities a host view gets from the animator.
pub trait AnimatorHandle {
    /// Abandon any in-progress reveal and start a fresh generation.
    fn regenerate(&mut self);
    /// Width a host should give companion controls (0.4 × canvas width).
    fn visible_render_width(&self) -> f64;
}

/// Reveal progress of the current generation.
#[derive(Clone, Debug, Default)]
pub struct RevealState {
    batch: Vec<Path>,
    revealed_count: usize,
    timer: Option<TimerId>,
}

impl RevealState {
    fn new(batch: Vec<Path>, timer: TimerId) -> Self {
        Self {
            batch,
            revealed_count: 0,
            timer: Some(timer),
        }
    }

    /// Full batch of the generation.
    pub fn batch(&self) -> &[Path] {
        &self.batch
    }

    /// Visible prefix of the batch, in reveal order.
    pub fn revealed(&self) -> &[Path] {
        &self.batch[..self.revealed_count]
    }

    /// Number of revealed paths.
    pub fn revealed_count(&self) -> usize {
        self.revealed_count
    }

    /// Live reveal timer, if the generation is still revealing.
    pub fn timer(&self) -> Option<TimerId> {
        self.timer
    }

    /// `true` once every path is visible.
    pub fn is_complete(&self) -> bool {
        self.revealed_count == self.batch.len()
    }

    fn reveal_next(&mut self) -> bool {
        if self.revealed_count < self.batch.len() {
            self.revealed_count += 1;
            true
        } else {
            false
        }
    }
}

/// Generates, reveals and tracks batches of falling paths.
///
/// The animator owns its scheduler and event sink. It never draws: renderers read
/// [`PathAnimator::scheme`] and [`PathAnimator::revealed`] whenever [`PathAnimator::take_redraw`]
/// reports a change.
pub struct PathAnimator<S, E> {
    cfg: AnimatorConfig,
    rng: Rng64,
    scheduler: S,
    events: E,
    scheme: Option<ColorScheme>,
    reveal: RevealState,
    generation: u64,
    kickoff: Option<TimerId>,
    redraw: bool,
}

impl<S: Scheduler, E: AnimationEvents> PathAnimator<S, E> {
    /// Create an idle animator. Nothing is scheduled until [`Self::mount`] or
    /// [`AnimatorHandle::regenerate`].
    pub fn new(cfg: AnimatorConfig, scheduler: S, events: E) -> GaltonResult<Self> {
        cfg.validate()?;
        let rng = match cfg.seed {
            Some(seed) => Rng64::new(seed),
            None => Rng64::from_entropy(),
        };
        Ok(Self {
            cfg,
            rng,
            scheduler,
            events,
            scheme: None,
            reveal: RevealState::default(),
            generation: 0,
            kickoff: None,
            redraw: false,
        })
    }

    /// Schedule the initial generation to start after the host's next paint pass.
    ///
    /// Repeated calls keep a single pending kick-off.
    pub fn mount(&mut self) {
        if self.kickoff.is_none() {
            self.kickoff = Some(self.scheduler.defer());
        }
    }

    /// Dispatch a fired timer. Returns `false` for ids this animator no longer owns.
    pub fn on_timer(&mut self, id: TimerId) -> bool {
        if self.kickoff == Some(id) {
            self.kickoff = None;
            self.regenerate();
            return true;
        }
        if self.reveal.timer == Some(id) {
            self.tick();
            return true;
        }
        tracing::trace!(timer = id.0, "ignoring stale timer");
        false
    }

    fn tick(&mut self) {
        if self.reveal.reveal_next() {
            self.redraw = true;
            tracing::trace!(
                generation = self.generation,
                revealed = self.reveal.revealed_count,
                total = self.reveal.batch.len(),
                "revealed path"
            );
        }
        if self.reveal.is_complete()
            && let Some(timer) = self.reveal.timer.take()
        {
            self.scheduler.clear(timer);
            tracing::debug!(generation = self.generation, "reveal complete");
            self.events.on_animation_end();
        }
    }

    /// Active color scheme; `None` before the first generation.
    pub fn scheme(&self) -> Option<&ColorScheme> {
        self.scheme.as_ref()
    }

    /// Paths currently visible.
    pub fn revealed(&self) -> &[Path] {
        self.reveal.revealed()
    }

    /// Every path of the current generation, revealed or not.
    pub fn batch(&self) -> &[Path] {
        self.reveal.batch()
    }

    /// Reveal progress of the current generation.
    pub fn reveal_state(&self) -> &RevealState {
        &self.reveal
    }

    /// Generations started so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// `true` once the current generation is fully revealed.
    pub fn is_complete(&self) -> bool {
        self.generation > 0 && self.reveal.is_complete() && self.reveal.timer.is_none()
    }

    /// Return `true` if the revealed set or scheme changed since the last call.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.redraw)
    }

    /// Peek at the redraw flag without clearing it.
    pub fn needs_redraw(&self) -> bool {
        self.redraw
    }

    /// Configuration the animator was built with.
    pub fn config(&self) -> &AnimatorConfig {
        &self.cfg
    }

    /// Borrow the scheduler (the host drives it).
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Mutably borrow the scheduler.
    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Borrow the event sink.
    pub fn events(&self) -> &E {
        &self.events
    }
}

impl<S: Scheduler, E: AnimationEvents> AnimatorHandle for PathAnimator<S, E> {
    #[tracing::instrument(skip(self), fields(generation = self.generation + 1))]
    fn regenerate(&mut self) {
        self.events.on_animation_start();

        if let Some(timer) = self.reveal.timer.take() {
            self.scheduler.clear(timer);
            tracing::debug!(timer = timer.0, "abandoned in-progress reveal");
        }
        if let Some(kickoff) = self.kickoff.take() {
            self.scheduler.clear(kickoff);
        }
        self.generation += 1;

        // `new` validated the palette, so every list has a candidate.
        let scheme = self.cfg.palette.pick(&mut self.rng);
        let batch = simulate_batch(
            &self.cfg.grid,
            self.cfg.num_balls,
            f64::from(self.cfg.canvas.width),
            &mut self.rng,
        );
        let timer = self.scheduler.set_interval(self.cfg.reveal_interval());

        self.scheme = scheme;
        self.reveal = RevealState::new(batch, timer);
        self.redraw = true;
    }

    fn visible_render_width(&self) -> f64 {
        self.cfg.visible_render_width()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animator/animator.rs"]
mod tests;
