use std::f64::consts::PI;
use std::time::Duration;

use smallvec::SmallVec;

use crate::{
    animation::drift::DriftOscillator,
    eval::{
        frame::{ElementId, Frame, evaluate},
        sweep::{SweepStats, SweepThreading, sweep_frames},
    },
    foundation::core::Progress,
    foundation::error::NightscrollResult,
    runtime::{
        scheduler::{CancelHandle, ElementKey, ScheduledTask, Scheduler},
        scroll::{ScrollHost, ScrollSource},
    },
    scene::config::{ElementConfig, SceneConfig},
};

/// Entrance opacity at which an element counts as visually settled.
pub const ENTRANCE_LATCH: f64 = 0.99;

const DRIFT_BASE_PERIOD: Duration = Duration::from_secs(6);
const DRIFT_PERIOD_STEP: Duration = Duration::from_millis(750);

/// Per-element mount state: stage clock, entrance latch, drift oscillator, pending timers.
#[derive(Clone, Debug)]
pub(crate) struct Mount {
    pub(crate) key: ElementKey,
    pub(crate) alive: bool,
    pub(crate) started: SmallVec<[Option<Duration>; 3]>,
    pub(crate) entered: bool,
    pub(crate) drift: DriftOscillator,
    pub(crate) handle: CancelHandle,
}

impl Mount {
    fn new(key: ElementKey, config: &ElementConfig) -> Self {
        let stages = config.staged().map_or(0, |s| s.stages.len());
        Self {
            key,
            alive: true,
            started: SmallVec::from_elem(None, stages),
            entered: false,
            drift: drift_for(key.index, config),
            handle: CancelHandle::default(),
        }
    }
}

/// Oscillator parameters vary by slot so neighbouring elements never move in lockstep.
fn drift_for(index: usize, config: &ElementConfig) -> DriftOscillator {
    let golden_angle = PI * (3.0 - 5.0_f64.sqrt());
    let step = u32::try_from(index % 4).unwrap_or(0);
    DriftOscillator::new(
        config.layer().style().drift,
        DRIFT_BASE_PERIOD + DRIFT_PERIOD_STEP * step,
        golden_angle * index as f64,
    )
}

/// Orchestrates one scene: owns the scroll sample, the session clock, and every element's
/// mount state.
///
/// All channel values are pulled on demand through [`Timeline::frame`]. The only mutations are
/// [`Timeline::set_progress`] / [`Timeline::on_scroll`] (the scroll sample) and
/// [`Timeline::advance`] (the clock, which fires stage timers and ticks drift).
#[derive(Debug)]
pub struct Timeline {
    scene: SceneConfig,
    scroll: ScrollSource,
    scheduler: Scheduler,
    mounts: Vec<Mount>,
    generation: u32,
    now: Duration,
}

impl Timeline {
    /// Validate `scene` and build an idle timeline. Nothing is mounted until
    /// [`Timeline::begin_session`].
    pub fn new(scene: SceneConfig) -> NightscrollResult<Self> {
        scene.validate()?;
        Ok(Self {
            scene,
            scroll: ScrollSource::default(),
            scheduler: Scheduler::new(),
            mounts: Vec::new(),
            generation: 0,
            now: Duration::ZERO,
        })
    }

    /// Start a session: reset the host's scroll position, tear down any previous session, and
    /// mount every element with a fresh generation.
    #[tracing::instrument(skip_all, fields(elements = self.scene.elements.len()))]
    pub fn begin_session(&mut self, host: &mut dyn ScrollHost) {
        host.disable_scroll_restoration();
        host.scroll_to_top();

        self.shutdown();
        self.generation = self.generation.wrapping_add(1);
        self.now = Duration::ZERO;
        self.scroll.reset();

        let generation = self.generation;
        self.mounts = self
            .scene
            .elements
            .iter()
            .enumerate()
            .map(|(index, config)| Mount::new(ElementKey { index, generation }, config))
            .collect();

        for (config, mount) in self.scene.elements.iter().zip(self.mounts.iter_mut()) {
            let Some(seq) = config.staged() else {
                continue;
            };
            for (stage, s) in seq.stages.iter().enumerate() {
                let id = self.scheduler.schedule(mount.key, s.delay, stage);
                mount.handle.push(id);
            }
        }
        tracing::debug!(
            generation,
            pending = self.scheduler.pending(),
            "session started"
        );

        self.observe_entrances();
    }

    /// Store a raw progress sample from the host (clamped) and update entrance latches.
    pub fn set_progress(&mut self, raw: f64) -> Progress {
        let p = self.scroll.set(raw);
        self.observe_entrances();
        p
    }

    /// Convert a host scroll offset to progress and store it.
    pub fn on_scroll(&mut self, offset_px: f64, viewport_h: f64) -> Progress {
        let p = self.scene.scroll.progress_at(offset_px, viewport_h);
        self.set_progress(p.get())
    }

    /// Advance the session clock to `now` (mount-relative). Time never runs backwards; an
    /// earlier `now` is treated as the current time.
    ///
    /// Fires due stage timers in order, ticks running oscillators, then re-checks entrances.
    /// Returns the number of timers that fired into a live element.
    pub fn advance(&mut self, now: Duration) -> usize {
        let now = now.max(self.now);
        let dt = now - self.now;

        let mut fired = 0;
        for task in self.scheduler.drain_due(now) {
            if self.fire(task) {
                fired += 1;
            }
        }
        for mount in self.mounts.iter_mut().filter(|m| m.alive) {
            mount.drift.tick(dt);
        }
        self.now = now;
        self.observe_entrances();
        fired
    }

    /// Deliver one timer callback. A task whose element was torn down, or that belongs to an
    /// earlier session, is discarded and `false` is returned.
    pub fn fire(&mut self, task: ScheduledTask) -> bool {
        let Some(mount) = self
            .mounts
            .get_mut(task.owner.index)
            .filter(|m| m.alive && m.key == task.owner)
        else {
            tracing::trace!(
                index = task.owner.index,
                generation = task.owner.generation,
                stage = task.stage,
                "discarding stale stage timer"
            );
            return false;
        };
        let Some(slot) = mount.started.get_mut(task.stage) else {
            tracing::trace!(stage = task.stage, "stage timer has no matching stage");
            return false;
        };
        *slot = Some(task.fire_at);
        mount.handle.release(task.id);
        true
    }

    /// Tear down one element: cancel its pending timers and stop its oscillator. Returns `false`
    /// if it was not mounted.
    pub fn unmount(&mut self, id: ElementId) -> bool {
        let Some(mount) = self.mounts.get_mut(id.0).filter(|m| m.alive) else {
            return false;
        };
        let cancelled = self.scheduler.cancel_all(&mut mount.handle);
        mount.drift.stop();
        mount.alive = false;
        tracing::debug!(element = id.0, cancelled, "element torn down");
        true
    }

    /// Tear down every mounted element. Returns how many were mounted.
    pub fn shutdown(&mut self) -> usize {
        (0..self.mounts.len())
            .filter(|&i| self.unmount(ElementId(i)))
            .count()
    }

    /// Whether `id` has latched its entrance.
    pub fn entrance_complete(&self, id: ElementId) -> bool {
        self.mounts
            .get(id.0)
            .is_some_and(|m| m.alive && m.entered)
    }

    /// Whether `id` is currently mounted.
    pub fn is_mounted(&self, id: ElementId) -> bool {
        self.mounts.get(id.0).is_some_and(|m| m.alive)
    }

    /// Frame at the current scroll sample and clock.
    pub fn frame(&self) -> NightscrollResult<Frame> {
        self.frame_at(self.scroll.get())
    }

    /// Frame at `progress` against the current clock and mount state, without storing the
    /// sample or touching any latch.
    #[tracing::instrument(level = "trace", skip_all, fields(progress = progress.get()))]
    pub fn frame_at(&self, progress: Progress) -> NightscrollResult<Frame> {
        evaluate(&self.scene, &self.mounts, progress, self.now)
    }

    /// Frames for many progress samples against the current clock and mount state.
    pub fn sweep(
        &self,
        samples: &[Progress],
        threading: &SweepThreading,
    ) -> NightscrollResult<(Vec<Frame>, SweepStats)> {
        sweep_frames(self, samples, threading)
    }

    /// Latest scroll sample.
    pub fn progress(&self) -> Progress {
        self.scroll.get()
    }

    /// Session clock.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Mount generation of the current session (`0` before the first session).
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Scene this timeline was built from.
    pub fn config(&self) -> &SceneConfig {
        &self.scene
    }

    /// Timer queue, for inspection.
    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    fn observe_entrances(&mut self) {
        let progress = self.scroll.get();
        for (config, mount) in self.scene.elements.iter().zip(self.mounts.iter_mut()) {
            if !mount.alive || mount.entered {
                continue;
            }
            let Some(opacity) = config.entrance_opacity(progress) else {
                continue;
            };
            if opacity >= ENTRANCE_LATCH {
                mount.entered = true;
                mount.drift.start();
                tracing::debug!(
                    element = mount.key.index,
                    kind = config.kind().as_str(),
                    progress = progress.get(),
                    "entrance latched, drift started"
                );
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/runtime/timeline.rs"]
mod tests;
