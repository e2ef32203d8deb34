use std::f64::consts::TAU;
use std::time::Duration;

use crate::foundation::core::Vec2;

/// Wall-clock driven ambient oscillator.
///
/// Once started it owns a private phase that only [`DriftOscillator::tick`] advances. The offset
/// traces a slow Lissajous loop: full amplitude vertically, a half-frequency horizontal sway
/// shaped by `phase_offset`. Both components are zero at the moment of starting. A stopped
/// oscillator keeps its last phase but reports no offset.
#[derive(Clone, Debug, PartialEq)]
pub struct DriftOscillator {
    amplitude: f64,
    period: Duration,
    phase_offset: f64,
    phase: f64,
    state: OscillatorState,
}

/// Lifecycle of a [`DriftOscillator`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OscillatorState {
    /// Created but never started.
    Idle,
    /// Advancing on every tick.
    Running,
    /// Stopped by teardown; never restarts.
    Stopped,
}

impl DriftOscillator {
    /// Create an idle oscillator with `amplitude` pixels and one full cycle per `period`.
    pub fn new(amplitude: f64, period: Duration, phase_offset: f64) -> Self {
        Self {
            amplitude,
            period,
            phase_offset,
            phase: 0.0,
            state: OscillatorState::Idle,
        }
    }

    /// Start oscillating. Only an idle oscillator can start; later calls are ignored.
    pub fn start(&mut self) -> bool {
        if self.state != OscillatorState::Idle {
            return false;
        }
        self.state = OscillatorState::Running;
        true
    }

    /// Stop permanently.
    pub fn stop(&mut self) {
        self.state = OscillatorState::Stopped;
    }

    /// Current lifecycle state.
    pub fn state(&self) -> OscillatorState {
        self.state
    }

    /// `true` while ticks advance the phase.
    pub fn is_running(&self) -> bool {
        self.state == OscillatorState::Running
    }

    /// Accumulated phase in radians.
    pub fn phase(&self) -> f64 {
        self.phase
    }

    /// Advance the phase by `dt` of wall-clock time. No-op unless running.
    pub fn tick(&mut self, dt: Duration) {
        if !self.is_running() || self.period.is_zero() {
            return;
        }
        let step = TAU * dt.as_secs_f64() / self.period.as_secs_f64();
        // Wrap at 4π so the half-frequency sway stays continuous.
        self.phase = (self.phase + step).rem_euclid(TAU * 2.0);
    }

    /// Additive positional offset in pixels.
    pub fn offset(&self) -> Vec2 {
        if !self.is_running() {
            return Vec2::ZERO;
        }
        let sway = (0.5 * self.phase + self.phase_offset).sin() - self.phase_offset.sin();
        Vec2::new(0.5 * self.amplitude * sway, self.amplitude * self.phase.sin())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/drift.rs"]
mod tests;
