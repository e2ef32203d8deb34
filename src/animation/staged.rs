use std::time::Duration;

use crate::{
    animation::ease::Ease,
    foundation::error::{NightscrollError, NightscrollResult},
};

/// One timed stage of a real-time sequence: after `delay` (measured from mount), the stage's
/// channel animates from `0` to `target` over `duration` with `ease`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Stage {
    /// Delay from mount until the stage starts.
    #[serde(with = "secs_f64")]
    pub delay: Duration,
    /// Stage length once started.
    #[serde(with = "secs_f64")]
    pub duration: Duration,
    /// Easing applied over the stage.
    pub ease: Ease,
    /// Channel value once the stage completes.
    pub target: f64,
}

impl Stage {
    /// Build a stage ending at `target = 1.0`.
    pub fn new(delay: Duration, duration: Duration, ease: Ease) -> Self {
        Self {
            delay,
            duration,
            ease,
            target: 1.0,
        }
    }

    /// Time from mount at which the stage completes.
    pub fn end(&self) -> Duration {
        self.delay + self.duration
    }

    /// Validate duration, target, and easing parameters.
    pub fn validate(&self) -> NightscrollResult<()> {
        if self.duration.is_zero() {
            return Err(NightscrollError::animation("stage duration must be > 0"));
        }
        if !self.target.is_finite() {
            return Err(NightscrollError::animation("stage target must be finite"));
        }
        self.ease.validate()
    }

    /// Channel value at `now` for a stage whose timer fired at `started_at`.
    ///
    /// A stage that never fired (still pending, or cancelled before firing) reads `0`.
    pub fn value(&self, started_at: Option<Duration>, now: Duration) -> f64 {
        let Some(started_at) = started_at else {
            return 0.0;
        };
        let elapsed = now.saturating_sub(started_at);
        let t = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        self.target * self.ease.apply(t)
    }
}

/// Ordered list of timed stages sharing one mount clock.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StagedSequence {
    /// Stages in schedule order.
    pub stages: Vec<Stage>,
}

impl StagedSequence {
    /// Wrap a stage list.
    pub fn new(stages: Vec<Stage>) -> Self {
        Self { stages }
    }

    /// Validate every stage.
    pub fn validate(&self) -> NightscrollResult<()> {
        if self.stages.is_empty() {
            return Err(NightscrollError::animation(
                "staged sequence must have at least one stage",
            ));
        }
        for stage in &self.stages {
            stage.validate()?;
        }
        Ok(())
    }

    /// Time from mount at which the last stage completes.
    pub fn total(&self) -> Duration {
        self.stages
            .iter()
            .map(Stage::end)
            .max()
            .unwrap_or(Duration::ZERO)
    }

    /// Values of every stage at `now`, given the recorded start of each stage.
    pub fn values(&self, started: &[Option<Duration>], now: Duration) -> Vec<f64> {
        self.stages
            .iter()
            .enumerate()
            .map(|(i, s)| s.value(started.get(i).copied().flatten(), now))
            .collect()
    }
}

pub(crate) mod secs_f64 {
    use std::time::Duration;

    pub(crate) fn serialize<S: serde::Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_f64(d.as_secs_f64())
    }

    pub(crate) fn deserialize<'de, D: serde::Deserializer<'de>>(
        d: D,
    ) -> Result<Duration, D::Error> {
        let secs = <f64 as serde::Deserialize>::deserialize(d)?;
        Duration::try_from_secs_f64(secs).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/staged.rs"]
mod tests;
