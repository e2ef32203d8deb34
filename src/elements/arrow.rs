use std::time::Duration;

use crate::{
    animation::{
        ease::Ease,
        staged::{Stage, StagedSequence},
        window::piecewise,
    },
    foundation::core::Progress,
    foundation::error::{NightscrollError, NightscrollResult},
    scene::layer::Layer,
};

/// Number of stages an arrow sequence must carry: shaft, left head, right head.
pub const ARROW_STAGES: usize = 3;

/// Centered downward arrow that draws itself in three timed strokes after mount and slides off
/// the bottom of the viewport as scrolling begins.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ArrowConfig {
    /// Draw-in stages in `[shaft, head_left, head_right]` order.
    pub stages: StagedSequence,
    /// Scroll exit rule as `(progress, y offset px)` stops.
    pub exit: Vec<(f64, f64)>,
    /// Visual tier.
    pub layer: Layer,
}

/// Channels of the arrow. Stroke channels are draw fractions in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ArrowChannels {
    /// Shaft draw fraction.
    pub shaft: f64,
    /// Left arrowhead draw fraction.
    pub head_left: f64,
    /// Right arrowhead draw fraction.
    pub head_right: f64,
    /// Scroll-driven downward offset in pixels.
    pub exit: f64,
}

impl ArrowConfig {
    /// The scene's arrow: a black-screen pause, a 1.8 s shaft, then two quick head strokes.
    pub fn scene_default() -> Self {
        let ms = Duration::from_millis;
        Self {
            stages: StagedSequence::new(vec![
                Stage::new(ms(1000), ms(1800), Ease::EASE_IN_OUT),
                Stage::new(ms(3000), ms(600), Ease::EASE_OUT),
                Stage::new(ms(3300), ms(600), Ease::EASE_OUT),
            ]),
            exit: vec![(0.0, 0.0), (0.13, 800.0), (1.0, 800.0)],
            layer: Layer::Foreground,
        }
    }

    /// Validate stage count, stages, and the exit rule.
    pub fn validate(&self) -> NightscrollResult<()> {
        if self.stages.stages.len() != ARROW_STAGES {
            return Err(NightscrollError::validation(format!(
                "arrow needs exactly {ARROW_STAGES} stages, got {}",
                self.stages.stages.len()
            )));
        }
        self.stages.validate()?;
        if self.exit.iter().any(|(p, y)| !(p.is_finite() && y.is_finite())) {
            return Err(NightscrollError::validation("arrow exit stops must be finite"));
        }
        piecewise(Progress::START, &self.exit).map_err(|e| {
            NightscrollError::validation(format!("arrow exit rule is invalid: {e}"))
        })?;
        Ok(())
    }

    /// Channel values for the given scroll sample and stage clock.
    ///
    /// `started[i]` holds the mount-relative time at which stage `i` fired, or `None` while the
    /// stage is pending or after it was cancelled.
    pub fn channels(
        &self,
        progress: Progress,
        started: &[Option<Duration>],
        now: Duration,
    ) -> NightscrollResult<ArrowChannels> {
        let v = self.stages.values(started, now);
        let [shaft, head_left, head_right] = v[..] else {
            return Err(NightscrollError::evaluation(
                "arrow stage list lost its shape",
            ));
        };
        Ok(ArrowChannels {
            shaft,
            head_left,
            head_right,
            exit: piecewise(progress, &self.exit)?,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/elements/arrow.rs"]
mod tests;
