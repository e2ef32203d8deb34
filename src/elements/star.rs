use crate::{
    animation::{ease::Ease, window::ActivationWindow, window::Lerp},
    foundation::core::{Progress, Vec2},
    foundation::error::{NightscrollError, NightscrollResult},
    scene::layer::Layer,
    shape::star::{StarPath, inner_radius_for, star_path, validate_star},
};

/// One star of the field: drifts up into its fixed viewport position while fading and growing.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StarConfig {
    /// Final position in viewport percent (`x%`, `y%`) of the star center.
    pub position: Vec2,
    /// Outer radius in pixels.
    pub size: f64,
    /// Number of outer points, `2..=64`.
    pub points: u32,
    /// Entrance window.
    pub enter: ActivationWindow,
    /// Initial downward displacement in pixels.
    #[serde(default = "default_rise")]
    pub rise: f64,
    /// Scale while hidden.
    #[serde(default = "default_min_scale")]
    pub min_scale: f64,
    /// Entrance easing.
    #[serde(default = "default_ease")]
    pub ease: Ease,
    /// Visual tier.
    pub layer: Layer,
}

fn default_rise() -> f64 {
    300.0
}

fn default_min_scale() -> f64 {
    0.6
}

fn default_ease() -> Ease {
    Ease::Sinusoidal
}

/// Scroll-driven channels of a star.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct StarChannels {
    /// Whole-element opacity.
    pub opacity: f64,
    /// Uniform scale about the star center.
    pub scale: f64,
    /// Entrance displacement below the final position, in pixels.
    pub rise: f64,
    /// Parallax offset in pixels (negative is up).
    pub parallax: f64,
}

impl StarConfig {
    /// Build a star with the scene defaults (300 px rise, 0.6 minimum scale, sinusoidal ease).
    pub fn new(
        position: Vec2,
        size: f64,
        points: u32,
        enter: ActivationWindow,
        layer: Layer,
    ) -> Self {
        Self {
            position,
            size,
            points,
            enter,
            rise: default_rise(),
            min_scale: default_min_scale(),
            ease: default_ease(),
            layer,
        }
    }

    /// Valley radius between points.
    pub fn inner_radius(&self) -> f64 {
        inner_radius_for(self.points, self.size)
    }

    /// Outline of this star in its own `2 * size` view box.
    pub fn path(&self) -> NightscrollResult<StarPath> {
        star_path(self.points, self.size, self.inner_radius())
    }

    /// Validate geometry and easing.
    pub fn validate(&self) -> NightscrollResult<()> {
        validate_star(self.points, self.size, self.inner_radius())?;
        if !(self.position.x.is_finite() && self.position.y.is_finite()) {
            return Err(NightscrollError::validation("star position must be finite"));
        }
        if !self.rise.is_finite() {
            return Err(NightscrollError::validation("star rise must be finite"));
        }
        if !(self.min_scale.is_finite() && (0.0..=1.0).contains(&self.min_scale)) {
            return Err(NightscrollError::validation(
                "star min_scale must lie in [0, 1]",
            ));
        }
        self.ease.validate()
    }

    /// Channel values at `progress`.
    pub fn channels(&self, progress: Progress) -> StarChannels {
        let t = self.enter.interpolate(progress, self.ease);
        StarChannels {
            opacity: t,
            scale: <f64 as Lerp>::lerp(&self.min_scale, &1.0, t),
            rise: <f64 as Lerp>::lerp(&self.rise, &0.0, t),
            parallax: -self.layer.style().parallax * progress.get(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/elements/star.rs"]
mod tests;
