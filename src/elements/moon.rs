use crate::{
    animation::{ease::Ease, window::ActivationWindow},
    foundation::core::{Progress, Vec2},
    foundation::error::{NightscrollError, NightscrollResult},
    scene::layer::Layer,
    shape::outline::moon_radius,
};

/// Outlined, black-filled moon that rises slowly into the upper-left third of the viewport.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MoonConfig {
    /// Final center position in viewport percent.
    pub position: Vec2,
    /// Diameter in pixels.
    pub size: f64,
    /// Rise and stroke fade window.
    pub rise_window: ActivationWindow,
    /// Initial downward displacement in pixels.
    pub rise: f64,
    /// Rise easing.
    pub ease: Ease,
    /// Visual tier.
    pub layer: Layer,
}

/// Scroll-driven channels of the moon.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct MoonChannels {
    /// Stroke opacity; the black fill stays opaque.
    pub stroke_opacity: f64,
    /// Displacement below the final position, in pixels.
    pub rise: f64,
    /// Parallax offset in pixels.
    pub parallax: f64,
}

impl MoonConfig {
    /// Circle radius inside the `size x size` view box.
    pub fn radius(&self) -> f64 {
        moon_radius(self.size)
    }

    /// Validate geometry and easing.
    pub fn validate(&self) -> NightscrollResult<()> {
        if !(self.size.is_finite() && self.size > 2.0) {
            return Err(NightscrollError::validation("moon size must be > 2 px"));
        }
        if !(self.position.x.is_finite() && self.position.y.is_finite()) {
            return Err(NightscrollError::validation("moon position must be finite"));
        }
        if !self.rise.is_finite() {
            return Err(NightscrollError::validation("moon rise must be finite"));
        }
        self.ease.validate()
    }

    /// Channel values at `progress`.
    pub fn channels(&self, progress: Progress) -> MoonChannels {
        let t = self.rise_window.interpolate(progress, self.ease);
        MoonChannels {
            stroke_opacity: t,
            rise: self.rise * (1.0 - t),
            parallax: -self.layer.style().parallax * progress.get(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/elements/moon.rs"]
mod tests;
