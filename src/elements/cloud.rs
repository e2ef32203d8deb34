use crate::{
    animation::{ease::Ease, window::ActivationWindow},
    foundation::core::{Point, Progress, Viewport},
    foundation::error::{NightscrollError, NightscrollResult},
    scene::layer::Layer,
};

/// Outlined cloud that sweeps across the screen from right to left after the moon appears.
///
/// The cloud has two overlapping windows: a slow slide and a quick stroke fade-in that starts
/// with it.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CloudConfig {
    /// Distance of the box's right edge from the viewport's right edge, in viewport percent
    /// (negative hangs off-screen).
    pub right: f64,
    /// Vertical center in viewport percent.
    pub top: f64,
    /// Box width in viewport-width percent.
    pub width_vw: f64,
    /// Box height in pixels.
    pub height: f64,
    /// Horizontal slide window.
    pub slide: ActivationWindow,
    /// Stroke fade-in window.
    pub fade: ActivationWindow,
    /// Horizontal offset before the slide, in pixels.
    pub start_x: f64,
    /// Horizontal offset after the slide, in pixels.
    pub end_x: f64,
    /// Easing for both windows.
    pub ease: Ease,
    /// Visual tier.
    pub layer: Layer,
}

/// Scroll-driven channels of the cloud.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct CloudChannels {
    /// Stroke opacity; the black fill stays opaque.
    pub stroke_opacity: f64,
    /// Horizontal offset in pixels.
    pub slide: f64,
    /// Parallax offset in pixels.
    pub parallax: f64,
}

impl CloudConfig {
    /// Validate box geometry and easing.
    pub fn validate(&self) -> NightscrollResult<()> {
        let finite = [
            self.right,
            self.top,
            self.width_vw,
            self.height,
            self.start_x,
            self.end_x,
        ]
        .iter()
        .all(|v| v.is_finite());
        if !finite {
            return Err(NightscrollError::validation("cloud geometry must be finite"));
        }
        if self.width_vw <= 0.0 || self.height <= 0.0 {
            return Err(NightscrollError::validation("cloud box must have a positive size"));
        }
        self.ease.validate()
    }

    /// Top-left corner of the cloud box before any offset is applied.
    pub fn box_origin(&self, viewport: Viewport) -> Point {
        let width = self.box_width(viewport);
        let right_edge = viewport.width - viewport.width * self.right / 100.0;
        Point::new(
            right_edge - width,
            viewport.height * self.top / 100.0 - self.height / 2.0,
        )
    }

    /// Box width in pixels.
    pub fn box_width(&self, viewport: Viewport) -> f64 {
        viewport.width * self.width_vw / 100.0
    }

    /// Channel values at `progress`.
    pub fn channels(&self, progress: Progress) -> CloudChannels {
        CloudChannels {
            stroke_opacity: self.fade.interpolate(progress, self.ease),
            slide: self.slide.map(progress, self.ease, self.start_x, self.end_x),
            parallax: -self.layer.style().parallax * progress.get(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/elements/cloud.rs"]
mod tests;
