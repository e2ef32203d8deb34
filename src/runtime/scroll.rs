use crate::{
    foundation::core::Progress,
    foundation::error::{NightscrollError, NightscrollResult},
};

/// Allocation of physical scroll distance to the `[0, 1]` progress domain.
///
/// The page is one tall spacer `spacer_vh` viewport heights high. The last viewport of it cannot
/// be scrolled past, so the scrollable distance is `spacer - viewport`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrollRange {
    /// Spacer height in viewport-height percent (`900` = nine viewports).
    pub spacer_vh: f64,
}

impl Default for ScrollRange {
    fn default() -> Self {
        Self { spacer_vh: 900.0 }
    }
}

impl ScrollRange {
    /// The spacer must be taller than one viewport or there is nothing to scroll.
    pub fn validate(&self) -> NightscrollResult<()> {
        if !(self.spacer_vh.is_finite() && self.spacer_vh > 100.0) {
            return Err(NightscrollError::validation(format!(
                "scroll spacer must exceed one viewport (100vh), got {}vh",
                self.spacer_vh
            )));
        }
        Ok(())
    }

    /// Spacer height in pixels for a viewport `viewport_h` pixels tall.
    pub fn spacer_px(&self, viewport_h: f64) -> f64 {
        viewport_h * self.spacer_vh / 100.0
    }

    /// Scrollable distance in pixels; never negative.
    pub fn scrollable_px(&self, viewport_h: f64) -> f64 {
        (self.spacer_px(viewport_h) - viewport_h).max(0.0)
    }

    /// Progress for a scroll offset, clamped into `[0, 1]`.
    pub fn progress_at(&self, offset_px: f64, viewport_h: f64) -> Progress {
        let scrollable = self.scrollable_px(viewport_h);
        if scrollable <= 0.0 {
            return Progress::START;
        }
        Progress::new(offset_px / scrollable)
    }

    /// Scroll offset that yields `progress`.
    pub fn offset_for_progress(&self, progress: Progress, viewport_h: f64) -> f64 {
        progress.get() * self.scrollable_px(viewport_h)
    }
}

/// Holder of the single scroll-progress sample.
///
/// Only the timeline writes it; every channel reads the same sample within one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollSource {
    progress: Progress,
}

impl ScrollSource {
    /// Store a raw sample from the host; values outside `[0, 1]` are clamped.
    pub fn set(&mut self, raw: f64) -> Progress {
        self.progress = Progress::new(raw);
        self.progress
    }

    /// Latest sample.
    pub fn get(&self) -> Progress {
        self.progress
    }

    /// Back to the top of the page.
    pub fn reset(&mut self) {
        self.progress = Progress::START;
    }
}

/// Host-environment effects performed once per session start.
pub trait ScrollHost {
    /// Stop the host from restoring a previous scroll position on reload.
    fn disable_scroll_restoration(&mut self);
    /// Force the scroll offset to zero.
    fn scroll_to_top(&mut self);
}

/// In-memory host used by the CLI and tests; records the effects it was asked to perform.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HeadlessHost {
    /// Whether scroll restoration has been disabled.
    pub restoration_disabled: bool,
    /// Current scroll offset in pixels.
    pub offset_px: f64,
    /// How many times the host was scrolled to the top.
    pub resets: usize,
}

impl ScrollHost for HeadlessHost {
    fn disable_scroll_restoration(&mut self) {
        self.restoration_disabled = true;
    }

    fn scroll_to_top(&mut self) {
        self.offset_px = 0.0;
        self.resets += 1;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/runtime/scroll.rs"]
mod tests;
