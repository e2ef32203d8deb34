use crate::{
    animation::ease::Ease,
    foundation::core::{Progress, Vec2},
    foundation::error::{NightscrollError, NightscrollResult},
};

/// Interpolation contract for channel value types.
pub trait Lerp: Sized {
    /// Interpolate from `a` to `b` with normalized factor `t` in `[0, 1]`.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for Vec2 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Vec2::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
    }
}

/// Progress interval `[start, end]` over which a channel moves from rest to settled.
///
/// Always satisfies `0 <= start < end <= 1`; the only constructors validate.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "[f64; 2]", into = "[f64; 2]")]
pub struct ActivationWindow {
    start: f64,
    end: f64,
}

impl ActivationWindow {
    /// Create a validated window.
    pub fn new(start: f64, end: f64) -> NightscrollResult<Self> {
        let finite = start.is_finite() && end.is_finite();
        if !finite || start < 0.0 || end > 1.0 || end <= start {
            return Err(NightscrollError::invalid_window(start, end));
        }
        Ok(Self { start, end })
    }

    /// Window for built-in tables; evaluated in a `const` item, a bad pair fails the build.
    pub const fn new_const(start: f64, end: f64) -> Self {
        assert!(
            start >= 0.0 && end <= 1.0 && end > start,
            "activation window must satisfy 0 <= start < end <= 1"
        );
        Self { start, end }
    }

    /// Inclusive window start.
    pub fn start(self) -> f64 {
        self.start
    }

    /// Inclusive window end.
    pub fn end(self) -> f64 {
        self.end
    }

    /// Window width in progress units.
    pub fn span(self) -> f64 {
        self.end - self.start
    }

    /// `true` when the two windows share more than a boundary point.
    pub fn overlaps(self, other: Self) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Eased position of `progress` inside the window: `0` at or before `start`, `1` at or after
    /// `end`.
    pub fn interpolate(self, progress: Progress, ease: Ease) -> f64 {
        let p = progress.get();
        if p <= self.start {
            return 0.0;
        }
        if p >= self.end {
            return 1.0;
        }
        ease.apply((p - self.start) / (self.end - self.start))
    }

    /// Interpolate and map the result affinely into `[from, to]`.
    pub fn map<T: Lerp>(self, progress: Progress, ease: Ease, from: T, to: T) -> T {
        let t = self.interpolate(progress, ease);
        T::lerp(&from, &to, t)
    }

    /// Where `progress` sits relative to this window.
    pub fn phase(self, progress: Progress) -> WindowPhase {
        let p = progress.get();
        if p <= self.start {
            WindowPhase::Before
        } else if p >= self.end {
            WindowPhase::After
        } else {
            WindowPhase::Inside
        }
    }

    /// Merge windows into the sorted, disjoint `(start, end)` spans they cover.
    ///
    /// Windows that touch at a boundary merge into one span.
    pub fn union(windows: &[Self]) -> Vec<(f64, f64)> {
        let mut sorted: Vec<Self> = windows.to_vec();
        sorted.sort_by(|a, b| a.start.total_cmp(&b.start));

        let mut spans: Vec<(f64, f64)> = Vec::with_capacity(sorted.len());
        for w in sorted {
            match spans.last_mut() {
                Some(last) if w.start <= last.1 => last.1 = last.1.max(w.end),
                _ => spans.push((w.start, w.end)),
            }
        }
        spans
    }
}

impl TryFrom<[f64; 2]> for ActivationWindow {
    type Error = NightscrollError;

    fn try_from([start, end]: [f64; 2]) -> Result<Self, Self::Error> {
        Self::new(start, end)
    }
}

impl From<ActivationWindow> for [f64; 2] {
    fn from(w: ActivationWindow) -> Self {
        [w.start, w.end]
    }
}

/// Position of a progress sample relative to a window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WindowPhase {
    /// `progress <= start`.
    Before,
    /// `start < progress < end`.
    Inside,
    /// `progress >= end`.
    After,
}

/// Free-standing windowed interpolation over raw bounds.
///
/// Fails with [`NightscrollError::InvalidWindow`] unless `end > start`. Progress is clamped into
/// `[0, 1]` first; bounds outside `[0, 1]` are accepted here so callers can express windows on a
/// wider axis.
pub fn interpolate(progress: f64, start: f64, end: f64, ease: Ease) -> NightscrollResult<f64> {
    if !(start.is_finite() && end.is_finite()) || end <= start {
        return Err(NightscrollError::invalid_window(start, end));
    }
    let p = Progress::new(progress).get();
    if p <= start {
        return Ok(0.0);
    }
    if p >= end {
        return Ok(1.0);
    }
    Ok(ease.apply((p - start) / (end - start)))
}

/// Piecewise-linear mapping through `(input, output)` stops sorted by input.
///
/// Clamps to the first/last output outside the stop range. Used for multi-stop scroll rules such
/// as the arrow exit (`[0, 0.13, 1] -> [0, 800, 800]`).
pub fn piecewise(progress: Progress, stops: &[(f64, f64)]) -> NightscrollResult<f64> {
    let Some(&(first_in, first_out)) = stops.first() else {
        return Err(NightscrollError::animation("piecewise mapping needs at least one stop"));
    };
    if !stops.windows(2).all(|w| w[0].0 < w[1].0) {
        return Err(NightscrollError::animation(
            "piecewise stops must be strictly increasing",
        ));
    }

    let p = progress.get();
    if p <= first_in {
        return Ok(first_out);
    }
    for w in stops.windows(2) {
        let (a_in, a_out) = w[0];
        let (b_in, b_out) = w[1];
        if p < b_in {
            let t = interpolate(p, a_in, b_in, Ease::Linear)?;
            return Ok(<f64 as Lerp>::lerp(&a_out, &b_out, t));
        }
    }
    Ok(stops[stops.len() - 1].1)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/window.rs"]
mod tests;
