pub use kurbo::{BezPath, Line, Point, Vec2};

/// Normalized scroll progress, always inside `[0, 1]`.
///
/// Every constructor clamps, so downstream channel math never extrapolates. Non-finite input
/// (NaN) maps to `0.0`.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, serde::Serialize)]
#[serde(transparent)]
pub struct Progress(f64);

impl Progress {
    /// Start of the timeline.
    pub const START: Self = Self(0.0);
    /// End of the timeline.
    pub const END: Self = Self(1.0);

    /// Clamp a raw host value into `[0, 1]`.
    pub fn new(raw: f64) -> Self {
        if raw.is_nan() {
            return Self::START;
        }
        Self(raw.clamp(0.0, 1.0))
    }

    /// Raw scalar value.
    pub fn get(self) -> f64 {
        self.0
    }
}

impl From<f64> for Progress {
    fn from(raw: f64) -> Self {
        Self::new(raw)
    }
}

impl<'de> serde::Deserialize<'de> for Progress {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        f64::deserialize(d).map(Self::new)
    }
}

/// Straight-alpha RGB8 stroke color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb8 {
    /// Build a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Opaque white.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// CSS `rgb(r, g, b)` form.
    pub fn css(self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Host viewport dimensions in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl Viewport {
    /// Create a viewport.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Resolve a percentage coordinate (`x%`, `y%`) into pixels.
    pub fn point_at_percent(self, percent: Vec2) -> Point {
        Point::new(
            self.width * percent.x / 100.0,
            self.height * percent.y / 100.0,
        )
    }

    /// Width in whole pixels (at least 1).
    pub fn width_px(self) -> u32 {
        self.width.round().max(1.0) as u32
    }

    /// Height in whole pixels (at least 1).
    pub fn height_px(self) -> u32 {
        self.height.round().max(1.0) as u32
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280.0, 800.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
