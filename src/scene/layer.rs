use crate::foundation::core::Rgb8;

/// Visual tier of an element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layer {
    /// Far, dim, barely moving.
    Background,
    /// Middle distance.
    Midground,
    /// Closest and brightest.
    Foreground,
}

/// Rendering parameters selected by a [`Layer`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct LayerStyle {
    /// Stroke color.
    pub color: Rgb8,
    /// Stroke width in pixels.
    pub stroke_width: f64,
    /// Glow blur radius in pixels (`0` disables the glow).
    pub shadow: f64,
    /// Paint order; higher draws later.
    pub z_order: i32,
    /// Vertical parallax travel in pixels across the whole timeline.
    pub parallax: f64,
    /// Ambient drift amplitude in pixels.
    pub drift: f64,
}

const BACKGROUND: LayerStyle = LayerStyle {
    color: Rgb8::new(205, 205, 215),
    stroke_width: 1.0,
    shadow: 0.0,
    z_order: 0,
    parallax: 20.0,
    drift: 1.5,
};

const MIDGROUND: LayerStyle = LayerStyle {
    color: Rgb8::new(190, 190, 190),
    stroke_width: 1.0,
    shadow: 2.0,
    z_order: 1,
    parallax: 45.0,
    drift: 2.5,
};

const FOREGROUND: LayerStyle = LayerStyle {
    color: Rgb8::WHITE,
    stroke_width: 1.5,
    shadow: 6.0,
    z_order: 2,
    parallax: 90.0,
    drift: 4.0,
};

impl Layer {
    /// Style bundle for this layer.
    pub const fn style(self) -> LayerStyle {
        match self {
            Self::Background => BACKGROUND,
            Self::Midground => MIDGROUND,
            Self::Foreground => FOREGROUND,
        }
    }
}
