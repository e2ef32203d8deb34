//! Fixed outlines for the arrow, moon, and cloud.

use crate::foundation::core::{BezPath, Line, Point};

/// Arrow view box (width, height).
pub const ARROW_VIEW_BOX: (f64, f64) = (60.0, 160.0);

/// Arrow shaft, drawn top to bottom.
pub const ARROW_SHAFT: Line = Line {
    p0: Point::new(30.0, 14.0),
    p1: Point::new(30.0, 128.0),
};

/// Left arrowhead stroke, drawn from the tip outward.
pub const ARROW_HEAD_LEFT: Line = Line {
    p0: Point::new(30.0, 128.0),
    p1: Point::new(14.0, 112.0),
};

/// Right arrowhead stroke, drawn from the tip outward.
pub const ARROW_HEAD_RIGHT: Line = Line {
    p0: Point::new(30.0, 128.0),
    p1: Point::new(46.0, 112.0),
};

/// Portion of `line` drawn at draw fraction `fraction` (clamped to `[0, 1]`).
///
/// Straight strokes trim exactly, so a renderer does not need dash tricks.
pub fn trim_line(line: Line, fraction: f64) -> Line {
    let t = fraction.clamp(0.0, 1.0);
    Line::new(line.p0, line.p0.lerp(line.p1, t))
}

/// Cloud outline view box (width, height).
pub const CLOUD_VIEW_BOX: (f64, f64) = (380.0, 140.0);

/// Closed cloud outline in its `380 x 140` view box.
pub fn cloud_outline() -> BezPath {
    let mut p = BezPath::new();
    p.move_to((12.0, 95.0));
    p.curve_to((-2.0, 80.0), (0.0, 65.0), (16.0, 58.0));
    p.curve_to((28.0, 34.0), (48.0, 20.0), (68.0, 16.0));
    p.curve_to((88.0, 12.0), (98.0, 24.0), (108.0, 18.0));
    p.curve_to((125.0, 10.0), (138.0, 6.0), (155.0, 14.0));
    p.quad_to((172.0, 6.0), (195.0, 12.0));
    p.curve_to((210.0, 8.0), (228.0, 4.0), (242.0, 14.0));
    p.curve_to((258.0, 22.0), (268.0, 32.0), (280.0, 30.0));
    p.curve_to((298.0, 26.0), (318.0, 34.0), (338.0, 42.0));
    p.curve_to((355.0, 50.0), (368.0, 58.0), (375.0, 68.0));
    p.curve_to((382.0, 78.0), (388.0, 86.0), (386.0, 94.0));
    p.curve_to((384.0, 104.0), (374.0, 110.0), (362.0, 112.0));
    p.quad_to((335.0, 118.0), (305.0, 114.0));
    p.quad_to((245.0, 124.0), (205.0, 118.0));
    p.quad_to((160.0, 126.0), (120.0, 118.0));
    p.quad_to((75.0, 124.0), (48.0, 112.0));
    p.quad_to((22.0, 104.0), (12.0, 95.0));
    p.close_path();
    p
}

/// Moon circle radius for a given diameter (one pixel inset for the stroke).
pub fn moon_radius(diameter: f64) -> f64 {
    (diameter / 2.0 - 1.0).max(0.0)
}

#[cfg(test)]
#[path = "../../tests/unit/shape/outline.rs"]
mod tests;
