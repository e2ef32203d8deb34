use std::f64::consts::{FRAC_PI_2, PI};
use std::fmt::Write as _;

use smallvec::SmallVec;

use crate::foundation::core::{BezPath, Point};
use crate::foundation::error::{NightscrollError, NightscrollResult};

/// Closed star polygon with vertices rounded to two decimals.
///
/// The star is centered at `(outer, outer)` so it fits a `2 * outer` square view box.
#[derive(Clone, Debug, PartialEq)]
pub struct StarPath {
    vertices: SmallVec<[Point; 12]>,
    center: Point,
}

impl StarPath {
    /// Vertices in drawing order, starting at the top outer point.
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Polygon center.
    pub fn center(&self) -> Point {
        self.center
    }

    /// Closed kurbo path through every vertex.
    pub fn to_bez_path(&self) -> BezPath {
        let mut path = BezPath::new();
        for (i, &v) in self.vertices.iter().enumerate() {
            if i == 0 {
                path.move_to(v);
            } else {
                path.line_to(v);
            }
        }
        path.close_path();
        path
    }

    /// SVG path data (`M.. L.. Z`) with two-decimal coordinates.
    pub fn to_svg_d(&self) -> String {
        let mut d = String::with_capacity(self.vertices.len() * 14);
        for (i, v) in self.vertices.iter().enumerate() {
            let cmd = if i == 0 { "M" } else { " L" };
            let _ = write!(d, "{cmd}{:.2} {:.2}", v.x, v.y);
        }
        d.push('Z');
        d
    }
}

/// Most points a star may have.
pub const MAX_STAR_POINTS: u32 = 64;

/// Generate an n-pointed star alternating `outer` and `inner` radii.
///
/// `2 * points` vertices are placed at angular steps of `π / points`, starting at -90° (top).
pub fn star_path(points: u32, outer: f64, inner: f64) -> NightscrollResult<StarPath> {
    validate_star(points, outer, inner)?;
    let count = points
        .checked_mul(2)
        .ok_or_else(|| NightscrollError::validation("star point count overflows"))?;

    let center = Point::new(outer, outer);
    let step = PI / f64::from(points);
    let vertices = (0..count)
        .map(|i| {
            let angle = step * f64::from(i) - FRAC_PI_2;
            let r = if i % 2 == 0 { outer } else { inner };
            Point::new(
                round2(center.x + r * angle.cos()),
                round2(center.y + r * angle.sin()),
            )
        })
        .collect();

    Ok(StarPath { vertices, center })
}

/// Inner radius used by the scene: sharper 4-pointed stars, classic 5-pointed ones.
pub fn inner_radius_for(points: u32, outer: f64) -> f64 {
    if points == 4 {
        outer * 0.25
    } else {
        outer * 0.38
    }
}

pub(crate) fn validate_star(points: u32, outer: f64, inner: f64) -> NightscrollResult<()> {
    if !(2..=MAX_STAR_POINTS).contains(&points) {
        return Err(NightscrollError::validation(format!(
            "star needs between 2 and {MAX_STAR_POINTS} points, got {points}"
        )));
    }
    if !(outer.is_finite() && inner.is_finite()) || outer <= 0.0 || inner <= 0.0 {
        return Err(NightscrollError::validation(
            "star radii must be finite and > 0",
        ));
    }
    if inner >= outer {
        return Err(NightscrollError::validation(
            "star inner radius must be smaller than the outer radius",
        ));
    }
    Ok(())
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

#[cfg(test)]
#[path = "../../tests/unit/shape/star.rs"]
mod tests;
