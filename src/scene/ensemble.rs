use crate::{
    animation::{ease::Ease, window::ActivationWindow},
    elements::{arrow::ArrowConfig, cloud::CloudConfig, moon::MoonConfig, star::StarConfig},
    foundation::core::Vec2,
    runtime::scroll::ScrollRange,
    scene::{
        config::{ElementConfig, SceneConfig},
        layer::Layer,
    },
};

/// Stars at or below this outer radius sit in the background tier.
pub const BACKGROUND_STAR_MAX: f64 = 16.0;

struct StarRow {
    x: f64,
    y: f64,
    size: f64,
    points: u32,
    enter: ActivationWindow,
}

const fn row(x: f64, y: f64, size: f64, points: u32, start: f64, end: f64) -> StarRow {
    StarRow {
        x,
        y,
        size,
        points,
        enter: ActivationWindow::new_const(start, end),
    }
}

// Sequential 5%-wide windows from 0.20 to 0.75.
const STAR_FIELD: [StarRow; 11] = [
    row(5.0, 8.0, 20.0, 4, 0.20, 0.25),
    row(92.0, 25.0, 28.0, 4, 0.25, 0.30),
    row(8.0, 50.0, 16.0, 5, 0.30, 0.35),
    row(70.0, 6.0, 24.0, 4, 0.35, 0.40),
    row(35.0, 88.0, 18.0, 5, 0.40, 0.45),
    row(50.0, 42.0, 34.0, 4, 0.45, 0.50),
    row(93.0, 72.0, 14.0, 5, 0.50, 0.55),
    row(28.0, 5.0, 20.0, 4, 0.55, 0.60),
    row(88.0, 90.0, 22.0, 5, 0.60, 0.65),
    row(4.0, 82.0, 12.0, 4, 0.65, 0.70),
    row(62.0, 65.0, 18.0, 5, 0.70, 0.75),
];

const MOON_RISE: ActivationWindow = ActivationWindow::new_const(0.45, 0.60);
const CLOUD_SLIDE: ActivationWindow = ActivationWindow::new_const(0.28, 0.48);
const CLOUD_FADE: ActivationWindow = ActivationWindow::new_const(0.28, 0.31);

/// Layer for a star of outer radius `size`.
pub fn star_layer(size: f64) -> Layer {
    if size <= BACKGROUND_STAR_MAX {
        Layer::Background
    } else {
        Layer::Foreground
    }
}

/// The eleven stars of the field, in reveal order.
pub fn star_field() -> Vec<StarConfig> {
    STAR_FIELD
        .iter()
        .map(|r| {
            StarConfig::new(
                Vec2::new(r.x, r.y),
                r.size,
                r.points,
                r.enter,
                star_layer(r.size),
            )
        })
        .collect()
}

/// The moon, rising into the upper-left third.
pub fn moon() -> MoonConfig {
    MoonConfig {
        position: Vec2::new(28.0, 28.0),
        size: 140.0,
        rise_window: MOON_RISE,
        rise: 600.0,
        ease: Ease::Sinusoidal,
        layer: Layer::Midground,
    }
}

/// The cloud, sweeping right to left across the moon.
pub fn cloud() -> CloudConfig {
    CloudConfig {
        right: -10.0,
        top: 38.0,
        width_vw: 110.0,
        height: 170.0,
        slide: CLOUD_SLIDE,
        fade: CLOUD_FADE,
        start_x: 1400.0,
        end_x: -2400.0,
        ease: Ease::Sinusoidal,
        layer: Layer::Midground,
    }
}

/// The full built-in scene: arrow, star field, moon, cloud.
pub fn built_in() -> SceneConfig {
    let mut elements = Vec::with_capacity(STAR_FIELD.len() + 3);
    elements.push(ElementConfig::Arrow(ArrowConfig::scene_default()));
    elements.extend(star_field().into_iter().map(ElementConfig::Star));
    elements.push(ElementConfig::Moon(moon()));
    elements.push(ElementConfig::Cloud(cloud()));
    SceneConfig {
        scroll: ScrollRange::default(),
        elements,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/ensemble.rs"]
mod tests;
