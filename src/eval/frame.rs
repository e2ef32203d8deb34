use std::time::Duration;

use crate::{
    animation::window::{ActivationWindow, WindowPhase},
    elements::{
        arrow::{ArrowChannels, ArrowConfig},
        cloud::CloudChannels,
        moon::MoonChannels,
        star::StarChannels,
    },
    foundation::core::{Point, Progress, Vec2, Viewport},
    foundation::error::{NightscrollError, NightscrollResult},
    runtime::timeline::Mount,
    scene::{
        config::{ElementConfig, ElementKind, SceneConfig},
        layer::{Layer, LayerStyle},
        stage::SceneStage,
    },
};

/// Ensemble index of an element; stable for the lifetime of a scene.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct ElementId(pub usize);

/// Lifecycle phase of an element as observed in one frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementPhase {
    /// Hidden, waiting for its window or first stage.
    Pending,
    /// Inside its entrance. For the cloud this spans the whole slide, which outlasts the
    /// stroke fade that latches its drift.
    Entering,
    /// Entrance complete, resting at final values.
    Settled,
    /// Settled and drifting.
    Ambient,
}

/// Kind-specific channel values.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Channels {
    /// Arrow strokes and exit.
    Arrow(ArrowChannels),
    /// Star entrance.
    Star(StarChannels),
    /// Moon rise.
    Moon(MoonChannels),
    /// Cloud slide.
    Cloud(CloudChannels),
}

/// Resolved state of one element.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ElementFrame {
    /// Ensemble index.
    pub id: ElementId,
    /// Element family.
    pub kind: ElementKind,
    /// Visual tier.
    pub layer: Layer,
    /// Style bundle selected by `layer`.
    pub style: LayerStyle,
    /// Paint order.
    pub z: i32,
    /// Lifecycle phase.
    pub phase: ElementPhase,
    /// Reference point in viewport percent: the center for stars, the moon, and the arrow; the
    /// right-edge midpoint of the box for the cloud.
    pub anchor: Vec2,
    /// Scroll-driven displacement in pixels (entrance rise, slide, or exit).
    pub offset: Vec2,
    /// Vertical parallax in pixels.
    pub parallax: f64,
    /// Ambient drift in pixels.
    pub drift: Vec2,
    /// Whole-element opacity.
    pub opacity: f64,
    /// Uniform scale about the anchor.
    pub scale: f64,
    /// Kind-specific channels.
    pub channels: Channels,
}

impl ElementFrame {
    /// Anchor position in pixels with offset, parallax and drift applied.
    pub fn position(&self, viewport: Viewport) -> Point {
        viewport.point_at_percent(self.anchor)
            + self.offset
            + Vec2::new(0.0, self.parallax)
            + self.drift
    }
}

/// Every element's state for one `(progress, elapsed)` sample.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Frame {
    /// Scroll sample every channel in this frame read.
    pub progress: Progress,
    /// Session clock in seconds.
    pub elapsed_secs: f64,
    /// Narrative stage of `progress`.
    pub stage: SceneStage,
    /// Mounted elements sorted by `(z, id)`.
    pub elements: Vec<ElementFrame>,
}

impl Frame {
    /// Element by id, if mounted.
    pub fn element(&self, id: ElementId) -> Option<&ElementFrame> {
        self.elements.iter().find(|e| e.id == id)
    }

    /// Serialize as pretty JSON.
    pub fn to_json_pretty(&self) -> NightscrollResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| NightscrollError::serde(e.to_string()))
    }
}

pub(crate) fn evaluate(
    scene: &SceneConfig,
    mounts: &[Mount],
    progress: Progress,
    now: Duration,
) -> NightscrollResult<Frame> {
    let mut elements = Vec::with_capacity(mounts.len());
    for mount in mounts.iter().filter(|m| m.alive) {
        let index = mount.key.index;
        let config = scene.elements.get(index).ok_or_else(|| {
            NightscrollError::evaluation(format!("mounted element {index} has no configuration"))
        })?;
        elements.push(evaluate_element(ElementId(index), config, mount, progress, now)?);
    }
    elements.sort_by_key(|e| (e.z, e.id));

    Ok(Frame {
        progress,
        elapsed_secs: now.as_secs_f64(),
        stage: SceneStage::at(progress),
        elements,
    })
}

struct Placement {
    phase: ElementPhase,
    anchor: Vec2,
    offset: Vec2,
    parallax: f64,
    opacity: f64,
    scale: f64,
}

fn evaluate_element(
    id: ElementId,
    config: &ElementConfig,
    mount: &Mount,
    progress: Progress,
    now: Duration,
) -> NightscrollResult<ElementFrame> {
    let drifting = mount.drift.is_running();

    let (place, channels) = match config {
        ElementConfig::Arrow(arrow) => {
            let ch = arrow.channels(progress, &mount.started, now)?;
            let place = Placement {
                phase: arrow_phase(arrow, &mount.started, now),
                anchor: Vec2::new(50.0, 50.0),
                offset: Vec2::new(0.0, ch.exit),
                parallax: 0.0,
                opacity: 1.0,
                scale: 1.0,
            };
            (place, Channels::Arrow(ch))
        }
        ElementConfig::Star(star) => {
            let ch = star.channels(progress);
            let place = Placement {
                phase: scroll_phase(star.enter, progress, drifting),
                anchor: star.position,
                offset: Vec2::new(0.0, ch.rise),
                parallax: ch.parallax,
                opacity: ch.opacity,
                scale: ch.scale,
            };
            (place, Channels::Star(ch))
        }
        ElementConfig::Moon(moon) => {
            let ch = moon.channels(progress);
            let place = Placement {
                phase: scroll_phase(moon.rise_window, progress, drifting),
                anchor: moon.position,
                offset: Vec2::new(0.0, ch.rise),
                parallax: ch.parallax,
                opacity: 1.0,
                scale: 1.0,
            };
            (place, Channels::Moon(ch))
        }
        ElementConfig::Cloud(cloud) => {
            let ch = cloud.channels(progress);
            let place = Placement {
                phase: scroll_phase(cloud.slide, progress, drifting),
                anchor: Vec2::new(100.0 - cloud.right, cloud.top),
                offset: Vec2::new(ch.slide, 0.0),
                parallax: ch.parallax,
                opacity: 1.0,
                scale: 1.0,
            };
            (place, Channels::Cloud(ch))
        }
    };

    let layer = config.layer();
    let style = layer.style();
    Ok(ElementFrame {
        id,
        kind: config.kind(),
        layer,
        style,
        z: style.z_order,
        phase: place.phase,
        anchor: place.anchor,
        offset: place.offset,
        parallax: place.parallax,
        drift: mount.drift.offset(),
        opacity: place.opacity,
        scale: place.scale,
        channels,
    })
}

fn scroll_phase(window: ActivationWindow, progress: Progress, drifting: bool) -> ElementPhase {
    match window.phase(progress) {
        WindowPhase::Before => ElementPhase::Pending,
        WindowPhase::Inside => ElementPhase::Entering,
        WindowPhase::After if drifting => ElementPhase::Ambient,
        WindowPhase::After => ElementPhase::Settled,
    }
}

fn arrow_phase(arrow: &ArrowConfig, started: &[Option<Duration>], now: Duration) -> ElementPhase {
    if started.iter().all(Option::is_none) {
        return ElementPhase::Pending;
    }
    let done = arrow
        .stages
        .stages
        .iter()
        .enumerate()
        .all(|(i, s)| {
            started
                .get(i)
                .copied()
                .flatten()
                .is_some_and(|t| now >= t + s.duration)
        });
    if done {
        ElementPhase::Settled
    } else {
        ElementPhase::Entering
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/frame.rs"]
mod tests;
