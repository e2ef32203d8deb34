//! Nightscroll is a scroll-progress timeline engine for a single linear night-sky narrative.
//!
//! One normalized progress scalar fans out to a fixed ensemble of elements (an arrow, a field of
//! stars, a moon, a cloud). Each element derives its channels through windowed, eased
//! interpolation; the arrow also runs a timed draw-in sequence, and every element that finishes
//! its entrance starts a small ambient drift.
//!
//! - Build a [`SceneConfig`] (or use the built-in one) and hand it to [`Timeline::new`]
//! - Call [`Timeline::begin_session`], then feed it scroll samples and clock ticks
//! - Pull a [`Frame`] whenever something needs to be drawn
//!
//! See [`guide`] for a walkthrough.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod animation;
pub mod elements;
pub mod eval;
pub mod foundation;
pub mod guide;
pub mod render;
pub mod runtime;
pub mod scene;
pub mod shape;

pub use crate::animation::drift::{DriftOscillator, OscillatorState};
pub use crate::animation::ease::{CubicBezier, Ease};
pub use crate::animation::staged::{Stage, StagedSequence};
pub use crate::animation::window::{ActivationWindow, Lerp, WindowPhase, interpolate, piecewise};
pub use crate::eval::fingerprint::{FrameFingerprint, fingerprint_frame};
pub use crate::eval::frame::{Channels, ElementFrame, ElementId, ElementPhase, Frame};
pub use crate::eval::sweep::{SweepStats, SweepThreading, progress_samples};
pub use crate::foundation::core::{BezPath, Line, Point, Progress, Rgb8, Vec2, Viewport};
pub use crate::foundation::error::{NightscrollError, NightscrollResult};
pub use crate::render::raster::{RasterFrame, rasterize_svg, render_frame_rgba};
pub use crate::render::svg::frame_to_svg;
pub use crate::runtime::scroll::{HeadlessHost, ScrollHost, ScrollRange};
pub use crate::runtime::timeline::Timeline;
pub use crate::scene::config::{ElementConfig, ElementKind, SceneConfig};
pub use crate::scene::layer::{Layer, LayerStyle};
pub use crate::scene::stage::SceneStage;
pub use crate::shape::star::{StarPath, star_path};
