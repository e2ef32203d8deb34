//! # Nightscroll guide (v0.1.0)
//!
//! This module is a standalone walkthrough of how Nightscroll turns a scroll position into a
//! drawable frame. It has no code of its own.
//!
//! If you are looking for copy/paste commands, start with the repository `README.md`.
//!
//! ---
//!
//! ## Core concepts
//!
//! - [`Progress`](crate::Progress): the single scalar in `[0, 1]` that drives every element
//! - [`ActivationWindow`](crate::ActivationWindow): the sub-range of progress in which one channel
//!   moves; outside it the channel holds its start or end value
//! - [`StagedSequence`](crate::StagedSequence): wall-clock stages (used by the arrow), independent
//!   of scroll
//! - [`DriftOscillator`](crate::DriftOscillator): the ambient wobble an element picks up once its
//!   entrance finishes
//! - [`Timeline`](crate::Timeline): owns the scroll sample, the clock, the timer queue and the
//!   per-element mounts
//! - [`Frame`](crate::Frame): a resolved snapshot, one [`ElementFrame`](crate::ElementFrame) per
//!   mounted element
//!
//! A frame is always a pure read. Nothing inside [`Timeline::frame`](crate::Timeline::frame)
//! advances time or fires timers; the caller does that explicitly:
//!
//! 1. Feed scroll samples: [`Timeline::on_scroll`](crate::Timeline::on_scroll) or
//!    [`Timeline::set_progress`](crate::Timeline::set_progress)
//! 2. Move the clock: [`Timeline::advance`](crate::Timeline::advance)
//! 3. Pull a frame: [`Timeline::frame`](crate::Timeline::frame)
//!
//! ---
//!
//! ## The scroll range
//!
//! The page reserves a spacer of [`ScrollRange::spacer_vh`](crate::ScrollRange) viewport heights
//! (900 by default). Progress is the scroll offset over the scrollable distance, which is the
//! spacer minus one viewport. Samples outside `[0, 1]` clamp; a page that cannot scroll reports
//! progress 0.
//!
//! Starting a session goes through the [`ScrollHost`](crate::ScrollHost) boundary: the host is
//! asked to stop restoring the previous scroll position and to jump to the top. Headless callers
//! (tests, the CLI, batch renders) use [`HeadlessHost`](crate::HeadlessHost).
//!
//! ---
//!
//! ## Windowed interpolation
//!
//! Every scroll-driven channel is `window.map(progress, ease, from, to)` on an
//! [`ActivationWindow`](crate::ActivationWindow):
//!
//! - before `window.start` the value is `from`
//! - after `window.end` the value is `to`
//! - in between, the local fraction is eased and lerped
//!
//! Because each channel is a function of progress alone, scrolling back up replays the entrance
//! in reverse, and any two callers that see the same progress see the same channel values.
//!
//! ---
//!
//! ## The built-in ensemble
//!
//! [`SceneConfig::default`](crate::SceneConfig) is the night sky the engine ships with:
//!
//! - one arrow (foreground) that draws itself in over about four seconds, then slides off as the
//!   reader scrolls
//! - eleven stars whose entrance windows tile `[0.20, 0.75]` without overlapping; small stars sit
//!   on the background tier, the rest on the foreground
//! - a moon that rises late in the scroll
//! - a cloud that slides in from the right edge
//!
//! A scene can also be loaded from JSON with
//! [`SceneConfig::from_json_str`](crate::SceneConfig::from_json_str). Loading validates every
//! element; errors name the offending element by index and kind.
//!
//! ---
//!
//! ## Arrow stages and the timer queue
//!
//! The arrow's three strokes are drawn on the wall clock, not on scroll. Beginning a session
//! schedules one timer per stage in the [`Scheduler`](crate::runtime::scheduler::Scheduler). When
//! [`Timeline::advance`](crate::Timeline::advance) passes a timer's due time, the stage is marked
//! as started at its *scheduled* time, so a coarse tick and a fine tick produce the same frame.
//!
//! Every timer belongs to an element mount and carries the mount's generation. Unmounting an
//! element (or starting a new session) cancels its timers; a timer from an older generation that
//! still reaches [`Timeline::fire`](crate::Timeline::fire) is dropped without effect.
//!
//! ---
//!
//! ## Entrance latch and ambient drift
//!
//! An element's entrance is complete once its entrance opacity reaches 0.99. That latch is
//! one-way: scrolling back does not un-latch it, and the drift that starts with it keeps running.
//! Drift starts from a zero offset, so the element never jumps when the latch trips.
//!
//! The arrow has no entrance window and never drifts.
//!
//! ---
//!
//! ## Sweeps and fingerprints
//!
//! [`Timeline::sweep`](crate::Timeline::sweep) evaluates many progress samples against one clock
//! and mount state. With [`SweepThreading::parallel`](crate::SweepThreading) set, samples are
//! evaluated on a rayon pool; the result is identical to the sequential path.
//!
//! [`fingerprint_frame`](crate::fingerprint_frame) hashes every resolved value of a frame into a
//! 128-bit [`FrameFingerprint`](crate::FrameFingerprint). Two frames with the same fingerprint draw
//! the same picture.
//!
//! ---
//!
//! ## Rendering
//!
//! Rendering is a collaborator, not part of the engine. [`frame_to_svg`](crate::frame_to_svg)
//! writes a standalone SVG document; [`render_frame_rgba`](crate::render_frame_rgba) rasterizes it
//! with `resvg`. Pixels are premultiplied RGBA8 over an opaque black page.
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use nightscroll::{HeadlessHost, SceneConfig, Timeline, Viewport, render_frame_rgba};
//!
//! # fn main() -> nightscroll::NightscrollResult<()> {
//! let mut timeline = Timeline::new(SceneConfig::default())?;
//! timeline.begin_session(&mut HeadlessHost::default());
//! timeline.advance(Duration::from_secs(5));
//! timeline.on_scroll(3_000.0, 800.0);
//!
//! let frame = timeline.frame()?;
//! let pixels = render_frame_rgba(timeline.config(), &frame, Viewport::new(1280.0, 800.0))?;
//! assert_eq!(pixels.data.len(), 1280 * 800 * 4);
//! # Ok(())
//! # }
//! ```
//!
//! ---
//!
//! ## Errors and logging
//!
//! Fallible operations return [`NightscrollResult`](crate::NightscrollResult). Configuration
//! problems surface as validation errors when a scene is built, never in the middle of a frame.
//!
//! The library logs through `tracing` and never installs a subscriber. The `nightscroll` binary
//! installs one driven by `RUST_LOG`.
