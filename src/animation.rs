//! Easing, windowed interpolation, timed stages, and the ambient drift oscillator.

/// Wall-clock drift oscillator.
pub mod drift;
/// Easing curves.
pub mod ease;
/// Real-time staged sequences.
pub mod staged;
/// Activation windows and the windowed interpolator.
pub mod window;
