//! Element animators. Each maps a scroll sample (and, for the arrow, a stage clock) to the
//! element's channel values.

/// Staged draw-in arrow.
pub mod arrow;
/// Sliding cloud.
pub mod cloud;
/// Rising moon.
pub mod moon;
/// Field star.
pub mod star;
