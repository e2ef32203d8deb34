/// Convenience result type used across nightscroll.
pub type NightscrollResult<T> = Result<T, NightscrollError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum NightscrollError {
    /// Invalid scene configuration (shapes, positions, scroll range, stage lists).
    #[error("validation error: {0}")]
    Validation(String),

    /// An activation window whose bounds are not `0 <= start < end <= 1`.
    #[error("invalid window: [{start}, {end}] must satisfy 0 <= start < end <= 1")]
    InvalidWindow {
        /// Offending window start.
        start: f64,
        /// Offending window end.
        end: f64,
    },

    /// Errors while validating easing curves or staged sequences.
    #[error("animation error: {0}")]
    Animation(String),

    /// Errors while evaluating timeline state for a frame.
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// Errors produced by the reference renderer.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl NightscrollError {
    /// Build a [`NightscrollError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`NightscrollError::InvalidWindow`] value.
    pub fn invalid_window(start: f64, end: f64) -> Self {
        Self::InvalidWindow { start, end }
    }

    /// Build a [`NightscrollError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`NightscrollError::Evaluation`] value.
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }

    /// Build a [`NightscrollError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`NightscrollError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
