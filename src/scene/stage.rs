use crate::foundation::core::Progress;

/// Coarse narrative beat of the scroll timeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SceneStage {
    /// Black screen and the arrow, before any star appears.
    Prelude,
    /// First half of the star field and the cloud.
    FirstWave,
    /// Moon settled, second half of the star field.
    SecondWave,
    /// Everything revealed; only drift moves.
    Rest,
}

impl SceneStage {
    /// Stage containing `progress`. Ranges are half-open except the last, which includes `1`.
    pub fn at(progress: Progress) -> Self {
        match progress.get() {
            p if p < 0.20 => Self::Prelude,
            p if p < 0.50 => Self::FirstWave,
            p if p < 0.80 => Self::SecondWave,
            _ => Self::Rest,
        }
    }
}
