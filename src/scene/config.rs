use crate::{
    animation::{staged::StagedSequence, window::ActivationWindow},
    elements::{arrow::ArrowConfig, cloud::CloudConfig, moon::MoonConfig, star::StarConfig},
    foundation::core::Progress,
    foundation::error::{NightscrollError, NightscrollResult},
    runtime::scroll::ScrollRange,
    scene::layer::Layer,
};

/// Element family.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    /// Staged draw-in arrow.
    Arrow,
    /// Star of the field.
    Star,
    /// Rising moon.
    Moon,
    /// Sliding cloud.
    Cloud,
}

impl ElementKind {
    /// Lowercase name used in logs and reports.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Arrow => "arrow",
            Self::Star => "star",
            Self::Moon => "moon",
            Self::Cloud => "cloud",
        }
    }
}

/// Static configuration of one ensemble member.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ElementConfig {
    /// See [`ArrowConfig`].
    Arrow(ArrowConfig),
    /// See [`StarConfig`].
    Star(StarConfig),
    /// See [`MoonConfig`].
    Moon(MoonConfig),
    /// See [`CloudConfig`].
    Cloud(CloudConfig),
}

impl ElementConfig {
    /// Element family.
    pub fn kind(&self) -> ElementKind {
        match self {
            Self::Arrow(_) => ElementKind::Arrow,
            Self::Star(_) => ElementKind::Star,
            Self::Moon(_) => ElementKind::Moon,
            Self::Cloud(_) => ElementKind::Cloud,
        }
    }

    /// Visual tier.
    pub fn layer(&self) -> Layer {
        match self {
            Self::Arrow(a) => a.layer,
            Self::Star(s) => s.layer,
            Self::Moon(m) => m.layer,
            Self::Cloud(c) => c.layer,
        }
    }

    /// Scroll window that reveals the element. The arrow is revealed by time, not scroll.
    ///
    /// For the cloud this is the stroke fade, not the longer slide.
    pub fn entrance_window(&self) -> Option<ActivationWindow> {
        match self {
            Self::Arrow(_) => None,
            Self::Star(s) => Some(s.enter),
            Self::Moon(m) => Some(m.rise_window),
            Self::Cloud(c) => Some(c.fade),
        }
    }

    /// Entrance opacity at `progress`, watched by the entrance latch.
    pub fn entrance_opacity(&self, progress: Progress) -> Option<f64> {
        match self {
            Self::Arrow(_) => None,
            Self::Star(s) => Some(s.channels(progress).opacity),
            Self::Moon(m) => Some(m.channels(progress).stroke_opacity),
            Self::Cloud(c) => Some(c.channels(progress).stroke_opacity),
        }
    }

    /// Real-time stages started at mount, if any.
    pub fn staged(&self) -> Option<&StagedSequence> {
        match self {
            Self::Arrow(a) => Some(&a.stages),
            _ => None,
        }
    }

    /// Validate this element's own parameters.
    pub fn validate(&self) -> NightscrollResult<()> {
        match self {
            Self::Arrow(a) => a.validate(),
            Self::Star(s) => s.validate(),
            Self::Moon(m) => m.validate(),
            Self::Cloud(c) => c.validate(),
        }
    }
}

/// The declarative ensemble plus its scroll allocation. Immutable once a timeline owns it.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SceneConfig {
    /// Physical scroll distance behind the progress domain.
    #[serde(default)]
    pub scroll: ScrollRange,
    /// Ensemble members in paint-tiebreak order.
    pub elements: Vec<ElementConfig>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        crate::scene::ensemble::built_in()
    }
}

impl SceneConfig {
    /// Parse a scene from JSON and validate it.
    pub fn from_json_str(s: &str) -> NightscrollResult<Self> {
        let scene: Self =
            serde_json::from_str(s).map_err(|e| NightscrollError::serde(e.to_string()))?;
        scene.validate()?;
        Ok(scene)
    }

    /// Validate the scroll range and every element, failing on the first bad entry.
    pub fn validate(&self) -> NightscrollResult<()> {
        self.scroll.validate()?;
        if self.elements.is_empty() {
            return Err(NightscrollError::validation("scene has no elements"));
        }
        for (i, el) in self.elements.iter().enumerate() {
            el.validate().map_err(|e| match e {
                NightscrollError::Validation(msg) => NightscrollError::validation(format!(
                    "element {i} ({}): {msg}",
                    el.kind().as_str()
                )),
                other => other,
            })?;
        }
        Ok(())
    }

    /// Entrance windows of every element of `kind`, in ensemble order.
    pub fn entrance_windows(&self, kind: ElementKind) -> Vec<ActivationWindow> {
        self.elements
            .iter()
            .filter(|el| el.kind() == kind)
            .filter_map(ElementConfig::entrance_window)
            .collect()
    }

    /// Index pairs of elements of `kind` whose entrance windows overlap.
    ///
    /// Overlap is tolerated at runtime (channels are independent); this is a report only.
    pub fn overlapping_entrances(&self, kind: ElementKind) -> Vec<(usize, usize)> {
        let windows: Vec<(usize, ActivationWindow)> = self
            .elements
            .iter()
            .enumerate()
            .filter(|(_, el)| el.kind() == kind)
            .filter_map(|(i, el)| el.entrance_window().map(|w| (i, w)))
            .collect();

        let mut pairs = Vec::new();
        for (n, (i, a)) in windows.iter().enumerate() {
            for (j, b) in &windows[n + 1..] {
                if a.overlaps(*b) {
                    pairs.push((*i, *j));
                }
            }
        }
        pairs
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/config.rs"]
mod tests;
