use xxhash_rust::xxh3::Xxh3;

use crate::{
    eval::frame::{Channels, ElementFrame, ElementPhase, Frame},
    foundation::core::Vec2,
    scene::{config::ElementKind, stage::SceneStage},
};

const XXH3_SEED: u64 = 0x6e69_6768_7473_6372;

/// Stable 128-bit fingerprint of a frame's resolved values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct FrameFingerprint {
    /// High 64 bits.
    pub hi: u64,
    /// Low 64 bits.
    pub lo: u64,
}

impl std::fmt::Display for FrameFingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:016x}{:016x}", self.hi, self.lo)
    }
}

/// Hash every value a renderer would read, bit for bit.
///
/// The session clock is hashed too, so two frames only match when they were sampled at the same
/// progress and time.
pub fn fingerprint_frame(frame: &Frame) -> FrameFingerprint {
    let mut h = StableHasher::new();
    h.write_f64(frame.progress.get());
    h.write_f64(frame.elapsed_secs);
    h.write_u8(stage_tag(frame.stage));
    h.write_u32(frame.elements.len() as u32);
    for el in &frame.elements {
        write_element(&mut h, el);
    }
    h.finish()
}

struct StableHasher {
    inner: Xxh3,
}

impl StableHasher {
    fn new() -> Self {
        Self {
            inner: Xxh3::with_seed(XXH3_SEED),
        }
    }

    fn write_bytes(&mut self, b: &[u8]) {
        self.inner.update(b);
    }

    fn write_u8(&mut self, v: u8) {
        self.write_bytes(&[v]);
    }

    fn write_u32(&mut self, v: u32) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_i32(&mut self, v: i32) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_u64(&mut self, v: u64) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_f64(&mut self, v: f64) {
        self.write_u64(v.to_bits());
    }

    fn write_vec2(&mut self, v: Vec2) {
        self.write_f64(v.x);
        self.write_f64(v.y);
    }

    fn finish(self) -> FrameFingerprint {
        let v = self.inner.digest128();
        FrameFingerprint {
            hi: (v >> 64) as u64,
            lo: v as u64,
        }
    }
}

fn write_element(h: &mut StableHasher, el: &ElementFrame) {
    h.write_u64(el.id.0 as u64);
    h.write_u8(kind_tag(el.kind));
    h.write_i32(el.z);
    h.write_u8(match el.phase {
        ElementPhase::Pending => 0,
        ElementPhase::Entering => 1,
        ElementPhase::Settled => 2,
        ElementPhase::Ambient => 3,
    });
    h.write_vec2(el.anchor);
    h.write_vec2(el.offset);
    h.write_f64(el.parallax);
    h.write_vec2(el.drift);
    h.write_f64(el.opacity);
    h.write_f64(el.scale);

    match el.channels {
        Channels::Arrow(c) => {
            for v in [c.shaft, c.head_left, c.head_right, c.exit] {
                h.write_f64(v);
            }
        }
        Channels::Star(c) => {
            for v in [c.opacity, c.scale, c.rise, c.parallax] {
                h.write_f64(v);
            }
        }
        Channels::Moon(c) => {
            for v in [c.stroke_opacity, c.rise, c.parallax] {
                h.write_f64(v);
            }
        }
        Channels::Cloud(c) => {
            for v in [c.stroke_opacity, c.slide, c.parallax] {
                h.write_f64(v);
            }
        }
    }
}

fn kind_tag(kind: ElementKind) -> u8 {
    match kind {
        ElementKind::Arrow => 0,
        ElementKind::Star => 1,
        ElementKind::Moon => 2,
        ElementKind::Cloud => 3,
    }
}

fn stage_tag(stage: SceneStage) -> u8 {
    match stage {
        SceneStage::Prelude => 0,
        SceneStage::FirstWave => 1,
        SceneStage::SecondWave => 2,
        SceneStage::Rest => 3,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/fingerprint.rs"]
mod tests;
