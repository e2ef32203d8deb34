use std::collections::HashSet;

use rayon::prelude::*;

use crate::{
    eval::{
        fingerprint::fingerprint_frame,
        frame::Frame,
    },
    foundation::core::Progress,
    foundation::error::{NightscrollError, NightscrollResult},
    runtime::timeline::Timeline,
};

/// How a sweep distributes frame evaluation.
#[derive(Clone, Debug, Default)]
pub struct SweepThreading {
    /// Evaluate samples on a rayon pool.
    pub parallel: bool,
    /// Pool size; `None` lets rayon decide.
    pub threads: Option<usize>,
}

/// Counters reported by a sweep.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct SweepStats {
    /// Frames evaluated.
    pub frames_total: u64,
    /// Frames with a fingerprint not seen earlier in the sweep.
    pub frames_distinct: u64,
}

/// Evenly spaced samples covering `[0, 1]` inclusive.
pub fn progress_samples(count: usize) -> Vec<Progress> {
    match count {
        0 => Vec::new(),
        1 => vec![Progress::START],
        n => (0..n)
            .map(|i| Progress::new(i as f64 / (n - 1) as f64))
            .collect(),
    }
}

/// Evaluate one frame per sample against the timeline's current clock and mount state.
///
/// Frames are returned in sample order; the parallel path yields exactly the sequential result.
#[tracing::instrument(skip_all, fields(samples = samples.len(), parallel = threading.parallel))]
pub fn sweep_frames(
    timeline: &Timeline,
    samples: &[Progress],
    threading: &SweepThreading,
) -> NightscrollResult<(Vec<Frame>, SweepStats)> {
    if samples.is_empty() {
        return Err(NightscrollError::validation("sweep needs at least one sample"));
    }

    let frames = if threading.parallel {
        let pool = build_thread_pool(threading.threads)?;
        pool.install(|| {
            samples
                .par_iter()
                .map(|p| timeline.frame_at(*p))
                .collect::<NightscrollResult<Vec<_>>>()
        })?
    } else {
        samples
            .iter()
            .map(|p| timeline.frame_at(*p))
            .collect::<NightscrollResult<Vec<_>>>()?
    };

    let mut seen = HashSet::with_capacity(frames.len());
    let distinct = frames
        .iter()
        .filter(|f| seen.insert(fingerprint_frame(f)))
        .count();
    let stats = SweepStats {
        frames_total: frames.len() as u64,
        frames_distinct: distinct as u64,
    };
    tracing::debug!(
        frames = stats.frames_total,
        distinct = stats.frames_distinct,
        "sweep finished"
    );
    Ok((frames, stats))
}

fn build_thread_pool(threads: Option<usize>) -> NightscrollResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(NightscrollError::validation(
            "sweep threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| NightscrollError::evaluation(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/eval/sweep.rs"]
mod tests;
