use super::*;
use crate::eval::frame::{Channels, ElementFrame, ElementPhase};
use crate::foundation::core::Vec2;
use crate::runtime::scroll::HeadlessHost;

const ARROW: ElementId = ElementId(0);
const FIRST_STAR: ElementId = ElementId(1);

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

fn started() -> Timeline {
    let mut tl = Timeline::new(SceneConfig::default()).unwrap();
    tl.begin_session(&mut HeadlessHost::default());
    tl
}

fn element(tl: &Timeline, id: ElementId) -> ElementFrame {
    *tl.frame().unwrap().element(id).unwrap()
}

fn arrow_strokes(tl: &Timeline) -> (f64, f64, f64) {
    match element(tl, ARROW).channels {
        Channels::Arrow(a) => (a.shaft, a.head_left, a.head_right),
        other => panic!("expected arrow channels, got {other:?}"),
    }
}

#[test]
fn nothing_is_mounted_before_a_session() {
    let tl = Timeline::new(SceneConfig::default()).unwrap();
    assert!(tl.frame().unwrap().elements.is_empty());
    assert_eq!(tl.generation(), 0);
    assert!(!tl.is_mounted(ARROW));
}

#[test]
fn new_rejects_invalid_scenes() {
    let mut scene = SceneConfig::default();
    scene.scroll.spacer_vh = 50.0;
    assert!(Timeline::new(scene).is_err());
}

#[test]
fn session_start_resets_host_and_schedules_arrow_stages() {
    let mut tl = Timeline::new(SceneConfig::default()).unwrap();
    tl.set_progress(0.7);
    let mut host = HeadlessHost {
        offset_px: 4000.0,
        ..HeadlessHost::default()
    };
    tl.begin_session(&mut host);

    assert!(host.restoration_disabled);
    assert_eq!(host.offset_px, 0.0);
    assert_eq!(tl.progress(), Progress::START);
    assert_eq!(tl.now(), Duration::ZERO);
    assert_eq!(tl.scheduler().pending(), 3);
    assert_eq!(tl.scheduler().next_due(), Some(ms(1000)));
    assert_eq!(tl.frame().unwrap().elements.len(), 14);
}

#[test]
fn arrow_draws_in_on_schedule() {
    let mut tl = started();
    assert_eq!(arrow_strokes(&tl), (0.0, 0.0, 0.0));
    assert_eq!(element(&tl, ARROW).phase, ElementPhase::Pending);

    assert_eq!(tl.advance(ms(1000)), 1);
    assert_eq!(arrow_strokes(&tl).0, 0.0);
    assert_eq!(element(&tl, ARROW).phase, ElementPhase::Entering);

    tl.advance(ms(2800));
    assert_eq!(arrow_strokes(&tl).0, 1.0);

    assert_eq!(tl.advance(ms(3900)), 2);
    assert_eq!(arrow_strokes(&tl), (1.0, 1.0, 1.0));
    assert_eq!(element(&tl, ARROW).phase, ElementPhase::Settled);
    assert_eq!(tl.scheduler().pending(), 0);
}

#[test]
fn coarse_ticks_record_the_scheduled_start() {
    let mut fine = started();
    let mut coarse = started();
    let at = |step: u32| Duration::from_secs_f64(f64::from(step) / 60.0);
    for step in 1..=186 {
        fine.advance(at(step));
    }
    coarse.advance(at(186));
    assert_eq!(arrow_strokes(&fine), arrow_strokes(&coarse));
}

#[test]
fn clock_never_runs_backwards() {
    let mut tl = started();
    tl.advance(ms(2000));
    assert_eq!(tl.advance(ms(500)), 0);
    assert_eq!(tl.now(), ms(2000));
}

#[test]
fn progress_samples_are_clamped() {
    let mut tl = started();
    assert_eq!(tl.set_progress(3.0), Progress::END);
    assert_eq!(tl.set_progress(-1.0), Progress::START);
    assert_eq!(tl.on_scroll(3200.0, 800.0).get(), 0.5);
}

#[test]
fn drift_waits_for_the_entrance_latch() {
    let mut tl = started();
    tl.set_progress(0.1);
    tl.advance(ms(10_000));
    assert!(!tl.entrance_complete(FIRST_STAR));
    assert_eq!(element(&tl, FIRST_STAR).drift, Vec2::ZERO);

    tl.set_progress(0.24);
    assert!(!tl.entrance_complete(FIRST_STAR));

    tl.set_progress(0.249);
    assert!(tl.entrance_complete(FIRST_STAR));
    tl.advance(ms(12_000));
    let star = element(&tl, FIRST_STAR);
    assert_ne!(star.drift, Vec2::ZERO);
    assert_eq!(star.phase, ElementPhase::Entering);

    tl.set_progress(0.5);
    assert_eq!(element(&tl, FIRST_STAR).phase, ElementPhase::Ambient);
}

#[test]
fn drift_survives_scrolling_back_above_the_window() {
    let mut tl = started();
    tl.set_progress(0.3);
    tl.advance(ms(1000));
    let before = element(&tl, FIRST_STAR).drift;

    tl.set_progress(0.05);
    tl.advance(ms(2500));
    let star = element(&tl, FIRST_STAR);
    assert!(tl.entrance_complete(FIRST_STAR));
    assert_eq!(star.opacity, 0.0);
    assert_eq!(star.phase, ElementPhase::Pending);
    assert_ne!(star.drift, Vec2::ZERO);
    assert_ne!(star.drift, before);
}

#[test]
fn unmount_cancels_timers_and_discards_late_callbacks() {
    let mut tl = started();
    let pending: Vec<ScheduledTask> = tl.scheduler().tasks().to_vec();
    assert_eq!(pending.len(), 3);

    assert!(tl.unmount(ARROW));
    assert!(!tl.unmount(ARROW));
    assert_eq!(tl.scheduler().pending(), 0);
    assert!(!tl.is_mounted(ARROW));
    assert!(tl.frame().unwrap().element(ARROW).is_none());

    for task in pending {
        assert!(!tl.fire(task));
    }
    assert_eq!(tl.advance(ms(5000)), 0);
}

#[test]
fn callbacks_from_an_earlier_session_are_ignored() {
    let mut tl = started();
    let old = tl.scheduler().tasks()[0];
    tl.begin_session(&mut HeadlessHost::default());

    assert!(!tl.fire(old));
    assert_eq!(element(&tl, ARROW).phase, ElementPhase::Pending);
    assert_eq!(tl.generation(), 2);
}

#[test]
fn shutdown_stops_every_oscillator() {
    let mut tl = started();
    tl.set_progress(1.0);
    tl.advance(ms(1500));
    assert!(tl.entrance_complete(FIRST_STAR));

    assert_eq!(tl.shutdown(), 14);
    assert!(tl.frame().unwrap().elements.is_empty());
    assert!(!tl.entrance_complete(FIRST_STAR));
    assert_eq!(tl.shutdown(), 0);
}

#[test]
fn frame_at_does_not_store_the_sample() {
    let mut tl = started();
    tl.set_progress(0.1);
    let peek = tl.frame_at(Progress::END).unwrap();
    assert_eq!(peek.progress, Progress::END);
    assert_eq!(tl.progress().get(), 0.1);
    assert!(!tl.entrance_complete(FIRST_STAR));
}

#[test]
fn frame_is_painted_back_to_front() {
    let tl = started();
    let frame = tl.frame().unwrap();
    let order: Vec<(i32, ElementId)> = frame.elements.iter().map(|e| (e.z, e.id)).collect();
    let mut sorted = order.clone();
    sorted.sort();
    assert_eq!(order, sorted);
}
