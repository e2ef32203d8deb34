use super::*;
use crate::runtime::{scroll::HeadlessHost, timeline::Timeline};

fn timeline_at(progress: f64) -> Timeline {
    let mut tl = Timeline::new(SceneConfig::default()).unwrap();
    tl.begin_session(&mut HeadlessHost::default());
    tl.set_progress(progress);
    tl
}

fn first_of(frame: &Frame, kind: ElementKind) -> &ElementFrame {
    frame.elements.iter().find(|e| e.kind == kind).unwrap()
}

#[test]
fn star_midpoint_matches_the_sinusoidal_midpoint() {
    let frame = timeline_at(0.225).frame().unwrap();
    let star = frame.element(ElementId(1)).unwrap();
    assert!((star.opacity - 0.5).abs() < 1e-9);
    assert!((star.scale - 0.8).abs() < 1e-9);
    assert_eq!(star.phase, ElementPhase::Entering);
    assert_eq!(frame.stage, SceneStage::FirstWave);
}

#[test]
fn settled_moon_sits_at_its_anchor_plus_parallax() {
    let frame = timeline_at(0.6).frame().unwrap();
    let moon = first_of(&frame, ElementKind::Moon);
    // Latched on this very sample, so drift is running but has not moved yet.
    assert_eq!(moon.phase, ElementPhase::Ambient);
    assert_eq!(moon.drift, Vec2::ZERO);
    assert_eq!(moon.offset, Vec2::ZERO);

    let vp = Viewport::new(1000.0, 1000.0);
    let pos = moon.position(vp);
    assert!((pos.x - 280.0).abs() < 1e-9);
    assert!((pos.y - (280.0 - 45.0 * 0.6)).abs() < 1e-9);
}

#[test]
fn cloud_is_anchored_at_its_right_edge_and_slides_horizontally() {
    let frame = timeline_at(0.38).frame().unwrap();
    let cloud = first_of(&frame, ElementKind::Cloud);
    assert_eq!(cloud.anchor, Vec2::new(110.0, 38.0));
    assert!(cloud.offset.x < 0.0);
    assert_eq!(cloud.offset.y, 0.0);
}

#[test]
fn cloud_keeps_entering_until_its_slide_ends() {
    let tl = timeline_at(0.35);
    let id = tl
        .config()
        .elements
        .iter()
        .position(|el| el.kind() == ElementKind::Cloud)
        .map(ElementId)
        .unwrap();
    // The stroke fade is over and the drift latch has fired, but the cloud is still moving.
    assert!(tl.entrance_complete(id));
    let cloud = *tl.frame().unwrap().element(id).unwrap();
    assert_eq!(cloud.phase, ElementPhase::Entering);

    let rest = *tl.frame_at(Progress::new(0.5)).unwrap().element(id).unwrap();
    assert_eq!(rest.phase, ElementPhase::Ambient);
    assert_eq!(rest.offset.x, -2400.0);
    assert!(cloud.offset.x > rest.offset.x);
}

#[test]
fn arrow_exits_downward_without_parallax() {
    let frame = timeline_at(0.2).frame().unwrap();
    let arrow = first_of(&frame, ElementKind::Arrow);
    assert_eq!(arrow.offset, Vec2::new(0.0, 800.0));
    assert_eq!(arrow.parallax, 0.0);
    assert_eq!(arrow.z, Layer::Foreground.style().z_order);
}

#[test]
fn every_element_reads_the_same_sample() {
    let frame = timeline_at(0.42).frame().unwrap();
    for el in &frame.elements {
        let expected = -el.style.parallax * 0.42;
        if el.kind != ElementKind::Arrow {
            assert!((el.parallax - expected).abs() < 1e-12);
        }
    }
}

#[test]
fn json_snapshot_carries_ids_and_channels() {
    let json = timeline_at(0.5).frame().unwrap().to_json_pretty().unwrap();
    let v: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(v["progress"], 0.5);
    assert_eq!(v["stage"], "second_wave");
    let elements = v["elements"].as_array().unwrap();
    assert_eq!(elements.len(), 14);
    assert!(elements.iter().any(|e| e["channels"].get("moon").is_some()));
}
