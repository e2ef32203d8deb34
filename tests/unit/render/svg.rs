use super::*;
use crate::runtime::{scroll::HeadlessHost, timeline::Timeline};
use std::time::Duration;

fn frame(progress: f64, secs: u64) -> (SceneConfig, Frame) {
    let mut tl = Timeline::new(SceneConfig::default()).unwrap();
    tl.begin_session(&mut HeadlessHost::default());
    tl.advance(Duration::from_secs(secs));
    tl.set_progress(progress);
    (tl.config().clone(), tl.frame().unwrap())
}

#[test]
fn prelude_shows_only_the_arrow() {
    let (scene, f) = frame(0.0, 5);
    let svg = frame_to_svg(&scene, &f, Viewport::new(800.0, 600.0)).unwrap();
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains(r#"fill="black""#));
    assert_eq!(svg.matches("<line").count(), 3);
    assert!(!svg.contains("stroke-linejoin"));
}

#[test]
fn undrawn_strokes_are_skipped() {
    let (scene, f) = frame(0.0, 0);
    let svg = frame_to_svg(&scene, &f, Viewport::default()).unwrap();
    assert_eq!(svg.matches("<line").count(), 0);
}

#[test]
fn settled_scene_draws_every_element() {
    let (scene, f) = frame(1.0, 5);
    let svg = frame_to_svg(&scene, &f, Viewport::default()).unwrap();
    assert_eq!(svg.matches("stroke-linejoin").count(), 11);
    assert_eq!(svg.matches("<circle").count(), 1);
    assert!(svg.contains(r#"id="glow-arrow""#));
}

#[test]
fn output_is_deterministic() {
    let (scene, f) = frame(0.37, 4);
    let vp = Viewport::default();
    assert_eq!(
        frame_to_svg(&scene, &f, vp).unwrap(),
        frame_to_svg(&scene, &f, vp).unwrap()
    );
}

#[test]
fn cloud_fits_its_box_height() {
    let cloud = crate::scene::ensemble::cloud();
    let vp = Viewport::new(1000.0, 800.0);
    let (origin, scale) = cloud_placement(&cloud, Point::new(1100.0, 304.0), vp);
    assert!((scale - 170.0 / 140.0).abs() < 1e-12);
    assert!((origin.y - 219.0).abs() < 1e-9);
    assert!(origin.x > 0.0);
}

#[test]
fn rejects_empty_viewport() {
    let (scene, f) = frame(0.5, 1);
    assert!(frame_to_svg(&scene, &f, Viewport::new(0.0, 600.0)).is_err());
}
