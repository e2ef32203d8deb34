use super::*;

fn cloud() -> CloudConfig {
    CloudConfig {
        right: -10.0,
        top: 38.0,
        width_vw: 110.0,
        height: 170.0,
        slide: ActivationWindow::new(0.28, 0.48).unwrap(),
        fade: ActivationWindow::new(0.28, 0.31).unwrap(),
        start_x: 1400.0,
        end_x: -2400.0,
        ease: Ease::Sinusoidal,
        layer: Layer::Midground,
    }
}

#[test]
fn slides_from_right_to_left() {
    let c = cloud();
    assert_eq!(c.channels(Progress::new(0.1)).slide, 1400.0);
    assert_eq!(c.channels(Progress::new(0.48)).slide, -2400.0);
    let mid = c.channels(Progress::new(0.38)).slide;
    assert!((mid - -500.0).abs() < 1e-6);
}

#[test]
fn stroke_fades_in_quickly_while_slide_continues() {
    let c = cloud();
    let at = c.channels(Progress::new(0.31));
    assert_eq!(at.stroke_opacity, 1.0);
    assert!(at.slide < 1400.0);
    assert!(at.slide > -2400.0);
}

#[test]
fn box_hangs_past_the_right_edge() {
    let c = cloud();
    let vp = Viewport::new(1000.0, 800.0);
    assert_eq!(c.box_width(vp), 1100.0);
    let origin = c.box_origin(vp);
    assert_eq!(origin.x, 0.0);
    assert!((origin.y - (304.0 - 85.0)).abs() < 1e-9);
}

#[test]
fn validation_rejects_empty_box() {
    let mut c = cloud();
    c.height = 0.0;
    assert!(c.validate().is_err());
    assert!(cloud().validate().is_ok());
}
