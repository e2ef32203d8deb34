use super::*;

use kurbo::{PathEl, Shape};

#[test]
fn trim_line_scales_from_start() {
    let half = trim_line(ARROW_SHAFT, 0.5);
    assert_eq!(half.p0, ARROW_SHAFT.p0);
    assert_eq!(half.p1, Point::new(30.0, 71.0));

    assert_eq!(trim_line(ARROW_SHAFT, 0.0).p1, ARROW_SHAFT.p0);
    assert_eq!(trim_line(ARROW_SHAFT, 4.0).p1, ARROW_SHAFT.p1);
}

#[test]
fn arrowheads_meet_the_shaft_tip() {
    assert_eq!(ARROW_HEAD_LEFT.p0, ARROW_SHAFT.p1);
    assert_eq!(ARROW_HEAD_RIGHT.p0, ARROW_SHAFT.p1);
}

#[test]
fn cloud_outline_is_closed_and_fits_its_view_box() {
    let cloud = cloud_outline();
    assert_eq!(cloud.elements().first(), Some(&PathEl::MoveTo(Point::new(12.0, 95.0))));
    assert_eq!(cloud.elements().last(), Some(&PathEl::ClosePath));

    let bounds = cloud.bounding_box();
    assert!(bounds.x0 > -5.0);
    assert!(bounds.x1 < CLOUD_VIEW_BOX.0 + 10.0);
    assert!(bounds.y0 >= 0.0);
    assert!(bounds.y1 <= CLOUD_VIEW_BOX.1);
}

#[test]
fn moon_radius_insets_stroke() {
    assert_eq!(moon_radius(140.0), 69.0);
    assert_eq!(moon_radius(1.0), 0.0);
}
