use super::*;

const TWO_ELEMENTS: &str = r#"{
  "elements": [
    {
      "kind": "star",
      "position": { "x": 10.0, "y": 20.0 },
      "size": 20.0,
      "points": 5,
      "enter": [0.1, 0.2],
      "layer": "foreground"
    },
    {
      "kind": "moon",
      "position": { "x": 28.0, "y": 28.0 },
      "size": 140.0,
      "rise_window": [0.45, 0.6],
      "rise": 600.0,
      "ease": "Sinusoidal",
      "layer": "midground"
    }
  ]
}"#;

#[test]
fn parses_tagged_elements_with_defaults() {
    let scene = SceneConfig::from_json_str(TWO_ELEMENTS).unwrap();
    assert_eq!(scene.scroll, ScrollRange::default());
    assert_eq!(scene.elements.len(), 2);
    assert_eq!(scene.elements[0].kind(), ElementKind::Star);
    let ElementConfig::Star(star) = &scene.elements[0] else {
        panic!("expected a star");
    };
    assert_eq!(star.rise, 300.0);
    assert_eq!(star.min_scale, 0.6);
    assert_eq!(scene.elements[1].layer(), Layer::Midground);
}

#[test]
fn inverted_window_fails_at_load() {
    let bad = TWO_ELEMENTS.replace("[0.1, 0.2]", "[0.2, 0.1]");
    let err = SceneConfig::from_json_str(&bad).unwrap_err();
    assert!(matches!(err, NightscrollError::Serde(_)));
    assert!(err.to_string().contains("invalid window"));
}

#[test]
fn validation_names_the_offending_element() {
    let mut scene = SceneConfig::from_json_str(TWO_ELEMENTS).unwrap();
    if let ElementConfig::Star(star) = &mut scene.elements[0] {
        star.points = 1;
    }
    let msg = scene.validate().unwrap_err().to_string();
    assert!(msg.starts_with("validation error: element 0 (star)"));
}

#[test]
fn huge_point_count_fails_at_load() {
    let bad = TWO_ELEMENTS.replace("\"points\": 5", "\"points\": 2147483648");
    let err = SceneConfig::from_json_str(&bad).unwrap_err();
    assert!(matches!(err, NightscrollError::Validation(_)));
    assert!(err.to_string().contains("between 2 and 64 points"));
}

#[test]
fn empty_scene_is_rejected() {
    let scene = SceneConfig {
        scroll: ScrollRange::default(),
        elements: Vec::new(),
    };
    assert!(scene.validate().is_err());
}

#[test]
fn entrance_helpers_follow_the_element_kind() {
    let scene = SceneConfig::default();
    let arrow = &scene.elements[0];
    assert_eq!(arrow.kind(), ElementKind::Arrow);
    assert!(arrow.entrance_window().is_none());
    assert!(arrow.entrance_opacity(Progress::END).is_none());
    assert!(arrow.staged().is_some());

    let moon = scene
        .elements
        .iter()
        .find(|el| el.kind() == ElementKind::Moon)
        .unwrap();
    assert_eq!(moon.entrance_opacity(Progress::END), Some(1.0));
    assert!(moon.staged().is_none());
}

#[test]
fn overlap_report_lists_crossing_windows() {
    let mut scene = SceneConfig::from_json_str(TWO_ELEMENTS).unwrap();
    let mut second = scene.elements[0].clone();
    if let ElementConfig::Star(s) = &mut second {
        s.enter = ActivationWindow::new(0.15, 0.3).unwrap();
    }
    scene.elements.push(second);
    assert_eq!(scene.overlapping_entrances(ElementKind::Star), vec![(0, 2)]);
    assert!(scene.overlapping_entrances(ElementKind::Moon).is_empty());
}
