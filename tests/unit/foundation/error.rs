use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        NightscrollError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        NightscrollError::animation("x")
            .to_string()
            .contains("animation error:")
    );
    assert!(
        NightscrollError::evaluation("x")
            .to_string()
            .contains("evaluation error:")
    );
    assert!(
        NightscrollError::render("x")
            .to_string()
            .contains("render error:")
    );
    assert!(
        NightscrollError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn invalid_window_reports_bounds() {
    let msg = NightscrollError::invalid_window(0.5, 0.25).to_string();
    assert!(msg.starts_with("invalid window:"));
    assert!(msg.contains("0.5"));
    assert!(msg.contains("0.25"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = NightscrollError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
