use super::*;

fn started_by(arrow: &ArrowConfig, now: Duration) -> Vec<Option<Duration>> {
    arrow
        .stages
        .stages
        .iter()
        .map(|s| (now >= s.delay).then_some(s.delay))
        .collect()
}

fn at(arrow: &ArrowConfig, ms: u64) -> ArrowChannels {
    let now = Duration::from_millis(ms);
    arrow
        .channels(Progress::START, &started_by(arrow, now), now)
        .unwrap()
}

#[test]
fn draw_in_follows_the_stage_schedule() {
    let arrow = ArrowConfig::scene_default();

    let start = at(&arrow, 0);
    assert_eq!((start.shaft, start.head_left, start.head_right), (0.0, 0.0, 0.0));

    assert_eq!(at(&arrow, 1000).shaft, 0.0);
    let drawing = at(&arrow, 1900).shaft;
    assert!(drawing > 0.0 && drawing < 1.0);
    assert_eq!(at(&arrow, 2800).shaft, 1.0);

    let mid = at(&arrow, 3100);
    assert!(mid.head_left > 0.0);
    assert_eq!(mid.head_right, 0.0);

    let done = at(&arrow, 3900);
    assert_eq!(done.head_left, 1.0);
    assert_eq!(done.head_right, 1.0);
}

#[test]
fn unfired_stages_read_zero_even_late() {
    let arrow = ArrowConfig::scene_default();
    let ch = arrow
        .channels(Progress::START, &[None, None, None], Duration::from_secs(10))
        .unwrap();
    assert_eq!(ch.shaft, 0.0);
    assert_eq!(ch.head_right, 0.0);
}

#[test]
fn exit_slides_off_over_the_first_stretch_of_scroll() {
    let arrow = ArrowConfig::scene_default();
    let exit = |p: f64| {
        arrow
            .channels(Progress::new(p), &[None, None, None], Duration::ZERO)
            .unwrap()
            .exit
    };
    assert_eq!(exit(0.0), 0.0);
    assert!((exit(0.065) - 400.0).abs() < 1e-9);
    assert_eq!(exit(0.13), 800.0);
    assert_eq!(exit(0.9), 800.0);
}

#[test]
fn validation_requires_three_stages() {
    assert!(ArrowConfig::scene_default().validate().is_ok());

    let mut short = ArrowConfig::scene_default();
    short.stages.stages.pop();
    assert!(short.validate().is_err());

    let mut bad_exit = ArrowConfig::scene_default();
    bad_exit.exit = vec![(0.5, 0.0), (0.2, 1.0)];
    assert!(bad_exit.validate().is_err());
}
