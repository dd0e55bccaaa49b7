use super::*;

#[test]
fn millis_normalize_to_seconds() {
    assert_eq!(FrameDelta::Millis(16.0).as_secs(), 0.016);
    assert_eq!(FrameDelta::Seconds(0.25).as_secs(), 0.25);
}

#[test]
fn bad_deltas_do_not_move_the_clock() {
    for d in [
        FrameDelta::Seconds(-1.0),
        FrameDelta::Millis(f64::NAN),
        FrameDelta::Seconds(f64::INFINITY),
    ] {
        assert_eq!(d.as_secs(), 0.0);
    }
    let mut clock = AnimationClock::new(1.0);
    clock.advance(FrameDelta::Seconds(-5.0));
    assert_eq!(clock.elapsed(), 0.0);
}

#[test]
fn clock_scales_by_speed() {
    let mut clock = AnimationClock::new(0.5);
    clock.advance(FrameDelta::Millis(1000.0));
    assert_eq!(clock.elapsed(), 0.5);
    assert_eq!(clock.advance(FrameDelta::Seconds(2.0)), 1.5);
    clock.reset();
    assert_eq!(clock.elapsed(), 0.0);
}

#[test]
fn clock_is_monotonic() {
    let mut clock = AnimationClock::new(3.0);
    let mut prev = clock.elapsed();
    for ms in [16.0, 0.0, -3.0, 33.0, f64::NAN, 8.0] {
        let now = clock.advance(FrameDelta::Millis(ms));
        assert!(now >= prev);
        prev = now;
    }
}

#[test]
fn negative_speed_freezes() {
    let mut clock = AnimationClock::new(-2.0);
    assert_eq!(clock.speed(), 0.0);
    clock.advance(FrameDelta::Seconds(1.0));
    assert_eq!(clock.elapsed(), 0.0);
}

#[test]
fn fps_validation_and_duration() {
    assert!(Fps::new(30, 0).is_err());
    assert!(Fps::new(0, 1).is_err());
    let fps = Fps::new(60, 1).unwrap();
    assert_eq!(fps.as_f64(), 60.0);
    assert_eq!(fps.frame_duration_secs(), 1.0 / 60.0);
}

#[test]
fn fixed_step_ticker_drives_clock() {
    let mut ticker = FixedStepTicker::new(Fps::new(4, 1).unwrap());
    let mut clock = AnimationClock::new(1.0);
    for _ in 0..8 {
        let d = ticker.next_delta().unwrap();
        clock.advance(d);
    }
    assert_eq!(clock.elapsed(), 2.0);

    let mut ms = FixedStepTicker::with_step(FrameDelta::Millis(500.0));
    assert_eq!(ms.next_delta().map(FrameDelta::as_secs), Some(0.5));
}

#[test]
fn instant_ticker_skips_first_frame() {
    let mut ticker = InstantTicker::new();
    assert_eq!(ticker.next_delta(), None);
    let d = ticker.next_delta().unwrap();
    assert!(d.as_secs() >= 0.0);
}
