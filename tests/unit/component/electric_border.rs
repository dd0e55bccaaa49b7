use super::*;
use crate::animation::clock::{FixedStepTicker, Fps};

struct SkippingTicker {
    frame: u32,
}

impl FrameTicker for SkippingTicker {
    fn next_delta(&mut self) -> Option<FrameDelta> {
        self.frame += 1;
        if self.frame % 2 == 0 {
            None
        } else {
            Some(FrameDelta::Millis(100.0))
        }
    }
}

#[test]
fn draws_nothing_before_first_layout() {
    let mut b = ElectricBorder::default();
    b.on_frame(FrameDelta::Millis(16.0));
    assert!(b.path().is_empty());
    let frame = b.frame();
    assert!(frame.path.is_empty());
    assert_eq!((frame.surface.width, frame.surface.height), (120, 120));
}

#[test]
fn layout_snapshot_drives_the_path() {
    let mut b = ElectricBorder::default();
    b.on_layout(200.0, 100.0);
    let frame = b.frame();
    assert_eq!(frame.size, RegionSize::new(200.0, 100.0));
    assert_eq!((frame.surface.width, frame.surface.height), (320, 220));
    assert!(!frame.path.is_empty());

    b.on_layout(80.0, 40.0);
    let sampler = PathSampler::new(b.style());
    assert_eq!(b.path(), sampler.build_path(RegionSize::new(80.0, 40.0), 0.0));
}

#[test]
fn clock_advances_by_speed_scaled_delta() {
    let mut b = ElectricBorder::new(BorderStyle {
        speed: 0.5,
        ..BorderStyle::default()
    });
    b.on_frame(FrameDelta::Millis(1000.0));
    assert_eq!(b.time(), 0.5);
    b.on_frame(FrameDelta::Seconds(1.0));
    assert_eq!(b.time(), 1.0);
}

#[test]
fn skipped_frames_hold_the_clock() {
    let mut b = ElectricBorder::new(BorderStyle {
        speed: 1.0,
        ..BorderStyle::default()
    });
    let mut ticker = SkippingTicker { frame: 0 };
    assert_eq!(b.tick(&mut ticker), 0.1);
    assert_eq!(b.tick(&mut ticker), 0.1);
    assert!((b.tick(&mut ticker) - 0.2).abs() < 1e-12);
}

#[test]
fn instances_keep_separate_clocks() {
    let mut a = ElectricBorder::default();
    let b = ElectricBorder::default();
    let mut ticker = FixedStepTicker::new(Fps::new(60, 1).unwrap());
    for _ in 0..10 {
        a.tick(&mut ticker);
    }
    assert!(a.time() > 0.0);
    assert_eq!(b.time(), 0.0);
}

#[test]
fn style_is_sanitized_on_construction() {
    let b = ElectricBorder::new(BorderStyle {
        chaos: -1.0,
        border_radius: -5.0,
        ..BorderStyle::default()
    });
    assert_eq!(b.style().chaos, 0.0);
    assert_eq!(b.style().border_radius, 0.0);
}

#[test]
fn frame_carries_glow_layers_and_explicit_time() {
    let mut b = ElectricBorder::default();
    b.on_layout(64.0, 64.0);
    let f = b.frame_at(3.0);
    assert_eq!(f.time, 3.0);
    assert_eq!(f.layers, glow_layers(b.style()));
    assert_eq!(f.path, b.path_at(3.0));
}
