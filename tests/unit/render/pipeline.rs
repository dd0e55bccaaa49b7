use super::*;

fn small() -> RegionSize {
    RegionSize::new(40.0, 24.0)
}

#[test]
fn frames_follow_the_fixed_step_clock() {
    let style = BorderStyle {
        speed: 2.0,
        ..BorderStyle::default()
    };
    let frames = build_frames(&style, small(), Fps::new(4, 1).unwrap(), 5);
    let times: Vec<f64> = frames.iter().map(|f| f.time).collect();
    assert_eq!(times, vec![0.0, 0.5, 1.0, 1.5, 2.0]);

    let sampler = PathSampler::new(&style);
    assert_eq!(frames[3].path, sampler.build_path(small(), 1.5));
}

#[test]
fn fingerprint_tracks_exact_points() {
    let sampler = PathSampler::new(&BorderStyle::default());
    let a = sampler.build_path(small(), 0.0);
    let b = sampler.build_path(small(), 0.0);
    let c = sampler.build_path(small(), 0.1);
    assert_eq!(frame_fingerprint(&a), frame_fingerprint(&b));
    assert_ne!(frame_fingerprint(&a), frame_fingerprint(&c));
    assert_ne!(
        frame_fingerprint(&a),
        frame_fingerprint(&BorderPath::empty())
    );
}

#[test]
fn zero_frames_is_rejected() {
    let err = render_sequence(
        &BorderStyle::default(),
        small(),
        Fps::new(30, 1).unwrap(),
        0,
        &RenderSettings::default(),
        &RenderThreading::default(),
    )
    .unwrap_err();
    assert!(matches!(err, BorderError::Validation(_)));
}

#[test]
fn static_style_elides_repeated_frames() {
    let still = BorderStyle {
        chaos: 0.0,
        ..BorderStyle::default()
    };
    let threading = RenderThreading {
        static_frame_elision: true,
        ..RenderThreading::default()
    };
    let (frames, stats) = render_sequence(
        &still,
        small(),
        Fps::new(30, 1).unwrap(),
        4,
        &RenderSettings::default(),
        &threading,
    )
    .unwrap();
    assert_eq!(frames.len(), 4);
    assert_eq!(stats.frames_rendered, 1);
    assert_eq!(stats.frames_elided, 3);
    assert!(frames.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn parallel_matches_serial() {
    let style = BorderStyle::default();
    let fps = Fps::new(30, 1).unwrap();
    let settings = RenderSettings {
        clear_rgba: Some([0, 0, 0, 255]),
    };
    let (serial, s_stats) = render_sequence(
        &style,
        small(),
        fps,
        3,
        &settings,
        &RenderThreading::default(),
    )
    .unwrap();
    let (parallel, p_stats) = render_sequence(
        &style,
        small(),
        fps,
        3,
        &settings,
        &RenderThreading {
            parallel: true,
            threads: Some(2),
            static_frame_elision: false,
        },
    )
    .unwrap();
    assert_eq!(serial, parallel);
    assert_eq!(s_stats, p_stats);
    assert_eq!(s_stats.frames_rendered, 3);
}

#[test]
fn zero_threads_is_rejected() {
    let err = render_sequence(
        &BorderStyle::default(),
        small(),
        Fps::new(30, 1).unwrap(),
        1,
        &RenderSettings::default(),
        &RenderThreading {
            parallel: true,
            threads: Some(0),
            static_frame_elision: false,
        },
    )
    .unwrap_err();
    assert!(matches!(err, BorderError::Validation(_)));
}
