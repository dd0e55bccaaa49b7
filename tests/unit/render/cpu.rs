use super::*;
use crate::config::style::BorderStyle;
use crate::foundation::core::RegionSize;
use crate::path::border_path::BorderPath;
use crate::path::sampler::PathSampler;
use crate::render::layers::{SurfaceDesc, glow_layers};

fn frame_for(style: &BorderStyle, size: RegionSize, time: f64) -> BorderFrame {
    BorderFrame {
        time,
        size,
        path: PathSampler::new(style).build_path(size, time),
        surface: SurfaceDesc::for_region(size),
        layers: glow_layers(style),
    }
}

fn alpha_at(frame: &FrameRGBA, x: u32, y: u32) -> u8 {
    frame.data[((y * frame.width + x) * 4 + 3) as usize]
}

#[test]
fn empty_path_renders_the_clear_color() {
    let mut r = CpuRenderer::new(RenderSettings {
        clear_rgba: Some([18, 20, 28, 255]),
    });
    let mut frame = frame_for(&BorderStyle::default(), RegionSize::new(40.0, 20.0), 0.0);
    frame.path = BorderPath::empty();
    let out = r.render(&frame).unwrap();
    assert_eq!((out.width, out.height), (160, 140));
    assert!(out.premultiplied);
    assert!(out.data.chunks_exact(4).all(|px| px == [18, 20, 28, 255]));
}

#[test]
fn outline_is_lit_and_interior_stays_clear() {
    let style = BorderStyle {
        chaos: 0.0,
        ..BorderStyle::default()
    };
    let mut r = CpuRenderer::new(RenderSettings::default());
    let out = r
        .render(&frame_for(&style, RegionSize::new(200.0, 100.0), 0.0))
        .unwrap();
    assert_eq!((out.width, out.height), (320, 220));

    // Top edge runs along y = 60 in surface space.
    assert!(alpha_at(&out, 160, 60) > 0);
    assert!(alpha_at(&out, 160, 59) > 0);
    // Content center and the far surface corner see no glow.
    assert_eq!(alpha_at(&out, 160, 110), 0);
    assert_eq!(alpha_at(&out, 0, 0), 0);
}

#[test]
fn rendering_is_deterministic() {
    let style = BorderStyle::default();
    let frame = frame_for(&style, RegionSize::new(120.0, 60.0), 1.25);
    let a = CpuRenderer::new(RenderSettings::default())
        .render(&frame)
        .unwrap();
    let b = CpuRenderer::new(RenderSettings::default())
        .render(&frame)
        .unwrap();
    assert_eq!(a, b);
}

#[test]
fn oversized_surface_is_a_render_error() {
    let mut frame = frame_for(&BorderStyle::default(), RegionSize::new(10.0, 10.0), 0.0);
    frame.surface = SurfaceDesc {
        width: 70_000,
        height: 10,
    };
    let err = CpuRenderer::new(RenderSettings::default())
        .render(&frame)
        .unwrap_err();
    assert!(matches!(err, BorderError::Render(_)));
}
