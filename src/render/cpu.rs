use crate::foundation::core::BezPath;
use crate::foundation::error::{BorderError, BorderResult};
use crate::render::blur::{blur_rgba8_premul, radius_for_sigma};
use crate::render::composite::over_in_place;
use crate::render::layers::{BorderFrame, GlowLayer};

/// A rendered frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Pixel width.
    pub width: u32,
    /// Pixel height.
    pub height: u32,
    /// Row-major RGBA8 bytes.
    pub data: Vec<u8>,
    /// Whether `data` is premultiplied by alpha.
    pub premultiplied: bool,
}

/// Options shared by every frame a renderer produces.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderSettings {
    /// Straight-alpha background; `None` leaves the surface transparent.
    pub clear_rgba: Option<[u8; 4]>,
}

/// CPU presentation backend: strokes every glow layer with `vello_cpu`, blurs, composites.
pub struct CpuRenderer {
    settings: RenderSettings,
}

impl CpuRenderer {
    /// New renderer.
    pub fn new(settings: RenderSettings) -> Self {
        Self { settings }
    }

    /// Settings this renderer was built with.
    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    /// Rasterize one frame onto its padded surface.
    #[tracing::instrument(skip_all, fields(time = frame.time, points = frame.path.len()))]
    pub fn render(&mut self, frame: &BorderFrame) -> BorderResult<FrameRGBA> {
        let width: u16 = frame
            .surface
            .width
            .try_into()
            .map_err(|_| BorderError::render("surface width exceeds u16"))?;
        let height: u16 = frame
            .surface
            .height
            .try_into()
            .map_err(|_| BorderError::render("surface height exceeds u16"))?;

        let clear = self
            .settings
            .clear_rgba
            .map(premul_rgba8)
            .unwrap_or([0, 0, 0, 0]);
        let mut data = clear.repeat(usize::from(width) * usize::from(height));

        if !frame.path.is_empty() && width > 0 && height > 0 {
            let path = bezpath_to_cpu(&frame.path.to_bez_path());
            for layer in &frame.layers {
                let stroked = stroke_layer(&path, layer, width, height)?;
                over_in_place(&mut data, &stroked)?;
            }
        }

        Ok(FrameRGBA {
            width: u32::from(width),
            height: u32::from(height),
            data,
            premultiplied: true,
        })
    }
}

fn stroke_layer(
    path: &vello_cpu::kurbo::BezPath,
    layer: &GlowLayer,
    width: u16,
    height: u16,
) -> BorderResult<Vec<u8>> {
    use vello_cpu::kurbo::{Cap, Join, Stroke};

    let mut ctx = vello_cpu::RenderContext::new(width, height);
    ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
    ctx.set_stroke(
        Stroke::new(layer.stroke_width)
            .with_join(Join::Round)
            .with_caps(Cap::Round),
    );
    let c = layer.color;
    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a));
    ctx.stroke_path(path);
    ctx.flush();

    let mut pixmap = vello_cpu::Pixmap::new(width, height);
    ctx.render_to_pixmap(&mut pixmap);
    let bytes = pixmap.data_as_u8_slice().to_vec();

    if radius_for_sigma(layer.blur_sigma) == 0 {
        return Ok(bytes);
    }
    blur_rgba8_premul(&bytes, u32::from(width), u32::from(height), layer.blur_sigma)
}

fn premul_rgba8([r, g, b, a]: [u8; 4]) -> [u8; 4] {
    crate::foundation::core::Rgba8 { r, g, b, a }.premultiplied()
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let pt = |p: kurbo::Point| vello_cpu::kurbo::Point::new(p.x, p.y);
    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(pt(p)),
            PathEl::LineTo(p) => out.line_to(pt(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(pt(p1), pt(p2)),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(pt(p1), pt(p2), pt(p3)),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
