//! Gaussian glow blur for premultiplied RGBA8 layers.

use crate::foundation::error::{BorderError, BorderResult};

const Q16_ONE: u32 = 1 << 16;
const Q16_HALF: u64 = 1 << 15;

/// Kernel radius covering ±3σ of a Gaussian.
pub fn radius_for_sigma(sigma: f64) -> u32 {
    if !sigma.is_finite() || sigma <= 0.0 {
        return 0;
    }
    (sigma * 3.0).ceil().min(f64::from(u16::MAX)) as u32
}

/// Blur a premultiplied RGBA8 layer with a Gaussian of standard deviation `sigma`.
///
/// The kernel spans [`radius_for_sigma`] pixels each way and samples past the edges clamp to
/// the border pixel. A sigma that yields radius 0 returns the input unchanged.
pub fn blur_rgba8_premul(
    src: &[u8],
    width: u32,
    height: u32,
    sigma: f64,
) -> BorderResult<Vec<u8>> {
    let (w, h) = (width as usize, height as usize);
    let len = w
        .checked_mul(h)
        .and_then(|v| v.checked_mul(4))
        .ok_or_else(|| BorderError::render("blur buffer size overflow"))?;
    if src.len() != len {
        return Err(BorderError::render(format!(
            "blur expects {len} bytes for {width}x{height}, got {}",
            src.len()
        )));
    }

    let Some(kernel) = Kernel::gaussian(sigma) else {
        return Ok(src.to_vec());
    };
    if len == 0 {
        return Ok(Vec::new());
    }

    let mut rows = vec![0u8; len];
    let mut out = vec![0u8; len];
    blur_pass(src, &mut rows, w, h, &kernel, Axis::Horizontal);
    blur_pass(&rows, &mut out, w, h, &kernel, Axis::Vertical);
    Ok(out)
}

#[derive(Clone, Copy, Debug)]
enum Axis {
    Horizontal,
    Vertical,
}

/// Normalized Q16 weights for offsets `-radius..=radius`; they sum to exactly `Q16_ONE`.
struct Kernel {
    weights: Vec<u32>,
    radius: usize,
}

impl Kernel {
    fn gaussian(sigma: f64) -> Option<Self> {
        let radius = radius_for_sigma(sigma) as usize;
        if radius == 0 {
            return None;
        }

        let two_sigma_sq = 2.0 * sigma * sigma;
        let raw: Vec<f64> = (0..=2 * radius)
            .map(|i| {
                let d = i as f64 - radius as f64;
                (-d * d / two_sigma_sq).exp()
            })
            .collect();
        let total: f64 = raw.iter().sum();

        let mut weights: Vec<u32> = raw
            .iter()
            .map(|w| (w / total * f64::from(Q16_ONE)).round() as u32)
            .collect();
        // Rounding drift goes to the center tap.
        let assigned: i64 = weights.iter().map(|&w| i64::from(w)).sum();
        let center = i64::from(weights[radius]) + i64::from(Q16_ONE) - assigned;
        weights[radius] = center.max(0) as u32;

        Some(Self { weights, radius })
    }
}

// One 1-D convolution along `axis` for every row (or column) of the image.
fn blur_pass(
    src: &[u8],
    dst: &mut [u8],
    width: usize,
    height: usize,
    kernel: &Kernel,
    axis: Axis,
) {
    let (line_len, step, lines, line_stride) = match axis {
        Axis::Horizontal => (width, 4, height, width * 4),
        Axis::Vertical => (height, width * 4, width, 4),
    };

    for line in 0..lines {
        let base = line * line_stride;
        for i in 0..line_len {
            let mut acc = [0u64; 4];
            for (k, &weight) in kernel.weights.iter().enumerate() {
                let j = (i + k).saturating_sub(kernel.radius).min(line_len - 1);
                let px = base + j * step;
                for (a, &c) in acc.iter_mut().zip(&src[px..px + 4]) {
                    *a += u64::from(weight) * u64::from(c);
                }
            }
            let out = base + i * step;
            for (d, a) in dst[out..out + 4].iter_mut().zip(acc) {
                *d = ((a + Q16_HALF) >> 16).min(255) as u8;
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/blur.rs"]
mod tests;
