use crate::foundation::error::{BorderError, BorderResult};
use crate::foundation::math::mul_div255;

/// Premultiplied source-over for a single pixel.
pub fn over(dst: [u8; 4], src: [u8; 4]) -> [u8; 4] {
    if src[3] == 0 {
        return dst;
    }
    let inv = 255u16 - u16::from(src[3]);
    let mut out = [0u8; 4];
    for i in 0..4 {
        let d = mul_div255(u16::from(dst[i]), inv);
        out[i] = (u16::from(src[i]) + d).min(255) as u8;
    }
    out
}

/// Composite `src` over `dst` in place; both are premultiplied RGBA8 of equal size.
pub fn over_in_place(dst: &mut [u8], src: &[u8]) -> BorderResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(BorderError::render(
            "over_in_place expects equal-length rgba8 buffers",
        ));
    }
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]]);
        d.copy_from_slice(&out);
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
