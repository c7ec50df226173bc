use crate::foundation::error::{GaltonError, GaltonResult};

/// Source-over for one premultiplied RGBA8 pixel.
pub(crate) fn over(dst: [u8; 4], src: [u8; 4]) -> [u8; 4] {
    let sa = u16::from(src[3]);
    if sa == 0 {
        return dst;
    }
    if sa == 255 {
        return src;
    }

    let inv = 255 - sa;
    let mut out = [0u8; 4];
    for i in 0..4 {
        out[i] = src[i].saturating_add(mul_div255(u16::from(dst[i]), inv));
    }
    out
}

/// Composite `src` over `dst` in place; both buffers are premultiplied RGBA8 of equal length.
pub(crate) fn over_in_place(dst: &mut [u8], src: &[u8]) -> GaltonResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(GaltonError::render(
            "over_in_place expects equal-length rgba8 buffers",
        ));
    }
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]]);
        d.copy_from_slice(&out);
    }
    Ok(())
}

/// Composite a `width`×`height` premultiplied `src` over `dst` (a surface `dst_width` pixels
/// wide) with its top-left corner at `(x, y)`.
pub(crate) fn over_region(
    dst: &mut [u8],
    dst_width: usize,
    src: &[u8],
    x: usize,
    y: usize,
    width: usize,
    height: usize,
) -> GaltonResult<()> {
    let row_len = width * 4;
    if src.len() != row_len * height || x + width > dst_width {
        return Err(GaltonError::render("over_region source does not fit the surface"));
    }
    for (row, src_row) in src.chunks_exact(row_len).enumerate() {
        let start = ((y + row) * dst_width + x) * 4;
        let dst_row = dst
            .get_mut(start..start + row_len)
            .ok_or_else(|| GaltonError::render("over_region row outside the surface"))?;
        over_in_place(dst_row, src_row)?;
    }
    Ok(())
}

/// Fill a premultiplied RGBA8 buffer with one pixel value.
pub(crate) fn fill(dst: &mut [u8], px: [u8; 4]) {
    for d in dst.chunks_exact_mut(4) {
        d.copy_from_slice(&px);
    }
}

pub(crate) fn mul_div255(x: u16, y: u16) -> u8 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
