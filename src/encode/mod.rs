//! Frame sinks.
//!
//! Sinks consume rendered frames in playback order and are driven by [`crate::play_to_sink`].

/// `ffmpeg`-based sink (MP4 output via the system `ffmpeg`).
pub mod ffmpeg;
/// PNG sequence sink.
pub mod png;
/// Generic frame sink trait and the in-memory sink.
pub mod sink;

use crate::foundation::core::Rgba8;
use crate::foundation::error::{GaltonError, GaltonResult};
use crate::render::composite::mul_div255;
use std::path::Path;

/// Flatten premultiplied RGBA8 over an opaque background into opaque RGBA8.
pub(crate) fn flatten_premul_over_bg(
    dst: &mut [u8],
    src_premul: &[u8],
    bg: Rgba8,
) -> GaltonResult<()> {
    if dst.len() != src_premul.len() || !dst.len().is_multiple_of(4) {
        return Err(GaltonError::encode(
            "flatten_premul_over_bg expects equal-length rgba8 buffers",
        ));
    }

    let [bg_r, bg_g, bg_b, _] = bg.to_array().map(u16::from);
    for (d, s) in dst.chunks_exact_mut(4).zip(src_premul.chunks_exact(4)) {
        let a = u16::from(s[3]);
        if a == 255 {
            d.copy_from_slice(s);
            continue;
        }

        let inv = 255 - a;
        d[0] = s[0].saturating_add(mul_div255(bg_r, inv));
        d[1] = s[1].saturating_add(mul_div255(bg_g, inv));
        d[2] = s[2].saturating_add(mul_div255(bg_b, inv));
        d[3] = 255;
    }
    Ok(())
}

/// Ensure the parent directory of `path` exists.
pub fn ensure_parent_dir(path: &Path) -> GaltonResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        use anyhow::Context as _;
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/flatten.rs"]
mod tests;
