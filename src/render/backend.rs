use crate::color::scheme::ColorScheme;
use crate::foundation::error::GaltonResult;
use crate::sim::path::Path;

/// A rendered frame as RGBA8 pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl Frame {
    /// Pixel at `(x, y)` as `[r, g, b, a]`, or `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + x as usize) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Convert to straight alpha (no-op when already straight).
    pub fn into_straight(mut self) -> Self {
        if self.premultiplied {
            for px in self.data.chunks_exact_mut(4) {
                let a = u32::from(px[3]);
                if a == 0 || a == 255 {
                    continue;
                }
                for c in &mut px[..3] {
                    *c = ((u32::from(*c) * 255 + a / 2) / a).min(255) as u8;
                }
            }
            self.premultiplied = false;
        }
        self
    }
}

/// Something that can draw a generation's revealed paths onto a raster surface.
pub trait RenderBackend {
    /// Redraw the whole surface for `scheme` and `revealed`.
    ///
    /// Returns `Ok(false)` without drawing when no surface is attached or no scheme exists yet.
    fn redraw(&mut self, scheme: Option<&ColorScheme>, revealed: &[Path]) -> GaltonResult<bool>;

    /// Copy of the current surface contents, if a surface is attached.
    fn snapshot(&self) -> Option<Frame>;
}
