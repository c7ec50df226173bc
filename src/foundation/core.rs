use crate::foundation::error::{GaltonError, GaltonResult};

pub use kurbo::Point;

/// Raster surface dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Create a validated canvas.
    ///
    /// The CPU renderer addresses pixmaps with `u16`, so both sides must fit.
    pub fn new(width: u32, height: u32) -> GaltonResult<Self> {
        let canvas = Self { width, height };
        canvas.validate()?;
        Ok(canvas)
    }

    /// Check that both sides are non-zero and fit the raster backend.
    pub fn validate(self) -> GaltonResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(GaltonError::validation("canvas width/height must be > 0"));
        }
        if self.width > u32::from(u16::MAX) || self.height > u32::from(u16::MAX) {
            return Err(GaltonError::validation(format!(
                "canvas {}x{} exceeds the {}px raster limit",
                self.width,
                self.height,
                u16::MAX
            )));
        }
        Ok(())
    }

    /// Number of RGBA8 bytes needed for one frame.
    pub fn rgba8_len(self) -> usize {
        (self.width as usize) * (self.height as usize) * 4
    }
}

/// Zero-based index of an exported frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrameIndex(pub u64);

/// Straight-alpha RGBA8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8 {
    /// Opaque color from RGB channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Color from all four channels.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Channels as an array in `[r, g, b, a]` order.
    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Convert to premultiplied RGBA8.
    pub fn to_premul(self) -> [u8; 4] {
        fn premul(c: u8, a: u8) -> u8 {
            let c = u16::from(c);
            let a = u16::from(a);
            (((c * a) + 127) / 255) as u8
        }

        [
            premul(self.r, self.a),
            premul(self.g, self.a),
            premul(self.b, self.a),
            self.a,
        ]
    }
}

/// Which way a path stepped to reach a vertex.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(into = "i8", try_from = "i8")]
pub enum Direction {
    /// Stepped towards negative x.
    Left,
    /// First vertex of a path; no step was taken.
    Origin,
    /// Stepped towards positive x.
    Right,
}

impl Direction {
    /// Signed unit step: `-1`, `0`, or `+1`.
    pub fn sign(self) -> i8 {
        match self {
            Self::Left => -1,
            Self::Origin => 0,
            Self::Right => 1,
        }
    }
}

impl From<Direction> for i8 {
    fn from(d: Direction) -> Self {
        d.sign()
    }
}

impl TryFrom<i8> for Direction {
    type Error = String;

    fn try_from(v: i8) -> Result<Self, Self::Error> {
        match v {
            -1 => Ok(Self::Left),
            0 => Ok(Self::Origin),
            1 => Ok(Self::Right),
            other => Err(format!("direction must be -1, 0 or 1 (got {other})")),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
