use crate::color::gradient::Gradient;
use crate::foundation::core::Rgba8;
use crate::foundation::error::{GaltonError, GaltonResult};
use crate::foundation::rng::Rng64;

/// Colors shared by every path of one generation.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ColorScheme {
    /// Base-stroke gradient, sampled by vertical position.
    pub gradient: Gradient,
    /// Glow tint for segments that stepped left.
    pub tint_left: Rgba8,
    /// Glow tint for segments that stepped right.
    pub tint_right: Rgba8,
    /// Surface clear color.
    pub background: Rgba8,
}

/// Glow tints for the two step directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TintPair {
    /// Tint for left steps.
    pub left: Rgba8,
    /// Tint for right steps.
    pub right: Rgba8,
}

/// Candidate colors a generation draws its [`ColorScheme`] from.
///
/// The three lists are sampled independently.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Palette {
    /// Candidate gradients.
    pub gradients: Vec<Gradient>,
    /// Candidate tint pairs.
    pub tints: Vec<TintPair>,
    /// Candidate backgrounds.
    pub backgrounds: Vec<Rgba8>,
}

impl Palette {
    /// Reject palettes with an empty candidate list.
    pub fn validate(&self) -> GaltonResult<()> {
        if self.gradients.is_empty() {
            return Err(GaltonError::validation("palette needs at least one gradient"));
        }
        if self.tints.is_empty() {
            return Err(GaltonError::validation(
                "palette needs at least one tint pair",
            ));
        }
        if self.backgrounds.is_empty() {
            return Err(GaltonError::validation(
                "palette needs at least one background",
            ));
        }
        Ok(())
    }

    /// Draw one gradient, one tint pair and one background; `None` if any list is empty.
    pub fn pick(&self, rng: &mut Rng64) -> Option<ColorScheme> {
        let gradient = self.gradients.get(rng.pick_index(self.gradients.len())?)?.clone();
        let tints = *self.tints.get(rng.pick_index(self.tints.len())?)?;
        let background = *self
            .backgrounds
            .get(rng.pick_index(self.backgrounds.len())?)?;
        Some(ColorScheme {
            gradient,
            tint_left: tints.left,
            tint_right: tints.right,
            background,
        })
    }
}

impl Default for Palette {
    fn default() -> Self {
        fn grad(stops: &[[u8; 3]]) -> Gradient {
            Gradient {
                stops: stops.iter().map(|&[r, g, b]| Rgba8::rgb(r, g, b)).collect(),
            }
        }

        Self {
            gradients: vec![
                // sunset
                grad(&[[0xff, 0x5f, 0x6d], [0xff, 0xc3, 0x71], [0xff, 0xf1, 0xa8]]),
                // lagoon
                grad(&[[0x00, 0xc6, 0xff], [0x00, 0x72, 0xff], [0x3a, 0x1c, 0x71]]),
                // acid
                grad(&[[0xd4, 0xfc, 0x79], [0x96, 0xe6, 0xa1], [0x2a, 0xf5, 0x98]]),
                // ember
                grad(&[
                    [0xf8, 0x57, 0x1f],
                    [0xe0, 0x1e, 0x5a],
                    [0x7b, 0x1f, 0xa2],
                    [0x1a, 0x23, 0x7e],
                ]),
                // mono
                grad(&[[0xff, 0xff, 0xff], [0x88, 0x88, 0x88]]),
            ],
            tints: vec![
                TintPair {
                    left: Rgba8::rgba(255, 0, 150, 128),
                    right: Rgba8::rgba(0, 200, 255, 128),
                },
                TintPair {
                    left: Rgba8::rgba(255, 220, 0, 115),
                    right: Rgba8::rgba(120, 0, 255, 115),
                },
                TintPair {
                    left: Rgba8::rgba(0, 255, 140, 102),
                    right: Rgba8::rgba(255, 80, 0, 102),
                },
            ],
            backgrounds: vec![
                Rgba8::rgb(0x0b, 0x0b, 0x12),
                Rgba8::rgb(0x12, 0x14, 0x1c),
                Rgba8::rgb(0x1a, 0x10, 0x2b),
                Rgba8::rgb(0x00, 0x00, 0x00),
            ],
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/color/scheme.rs"]
mod tests;
