use crate::foundation::core::Rgba8;
use crate::foundation::error::{GaltonError, GaltonResult};

/// Ordered, non-empty sequence of control colors.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "Vec<Rgba8>", into = "Vec<Rgba8>")]
pub struct Gradient {
    pub(crate) stops: Vec<Rgba8>,
}

impl Gradient {
    /// Create a gradient from its control colors (at least one).
    pub fn new(stops: Vec<Rgba8>) -> GaltonResult<Self> {
        if stops.is_empty() {
            return Err(GaltonError::validation(
                "gradient must have at least one control color",
            ));
        }
        Ok(Self { stops })
    }

    /// Parse every stop with [`crate::parse_color`].
    pub fn from_strs<S: AsRef<str>>(stops: &[S]) -> GaltonResult<Self> {
        let stops = stops
            .iter()
            .map(|s| crate::color::hex::parse_color(s.as_ref()))
            .collect::<GaltonResult<Vec<_>>>()?;
        Self::new(stops)
    }

    /// Control colors in order.
    pub fn stops(&self) -> &[Rgba8] {
        &self.stops
    }

    /// Color at `ratio` along the gradient.
    ///
    /// `ratio` is clamped into `[0, 1]` and scaled onto the `N - 1` intervals between control
    /// colors. At `ratio == 1.0` the scaled index equals `N - 1`; it is folded back onto the last
    /// interval with `t = 1` so the result is exactly the last stop. Channels are interpolated
    /// linearly and rounded half away from zero.
    pub fn interpolate(&self, ratio: f64) -> Rgba8 {
        let n = self.stops.len();
        if n == 1 {
            return self.stops[0];
        }

        let ratio = if ratio.is_finite() {
            ratio.clamp(0.0, 1.0)
        } else {
            0.0
        };
        let scaled = ratio * (n - 1) as f64;
        let idx = (scaled.floor() as usize).min(n - 2);
        let t = scaled - idx as f64;

        lerp_rgba8(self.stops[idx], self.stops[idx + 1], t)
    }
}

impl TryFrom<Vec<Rgba8>> for Gradient {
    type Error = GaltonError;

    fn try_from(stops: Vec<Rgba8>) -> Result<Self, Self::Error> {
        Self::new(stops)
    }
}

impl From<Gradient> for Vec<Rgba8> {
    fn from(g: Gradient) -> Self {
        g.stops
    }
}

/// Linear per-channel interpolation in straight-alpha RGB space.
pub fn lerp_rgba8(a: Rgba8, b: Rgba8, t: f64) -> Rgba8 {
    fn lerp(a: u8, b: u8, t: f64) -> u8 {
        let a = f64::from(a);
        let b = f64::from(b);
        (a + (b - a) * t).round().clamp(0.0, 255.0) as u8
    }

    let t = t.clamp(0.0, 1.0);
    Rgba8 {
        r: lerp(a.r, b.r, t),
        g: lerp(a.g, b.g, t),
        b: lerp(a.b, b.b, t),
        a: lerp(a.a, b.a, t),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/color/gradient.rs"]
mod tests;
