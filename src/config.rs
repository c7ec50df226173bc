use crate::color::scheme::Palette;
use crate::foundation::core::Canvas;
use crate::foundation::error::{GaltonError, GaltonResult};
use crate::sim::grid::GridSpec;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

/// Fraction of the canvas width reported by `visible_render_width`.
pub const VISIBLE_RENDER_FRACTION: f64 = 0.4;

/// Stroke widths and glow blur for the two overlaid strokes of every segment.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct StrokeStyle {
    /// Width of the gradient base stroke.
    pub line_width: f64,
    /// Width of the tinted glow stroke.
    pub glow_width: f64,
    /// Gaussian blur radius of the glow layer, in pixels. `0` disables the blur.
    pub glow_radius: u32,
    /// Gaussian sigma of the glow blur.
    pub glow_sigma: f32,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            line_width: 6.0,
            glow_width: 2.0,
            glow_radius: 6,
            glow_sigma: 3.0,
        }
    }
}

/// Everything an animator needs, loadable from JSON.
///
/// Missing fields fall back to the [`AnimatorConfig::mint`] preset.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnimatorConfig {
    /// Raster surface size.
    pub canvas: Canvas,
    /// Paths per generation.
    pub num_balls: u32,
    /// Grid geometry.
    pub grid: GridSpec,
    /// Reveal timer period in milliseconds.
    pub reveal_interval_ms: u64,
    /// Stroke styling.
    pub stroke: StrokeStyle,
    /// Fixed PRNG seed; `None` seeds from the clock.
    pub seed: Option<u64>,
    /// Color candidates.
    pub palette: Palette,
}

impl Default for AnimatorConfig {
    fn default() -> Self {
        Self::mint()
    }
}

impl AnimatorConfig {
    /// Dense animator used for the minted artwork.
    pub fn mint() -> Self {
        Self {
            canvas: Canvas {
                width: 600,
                height: 600,
            },
            num_balls: 100,
            grid: GridSpec::default(),
            reveal_interval_ms: 50,
            stroke: StrokeStyle::default(),
            seed: None,
            palette: Palette::default(),
        }
    }

    /// Lighter animator: fewer balls revealed more slowly.
    pub fn preview() -> Self {
        Self {
            num_balls: 30,
            reveal_interval_ms: 150,
            ..Self::mint()
        }
    }

    /// Look up a preset by name (`mint` or `preview`).
    pub fn preset(name: &str) -> GaltonResult<Self> {
        match name {
            "mint" => Ok(Self::mint()),
            "preview" => Ok(Self::preview()),
            other => Err(GaltonError::validation(format!(
                "unknown preset \"{other}\" (expected \"mint\" or \"preview\")"
            ))),
        }
    }

    /// Parse a config from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> GaltonResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| GaltonError::serde(format!("parse animator config JSON: {e}")))
    }

    /// Parse a config from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> GaltonResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            GaltonError::validation(format!("open animator config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check every field.
    pub fn validate(&self) -> GaltonResult<()> {
        self.canvas.validate()?;
        self.grid.validate()?;
        if self.reveal_interval_ms == 0 {
            return Err(GaltonError::validation("reveal_interval_ms must be > 0"));
        }
        let s = &self.stroke;
        if !(s.line_width.is_finite() && s.line_width > 0.0) {
            return Err(GaltonError::validation("line_width must be finite and > 0"));
        }
        if !(s.glow_width.is_finite() && s.glow_width > 0.0) {
            return Err(GaltonError::validation("glow_width must be finite and > 0"));
        }
        if s.glow_radius > 0 && !(s.glow_sigma.is_finite() && s.glow_sigma > 0.0) {
            return Err(GaltonError::validation(
                "glow_sigma must be > 0 when glow_radius is set",
            ));
        }
        self.palette.validate()
    }

    /// Reveal timer period.
    pub fn reveal_interval(&self) -> Duration {
        Duration::from_millis(self.reveal_interval_ms)
    }

    /// Width a host should give companion UI next to the artwork.
    pub fn visible_render_width(&self) -> f64 {
        f64::from(self.canvas.width) * VISIBLE_RENDER_FRACTION
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
