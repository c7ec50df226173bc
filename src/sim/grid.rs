use crate::foundation::error::{GaltonError, GaltonResult};

/// Conceptual grid the balls descend through.
///
/// Walks are simulated over `total_cols` columns and then recentred so that the middle
/// `visible_cols` columns land in the middle of the canvas.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GridSpec {
    /// Number of downward steps per path.
    pub num_rows: u32,
    /// Width of the simulated column range.
    pub total_cols: u32,
    /// Width of the column range centred in the viewport.
    pub visible_cols: u32,
    /// Horizontal and vertical step length in pixels.
    pub step_size: f64,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            num_rows: 20,
            total_cols: 40,
            visible_cols: 20,
            step_size: 30.0,
        }
    }
}

impl GridSpec {
    /// Check structural constraints.
    pub fn validate(&self) -> GaltonResult<()> {
        if self.num_rows == 0 {
            return Err(GaltonError::validation("num_rows must be >= 1"));
        }
        if !self.step_size.is_finite() || self.step_size <= 0.0 {
            return Err(GaltonError::validation("step_size must be finite and > 0"));
        }
        if self.visible_cols > self.total_cols {
            return Err(GaltonError::validation(format!(
                "visible_cols ({}) must not exceed total_cols ({})",
                self.visible_cols, self.total_cols
            )));
        }
        Ok(())
    }

    /// Inclusive start-column range `[-total_cols/2, total_cols/2]` (integer halves).
    pub fn start_col_bounds(&self) -> (i64, i64) {
        let half = i64::from(self.total_cols / 2);
        (-half, half)
    }

    /// Constant x translation that recentres the walks into a canvas `canvas_width` wide.
    pub fn center_offset(&self, canvas_width: f64) -> f64 {
        let hidden = f64::from(self.total_cols) - f64::from(self.visible_cols);
        canvas_width / 2.0 - (hidden / 2.0) * self.step_size
    }

    /// y of the last vertex of every path.
    pub fn path_depth(&self) -> f64 {
        f64::from(self.num_rows) * self.step_size
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sim/grid.rs"]
mod tests;
