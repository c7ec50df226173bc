use crate::foundation::core::{Direction, Point};
use crate::foundation::rng::Rng64;
use crate::sim::grid::GridSpec;

/// One vertex of a simulated path.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PathPoint {
    /// Horizontal position in pixels.
    pub x: f64,
    /// Vertical position in pixels (grows downward).
    pub y: f64,
    /// Step that led to this vertex; [`Direction::Origin`] for the first one.
    pub direction: Direction,
}

impl PathPoint {
    /// Position as a kurbo point.
    pub fn pos(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Consecutive vertex pair of a path.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    /// Segment start.
    pub from: Point,
    /// Segment end.
    pub to: Point,
    /// Direction stored on the end vertex.
    pub direction: Direction,
}

impl Segment {
    /// Vertical midpoint, used to sample the gradient.
    pub fn mid_y(&self) -> f64 {
        (self.from.y + self.to.y) * 0.5
    }
}

/// One ball's descent: `num_rows + 1` vertices.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Path {
    points: Vec<PathPoint>,
}

impl Path {
    /// Wrap already-positioned vertices.
    pub fn new(points: Vec<PathPoint>) -> Self {
        Self { points }
    }

    /// Vertices in order.
    pub fn points(&self) -> &[PathPoint] {
        &self.points
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// `true` for a path with no vertices (never produced by the simulator).
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Consecutive vertex pairs, in order.
    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        self.points.windows(2).map(|w| Segment {
            from: w[0].pos(),
            to: w[1].pos(),
            direction: w[1].direction,
        })
    }

    fn translate_x(&mut self, dx: f64) {
        for p in &mut self.points {
            p.x += dx;
        }
    }
}

/// Simulate a single uncentred walk.
///
/// The start column is uniform over [`GridSpec::start_col_bounds`]; each of the `num_rows` steps
/// moves `±step_size` in x (fair coin) and `+step_size` in y.
pub fn simulate_path(grid: &GridSpec, rng: &mut Rng64) -> Path {
    let (lo, hi) = grid.start_col_bounds();
    let step = grid.step_size;
    let start_col = rng.range_inclusive(lo, hi);

    let mut points = Vec::with_capacity(grid.num_rows as usize + 1);
    let mut cur = PathPoint {
        x: start_col as f64 * step,
        y: 0.0,
        direction: Direction::Origin,
    };
    points.push(cur);

    for _ in 0..grid.num_rows {
        let direction = if rng.coin() {
            Direction::Right
        } else {
            Direction::Left
        };
        cur = PathPoint {
            x: cur.x + f64::from(direction.sign()) * step,
            y: cur.y + step,
            direction,
        };
        points.push(cur);
    }

    Path { points }
}

/// Simulate `num_balls` walks and recentre them for a canvas `canvas_width` pixels wide.
#[tracing::instrument(skip(grid, rng))]
pub fn simulate_batch(
    grid: &GridSpec,
    num_balls: u32,
    canvas_width: f64,
    rng: &mut Rng64,
) -> Vec<Path> {
    let dx = grid.center_offset(canvas_width);
    let batch: Vec<Path> = (0..num_balls)
        .map(|_| {
            let mut path = simulate_path(grid, rng);
            path.translate_x(dx);
            path
        })
        .collect();
    tracing::debug!(paths = batch.len(), center_offset = dx, "simulated batch");
    batch
}

#[cfg(test)]
#[path = "../../tests/unit/sim/path.rs"]
mod tests;
