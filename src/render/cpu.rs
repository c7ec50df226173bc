use crate::color::scheme::ColorScheme;
use crate::config::StrokeStyle;
use crate::foundation::core::{Canvas, Direction, Rgba8};
use crate::foundation::error::{GaltonError, GaltonResult};
use crate::render::backend::{Frame, RenderBackend};
use crate::render::blur::blur_rgba8_premul;
use crate::render::composite::{fill, over_region};
use crate::sim::path::{Path, Segment};

/// CPU raster backend powered by `vello_cpu`.
///
/// Paths are drawn in reveal order. For each path the blurred glow halo goes down first, then
/// every segment is stroked twice in turn: the gradient base stroke, then the tinted glow stroke.
/// A later path therefore covers the strokes and halo of every earlier one.
///
/// Redraws are incremental: when the scheme is unchanged and the previously drawn paths are a
/// prefix of the new revealed set, only the new paths are drawn on top.
pub struct CpuRenderer {
    canvas: Canvas,
    style: StrokeStyle,
    surface: Option<CpuSurface>,
    drawn: Option<Drawn>,
}

struct CpuSurface {
    width: u16,
    height: u16,
    pixels: Vec<u8>,
}

struct Drawn {
    scheme: ColorScheme,
    paths: Vec<Path>,
}

/// Pixel rectangle a single path can touch, clamped to the surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Region {
    x: u16,
    y: u16,
    width: u16,
    height: u16,
}

impl CpuRenderer {
    /// Create a renderer with no surface attached; redraws are no-ops until [`Self::attach`].
    pub fn new(canvas: Canvas, style: StrokeStyle) -> Self {
        Self {
            canvas,
            style,
            surface: None,
            drawn: None,
        }
    }

    /// Create a renderer and attach its surface.
    pub fn with_surface(canvas: Canvas, style: StrokeStyle) -> GaltonResult<Self> {
        let mut r = Self::new(canvas, style);
        r.attach()?;
        Ok(r)
    }

    /// Allocate the raster surface (transparent until the first redraw).
    pub fn attach(&mut self) -> GaltonResult<()> {
        let width: u16 = self
            .canvas
            .width
            .try_into()
            .map_err(|_| GaltonError::render("surface width exceeds u16"))?;
        let height: u16 = self
            .canvas
            .height
            .try_into()
            .map_err(|_| GaltonError::render("surface height exceeds u16"))?;
        if width == 0 || height == 0 {
            return Err(GaltonError::render("surface width/height must be > 0"));
        }
        self.surface = Some(CpuSurface {
            width,
            height,
            pixels: vec![0u8; self.canvas.rgba8_len()],
        });
        self.drawn = None;
        Ok(())
    }

    /// Drop the raster surface.
    pub fn detach(&mut self) {
        self.surface = None;
        self.drawn = None;
    }

    /// Return `true` when a surface is attached.
    pub fn has_surface(&self) -> bool {
        self.surface.is_some()
    }

    /// Canvas the renderer targets.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }
}

impl RenderBackend for CpuRenderer {
    #[tracing::instrument(skip_all, fields(paths = revealed.len()))]
    fn redraw(&mut self, scheme: Option<&ColorScheme>, revealed: &[Path]) -> GaltonResult<bool> {
        let Some(scheme) = scheme else {
            return Ok(false);
        };
        let Some(surface) = self.surface.as_mut() else {
            tracing::trace!("no surface attached; skipping redraw");
            return Ok(false);
        };

        let mut drawn = match self.drawn.take() {
            Some(d) if d.scheme == *scheme && revealed.starts_with(&d.paths) => d,
            _ => {
                fill(&mut surface.pixels, scheme.background.to_premul());
                Drawn {
                    scheme: scheme.clone(),
                    paths: Vec::with_capacity(revealed.len()),
                }
            }
        };
        let fresh = &revealed[drawn.paths.len()..];
        tracing::trace!(reused = drawn.paths.len(), fresh = fresh.len(), "redraw");

        for path in fresh {
            draw_path(surface, &self.style, scheme, path)?;
            drawn.paths.push(path.clone());
        }
        self.drawn = Some(drawn);
        Ok(true)
    }

    fn snapshot(&self) -> Option<Frame> {
        let s = self.surface.as_ref()?;
        Some(Frame {
            width: u32::from(s.width),
            height: u32::from(s.height),
            data: s.pixels.clone(),
            premultiplied: true,
        })
    }
}

fn draw_path(
    surface: &mut CpuSurface,
    style: &StrokeStyle,
    scheme: &ColorScheme,
    path: &Path,
) -> GaltonResult<()> {
    let pad = style.line_width.max(style.glow_width) / 2.0 + f64::from(style.glow_radius) + 2.0;
    let Some(region) = path_region(path, pad, surface.width, surface.height) else {
        return Ok(());
    };
    let height = f64::from(surface.height);
    let dst_width = usize::from(surface.width);

    if style.glow_radius > 0 {
        let glow = stroke_layer(
            region,
            path.segments()
                .map(|s| (s, style.glow_width, tint_for(scheme, s.direction))),
        );
        let halo = blur_rgba8_premul(
            &glow,
            u32::from(region.width),
            u32::from(region.height),
            style.glow_radius,
            style.glow_sigma,
        )?;
        composite(surface, dst_width, &halo, region)?;
    }

    let strokes = stroke_layer(
        region,
        path.segments().flat_map(|s| {
            [
                (
                    s,
                    style.line_width,
                    scheme.gradient.interpolate(s.mid_y() / height),
                ),
                (s, style.glow_width, tint_for(scheme, s.direction)),
            ]
        }),
    );
    composite(surface, dst_width, &strokes, region)
}

fn composite(
    surface: &mut CpuSurface,
    dst_width: usize,
    layer: &[u8],
    region: Region,
) -> GaltonResult<()> {
    over_region(
        &mut surface.pixels,
        dst_width,
        layer,
        usize::from(region.x),
        usize::from(region.y),
        usize::from(region.width),
        usize::from(region.height),
    )
}

fn tint_for(scheme: &ColorScheme, direction: Direction) -> Rgba8 {
    if direction == Direction::Left {
        scheme.tint_left
    } else {
        scheme.tint_right
    }
}

/// Bounding box of `path` grown by `pad`, clamped to the surface; `None` when fully outside.
fn path_region(path: &Path, pad: f64, width: u16, height: u16) -> Option<Region> {
    let (mut x0, mut y0) = (f64::INFINITY, f64::INFINITY);
    let (mut x1, mut y1) = (f64::NEG_INFINITY, f64::NEG_INFINITY);
    for p in path.points() {
        x0 = x0.min(p.x);
        y0 = y0.min(p.y);
        x1 = x1.max(p.x);
        y1 = y1.max(p.y);
    }
    if !(x0.is_finite() && y0.is_finite() && x1.is_finite() && y1.is_finite()) {
        return None;
    }

    let x0 = (x0 - pad).floor().clamp(0.0, f64::from(width));
    let y0 = (y0 - pad).floor().clamp(0.0, f64::from(height));
    let x1 = (x1 + pad).ceil().clamp(0.0, f64::from(width));
    let y1 = (y1 + pad).ceil().clamp(0.0, f64::from(height));
    if x1 <= x0 || y1 <= y0 {
        return None;
    }
    Some(Region {
        x: x0 as u16,
        y: y0 as u16,
        width: (x1 - x0) as u16,
        height: (y1 - y0) as u16,
    })
}

/// Stroke segments in order onto a transparent layer covering `region`; returns premultiplied
/// RGBA8 of `region.width × region.height`.
fn stroke_layer(region: Region, strokes: impl Iterator<Item = (Segment, f64, Rgba8)>) -> Vec<u8> {
    let mut ctx = vello_cpu::RenderContext::new(region.width, region.height);
    ctx.set_transform(vello_cpu::kurbo::Affine::translate((
        -f64::from(region.x),
        -f64::from(region.y),
    )));
    for (seg, width, color) in strokes {
        ctx.set_stroke(
            vello_cpu::kurbo::Stroke::new(width).with_caps(vello_cpu::kurbo::Cap::Round),
        );
        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
            color.r, color.g, color.b, color.a,
        ));
        ctx.stroke_path(&segment_to_cpu(&seg));
    }
    ctx.flush();

    let mut pixmap = vello_cpu::Pixmap::new(region.width, region.height);
    ctx.render_to_pixmap(&mut pixmap);
    pixmap.data_as_u8_slice().to_vec()
}

fn segment_to_cpu(seg: &Segment) -> vello_cpu::kurbo::BezPath {
    let mut out = vello_cpu::kurbo::BezPath::new();
    out.move_to(vello_cpu::kurbo::Point::new(seg.from.x, seg.from.y));
    out.line_to(vello_cpu::kurbo::Point::new(seg.to.x, seg.to.y));
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
