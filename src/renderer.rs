//! Per-frame rendering orchestration.
//!
//! All drawing funnels through here. Each frame starts with
//! [`Renderer::prepare`], which computes the frame-invariant camera and
//! projection matrices and hands back a [`Frame`]; the batch drawing
//! operations live on `Frame`, so rendering without a prepared frame is a
//! compile error rather than a runtime precondition.
//!
//! Points and polygons that fall outside the view are silently skipped per
//! item; that is ordinary culling, not an error.

use std::collections::BTreeMap;
use std::fmt;

use crate::basis::Basis;
use crate::colors::Color;
use crate::math::mat4::Mat4;
use crate::math::point3::Point3;
use crate::plane::Plane;
use crate::polygon::{Polygon, Vertex};
use crate::projection::{self, Rect};
use crate::surface::Surface;

/// Camera-space distance reserved for field-of-view scaling.
const FOCAL_DISTANCE: f64 = 60.0;

/// Anything with a position and a color can go through the point pipeline.
pub trait ColoredPoint {
    fn position(&self) -> Point3;
    fn color(&self) -> Color;
}

impl ColoredPoint for Vertex {
    fn position(&self) -> Point3 {
        self.position
    }

    fn color(&self) -> Color {
        self.color
    }
}

/// Precondition violations raised by [`Renderer::prepare`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// The viewport rectangle has zero or negative width or height.
    DegenerateViewport(Rect),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::DegenerateViewport(rect) => {
                write!(f, "viewport rectangle has no area: {}x{}", rect.w, rect.h)
            }
        }
    }
}

impl std::error::Error for RenderError {}

/// Builds prepared frames from the current camera and viewport.
#[derive(Debug, Clone)]
pub struct Renderer {
    focal_distance: f64,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            focal_distance: FOCAL_DISTANCE,
        }
    }

    /// Computes the frame-invariant matrices for the given camera and
    /// viewport and returns the frame to draw through.
    ///
    /// Call once at the start of each frame; the returned matrices are
    /// read-only caches for that frame and are recomputed, never patched, by
    /// the next call.
    pub fn prepare<'a>(
        &self,
        surface: &'a mut Surface,
        viewport: Rect,
        camera: &Basis,
    ) -> Result<Frame<'a>, RenderError> {
        if viewport.is_degenerate() {
            return Err(RenderError::DegenerateViewport(viewport));
        }

        Ok(Frame {
            surface,
            viewport,
            camera_matrix: projection::camera_transform(camera),
            projection_matrix: projection::projection_matrix(
                self.focal_distance,
                projection::SCREEN_RECT,
                viewport,
            ),
        })
    }
}

/// One frame's worth of cached matrices plus the surface they draw into.
pub struct Frame<'a> {
    surface: &'a mut Surface,
    viewport: Rect,
    camera_matrix: Mat4,
    projection_matrix: Mat4,
}

impl Frame<'_> {
    /// Transforms, culls, and rasterizes a batch of colored points.
    ///
    /// Points behind the camera (camera-space z < 0) or outside the viewport
    /// are skipped. Survivors are grouped by color so each color's pixels go
    /// down in one batch; the grouping key is the total lexicographic order
    /// on (r, g, b, a). Input data is never mutated.
    pub fn render_points<'p, P, I>(&mut self, points: I)
    where
        P: ColoredPoint + 'p,
        I: IntoIterator<Item = &'p P>,
    {
        let mut buckets: BTreeMap<Color, Vec<(i32, i32)>> = BTreeMap::new();

        for point in points {
            let p = self.camera_matrix * point.position();

            // Behind the camera.
            if p.z < 0.0 {
                continue;
            }

            let p = self.projection_matrix * p;
            if !self.viewport.contains(p.x, p.y) {
                continue;
            }

            buckets
                .entry(point.color())
                .or_default()
                .push((p.x as i32, p.y as i32));
        }

        for (color, screen_points) in &buckets {
            let pixel = color.pack();
            for &(x, y) in screen_points {
                self.surface.set_pixel(x, y, pixel);
            }
        }
    }

    /// Transforms, clips, and draws a batch of polygons as colored edges.
    ///
    /// Each polygon is taken to camera space, clipped against the near plane
    /// z = 0, projected, then clipped against the four viewport half-planes
    /// in a fixed order, re-binding to each stage's output. A polygon that
    /// any stage clips away entirely is skipped. Surviving edges are drawn
    /// in their originating vertex's color.
    pub fn render_polygons<'p, I>(&mut self, polygons: I)
    where
        I: IntoIterator<Item = &'p Polygon>,
    {
        let near_plane = Plane::new(0.0, 0.0, 1.0, 0.0);
        let vp = self.viewport;
        let viewport_planes = [
            Plane::new(0.0, 1.0, 0.0, -f64::from(vp.y)),        // top
            Plane::new(1.0, 0.0, 0.0, -f64::from(vp.x)),        // left
            Plane::new(0.0, -1.0, 0.0, f64::from(vp.y + vp.h)), // bottom
            Plane::new(-1.0, 0.0, 0.0, f64::from(vp.x + vp.w)), // right
        ];

        'polygons: for polygon in polygons {
            let camera_space = Polygon::new(
                polygon
                    .vertices
                    .iter()
                    .map(|v| Vertex::new(self.camera_matrix * v.position, v.color))
                    .collect(),
            );

            let Some(mut poly) = camera_space.clip(&near_plane) else {
                continue;
            };

            for vertex in &mut poly.vertices {
                vertex.position = self.projection_matrix * vertex.position;
            }

            for plane in &viewport_planes {
                match poly.clip(plane) {
                    Some(clipped) => poly = clipped,
                    None => continue 'polygons,
                }
            }

            for i in 0..poly.vertices.len() {
                let current = poly.vertices[i];
                let next = poly.vertices[(i + 1) % poly.vertices.len()];
                self.draw_line(
                    current.position.x,
                    current.position.y,
                    next.position.x,
                    next.position.y,
                    current.color,
                );
            }
        }
    }

    /// Draws a line between two screen points with Bresenham's algorithm.
    ///
    /// The error term tracks the distance between the ideal line and the
    /// current pixel; each step along the major axis decides from the
    /// accumulated error whether to also step along the minor axis. Works in
    /// every octant; a zero-length segment paints a single pixel.
    pub fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: Color) {
        let pixel = color.pack();

        let x_end = x2 as i32;
        let y_end = y2 as i32;
        let mut x = x1 as i32;
        let mut y = y1 as i32;

        let dx = (x_end - x).abs();
        let dy = (y_end - y).abs();
        let x_step = if x < x_end { 1 } else { -1 };
        let y_step = if y < y_end { 1 } else { -1 };
        let mut err = dx - dy;

        loop {
            self.surface.set_pixel(x, y, pixel);

            if x == x_end && y == y_end {
                break;
            }

            // Double the error for comparison, avoiding fractions.
            let e2 = 2 * err;
            if e2 > -dy {
                err -= dy;
                x += x_step;
            }
            if e2 < dx {
                err += dx;
                y += y_step;
            }
        }
    }
}
