//! The height-field lattice that is the scene's primary content.
//!
//! A [`Grid`] owns an (rows + 1) x (columns + 1) lattice of colored,
//! elevation-bearing points anchored by a coordinate frame. Lattice world
//! positions are derived data: they are recomputed by
//! [`Grid::set_lattice_points`], which callers must invoke after changing
//! the frame, the cell size, or the per-point heights.

use std::path::Path;

use log::info;

use crate::basis::Basis;
use crate::colors::{self, Color};
use crate::math::point3::Point3;
use crate::plane::Plane;
use crate::projection::{self, Rect};
use crate::renderer::ColoredPoint;
use crate::surface::Surface;

const DEFAULT_ROWS: usize = 49;
const DEFAULT_COLUMNS: usize = 49;
const DEFAULT_CELL_SIZE: f64 = 1.0;

/// Field-of-view reserve for the grid's own render pass.
const FOCAL_DISTANCE: f64 = 24.0;

/// A lattice point: a position plus color and physical attributes.
///
/// `height` feeds back into the position through the lattice placement
/// formula; the other attributes are carried data.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridPoint {
    pub position: Point3,
    pub color: Color,
    pub temperature_kelvin: f64,
    pub slope_deg: f64,
    pub height: f64,
}

impl Default for GridPoint {
    fn default() -> Self {
        Self {
            position: Point3::ORIGIN,
            color: colors::BLACK,
            temperature_kelvin: 0.0,
            slope_deg: 0.0,
            height: 0.0,
        }
    }
}

impl ColoredPoint for GridPoint {
    fn position(&self) -> Point3 {
        self.position
    }

    fn color(&self) -> Color {
        self.color
    }
}

/// An (rows + 1) x (columns + 1) height-field lattice in row-major order.
pub struct Grid {
    lattice: Vec<GridPoint>,
    /// The frame anchoring the lattice in world space.
    pub system: Basis,
    rows: usize,
    columns: usize,
    cell_size: f64,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS, DEFAULT_COLUMNS, DEFAULT_CELL_SIZE)
    }
}

impl Grid {
    /// Allocates the lattice, default-initializes every point, and computes
    /// the initial positions.
    pub fn new(rows: usize, columns: usize, cell_size: f64) -> Self {
        let mut grid = Self {
            lattice: vec![GridPoint::default(); (rows + 1) * (columns + 1)],
            system: Basis::default(),
            rows,
            columns,
            cell_size,
        };
        grid.set_lattice_points();
        grid
    }

    /// Builds a lattice from a grayscale image, one point per pixel, with
    /// luminance mapped onto [0, `height_scale`] elevation.
    pub fn from_height_image<P: AsRef<Path>>(
        path: P,
        cell_size: f64,
        height_scale: f64,
    ) -> Result<Self, image::ImageError> {
        let img = image::open(&path)?.to_luma8();
        let (width, height) = img.dimensions();

        let rows = height.saturating_sub(1) as usize;
        let columns = width.saturating_sub(1) as usize;
        let mut grid = Self::new(rows, columns, cell_size);

        for (x, y, pixel) in img.enumerate_pixels() {
            let index = y as usize * (columns + 1) + x as usize;
            grid.lattice[index].height = f64::from(pixel.0[0]) / 255.0 * height_scale;
        }
        grid.set_lattice_points();

        info!(
            "loaded {}x{} height field from {}",
            width,
            height,
            path.as_ref().display()
        );
        Ok(grid)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// Changes the lattice spacing. Positions are stale until the next
    /// [`Grid::set_lattice_points`].
    pub fn set_cell_size(&mut self, cell_size: f64) {
        self.cell_size = cell_size;
    }

    /// The lattice in row-major order.
    pub fn lattice(&self) -> &[GridPoint] {
        &self.lattice
    }

    pub fn point(&self, row: usize, column: usize) -> &GridPoint {
        &self.lattice[row * (self.columns + 1) + column]
    }

    pub fn point_mut(&mut self, row: usize, column: usize) -> &mut GridPoint {
        &mut self.lattice[row * (self.columns + 1) + column]
    }

    /// The anchor offset so the lattice sits displaced from the frame center.
    fn displaced_center(&self) -> Point3 {
        let mut center = self.system.center;
        center.x += (self.columns + 1) as f64 * self.cell_size;
        center.z -= (self.rows + 1) as f64 * self.cell_size;
        center
    }

    /// Recomputes every lattice point's world position as
    /// `displaced_center + column*cell*axis_x + row*cell*axis_z +
    /// height*axis_y`.
    ///
    /// Positions are derived data: call this after any change to the frame,
    /// the cell size, or the heights. Calling it again with nothing changed
    /// recomputes the same positions.
    pub fn set_lattice_points(&mut self) {
        let displaced_center = self.displaced_center();
        let axis_x = self.system.axis_x;
        let axis_y = self.system.axis_y;
        let axis_z = self.system.axis_z;
        let cell_size = self.cell_size;
        let columns = self.columns;

        for row in 0..=self.rows {
            for column in 0..=columns {
                let grid_point = &mut self.lattice[row * (columns + 1) + column];
                grid_point.position = displaced_center
                    + axis_x * (column as f64 * cell_size)
                    + axis_z * (row as f64 * cell_size)
                    + axis_y * grid_point.height;
            }
        }
    }

    /// Recolors every point along a linear ramp from `low` at the lowest
    /// elevation to `high` at the highest.
    pub fn colorize_by_height(&mut self, low: Color, high: Color) {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for point in &self.lattice {
            min = min.min(point.height);
            max = max.max(point.height);
        }

        let span = max - min;
        for point in &mut self.lattice {
            let t = if span == 0.0 {
                0.0
            } else {
                (point.height - min) / span
            };
            point.color = low.lerp(high, t);
        }
    }

    /// Fills `slope_deg` per point from central height differences,
    /// one-sided at the lattice borders.
    pub fn compute_slopes(&mut self) {
        let rows = self.rows;
        let columns = self.columns;
        let cell_size = self.cell_size;

        for row in 0..=rows {
            for column in 0..=columns {
                let height_at =
                    |r: usize, c: usize| self.lattice[r * (columns + 1) + c].height;

                let c0 = column.saturating_sub(1);
                let c1 = (column + 1).min(columns);
                let r0 = row.saturating_sub(1);
                let r1 = (row + 1).min(rows);

                let dx = if c1 == c0 {
                    0.0
                } else {
                    (height_at(row, c1) - height_at(row, c0)) / ((c1 - c0) as f64 * cell_size)
                };
                let dz = if r1 == r0 {
                    0.0
                } else {
                    (height_at(r1, column) - height_at(r0, column)) / ((r1 - r0) as f64 * cell_size)
                };

                let slope = (dx * dx + dz * dz).sqrt().atan().to_degrees();
                self.lattice[row * (columns + 1) + column].slope_deg = slope;
            }
        }
    }

    /// Rasterizes the lattice into `surface` as seen by `camera`.
    ///
    /// Points on the far side of the camera's view plane are culled, the
    /// rest go through the composed camera + projection transform, and
    /// survivors of the viewport bounds cull are written with their stored
    /// color.
    pub fn render(&self, surface: &mut Surface, viewport: Rect, camera: &Basis) {
        let camera_matrix = projection::camera_transform(camera);
        let camera_plane = Plane::from_point_normal(camera.center, camera.axis_z);
        let projection_matrix =
            projection::projection_matrix(FOCAL_DISTANCE, projection::SCREEN_RECT, viewport);
        let mega_matrix = projection_matrix * camera_matrix;

        for grid_point in &self.lattice {
            // Behind the camera's view plane.
            if camera_plane.which_side(grid_point.position) < 0.0 {
                continue;
            }

            // World space to camera space to viewport space in one step.
            let p = mega_matrix * grid_point.position;

            if !viewport.contains(p.x, p.y) {
                continue;
            }

            surface.set_pixel(p.x as i32, p.y as i32, grid_point.color.pack());
        }
    }
}
