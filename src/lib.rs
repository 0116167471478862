//! A CPU-based software renderer for height-field terrain scenes.
//!
//! This crate transforms a lattice of colored, elevation-bearing points and
//! arbitrary colored polygons from world space onto a 2D pixel surface
//! through explicit matrix math and plane-based clipping. SDL2 is used only
//! for window management and display; all rendering is done on the CPU.
//!
//! # Quick Start
//!
//! ```ignore
//! use terrascope::prelude::*;
//!
//! let mut surface = Surface::new(800, 600);
//! let grid = Grid::new(49, 49, 1.0);
//! let camera = Basis::looking_at(Point3::new(0.0, 40.0, -40.0), Point3::ORIGIN, Vec3::UP);
//! grid.render(&mut surface, Rect::new(0, 0, 800, 600), &camera);
//! ```

pub mod basis;
pub mod colors;
pub mod grid;
pub mod math;
pub mod plane;
pub mod polygon;
pub mod projection;
pub mod renderer;
pub mod surface;
pub mod view;
pub mod window;

// Re-export commonly needed types at crate root for convenience
pub use basis::Basis;
pub use grid::{Grid, GridPoint};
pub use polygon::{Polygon, Vertex};
pub use renderer::{Frame, RenderError, Renderer};
pub use surface::Surface;

/// Prelude module for convenient imports.
///
/// # Example
/// ```ignore
/// use terrascope::prelude::*;
/// ```
pub mod prelude {
    // Scene content
    pub use crate::grid::{Grid, GridPoint};
    pub use crate::polygon::{Polygon, Vertex};

    // Camera & projection
    pub use crate::basis::Basis;
    pub use crate::projection::{camera_transform, projection_matrix, Rect};

    // Rendering
    pub use crate::renderer::{ColoredPoint, Frame, RenderError, Renderer};
    pub use crate::surface::Surface;

    // Math
    pub use crate::math::mat4::Mat4;
    pub use crate::math::point3::Point3;
    pub use crate::math::vec3::Vec3;

    // Colors
    pub use crate::colors::Color;

    // Window & Input
    pub use crate::window::{FrameLimiter, InputState, Window, WindowEvent};
}
