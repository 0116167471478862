//! Capability interface for UI widgets layered over the rendered scene.
//!
//! Widget types vary, but they all draw into the shared surface and report a
//! boundary rectangle; pointer containment is a shared provided method over
//! that boundary, not something each widget reimplements.

use crate::projection::Rect;
use crate::surface::Surface;

pub trait View {
    /// Draws the widget into the surface.
    fn draw(&mut self, surface: &mut Surface);

    /// The widget's boundary in surface pixel coordinates.
    fn boundary(&self) -> Rect;

    /// Whether the pointer is over the widget.
    ///
    /// Containment is strict interior on all four sides: a pointer exactly
    /// on the boundary is not over the widget.
    fn mouse_over(&self, mouse_x: i32, mouse_y: i32) -> bool {
        self.boundary().contains_interior(mouse_x, mouse_y)
    }
}
