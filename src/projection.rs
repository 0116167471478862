//! Camera and projection matrix builders.
//!
//! The world→camera matrix is a change of basis into the camera frame; the
//! camera→screen matrix maps a fixed camera-space rectangle linearly onto a
//! viewport rectangle in pixel coordinates. There is no perspective divide
//! anywhere in the pipeline: depth never affects on-screen scale, so the
//! projection is parallel (orthographic) by contract.

use crate::basis::Basis;
use crate::math::mat4::Mat4;
use crate::math::point3::Point3;

/// The camera-space rectangle that the camera "sees".
///
/// Growing this rectangle zooms the camera out.
pub const SCREEN_RECT: Rect = Rect::new(-100, -100, 200, 200);

/// An axis-aligned rectangle in pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Half-open containment: `x <= px < x + w` and `y <= py < y + h`.
    ///
    /// This is the bounds test the renderer's viewport cull uses, so a point
    /// projected exactly onto the right or bottom edge is rejected.
    #[inline]
    pub fn contains(&self, px: f64, py: f64) -> bool {
        px >= f64::from(self.x)
            && py >= f64::from(self.y)
            && px < f64::from(self.x + self.w)
            && py < f64::from(self.y + self.h)
    }

    /// Strict-interior containment on all four sides.
    ///
    /// This is the pointer test UI widgets share: a pointer exactly on the
    /// boundary does not count as over the widget.
    #[inline]
    pub fn contains_interior(&self, px: i32, py: i32) -> bool {
        px > self.x && px < self.x + self.w && py > self.y && py < self.y + self.h
    }

    /// A rectangle with zero or negative extent cannot be rendered into.
    pub fn is_degenerate(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }
}

/// Builds the world→camera change-of-basis matrix.
///
/// The rotation is the inverse of the camera orientation; because the basis
/// axes are orthonormal that inverse is the transpose, i.e. the matrix with
/// the axes as rows. It is composed with a translation by the negated camera
/// center, so the center maps to the camera-space origin.
pub fn camera_transform(camera: &Basis) -> Mat4 {
    let rotation = Mat4::new([
        [camera.axis_x.x, camera.axis_x.y, camera.axis_x.z, 0.0],
        [camera.axis_y.x, camera.axis_y.y, camera.axis_y.z, 0.0],
        [camera.axis_z.x, camera.axis_z.y, camera.axis_z.z, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]);
    rotation * Mat4::translation(Point3::ORIGIN - camera.center)
}

/// Builds the camera→screen matrix mapping `screen` onto `viewport`.
///
/// The mapping is linear in x and y and leaves z untouched for the depth
/// culls downstream. `focal_distance` is reserved for field-of-view scaling;
/// it is not applied as a per-point depth divisor, so the mapping stays
/// parallel regardless of its value.
pub fn projection_matrix(focal_distance: f64, screen: Rect, viewport: Rect) -> Mat4 {
    let _ = focal_distance;

    let sx = f64::from(viewport.w) / f64::from(screen.w);
    let sy = f64::from(viewport.h) / f64::from(screen.h);
    Mat4::new([
        [sx, 0.0, 0.0, f64::from(viewport.x) - f64::from(screen.x) * sx],
        [0.0, sy, 0.0, f64::from(viewport.y) - f64::from(screen.y) * sy],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::vec3::Vec3;
    use approx::assert_relative_eq;

    #[test]
    fn half_open_containment() {
        let rect = Rect::new(0, 0, 100, 100);
        assert!(rect.contains(0.0, 0.0));
        assert!(rect.contains(99.0, 99.0));
        assert!(!rect.contains(100.0, 100.0));
        assert!(!rect.contains(150.0, 50.0));
        assert!(!rect.contains(-1.0, 50.0));
    }

    #[test]
    fn interior_containment_excludes_the_boundary() {
        let rect = Rect::new(10, 10, 20, 20);
        assert!(rect.contains_interior(11, 11));
        assert!(rect.contains_interior(29, 29));
        assert!(!rect.contains_interior(10, 15));
        assert!(!rect.contains_interior(30, 15));
        assert!(!rect.contains_interior(15, 10));
    }

    #[test]
    fn degenerate_rectangles() {
        assert!(Rect::new(0, 0, 0, 100).is_degenerate());
        assert!(Rect::new(0, 0, 100, -5).is_degenerate());
        assert!(!Rect::new(0, 0, 1, 1).is_degenerate());
    }

    #[test]
    fn identity_camera_is_the_identity_transform() {
        let m = camera_transform(&Basis::default());
        assert_eq!(m, Mat4::identity());
    }

    #[test]
    fn camera_transform_maps_the_center_to_the_origin() {
        let camera = Basis::looking_at(Point3::new(0.0, 0.0, -5.0), Point3::ORIGIN, Vec3::UP);
        let m = camera_transform(&camera);

        let center = m * camera.center;
        assert_relative_eq!(center.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(center.y, 0.0, epsilon = 1e-12);
        assert_relative_eq!(center.z, 0.0, epsilon = 1e-12);

        // The world origin sits 5 units ahead of this camera.
        let origin = m * Point3::ORIGIN;
        assert_relative_eq!(origin.z, 5.0, epsilon = 1e-12);
    }

    #[test]
    fn projection_maps_screen_corners_onto_viewport_corners() {
        let viewport = Rect::new(20, 40, 400, 200);
        let m = projection_matrix(60.0, SCREEN_RECT, viewport);

        let top_left = m * Point3::new(-100.0, -100.0, 7.0);
        assert_relative_eq!(top_left.x, 20.0, epsilon = 1e-12);
        assert_relative_eq!(top_left.y, 40.0, epsilon = 1e-12);
        assert_relative_eq!(top_left.z, 7.0, epsilon = 1e-12);

        let bottom_right = m * Point3::new(100.0, 100.0, 7.0);
        assert_relative_eq!(bottom_right.x, 420.0, epsilon = 1e-12);
        assert_relative_eq!(bottom_right.y, 240.0, epsilon = 1e-12);
    }

    #[test]
    fn depth_does_not_change_screen_position() {
        let viewport = Rect::new(0, 0, 200, 200);
        let m = projection_matrix(60.0, SCREEN_RECT, viewport);

        let near = m * Point3::new(50.0, 50.0, 1.0);
        let far = m * Point3::new(50.0, 50.0, 1000.0);
        assert_eq!((near.x, near.y), (far.x, far.y));
    }
}
