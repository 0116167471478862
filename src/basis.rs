//! Coordinate frames for the camera and for object placement.

use crate::math::mat4::Mat4;
use crate::math::point3::Point3;
use crate::math::vec3::Vec3;

/// An origin plus three axis vectors describing a coordinate frame.
///
/// Invariant: the axes are orthonormal. The camera transform relies on this
/// to invert the orientation by transposing it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Basis {
    pub center: Point3,
    pub axis_x: Vec3,
    pub axis_y: Vec3,
    pub axis_z: Vec3,
}

impl Default for Basis {
    /// The identity frame at the world origin.
    fn default() -> Self {
        Self {
            center: Point3::ORIGIN,
            axis_x: Vec3::RIGHT,
            axis_y: Vec3::UP,
            axis_z: Vec3::FORWARD,
        }
    }
}

impl Basis {
    pub fn new(center: Point3, axis_x: Vec3, axis_y: Vec3, axis_z: Vec3) -> Self {
        Self {
            center,
            axis_x,
            axis_y,
            axis_z,
        }
    }

    /// Builds the frame at `center` whose z axis points toward `target`.
    ///
    /// The x and y axes are derived from `up` by cross products, so the
    /// result is orthonormal even when `up` is not perpendicular to the view
    /// direction.
    pub fn looking_at(center: Point3, target: Point3, up: Vec3) -> Self {
        let axis_z = (target - center).normalize();
        let axis_x = up.cross(axis_z).normalize();
        let axis_y = axis_z.cross(axis_x);
        Self {
            center,
            axis_x,
            axis_y,
            axis_z,
        }
    }

    /// Re-orients the axes through the rotation-only part of `rotation`.
    ///
    /// The center stays put; orthonormality is preserved for any proper
    /// rotation matrix.
    pub fn rotate_axes(&mut self, rotation: &Mat4) {
        self.axis_x = rotation.rotate_vector(self.axis_x);
        self.axis_y = rotation.rotate_vector(self.axis_y);
        self.axis_z = rotation.rotate_vector(self.axis_z);
    }

    /// Spins the frame around the world Y axis.
    pub fn rotate_y(&mut self, angle_degrees: f64) {
        self.rotate_axes(&Mat4::rotation_y(angle_degrees));
    }

    /// Moves the center without changing the orientation.
    pub fn translate(&mut self, offset: Vec3) {
        self.center = self.center + offset;
    }
}
