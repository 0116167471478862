//! 4x4 transformation matrix in row-major order.
//!
//! # Convention
//! - Vectors are **column vectors** on the right: `Mat4 * Point3`
//! - Translation is stored in the **last column**
//! - Transforms chain **right-to-left**: `A * B * p` applies B first, then A
//! - Rotation builders take **degrees** and use standard right-handed
//!   rotation matrices
//!
//! Applying a matrix to a point or vector reads back only the x, y, z rows;
//! the w row is never evaluated.

use std::ops::Mul;

use super::point3::Point3;
use super::vec3::Vec3;

/// 4x4 matrix stored as `data[row][col]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat4 {
    data: [[f64; 4]; 4],
}

impl Mat4 {
    pub fn new(data: [[f64; 4]; 4]) -> Self {
        Mat4 { data }
    }

    pub fn identity() -> Self {
        Mat4::new([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a translation matrix displacing by `v`.
    pub fn translation(v: Vec3) -> Self {
        Mat4::new([
            [1.0, 0.0, 0.0, v.x],
            [0.0, 1.0, 0.0, v.y],
            [0.0, 0.0, 1.0, v.z],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a scale matrix with independent factors per axis.
    pub fn scaling(x: f64, y: f64, z: f64) -> Self {
        Mat4::new([
            [x, 0.0, 0.0, 0.0],
            [0.0, y, 0.0, 0.0],
            [0.0, 0.0, z, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a uniform scale matrix.
    pub fn scaling_uniform(factor: f64) -> Self {
        Mat4::scaling(factor, factor, factor)
    }

    /// Creates a rotation matrix around the X axis.
    pub fn rotation_x(angle_degrees: f64) -> Self {
        let theta = angle_degrees.to_radians();
        let c = theta.cos();
        let s = theta.sin();
        Mat4::new([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, c, -s, 0.0],
            [0.0, s, c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a rotation matrix around the Y axis.
    pub fn rotation_y(angle_degrees: f64) -> Self {
        let theta = angle_degrees.to_radians();
        let c = theta.cos();
        let s = theta.sin();
        Mat4::new([
            [c, 0.0, s, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [-s, 0.0, c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a rotation matrix around the Z axis.
    pub fn rotation_z(angle_degrees: f64) -> Self {
        let theta = angle_degrees.to_radians();
        let c = theta.cos();
        let s = theta.sin();
        Mat4::new([
            [c, -s, 0.0, 0.0],
            [s, c, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Returns the transpose of the matrix.
    pub fn transpose(&self) -> Self {
        let mut data = [[0.0; 4]; 4];
        for (row, values) in self.data.iter().enumerate() {
            for (col, value) in values.iter().enumerate() {
                data[col][row] = *value;
            }
        }
        Mat4 { data }
    }

    /// Applies only the rotational part of the matrix to a direction vector,
    /// dropping the translation column.
    ///
    /// This is the path for true direction vectors; `Mat4 * Vec3` applies the
    /// full row formula (translation included) and is not
    /// translation-invariant.
    pub fn rotate_vector(&self, v: Vec3) -> Vec3 {
        Vec3::new(
            self.data[0][0] * v.x + self.data[0][1] * v.y + self.data[0][2] * v.z,
            self.data[1][0] * v.x + self.data[1][1] * v.y + self.data[1][2] * v.z,
            self.data[2][0] * v.x + self.data[2][1] * v.y + self.data[2][2] * v.z,
        )
    }

    /// Access element at [row][col].
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row][col]
    }
}

/// Matrix multiplication: Mat4 * Mat4.
///
/// `A * B * p` applies B first, then A.
impl Mul<Mat4> for Mat4 {
    type Output = Mat4;

    fn mul(self, rhs: Mat4) -> Self::Output {
        let mut result = [[0.0f64; 4]; 4];

        for row in 0..4 {
            for col in 0..4 {
                result[row][col] = self.data[row][0] * rhs.data[0][col]
                    + self.data[row][1] * rhs.data[1][col]
                    + self.data[row][2] * rhs.data[2][col]
                    + self.data[row][3] * rhs.data[3][col];
            }
        }

        Mat4::new(result)
    }
}

/// Transform a point: applies the first three rows with an implicit w = 1,
/// so the translation column always contributes.
impl Mul<Point3> for Mat4 {
    type Output = Point3;

    fn mul(self, p: Point3) -> Self::Output {
        Point3::new(
            self.data[0][0] * p.x + self.data[0][1] * p.y + self.data[0][2] * p.z + self.data[0][3],
            self.data[1][0] * p.x + self.data[1][1] * p.y + self.data[1][2] * p.z + self.data[1][3],
            self.data[2][0] * p.x + self.data[2][1] * p.y + self.data[2][2] * p.z + self.data[2][3],
        )
    }
}

/// Transform a vector with the same row formula as a point.
///
/// The translation column contributes here too, so this is NOT
/// translation-invariant; use [`Mat4::rotate_vector`] for true direction
/// vectors.
impl Mul<Vec3> for Mat4 {
    type Output = Vec3;

    fn mul(self, v: Vec3) -> Self::Output {
        Vec3::new(
            self.data[0][0] * v.x + self.data[0][1] * v.y + self.data[0][2] * v.z + self.data[0][3],
            self.data[1][0] * v.x + self.data[1][1] * v.y + self.data[1][2] * v.z + self.data[1][3],
            self.data[2][0] * v.x + self.data[2][1] * v.y + self.data[2][2] * v.z + self.data[2][3],
        )
    }
}
