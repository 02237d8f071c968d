// Linear and affine transforms
//
// Matrices are written row-major (`rows[i][j]` is row i, column j) as scene
// authors usually type them; internally they are stored as glam matrices.
// Every transform is pure: `Transformable::transform` returns a new value.

use glam::{DAffine3, DMat3, DMat4, DVec3};
use thiserror::Error;

use crate::{Point, Vector};

/// Errors raised while building a transform.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransformError {
    #[error("Transform matrix must be 3x3 or 4x4, got {rows} rows with row lengths {cols:?}")]
    InvalidDimensions { rows: usize, cols: Vec<usize> },

    #[error("Transform axis must be a non-zero vector")]
    DegenerateAxis,
}

/// An angle given either in radians or in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Angle {
    Radians(f64),
    Degrees(f64),
}

impl Angle {
    pub fn radians(self) -> f64 {
        match self {
            Angle::Radians(r) => r,
            Angle::Degrees(d) => d.to_radians(),
        }
    }
}

/// A 3x3 linear or 4x4 affine transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Matrix {
    /// 3x3, no translation
    Linear(DMat3),
    /// 4x4, the last column is the translation
    Affine(DMat4),
}

impl Matrix {
    pub const IDENTITY: Matrix = Matrix::Affine(DMat4::IDENTITY);

    /// Build a matrix from row-major rows, which must form a 3x3 or a 4x4.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self, TransformError> {
        let cols: Vec<usize> = rows.iter().map(|r| r.as_ref().len()).collect();
        let n = rows.len();

        if !(n == 3 || n == 4) || cols.iter().any(|&c| c != n) {
            return Err(TransformError::InvalidDimensions { rows: n, cols });
        }

        let at = |i: usize, j: usize| rows[i].as_ref()[j];
        Ok(if n == 3 {
            Matrix::Linear(DMat3::from_cols_array_2d(&[
                [at(0, 0), at(1, 0), at(2, 0)],
                [at(0, 1), at(1, 1), at(2, 1)],
                [at(0, 2), at(1, 2), at(2, 2)],
            ]))
        } else {
            Matrix::Affine(DMat4::from_cols_array_2d(&[
                [at(0, 0), at(1, 0), at(2, 0), at(3, 0)],
                [at(0, 1), at(1, 1), at(2, 1), at(3, 1)],
                [at(0, 2), at(1, 2), at(2, 2), at(3, 2)],
                [at(0, 3), at(1, 3), at(2, 3), at(3, 3)],
            ]))
        })
    }

    /// Translation by `offset`.
    pub fn translation(offset: Vector) -> Self {
        Matrix::Affine(DMat4::from_translation(offset.to_dvec3()))
    }

    /// Per-axis scaling about the origin.
    pub fn scaling(factors: Vector) -> Self {
        Matrix::Affine(DMat4::from_scale(factors.to_dvec3()))
    }

    /// Mirror across the plane through `point` with the given `normal`.
    pub fn reflection(point: Point, normal: Vector) -> Result<Self, TransformError> {
        let n = normal.try_normalized().ok_or(TransformError::DegenerateAxis)?.to_dvec3();
        let linear = DMat3::IDENTITY - outer(n, n) * 2.0;
        let offset = n * (2.0 * point.to_dvec3().dot(n));
        Ok(Matrix::Affine(DMat4::from(DAffine3::from_mat3_translation(linear, offset))))
    }

    /// Rotation by `angle` around the axis through `point` along `axis`.
    pub fn rotation(point: Point, axis: Vector, angle: Angle) -> Result<Self, TransformError> {
        let axis = axis.try_normalized().ok_or(TransformError::DegenerateAxis)?;
        let pivot = point.to_dvec3();
        let m = DMat4::from_translation(pivot)
            * DMat4::from_axis_angle(axis.to_dvec3(), angle.radians())
            * DMat4::from_translation(-pivot);
        Ok(Matrix::Affine(m))
    }

    /// The linear (rotation/scale/shear) part.
    pub fn linear(&self) -> DMat3 {
        match self {
            Matrix::Linear(m) => *m,
            Matrix::Affine(m) => DMat3::from_mat4(*m),
        }
    }

    /// Apply to a homogeneous coordinate with w = 1.
    pub(crate) fn apply(&self, v: DVec3) -> DVec3 {
        match self {
            Matrix::Linear(m) => m.mul_vec3(v),
            Matrix::Affine(m) => m.transform_point3(v),
        }
    }
}

fn outer(a: DVec3, b: DVec3) -> DMat3 {
    DMat3::from_cols(a * b.x, a * b.y, a * b.z)
}

/// Values that can be moved through space by a [`Matrix`].
pub trait Transformable: Sized {
    /// Returns the value transformed by `matrix`.
    fn transform(&self, matrix: &Matrix) -> Self;

    fn translate(&self, offset: Vector) -> Self {
        self.transform(&Matrix::translation(offset))
    }

    fn scale(&self, factors: Vector) -> Self {
        self.transform(&Matrix::scaling(factors))
    }

    fn reflect(&self, point: Point, normal: Vector) -> Result<Self, TransformError> {
        Ok(self.transform(&Matrix::reflection(point, normal)?))
    }

    fn rotate(&self, point: Point, axis: Vector, angle: Angle) -> Result<Self, TransformError> {
        Ok(self.transform(&Matrix::rotation(point, axis, angle)?))
    }
}
