//! Direction/displacement vector.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use glam::DVec3;

use crate::transform::{Matrix, Transformable};

/// A 3D vector (direction or displacement).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector {
    pub const ZERO: Vector = Vector::new(0.0, 0.0, 0.0);
    pub const X: Vector = Vector::new(1.0, 0.0, 0.0);
    pub const Y: Vector = Vector::new(0.0, 1.0, 0.0);
    pub const Z: Vector = Vector::new(0.0, 0.0, 1.0);

    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn dot(self, other: Vector) -> f64 {
        self.to_dvec3().dot(other.to_dvec3())
    }

    #[inline]
    pub fn cross(self, other: Vector) -> Vector {
        self.to_dvec3().cross(other.to_dvec3()).into()
    }

    /// Euclidean length.
    #[inline]
    pub fn norm(self) -> f64 {
        self.to_dvec3().length()
    }

    /// Divide by the magnitude.
    ///
    /// Goes through the guarded division, so the zero vector comes back
    /// unchanged instead of turning into NaNs. Use [`Vector::try_normalized`]
    /// where a zero vector is a configuration error.
    #[inline]
    pub fn normalized(self) -> Vector {
        self / self.norm()
    }

    /// Unit vector, or `None` for a (near) zero-length vector.
    pub fn try_normalized(self) -> Option<Vector> {
        self.to_dvec3().try_normalize().map(Vector::from)
    }

    /// Mirror this direction about `normal`: `d - 2 (d·n) n`.
    #[inline]
    pub fn reflect(self, normal: Vector) -> Vector {
        self - normal * (2.0 * self.dot(normal))
    }

    /// Apply only the linear part of `matrix` (no translation).
    ///
    /// Surface normals and ray directions go through this.
    pub fn transform_direction(self, matrix: &Matrix) -> Vector {
        matrix.linear().mul_vec3(self.to_dvec3()).into()
    }

    /// Transform a surface normal: inverse-transpose of the linear part,
    /// re-normalized. Singular matrices fall back to the plain linear part.
    pub fn transform_normal(self, matrix: &Matrix) -> Vector {
        let linear = matrix.linear();
        let normal_matrix = if linear.determinant().abs() > f64::EPSILON {
            linear.inverse().transpose()
        } else {
            linear
        };
        Vector::from(normal_matrix.mul_vec3(self.to_dvec3())).normalized()
    }

    #[inline]
    pub fn to_dvec3(self) -> DVec3 {
        DVec3::new(self.x, self.y, self.z)
    }
}

impl From<DVec3> for Vector {
    #[inline]
    fn from(v: DVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl Transformable for Vector {
    /// Transform as a homogeneous coordinate with w = 1, so a 4x4 matrix
    /// translates the vector as well.
    fn transform(&self, matrix: &Matrix) -> Self {
        matrix.apply(self.to_dvec3()).into()
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl Add for Vector {
    type Output = Vector;

    #[inline]
    fn add(self, rhs: Vector) -> Vector {
        Vector::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vector {
    type Output = Vector;

    #[inline]
    fn sub(self, rhs: Vector) -> Vector {
        Vector::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Neg for Vector {
    type Output = Vector;

    #[inline]
    fn neg(self) -> Vector {
        Vector::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    #[inline]
    fn mul(self, rhs: f64) -> Vector {
        Vector::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Mul<Vector> for f64 {
    type Output = Vector;

    #[inline]
    fn mul(self, rhs: Vector) -> Vector {
        rhs * self
    }
}

/// Component-wise product.
impl Mul for Vector {
    type Output = Vector;

    #[inline]
    fn mul(self, rhs: Vector) -> Vector {
        Vector::new(self.x * rhs.x, self.y * rhs.y, self.z * rhs.z)
    }
}

/// A zero divisor leaves the vector unchanged (divides by 1).
impl Div<f64> for Vector {
    type Output = Vector;

    #[inline]
    fn div(self, rhs: f64) -> Vector {
        let d = guard(rhs);
        Vector::new(self.x / d, self.y / d, self.z / d)
    }
}

/// Component-wise quotient; each zero component of the divisor counts as 1.
impl Div for Vector {
    type Output = Vector;

    #[inline]
    fn div(self, rhs: Vector) -> Vector {
        Vector::new(self.x / guard(rhs.x), self.y / guard(rhs.y), self.z / guard(rhs.z))
    }
}

#[inline]
fn guard(divisor: f64) -> f64 {
    if divisor == 0.0 {
        1.0
    } else {
        divisor
    }
}
