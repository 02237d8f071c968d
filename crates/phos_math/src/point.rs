//! Position in space.

use std::fmt;
use std::ops::{Add, Sub};

use glam::DVec3;

use crate::transform::{Matrix, Transformable};
use crate::Vector;

/// A position in 3D space.
///
/// `Point - Point` yields a [`Vector`] and `Point + Vector` yields a `Point`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point {
    pub const ORIGIN: Point = Point::new(0.0, 0.0, 0.0);

    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Displacement from the origin to this point.
    #[inline]
    pub fn to_vector(self) -> Vector {
        Vector::new(self.x, self.y, self.z)
    }

    #[inline]
    pub fn to_dvec3(self) -> DVec3 {
        DVec3::new(self.x, self.y, self.z)
    }

    /// Distance between two points.
    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        (other - self).norm()
    }

    /// Linear interpolation: `self` at `t = 0`, `other` at `t = 1`.
    #[inline]
    pub fn lerp(self, other: Point, t: f64) -> Point {
        self + (other - self) * t
    }
}

impl From<DVec3> for Point {
    #[inline]
    fn from(v: DVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl Transformable for Point {
    fn transform(&self, matrix: &Matrix) -> Self {
        matrix.apply(self.to_dvec3()).into()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl Sub for Point {
    type Output = Vector;

    #[inline]
    fn sub(self, rhs: Point) -> Vector {
        Vector::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Add<Vector> for Point {
    type Output = Point;

    #[inline]
    fn add(self, rhs: Vector) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub<Vector> for Point {
    type Output = Point;

    #[inline]
    fn sub(self, rhs: Vector) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_difference() {
        let a = Point::new(1.0, 1.0, 1.0);
        let b = Point::new(2.0, 3.0, 4.0);
        assert_eq!(b - a, Vector::new(1.0, 2.0, 3.0));
        assert_eq!(b - Vector::new(1.0, 2.0, 3.0), a);
    }

    #[test]
    fn test_distance_and_lerp() {
        let a = Point::ORIGIN;
        let b = Point::new(0.0, 3.0, 4.0);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(a.lerp(b, 0.5), Point::new(0.0, 1.5, 2.0));
    }
}
