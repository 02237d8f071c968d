use crate::{Point, Vector};

/// A ray in 3D space with an origin and a unit direction.
///
/// The direction is normalized on construction, so everything downstream
/// may assume `direction.norm() == 1`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    origin: Point,
    direction: Vector,
}

impl Ray {
    /// Create a new ray; `direction` is normalized.
    pub fn new(origin: Point, direction: Vector) -> Self {
        Self {
            origin,
            direction: direction.normalized(),
        }
    }

    /// Get the origin point of the ray.
    #[inline]
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Get the (unit) direction vector of the ray.
    #[inline]
    pub fn direction(&self) -> Vector {
        self.direction
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    #[inline]
    pub fn at(&self, t: f64) -> Point {
        self.origin + self.direction * t
    }

    /// Same origin, direction mirrored about `normal`.
    pub fn reflect(&self, normal: Vector) -> Ray {
        Ray::new(self.origin, self.direction.reflect(normal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_normalizes_direction() {
        let ray = Ray::new(Point::ORIGIN, Vector::new(0.0, 0.0, 90.0));
        assert_eq!(ray.direction(), Vector::Z);
        assert_eq!(ray.origin(), Point::ORIGIN);
    }

    #[test]
    fn test_ray_at() {
        let ray = Ray::new(Point::ORIGIN, Vector::new(2.0, 0.0, 0.0));

        assert_eq!(ray.at(0.0), Point::ORIGIN);
        assert_eq!(ray.at(1.0), Point::new(1.0, 0.0, 0.0));
        assert_eq!(ray.at(2.5), Point::new(2.5, 0.0, 0.0));
        assert_eq!(ray.at(-1.0), Point::new(-1.0, 0.0, 0.0));
    }

    #[test]
    fn test_ray_reflect() {
        let ray = Ray::new(Point::new(1.0, 2.0, 3.0), Vector::new(0.0, -1.0, 0.0));
        let reflected = ray.reflect(Vector::Y);

        assert_eq!(reflected.origin(), ray.origin());
        assert_eq!(reflected.direction(), Vector::Y);
    }
}
