//! Infinite plane primitive.

use std::sync::Arc;

use phos_core::Material;
use phos_math::{Interval, Matrix, Point, Ray, Transformable, Vector, EPSILON};

use crate::hittable::{Hit, Hittable, ObjectError};

/// An infinite plane through `point` with a unit `normal`.
#[derive(Debug, Clone)]
pub struct Plane {
    point: Point,
    normal: Vector,
    material: Arc<Material>,
}

impl Plane {
    /// Create a plane; `normal` is normalized and must not be zero.
    pub fn new(point: Point, normal: Vector, material: Arc<Material>) -> Result<Self, ObjectError> {
        let normal = normal.try_normalized().ok_or(ObjectError::DegenerateNormal)?;
        Ok(Self {
            point,
            normal,
            material,
        })
    }

    pub fn point(&self) -> Point {
        self.point
    }

    pub fn normal(&self) -> Vector {
        self.normal
    }
}

impl Hittable for Plane {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<Hit> {
        let denominator = ray.direction().dot(self.normal);

        // Ray is parallel to the plane
        if denominator.abs() < EPSILON {
            return None;
        }

        let t = self.normal.dot(self.point - ray.origin()) / denominator;
        ray_t.surrounds(t).then_some(Hit {
            distance: t,
            normal: self.normal,
        })
    }

    fn normal_at_point(&self, _point: Point) -> Result<Vector, ObjectError> {
        Ok(self.normal)
    }

    fn material(&self) -> &Material {
        &self.material
    }
}

impl Transformable for Plane {
    fn transform(&self, matrix: &Matrix) -> Self {
        Self {
            point: self.point.transform(matrix),
            normal: self.normal.transform_normal(matrix),
            material: Arc::clone(&self.material),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn floor() -> Plane {
        Plane::new(Point::new(0.0, -1.0, 0.0), Vector::new(0.0, 3.0, 0.0), Arc::new(Material::default()))
            .unwrap()
    }

    #[test]
    fn test_normal_is_normalized() {
        assert_eq!(floor().normal(), Vector::Y);
        assert_eq!(floor().normal_at_point(Point::new(7.0, -1.0, 2.0)).unwrap(), Vector::Y);
    }

    #[test]
    fn test_plane_hit() {
        let ray = Ray::new(Point::new(0.0, 1.0, 0.0), Vector::new(0.0, -1.0, 1.0));
        let hit = floor().find_intersection(&ray).unwrap();

        // Drops 2 units at 45 degrees: t = 2 * sqrt(2)
        assert!((hit.distance - 2.0 * 2.0_f64.sqrt()).abs() < 1e-9);
        assert_eq!(hit.normal, Vector::Y);
    }

    #[test]
    fn test_parallel_ray_misses() {
        let ray = Ray::new(Point::ORIGIN, Vector::X);
        assert!(floor().find_intersection(&ray).is_none());
    }

    #[test]
    fn test_plane_behind_ray_misses() {
        let ray = Ray::new(Point::ORIGIN, Vector::Y);
        assert!(floor().find_intersection(&ray).is_none());
    }

    #[test]
    fn test_zero_normal_rejected() {
        let plane = Plane::new(Point::ORIGIN, Vector::ZERO, Arc::new(Material::default()));
        assert!(matches!(plane, Err(ObjectError::DegenerateNormal)));
    }

    #[test]
    fn test_transform_identity() {
        let plane = floor().transform(&Matrix::IDENTITY);
        assert_eq!(plane.point(), floor().point());
        assert_eq!(plane.normal(), floor().normal());
    }
}
