//! Sphere primitive for ray tracing.

use std::sync::Arc;

use phos_core::Material;
use phos_math::{Interval, Matrix, Point, Ray, Transformable, Vector};

use crate::hittable::{Hit, Hittable, ObjectError};

/// A sphere primitive.
#[derive(Debug, Clone)]
pub struct Sphere {
    center: Point,
    radius: f64,
    material: Arc<Material>,
}

impl Sphere {
    /// Create a new sphere. The radius must be non-negative.
    pub fn new(center: Point, radius: f64, material: Arc<Material>) -> Result<Self, ObjectError> {
        if radius.is_nan() || radius < 0.0 {
            return Err(ObjectError::NegativeRadius(radius));
        }
        Ok(Self {
            center,
            radius,
            material,
        })
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Hittable for Sphere {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<Hit> {
        // a t² + b t + c = 0
        let oc = ray.origin() - self.center;
        let a = ray.direction().dot(ray.direction());
        let b = 2.0 * ray.direction().dot(oc);
        let c = oc.dot(oc) - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // Find the nearest root in the acceptable range
        let mut root = (-b - sqrtd) / (2.0 * a);
        if !ray_t.surrounds(root) {
            root = (-b + sqrtd) / (2.0 * a);
            if !ray_t.surrounds(root) {
                return None;
            }
        }

        Some(Hit {
            distance: root,
            normal: (ray.at(root) - self.center).normalized(),
        })
    }

    fn normal_at_point(&self, point: Point) -> Result<Vector, ObjectError> {
        (point - self.center)
            .try_normalized()
            .ok_or(ObjectError::DegenerateNormal)
    }

    fn material(&self) -> &Material {
        &self.material
    }
}

impl Transformable for Sphere {
    /// The radius becomes the distance from the new center to a transformed
    /// surface point, which is exact for rigid motions and uniform scales.
    fn transform(&self, matrix: &Matrix) -> Self {
        let center = self.center.transform(matrix);
        let surface = (self.center + Vector::X * self.radius).transform(matrix);
        Self {
            center,
            radius: center.distance(surface),
            material: Arc::clone(&self.material),
        }
    }
}
