//! Triangle primitive for ray tracing.
//!
//! Uses the Möller-Trumbore algorithm for ray-triangle intersection.

use std::sync::Arc;

use phos_core::Material;
use phos_math::{Interval, Matrix, Point, Ray, Transformable, Vector, EPSILON};

use crate::hittable::{Hit, Hittable, ObjectError};

/// A triangle primitive.
#[derive(Debug, Clone)]
pub struct Triangle {
    /// Vertices
    v0: Point,
    v1: Point,
    v2: Point,
    /// Face normal (unit length)
    normal: Vector,
    material: Arc<Material>,
}

impl Triangle {
    /// Create a new triangle from three vertices.
    ///
    /// The normal follows the winding: `(v1 - v0) × (v2 - v0)`. Fails for a
    /// zero-area triangle.
    pub fn new(v0: Point, v1: Point, v2: Point, material: Arc<Material>) -> Result<Self, ObjectError> {
        let normal = (v1 - v0).cross(v2 - v0);
        Self::with_normal(v0, v1, v2, normal, material)
    }

    /// Create a triangle with an explicit normal (normalized here).
    pub fn with_normal(
        v0: Point,
        v1: Point,
        v2: Point,
        normal: Vector,
        material: Arc<Material>,
    ) -> Result<Self, ObjectError> {
        let normal = normal.try_normalized().ok_or(ObjectError::DegenerateNormal)?;
        Ok(Self {
            v0,
            v1,
            v2,
            normal,
            material,
        })
    }

    pub fn vertices(&self) -> [Point; 3] {
        [self.v0, self.v1, self.v2]
    }

    pub fn normal(&self) -> Vector {
        self.normal
    }

    /// Same-side test: `point` lies in the triangle's plane and on the inner
    /// side of all three edges.
    pub fn contains_point(&self, point: Point) -> bool {
        if self.normal.dot(point - self.v0).abs() > EPSILON {
            return false;
        }

        [(self.v0, self.v1), (self.v1, self.v2), (self.v2, self.v0)]
            .iter()
            .all(|&(a, b)| (b - a).cross(point - a).dot(self.normal) >= -EPSILON)
    }

    pub(crate) fn with_material(&self, material: Arc<Material>) -> Self {
        Self {
            material,
            ..self.clone()
        }
    }
}

impl Hittable for Triangle {
    /// Möller-Trumbore ray-triangle intersection algorithm.
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<Hit> {
        let edge1 = self.v1 - self.v0;
        let edge2 = self.v2 - self.v0;

        let h = ray.direction().cross(edge2);
        let a = edge1.dot(h);

        // Ray is parallel to triangle
        if a.abs() < EPSILON {
            return None;
        }

        let f = 1.0 / a;
        let s = ray.origin() - self.v0;
        let u = f * s.dot(h);

        // Check if intersection is outside triangle (u parameter)
        if !(0.0..=1.0).contains(&u) {
            return None;
        }

        let q = s.cross(edge1);
        let v = f * ray.direction().dot(q);

        // Check if intersection is outside triangle (v parameter)
        if v < 0.0 || u + v > 1.0 {
            return None;
        }

        let t = f * edge2.dot(q);
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

impl Transformable for Triangle {
    fn transform(&self, matrix: &Matrix) -> Self {
        Self {
            v0: self.v0.transform(matrix),
            v1: self.v1.transform(matrix),
            v2: self.v2.transform(matrix),
            normal: self.normal.transform_normal(matrix),
            material: Arc::clone(&self.material),
        }
    }
}
