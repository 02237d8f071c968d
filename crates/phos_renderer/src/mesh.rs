//! Triangle mesh: a list of triangles sharing one material.

use std::sync::Arc;

use phos_core::Material;
use phos_math::{Interval, Matrix, Point, Ray, Transformable, Vector};

use crate::hittable::{Hit, Hittable, ObjectError};
use crate::Triangle;

/// A collection of triangles shaded with a single material.
#[derive(Debug, Clone)]
pub struct TriangleMesh {
    triangles: Vec<Triangle>,
    material: Arc<Material>,
}

impl TriangleMesh {
    /// Create a mesh; every triangle is re-assigned the mesh material.
    pub fn new(triangles: Vec<Triangle>, material: Arc<Material>) -> Self {
        let triangles = triangles
            .iter()
            .map(|t| t.with_material(Arc::clone(&material)))
            .collect();
        Self {
            triangles,
            material,
        }
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Get the number of triangles.
    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    /// Check if the mesh has no triangles.
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// First triangle (in list order) that contains `point`.
    pub fn find_triangle_at_point(&self, point: Point) -> Option<&Triangle> {
        self.triangles.iter().find(|t| t.contains_point(point))
    }
}

impl Hittable for TriangleMesh {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<Hit> {
        let mut closest: Option<Hit> = None;

        for triangle in &self.triangles {
            let interval = ray_t.with_max(closest.map_or(ray_t.max, |h| h.distance));
            if let Some(hit) = triangle.hit(ray, interval) {
                closest = Some(hit);
            }
        }

        closest
    }

    fn normal_at_point(&self, point: Point) -> Result<Vector, ObjectError> {
        self.find_triangle_at_point(point)
            .map(Triangle::normal)
            .ok_or(ObjectError::PointNotOnMesh(point))
    }

    fn material(&self) -> &Material {
        &self.material
    }
}

impl Transformable for TriangleMesh {
    fn transform(&self, matrix: &Matrix) -> Self {
        Self {
            triangles: self.triangles.iter().map(|t| t.transform(matrix)).collect(),
            material: Arc::clone(&self.material),
        }
    }
}
