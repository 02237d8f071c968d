//! The closed set of renderable shapes.

use phos_core::Material;
use phos_math::{Interval, Matrix, Point, Ray, Transformable, Vector};

use crate::hittable::{Hit, Hittable, ObjectError};
use crate::{Plane, Sphere, Triangle, TriangleMesh};

/// A renderable object.
///
/// Bezier surfaces are not a variant: they are tessellated into a
/// [`TriangleMesh`] before they enter a scene.
#[derive(Debug, Clone)]
pub enum Object {
    Sphere(Sphere),
    Plane(Plane),
    Triangle(Triangle),
    Mesh(TriangleMesh),
}

impl Object {
    fn as_hittable(&self) -> &dyn Hittable {
        match self {
            Object::Sphere(s) => s,
            Object::Plane(p) => p,
            Object::Triangle(t) => t,
            Object::Mesh(m) => m,
        }
    }
}

impl Hittable for Object {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<Hit> {
        self.as_hittable().hit(ray, ray_t)
    }

    fn normal_at_point(&self, point: Point) -> Result<Vector, ObjectError> {
        self.as_hittable().normal_at_point(point)
    }

    fn material(&self) -> &Material {
        self.as_hittable().material()
    }
}

impl Transformable for Object {
    fn transform(&self, matrix: &Matrix) -> Self {
        match self {
            Object::Sphere(s) => Object::Sphere(s.transform(matrix)),
            Object::Plane(p) => Object::Plane(p.transform(matrix)),
            Object::Triangle(t) => Object::Triangle(t.transform(matrix)),
            Object::Mesh(m) => Object::Mesh(m.transform(matrix)),
        }
    }
}

impl From<Sphere> for Object {
    fn from(sphere: Sphere) -> Self {
        Object::Sphere(sphere)
    }
}

impl From<Plane> for Object {
    fn from(plane: Plane) -> Self {
        Object::Plane(plane)
    }
}

impl From<Triangle> for Object {
    fn from(triangle: Triangle) -> Self {
        Object::Triangle(triangle)
    }
}

impl From<TriangleMesh> for Object {
    fn from(mesh: TriangleMesh) -> Self {
        Object::Mesh(mesh)
    }
}
