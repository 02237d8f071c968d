//! Hittable trait and Hit record for ray-object intersection.

use phos_core::Material;
use phos_math::{Interval, Point, Ray, Vector};
use thiserror::Error;

/// Errors from building or querying scene objects.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ObjectError {
    #[error("Point {0} does not lie on any triangle of the mesh")]
    PointNotOnMesh(Point),

    #[error("Sphere radius must be non-negative, got {0}")]
    NegativeRadius(f64),

    #[error("Surface normal is degenerate (zero length)")]
    DegenerateNormal,

    #[error("Bezier tessellation needs at least 2 samples per axis, got {k1}x{k2}")]
    InvalidTessellation { k1: usize, k2: usize },

    #[error("Bezier control grid must be a non-empty rectangle of points")]
    InvalidControlGrid,
}

/// Nearest intersection of a ray with one object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Ray parameter of the hit (the ray direction is unit length, so this
    /// is also the distance)
    pub distance: f64,
    /// Geometric surface normal at the hit, unit length. Not flipped to face
    /// the ray.
    pub normal: Vector,
}

/// Trait for objects that can be hit by rays.
pub trait Hittable: Send + Sync {
    /// Nearest hit whose distance the interval strictly surrounds.
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<Hit>;

    /// Surface normal at a point assumed to lie on the object.
    fn normal_at_point(&self, point: Point) -> Result<Vector, ObjectError>;

    /// Material used to shade this object.
    fn material(&self) -> &Material;

    /// Nearest hit farther than [`phos_math::EPSILON`].
    fn find_intersection(&self, ray: &Ray) -> Option<Hit> {
        self.hit(ray, Interval::FORWARD)
    }
}
