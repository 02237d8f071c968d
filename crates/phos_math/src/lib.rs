//! Phos math - vector, point and transform primitives for the ray tracer.
//!
//! `Vector` and `Point` are distinct types so positions and displacements
//! cannot be mixed up (there is no `Point + Point`). Both are thin wrappers
//! over glam's `DVec3`, and transforms are backed by `DMat3`/`DMat4`.

mod interval;
mod point;
mod ray;
mod transform;
mod vector;

pub use interval::Interval;
pub use point::Point;
pub use ray::Ray;
pub use transform::{Angle, Matrix, TransformError, Transformable};
pub use vector::Vector;

/// Minimum accepted intersection distance.
///
/// Shared by every object variant and by shadow rays, so hits at t ≈ 0
/// (shadow acne) are rejected consistently.
pub const EPSILON: f64 = 1e-4;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_creation() {
        let v = Vector::new(1.0, 2.0, 3.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);
    }

    #[test]
    fn test_point_vector_operations() {
        let a = Point::new(1.0, 2.0, 3.0);
        let b = Point::new(4.0, 6.0, 8.0);
        assert_eq!(b - a, Vector::new(3.0, 4.0, 5.0));
        assert_eq!(a + (b - a), b);
    }
}
