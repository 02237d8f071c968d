//! Bezier surfaces, tessellated into triangle meshes at scene-build time.
//!
//! The surface is sampled on a K1 x K2 parameter grid with de Casteljau
//! evaluation; each grid cell is then split along its (0,0)-(1,1) diagonal
//! into two triangles. Rendering only ever sees the resulting
//! [`TriangleMesh`].

use std::sync::Arc;

use log::{debug, warn};
use phos_core::Material;
use phos_math::Point;

use crate::hittable::ObjectError;
use crate::{Triangle, TriangleMesh};

/// A tensor-product Bezier patch and its sampling density.
#[derive(Debug, Clone)]
pub struct BezierSurface {
    /// Control points, `control_points[i][j]`; every row has the same length
    control_points: Vec<Vec<Point>>,
    /// Samples along the first parametric axis (rows)
    k1: usize,
    /// Samples along the second parametric axis (columns)
    k2: usize,
}

impl BezierSurface {
    /// Validate the control grid and sample counts.
    pub fn new(control_points: Vec<Vec<Point>>, k1: usize, k2: usize) -> Result<Self, ObjectError> {
        if k1 < 2 || k2 < 2 {
            return Err(ObjectError::InvalidTessellation { k1, k2 });
        }

        let columns = control_points.first().map_or(0, Vec::len);
        if columns == 0 || control_points.iter().any(|row| row.len() != columns) {
            return Err(ObjectError::InvalidControlGrid);
        }

        Ok(Self {
            control_points,
            k1,
            k2,
        })
    }

    /// Evaluate the surface at parameters `(s, t)` in [0, 1]².
    ///
    /// Each control row is reduced to one point at `t`, then the resulting
    /// column of points is reduced at `s`.
    pub fn evaluate(&self, s: f64, t: f64) -> Point {
        let column: Vec<Point> = self
            .control_points
            .iter()
            .map(|row| de_casteljau(row, t))
            .collect();
        de_casteljau(&column, s)
    }

    /// Sampled points, `grid[i][j]` at `(i / (k1 - 1), j / (k2 - 1))`.
    pub fn sample_grid(&self) -> Vec<Vec<Point>> {
        let step1 = 1.0 / (self.k1 - 1) as f64;
        let step2 = 1.0 / (self.k2 - 1) as f64;

        (0..self.k1)
            .map(|i| {
                (0..self.k2)
                    .map(|j| self.evaluate(i as f64 * step1, j as f64 * step2))
                    .collect()
            })
            .collect()
    }

    /// Build the triangle mesh: two triangles per grid cell.
    ///
    /// Zero-area triangles (collapsed cells, repeated control points) are
    /// skipped.
    pub fn tessellate(&self, material: Arc<Material>) -> TriangleMesh {
        let grid = self.sample_grid();
        let mut triangles = Vec::with_capacity(2 * (self.k1 - 1) * (self.k2 - 1));
        let mut skipped = 0;

        for i in 0..self.k1 - 1 {
            for j in 0..self.k2 - 1 {
                let p00 = grid[i][j];
                let p10 = grid[i + 1][j];
                let p01 = grid[i][j + 1];
                let p11 = grid[i + 1][j + 1];

                // Both halves wind the same way, so their normals agree.
                for (a, b, c) in [(p00, p10, p11), (p00, p11, p01)] {
                    match Triangle::new(a, b, c, Arc::clone(&material)) {
                        Ok(triangle) => triangles.push(triangle),
                        Err(_) => skipped += 1,
                    }
                }
            }
        }

        if triangles.is_empty() {
            warn!("Bezier surface tessellated to an empty mesh");
        }
        debug!(
            "Tessellated Bezier surface {}x{} into {} triangles ({} degenerate skipped)",
            self.k1,
            self.k2,
            triangles.len(),
            skipped
        );

        TriangleMesh::new(triangles, material)
    }
}

/// Point on the Bezier curve with the given control points at parameter `t`.
fn de_casteljau(points: &[Point], t: f64) -> Point {
    match points {
        [] => Point::ORIGIN,
        [only] => *only,
        _ => {
            let reduced: Vec<Point> = points.windows(2).map(|w| w[0].lerp(w[1], t)).collect();
            de_casteljau(&reduced, t)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Hittable;
    use phos_math::{Ray, Vector};

    fn close(a: Point, b: Point) -> bool {
        (a - b).norm() < 1e-9
    }

    /// Flat 3x3 patch spanning [-1, 1]² in the plane z = 3.
    fn flat_patch(k1: usize, k2: usize) -> Result<BezierSurface, ObjectError> {
        let grid = (0..3)
            .map(|i| {
                (0..3)
                    .map(|j| Point::new(j as f64 - 1.0, i as f64 - 1.0, 3.0))
                    .collect()
            })
            .collect();
        BezierSurface::new(grid, k1, k2)
    }

    #[test]
    fn test_de_casteljau_curve() {
        let points = [Point::ORIGIN, Point::new(1.0, 2.0, 0.0), Point::new(2.0, 0.0, 0.0)];
        assert!(close(de_casteljau(&points, 0.0), points[0]));
        assert!(close(de_casteljau(&points, 1.0), points[2]));
        // Quadratic midpoint: 0.25 p0 + 0.5 p1 + 0.25 p2
        assert!(close(de_casteljau(&points, 0.5), Point::new(1.0, 1.0, 0.0)));
    }

    #[test]
    fn test_evaluate_corners() {
        let patch = flat_patch(4, 4).unwrap();
        assert!(close(patch.evaluate(0.0, 0.0), Point::new(-1.0, -1.0, 3.0)));
        assert!(close(patch.evaluate(1.0, 1.0), Point::new(1.0, 1.0, 3.0)));
        assert!(close(patch.evaluate(0.5, 0.5), Point::new(0.0, 0.0, 3.0)));
    }

    #[test]
    fn test_tessellation_counts() {
        let patch = flat_patch(5, 3).unwrap();
        let grid = patch.sample_grid();
        assert_eq!(grid.len(), 5);
        assert!(grid.iter().all(|row| row.len() == 3));

        let mesh = patch.tessellate(Arc::new(Material::default()));
        assert_eq!(mesh.len(), 2 * 4 * 2);
    }

    #[test]
    fn test_normals_are_consistent() {
        let mesh = flat_patch(4, 4).unwrap().tessellate(Arc::new(Material::default()));
        let first = mesh.triangles()[0].normal();
        assert!(mesh.triangles().iter().all(|t| (t.normal() - first).norm() < 1e-9));
        assert!((first.dot(Vector::Z).abs() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_tessellated_mesh_is_hittable() {
        let mesh = flat_patch(3, 3).unwrap().tessellate(Arc::new(Material::default()));
        let hit = mesh
            .find_intersection(&Ray::new(Point::new(0.3, -0.2, 0.0), Vector::Z))
            .unwrap();
        assert!((hit.distance - 3.0).abs() < 1e-9);
        assert!(mesh.normal_at_point(Point::new(0.3, -0.2, 3.0)).is_ok());
    }

    #[test]
    fn test_rejects_too_few_samples() {
        assert_eq!(
            flat_patch(1, 4).unwrap_err(),
            ObjectError::InvalidTessellation { k1: 1, k2: 4 }
        );
        assert!(flat_patch(4, 1).is_err());
    }

    #[test]
    fn test_rejects_ragged_grid() {
        let ragged = vec![vec![Point::ORIGIN, Point::new(1.0, 0.0, 0.0)], vec![Point::ORIGIN]];
        assert_eq!(
            BezierSurface::new(ragged, 3, 3).unwrap_err(),
            ObjectError::InvalidControlGrid
        );
        assert_eq!(
            BezierSurface::new(Vec::new(), 3, 3).unwrap_err(),
            ObjectError::InvalidControlGrid
        );
    }
}
