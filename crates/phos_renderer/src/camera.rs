//! Camera for ray generation.
//!
//! A pinhole camera with a unit-sized screen placed `distance_from_screen`
//! in front of the eye. Pixel (0, 0) is the top-left corner of the image.

use phos_math::{Matrix, Point, Ray, Transformable, Vector, EPSILON};
use thiserror::Error;

/// Errors from building a camera.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CameraError {
    #[error("Camera resolution must be non-zero, got {width}x{height}")]
    ZeroResolution { width: u32, height: u32 },

    #[error("Distance from screen must be positive, got {0}")]
    InvalidScreenDistance(f64),

    #[error("Camera position and look-at point coincide")]
    DegenerateView,

    #[error("Up vector is parallel to the view direction")]
    UpParallelToView,
}

/// Camera for generating primary rays into the scene.
///
/// Cameras are immutable; [`Camera::transform`] and
/// [`Camera::move_relative`] return new cameras.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    position: Point,
    look_at: Point,
    v_up: Vector,
    distance_from_screen: f64,
    vertical_resolution: u32,
    horizontal_resolution: u32,

    // Cached orthonormal basis
    v_w: Vector,
    v_u: Vector,
    v_v: Vector,
}

impl Camera {
    /// Create a camera, computing its view basis.
    ///
    /// `v_w` points from the eye to `look_at`, `v_u = v_up × v_w` points
    /// right on screen and `v_v = v_w × v_u` points up.
    pub fn new(
        position: Point,
        look_at: Point,
        v_up: Vector,
        distance_from_screen: f64,
        vertical_resolution: u32,
        horizontal_resolution: u32,
    ) -> Result<Self, CameraError> {
        if vertical_resolution == 0 || horizontal_resolution == 0 {
            return Err(CameraError::ZeroResolution {
                width: horizontal_resolution,
                height: vertical_resolution,
            });
        }
        // Also rejects NaN
        if !(distance_from_screen > 0.0) {
            return Err(CameraError::InvalidScreenDistance(distance_from_screen));
        }

        let v_w = (look_at - position)
            .try_normalized()
            .ok_or(CameraError::DegenerateView)?;
        let right = v_up.cross(v_w);
        if right.norm() < EPSILON {
            return Err(CameraError::UpParallelToView);
        }
        let v_u = right.normalized();
        let v_v = v_w.cross(v_u);

        Ok(Self {
            position,
            look_at,
            v_up,
            distance_from_screen,
            vertical_resolution,
            horizontal_resolution,
            v_w,
            v_u,
            v_v,
        })
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn look_at(&self) -> Point {
        self.look_at
    }

    pub fn v_up(&self) -> Vector {
        self.v_up
    }

    pub fn distance_from_screen(&self) -> f64 {
        self.distance_from_screen
    }

    /// Image height in pixels.
    pub fn vertical_resolution(&self) -> u32 {
        self.vertical_resolution
    }

    /// Image width in pixels.
    pub fn horizontal_resolution(&self) -> u32 {
        self.horizontal_resolution
    }

    /// Unit view direction.
    pub fn v_w(&self) -> Vector {
        self.v_w
    }

    /// Unit screen-right direction.
    pub fn v_u(&self) -> Vector {
        self.v_u
    }

    /// Unit screen-up direction.
    pub fn v_v(&self) -> Vector {
        self.v_v
    }

    /// Generate the primary ray through pixel column `i`, row `j`.
    pub fn get_ray(&self, i: u32, j: u32) -> Ray {
        let h = self.horizontal_resolution as f64;
        let v = self.vertical_resolution as f64;

        let relative_i = (i as f64 - h / 2.0) / h;
        let relative_j = (v / 2.0 - j as f64) / v;

        let screen_center = self.position + self.v_w * self.distance_from_screen;
        let world_point = screen_center + self.v_u * relative_i + self.v_v * relative_j;

        Ray::new(self.position, world_point - self.position)
    }

    /// All primary rays in row-major order, with their `(column, row)`.
    pub fn rays(&self) -> impl Iterator<Item = (u32, u32, Ray)> + '_ {
        (0..self.vertical_resolution).flat_map(move |j| {
            (0..self.horizontal_resolution).map(move |i| (i, j, self.get_ray(i, j)))
        })
    }

    /// New camera with position and look-at point transformed.
    ///
    /// The up vector, screen distance and resolution are copied unchanged,
    /// so a transform that rotates the view can leave `v_up` pointing
    /// somewhere unintended. Fails if the transformed view is degenerate.
    pub fn transform(&self, matrix: &Matrix) -> Result<Self, CameraError> {
        Self::new(
            self.position.transform(matrix),
            self.look_at.transform(matrix),
            self.v_up,
            self.distance_from_screen,
            self.vertical_resolution,
            self.horizontal_resolution,
        )
    }

    /// Move the eye and look-at point together along the camera's own axes:
    /// `dx` to the right, `dy` up, `dz` forward.
    pub fn move_relative(&self, dx: f64, dy: f64, dz: f64) -> Self {
        let offset = self.v_u * dx + self.v_v * dy + self.v_w * dz;
        Self {
            position: self.position + offset,
            look_at: self.look_at + offset,
            ..self.clone()
        }
    }
}
