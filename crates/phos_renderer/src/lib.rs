//! Phos Renderer - CPU Phong ray tracing
//!
//! A Whitted-style ray tracer: one primary ray per pixel, Phong direct
//! lighting with hard shadows, and recursive mirror reflection and
//! refraction up to a fixed depth.
//!
//! Rendering is a pure function of the scene and the pixel coordinate, so
//! the parallel driver (rayon, one row per task) produces exactly the same
//! image as the sequential one.

mod bezier;
mod camera;
mod hittable;
mod mesh;
mod object;
mod plane;
mod renderer;
mod scene;
mod sphere;
mod tracer;
mod triangle;

pub use bezier::BezierSurface;
pub use camera::{Camera, CameraError};
pub use hittable::{Hit, Hittable, ObjectError};
pub use mesh::TriangleMesh;
pub use object::Object;
pub use plane::Plane;
pub use renderer::{
    render, render_parallel, render_pixel, render_sequential, RenderConfig, RenderError,
    RenderMode,
};
pub use scene::{Intersection, Scene};
pub use sphere::Sphere;
pub use tracer::{color_at, trace_ray, MAX_DEPTH, SURFACE_OFFSET};
pub use triangle::Triangle;

/// Re-export the math and shading types scenes are built from
pub use phos_core::{Color, Image, Light, Material};
pub use phos_math::{Angle, Interval, Matrix, Point, Ray, Transformable, Vector, EPSILON};
