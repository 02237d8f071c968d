//! Scene container: camera, objects, lights and environment colors.

use phos_core::{Color, Light};
use phos_math::{Interval, Point, Ray, Vector};

use crate::hittable::Hittable;
use crate::{Camera, Object};

/// Everything the tracer needs to shade a frame.
///
/// Scenes are built once and only read while rendering; object order is
/// significant because it breaks ties between equally distant hits.
#[derive(Debug, Clone)]
pub struct Scene {
    pub camera: Camera,
    objects: Vec<Object>,
    lights: Vec<Light>,
    ambient_color: Color,
    background_color: Color,
}

/// Nearest intersection of a ray with the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    /// World-space hit point
    pub point: Point,
    /// Geometric normal at the hit (not flipped to face the ray)
    pub normal: Vector,
    /// Distance along the ray
    pub distance: f64,
    /// Index of the hit object in [`Scene::objects`]
    pub object_index: usize,
}

impl Scene {
    /// Create an empty scene viewed through `camera`, with black ambient
    /// and background.
    pub fn new(camera: Camera) -> Self {
        Self {
            camera,
            objects: Vec::new(),
            lights: Vec::new(),
            ambient_color: Color::BLACK,
            background_color: Color::BLACK,
        }
    }

    /// Append an object.
    pub fn with_object(mut self, object: impl Into<Object>) -> Self {
        self.objects.push(object.into());
        self
    }

    /// Append a point light.
    pub fn with_light(mut self, light: Light) -> Self {
        self.lights.push(light);
        self
    }

    pub fn with_ambient_color(mut self, color: Color) -> Self {
        self.ambient_color = color;
        self
    }

    pub fn with_background_color(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    /// Same scene seen through another camera.
    pub fn with_camera(mut self, camera: Camera) -> Self {
        self.camera = camera;
        self
    }

    pub fn objects(&self) -> &[Object] {
        &self.objects
    }

    pub fn object(&self, index: usize) -> Option<&Object> {
        self.objects.get(index)
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    pub fn ambient_color(&self) -> Color {
        self.ambient_color
    }

    pub fn background_color(&self) -> Color {
        self.background_color
    }

    /// Nearest object hit by `ray` within `ray_t`.
    ///
    /// Objects are scanned in order; a later object only replaces the
    /// current best when it is strictly closer.
    pub fn find_nearest_intersection(&self, ray: &Ray, ray_t: Interval) -> Option<Intersection> {
        let mut closest: Option<(usize, f64, Vector)> = None;

        for (index, object) in self.objects.iter().enumerate() {
            let interval = ray_t.with_max(closest.map_or(ray_t.max, |(_, distance, _)| distance));
            if let Some(hit) = object.hit(ray, interval) {
                closest = Some((index, hit.distance, hit.normal));
            }
        }

        closest.map(|(object_index, distance, normal)| Intersection {
            point: ray.at(distance),
            normal,
            distance,
            object_index,
        })
    }
}
