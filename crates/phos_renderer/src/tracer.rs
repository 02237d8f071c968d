//! Recursive Whitted-style tracing with Phong shading.
//!
//! Every hit is shaded with ambient plus per-light diffuse and specular
//! terms (lights blocked by another object are skipped), tinted once by the
//! material color. Reflective and transmissive materials then spawn at most
//! one reflected and one refracted ray each, up to [`MAX_DEPTH`] bounces.

use phos_core::{Color, Light, Material};
use phos_math::{Interval, Point, Ray, Vector, EPSILON};

use crate::hittable::Hittable;
use crate::Scene;

/// Maximum recursion depth for reflected and refracted rays.
pub const MAX_DEPTH: u32 = 5;

/// Secondary rays start this far off the surface to avoid self-hits.
pub const SURFACE_OFFSET: f64 = 0.01;

/// Color seen along `ray`.
///
/// `depth` counts the bounces that led to this ray; primary rays use 0.
pub fn trace_ray(ray: &Ray, scene: &Scene, depth: u32) -> Color {
    let Some(hit) = scene.find_nearest_intersection(ray, Interval::FORWARD) else {
        return scene.background_color();
    };
    let Some(object) = scene.object(hit.object_index) else {
        return scene.background_color();
    };
    let material = object.material();

    let direct = color_at(scene, hit.object_index, hit.point, hit.normal, ray.origin());
    let mut color = direct * material.color;

    if depth >= MAX_DEPTH {
        return color;
    }

    let mut normal = hit.normal;
    let omega = -ray.direction();
    let mut relative_index = material.transmission_coefficient;

    // Leaving the object: face the normal towards the ray and invert the
    // relative index of refraction.
    if normal.dot(omega) < 0.0 {
        normal = -normal;
        relative_index = if relative_index == 0.0 {
            0.0
        } else {
            1.0 / relative_index
        };
    }

    if material.is_reflective() {
        let reflected = trace_reflection(ray, scene, depth, hit.point, normal);
        color += reflected * material.reflection_coefficient;
    }

    if material.is_transmissive() {
        let transmitted = match refract(ray.direction(), normal, relative_index) {
            Some(direction) => {
                let refracted = Ray::new(hit.point - normal * SURFACE_OFFSET, direction);
                trace_ray(&refracted, scene, depth + 1)
            }
            // Total internal reflection
            None => trace_reflection(ray, scene, depth, hit.point, normal),
        };
        color += transmitted * material.transmission_coefficient;
    }

    color
}

fn trace_reflection(ray: &Ray, scene: &Scene, depth: u32, point: Point, normal: Vector) -> Color {
    let reflected = Ray::new(point + normal * SURFACE_OFFSET, ray.direction().reflect(normal));
    trace_ray(&reflected, scene, depth + 1)
}

/// Snell refraction of unit `direction` through a surface whose `normal`
/// faces the incoming ray. `None` on total internal reflection.
fn refract(direction: Vector, normal: Vector, relative_index: f64) -> Option<Vector> {
    let cos_theta = normal.dot(-direction);
    let delta = 1.0 - (1.0 - cos_theta * cos_theta) / (relative_index * relative_index);
    if delta < 0.0 {
        return None;
    }

    let tangent = direction - normal * normal.dot(direction);
    Some(tangent / relative_index - normal * delta.sqrt())
}

/// Untinted direct illumination at a surface point of object
/// `object_index`, as seen from `spectator`.
///
/// Returns ambient plus diffuse and specular for every light that is not
/// blocked by a different object. The caller multiplies by the material
/// color.
pub fn color_at(
    scene: &Scene,
    object_index: usize,
    hit_position: Point,
    normal: Vector,
    spectator: Point,
) -> Color {
    let Some(object) = scene.object(object_index) else {
        return Color::BLACK;
    };
    let material = object.material();

    let mut color = material.ambient_component(scene.ambient_color());
    for light in scene.lights() {
        if is_shadowed(scene, object_index, hit_position, light) {
            continue;
        }
        color += direct_light(material, light, hit_position, normal, spectator);
    }

    color
}

fn direct_light(
    material: &Material,
    light: &Light,
    hit_position: Point,
    normal: Vector,
    spectator: Point,
) -> Color {
    material.diffuse_component(light, hit_position, normal)
        + material.specular_component(light, hit_position, normal, spectator)
}

/// True if the nearest hit along the ray towards the light is another
/// object. The search is not cut off at the light.
///
/// Hitting the shaded object itself does not count as a shadow.
fn is_shadowed(scene: &Scene, object_index: usize, hit_position: Point, light: &Light) -> bool {
    let to_light = light.position - hit_position;
    if to_light.norm() < EPSILON {
        return false;
    }

    let shadow_ray = Ray::new(hit_position, to_light);
    scene
        .find_nearest_intersection(&shadow_ray, Interval::FORWARD)
        .is_some_and(|blocker| blocker.object_index != object_index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Camera, Plane, Sphere};
    use std::sync::Arc;

    fn camera() -> Camera {
        Camera::new(Point::ORIGIN, Point::new(0.0, 0.0, 1.0), Vector::Y, 1.0, 10, 10).unwrap()
    }

    fn forward() -> Ray {
        Ray::new(Point::ORIGIN, Vector::Z)
    }

    #[test]
    fn test_miss_returns_background() {
        let background = Color::new(0.1, 0.2, 0.3);
        let scene = Scene::new(camera()).with_background_color(background);
        assert_eq!(trace_ray(&forward(), &scene, 0), background);
    }

    #[test]
    fn test_ambient_only_is_tinted_once() {
        let material = Material {
            color: Color::new(1.0, 0.5, 0.0),
            ambient_coefficient: 0.5,
            ..Default::default()
        };
        let scene = Scene::new(camera())
            .with_ambient_color(Color::WHITE)
            .with_object(Sphere::new(Point::new(0.0, 0.0, 5.0), 1.0, Arc::new(material)).unwrap());

        let color = trace_ray(&forward(), &scene, 0);
        assert!((color.r() - 0.5).abs() < 1e-12);
        assert!((color.g() - 0.25).abs() < 1e-12);
        assert_eq!(color.b(), 0.0);
    }

    #[test]
    fn test_shadowed_light_is_skipped() {
        let material = Arc::new(Material::new(Color::WHITE));
        let floor = Plane::new(Point::ORIGIN, Vector::Y, Arc::clone(&material)).unwrap();
        let blocker = Sphere::new(Point::new(0.0, 2.0, 0.0), 0.5, Arc::clone(&material)).unwrap();
        let light = Light::new(Point::new(0.0, 5.0, 0.0), Color::WHITE);

        let open = Scene::new(camera()).with_object(floor).with_light(light);
        let blocked = open.clone().with_object(blocker);

        let lit = color_at(&open, 0, Point::ORIGIN, Vector::Y, Point::new(0.0, 1.0, -1.0));
        let dark = color_at(&blocked, 0, Point::ORIGIN, Vector::Y, Point::new(0.0, 1.0, -1.0));

        assert!(lit.r() > 0.5);
        // Ambient is black, so only direct light could contribute
        assert!(dark.is_black());
    }

    #[test]
    fn test_object_beyond_light_still_occludes() {
        let material = Arc::new(Material::new(Color::WHITE));
        let floor = Plane::new(Point::ORIGIN, Vector::Y, Arc::clone(&material)).unwrap();
        let ceiling = Plane::new(Point::new(0.0, 10.0, 0.0), -Vector::Y, Arc::clone(&material)).unwrap();
        let light = Light::new(Point::new(0.0, 5.0, 0.0), Color::WHITE);

        let open = Scene::new(camera()).with_object(floor).with_light(light);
        let covered = open.clone().with_object(ceiling);

        let spectator = Point::new(0.0, 1.0, -1.0);
        assert!(!color_at(&open, 0, Point::ORIGIN, Vector::Y, spectator).is_black());
        // The ceiling is the nearest hit on the shadow ray even though the
        // light is closer
        assert!(color_at(&covered, 0, Point::ORIGIN, Vector::Y, spectator).is_black());
    }

    #[test]
    fn test_refract_straight_through() {
        let refracted = refract(Vector::Z, -Vector::Z, 1.5).unwrap();
        assert!((refracted - Vector::Z).norm() < 1e-12);
    }

    #[test]
    fn test_refract_bends_towards_normal() {
        let incoming = Vector::new(1.0, 0.0, 1.0).normalized();
        let refracted = refract(incoming, -Vector::Z, 1.5).unwrap();

        assert!((refracted.norm() - 1.0).abs() < 1e-9);
        // sin(theta_t) = sin(45°) / 1.5
        let expected = std::f64::consts::FRAC_1_SQRT_2 / 1.5;
        assert!((refracted.x - expected).abs() < 1e-9);
    }

    #[test]
    fn test_total_internal_reflection() {
        // Grazing exit from a dense medium
        let incoming = Vector::new(1.0, 0.0, 0.2).normalized();
        assert!(refract(incoming, -Vector::Z, 1.0 / 1.5).is_none());
    }

    /// Dense half-space z < 5 (index 1.5 relative to outside) whose only
    /// visible contribution is what it transmits.
    fn dense_half_space() -> Plane {
        let glass = Material {
            color: Color::BLACK,
            ambient_coefficient: 0.0,
            transmission_coefficient: 1.5,
            ..Default::default()
        };
        Plane::new(Point::new(0.0, 0.0, 5.0), Vector::Z, Arc::new(glass)).unwrap()
    }

    fn ambient_lit(color: Color) -> Arc<Material> {
        Arc::new(Material {
            color,
            ambient_coefficient: 1.0,
            ..Default::default()
        })
    }

    #[test]
    fn test_exit_ray_bends_away_from_normal() {
        // sin(theta_i) = 0.4 inside, so sin(theta_t) = 0.6 outside and the
        // exit ray runs along (0.6, 0, 0.8).
        let ray = Ray::new(Point::ORIGIN, Vector::new(0.4, 0.0, 0.84_f64.sqrt()));
        let exit_x = 5.0 * 0.4 / 0.84_f64.sqrt();
        let exit = Point::new(exit_x, 0.0, 5.0 + SURFACE_OFFSET);
        let on_bent_path = exit + Vector::new(0.6, 0.0, 0.8) * 6.25;

        let target = Sphere::new(on_bent_path, 0.5, ambient_lit(Color::new(0.4, 0.2, 0.0))).unwrap();
        let scene = Scene::new(camera())
            .with_ambient_color(Color::WHITE)
            .with_object(dense_half_space())
            .with_object(target);

        // The unbent ray would pass about 1.5 units from the target
        let color = trace_ray(&ray, &scene, 0);
        assert!((color.r() - 0.6).abs() < 1e-9);
        assert!((color.g() - 0.3).abs() < 1e-9);
        assert_eq!(color.b(), 0.0);
    }

    #[test]
    fn test_total_internal_reflection_is_weighted_by_transmission() {
        // sin(theta_i) = 0.8 inside exceeds 1 / 1.5, so the ray reflects back
        // along (0.8, 0, -0.6) onto the z = -1 wall.
        let ray = Ray::new(Point::ORIGIN, Vector::new(0.8, 0.0, 0.6));
        let wall = Plane::new(
            Point::new(0.0, 0.0, -1.0),
            Vector::Z,
            ambient_lit(Color::new(0.2, 0.3, 0.4)),
        )
        .unwrap();
        let scene = Scene::new(camera())
            .with_ambient_color(Color::WHITE)
            .with_object(dense_half_space())
            .with_object(wall);

        let color = trace_ray(&ray, &scene, 0);
        assert!((color.r() - 0.3).abs() < 1e-9);
        assert!((color.g() - 0.45).abs() < 1e-9);
        assert!((color.b() - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_facing_mirrors_terminate() {
        let mirror = Arc::new(Material {
            color: Color::WHITE,
            reflection_coefficient: 1.0,
            ..Default::default()
        });
        let scene = Scene::new(camera())
            .with_ambient_color(Color::gray(0.2))
            .with_object(Plane::new(Point::new(0.0, 0.0, 1.0), -Vector::Z, Arc::clone(&mirror)).unwrap())
            .with_object(Plane::new(Point::new(0.0, 0.0, -1.0), Vector::Z, mirror).unwrap());

        let color = trace_ray(&forward(), &scene, 0);
        assert!(!color.is_black());
    }
}
