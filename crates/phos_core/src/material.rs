//! Phong material model.
//!
//! The component functions below return light intensity only; they do not
//! multiply by [`Material::color`]. The tracer applies the material color
//! exactly once, after ambient, diffuse and specular have been summed.

use phos_math::{Point, Vector};

use crate::{Color, Light};

/// How a surface responds to light.
///
/// Materials are immutable and usually shared between objects through an
/// `Arc`.
#[derive(Clone, Debug, PartialEq)]
pub struct Material {
    /// Base surface color
    pub color: Color,

    /// Lambertian (kd)
    pub diffusion_coefficient: f64,

    /// Highlight strength (ks)
    pub specular_coefficient: f64,

    /// Response to the scene's ambient light (ka)
    pub ambient_coefficient: f64,

    /// Weight of the mirror-reflected ray (kr)
    pub reflection_coefficient: f64,

    /// Weight of the refracted ray; also used as the relative index of
    /// refraction when entering the object (kt)
    pub transmission_coefficient: f64,

    /// Phong shininess exponent; larger values give tighter highlights
    pub rugosity_coefficient: f64,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            color: Color::gray(0.5),
            diffusion_coefficient: 0.7,
            specular_coefficient: 0.3,
            ambient_coefficient: 0.1,
            reflection_coefficient: 0.0,
            transmission_coefficient: 0.0,
            rugosity_coefficient: 10.0,
        }
    }
}

impl Material {
    /// Create a material with the given color and default coefficients.
    pub fn new(color: Color) -> Self {
        Self {
            color,
            ..Default::default()
        }
    }

    /// `ka * ambient`
    pub fn ambient_component(&self, scene_ambient: Color) -> Color {
        scene_ambient * self.ambient_coefficient
    }

    /// `light * kd * max(0, n·l)`
    pub fn diffuse_component(&self, light: &Light, hit_position: Point, normal: Vector) -> Color {
        let to_light = (light.position - hit_position).normalized();
        light.color * (self.diffusion_coefficient * normal.dot(to_light).max(0.0))
    }

    /// `light * ks * max(0, r·v)^rugosity`, with `r = 2n(n·l) - l`.
    pub fn specular_component(
        &self,
        light: &Light,
        hit_position: Point,
        normal: Vector,
        spectator_position: Point,
    ) -> Color {
        let to_light = (light.position - hit_position).normalized();
        let to_spectator = (spectator_position - hit_position).normalized();
        let reflected = normal * (2.0 * normal.dot(to_light)) - to_light;

        let alignment = reflected.dot(to_spectator).max(0.0);
        light.color * (self.specular_coefficient * alignment.powf(self.rugosity_coefficient))
    }

    /// True if the tracer should spawn a reflected ray.
    pub fn is_reflective(&self) -> bool {
        self.reflection_coefficient > 0.0
    }

    /// True if the tracer should spawn a refracted ray.
    pub fn is_transmissive(&self) -> bool {
        self.transmission_coefficient > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overhead_light() -> Light {
        Light::new(Point::new(0.0, 10.0, 0.0), Color::WHITE)
    }

    #[test]
    fn test_ambient_is_not_tinted() {
        let material = Material {
            color: Color::new(1.0, 0.0, 0.0),
            ambient_coefficient: 0.5,
            ..Default::default()
        };
        assert_eq!(material.ambient_component(Color::WHITE), Color::gray(0.5));
    }

    #[test]
    fn test_diffuse_follows_cosine() {
        let material = Material {
            diffusion_coefficient: 1.0,
            ..Default::default()
        };
        let light = overhead_light();

        let facing = material.diffuse_component(&light, Point::ORIGIN, Vector::Y);
        assert_eq!(facing, Color::WHITE);

        let grazing = material.diffuse_component(&light, Point::ORIGIN, Vector::X);
        assert!(grazing.is_black());

        let away = material.diffuse_component(&light, Point::ORIGIN, -Vector::Y);
        assert!(away.is_black());
    }

    #[test]
    fn test_specular_peaks_on_mirror_direction() {
        let material = Material {
            specular_coefficient: 1.0,
            rugosity_coefficient: 50.0,
            ..Default::default()
        };
        let light = overhead_light();

        // Spectator straight up: reflection of the light direction hits it exactly.
        let on_axis = material.specular_component(&light, Point::ORIGIN, Vector::Y, Point::new(0.0, 5.0, 0.0));
        assert!((on_axis.r() - 1.0).abs() < 1e-9);

        let off_axis =
            material.specular_component(&light, Point::ORIGIN, Vector::Y, Point::new(5.0, 1.0, 0.0));
        assert!(off_axis.r() < 0.01);
    }
}
