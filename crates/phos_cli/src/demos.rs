//! Built-in demo scenes.

use std::sync::Arc;

use anyhow::Result;
use clap::ValueEnum;
use phos_renderer::{
    BezierSurface, Camera, Color, Light, Material, Plane, Point, Scene, Sphere, Triangle, Vector,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DemoScene {
    /// Red sphere over a gray floor
    Spheres,
    /// Gold Bezier patch
    Bezier,
    /// Mirror spheres over a reflective floor
    Mirrors,
    /// Glass sphere in front of a striped wall
    Glass,
}

impl DemoScene {
    /// Build the scene for a `width` x `height` image.
    pub fn build(self, width: u32, height: u32) -> Result<Scene> {
        match self {
            DemoScene::Spheres => spheres(width, height),
            DemoScene::Bezier => bezier(width, height),
            DemoScene::Mirrors => mirrors(width, height),
            DemoScene::Glass => glass(width, height),
        }
    }
}

fn forward_camera(position: Point, look_at: Point, width: u32, height: u32) -> Result<Camera> {
    Ok(Camera::new(position, look_at, Vector::Y, 1.0, height, width)?)
}

fn spheres(width: u32, height: u32) -> Result<Scene> {
    let camera = forward_camera(Point::new(0.0, 0.5, -4.0), Point::new(0.0, 0.0, 1.0), width, height)?;
    let red = Material {
        specular_coefficient: 0.5,
        rugosity_coefficient: 30.0,
        ..Material::new(Color::from_hex("#d62828")?)
    };

    Ok(Scene::new(camera)
        .with_ambient_color(Color::gray(0.4))
        .with_background_color(Color::from_hex("#87a8c8")?)
        .with_object(Sphere::new(Point::new(0.0, 0.0, 1.0), 1.0, Arc::new(red))?)
        .with_object(Plane::new(
            Point::new(0.0, -1.0, 0.0),
            Vector::Y,
            Arc::new(Material::new(Color::gray(0.7))),
        )?)
        .with_light(Light::new(Point::new(-3.0, 5.0, -3.0), Color::WHITE)))
}

fn bezier(width: u32, height: u32) -> Result<Scene> {
    let camera = forward_camera(Point::ORIGIN, Point::new(0.0, 0.0, 1.0), width, height)?;
    let gold = Arc::new(Material {
        diffusion_coefficient: 0.7,
        specular_coefficient: 0.8,
        ambient_coefficient: 0.1,
        rugosity_coefficient: 25.0,
        ..Material::new(Color::from_hex("#ffd700")?)
    });

    let control_points = vec![
        vec![Point::new(-1.0, -1.0, 3.0), Point::new(-1.0, 0.0, 8.0), Point::new(-1.0, 1.0, 4.0)],
        vec![Point::new(0.0, -3.0, 3.0), Point::new(0.0, 4.0, 8.0), Point::new(0.0, 2.0, 4.0)],
        vec![Point::new(-3.0, -1.0, 3.0), Point::new(3.0, 0.0, 8.0), Point::new(1.0, 1.0, 4.0)],
    ];
    let mesh = BezierSurface::new(control_points, 15, 15)?.tessellate(gold);

    Ok(Scene::new(camera)
        .with_ambient_color(Color::gray(0.1))
        .with_background_color(Color::gray(0.5))
        .with_object(mesh)
        .with_light(Light::new(Point::new(0.0, 2.0, 0.0), Color::WHITE)))
}

fn mirrors(width: u32, height: u32) -> Result<Scene> {
    let camera = forward_camera(Point::new(0.0, 1.5, -6.0), Point::new(0.0, 0.0, 0.0), width, height)?;
    let chrome = Arc::new(Material {
        color: Color::gray(0.9),
        diffusion_coefficient: 0.2,
        specular_coefficient: 0.9,
        rugosity_coefficient: 80.0,
        reflection_coefficient: 0.8,
        ..Default::default()
    });
    let floor = Arc::new(Material {
        reflection_coefficient: 0.3,
        ..Material::new(Color::from_hex("#3a5a40")?)
    });
    let backdrop = Arc::new(Material::new(Color::from_hex("#f4a261")?));

    Ok(Scene::new(camera)
        .with_ambient_color(Color::gray(0.3))
        .with_background_color(Color::from_hex("#101820")?)
        .with_object(Sphere::new(Point::new(-1.2, 0.0, 0.0), 1.0, Arc::clone(&chrome))?)
        .with_object(Sphere::new(Point::new(1.2, 0.0, 0.5), 1.0, chrome)?)
        .with_object(Plane::new(Point::new(0.0, -1.0, 0.0), Vector::Y, floor)?)
        .with_object(Triangle::new(
            Point::new(-4.0, -1.0, 4.0),
            Point::new(0.0, 4.0, 4.0),
            Point::new(4.0, -1.0, 4.0),
            backdrop,
        )?)
        .with_light(Light::new(Point::new(-4.0, 6.0, -5.0), Color::WHITE))
        .with_light(Light::new(Point::new(5.0, 2.0, -3.0), Color::gray(0.4))))
}

fn glass(width: u32, height: u32) -> Result<Scene> {
    let camera = forward_camera(Point::new(0.0, 0.0, -5.0), Point::ORIGIN, width, height)?;
    let glass = Arc::new(Material {
        color: Color::gray(0.1),
        specular_coefficient: 0.9,
        rugosity_coefficient: 100.0,
        reflection_coefficient: 0.1,
        transmission_coefficient: 1.5,
        ..Default::default()
    });

    let mut scene = Scene::new(camera)
        .with_ambient_color(Color::gray(0.8))
        .with_background_color(Color::BLACK)
        .with_object(Sphere::new(Point::ORIGIN, 1.2, glass)?)
        .with_light(Light::new(Point::new(2.0, 4.0, -6.0), Color::WHITE));

    // Vertical stripes, each a pair of triangles on the z = 6 wall
    let stripes = ["#e63946", "#f1faee", "#457b9d", "#f1faee", "#e63946", "#f1faee"];
    for (k, hex) in stripes.iter().enumerate() {
        let x0 = k as f64 * 2.0 - 6.0;
        let x1 = x0 + 2.0;
        let material = Arc::new(Material {
            ambient_coefficient: 0.5,
            ..Material::new(Color::from_hex(hex)?)
        });
        scene = scene
            .with_object(Triangle::new(
                Point::new(x0, -6.0, 6.0),
                Point::new(x0, 6.0, 6.0),
                Point::new(x1, 6.0, 6.0),
                Arc::clone(&material),
            )?)
            .with_object(Triangle::new(
                Point::new(x0, -6.0, 6.0),
                Point::new(x1, 6.0, 6.0),
                Point::new(x1, -6.0, 6.0),
                material,
            )?);
    }

    Ok(scene)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_demo_builds() {
        for demo in DemoScene::value_variants() {
            let scene = demo.build(16, 12).unwrap();
            assert_eq!(scene.camera.horizontal_resolution(), 16);
            assert_eq!(scene.camera.vertical_resolution(), 12);
            assert!(!scene.objects().is_empty());
        }
    }

    #[test]
    fn test_center_pixels_hit_geometry() {
        for demo in DemoScene::value_variants() {
            let scene = demo.build(9, 9).unwrap();
            let ray = scene.camera.get_ray(4, 4);
            assert!(
                scene
                    .find_nearest_intersection(&ray, phos_renderer::Interval::FORWARD)
                    .is_some(),
                "{demo:?} center ray missed"
            );
        }
    }
}
