//! Simple ray tracer example.
//!
//! Renders three spheres on a mirror floor and saves to PPM format.

use std::error::Error;
use std::sync::Arc;

use phos_renderer::{
    render, Camera, Color, Light, Material, Plane, Point, RenderConfig, Scene, Sphere, Vector,
};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    println!("Phos Ray Tracer - Simple Example");
    println!("================================");

    let start = std::time::Instant::now();
    let scene = build_scene()?;
    println!("Scene built in {:?}", start.elapsed());

    println!(
        "Rendering {}x{}...",
        scene.camera.horizontal_resolution(),
        scene.camera.vertical_resolution()
    );

    let start = std::time::Instant::now();
    let image = render(&scene, &RenderConfig::default())?;
    println!("Rendered in {:?}", start.elapsed());

    let filename = "output.ppm";
    image.save_ppm(filename)?;
    println!("Saved to {}", filename);

    Ok(())
}

fn build_scene() -> Result<Scene, Box<dyn Error>> {
    let camera = Camera::new(
        Point::new(0.0, 1.0, -6.0),
        Point::new(0.0, 0.5, 0.0),
        Vector::Y,
        0.8,
        450,
        800,
    )?;

    let floor = Material {
        color: Color::gray(0.8),
        reflection_coefficient: 0.3,
        ..Default::default()
    };
    let glass = Material {
        color: Color::gray(0.1),
        specular_coefficient: 0.8,
        rugosity_coefficient: 60.0,
        transmission_coefficient: 1.5,
        ..Default::default()
    };

    let scene = Scene::new(camera)
        .with_ambient_color(Color::gray(0.6))
        .with_background_color(Color::from_hex("#1a2233")?)
        .with_object(Plane::new(Point::new(0.0, -1.0, 0.0), Vector::Y, Arc::new(floor))?)
        .with_object(Sphere::new(
            Point::new(-2.2, 0.0, 1.0),
            1.0,
            Arc::new(Material::new(Color::new(0.9, 0.2, 0.2))),
        )?)
        .with_object(Sphere::new(Point::new(0.0, 0.0, 0.0), 1.0, Arc::new(glass))?)
        .with_object(Sphere::new(
            Point::new(2.2, 0.0, 1.0),
            1.0,
            Arc::new(Material::new(Color::new(0.2, 0.4, 0.9))),
        )?)
        .with_light(Light::new(Point::new(-4.0, 6.0, -4.0), Color::WHITE))
        .with_light(Light::new(Point::new(5.0, 3.0, -2.0), Color::gray(0.5)));

    Ok(scene)
}
