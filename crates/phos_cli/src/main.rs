//! Phos command line renderer.
//!
//! Renders one of the built-in demo scenes to a PPM or PNG file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use phos_renderer::{render, Angle, Matrix, RenderMode, Scene, Vector};

mod demos;
mod settings;

use demos::DemoScene;
use settings::RenderSettings;

#[derive(Parser, Debug)]
#[command(name = "phos")]
#[command(version, about = "Phong ray tracer", long_about = None)]
struct Cli {
    /// Demo scene to render
    #[arg(value_enum, default_value_t = DemoScene::Spheres)]
    scene: DemoScene,

    /// Output file (format from extension: .ppm or .png)
    #[arg(short, long, default_value = "render.png")]
    output: PathBuf,

    /// JSON render settings file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Image width in pixels
    #[arg(short = 'W', long)]
    width: Option<u32>,

    /// Image height in pixels
    #[arg(short = 'H', long)]
    height: Option<u32>,

    /// Render on the calling thread only
    #[arg(long, conflicts_with = "threads")]
    sequential: bool,

    /// Size of a dedicated render thread pool
    #[arg(short, long)]
    threads: Option<usize>,

    /// Move the camera along its own right, up and forward axes
    #[arg(
        long = "move",
        num_args = 3,
        value_names = ["RIGHT", "UP", "FORWARD"],
        allow_negative_numbers = true
    )]
    shift: Option<Vec<f64>>,

    /// Orbit the camera around its look-at point, in degrees about the Y axis
    #[arg(long, allow_negative_numbers = true)]
    orbit: Option<f64>,
}

impl Cli {
    fn settings(&self) -> Result<RenderSettings> {
        let mut settings = match &self.config {
            Some(path) => RenderSettings::load(path)?,
            None => RenderSettings::default(),
        };

        if let Some(width) = self.width {
            settings.width = width;
        }
        if let Some(height) = self.height {
            settings.height = height;
        }
        if self.sequential {
            settings.render.mode = RenderMode::Sequential;
        }
        if let Some(threads) = self.threads {
            settings.render.mode = RenderMode::Parallel;
            settings.render.threads = Some(threads);
        }

        Ok(settings)
    }

    /// Apply the camera moves requested on the command line.
    fn place_camera(&self, scene: Scene) -> Result<Scene> {
        let mut camera = scene.camera.clone();

        if let Some(degrees) = self.orbit {
            let orbit = Matrix::rotation(camera.look_at(), Vector::Y, Angle::Degrees(degrees))?;
            camera = camera.transform(&orbit).context("Orbit left a degenerate camera")?;
        }
        if let Some([right, up, forward]) = self.shift.as_deref() {
            camera = camera.move_relative(*right, *up, *forward);
        }

        Ok(scene.with_camera(camera))
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let settings = cli.settings()?;

    log::info!(
        "Building {:?} scene at {}x{}",
        cli.scene,
        settings.width,
        settings.height
    );
    let scene = cli
        .scene
        .build(settings.width, settings.height)
        .with_context(|| format!("Failed to build {:?} scene", cli.scene))?;
    let scene = cli.place_camera(scene)?;

    let image = render(&scene, &settings.render)?;
    image
        .save(&cli.output)
        .with_context(|| format!("Failed to write {}", cli.output.display()))?;

    log::info!("Saved to {}", cli.output.display());
    Ok(())
}
