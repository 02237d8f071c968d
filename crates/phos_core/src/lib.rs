//! Phos Core - shading inputs and image output for the ray tracer.
//!
//! This crate provides:
//!
//! - **Color**: clamped linear RGB with 8-bit conversion
//! - **Material / Light**: Phong coefficients and point lights, with the
//!   ambient/diffuse/specular component functions
//! - **Image**: the rendered pixel grid, written out as PPM or PNG
//!
//! # Example
//!
//! ```ignore
//! use phos_core::{Color, Image};
//!
//! let mut image = Image::new(2, 2);
//! image.set_pixel(0, 0, Color::WHITE);
//! image.save("out.ppm")?;
//! ```

pub mod color;
pub mod image;
pub mod light;
pub mod material;

// Re-export commonly used types
pub use color::{Color, ColorError};
pub use crate::image::{Image, ImageError, ImageResult};
pub use light::Light;
pub use material::Material;
