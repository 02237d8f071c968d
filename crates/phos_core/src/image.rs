//! Rendered image and its file writers.
//!
//! An [`Image`] is a fixed-size grid of [`Color`] indexed by row then
//! column. It can be written as plain-text PPM (P3), matching the format
//! the renderer has always produced, or as PNG through the `image` crate.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::debug;
use thiserror::Error;

use crate::Color;

/// Errors that can occur while assembling or writing an image.
#[derive(Error, Debug)]
pub enum ImageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PNG encoding error: {0}")]
    Encode(#[from] ::image::ImageError),

    #[error("Pixel grid is {got} pixels, expected {width}x{height}")]
    DimensionMismatch { width: u32, height: u32, got: usize },

    #[error("Unsupported image extension: {0:?}")]
    UnsupportedFormat(String),
}

pub type ImageResult<T> = Result<T, ImageError>;

/// A 2D grid of colors, stored row-major.
#[derive(Clone, Debug, PartialEq)]
pub struct Image {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Image {
    /// Create a new image filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::BLACK; width as usize * height as usize],
        }
    }

    /// Build an image from complete rows (`rows[y][x]`).
    pub fn from_rows(width: u32, height: u32, rows: Vec<Vec<Color>>) -> ImageResult<Self> {
        let expected = width as usize * height as usize;
        let mismatch = |got| ImageError::DimensionMismatch { width, height, got };

        if rows.len() != height as usize || rows.iter().any(|row| row.len() != width as usize) {
            return Err(mismatch(rows.iter().map(Vec::len).sum()));
        }

        let pixels: Vec<Color> = rows.into_iter().flatten().collect();
        debug_assert_eq!(pixels.len(), expected);
        Ok(Self { width, height, pixels })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the pixel at column `x`, row `y`.
    pub fn get_pixel(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at column `x`, row `y`.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        let i = self.index(x, y);
        self.pixels[i] = color;
    }

    /// One row of pixels, left to right.
    pub fn row(&self, y: u32) -> &[Color] {
        let start = y as usize * self.width as usize;
        &self.pixels[start..start + self.width as usize]
    }

    /// Iterate rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Color]> {
        self.pixels.chunks(self.width.max(1) as usize)
    }

    fn index(&self, x: u32, y: u32) -> usize {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of bounds");
        y as usize * self.width as usize + x as usize
    }

    /// Packed 8-bit RGB bytes, row-major.
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for color in &self.pixels {
            let (r, g, b) = color.as_rgb();
            bytes.extend_from_slice(&[r, g, b]);
        }
        bytes
    }

    /// Write plain-text PPM: a `P3 <width> <height> 255` header, then one
    /// `r g b` line per pixel in row-major order.
    pub fn write_ppm<W: Write>(&self, writer: &mut W) -> ImageResult<()> {
        writeln!(writer, "P3 {} {} 255", self.width, self.height)?;
        for color in &self.pixels {
            let (r, g, b) = color.as_rgb();
            writeln!(writer, "{} {} {}", r, g, b)?;
        }
        Ok(())
    }

    /// Save as PPM.
    pub fn save_ppm(&self, path: impl AsRef<Path>) -> ImageResult<()> {
        let path = path.as_ref();
        let mut writer = BufWriter::new(File::create(path)?);
        self.write_ppm(&mut writer)?;
        writer.flush()?;
        debug!("Wrote {}x{} PPM to {}", self.width, self.height, path.display());
        Ok(())
    }

    /// Save as PNG.
    pub fn save_png(&self, path: impl AsRef<Path>) -> ImageResult<()> {
        let path = path.as_ref();
        ::image::save_buffer_with_format(
            path,
            &self.to_rgb8(),
            self.width,
            self.height,
            ::image::ColorType::Rgb8,
            ::image::ImageFormat::Png,
        )?;
        debug!("Wrote {}x{} PNG to {}", self.width, self.height, path.display());
        Ok(())
    }

    /// Save, picking the format from the file extension (`.ppm` or `.png`).
    pub fn save(&self, path: impl AsRef<Path>) -> ImageResult<()> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "ppm" => self.save_ppm(path),
            "png" => self.save_png(path),
            other => Err(ImageError::UnsupportedFormat(other.to_string())),
        }
    }
}
