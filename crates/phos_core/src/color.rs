//! Linear RGB color.

use std::fmt;
use std::ops::{Add, AddAssign, Mul};

use thiserror::Error;

/// Errors from parsing colors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ColorError {
    #[error("Invalid hex color {0:?}, expected #rrggbb")]
    InvalidHex(String),
}

/// An RGB triple with every channel kept in [0, 1].
///
/// Construction, addition and scaling all clamp, so a color can always be
/// converted to 8-bit channels without overflow.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    r: f64,
    g: f64,
    b: f64,
}

impl Color {
    pub const BLACK: Color = Color { r: 0.0, g: 0.0, b: 0.0 };
    pub const WHITE: Color = Color { r: 1.0, g: 1.0, b: 1.0 };

    /// Create a color; channels are clamped to [0, 1].
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self {
            r: clamp_01(r),
            g: clamp_01(g),
            b: clamp_01(b),
        }
    }

    /// Same value in every channel.
    pub fn gray(value: f64) -> Self {
        Self::new(value, value, value)
    }

    /// From 8-bit channels.
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0)
    }

    /// Parse `#rrggbb` (the leading `#` is optional).
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        let invalid = || ColorError::InvalidHex(hex.to_string());

        if digits.len() != 6 || !digits.is_ascii() {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());

        Ok(Self::from_rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    #[inline]
    pub fn r(&self) -> f64 {
        self.r
    }

    #[inline]
    pub fn g(&self) -> f64 {
        self.g
    }

    #[inline]
    pub fn b(&self) -> f64 {
        self.b
    }

    /// Convert to 8-bit channels (truncating).
    pub fn as_rgb(&self) -> (u8, u8, u8) {
        (
            (self.r * 255.0) as u8,
            (self.g * 255.0) as u8,
            (self.b * 255.0) as u8,
        )
    }

    /// True if every channel is zero.
    pub fn is_black(&self) -> bool {
        *self == Color::BLACK
    }
}

/// Clamp a value to [0, 1] range.
#[inline]
fn clamp_01(x: f64) -> f64 {
    x.clamp(0.0, 1.0)
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Clamped channel-wise sum.
impl Add for Color {
    type Output = Color;

    fn add(self, rhs: Color) -> Color {
        Color::new(self.r + rhs.r, self.g + rhs.g, self.b + rhs.b)
    }
}

impl AddAssign for Color {
    fn add_assign(&mut self, rhs: Color) {
        *self = *self + rhs;
    }
}

/// Channel-wise product (tinting, or combining with a light color).
impl Mul for Color {
    type Output = Color;

    fn mul(self, rhs: Color) -> Color {
        Color::new(self.r * rhs.r, self.g * rhs.g, self.b * rhs.b)
    }
}

impl Mul<f64> for Color {
    type Output = Color;

    fn mul(self, rhs: f64) -> Color {
        Color::new(self.r * rhs, self.g * rhs, self.b * rhs)
    }
}
