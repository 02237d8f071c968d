//! Point lights.

use phos_math::Point;

use crate::Color;

/// A point light source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub position: Point,
    pub color: Color,
}

impl Light {
    pub fn new(position: Point, color: Color) -> Self {
        Self { position, color }
    }
}
