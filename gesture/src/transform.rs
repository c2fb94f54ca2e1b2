#[cfg(test)]
#[path = "transform_test.rs"]
mod transform_test;

use serde::{Deserialize, Serialize};

/// A point or vector in surface or image space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn add(self, other: Self) -> Self {
        Self { x: self.x + other.x, y: self.y + other.y }
    }

    #[must_use]
    pub fn sub(self, other: Self) -> Self {
        Self { x: self.x - other.x, y: self.y - other.y }
    }

    #[must_use]
    pub fn scale(self, factor: f64) -> Self {
        Self { x: self.x * factor, y: self.y * factor }
    }

    /// Euclidean length when read as a vector.
    #[must_use]
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }
}

/// Width and height of the drawing surface or the image.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// Width over height.
    #[must_use]
    pub fn aspect(&self) -> f64 {
        self.width / self.height
    }
}

/// Affine image-to-surface transform handed to the renderer.
///
/// The image sits at `origin` (centered at natural size), is scaled by
/// `scale` about `pivot` (the surface center), then shifted by `translate`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub translate: Point,
    pub scale: f64,
    pub pivot: Point,
    pub origin: Point,
}

impl Transform {
    /// Map an image-space point to surface coordinates.
    #[must_use]
    pub fn image_to_surface(&self, image: Point) -> Point {
        self.origin
            .add(image)
            .sub(self.pivot)
            .scale(self.scale)
            .add(self.pivot)
            .add(self.translate)
    }

    /// Map a surface point back into image space.
    #[must_use]
    pub fn surface_to_image(&self, surface: Point) -> Point {
        surface
            .sub(self.translate)
            .sub(self.pivot)
            .scale(1.0 / self.scale)
            .add(self.pivot)
            .sub(self.origin)
    }
}
