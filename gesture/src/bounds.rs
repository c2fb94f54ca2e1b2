//! Scale and pan limits derived from the surface and image sizes.

#[cfg(test)]
#[path = "bounds_test.rs"]
mod bounds_test;

use serde::{Deserialize, Serialize};

use crate::transform::{Point, Size};

/// The two settled zoom levels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleBounds {
    /// Fits the whole image inside the surface.
    pub small_scale: f64,
    /// Zoomed-in scale; always overflows the surface on at least one axis.
    pub big_scale: f64,
}

impl ScaleBounds {
    /// Fit by the constraining dimension; zoom in by the other one times
    /// `over_scale_factor`.
    #[must_use]
    pub fn fit(surface: Size, image: Size, over_scale_factor: f64) -> Self {
        let width_ratio = surface.width / image.width;
        let height_ratio = surface.height / image.height;
        if image.aspect() > surface.aspect() {
            Self { small_scale: width_ratio, big_scale: height_ratio * over_scale_factor }
        } else {
            Self { small_scale: height_ratio, big_scale: width_ratio * over_scale_factor }
        }
    }

    /// Scale at `fraction` of the way from small to big.
    #[must_use]
    pub fn lerp(&self, fraction: f64) -> f64 {
        self.small_scale + (self.big_scale - self.small_scale) * fraction.clamp(0.0, 1.0)
    }
}

/// Symmetric pan limits at the big scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanBounds {
    pub max_offset_x: f64,
    pub max_offset_y: f64,
}

impl PanBounds {
    /// Half the overflow of the image at `big_scale` on each axis.
    ///
    /// An axis that does not overflow gets a zero limit rather than an
    /// inverted range.
    #[must_use]
    pub fn at_scale(surface: Size, image: Size, big_scale: f64) -> Self {
        Self {
            max_offset_x: ((image.width * big_scale - surface.width) / 2.0).max(0.0),
            max_offset_y: ((image.height * big_scale - surface.height) / 2.0).max(0.0),
        }
    }

    /// Clamp each axis independently into `[-max, +max]`.
    #[must_use]
    pub fn clamp(&self, offset: Point) -> Point {
        Point::new(
            offset.x.clamp(-self.max_offset_x, self.max_offset_x),
            offset.y.clamp(-self.max_offset_y, self.max_offset_y),
        )
    }

    #[must_use]
    pub fn contains(&self, offset: Point) -> bool {
        offset.x.abs() <= self.max_offset_x && offset.y.abs() <= self.max_offset_y
    }
}
