//! Screen geometry primitives.
//!
//! [`Rect`] is an immutable value type: every transform returns a new
//! rectangle, so a detection result's geometry is never mutated in place.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// A point in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Fractional crop of a rectangle: `(x0, y0, x1, y1)` in `[0, 1]`
/// relative to the rectangle's width and height.
///
/// The default crop keeps the whole rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CropRate(pub f64, pub f64, pub f64, pub f64);

impl Default for CropRate {
    fn default() -> Self {
        Self(0.0, 0.0, 1.0, 1.0)
    }
}

/// An axis-aligned rectangle in screen pixel coordinates.
///
/// `right` and `bottom` are inclusive of the last pixel column/row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    pub fn center(&self) -> Point {
        Point::new(
            self.left + self.width() / 2,
            self.top + self.height() / 2,
        )
    }

    /// Returns the fractional sub-rectangle selected by `rate`.
    pub fn crop(&self, rate: CropRate) -> Rect {
        let w = self.width() as f64;
        let h = self.height() as f64;
        Rect {
            left: self.left + (w * rate.0).round() as i32,
            top: self.top + (h * rate.1).round() as i32,
            right: self.left + (w * rate.2).round() as i32,
            bottom: self.top + (h * rate.3).round() as i32,
        }
    }

    /// Returns this rectangle shifted by `(dx, dy)` pixels.
    pub fn translate(&self, dx: i32, dy: i32) -> Rect {
        Rect {
            left: self.left + dx,
            top: self.top + dy,
            right: self.right + dx,
            bottom: self.bottom + dy,
        }
    }

    /// Samples a uniformly distributed point inside the rectangle.
    pub fn random_point<R: Rng + ?Sized>(&self, rng: &mut R) -> Point {
        Point::new(
            rng.gen_range(self.left..=self.right.max(self.left)),
            rng.gen_range(self.top..=self.bottom.max(self.top)),
        )
    }
}

#[cfg(test)]
#[path = "geometry_tests.rs"]
mod tests;
