// File: crates/chart-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math.

use std::f64::consts::{FRAC_PI_2, TAU};

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point at `radius` and `angle` (radians, canvas convention: y grows downward) around `self`.
    #[inline]
    pub fn offset_polar(&self, radius: f64, angle: f64) -> Self {
        Self::new(self.x + radius * angle.cos(), self.y + radius * angle.sin())
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Axis-aligned rectangle in pixels.
/// Contract: `width` and `height` are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Build from origin and size; negative extents are flipped so the contract holds.
    pub fn from_xywh(x: f64, y: f64, width: f64, height: f64) -> Self {
        let (x, width) = if width < 0.0 { (x + width, -width) } else { (x, width) };
        let (y, height) = if height < 0.0 { (y + height, -height) } else { (y, height) };
        Self { x, y, width, height }
    }

    pub fn right(&self) -> f64 { self.x + self.width }
    pub fn bottom(&self) -> f64 { self.y + self.height }
    pub fn is_empty(&self) -> bool { self.width <= 0.0 || self.height <= 0.0 }
}

/// Straight line between two points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

impl Segment {
    pub const fn new(from: Point, to: Point) -> Self {
        Self { from, to }
    }
}

/// Canvas angle of 12 o'clock.
pub const TOP_ANGLE: f64 = -FRAC_PI_2;

/// Full turn in radians.
pub const FULL_TURN: f64 = TAU;

/// `value / divisor`, or 0 when the quotient would not be a finite number.
#[inline]
pub fn safe_ratio(value: f64, divisor: f64) -> f64 {
    let r = value / divisor;
    if divisor != 0.0 && r.is_finite() { r } else { 0.0 }
}
