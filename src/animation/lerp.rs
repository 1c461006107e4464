//! Interpolation primitives.
//!
//! All interpolation uses the weighted form `a * (1 - t) + b * t`, which returns `a` exactly at
//! `t = 0` and `b` exactly at `t = 1`. Progress is not clamped here; callers own the domain.

use crate::foundation::core::{Point, Rect, Size};

/// Interpolation contract for geometry value types.
pub trait Lerp: Sized {
    /// Interpolate from `a` to `b` with factor `t`.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        lerp(*a, *b, t)
    }
}

impl Lerp for Point {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Point::new(lerp(a.x, b.x, t), lerp(a.y, b.y, t))
    }
}

impl Lerp for Size {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Size::new(lerp(a.width, b.width, t), lerp(a.height, b.height, t))
    }
}

impl Lerp for Rect {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        lerp_rect(*a, *b, t)
    }
}

/// Interpolate two scalars: `start * (1 - progress) + end * progress`.
pub fn lerp(start: f64, end: f64, progress: f64) -> f64 {
    start * (1.0 - progress) + end * progress
}

/// Interpolate x, y, width and height of two rectangles independently.
pub fn lerp_rect(start: Rect, end: Rect, progress: f64) -> Rect {
    let origin = <Point as Lerp>::lerp(&start.origin(), &end.origin(), progress);
    let size = <Size as Lerp>::lerp(&start.size(), &end.size(), progress);
    Rect::from_origin_size(origin, size)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/lerp.rs"]
mod tests;
