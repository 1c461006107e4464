use crate::foundation::error::{FramemorphError, FramemorphResult};

pub use kurbo::{Point, Rect, Size, Vec2};

/// Interpolation position between the two endpoint frames.
///
/// Always inside `[0, 1]`: `0.0` is fully at the start frame and `1.0` fully at the end frame.
/// Construction clamps; NaN collapses to `0.0`.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Progress(f64);

impl Progress {
    /// Fully at the start frame.
    pub const START: Self = Self(0.0);
    /// Fully at the end frame.
    pub const END: Self = Self(1.0);

    /// Clamp `value` into `[0, 1]`.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::START;
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// Raw scalar in `[0, 1]`.
    pub fn get(self) -> f64 {
        self.0
    }
}

impl From<f64> for Progress {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Progress> for f64 {
    fn from(value: Progress) -> Self {
        value.0
    }
}

/// Start and end geometry of the floating element, in container coordinates.
///
/// Only valid for the container bounds it was resolved against.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FramePair {
    /// Frame while attached to the first fixed element (progress `0`).
    #[serde(with = "xywh")]
    pub start: Rect,
    /// Frame while attached to the second fixed element (progress `1`).
    #[serde(with = "xywh")]
    pub end: Rect,
}

/// Reject container bounds the solver cannot be given.
///
/// Zero-area bounds are accepted: they resolve to degenerate frames.
pub(crate) fn validate_bounds(bounds: Size) -> FramemorphResult<()> {
    if !bounds.width.is_finite() || !bounds.height.is_finite() {
        return Err(FramemorphError::validation("container bounds must be finite"));
    }
    if bounds.width < 0.0 || bounds.height < 0.0 {
        return Err(FramemorphError::validation(
            "container bounds must be non-negative",
        ));
    }
    Ok(())
}

/// Serde adapter writing a [`Rect`] as `{x, y, width, height}`.
pub(crate) mod xywh {
    use kurbo::{Point, Rect, Size};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Serialize, Deserialize)]
    struct Xywh {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    }

    pub(crate) fn serialize<S: Serializer>(rect: &Rect, s: S) -> Result<S::Ok, S::Error> {
        Xywh {
            x: rect.x0,
            y: rect.y0,
            width: rect.width(),
            height: rect.height(),
        }
        .serialize(s)
    }

    pub(crate) fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Rect, D::Error> {
        let r = Xywh::deserialize(d)?;
        Ok(Rect::from_origin_size(
            Point::new(r.x, r.y),
            Size::new(r.width, r.height),
        ))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
