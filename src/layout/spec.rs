//! Declarative constraint description shared by the live scene and the offscreen passes.
//!
//! Each fixed element is attached to the container by an optional size per axis plus optional
//! edge pins. An axis is resolvable when it has exactly two determinants: a size and one pin, or
//! two opposing pins.

use crate::foundation::error::{FramemorphError, FramemorphResult};

/// Inset used by the default fixed-element pins.
pub const DEFAULT_EDGE_INSET: f64 = 30.0;
/// Layout margin the floating element keeps from its parent's edges.
pub const DEFAULT_LAYOUT_MARGIN: f64 = 8.0;

/// Size rule for one axis of an element.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    /// Fixed length in container units.
    Points(f64),
    /// Fraction of the container's length on the same axis (`0.5` is half).
    FractionOfContainer(f64),
}

impl Dimension {
    fn validate(self, what: &str) -> FramemorphResult<()> {
        let v = match self {
            Self::Points(v) | Self::FractionOfContainer(v) => v,
        };
        if !v.is_finite() || v < 0.0 {
            return Err(FramemorphError::constraint(format!(
                "{what} must be finite and >= 0 (got {v})"
            )));
        }
        Ok(())
    }
}

/// Optional insets pinning an element's edges to the container's edges.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EdgePins {
    /// Distance from the container's top edge.
    pub top: Option<f64>,
    /// Distance from the container's left edge.
    pub left: Option<f64>,
    /// Distance from the container's bottom edge.
    pub bottom: Option<f64>,
    /// Distance from the container's right edge.
    pub right: Option<f64>,
}

/// Four-sided margins.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Insets {
    /// Top margin.
    pub top: f64,
    /// Left margin.
    pub left: f64,
    /// Bottom margin.
    pub bottom: f64,
    /// Right margin.
    pub right: f64,
}

impl Insets {
    /// Same margin on every side.
    pub const fn uniform(v: f64) -> Self {
        Self {
            top: v,
            left: v,
            bottom: v,
            right: v,
        }
    }

    fn validate(&self) -> FramemorphResult<()> {
        for v in [self.top, self.left, self.bottom, self.right] {
            if !v.is_finite() {
                return Err(FramemorphError::constraint(
                    "floating margins must be finite",
                ));
            }
        }
        Ok(())
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::uniform(DEFAULT_LAYOUT_MARGIN)
    }
}

/// Attachment rules of one fixed element to the container.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ElementConstraints {
    /// Horizontal size rule.
    #[serde(default)]
    pub width: Option<Dimension>,
    /// Vertical size rule.
    #[serde(default)]
    pub height: Option<Dimension>,
    /// Edge pins.
    #[serde(default)]
    pub pins: EdgePins,
}

impl ElementConstraints {
    /// Start from explicit width and height rules with no pins.
    pub fn sized(width: Dimension, height: Dimension) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
            pins: EdgePins::default(),
        }
    }

    /// Pin the top edge.
    pub fn pin_top(mut self, inset: f64) -> Self {
        self.pins.top = Some(inset);
        self
    }

    /// Pin the left edge.
    pub fn pin_left(mut self, inset: f64) -> Self {
        self.pins.left = Some(inset);
        self
    }

    /// Pin the bottom edge.
    pub fn pin_bottom(mut self, inset: f64) -> Self {
        self.pins.bottom = Some(inset);
        self
    }

    /// Pin the right edge.
    pub fn pin_right(mut self, inset: f64) -> Self {
        self.pins.right = Some(inset);
        self
    }

    /// Check that both axes are exactly determined and every value is usable.
    pub fn validate(&self, name: &str) -> FramemorphResult<()> {
        if let Some(w) = self.width {
            w.validate(&format!("{name}.width"))?;
        }
        if let Some(h) = self.height {
            h.validate(&format!("{name}.height"))?;
        }
        let p = &self.pins;
        for (edge, v) in [
            ("top", p.top),
            ("left", p.left),
            ("bottom", p.bottom),
            ("right", p.right),
        ] {
            if v.is_some_and(|v| !v.is_finite()) {
                return Err(FramemorphError::constraint(format!(
                    "{name}.pins.{edge} must be finite"
                )));
            }
        }
        check_axis(name, "horizontal", self.width, p.left, p.right)?;
        check_axis(name, "vertical", self.height, p.top, p.bottom)
    }
}

fn check_axis(
    name: &str,
    axis: &str,
    size: Option<Dimension>,
    lead: Option<f64>,
    trail: Option<f64>,
) -> FramemorphResult<()> {
    let determinants =
        usize::from(size.is_some()) + usize::from(lead.is_some()) + usize::from(trail.is_some());
    match determinants {
        2 => Ok(()),
        n if n > 2 => Err(FramemorphError::constraint(format!(
            "{name} is over-constrained on the {axis} axis (size and both edges pinned)"
        ))),
        _ => Err(FramemorphError::constraint(format!(
            "{name} is under-constrained on the {axis} axis (needs size + one edge, or two edges)"
        ))),
    }
}

/// Role of a fixed element in the scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FixedElement {
    /// Hosts the floating element at progress `0`.
    Red,
    /// Hosts the floating element at progress `1`.
    Blue,
}

/// Complete constraint description of the screen.
///
/// The same value drives the on-screen layout and both offscreen resolution passes; the floating
/// element's resolved frames only match the live scene when they share it.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ConstraintSpec {
    /// Start-anchor element.
    pub red: ElementConstraints,
    /// End-anchor element.
    pub blue: ElementConstraints,
    /// Margins pinning the floating element inside whichever fixed element hosts it.
    pub floating_margins: Insets,
}

impl Default for ConstraintSpec {
    fn default() -> Self {
        Self {
            red: ElementConstraints::sized(
                Dimension::FractionOfContainer(0.5),
                Dimension::Points(60.0),
            )
            .pin_top(DEFAULT_EDGE_INSET)
            .pin_left(DEFAULT_EDGE_INSET),
            blue: ElementConstraints::sized(Dimension::Points(40.0), Dimension::Points(120.0))
                .pin_bottom(DEFAULT_EDGE_INSET)
                .pin_right(DEFAULT_EDGE_INSET),
            floating_margins: Insets::default(),
        }
    }
}

impl ConstraintSpec {
    /// Constraints of one fixed element.
    pub fn element(&self, role: FixedElement) -> &ElementConstraints {
        match role {
            FixedElement::Red => &self.red,
            FixedElement::Blue => &self.blue,
        }
    }

    /// Validate every element.
    pub fn validate(&self) -> FramemorphResult<()> {
        self.red.validate("red")?;
        self.blue.validate("blue")?;
        self.floating_margins.validate()
    }

    /// Parse and validate a JSON description. Missing fields take the default screen's values.
    pub fn from_json_str(s: &str) -> FramemorphResult<Self> {
        let spec: Self = serde_json::from_str(s)?;
        spec.validate()?;
        Ok(spec)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/spec.rs"]
mod tests;
