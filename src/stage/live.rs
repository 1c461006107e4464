use crate::foundation::core::{Rect, Size, xywh};
use crate::foundation::error::FramemorphResult;
use crate::layout::scene::Scene;
use crate::layout::spec::{ConstraintSpec, FixedElement};
use crate::stage::applier::GeometryApplier;

/// On-screen scene: the two fixed elements laid out for display plus the floating element's
/// current frame.
#[derive(Clone, Debug)]
pub struct Stage {
    spec: ConstraintSpec,
    bounds: Size,
    red: Rect,
    blue: Rect,
    floating: Option<Rect>,
}

/// Serializable view of a [`Stage`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StageSnapshot {
    /// Container size.
    pub bounds: Size,
    /// Red element frame.
    #[serde(with = "xywh")]
    pub red: Rect,
    /// Blue element frame.
    #[serde(with = "xywh")]
    pub blue: Rect,
    /// Floating element frame, absent until the first frame is applied.
    #[serde(default, with = "xywh_opt")]
    pub floating: Option<Rect>,
}

impl Stage {
    /// Create an empty stage; nothing is laid out until [`Stage::layout`] runs.
    pub fn new(spec: ConstraintSpec) -> FramemorphResult<Self> {
        spec.validate()?;
        Ok(Self {
            spec,
            bounds: Size::ZERO,
            red: Rect::ZERO,
            blue: Rect::ZERO,
            floating: None,
        })
    }

    /// Lay out the fixed elements for `bounds`.
    pub fn layout(&mut self, bounds: Size) -> FramemorphResult<()> {
        let mut scene = Scene::build(&self.spec, bounds)?;
        scene.resolve()?;
        self.red = scene.fixed_frame(FixedElement::Red)?;
        self.blue = scene.fixed_frame(FixedElement::Blue)?;
        self.bounds = bounds;
        Ok(())
    }

    /// Frame of a fixed element.
    pub fn fixed_frame(&self, role: FixedElement) -> Rect {
        match role {
            FixedElement::Red => self.red,
            FixedElement::Blue => self.blue,
        }
    }

    /// Floating element frame, if one was applied.
    pub fn floating_frame(&self) -> Option<Rect> {
        self.floating
    }

    /// Current container size.
    pub fn bounds(&self) -> Size {
        self.bounds
    }

    /// Copy the current geometry.
    pub fn snapshot(&self) -> StageSnapshot {
        StageSnapshot {
            bounds: self.bounds,
            red: self.red,
            blue: self.blue,
            floating: self.floating,
        }
    }
}

impl GeometryApplier for Stage {
    fn apply(&mut self, frame: Rect) {
        self.floating = Some(frame);
    }

    fn relayout(&mut self, bounds: Size) -> FramemorphResult<()> {
        self.layout(bounds)
    }
}

mod xywh_opt {
    use crate::foundation::core::{Rect, xywh};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Serialize, Deserialize)]
    struct Wrap(#[serde(with = "xywh")] Rect);

    pub(super) fn serialize<S: Serializer>(rect: &Option<Rect>, s: S) -> Result<S::Ok, S::Error> {
        (*rect).map(Wrap).serialize(s)
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Rect>, D::Error> {
        Ok(Option::<Wrap>::deserialize(d)?.map(|w| w.0))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/stage/live.rs"]
mod tests;
