use crate::foundation::core::{FramePair, Rect, Size};
use crate::foundation::error::FramemorphResult;
use crate::layout::scene::{Attachment, Scene};
use crate::layout::spec::{ConstraintSpec, FixedElement};

/// Source of endpoint frames for a given container size.
pub trait EndpointSource {
    /// Resolve the floating element's start and end frames for `bounds`.
    fn resolve(&self, bounds: Size) -> FramemorphResult<FramePair>;
}

/// Resolves endpoint frames by laying out an offscreen copy of the screen twice.
///
/// Each call builds a detached scene from the shared [`ConstraintSpec`], attaches a single
/// floating node to the red element, solves, then moves that same node to the blue element and
/// solves again. Nothing outlives the call.
///
/// The solver works in `f32`: bounds are narrowed before solving, so frames for fractional bounds
/// are `f32`-quantized (exact for `f32`-representable inputs).
#[derive(Clone, Debug, Default)]
pub struct EndpointResolver {
    spec: ConstraintSpec,
}

impl EndpointResolver {
    /// Create a resolver, rejecting unsatisfiable constraints up front.
    pub fn new(spec: ConstraintSpec) -> FramemorphResult<Self> {
        spec.validate()?;
        Ok(Self { spec })
    }

    /// Constraint description shared with the live scene.
    pub fn spec(&self) -> &ConstraintSpec {
        &self.spec
    }
}

impl EndpointSource for EndpointResolver {
    #[tracing::instrument(skip(self))]
    fn resolve(&self, bounds: Size) -> FramemorphResult<FramePair> {
        let mut scene = Scene::build(&self.spec, bounds)?;
        let floating = scene.new_floating()?;
        let margins = self.spec.floating_margins;

        let mut pass = |parent: FixedElement| -> FramemorphResult<Rect> {
            scene.attach(floating, Attachment::margins_of(parent, margins))?;
            scene.resolve()?;
            scene.frame_in_root(floating)
        };
        let start = pass(FixedElement::Red)?;
        let end = pass(FixedElement::Blue)?;

        tracing::debug!(?start, ?end, "resolved endpoint frames");
        Ok(FramePair { start, end })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/resolver.rs"]
mod tests;
