//! Host callbacks passed explicitly into the controller instead of living as ambient framework
//! state.

use crate::foundation::core::Size;
use crate::foundation::error::FramemorphResult;
use crate::interaction::controller::InterpolationController;
use crate::layout::resolver::EndpointSource;
use crate::stage::applier::GeometryApplier;

/// Host transition (rotation, resize) that can run work alongside its own animation.
pub trait TransitionCoordinator {
    /// Run `animation` inside the host's transition animation.
    fn animate_alongside(
        &mut self,
        animation: &mut dyn FnMut() -> FramemorphResult<()>,
    ) -> FramemorphResult<()>;

    /// Called once the transition has finished.
    fn complete(&mut self) {}
}

/// Coordinator that runs the animation body synchronously, without animating.
#[derive(Clone, Copy, Debug, Default)]
pub struct ImmediateTransition;

impl TransitionCoordinator for ImmediateTransition {
    fn animate_alongside(
        &mut self,
        animation: &mut dyn FnMut() -> FramemorphResult<()>,
    ) -> FramemorphResult<()> {
        animation()
    }
}

impl<A, R> InterpolationController<A, R>
where
    A: GeometryApplier,
    R: EndpointSource,
{
    /// Handle a completed host layout pass.
    ///
    /// Passes resolve endpoints and render only until a pair exists; afterwards bounds changes
    /// arrive through [`InterpolationController::transition_to_size`]. Returns `true` when the
    /// initial resolution ran.
    pub fn on_layout_pass(&mut self, bounds: Size) -> FramemorphResult<bool> {
        if self.frames().is_some() {
            return Ok(false);
        }
        self.on_bounds_changed(bounds)?;
        Ok(true)
    }

    /// Handle a host transition to `size`: endpoints are re-resolved and applied inside the
    /// coordinator's animation, then the coordinator is completed.
    pub fn transition_to_size<C>(&mut self, size: Size, coordinator: &mut C) -> FramemorphResult<()>
    where
        C: TransitionCoordinator + ?Sized,
    {
        coordinator.animate_alongside(&mut || self.on_bounds_changed(size))?;
        coordinator.complete();
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/interaction/hooks.rs"]
mod tests;
