use crate::animation::lerp::lerp_rect;
use crate::foundation::core::{FramePair, Progress, Rect, Size, validate_bounds};
use crate::foundation::error::{FramemorphError, FramemorphResult};
use crate::layout::resolver::{EndpointResolver, EndpointSource};
use crate::stage::applier::GeometryApplier;

/// Share of the reference width a drag must travel to sweep progress from `0` to `1`.
pub const DEFAULT_DRAG_THROW_FRACTION: f64 = 0.7;

/// Options controlling [`InterpolationController`] behavior.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ControllerOpts {
    /// Full-throw drag distance as a fraction of the reference width.
    pub drag_throw_fraction: f64,
    /// Committed progress at startup.
    pub initial_progress: Progress,
}

impl Default for ControllerOpts {
    fn default() -> Self {
        Self {
            drag_throw_fraction: DEFAULT_DRAG_THROW_FRACTION,
            initial_progress: Progress::START,
        }
    }
}

impl ControllerOpts {
    /// Validate option values.
    pub fn validate(&self) -> FramemorphResult<()> {
        if !self.drag_throw_fraction.is_finite() || self.drag_throw_fraction <= 0.0 {
            return Err(FramemorphError::validation(
                "drag_throw_fraction must be finite and > 0",
            ));
        }
        Ok(())
    }
}

/// Interaction state of the controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionState {
    /// No drag in progress; geometry reflects committed progress.
    Settled,
    /// A drag is in progress; geometry reflects provisional progress.
    Dragging,
}

#[derive(Clone, Copy, Debug)]
struct DragSession {
    // Total horizontal translation since the drag began.
    translation_x: f64,
    provisional: Progress,
}

/// Owns progress and the current frame pair, and turns host events into applied geometry.
///
/// Events are expected on one context in host order: a bounds change is fully resolved and
/// applied before the next drag event is handled.
#[derive(Debug)]
pub struct InterpolationController<A, R = EndpointResolver> {
    resolver: R,
    applier: A,
    opts: ControllerOpts,
    committed: Progress,
    frames: Option<FramePair>,
    bounds: Option<Size>,
    drag: Option<DragSession>,
    // Progress of the frame last handed to the applier for the current pair.
    rendered: Option<Progress>,
}

impl<A, R> InterpolationController<A, R>
where
    A: GeometryApplier,
    R: EndpointSource,
{
    /// Create a settled controller. No geometry is applied until bounds are known.
    pub fn new(resolver: R, applier: A, opts: ControllerOpts) -> FramemorphResult<Self> {
        opts.validate()?;
        Ok(Self {
            resolver,
            applier,
            opts,
            committed: opts.initial_progress,
            frames: None,
            bounds: None,
            drag: None,
            rendered: None,
        })
    }

    /// Re-resolve endpoints for `bounds` and re-apply committed progress against them.
    ///
    /// Progress is untouched. The previous pair is dropped before resolving, so a failed
    /// resolution never leaves a pair from other bounds in place.
    pub fn on_bounds_changed(&mut self, bounds: Size) -> FramemorphResult<()> {
        validate_bounds(bounds)?;
        self.frames = None;
        self.rendered = None;
        self.bounds = Some(bounds);

        let pair = self.resolver.resolve(bounds)?;
        self.applier.relayout(bounds)?;
        self.frames = Some(pair);
        tracing::debug!(
            width = bounds.width,
            height = bounds.height,
            progress = self.committed.get(),
            "bounds changed"
        );
        self.render(self.committed);
        Ok(())
    }

    /// Advance the active drag by an incremental horizontal delta.
    ///
    /// Deltas accumulate for the lifetime of the drag; the first delta starts one.
    pub fn on_drag_delta(
        &mut self,
        delta_x: f64,
        reference_width: f64,
    ) -> FramemorphResult<Progress> {
        if !delta_x.is_finite() {
            return Err(FramemorphError::validation("drag delta must be finite"));
        }
        let total = self.drag.map_or(0.0, |d| d.translation_x) + delta_x;
        self.on_drag_translation(total, reference_width)
    }

    /// Set the active drag's total horizontal translation since it began.
    ///
    /// Provisional progress is `committed + total / (drag_throw_fraction * reference_width)`,
    /// clamped to `[0, 1]`. It is rendered immediately but not committed.
    pub fn on_drag_translation(
        &mut self,
        total_x: f64,
        reference_width: f64,
    ) -> FramemorphResult<Progress> {
        if !total_x.is_finite() {
            return Err(FramemorphError::validation("drag translation must be finite"));
        }
        if !reference_width.is_finite() || reference_width <= 0.0 {
            return Err(FramemorphError::validation(
                "drag reference width must be finite and > 0",
            ));
        }

        let range = self.opts.drag_throw_fraction * reference_width;
        let provisional = Progress::new(self.committed.get() + total_x / range);
        if self.drag.is_none() {
            tracing::debug!(committed = self.committed.get(), "drag started");
        }
        self.drag = Some(DragSession {
            translation_x: total_x,
            provisional,
        });
        tracing::trace!(translation = total_x, progress = provisional.get(), "drag update");
        self.render(provisional);
        Ok(provisional)
    }

    /// Commit provisional progress and settle. A no-op while settled.
    pub fn on_drag_end(&mut self) -> Progress {
        match self.drag.take() {
            Some(drag) => {
                self.committed = drag.provisional;
                tracing::debug!(committed = self.committed.get(), "drag committed");
            }
            None => tracing::debug!("drag end while settled; ignored"),
        }
        self.committed
    }

    /// Discard provisional progress and restore geometry at committed progress.
    pub fn on_drag_cancelled(&mut self) {
        if self.drag.take().is_some() {
            tracing::debug!(committed = self.committed.get(), "drag cancelled");
            self.render(self.committed);
        }
    }

    /// Commit `progress` (clamped) directly, ending any active drag, and render it.
    pub fn set_progress(&mut self, progress: f64) -> Progress {
        if self.drag.take().is_some() {
            tracing::debug!("active drag superseded by set_progress");
        }
        self.committed = Progress::new(progress);
        self.render(self.committed);
        self.committed
    }

    fn render(&mut self, progress: Progress) {
        let Some(pair) = self.frames else {
            tracing::debug!("no endpoint frames resolved yet; render skipped");
            return;
        };
        self.applier
            .apply(lerp_rect(pair.start, pair.end, progress.get()));
        self.rendered = Some(progress);
    }

    /// Current interaction state.
    pub fn state(&self) -> InteractionState {
        if self.drag.is_some() {
            InteractionState::Dragging
        } else {
            InteractionState::Settled
        }
    }

    /// Authoritative progress.
    pub fn committed_progress(&self) -> Progress {
        self.committed
    }

    /// Progress of the active drag, if any.
    pub fn provisional_progress(&self) -> Option<Progress> {
        self.drag.map(|d| d.provisional)
    }

    /// Progress of the frame currently on screen.
    ///
    /// After a bounds change during a drag this is committed progress, not provisional, until the
    /// next drag update. Before anything is rendered it is the progress the next render would use.
    pub fn displayed_progress(&self) -> Progress {
        self.rendered
            .unwrap_or_else(|| self.provisional_progress().unwrap_or(self.committed))
    }

    /// Endpoint frames for the current bounds.
    pub fn frames(&self) -> Option<FramePair> {
        self.frames
    }

    /// Container bounds of the last bounds change.
    pub fn bounds(&self) -> Option<Size> {
        self.bounds
    }

    /// Interpolated frame at displayed progress: the frame last applied for the current pair.
    pub fn current_frame(&self) -> Option<Rect> {
        let p = self.displayed_progress();
        self.frames
            .map(|pair| lerp_rect(pair.start, pair.end, p.get()))
    }

    /// Active options.
    pub fn opts(&self) -> &ControllerOpts {
        &self.opts
    }

    /// Borrow the endpoint source.
    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Borrow the geometry applier.
    pub fn applier(&self) -> &A {
        &self.applier
    }

    /// Mutably borrow the geometry applier.
    pub fn applier_mut(&mut self) -> &mut A {
        &mut self.applier
    }

    /// Consume the controller, returning the applier.
    pub fn into_applier(self) -> A {
        self.applier
    }
}

#[cfg(test)]
#[path = "../../tests/unit/interaction/controller.rs"]
mod tests;
