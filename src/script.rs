//! Scripted event sequences driving a controller against a live [`Stage`].

use crate::foundation::core::{Progress, Size};
use crate::foundation::error::{FramemorphError, FramemorphResult};
use crate::interaction::controller::{ControllerOpts, InteractionState, InterpolationController};
use crate::interaction::hooks::ImmediateTransition;
use crate::layout::resolver::EndpointResolver;
use crate::layout::spec::ConstraintSpec;
use crate::stage::live::{Stage, StageSnapshot};

/// Host event replayed against the controller.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScriptEvent {
    /// Host layout pass at the script's current bounds.
    Layout,
    /// Host transition to new container bounds.
    Transition {
        /// New container width.
        width: f64,
        /// New container height.
        height: f64,
    },
    /// Incremental horizontal drag delta.
    DragDelta {
        /// Delta since the previous drag event.
        dx: f64,
    },
    /// Total horizontal translation since the drag began.
    DragTranslation {
        /// Translation since drag start.
        x: f64,
    },
    /// Drag finished normally.
    DragEnd,
    /// Drag cancelled by the host.
    DragCancel,
    /// Progress set directly.
    SetProgress {
        /// Requested progress (clamped).
        progress: f64,
    },
}

/// Initial bounds plus an ordered event list.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Script {
    /// Container bounds before any transition.
    pub bounds: Size,
    /// Events in host order.
    pub events: Vec<ScriptEvent>,
}

impl Script {
    /// Parse a JSON script.
    pub fn from_json_str(s: &str) -> FramemorphResult<Self> {
        let script: Self = serde_json::from_str(s)?;
        crate::foundation::core::validate_bounds(script.bounds)?;
        Ok(script)
    }
}

/// Controller and stage state after one event.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScriptStep {
    /// Event that produced this step.
    pub event: ScriptEvent,
    /// Interaction state after the event.
    pub state: InteractionState,
    /// Committed progress after the event.
    pub committed: Progress,
    /// Provisional progress after the event, while dragging.
    pub provisional: Option<Progress>,
    /// Progress of the floating frame on stage after the event.
    pub displayed: Progress,
    /// On-screen geometry after the event.
    pub stage: StageSnapshot,
}

/// Replay `script` and record one step per event.
///
/// Drag events use the width of the most recent bounds as their reference width.
pub fn run_script(
    script: &Script,
    spec: ConstraintSpec,
    opts: ControllerOpts,
) -> FramemorphResult<Vec<ScriptStep>> {
    let resolver = EndpointResolver::new(spec)?;
    let stage = Stage::new(spec)?;
    let mut ctl = InterpolationController::new(resolver, stage, opts)?;
    let mut bounds = script.bounds;

    let mut steps = Vec::with_capacity(script.events.len());
    for (idx, event) in script.events.iter().copied().enumerate() {
        let _span = tracing::debug_span!("script_event", idx, ?event).entered();
        match event {
            ScriptEvent::Layout => {
                ctl.on_layout_pass(bounds)?;
            }
            ScriptEvent::Transition { width, height } => {
                bounds = Size::new(width, height);
                ctl.transition_to_size(bounds, &mut ImmediateTransition)?;
            }
            ScriptEvent::DragDelta { dx } => {
                ctl.on_drag_delta(dx, reference_width(bounds)?)?;
            }
            ScriptEvent::DragTranslation { x } => {
                ctl.on_drag_translation(x, reference_width(bounds)?)?;
            }
            ScriptEvent::DragEnd => {
                ctl.on_drag_end();
            }
            ScriptEvent::DragCancel => ctl.on_drag_cancelled(),
            ScriptEvent::SetProgress { progress } => {
                ctl.set_progress(progress);
            }
        }
        steps.push(ScriptStep {
            event,
            state: ctl.state(),
            committed: ctl.committed_progress(),
            provisional: ctl.provisional_progress(),
            displayed: ctl.displayed_progress(),
            stage: ctl.applier().snapshot(),
        });
    }
    Ok(steps)
}

fn reference_width(bounds: Size) -> FramemorphResult<f64> {
    if bounds.width > 0.0 {
        Ok(bounds.width)
    } else {
        Err(FramemorphError::validation(
            "drag events need a container with non-zero width",
        ))
    }
}

#[cfg(test)]
#[path = "../tests/unit/script.rs"]
mod tests;
