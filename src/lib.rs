//! Framemorph morphs one floating element between two layout positions.
//!
//! Each endpoint is defined by a relationship rather than coordinates: the floating element fills
//! the margin box of one of two fixed elements, which are themselves placed by a shared
//! [`ConstraintSpec`]. For a given container size the [`EndpointResolver`] lays out an offscreen
//! copy of the screen twice to obtain the two frames, and the [`InterpolationController`] maps a
//! progress value (committed, or provisional while dragging) onto a linear path between them.
//!
//! - Describe the screen with a [`ConstraintSpec`]
//! - Drive an [`InterpolationController`] from host events
//! - Receive frames through a [`GeometryApplier`] such as the live [`Stage`]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod animation;
pub(crate) mod interaction;
pub(crate) mod layout;
/// Scripted event replay.
pub mod script;
pub(crate) mod stage;

pub use crate::animation::lerp::{Lerp, lerp, lerp_rect};
pub use crate::foundation::core::{FramePair, Point, Progress, Rect, Size, Vec2};
pub use crate::foundation::error::{FramemorphError, FramemorphResult};
pub use crate::interaction::controller::{
    ControllerOpts, DEFAULT_DRAG_THROW_FRACTION, InteractionState, InterpolationController,
};
pub use crate::interaction::hooks::{ImmediateTransition, TransitionCoordinator};
pub use crate::layout::resolver::{EndpointResolver, EndpointSource};
pub use crate::layout::spec::{
    ConstraintSpec, DEFAULT_EDGE_INSET, DEFAULT_LAYOUT_MARGIN, Dimension, EdgePins,
    ElementConstraints, FixedElement, Insets,
};
pub use crate::script::{Script, ScriptEvent, ScriptStep, run_script};
pub use crate::stage::applier::{GeometryApplier, RecordingApplier};
pub use crate::stage::live::{Stage, StageSnapshot};
