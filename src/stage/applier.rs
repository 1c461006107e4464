use crate::foundation::core::{Rect, Size};
use crate::foundation::error::FramemorphResult;

/// Side-effect boundary into the host view system.
///
/// Calls arrive on the single context that owns the view tree, in the order the controller
/// produces them.
pub trait GeometryApplier {
    /// Write `frame` as the floating element's on-screen frame. No validation happens here.
    fn apply(&mut self, frame: Rect);

    /// Called before the first `apply` against new container bounds so the host can lay out its
    /// own elements.
    fn relayout(&mut self, _bounds: Size) -> FramemorphResult<()> {
        Ok(())
    }
}

impl<A: GeometryApplier + ?Sized> GeometryApplier for &mut A {
    fn apply(&mut self, frame: Rect) {
        (**self).apply(frame);
    }

    fn relayout(&mut self, bounds: Size) -> FramemorphResult<()> {
        (**self).relayout(bounds)
    }
}

/// In-memory applier for tests and debugging.
#[derive(Debug, Default)]
pub struct RecordingApplier {
    frames: Vec<Rect>,
    layouts: Vec<Size>,
}

impl RecordingApplier {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every applied frame in order.
    pub fn frames(&self) -> &[Rect] {
        &self.frames
    }

    /// Most recently applied frame.
    pub fn last(&self) -> Option<Rect> {
        self.frames.last().copied()
    }

    /// Bounds passed to [`GeometryApplier::relayout`], in order.
    pub fn layouts(&self) -> &[Size] {
        &self.layouts
    }
}

impl GeometryApplier for RecordingApplier {
    fn apply(&mut self, frame: Rect) {
        self.frames.push(frame);
    }

    fn relayout(&mut self, bounds: Size) -> FramemorphResult<()> {
        self.layouts.push(bounds);
        Ok(())
    }
}
