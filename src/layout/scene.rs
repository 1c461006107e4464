//! Scene graph over the `taffy` solver.
//!
//! A scene is a root container of definite size holding the two fixed elements. The live stage and
//! the offscreen resolver both build scenes through [`Scene::build`], so the fixed-element styles
//! are produced by one function from one [`ConstraintSpec`].

use crate::foundation::core::{Point, Rect, Size, Vec2, validate_bounds};
use crate::foundation::error::{FramemorphError, FramemorphResult};
use crate::layout::spec::{ConstraintSpec, Dimension, ElementConstraints, FixedElement, Insets};
use taffy::prelude::{AvailableSpace, NodeId};
use taffy::style::{Dimension as TaffyDimension, LengthPercentageAuto, Position, Style};

/// Where the floating element hangs and how it is pinned there.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Attachment {
    pub(crate) parent: FixedElement,
    pub(crate) margins: Insets,
}

impl Attachment {
    /// Fill `parent`'s margin box.
    pub(crate) fn margins_of(parent: FixedElement, margins: Insets) -> Self {
        Self { parent, margins }
    }
}

#[derive(Debug)]
pub(crate) struct Scene {
    taffy: taffy::TaffyTree<()>,
    root: NodeId,
    red: NodeId,
    blue: NodeId,
    bounds: Size,
}

impl Scene {
    /// Build a detached scene sized to `bounds` with both fixed elements installed.
    pub(crate) fn build(spec: &ConstraintSpec, bounds: Size) -> FramemorphResult<Self> {
        spec.validate()?;
        validate_bounds(bounds)?;

        let mut taffy = taffy::TaffyTree::new();
        taffy.disable_rounding();

        let red = taffy.new_leaf(fixed_style(&spec.red))?;
        let blue = taffy.new_leaf(fixed_style(&spec.blue))?;
        let root = taffy.new_with_children(
            Style {
                size: taffy::prelude::Size {
                    width: TaffyDimension::length(bounds.width as f32),
                    height: TaffyDimension::length(bounds.height as f32),
                },
                ..Style::default()
            },
            &[red, blue],
        )?;

        Ok(Self {
            taffy,
            root,
            red,
            blue,
            bounds,
        })
    }

    fn fixed_node(&self, role: FixedElement) -> NodeId {
        match role {
            FixedElement::Red => self.red,
            FixedElement::Blue => self.blue,
        }
    }

    /// Create the floating element, not yet attached anywhere.
    pub(crate) fn new_floating(&mut self) -> FramemorphResult<NodeId> {
        Ok(self.taffy.new_leaf(Style::default())?)
    }

    /// Move `node` under the attachment's parent, replacing its previous parent and pin rule.
    pub(crate) fn attach(&mut self, node: NodeId, attachment: Attachment) -> FramemorphResult<()> {
        if let Some(prev) = self.taffy.parent(node) {
            self.taffy.remove_child(prev, node)?;
        }
        self.taffy.set_style(node, margin_pinned_style(&attachment.margins))?;
        self.taffy
            .add_child(self.fixed_node(attachment.parent), node)?;
        Ok(())
    }

    /// Run the solver over the whole scene.
    pub(crate) fn resolve(&mut self) -> FramemorphResult<()> {
        let available = taffy::prelude::Size {
            width: AvailableSpace::Definite(self.bounds.width as f32),
            height: AvailableSpace::Definite(self.bounds.height as f32),
        };
        self.taffy.compute_layout(self.root, available)?;
        Ok(())
    }

    /// Resolved frame of a fixed element in root coordinates.
    pub(crate) fn fixed_frame(&self, role: FixedElement) -> FramemorphResult<Rect> {
        self.frame_in_root(self.fixed_node(role))
    }

    /// Resolved frame of `node`, converted from its parent's space into the root's.
    pub(crate) fn frame_in_root(&self, node: NodeId) -> FramemorphResult<Rect> {
        let layout = self.taffy.layout(node)?;
        let mut origin = Point::new(
            f64::from(layout.location.x),
            f64::from(layout.location.y),
        );
        let size = Size::new(
            f64::from(layout.size.width).max(0.0),
            f64::from(layout.size.height).max(0.0),
        );

        let mut cur = node;
        loop {
            match self.taffy.parent(cur) {
                Some(parent) if parent == self.root => break,
                Some(parent) => {
                    let l = self.taffy.layout(parent)?;
                    origin += Vec2::new(f64::from(l.location.x), f64::from(l.location.y));
                    cur = parent;
                }
                None => {
                    return Err(FramemorphError::layout(
                        "node is not attached to the scene root",
                    ));
                }
            }
        }

        Ok(Rect::from_origin_size(origin, size))
    }
}

fn fixed_style(c: &ElementConstraints) -> Style {
    Style {
        position: Position::Absolute,
        size: taffy::prelude::Size {
            width: dimension(c.width),
            height: dimension(c.height),
        },
        inset: taffy::prelude::Rect {
            left: pin(c.pins.left),
            right: pin(c.pins.right),
            top: pin(c.pins.top),
            bottom: pin(c.pins.bottom),
        },
        ..Style::default()
    }
}

fn margin_pinned_style(m: &Insets) -> Style {
    Style {
        position: Position::Absolute,
        inset: taffy::prelude::Rect {
            left: LengthPercentageAuto::length(m.left as f32),
            right: LengthPercentageAuto::length(m.right as f32),
            top: LengthPercentageAuto::length(m.top as f32),
            bottom: LengthPercentageAuto::length(m.bottom as f32),
        },
        ..Style::default()
    }
}

fn dimension(d: Option<Dimension>) -> TaffyDimension {
    match d {
        None => TaffyDimension::auto(),
        Some(Dimension::Points(v)) => TaffyDimension::length(v as f32),
        Some(Dimension::FractionOfContainer(f)) => TaffyDimension::percent(f as f32),
    }
}

fn pin(inset: Option<f64>) -> LengthPercentageAuto {
    match inset {
        None => LengthPercentageAuto::auto(),
        Some(v) => LengthPercentageAuto::length(v as f32),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/scene.rs"]
mod tests;
