//! Constraint description and endpoint resolution over the `taffy` solver.

pub(crate) mod resolver;
pub(crate) mod scene;
pub(crate) mod spec;
