//! Geometry application: the boundary where interpolated frames reach the screen.

pub(crate) mod applier;
pub(crate) mod live;
