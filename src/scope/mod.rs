//! Variable scopes (one shelf per call frame) and the stack that holds them.

pub(crate) mod area;
pub(crate) mod container;
