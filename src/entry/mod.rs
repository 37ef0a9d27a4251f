//! Variable values and the geometry of the boxes that display them.

pub(crate) mod boxes;
pub(crate) mod value;
