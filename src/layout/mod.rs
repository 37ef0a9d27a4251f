//! Entry placement and shelf sizing.

pub(crate) mod address;
pub(crate) mod place;
pub(crate) mod resize;
