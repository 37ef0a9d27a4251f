//! Engine-agnostic transition records and easing.

pub(crate) mod ease;
pub(crate) mod transition;
