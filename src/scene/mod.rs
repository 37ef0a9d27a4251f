//! Explicit scene context: layout constants, camera frame, and text measurement.

pub(crate) mod config;
pub(crate) mod context;
pub(crate) mod measure;
