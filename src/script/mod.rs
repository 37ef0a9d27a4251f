//! JSON scripts of scope operations and the replay that turns them into a layout report.

pub(crate) mod model;
pub(crate) mod run;
