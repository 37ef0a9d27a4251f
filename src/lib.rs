//! varscope is the layout core of an animated variable inspector.
//!
//! Named values are drawn as boxes on a shelf; every function call pushes a new shelf on top of
//! the caller's and pops it on return. This crate computes the geometry only and hands back
//! engine-agnostic [`Transition`] records; drawing belongs to the animation engine.
//!
//! # Pipeline overview
//!
//! 1. **Context**: build a [`SceneContext`] (layout constants, camera frame, text measurer).
//! 2. **Area**: create a [`VariableArea`] with its base [`VariableScope`].
//! 3. **Operate**: create/update entries, push/pop scopes; each call returns the new geometry
//!    and the transitions to play.
//! 4. **Script** (optional): replay a JSON [`Script`] into a [`Report`] (see the `varscope`
//!    binary).
//!
//! Coordinates are scene units with +y pointing up.
#![forbid(unsafe_code)]

mod animation;
mod entry;
mod foundation;
mod layout;
mod scene;
mod scope;
mod script;

pub use animation::ease::Ease;
pub use animation::transition::{Lerp, Target, Transition, TransitionKind, TransitionState};
pub use entry::boxes::{EntryBox, baseline_nudge};
pub use entry::value::{Number, Value, format_list_ref, format_number, format_text};
pub use foundation::core::{
    CameraFrame, Corner, Line, Point, Rect, Size, Vec2, align_rect, rect_from_upper_left,
};
pub use foundation::error::{VarScopeError, VarScopeResult};
pub use layout::address::{Address, Arrangement, GRID_COLUMNS};
pub use layout::place::{anchor_for, place};
pub use layout::resize::{ResizeOutcome, resize, shelf_height};
pub use scene::config::LayoutConfig;
pub use scene::context::SceneContext;
pub use scene::measure::{DESCENDERS, MonospaceMeasure, TextMeasure, has_descender};
pub use scope::area::{PushConfig, Popped, Pushed, TITLE, VariableArea};
pub use scope::container::{EntryCreated, EntryUpdated, VariableScope};
pub use script::model::{AreaSpec, Script, Step};
pub use script::run::{
    AreaSnapshot, EntrySnapshot, Report, ScopeSnapshot, StepReport, run_script, run_script_in,
};
