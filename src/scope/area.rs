use crate::{
    animation::transition::{Target, Transition},
    entry::value::Value,
    foundation::{
        core::{Corner, Point, Rect, Size, Vec2, align_rect, rect_from_upper_left},
        error::{VarScopeError, VarScopeResult},
    },
    layout::{
        address::{Address, Arrangement},
        resize::shelf_height,
    },
    scene::context::SceneContext,
    scope::container::{EntryCreated, EntryUpdated, VariableScope},
};

pub const TITLE: &str = "Variables";

/// Parameters of a new call frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PushConfig {
    /// Rows the new shelf is sized for up front.
    pub initial_lines: usize,
    #[serde(rename = "vars_per_row")]
    pub arrangement: Arrangement,
}

/// A scope that was pushed, parked above the frame, and shifted into place.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Pushed {
    pub depth: usize,
    /// Shelf bounds while parked off-screen.
    pub offscreen: Rect,
    /// Final upper-left corner of the shelf.
    pub target: Point,
    pub transition: Transition,
}

/// A scope that was shifted out above the frame and removed.
#[derive(Clone, Debug, PartialEq)]
pub struct Popped {
    /// The removed scope, at its final off-screen position.
    pub scope: VariableScope,
    pub transition: Transition,
}

/// Titled stack of variable scopes; the last scope is the active call frame.
///
/// The stack never becomes empty: the base scope stays until the area is dropped.
#[derive(Clone, Debug, PartialEq)]
pub struct VariableArea {
    title: Rect,
    scopes: Vec<VariableScope>,
}

impl VariableArea {
    /// Area with one base scope centered on the origin and the title above it.
    pub fn new(arrangement: Arrangement, ctx: &SceneContext) -> Self {
        let min_width = ctx.config.min_shelf_width;
        let shelf = Rect::from_center_size(Point::ZERO, Size::new(min_width, shelf_height(0.0)));
        let base = VariableScope::new(0, shelf, min_width, arrangement);

        let title_size = ctx.measure_title(TITLE);
        let title_anchor = Corner::Top.of(shelf) + Vec2::new(0.0, ctx.config.title_gap);
        let title = align_rect(
            Rect::from_origin_size(Point::ZERO, title_size),
            Corner::Bottom,
            title_anchor,
        );

        Self {
            title,
            scopes: vec![base],
        }
    }

    pub fn title(&self) -> Rect {
        self.title
    }

    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    pub fn scopes(&self) -> &[VariableScope] {
        &self.scopes
    }

    pub fn base(&self) -> &VariableScope {
        &self.scopes[0]
    }

    pub fn top(&self) -> &VariableScope {
        let last = self.scopes.len() - 1;
        &self.scopes[last]
    }

    pub fn top_mut(&mut self) -> &mut VariableScope {
        let last = self.scopes.len() - 1;
        &mut self.scopes[last]
    }

    pub fn bounds(&self) -> Rect {
        self.scopes
            .iter()
            .map(VariableScope::bounds)
            .fold(self.title, |acc, r| acc.union(r))
    }

    /// Move the whole area so its `corner` lands on `point`.
    pub fn align_to(&mut self, point: Point, corner: Corner) {
        let delta = corner.delta_to(self.bounds(), point);
        self.shift(delta);
    }

    pub fn shift(&mut self, delta: Vec2) {
        self.title = self.title + delta;
        for s in &mut self.scopes {
            s.shift(delta);
        }
    }

    /// Push a new call frame on top of the current one.
    ///
    /// The new shelf is as wide as the previous scope, at least as tall, and slides down from
    /// above the camera frame to sit just inside the previous scope's upper-left corner.
    #[tracing::instrument(level = "debug", skip(self, ctx))]
    pub fn push(&mut self, config: PushConfig, ctx: &SceneContext) -> Pushed {
        let prev = self.top().bounds();
        let inset = ctx.config.push_inset;
        let target = Corner::UpperLeft.of(prev) + Vec2::new(inset, -inset);
        let size = Size::new(
            prev.width(),
            shelf_height(config.initial_lines as f64).max(prev.height()),
        );

        let parked_bottom = ctx.frame.top() + ctx.config.offscreen_clearance;
        let offscreen = Rect::new(
            target.x,
            parked_bottom,
            target.x + size.width,
            parked_bottom + size.height,
        );
        let shelf = rect_from_upper_left(target, size);

        let depth = self.scopes.len();
        self.scopes.push(VariableScope::new(
            depth,
            shelf,
            size.width,
            config.arrangement,
        ));
        tracing::debug!(depth, ?shelf, "pushed scope");

        Pushed {
            depth,
            offscreen,
            target,
            transition: Transition::shift(
                Target::Scope { scope: depth },
                Corner::UpperLeft.delta_to(offscreen, target),
            ),
        }
    }

    /// Shift the top scope out above the camera frame and remove it.
    ///
    /// Popping the base scope is an error; the stack always keeps at least one scope.
    #[tracing::instrument(level = "debug", skip(self, ctx))]
    pub fn pop(&mut self, ctx: &SceneContext) -> VarScopeResult<Popped> {
        let mut scope = match self.scopes.len() {
            n if n > 1 => self.scopes.remove(n - 1),
            _ => return Err(VarScopeError::scope("cannot pop the base scope")),
        };
        let dy = ctx.frame.top() + ctx.config.offscreen_clearance - scope.bounds().y0;
        let delta = Vec2::new(0.0, dy);
        scope.shift(delta);
        tracing::debug!(depth = scope.depth(), dy, "popped scope");

        Ok(Popped {
            transition: Transition::shift(
                Target::Scope {
                    scope: scope.depth(),
                },
                delta,
            ),
            scope,
        })
    }

    /// Add an entry to the active (top) scope.
    pub fn create_entry(
        &mut self,
        name: &str,
        value: Value,
        at: Option<Address>,
        ctx: &SceneContext,
    ) -> VarScopeResult<EntryCreated> {
        self.top_mut().create_entry(name, value, at, ctx)
    }

    /// Change an entry of the active (top) scope.
    pub fn update_entry(
        &mut self,
        name: &str,
        value: Value,
        ctx: &SceneContext,
    ) -> VarScopeResult<EntryUpdated> {
        self.top_mut().update_entry(name, value, ctx)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scope/area.rs"]
mod tests;
