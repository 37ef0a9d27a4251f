use crate::{
    entry::value::Value,
    foundation::core::{Corner, Line, Point, Rect, Size, Vec2, rect_from_upper_left},
    scene::{context::SceneContext, measure::has_descender},
};

// Contents baseline nudges, relative to bottom-aligning the contents with the name.
const NUDGE_SAME: f64 = 0.01;
const NUDGE_NAME_DIPS: f64 = 0.05;
const NUDGE_CONTENTS_DIPS: f64 = -0.05;

/// Geometry of one variable box: `name | contents` inside a bordered rectangle.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EntryBox {
    pub name: String,
    pub value: Value,
    /// Formatted contents string.
    pub contents: String,
    pub bounds: Rect,
    pub name_bounds: Rect,
    pub contents_bounds: Rect,
    /// Dashed separator between name and contents.
    pub divider: Line,
}

impl EntryBox {
    /// Box whose upper-left corner sits at `anchor`.
    pub fn layout(name: &str, value: Value, anchor: Point, ctx: &SceneContext) -> Self {
        let cfg = &ctx.config;
        let contents = value.display();
        let ns = ctx.measure_entry_text(name);
        let cs = ctx.measure_entry_text(&contents);
        let shift = baseline_nudge(name, &contents);

        // Local frame: name's lower-left corner at the origin.
        let name_local = Rect::new(0.0, 0.0, ns.width, ns.height);
        let cx0 = ns.width + cfg.name_value_gap;
        let contents_local = Rect::new(cx0, shift, cx0 + cs.width, shift + cs.height);
        let group = name_local.union(contents_local);

        let size = Size::new(
            group.width() + 2.0 * cfg.box_margin_h,
            group.height().max(ns.height).max(cs.height) + 2.0 * cfg.box_margin_v,
        );
        let bounds = rect_from_upper_left(anchor, size);

        let offset = Vec2::new(
            anchor.x + cfg.box_margin_h - group.x0,
            anchor.y - cfg.box_margin_v - group.y1,
        );
        let name_bounds = name_local + offset;
        let contents_bounds = contents_local + offset;

        let divider_x = name_bounds.x1 + cfg.name_value_gap * 0.5;
        let divider = Line::new(
            (divider_x, bounds.y1 - cfg.box_margin_v),
            (divider_x, bounds.y0 + cfg.box_margin_v),
        );

        Self {
            name: name.to_string(),
            value,
            contents,
            bounds,
            name_bounds,
            contents_bounds,
            divider,
        }
    }

    pub fn size(&self) -> Size {
        self.bounds.size()
    }

    pub fn upper_left(&self) -> Point {
        Corner::UpperLeft.of(self.bounds)
    }

    /// Same name, new value, upper-left corner pinned in place.
    pub fn with_value(&self, value: Value, ctx: &SceneContext) -> Self {
        Self::layout(&self.name, value, self.upper_left(), ctx)
    }

    pub fn shift(&mut self, delta: Vec2) {
        self.bounds = self.bounds + delta;
        self.name_bounds = self.name_bounds + delta;
        self.contents_bounds = self.contents_bounds + delta;
        self.divider = Line::new(self.divider.p0 + delta, self.divider.p1 + delta);
    }
}

/// Vertical offset applied to the contents after bottom-aligning them with the name, so
/// baselines line up whether or not either string has descenders.
pub fn baseline_nudge(name: &str, contents: &str) -> f64 {
    match (has_descender(name), has_descender(contents)) {
        (a, b) if a == b => NUDGE_SAME,
        (true, false) => NUDGE_NAME_DIPS,
        _ => NUDGE_CONTENTS_DIPS,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/entry/boxes.rs"]
mod tests;
