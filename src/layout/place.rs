use crate::{
    foundation::{
        core::{Corner, Point, Rect, Size, Vec2, rect_from_upper_left},
        error::{VarScopeError, VarScopeResult},
    },
    layout::address::Address,
    scene::context::SceneContext,
    scope::container::VariableScope,
};

/// Upper-left anchor for a new entry at `address`.
///
/// Pure: depends only on the scope's current shelf and entries.
pub fn anchor_for(
    scope: &VariableScope,
    address: Address,
    ctx: &SceneContext,
) -> VarScopeResult<Point> {
    scope.arrangement().check(address)?;
    if scope.entry_at(address).is_some() {
        return Err(VarScopeError::layout(format!(
            "address {address} is already occupied"
        )));
    }

    let gap = ctx.config.entry_gap;
    let inset = Vec2::new(ctx.config.shelf_inset, -ctx.config.shelf_inset);
    let shelf = scope.shelf();
    let needs = |a: Address| {
        scope.entry_at(a).map(|e| e.bounds).ok_or_else(|| {
            VarScopeError::layout(format!("address {address} needs an entry at {a}"))
        })
    };

    let anchor = match address {
        Address::Stack(0) | Address::Grid(0, 0) => Corner::UpperLeft.of(shelf) + inset,
        Address::Stack(i) => {
            let prev = needs(Address::Stack(i - 1))?;
            Corner::LowerLeft.of(prev) - Vec2::new(0.0, gap)
        }
        Address::Grid(row, 0) => {
            let above = needs(Address::Grid(row - 1, 0))?;
            Point::new(above.x0, above.y0 - gap)
        }
        // Column 1 is filled only beside an existing column-0 entry.
        Address::Grid(0, col) => {
            let left = needs(Address::Grid(0, col - 1))?;
            let p = Corner::Top.of(shelf) + inset;
            Point::new(p.x.max(left.x1 + gap), p.y)
        }
        Address::Grid(row, col) => {
            let left = needs(Address::Grid(row, col - 1))?;
            let above = needs(Address::Grid(row - 1, col))?;
            Point::new(left.x1.max(above.x0 - gap) + gap, above.y0 - gap)
        }
    };
    Ok(anchor)
}

/// Bounds an entry of `entry_size` would occupy at `address`.
#[tracing::instrument(level = "trace", skip(scope, ctx))]
pub fn place(
    scope: &VariableScope,
    address: Address,
    entry_size: Size,
    ctx: &SceneContext,
) -> VarScopeResult<Rect> {
    let anchor = anchor_for(scope, address, ctx)?;
    Ok(rect_from_upper_left(anchor, entry_size))
}

#[cfg(test)]
#[path = "../../tests/unit/layout/place.rs"]
mod tests;
