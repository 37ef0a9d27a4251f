use crate::{
    foundation::{
        core::{Corner, Rect, Size, Vec2, rect_from_upper_left},
        math::{approx_le, max_or},
    },
    scene::config::LayoutConfig,
};

/// Shelf height for `rows` rows of entries.
///
/// Grid scopes pass their entry count divided by the column count, so `rows` may be fractional.
pub fn shelf_height(rows: f64) -> f64 {
    if rows == 0.0 {
        return 0.5;
    }
    0.5 * rows + 0.2 + 0.1 * (rows - 1.0)
}

/// How a shelf must change to fit its entries.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ResizeOutcome {
    pub from: Rect,
    pub to: Rect,
    pub size_delta: Vec2,
    /// Downward growth, for callers that reposition elements below the shelf.
    pub height_delta: f64,
    pub needs_animation: bool,
}

impl ResizeOutcome {
    pub fn unchanged(shelf: Rect) -> Self {
        Self {
            from: shelf,
            to: shelf,
            size_delta: Vec2::ZERO,
            height_delta: 0.0,
            needs_animation: false,
        }
    }
}

/// Size the shelf so it is at least as wide as the widest entry plus margin and at least
/// `shelf_height(rows)` tall. Growth keeps the upper-left corner fixed; the shelf never shrinks.
pub fn resize(
    shelf: Rect,
    min_width: f64,
    entry_widths: impl IntoIterator<Item = f64>,
    rows: f64,
    cfg: &LayoutConfig,
) -> ResizeOutcome {
    let widest = max_or(
        entry_widths.into_iter().map(|w| w + cfg.shelf_width_margin),
        f64::NEG_INFINITY,
    );
    let width = min_width.max(widest);
    let height = shelf.height().max(shelf_height(rows));

    if approx_le(width, shelf.width()) && approx_le(height, shelf.height()) {
        return ResizeOutcome::unchanged(shelf);
    }

    let grown = Size::new(width.max(shelf.width()), height);
    let to = rect_from_upper_left(Corner::UpperLeft.of(shelf), grown);
    tracing::trace!(?shelf, ?to, "shelf grows");
    ResizeOutcome {
        from: shelf,
        to,
        size_delta: Vec2::new(to.width() - shelf.width(), to.height() - shelf.height()),
        height_delta: to.height() - shelf.height(),
        needs_animation: true,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/resize.rs"]
mod tests;
