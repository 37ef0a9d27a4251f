use crate::foundation::error::{VarScopeError, VarScopeResult};

pub use kurbo::{Line, Point, Rect, Size, Vec2};

/// Corner or edge midpoint of a rectangle, named in scene space where +y points up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Corner {
    UpperLeft,
    UpperRight,
    LowerLeft,
    LowerRight,
    Top,
    Bottom,
}

impl Corner {
    pub fn of(self, r: Rect) -> Point {
        let cx = (r.x0 + r.x1) * 0.5;
        match self {
            Self::UpperLeft => Point::new(r.x0, r.y1),
            Self::UpperRight => Point::new(r.x1, r.y1),
            Self::LowerLeft => Point::new(r.x0, r.y0),
            Self::LowerRight => Point::new(r.x1, r.y0),
            Self::Top => Point::new(cx, r.y1),
            Self::Bottom => Point::new(cx, r.y0),
        }
    }

    /// Offset that moves `r` so its `self` point lands on `target`.
    pub fn delta_to(self, r: Rect, target: Point) -> Vec2 {
        target - self.of(r)
    }
}

/// Rectangle of `size` whose upper-left corner sits at `anchor`.
pub fn rect_from_upper_left(anchor: Point, size: Size) -> Rect {
    Rect::new(
        anchor.x,
        anchor.y - size.height,
        anchor.x + size.width,
        anchor.y,
    )
}

pub fn align_rect(r: Rect, corner: Corner, target: Point) -> Rect {
    r + corner.delta_to(r, target)
}

/// Visible region of the scene, in scene units.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CameraFrame {
    pub center: Point,
    pub width: f64,
    pub height: f64,
}

impl Default for CameraFrame {
    fn default() -> Self {
        // 16:9 at a height of 8 units.
        Self {
            center: Point::ZERO,
            width: 8.0 * 16.0 / 9.0,
            height: 8.0,
        }
    }
}

impl CameraFrame {
    pub fn new(center: Point, width: f64, height: f64) -> VarScopeResult<Self> {
        if !(width.is_finite() && width > 0.0 && height.is_finite() && height > 0.0) {
            return Err(VarScopeError::validation(
                "camera frame width/height must be finite and > 0",
            ));
        }
        Ok(Self {
            center,
            width,
            height,
        })
    }

    pub fn top(self) -> f64 {
        self.center.y + self.height * 0.5
    }

    pub fn bounds(self) -> Rect {
        Rect::from_center_size(self.center, Size::new(self.width, self.height))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
