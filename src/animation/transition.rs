use crate::{
    animation::ease::Ease,
    foundation::core::{Rect, Vec2},
};

pub trait Lerp: Sized {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for Vec2 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Vec2::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
    }
}

impl Lerp for Rect {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Rect::new(
            <f64 as Lerp>::lerp(&a.x0, &b.x0, t),
            <f64 as Lerp>::lerp(&a.y0, &b.y0, t),
            <f64 as Lerp>::lerp(&a.x1, &b.x1, t),
            <f64 as Lerp>::lerp(&a.y1, &b.y1, t),
        )
    }
}

/// Scene element a transition applies to.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Target {
    Title,
    /// A whole scope: shelf, entries and attachments.
    Scope { scope: usize },
    Shelf { scope: usize },
    Entry { scope: usize, name: String },
    /// Only the contents text of an entry.
    EntryContents { scope: usize, name: String },
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionKind {
    FadeIn { bounds: Rect },
    FadeOut { bounds: Rect },
    /// Reshape from one rectangle into another.
    Morph { from: Rect, to: Rect },
    /// Rigid translation by `delta`.
    Shift { delta: Vec2 },
}

/// One animated change, handed to the rendering engine to play.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Transition {
    pub target: Target,
    pub kind: TransitionKind,
    #[serde(default)]
    pub ease: Ease,
}

/// Interpolated state of a transition at some progress `t`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransitionState {
    /// Current bounds when the transition knows them (fades and morphs).
    pub bounds: Option<Rect>,
    /// Translation applied so far (shifts only).
    pub offset: Vec2,
    pub opacity: f64,
}

impl Transition {
    pub fn new(target: Target, kind: TransitionKind) -> Self {
        Self {
            target,
            kind,
            ease: Ease::default(),
        }
    }

    pub fn fade_in(target: Target, bounds: Rect) -> Self {
        Self::new(target, TransitionKind::FadeIn { bounds })
    }

    pub fn fade_out(target: Target, bounds: Rect) -> Self {
        Self::new(target, TransitionKind::FadeOut { bounds })
    }

    pub fn morph(target: Target, from: Rect, to: Rect) -> Self {
        Self::new(target, TransitionKind::Morph { from, to })
    }

    pub fn shift(target: Target, delta: Vec2) -> Self {
        Self::new(target, TransitionKind::Shift { delta })
    }

    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    /// State at progress `t` in `[0, 1]` (clamped).
    pub fn sample(&self, t: f64) -> TransitionState {
        let e = self.ease.apply(t);
        match self.kind {
            TransitionKind::FadeIn { bounds } => TransitionState {
                bounds: Some(bounds),
                offset: Vec2::ZERO,
                opacity: e,
            },
            TransitionKind::FadeOut { bounds } => TransitionState {
                bounds: Some(bounds),
                offset: Vec2::ZERO,
                opacity: 1.0 - e,
            },
            TransitionKind::Morph { from, to } => TransitionState {
                bounds: Some(<Rect as Lerp>::lerp(&from, &to, e)),
                offset: Vec2::ZERO,
                opacity: 1.0,
            },
            TransitionKind::Shift { delta } => TransitionState {
                bounds: None,
                offset: <Vec2 as Lerp>::lerp(&Vec2::ZERO, &delta, e),
                opacity: 1.0,
            },
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/transition.rs"]
mod tests;
