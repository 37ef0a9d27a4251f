use super::*;
use crate::{entry::value::Value, layout::address::Arrangement};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn scope(arrangement: Arrangement) -> VariableScope {
    VariableScope::new(0, Rect::new(-2.0, -0.25, 2.0, 0.25), 4.0, arrangement)
}

#[test]
fn first_anchor_is_shelf_corner_plus_inset() {
    let ctx = SceneContext::headless();
    let p = anchor_for(&scope(Arrangement::Stack), Address::Stack(0), &ctx).unwrap();
    assert!(close(p.x, -1.9));
    assert!(close(p.y, 0.15));
}

#[test]
fn place_returns_bounds_hanging_from_anchor() {
    let ctx = SceneContext::headless();
    let r = place(
        &scope(Arrangement::Stack),
        Address::Stack(0),
        Size::new(1.0, 0.5),
        &ctx,
    )
    .unwrap();
    assert!(close(r.x0, -1.9) && close(r.x1, -0.9));
    assert!(close(r.y1, 0.15) && close(r.y0, -0.35));
}

#[test]
fn stack_anchor_follows_previous_lower_left() {
    let ctx = SceneContext::headless();
    let mut s = scope(Arrangement::Stack);
    let first = s.create_entry("a", Value::from(1), None, &ctx).unwrap();
    let p = anchor_for(&s, Address::Stack(1), &ctx).unwrap();
    assert_eq!(p, Corner::LowerLeft.of(first.entry.bounds) - Vec2::new(0.0, 0.1));
}

#[test]
fn grid_second_column_starts_at_shelf_center() {
    let ctx = SceneContext::headless();
    let mut s = scope(Arrangement::Grid);
    s.create_entry("a", Value::from(1), None, &ctx).unwrap();
    let p = anchor_for(&s, Address::Grid(0, 1), &ctx).unwrap();
    assert!(close(p.x, 0.1));
    assert!(close(p.y, 0.15));
}

#[test]
fn grid_second_column_needs_first_column_in_same_row() {
    let ctx = SceneContext::headless();
    let mut s = scope(Arrangement::Grid);
    let err = anchor_for(&s, Address::Grid(0, 1), &ctx).unwrap_err();
    assert!(matches!(err, VarScopeError::Layout(_)));
    assert!(err.to_string().contains("needs an entry at (0, 0)"));

    s.create_entry("a", Value::from(1), None, &ctx).unwrap();
    s.create_entry("b", Value::from(2), None, &ctx).unwrap();
    let err = anchor_for(&s, Address::Grid(1, 1), &ctx).unwrap_err();
    assert!(err.to_string().contains("needs an entry at (1, 0)"));
}

#[test]
fn occupied_and_misshaped_addresses_fail() {
    let ctx = SceneContext::headless();
    let mut s = scope(Arrangement::Grid);
    s.create_entry("a", Value::from(1), None, &ctx).unwrap();
    let err = anchor_for(&s, Address::Grid(0, 0), &ctx).unwrap_err();
    assert!(err.to_string().contains("already occupied"));
    assert!(anchor_for(&s, Address::Stack(1), &ctx).is_err());
    assert!(anchor_for(&s, Address::Grid(0, 2), &ctx).is_err());
}
