use super::*;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn nudges_follow_descender_status() {
    assert_eq!(baseline_nudge("result", "12"), NUDGE_SAME);
    assert_eq!(baseline_nudge("greeting", "\"Hi, you\""), NUDGE_SAME);
    assert_eq!(baseline_nudge("greeting", "\"Hi\""), NUDGE_NAME_DIPS);
    assert_eq!(baseline_nudge("name", "\"Happy\""), NUDGE_CONTENTS_DIPS);
}

#[test]
fn box_is_anchored_at_upper_left() {
    let ctx = SceneContext::headless();
    let anchor = Point::new(1.0, 2.0);
    let b = EntryBox::layout("price", Value::from(100), anchor, &ctx);
    assert_eq!(b.upper_left(), anchor);
    assert_eq!(b.contents, "100");
    assert!(b.bounds.width() > 0.0 && b.bounds.height() > 0.0);
}

#[test]
fn box_width_is_text_plus_margins() {
    let ctx = SceneContext::headless();
    let b = EntryBox::layout("result", Value::from(12), Point::ZERO, &ctx);
    let ns = ctx.measure_entry_text("result");
    let cs = ctx.measure_entry_text("12");
    let expected = ns.width + ctx.config.name_value_gap + cs.width + 2.0 * ctx.config.box_margin_h;
    assert!(close(b.bounds.width(), expected));
}

#[test]
fn text_sits_inside_margins_and_divider_splits_the_gap() {
    let ctx = SceneContext::headless();
    let b = EntryBox::layout("greeting", Value::from("Hi"), Point::new(-3.0, 1.0), &ctx);
    let cfg = &ctx.config;

    assert!(close(b.name_bounds.x0, b.bounds.x0 + cfg.box_margin_h));
    assert!(b.name_bounds.y1 <= b.bounds.y1 - cfg.box_margin_v + 1e-9);
    assert!(b.contents_bounds.x1 <= b.bounds.x1 - cfg.box_margin_h + 1e-9);
    assert!(b.name_bounds.x1 < b.divider.p0.x && b.divider.p0.x < b.contents_bounds.x0);
    assert!(close(b.divider.p0.y, b.bounds.y1 - cfg.box_margin_v));
    assert!(close(b.divider.p1.y, b.bounds.y0 + cfg.box_margin_v));
}

#[test]
fn contents_bottom_is_nudged_relative_to_name_bottom() {
    let ctx = SceneContext::headless();
    let b = EntryBox::layout("greeting", Value::from("Hi"), Point::ZERO, &ctx);
    assert!(close(
        b.contents_bounds.y0 - b.name_bounds.y0,
        NUDGE_NAME_DIPS
    ));
}

#[test]
fn with_value_keeps_upper_left_and_resizes() {
    let ctx = SceneContext::headless();
    let b = EntryBox::layout("total", Value::from(1), Point::new(0.5, 0.5), &ctx);
    let wider = b.with_value(Value::from(108.0), &ctx);
    assert_eq!(wider.upper_left(), b.upper_left());
    assert!(wider.bounds.width() > b.bounds.width());
    assert_eq!(wider.name, "total");
    assert_eq!(wider.contents, "108.0");
}

#[test]
fn shift_moves_every_part() {
    let ctx = SceneContext::headless();
    let mut b = EntryBox::layout("x", Value::from(1), Point::ZERO, &ctx);
    let before = b.clone();
    b.shift(Vec2::new(0.0, 2.0));
    assert_eq!(b.bounds, before.bounds + Vec2::new(0.0, 2.0));
    assert_eq!(b.name_bounds, before.name_bounds + Vec2::new(0.0, 2.0));
    assert_eq!(b.contents_bounds, before.contents_bounds + Vec2::new(0.0, 2.0));
    assert_eq!(b.divider.p0, before.divider.p0 + Vec2::new(0.0, 2.0));
}
