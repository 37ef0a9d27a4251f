use super::*;

const ALL: [Ease; 6] = [
    Ease::Linear,
    Ease::Smooth,
    Ease::RushInto,
    Ease::RushFrom,
    Ease::SlowInto,
    Ease::DoubleSmooth,
];

#[test]
fn endpoints_are_fixed() {
    for e in ALL {
        assert!(e.apply(0.0).abs() < 1e-9, "{e:?}");
        assert!((e.apply(1.0) - 1.0).abs() < 1e-9, "{e:?}");
    }
}

#[test]
fn input_is_clamped() {
    for e in ALL {
        assert_eq!(e.apply(-3.0), e.apply(0.0));
        assert_eq!(e.apply(7.0), e.apply(1.0));
    }
}

#[test]
fn symmetric_curves_pass_through_midpoint() {
    assert!((Ease::Smooth.apply(0.5) - 0.5).abs() < 1e-12);
    assert!((Ease::DoubleSmooth.apply(0.5) - 0.5).abs() < 1e-12);
}

#[test]
fn rush_variants_lean_opposite_ways() {
    assert!(Ease::RushInto.apply(0.5) < 0.5);
    assert!(Ease::RushFrom.apply(0.5) > 0.5);
}

#[test]
fn curves_are_monotonic() {
    for e in ALL {
        let mut prev = e.apply(0.0);
        for i in 1..=100 {
            let v = e.apply(f64::from(i) / 100.0);
            assert!(v + 1e-12 >= prev, "{e:?} decreased at {i}");
            prev = v;
        }
    }
}
