use super::*;

const ALL: [Ease; 4] = [Ease::Linear, Ease::OutQuad, Ease::OutCubic, Ease::OutBack(1.2)];

#[test]
fn endpoints_are_stable() {
    for ease in ALL {
        assert!(ease.apply(0.0).abs() < 1e-12, "{ease:?}");
        assert!((ease.apply(1.0) - 1.0).abs() < 1e-12, "{ease:?}");
    }
}

#[test]
fn decelerating_curves_lead_linear() {
    for ease in [Ease::OutQuad, Ease::OutCubic] {
        assert!(ease.apply(0.25) > 0.25);
        assert!(ease.apply(0.5) < ease.apply(0.75));
    }
    assert!(Ease::OutCubic.apply(0.3) > Ease::OutQuad.apply(0.3));
}

#[test]
fn back_overshoots_before_settling() {
    let peak = (1..100)
        .map(|i| Ease::OutBack(1.2).apply(i as f64 / 100.0))
        .fold(f64::MIN, f64::max);
    assert!(peak > 1.0);
}

#[test]
fn input_is_clamped() {
    assert_eq!(Ease::OutQuad.apply(-1.0), 0.0);
    assert_eq!(Ease::OutQuad.apply(2.0), 1.0);
}
