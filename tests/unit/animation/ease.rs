use super::*;

const ALL: [Ease; 7] = [
    Ease::Linear,
    Ease::InQuad,
    Ease::OutQuad,
    Ease::InOutQuad,
    Ease::InCubic,
    Ease::OutCubic,
    Ease::InOutCubic,
];

#[test]
fn endpoints_are_fixed_and_input_is_clamped() {
    for ease in ALL {
        assert_eq!(ease.apply(0.0), 0.0, "{ease:?}");
        assert_eq!(ease.apply(1.0), 1.0, "{ease:?}");
        assert_eq!(ease.apply(-3.0), 0.0, "{ease:?}");
        assert_eq!(ease.apply(7.0), 1.0, "{ease:?}");
    }
}

#[test]
fn in_out_cubic_is_symmetric_at_half() {
    assert!((Ease::InOutCubic.apply(0.5) - 0.5).abs() < 1e-12);
    assert!(Ease::InOutCubic.apply(0.25) < 0.25);
    assert!(Ease::InOutCubic.apply(0.75) > 0.75);
}

#[test]
fn serde_uses_engine_names() {
    for ease in ALL {
        let json = serde_json::to_string(&ease).unwrap();
        assert_eq!(json, format!("\"{}\"", ease.name()));
        let back: Ease = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ease);
    }
}

#[test]
fn curves_match_their_closed_forms() {
    let t: f64 = 0.3;
    assert!((Ease::InQuad.apply(t) - t * t).abs() < 1e-12);
    assert!((Ease::OutQuad.apply(t) - (1.0 - (1.0 - t) * (1.0 - t))).abs() < 1e-12);
    assert!((Ease::InOutQuad.apply(t) - 2.0 * t * t).abs() < 1e-12);
    assert!((Ease::InCubic.apply(t) - t * t * t).abs() < 1e-12);
    assert!((Ease::OutCubic.apply(t) - (1.0 - (1.0 - t).powi(3))).abs() < 1e-12);
    assert!((Ease::InOutCubic.apply(t) - 4.0 * t * t * t).abs() < 1e-12);
    assert!((Ease::InOutCubic.apply(0.8) - (1.0 - 0.4f64.powi(3) / 2.0)).abs() < 1e-12);
}
