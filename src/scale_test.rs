use super::*;

#[test]
fn test_pct_fraction_scales() {
    let v = pct(Some(0.412)).unwrap();
    assert!((v - 41.2).abs() < 1e-9, "0.412 should become 41.2, got {v}");
}

#[test]
fn test_pct_percentage_passes_through() {
    let v = pct(Some(41.2)).unwrap();
    assert!((v - 41.2).abs() < 1e-9, "41.2 should pass through, got {v}");
}

#[test]
fn test_pct_zero_passes_through() {
    let v = pct(Some(0.0)).unwrap();
    assert!((v - 0.0).abs() < 1e-9, "0.0 is not a fraction, got {v}");
}

#[test]
fn test_pct_exactly_one_passes_through() {
    // 1.0 could be 100% or a 1% rate; the heuristic leaves it alone.
    let v = pct(Some(1.0)).unwrap();
    assert!((v - 1.0).abs() < 1e-9, "1.0 should pass through, got {v}");
}

#[test]
fn test_pct_negative_passes_through() {
    let v = pct(Some(-0.5)).unwrap();
    assert!((v + 0.5).abs() < 1e-9, "negative values pass through, got {v}");
}

#[test]
fn test_pct_none() {
    assert!(pct(None).is_none(), "None passes through as None");
}

#[test]
fn test_pctl_rounds_to_integer() {
    let v = pctl(Some(87.6)).unwrap();
    assert!((v - 88.0).abs() < 1e-9, "87.6 should round to 88, got {v}");
}

#[test]
fn test_pctl_fraction_scales_then_rounds() {
    let v = pctl(Some(0.876)).unwrap();
    assert!((v - 88.0).abs() < 1e-9, "0.876 should become 88, got {v}");
}

// Documented ambiguity: a genuine 0.5th-percentile rank is read as a 50%
// fraction. This is the intended behavior of the heuristic, not a bug to
// fix silently.
#[test]
fn test_pctl_half_percentile_ambiguity() {
    let v = pctl(Some(0.5)).unwrap();
    assert!(
        (v - 50.0).abs() < 1e-9,
        "0.5 is interpreted as a fraction (50th percentile), got {v}"
    );
}

#[test]
fn test_profile_applies_heuristic_uniformly() {
    let mut r = crate::record::StatRecord::for_tests("Uniform Case", "G");
    r.ts = Some(0.58);
    r.ft_pct = Some(74.0);
    r.tp_pct = Some(0.36);
    r.pctl_bpm = Some(0.9);
    let p = NormalizedProfile::from_record(&r);
    assert!((p.ts.unwrap() - 58.0).abs() < 1e-9);
    assert!((p.ft_pct.unwrap() - 74.0).abs() < 1e-9);
    assert!((p.tp_pct.unwrap() - 36.0).abs() < 1e-9);
    assert!((p.pctl.bpm.unwrap() - 90.0).abs() < 1e-9);
}

#[test]
fn test_profile_missing_fields_stay_missing() {
    let r = crate::record::StatRecord::for_tests("Empty Case", "F");
    let p = NormalizedProfile::from_record(&r);
    assert!(p.usg.is_none());
    assert!(p.ts.is_none());
    assert!(p.pctl.bpm.is_none());
    assert_eq!(p.name, "Empty Case");
}
