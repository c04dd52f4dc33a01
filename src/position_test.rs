use super::*;
use crate::record::StatRecord;

fn profile(height: Option<f64>, ast: Option<f64>, reb: Option<f64>, blk: Option<f64>) -> NormalizedProfile {
    let mut r = StatRecord::for_tests("Bucket Case", "G");
    r.height_in = height;
    r.ast_p = ast;
    r.drb_p = reb;
    r.blk_p = blk;
    NormalizedProfile::from_record(&r)
}

#[test]
fn test_short_player_is_guard() {
    // Scenario: 74in with big steal numbers is still a Guard on height alone.
    let b = size_bucket(&profile(Some(74.0), None, None, None));
    assert_eq!(b, SizeBucket::Guard);
}

#[test]
fn test_mid_height_distributor_is_guard() {
    let b = size_bucket(&profile(Some(77.0), Some(24.0), None, None));
    assert_eq!(b, SizeBucket::Guard, "6'5\" with 24 AST% plays Guard");
}

#[test]
fn test_mid_height_non_distributor_is_wing() {
    let b = size_bucket(&profile(Some(77.0), Some(10.0), None, None));
    assert_eq!(b, SizeBucket::Wing);
}

#[test]
fn test_tall_player_is_big() {
    let b = size_bucket(&profile(Some(82.0), None, None, None));
    assert_eq!(b, SizeBucket::Big);
}

#[test]
fn test_borderline_big_needs_rebounding() {
    let without = size_bucket(&profile(Some(80.5), None, Some(10.0), None));
    let with = size_bucket(&profile(Some(80.5), None, Some(18.0), None));
    assert_eq!(without, SizeBucket::Wing);
    assert_eq!(with, SizeBucket::Big);
}

#[test]
fn test_missing_height_is_wing() {
    let b = size_bucket(&profile(None, Some(25.0), Some(20.0), None));
    assert_eq!(b, SizeBucket::Wing, "no height data defaults to Wing");
}

#[test]
fn test_size_bucket_exhaustive_grid() {
    // Every (height, assist%, rebound%) combination lands in exactly one
    // bucket; the enum return makes overlap impossible, so this guards
    // against panics and asserts the expected regions.
    let mut h = 66.0;
    while h <= 90.0 {
        let mut a = 0.0;
        while a <= 40.0 {
            let mut r = 0.0;
            while r <= 30.0 {
                let b = size_bucket(&profile(Some(h), Some(a), Some(r), None));
                if h < 76.0 {
                    assert_eq!(b, SizeBucket::Guard, "h={h} a={a} r={r}");
                }
                if h > 81.0 {
                    assert_eq!(b, SizeBucket::Big, "h={h} a={a} r={r}");
                }
                r += 2.5;
            }
            a += 2.5;
        }
        h += 0.5;
    }
}

#[test]
fn test_role_class_big_by_height() {
    assert_eq!(role_class(&profile(Some(83.0), None, None, None)), RoleClass::Big);
}

#[test]
fn test_role_class_big_by_rim_protection() {
    // 6'8" shot-blocker classifies Big for threshold purposes.
    let c = role_class(&profile(Some(80.0), None, None, Some(6.0)));
    assert_eq!(c, RoleClass::Big);
}

#[test]
fn test_role_class_playmaker_by_creation() {
    assert_eq!(role_class(&profile(Some(78.0), Some(22.0), None, None)), RoleClass::Playmaker);
}

#[test]
fn test_role_class_small_secondary_creator() {
    let c = role_class(&profile(Some(75.0), Some(16.0), None, None));
    assert_eq!(c, RoleClass::Playmaker, "6'3\" with 16 AST% runs offense");
}

#[test]
fn test_role_class_default_wing() {
    assert_eq!(role_class(&profile(Some(79.0), Some(10.0), None, None)), RoleClass::Wing);
}

#[test]
fn test_schemes_disagree_on_blocking_wing() {
    // The two schemes intentionally classify this player differently.
    let p = profile(Some(80.0), Some(8.0), Some(12.0), Some(5.5));
    assert_eq!(size_bucket(&p), SizeBucket::Wing);
    assert_eq!(role_class(&p), RoleClass::Big);
}
