use super::*;
use crate::position::RoleClass;
use crate::record::StatRecord;
use crate::scores;

fn assess_record(r: &StatRecord) -> RiskResult {
    let p = NormalizedProfile::from_record(r);
    let s = scores::compute(&p, RoleClass::Wing);
    assess(&p, &s)
}

#[test]
fn test_empty_record_is_baseline_five() {
    let result = assess_record(&StatRecord::for_tests("Unknown Quantity", "F"));
    assert_eq!(result.score, 5, "no data moves nothing off the base");
    assert!(result.bust_clusters.is_empty());
    assert!(result.sleeper_clusters.is_empty());
    assert_eq!(result.label, "Moderate Risk");
}

#[test]
fn test_defensive_immobility_cluster() {
    let mut r = StatRecord::for_tests("Statue Scorer", "G");
    r.usg = Some(27.0);
    r.stl_p = Some(0.9);
    r.blk_p = Some(0.4);
    let result = assess_record(&r);
    assert!(result.bust_clusters.contains(&"Defensive Immobility"));
    assert_eq!(result.score, 7, "base 5 + one cluster");
}

#[test]
fn test_cluster_needs_all_conditions() {
    // Missing block data: the immobility cluster cannot trigger on a
    // partial match.
    let mut r = StatRecord::for_tests("Partial Data", "G");
    r.usg = Some(27.0);
    r.stl_p = Some(0.9);
    let result = assess_record(&r);
    assert!(result.bust_clusters.is_empty(), "unknowns never trigger clusters");
}

#[test]
fn test_stacked_busts_with_ft_modifier() {
    let mut r = StatRecord::for_tests("Red Flag Pile", "F");
    r.usg = Some(30.0);
    r.ts = Some(49.0);
    r.stl_p = Some(0.8);
    r.blk_p = Some(0.5);
    r.age = Some(23.0);
    r.bpm = Some(3.0);
    r.ft_pct = Some(58.0);
    let result = assess_record(&r);
    assert_eq!(result.bust_clusters.len(), 3, "all three clusters fire");
    // 5 + 6 + 1 = 12, clamped to the ceiling.
    assert_eq!(result.score, 10);
    assert_eq!(result.label, "High Bust Risk");
}

#[test]
fn test_sleeper_profile_floors_at_one() {
    let mut r = StatRecord::for_tests("Hidden Gem", "F");
    r.age = Some(19.0);
    r.ts = Some(64.0);
    r.stl_p = Some(2.4);
    r.blk_p = Some(2.2);
    r.usg = Some(16.0);
    r.ft_pct = Some(84.0);
    r.bpm = Some(8.5);
    let result = assess_record(&r);
    assert_eq!(result.sleeper_clusters.len(), 3);
    // 5 - 4.5 - 1 (BPM) = -0.5, clamped up to 1.
    assert_eq!(result.score, 1);
    assert_eq!(result.label, "Sleeper / Safe");
}

#[test]
fn test_feel_modifier() {
    let mut r = StatRecord::for_tests("High Feel", "G");
    r.pctl_ast_tov = Some(98.0);
    r.pctl_to = Some(5.0);
    r.pctl_ftr = Some(85.0);
    r.pctl_orb = Some(70.0);
    r.pctl_stl = Some(85.0);
    r.pctl_blk = Some(70.0);
    r.pctl_foul = Some(10.0);
    let p = NormalizedProfile::from_record(&r);
    let s = scores::compute(&p, RoleClass::Playmaker);
    assert!(s.feel > 75.0, "setup requires feel > 75, got {}", s.feel);
    let result = assess(&p, &s);
    assert_eq!(result.score, 4, "base 5 minus the feel credit");
}

#[test]
fn test_risk_labels() {
    assert_eq!(risk_label(10), "High Bust Risk");
    assert_eq!(risk_label(8), "High Bust Risk");
    assert_eq!(risk_label(7), "Elevated Risk");
    assert_eq!(risk_label(6), "Elevated Risk");
    assert_eq!(risk_label(5), "Moderate Risk");
    assert_eq!(risk_label(4), "Moderate Risk");
    assert_eq!(risk_label(3), "Sleeper / Safe");
    assert_eq!(risk_label(1), "Sleeper / Safe");
}

#[test]
fn test_half_point_rounding() {
    // One sleeper cluster only: 5 - 1.5 = 3.5 rounds away from zero to 4.
    let mut r = StatRecord::for_tests("Young Gun", "G");
    r.age = Some(19.5);
    r.ts = Some(61.0);
    let result = assess_record(&r);
    assert_eq!(result.sleeper_clusters, vec!["Teenage Efficiency"]);
    assert_eq!(result.score, 4);
}
