use super::*;
use crate::position::RoleClass;
use crate::record::StatRecord;
use crate::scores;

fn profile_and_scores(r: &StatRecord) -> (NormalizedProfile, ScoreSet) {
    let p = NormalizedProfile::from_record(r);
    let s = scores::compute(&p, RoleClass::Wing);
    (p, s)
}

#[test]
fn test_tier_ladder_top_down() {
    let mut r = StatRecord::for_tests("Ladder Case", "F");
    r.bpm = Some(10.5);
    r.usg = Some(28.0);
    r.ts = Some(60.0);
    let p = NormalizedProfile::from_record(&r);
    assert_eq!(current_tier(&p), Tier::Franchise);

    // Fails the franchise efficiency guard, lands one rung down.
    r.ts = Some(55.0);
    let p = NormalizedProfile::from_record(&r);
    assert_eq!(current_tier(&p), Tier::AllStarPotential);

    r.bpm = Some(5.0);
    r.ts = Some(56.0);
    let p = NormalizedProfile::from_record(&r);
    assert_eq!(current_tier(&p), Tier::Starter);

    r.bpm = Some(3.0);
    r.ts = Some(50.0);
    let p = NormalizedProfile::from_record(&r);
    assert_eq!(current_tier(&p), Tier::RotationSpecialist);

    r.bpm = Some(0.5);
    let p = NormalizedProfile::from_record(&r);
    assert_eq!(current_tier(&p), Tier::DepthBust);
}

#[test]
fn test_tier_missing_data_is_bottom_rung() {
    let p = NormalizedProfile::from_record(&StatRecord::for_tests("No Tape", "G"));
    assert_eq!(current_tier(&p), Tier::DepthBust);
}

#[test]
fn test_weak_shooter_swings_on_shooting() {
    let mut r = StatRecord::for_tests("Broken Jumper", "F");
    r.pctl_ft = Some(10.0);
    r.pctl_tp = Some(12.0);
    r.pctl_ts = Some(20.0);
    r.pctl_mid = Some(15.0);
    r.pctl_three_freq = Some(10.0);
    let (p, s) = profile_and_scores(&r);
    let swing = analyze(&p, SizeBucket::Wing, &s).expect("large gap should produce a swing skill");
    assert_eq!(swing.skill, "Shooting");
    assert!(swing.tier_delta > 0.5, "big gap at 1.5x leverage, got {}", swing.tier_delta);
}

#[test]
fn test_polished_player_has_no_swing_skill() {
    let mut r = StatRecord::for_tests("Finished Product", "G");
    r.pctl_ft = Some(90.0);
    r.pctl_tp = Some(90.0);
    r.pctl_ts = Some(90.0);
    r.pctl_mid = Some(85.0);
    r.pctl_three_freq = Some(80.0);
    r.pctl_ast_tov = Some(90.0);
    r.pctl_stl = Some(80.0);
    r.pctl_blk = Some(70.0);
    r.pctl_to = Some(10.0);
    r.pctl_ftr = Some(80.0);
    r.pctl_orb = Some(70.0);
    r.pctl_foul = Some(20.0);
    r.usg = Some(28.0);
    r.ast_p = Some(10.0);
    let (p, s) = profile_and_scores(&r);
    assert!(
        analyze(&p, SizeBucket::Guard, &s).is_none(),
        "no gap clears its threshold"
    );
}

#[test]
fn test_guard_decision_gap_gated_by_bucket() {
    // Identical profile: the decision-making candidate exists for a
    // Guard but not for a Wing.
    let mut r = StatRecord::for_tests("Loose Handle", "G");
    r.pctl_ast_tov = Some(5.0);
    r.pctl_to = Some(95.0);
    r.pctl_ft = Some(85.0);
    r.pctl_tp = Some(80.0);
    r.pctl_ts = Some(80.0);
    r.pctl_mid = Some(75.0);
    r.pctl_three_freq = Some(75.0);
    r.usg = Some(24.0);
    r.ast_p = Some(10.0);
    let (p, s) = profile_and_scores(&r);
    let guard = analyze(&p, SizeBucket::Guard, &s);
    assert!(guard.is_some_and(|sw| sw.skill == "Decision-Making"));
}

#[test]
fn test_big_swings_on_rim_protection() {
    let mut r = StatRecord::for_tests("Soft Big", "C");
    r.pctl_blk = Some(15.0);
    r.pctl_stl = Some(20.0);
    r.pctl_drb = Some(30.0);
    r.dbpm = Some(-1.0);
    r.pctl_foul = Some(80.0);
    let p = NormalizedProfile::from_record(&r);
    let s = scores::compute(&p, RoleClass::Big);
    let swing = analyze(&p, SizeBucket::Big, &s).expect("weak interior defense is the swing");
    assert_eq!(swing.skill, "Rim Protection");
}

#[test]
fn test_hit_probability_bounds() {
    // Worst case: no touch, old, low feel. Just the 30% base.
    let mut r = StatRecord::for_tests("Long Shot", "F");
    r.pctl_ft = Some(10.0);
    r.pctl_tp = Some(10.0);
    r.ft_pct = Some(55.0);
    r.age = Some(23.0);
    let (p, s) = profile_and_scores(&r);
    let swing = analyze(&p, SizeBucket::Wing, &s).unwrap();
    assert_eq!(swing.hit_probability, 30);
    assert_eq!(swing.hit_label, "Unlikely");
}

#[test]
fn test_hit_probability_stacks_and_caps() {
    // Touch + youth + feel = 30+20+15+10 = 75, under the 85 cap.
    let mut r = StatRecord::for_tests("Good Bones", "G");
    r.pctl_ft = Some(40.0);
    r.pctl_tp = Some(10.0);
    r.pctl_ts = Some(20.0);
    r.pctl_mid = Some(20.0);
    r.pctl_three_freq = Some(15.0);
    r.ft_pct = Some(82.0);
    r.age = Some(19.2);
    r.pctl_ast_tov = Some(95.0);
    r.pctl_to = Some(8.0);
    r.pctl_ftr = Some(80.0);
    r.pctl_orb = Some(60.0);
    r.pctl_stl = Some(75.0);
    r.pctl_blk = Some(60.0);
    r.pctl_foul = Some(15.0);
    let (p, s) = profile_and_scores(&r);
    assert!(s.feel > 65.0, "setup requires high feel, got {}", s.feel);
    let swing = analyze(&p, SizeBucket::Wing, &s).unwrap();
    assert_eq!(swing.hit_probability, 75);
    assert_eq!(swing.hit_label, "Likely Hits");
}

#[test]
fn test_hit_labels() {
    assert_eq!(hit_label(65), "Likely Hits");
    assert_eq!(hit_label(64), "Coinflip");
    assert_eq!(hit_label(45), "Coinflip");
    assert_eq!(hit_label(44), "Unlikely");
}

#[test]
fn test_tier_delta_formula() {
    let mut r = StatRecord::for_tests("Delta Case", "F");
    r.pctl_ft = Some(0.0);
    r.pctl_tp = Some(0.0);
    r.pctl_ts = Some(0.0);
    r.pctl_mid = Some(0.0);
    r.pctl_three_freq = Some(0.0);
    let (p, s) = profile_and_scores(&r);
    let swing = analyze(&p, SizeBucket::Wing, &s).unwrap();
    // Shooting score 0 → gap 70 → (70/100)*1.5 = 1.05 → 1.1 after rounding.
    let expected = ((70.0 - s.shooting) / 100.0 * 1.5 * 10.0_f64).round() / 10.0;
    assert!(
        (swing.tier_delta - expected).abs() < 1e-9,
        "tier delta should be {expected}, got {}",
        swing.tier_delta
    );
}
