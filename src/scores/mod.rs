//! Composite scouting scores.
//!
//! Each score is a fixed weighted sum of percentile terms plus, in a few
//! places, threshold-gated bonuses. The percentile-weighted portion of
//! every score sums to 1.0 before bonuses; bonuses are additive and only
//! capped where stated. Outputs are deliberately not clamped to [0, 100]
//! after bonuses: display layers clamp, downstream analysis (tier deltas)
//! reads the true value.
//!
//! A term's percentile comes from the supplied rank when the dataset has
//! one, otherwise it is derived from the raw statistic against historical
//! norms, otherwise it is the neutral median (50).

pub mod four_factors;

use serde::Serialize;

use crate::position::RoleClass;
use crate::quantile::{self, RawStat};
use crate::scale::NormalizedProfile;

use four_factors::FourFactorRating;

// ─── Feel / IQ ───────────────────────────────────────────────────────
// Decision-making proxies: ball security relative to creation volume,
// event creation, foul discipline, drawing contact.
const FEEL_W_AST_TOV: f64 = 0.30;
const FEEL_W_STOCKS: f64 = 0.20;
const FEEL_W_FOUL: f64 = 0.15;
const FEEL_W_FTR: f64 = 0.15;
const FEEL_W_ORB: f64 = 0.10;
const FEEL_W_TO: f64 = 0.10;

// ─── Functional athleticism ──────────────────────────────────────────
// How athletic gifts show up in games, not raw combine numbers.
const ATH_W_FTR: f64 = 0.25;
const ATH_W_DUNK: f64 = 0.20;
const ATH_W_DRB: f64 = 0.15;
const ATH_W_STOCKS: f64 = 0.20;
const ATH_W_RIM: f64 = 0.20;

// ─── Shooting ────────────────────────────────────────────────────────
// FT% weighted highest: the best single predictor of NBA shooting
// translation.
const SHOOT_W_FT: f64 = 0.30;
const SHOOT_W_TP: f64 = 0.25;
const SHOOT_W_TS: f64 = 0.20;
const SHOOT_W_MID: f64 = 0.15;
const SHOOT_W_FREQ: f64 = 0.10;

// ─── Defense ─────────────────────────────────────────────────────────
// Steal and block weights shift with role class; the pair always totals
// 0.45 so the whole set sums to 1.0.
const DEF_W_DBPM: f64 = 0.30;
const DEF_W_DRB: f64 = 0.15;
const DEF_W_FOUL: f64 = 0.10;

// ─── Overall / floor / ceiling ───────────────────────────────────────
const OVR_W_PROD: f64 = 0.35;
const OVR_W_FEEL: f64 = 0.15;
const OVR_W_ATH: f64 = 0.15;
const OVR_W_SHOOT: f64 = 0.20;
const OVR_W_DEF: f64 = 0.15;

const FLOOR_W_FT: f64 = 0.35;
const FLOOR_W_DRB: f64 = 0.20;
const FLOOR_W_AST_TOV: f64 = 0.25;
const FLOOR_W_HEIGHT: f64 = 0.20;

const CEIL_W_PROD: f64 = 0.45;
const CEIL_W_ATH: f64 = 0.30;
const CEIL_W_SHOOT: f64 = 0.25;

/// Production is age-adjusted before weighting: BPM - (age-20)*0.5,
/// expressed in percentile space at 5 percentile points per BPM point.
const AGE_PIVOT: f64 = 20.0;
const BPM_PENALTY_PER_YEAR: f64 = 0.5;
const PCTL_PER_BPM: f64 = 5.0;

/// Height-for-position bonus on Overall: +1.5 per inch over the class
/// average, capped at +10. Wingspan: +1 per inch of positive delta,
/// capped at +8.
const HEIGHT_BONUS_PER_IN: f64 = 1.5;
const HEIGHT_BONUS_CAP: f64 = 10.0;
const WINGSPAN_BONUS_PER_IN: f64 = 1.0;
const WINGSPAN_BONUS_CAP: f64 = 8.0;

/// The full composite output for one player. Read-only to later stages.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreSet {
    pub feel: f64,
    pub func_ath: f64,
    pub shooting: f64,
    pub defense: f64,
    pub overall: f64,
    pub floor: f64,
    pub ceiling: f64,
    pub self_creation: f64,
    pub proj_nba_3p: f64,
    pub proj_nba_3pa: f64,
    pub proj_nba_3par: f64,
    pub proj_nba_ts: f64,
    pub four_factors: FourFactorRating,
}

/// Compute every composite score for one profile.
pub fn compute(p: &NormalizedProfile, class: RoleClass) -> ScoreSet {
    let feel = feel_score(p);
    let func_ath = athleticism_score(p, class);
    let shooting = shooting_score(p);
    let defense = defense_score(p, class);

    ScoreSet {
        overall: overall_score(p, class, feel, func_ath, shooting, defense),
        floor: floor_score(p),
        ceiling: ceiling_score(p, func_ath, shooting),
        self_creation: self_creation_index(p),
        proj_nba_3p: projected_3p(p),
        proj_nba_3pa: projected_3pa(p),
        proj_nba_3par: projected_3par(p),
        proj_nba_ts: projected_ts(p),
        four_factors: four_factors::rate(p),
        feel,
        func_ath,
        shooting,
        defense,
    }
}

fn term(pctl: Option<f64>, stat: RawStat, raw: Option<f64>) -> f64 {
    quantile::percentile(pctl, stat, raw)
}

/// Combined steal+block percentile. Averages the supplied ranks when both
/// exist; otherwise derives from the raw stocks total.
fn stocks_percentile(p: &NormalizedProfile) -> f64 {
    match (p.pctl.stl, p.pctl.blk) {
        (Some(s), Some(b)) => (s + b) / 2.0,
        _ => {
            let raw = match (p.stl_pct, p.blk_pct) {
                (None, None) => None,
                (s, b) => Some(s.unwrap_or(0.0) + b.unwrap_or(0.0)),
            };
            term(None, RawStat::Stocks, raw)
        }
    }
}

/// Foul discipline: fewer fouls = higher percentile.
fn foul_discipline(p: &NormalizedProfile) -> f64 {
    100.0 - term(p.pctl.foul, RawStat::FoulRate, p.foul_per_40)
}

/// Turnover control: lower turnover rate = higher percentile.
fn turnover_control(p: &NormalizedProfile) -> f64 {
    100.0 - term(p.pctl.to, RawStat::ToPct, p.to_pct)
}

pub fn feel_score(p: &NormalizedProfile) -> f64 {
    let base = term(p.pctl.ast_tov, RawStat::AstTov, p.ast_tov) * FEEL_W_AST_TOV
        + stocks_percentile(p) * FEEL_W_STOCKS
        + foul_discipline(p) * FEEL_W_FOUL
        + term(p.pctl.ftr, RawStat::FtRate, p.ftr) * FEEL_W_FTR
        + term(p.pctl.orb, RawStat::OrbPct, p.orb_pct) * FEEL_W_ORB
        + turnover_control(p) * FEEL_W_TO;
    base + feel_usage_bonus(p)
}

/// +5 for carrying a heavy load without turnovers, -5 for coughing it up
/// on a light one.
fn feel_usage_bonus(p: &NormalizedProfile) -> f64 {
    let heavy = p.usg.is_some_and(|u| u > 25.0) && p.to_pct.is_some_and(|t| t < 16.0);
    let sloppy = p.usg.is_some_and(|u| u < 15.0) && p.to_pct.is_some_and(|t| t > 20.0);
    if heavy {
        5.0
    } else if sloppy {
        -5.0
    } else {
        0.0
    }
}

pub fn athleticism_score(p: &NormalizedProfile, class: RoleClass) -> f64 {
    let base = term(p.pctl.ftr, RawStat::FtRate, p.ftr) * ATH_W_FTR
        + term(p.pctl.dunk, RawStat::DunkRate, p.dunk_rate) * ATH_W_DUNK
        + term(p.pctl.drb, RawStat::DrbPct, p.drb_pct) * ATH_W_DRB
        + stocks_percentile(p) * ATH_W_STOCKS
        + term(p.pctl.rim_freq, RawStat::RimFreq, p.rim_freq) * ATH_W_RIM;
    base + combine_bonus(p, class)
}

/// Per-class three-rung drill ladders [average, above-average, elite].
/// Timed drills are inverted (faster clears the rung).
struct DrillLadder {
    rungs: [f64; 3],
    lower_is_better: bool,
}

fn vert_ladder(class: RoleClass) -> DrillLadder {
    let rungs = match class {
        RoleClass::Big => [30.0, 34.0, 38.0],
        RoleClass::Wing => [33.0, 37.0, 41.0],
        RoleClass::Playmaker => [34.0, 38.0, 42.0],
    };
    DrillLadder { rungs, lower_is_better: false }
}

fn sprint_ladder(class: RoleClass) -> DrillLadder {
    let rungs = match class {
        RoleClass::Big => [3.45, 3.30, 3.15],
        RoleClass::Wing => [3.35, 3.22, 3.10],
        RoleClass::Playmaker => [3.30, 3.18, 3.05],
    };
    DrillLadder { rungs, lower_is_better: true }
}

fn lane_ladder(class: RoleClass) -> DrillLadder {
    let rungs = match class {
        RoleClass::Big => [11.8, 11.2, 10.6],
        RoleClass::Wing => [11.2, 10.7, 10.2],
        RoleClass::Playmaker => [11.0, 10.5, 10.0],
    };
    DrillLadder { rungs, lower_is_better: true }
}

fn drill_bonus(v: Option<f64>, ladder: &DrillLadder) -> f64 {
    let Some(v) = v else { return 0.0 };
    let clears = |rung: f64| {
        if ladder.lower_is_better { v <= rung } else { v >= rung }
    };
    if clears(ladder.rungs[2]) {
        3.5
    } else if clears(ladder.rungs[1]) {
        2.0
    } else if clears(ladder.rungs[0]) {
        0.5
    } else {
        0.0
    }
}

/// Combine bonus in [0, 10] where drill data exists; 0 without it.
fn combine_bonus(p: &NormalizedProfile, class: RoleClass) -> f64 {
    let total = drill_bonus(p.vert_max, &vert_ladder(class))
        + drill_bonus(p.sprint_34, &sprint_ladder(class))
        + drill_bonus(p.lane_agility, &lane_ladder(class));
    total.min(10.0)
}

pub fn shooting_score(p: &NormalizedProfile) -> f64 {
    let base = term(p.pctl.ft, RawStat::FtPct, p.ft_pct) * SHOOT_W_FT
        + term(p.pctl.tp, RawStat::ThreePct, p.tp_pct) * SHOOT_W_TP
        + term(p.pctl.ts, RawStat::TrueShooting, p.ts) * SHOOT_W_TS
        + term(p.pctl.mid, RawStat::MidPct, p.mid_pct) * SHOOT_W_MID
        + term(p.pctl.three_freq, RawStat::ThreeFreq, p.three_freq) * SHOOT_W_FREQ;
    base + volume_bonus(p.tpa_per_g)
}

/// +5 above 5 attempts per game, +3 above 3.
fn volume_bonus(tpa_per_g: Option<f64>) -> f64 {
    match tpa_per_g {
        Some(a) if a > 5.0 => 5.0,
        Some(a) if a > 3.0 => 3.0,
        _ => 0.0,
    }
}

pub fn defense_score(p: &NormalizedProfile, class: RoleClass) -> f64 {
    let (w_stl, w_blk) = match class {
        RoleClass::Playmaker => (0.25, 0.20),
        RoleClass::Wing => (0.225, 0.225),
        RoleClass::Big => (0.20, 0.25),
    };
    let base = term(None, RawStat::Dbpm, p.dbpm) * DEF_W_DBPM
        + term(p.pctl.stl, RawStat::StlPct, p.stl_pct) * w_stl
        + term(p.pctl.blk, RawStat::BlkPct, p.blk_pct) * w_blk
        + term(p.pctl.drb, RawStat::DrbPct, p.drb_pct) * DEF_W_DRB
        + foul_discipline(p) * DEF_W_FOUL;
    base + stocks_threshold_bonus(p)
}

/// +8 for elite steals and blocks together, +4 for either alone.
fn stocks_threshold_bonus(p: &NormalizedProfile) -> f64 {
    let stl = p.stl_pct.is_some_and(|s| s > 2.0);
    let blk = p.blk_pct.is_some_and(|b| b > 3.0);
    if stl && blk {
        8.0
    } else if stl || blk {
        4.0
    } else {
        0.0
    }
}

/// Age-adjusted production percentile: the BPM rank shifted by the age
/// penalty. Symmetric: a 19-year-old gains what a 22-year-old loses.
pub fn production_percentile(p: &NormalizedProfile) -> f64 {
    let base = term(p.pctl.bpm, RawStat::Bpm, p.bpm);
    match p.age {
        Some(age) => {
            let shift = (age - AGE_PIVOT) * BPM_PENALTY_PER_YEAR * PCTL_PER_BPM;
            (base - shift).clamp(0.0, 100.0)
        }
        None => base,
    }
}

fn height_bonus(p: &NormalizedProfile, class: RoleClass) -> f64 {
    let avg = match class {
        RoleClass::Playmaker => 75.0,
        RoleClass::Wing => 78.5,
        RoleClass::Big => 82.0,
    };
    match p.height_in {
        Some(h) if h > avg => ((h - avg) * HEIGHT_BONUS_PER_IN).min(HEIGHT_BONUS_CAP),
        _ => 0.0,
    }
}

fn wingspan_bonus(p: &NormalizedProfile) -> f64 {
    match p.ws_delta {
        Some(d) if d > 0.0 => (d * WINGSPAN_BONUS_PER_IN).min(WINGSPAN_BONUS_CAP),
        _ => 0.0,
    }
}

pub fn overall_score(
    p: &NormalizedProfile,
    class: RoleClass,
    feel: f64,
    func_ath: f64,
    shooting: f64,
    defense: f64,
) -> f64 {
    production_percentile(p) * OVR_W_PROD
        + feel * OVR_W_FEEL
        + func_ath * OVR_W_ATH
        + shooting * OVR_W_SHOOT
        + defense * OVR_W_DEF
        + height_bonus(p, class)
        + wingspan_bonus(p)
}

/// What keeps a player in the league: free throws, defensive rebounding,
/// decisions, size.
pub fn floor_score(p: &NormalizedProfile) -> f64 {
    term(p.pctl.ft, RawStat::FtPct, p.ft_pct) * FLOOR_W_FT
        + term(p.pctl.drb, RawStat::DrbPct, p.drb_pct) * FLOOR_W_DRB
        + term(p.pctl.ast_tov, RawStat::AstTov, p.ast_tov) * FLOOR_W_AST_TOV
        + term(p.pctl.height, RawStat::Height, p.height_in) * FLOOR_W_HEIGHT
}

pub fn ceiling_score(p: &NormalizedProfile, func_ath: f64, shooting: f64) -> f64 {
    production_percentile(p) * CEIL_W_PROD + func_ath * CEIL_W_ATH + shooting * CEIL_W_SHOOT
}

/// (USG/100) * (1 - AST%/100) * 200: how much offense is self-created
/// rather than assisted. 0–100 by construction.
pub fn self_creation_index(p: &NormalizedProfile) -> f64 {
    let usg = p.usg.unwrap_or(0.0);
    let ast = p.ast_pct.unwrap_or(0.0);
    ((usg / 100.0) * (1.0 - ast / 100.0) * 200.0).clamp(0.0, 100.0)
}

fn projected_3p(p: &NormalizedProfile) -> f64 {
    let tp = p.tp_pct.unwrap_or(0.0);
    let ft = p.ft_pct.unwrap_or(0.0);
    let mid = p.mid_pct.unwrap_or(0.0);
    (0.35 * tp + 0.25 * ft + 0.15 * mid + 5.0).clamp(20.0, 50.0)
}

fn projected_3pa(p: &NormalizedProfile) -> f64 {
    let tpa = p.tpa_per_g.unwrap_or(0.0);
    let ft = p.ft_pct.unwrap_or(0.0);
    // Good FT shooters get coached into more attempts: +0.5 per 5 points
    // above 75. The flat +1.5 is the modern-era spacing effect.
    let ft_bonus = if ft > 75.0 { (ft - 75.0) / 5.0 * 0.5 } else { 0.0 };
    tpa * 1.2 + ft_bonus + 1.5
}

fn projected_3par(p: &NormalizedProfile) -> f64 {
    let freq = p.three_freq.unwrap_or(0.0);
    let ft = p.ft_pct.unwrap_or(0.0);
    let ft_bonus = if ft > 75.0 { (ft - 75.0) * 0.3 } else { 0.0 };
    freq * 0.8 + ft_bonus + 5.0
}

fn projected_ts(p: &NormalizedProfile) -> f64 {
    let ts = p.ts.unwrap_or(0.0);
    let ft = p.ft_pct.unwrap_or(0.0);
    let tp = p.tp_pct.unwrap_or(0.0);
    (0.50 * ts + 0.25 * ft + 0.10 * tp + 10.0).clamp(40.0, 70.0)
}

/// Every percentile-weighted portion must sum to 1.0; checked at startup.
pub(crate) fn validate_weights() -> Result<(), String> {
    let sums = [
        ("feel", FEEL_W_AST_TOV + FEEL_W_STOCKS + FEEL_W_FOUL + FEEL_W_FTR + FEEL_W_ORB + FEEL_W_TO),
        ("athleticism", ATH_W_FTR + ATH_W_DUNK + ATH_W_DRB + ATH_W_STOCKS + ATH_W_RIM),
        ("shooting", SHOOT_W_FT + SHOOT_W_TP + SHOOT_W_TS + SHOOT_W_MID + SHOOT_W_FREQ),
        ("defense (playmaker)", DEF_W_DBPM + DEF_W_DRB + DEF_W_FOUL + 0.25 + 0.20),
        ("defense (wing)", DEF_W_DBPM + DEF_W_DRB + DEF_W_FOUL + 0.225 + 0.225),
        ("defense (big)", DEF_W_DBPM + DEF_W_DRB + DEF_W_FOUL + 0.20 + 0.25),
        ("overall", OVR_W_PROD + OVR_W_FEEL + OVR_W_ATH + OVR_W_SHOOT + OVR_W_DEF),
        ("floor", FLOOR_W_FT + FLOOR_W_DRB + FLOOR_W_AST_TOV + FLOOR_W_HEIGHT),
        ("ceiling", CEIL_W_PROD + CEIL_W_ATH + CEIL_W_SHOOT),
    ];
    for (name, sum) in sums {
        if (sum - 1.0).abs() > 1e-9 {
            return Err(format!("{name} weights sum to {sum}, expected 1.0"));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
