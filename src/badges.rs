//! Skill badges and red flags.
//!
//! Fifteen independent boolean rules, each gated first by the size bucket
//! (Guard/Wing/Big) where the rule only makes sense for one. A badge
//! fires or it doesn't (no partial credit), and the lists are strictly
//! additive, so evaluation order is irrelevant.

use serde::Serialize;

use crate::position::SizeBucket;
use crate::scale::NormalizedProfile;
use crate::scores::ScoreSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeKind {
    Green,
    Red,
}

pub struct BadgeRule {
    pub name: &'static str,
    pub kind: BadgeKind,
    /// Buckets the rule applies to; `None` means everyone.
    pub buckets: Option<&'static [SizeBucket]>,
    /// Human-readable qualification criteria, shown in reports.
    pub rule: &'static str,
    pub fires: fn(&Ctx) -> bool,
}

pub struct Ctx<'a> {
    pub p: &'a NormalizedProfile,
    pub bucket: SizeBucket,
    pub scores: &'a ScoreSet,
}

fn gt(v: Option<f64>, t: f64) -> bool {
    v.is_some_and(|v| v > t)
}

fn lt(v: Option<f64>, t: f64) -> bool {
    v.is_some_and(|v| v < t)
}

fn ge(v: Option<f64>, t: f64) -> bool {
    v.is_some_and(|v| v >= t)
}

pub static BADGES: &[BadgeRule] = &[
    BadgeRule {
        name: "Floor General Spacer",
        kind: BadgeKind::Green,
        buckets: None,
        rule: "3P% > 35 AND AST% > 20",
        fires: |c| gt(c.p.tp_pct, 35.0) && gt(c.p.ast_pct, 20.0),
    },
    BadgeRule {
        name: "Stretch Big",
        kind: BadgeKind::Green,
        buckets: None,
        rule: "Height >= 6'8\" AND 3P Freq > 25% AND 3P% > 32",
        fires: |c| ge(c.p.height_in, 80.0) && gt(c.p.three_freq, 25.0) && gt(c.p.tp_pct, 32.0),
    },
    BadgeRule {
        name: "High Feel Athlete",
        kind: BadgeKind::Green,
        buckets: None,
        rule: "Func Athleticism > 70 AND Feel > 70",
        fires: |c| c.scores.func_ath > 70.0 && c.scores.feel > 70.0,
    },
    BadgeRule {
        name: "3-and-D",
        kind: BadgeKind::Green,
        buckets: None,
        rule: "3P% > 33 AND STL% > 2.0 AND Dunk% > 5",
        fires: |c| gt(c.p.tp_pct, 33.0) && gt(c.p.stl_pct, 2.0) && gt(c.p.dunk_rate, 5.0),
    },
    BadgeRule {
        name: "Rim Pressure",
        kind: BadgeKind::Green,
        buckets: None,
        rule: "Rim Freq > 30% AND Dunk% > 10 AND FTR > 35",
        fires: |c| gt(c.p.rim_freq, 30.0) && gt(c.p.dunk_rate, 10.0) && gt(c.p.ftr, 35.0),
    },
    BadgeRule {
        name: "Modern Big",
        kind: BadgeKind::Green,
        buckets: Some(&[SizeBucket::Big]),
        rule: "Big with BLK% > 4.0 AND AST% > 12",
        fires: |c| gt(c.p.blk_pct, 4.0) && gt(c.p.ast_pct, 12.0),
    },
    BadgeRule {
        name: "Efficient High Usage",
        kind: BadgeKind::Green,
        buckets: None,
        rule: "USG > 28 AND TO% < 15",
        fires: |c| gt(c.p.usg, 28.0) && lt(c.p.to_pct, 15.0),
    },
    BadgeRule {
        name: "Elite Shooting",
        kind: BadgeKind::Green,
        buckets: None,
        rule: "FT% > 80 AND 3P% > 36 AND 3P Freq > 30%",
        fires: |c| gt(c.p.ft_pct, 80.0) && gt(c.p.tp_pct, 36.0) && gt(c.p.three_freq, 30.0),
    },
    BadgeRule {
        name: "Stocks Machine",
        kind: BadgeKind::Green,
        buckets: None,
        rule: "STL% > 2.5 AND BLK% > 2.5",
        fires: |c| gt(c.p.stl_pct, 2.5) && gt(c.p.blk_pct, 2.5),
    },
    BadgeRule {
        name: "High TO Wing",
        kind: BadgeKind::Red,
        buckets: Some(&[SizeBucket::Wing]),
        rule: "Wing with TO% > 22",
        fires: |c| gt(c.p.to_pct, 22.0),
    },
    BadgeRule {
        name: "Non-Blocking Big",
        kind: BadgeKind::Red,
        buckets: Some(&[SizeBucket::Big]),
        rule: "Big with BLK% < 2.0",
        fires: |c| lt(c.p.blk_pct, 2.0),
    },
    BadgeRule {
        name: "Poor 3P Shooting Guard",
        kind: BadgeKind::Red,
        buckets: Some(&[SizeBucket::Guard]),
        rule: "Guard with 3P% < 28 AND 3P Freq > 20%",
        fires: |c| lt(c.p.tp_pct, 28.0) && gt(c.p.three_freq, 20.0),
    },
    BadgeRule {
        name: "Low Assist Guard",
        kind: BadgeKind::Red,
        buckets: Some(&[SizeBucket::Guard]),
        rule: "Guard with AST% < 15",
        fires: |c| lt(c.p.ast_pct, 15.0),
    },
    BadgeRule {
        name: "FT Concern",
        kind: BadgeKind::Red,
        buckets: None,
        rule: "FT% < 65 AND USG > 25",
        fires: |c| lt(c.p.ft_pct, 65.0) && gt(c.p.usg, 25.0),
    },
    BadgeRule {
        name: "Undersized",
        kind: BadgeKind::Red,
        buckets: Some(&[SizeBucket::Wing, SizeBucket::Big]),
        rule: "Height < 6'2\" outside the Guard spot",
        fires: |c| lt(c.p.height_in, 74.0),
    },
];

#[derive(Debug, Clone, Serialize)]
pub struct BadgeResult {
    pub green: Vec<&'static str>,
    pub red: Vec<&'static str>,
}

pub fn evaluate(p: &NormalizedProfile, bucket: SizeBucket, scores: &ScoreSet) -> BadgeResult {
    let ctx = Ctx { p, bucket, scores };
    let mut green = Vec::new();
    let mut red = Vec::new();
    for badge in BADGES {
        if let Some(buckets) = badge.buckets
            && !buckets.contains(&bucket)
        {
            continue;
        }
        if (badge.fires)(&ctx) {
            match badge.kind {
                BadgeKind::Green => green.push(badge.name),
                BadgeKind::Red => red.push(badge.name),
            }
        }
    }
    BadgeResult { green, red }
}

/// Bucket gates must never be empty lists (that would silently disable a
/// rule), and badge names must be unique.
pub(crate) fn validate_tables() -> Result<(), String> {
    for badge in BADGES {
        if badge.buckets.is_some_and(|b| b.is_empty()) {
            return Err(format!("badge {:?} gates on an empty bucket list", badge.name));
        }
    }
    for (i, a) in BADGES.iter().enumerate() {
        if BADGES.iter().skip(i + 1).any(|b| b.name == a.name) {
            return Err(format!("duplicate badge name {:?}", a.name));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "badges_test.rs"]
mod tests;
