//! Swing-skill and tier-delta analysis.
//!
//! First the current production tier, from an ordered ladder of
//! BPM/usage/efficiency guards (top rung checked first, first match
//! wins). Then the swing skill: the one weak high-leverage skill most
//! likely to change the outcome tier. Candidates are gated by size
//! bucket, each carrying a leverage multiplier; the largest gap times
//! leverage wins. Hit probability starts at a 30% base and climbs with a
//! touch proxy, youth and feel, capped at 85%.

use serde::Serialize;

use crate::position::SizeBucket;
use crate::scale::NormalizedProfile;
use crate::scores::ScoreSet;

/// Production tiers, best first. The ladder is descended in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Tier {
    Franchise,
    AllStarPotential,
    Starter,
    RotationSpecialist,
    DepthBust,
}

impl Tier {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Franchise => "Franchise",
            Self::AllStarPotential => "All-Star Potential",
            Self::Starter => "Starter",
            Self::RotationSpecialist => "Rotation/Specialist",
            Self::DepthBust => "Depth/Bust",
        }
    }
}

fn ge(v: Option<f64>, t: f64) -> bool {
    v.is_some_and(|v| v >= t)
}

/// First qualifying rung from the top wins; missing data falls through.
pub fn current_tier(p: &NormalizedProfile) -> Tier {
    if ge(p.bpm, 9.0) && ge(p.usg, 26.0) && ge(p.ts, 58.0) {
        Tier::Franchise
    } else if ge(p.bpm, 7.0) && ge(p.usg, 22.0) {
        Tier::AllStarPotential
    } else if ge(p.bpm, 4.5) && ge(p.ts, 54.0) {
        Tier::Starter
    } else if ge(p.bpm, 2.0) {
        Tier::RotationSpecialist
    } else {
        Tier::DepthBust
    }
}

/// Hit-probability bounds and bumps.
const HIT_BASE: f64 = 30.0;
const HIT_CAP: f64 = 85.0;
const HIT_TOUCH_BONUS: f64 = 20.0;
const HIT_YOUTH_BONUS: f64 = 15.0;
const HIT_FEEL_BONUS: f64 = 10.0;
const YOUTH_AGE: f64 = 21.0;
const FEEL_FLOOR: f64 = 65.0;

struct Candidate {
    skill: &'static str,
    gap: f64,
    multiplier: f64,
    /// FT% above this reads as touch: the skill is learnable.
    touch_threshold: f64,
    current: String,
    floor_note: &'static str,
    ceiling_note: &'static str,
}

/// Per-bucket candidate list. A gap only becomes a candidate past its
/// minimum; small gaps are noise, not swing skills.
fn candidates(p: &NormalizedProfile, bucket: SizeBucket, scores: &ScoreSet) -> Vec<Candidate> {
    let mut out = Vec::new();

    if bucket != SizeBucket::Big {
        let gap = 70.0 - scores.shooting;
        if gap > 10.0 {
            out.push(Candidate {
                skill: "Shooting",
                gap,
                multiplier: 1.5,
                touch_threshold: 75.0,
                current: format!(
                    "Shooting score {:.0} (FT {}, 3P {})",
                    scores.shooting,
                    fmt_pct(p.ft_pct),
                    fmt_pct(p.tp_pct)
                ),
                floor_note: "Defenses sag off and the driving lanes close",
                ceiling_note: "Becomes a real three-level threat defenses must chase",
            });
        }
    }

    if bucket == SizeBucket::Guard {
        let gap = 70.0 - scores.feel;
        if gap > 15.0 {
            out.push(Candidate {
                skill: "Decision-Making",
                gap,
                multiplier: 1.2,
                touch_threshold: 70.0,
                current: format!("Feel score {:.0} (AST/TO {})", scores.feel, fmt_ratio(p.ast_tov)),
                floor_note: "Stays a scoring reserve who can't be trusted to run an offense",
                ceiling_note: "Grows into a lead guard who controls the game",
            });
        }
    }

    if bucket == SizeBucket::Big {
        let gap = 70.0 - scores.defense;
        if gap > 10.0 {
            out.push(Candidate {
                skill: "Rim Protection",
                gap,
                multiplier: 1.3,
                touch_threshold: 60.0,
                current: format!(
                    "Defense score {:.0} (BLK% {})",
                    scores.defense,
                    fmt_pct(p.blk_pct)
                ),
                floor_note: "A big who protects nothing has no NBA floor",
                ceiling_note: "Anchors a defense and never leaves the rotation",
            });
        }
    }

    if bucket != SizeBucket::Guard {
        let gap = 65.0 - scores.func_ath;
        if gap > 12.0 {
            out.push(Candidate {
                skill: "Functional Athleticism",
                gap,
                multiplier: 1.1,
                touch_threshold: 65.0,
                current: format!(
                    "Athleticism score {:.0} (dunk rate {})",
                    scores.func_ath,
                    fmt_pct(p.dunk_rate)
                ),
                floor_note: "Physical tools cap the defensive versatility",
                ceiling_note: "Finishing and switchability both jump a level",
            });
        }
    }

    if bucket != SizeBucket::Big {
        let gap = 60.0 - scores.self_creation;
        if gap > 15.0 {
            out.push(Candidate {
                skill: "Self-Creation",
                gap,
                multiplier: 1.0,
                touch_threshold: 78.0,
                current: format!("Self-creation index {:.0}", scores.self_creation),
                floor_note: "Forever dependent on someone else's gravity",
                ceiling_note: "Adds the ability to get his own bucket late in the clock",
            });
        }
    }

    out
}

#[derive(Debug, Clone, Serialize)]
pub struct SwingSkillResult {
    pub skill: &'static str,
    /// Estimated tiers of movement if the skill develops.
    pub tier_delta: f64,
    pub current: String,
    pub floor_outcome: &'static str,
    pub ceiling_outcome: &'static str,
    /// Integer percentage in [30, 85].
    pub hit_probability: u8,
    pub hit_label: &'static str,
}

pub fn hit_label(probability: u8) -> &'static str {
    if probability >= 65 {
        "Likely Hits"
    } else if probability >= 45 {
        "Coinflip"
    } else {
        "Unlikely"
    }
}

/// Pick the largest gap x leverage candidate; `None` when no gap clears
/// its threshold (a polished player has no single swing skill).
pub fn analyze(
    p: &NormalizedProfile,
    bucket: SizeBucket,
    scores: &ScoreSet,
) -> Option<SwingSkillResult> {
    let best = candidates(p, bucket, scores)
        .into_iter()
        .max_by(|a, b| {
            (a.gap * a.multiplier)
                .partial_cmp(&(b.gap * b.multiplier))
                .unwrap_or(std::cmp::Ordering::Equal)
        })?;

    let tier_delta = ((best.gap / 100.0) * best.multiplier * 10.0).round() / 10.0;

    let mut probability = HIT_BASE;
    if p.ft_pct.is_some_and(|ft| ft > best.touch_threshold) {
        probability += HIT_TOUCH_BONUS;
    }
    if p.age.is_some_and(|a| a < YOUTH_AGE) {
        probability += HIT_YOUTH_BONUS;
    }
    if scores.feel > FEEL_FLOOR {
        probability += HIT_FEEL_BONUS;
    }
    let probability = probability.min(HIT_CAP).round() as u8;

    Some(SwingSkillResult {
        skill: best.skill,
        tier_delta,
        current: best.current,
        floor_outcome: best.floor_note,
        ceiling_outcome: best.ceiling_note,
        hit_probability: probability,
        hit_label: hit_label(probability),
    })
}

fn fmt_pct(v: Option<f64>) -> String {
    match v {
        Some(v) => format!("{v:.0}%"),
        None => "—".to_string(),
    }
}

fn fmt_ratio(v: Option<f64>) -> String {
    match v {
        Some(v) => format!("{v:.1}"),
        None => "—".to_string(),
    }
}

#[cfg(test)]
#[path = "swing_test.rs"]
mod tests;
