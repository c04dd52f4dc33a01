//! Role-inference matrix.
//!
//! Fourteen role fitness scores on a z scale, clipped to [-3, 3]. Base
//! roles are fixed weighted combinations of statistical z-scores. Hybrid
//! roles use a threshold gate: a player who clears the compound condition
//! scores `1.0 + bounded bonus`; everyone else falls back to the nearest
//! base z minus an offset, so non-qualifiers still get a continuous score.
//!
//! Ranking is descending by z with ties broken by declaration order:
//! offense before defense before hybrid, alphabetical within category.
//! The Elite/Impact/Neutral/Liability banding is a classification
//! contract, not display sugar.

use serde::Serialize;

use crate::quantile::{RawStat, Z_CLIP, z_pref};
use crate::scale::NormalizedProfile;
use crate::scores::ScoreSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleCategory {
    Offense,
    Defense,
    Hybrid,
}

impl RoleCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Offense => "offense",
            Self::Defense => "defense",
            Self::Hybrid => "hybrid",
        }
    }
}

/// Fitness band for a role z-score.
pub fn band(z: f64) -> &'static str {
    if z >= 2.0 {
        "Elite"
    } else if z >= 1.0 {
        "Impact"
    } else if z >= -0.9 {
        "Neutral"
    } else {
        "Liability"
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RoleScore {
    pub name: &'static str,
    pub category: RoleCategory,
    pub z: f64,
    pub label: &'static str,
}

/// All fourteen role scores in canonical declaration order.
#[derive(Debug, Clone, Serialize)]
pub struct RoleMatrix {
    pub entries: Vec<RoleScore>,
}

impl RoleMatrix {
    /// Entries sorted best-first. Declaration order breaks ties, which is
    /// why `entries` is kept in canonical order.
    pub fn ranked(&self) -> Vec<&RoleScore> {
        let mut idx: Vec<usize> = (0..self.entries.len()).collect();
        idx.sort_by(|&a, &b| {
            self.entries[b]
                .z
                .partial_cmp(&self.entries[a].z)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.cmp(&b))
        });
        idx.into_iter().map(|i| &self.entries[i]).collect()
    }

    pub fn dominant(&self) -> &RoleScore {
        self.ranked()[0]
    }

    pub fn secondary(&self) -> &RoleScore {
        self.ranked()[1]
    }
}

fn clip(z: f64) -> f64 {
    (z.clamp(-Z_CLIP, Z_CLIP) * 10.0).round() / 10.0
}

fn gt(v: Option<f64>, t: f64) -> bool {
    v.is_some_and(|v| v > t)
}

fn lt(v: Option<f64>, t: f64) -> bool {
    v.is_some_and(|v| v < t)
}

/// Compute the matrix for one profile. The score set feeds hybrid bonus
/// terms; base roles use only statistical z-scores.
pub fn compute(p: &NormalizedProfile, scores: &ScoreSet) -> RoleMatrix {
    let usage_z = z_pref(p.pctl.usg, RawStat::Usage, p.usg);
    let efficiency_z = z_pref(p.pctl.ts, RawStat::TrueShooting, p.ts);
    let ast_z = z_pref(p.pctl.ast, RawStat::AstPct, p.ast_pct);
    let ast_tov_z = z_pref(p.pctl.ast_tov, RawStat::AstTov, p.ast_tov);
    let three_freq_z = z_pref(p.pctl.three_freq, RawStat::ThreeFreq, p.three_freq);
    let tp_z = z_pref(p.pctl.tp, RawStat::ThreePct, p.tp_pct);
    let rim_z = z_pref(p.pctl.rim_freq, RawStat::RimFreq, p.rim_freq);
    let ftr_z = z_pref(p.pctl.ftr, RawStat::FtRate, p.ftr);
    let orb_z = z_pref(p.pctl.orb, RawStat::OrbPct, p.orb_pct);
    let drb_z = z_pref(p.pctl.drb, RawStat::DrbPct, p.drb_pct);
    let stl_z = z_pref(p.pctl.stl, RawStat::StlPct, p.stl_pct);
    let blk_z = z_pref(p.pctl.blk, RawStat::BlkPct, p.blk_pct);
    let height_z = z_pref(p.pctl.height, RawStat::Height, p.height_in);
    let dbpm_z = z_pref(None, RawStat::Dbpm, p.dbpm);

    // Base role composites.
    let scorer = usage_z * 0.6 + efficiency_z * 0.4;
    let playmaker = ast_z * 0.7 + ast_tov_z * 0.3;
    let spacer = three_freq_z * 0.5 + tp_z * 0.5;
    let driver = rim_z * 0.6 + ftr_z * 0.4;
    let crasher = orb_z * 0.8;
    let onball = stl_z * 0.7;
    let switch_pot = height_z * 0.3 + stl_z * 0.3 + blk_z * 0.4;
    let rim_prot = blk_z * 0.8 + dbpm_z * 0.2;
    let rebounder = drb_z;

    // Hybrid gates. Bonuses are bounded so a qualifier lands in roughly
    // the Impact..Elite band rather than saturating the clip.
    let connector = if gt(p.ast_pct, 15.0) && lt(p.usg, 20.0) && gt(p.ast_tov, 2.0) {
        let mut bonus = ((p.ast_tov.unwrap_or(0.0) - 2.0) * 0.5).min(1.0);
        if scores.feel > 65.0 {
            bonus += 0.3;
        }
        1.0 + bonus.min(1.5)
    } else {
        ast_z - 0.5
    };

    let three_and_d = if gt(p.tp_pct, 33.0) && gt(p.stl_pct, 1.8) && gt(p.three_freq, 25.0) {
        let bonus = ((p.tp_pct.unwrap_or(0.0) - 33.0) * 0.05
            + (p.stl_pct.unwrap_or(0.0) - 1.8) * 0.3)
            .min(1.2);
        1.0 + bonus
    } else {
        spacer - 0.5
    };

    let point_forward = if gt(p.height_in, 79.0) && gt(p.ast_pct, 18.0) && gt(p.ast_tov, 1.5) {
        1.0 + ((p.ast_pct.unwrap_or(0.0) - 18.0) * 0.08).min(1.0)
    } else {
        playmaker - 0.7
    };

    let stretch_big = if gt(p.height_in, 80.0) && gt(p.three_freq, 25.0) && gt(p.tp_pct, 32.0) {
        let bonus = ((p.tp_pct.unwrap_or(0.0) - 32.0) * 0.06
            + (p.three_freq.unwrap_or(0.0) - 25.0) * 0.02)
            .min(1.0);
        1.0 + bonus
    } else {
        spacer - 0.8
    };

    let rim_runner = if gt(p.height_in, 80.0) && gt(p.rim_freq, 45.0) && gt(p.dunk_rate, 8.0) {
        let bonus = ((p.dunk_rate.unwrap_or(0.0) - 8.0) * 0.06
            + (p.rim_freq.unwrap_or(0.0) - 45.0) * 0.02)
            .min(1.0);
        1.0 + bonus
    } else {
        crasher - 0.6
    };

    // Canonical declaration order: offense, defense, hybrid; alphabetical
    // within each category. Ranking tie-breaks depend on this order.
    let entry = |name, category, z: f64| {
        let z = clip(z);
        RoleScore { name, category, z, label: band(z) }
    };
    RoleMatrix {
        entries: vec![
            entry("Crasher", RoleCategory::Offense, crasher),
            entry("Driver", RoleCategory::Offense, driver),
            entry("Playmaker", RoleCategory::Offense, playmaker),
            entry("Scorer", RoleCategory::Offense, scorer),
            entry("Spacer", RoleCategory::Offense, spacer),
            entry("On-Ball", RoleCategory::Defense, onball),
            entry("Rebounder", RoleCategory::Defense, rebounder),
            entry("Rim Protection", RoleCategory::Defense, rim_prot),
            entry("Switch Potential", RoleCategory::Defense, switch_pot),
            entry("Connector", RoleCategory::Hybrid, connector),
            entry("Point Forward", RoleCategory::Hybrid, point_forward),
            entry("Rim Runner", RoleCategory::Hybrid, rim_runner),
            entry("Stretch Big", RoleCategory::Hybrid, stretch_big),
            entry("Three-And-D", RoleCategory::Hybrid, three_and_d),
        ],
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
