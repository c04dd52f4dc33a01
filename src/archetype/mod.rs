//! Archetype classification.
//!
//! An ordered list of guard clauses evaluated top-down; the first matching
//! rule wins and the order is a correctness property, not an
//! implementation detail. Nothing matching falls through to a Raw
//! Prospect archetype keyed by role class, so classification is total:
//! every valid record gets exactly one label.

mod catalog;

use serde::Serialize;

use crate::position::RoleClass;
use crate::scale::NormalizedProfile;
use crate::scores::ScoreSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ArchetypeGroup {
    Initiators,
    #[serde(rename = "Wings & Specialists")]
    WingsAndSpecialists,
    Frontcourt,
}

impl ArchetypeGroup {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Initiators => "Initiators",
            Self::WingsAndSpecialists => "Wings & Specialists",
            Self::Frontcourt => "Frontcourt",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ArchetypeKey {
    OffensiveEngine,
    FloorGeneral,
    ComboGuard,
    ThreeLevelScorer,
    TwoWayWing,
    MovementShooter,
    ThreeAndDWing,
    SlashingWing,
    PointForward,
    StretchBig,
    RimRunningBig,
    DefensiveAnchor,
    RawProspect(RoleClass),
}

/// Everything the classifier may consult: canonical stats, the role
/// class, and the already-computed composite scores.
pub struct Ctx<'a> {
    pub p: &'a NormalizedProfile,
    pub class: RoleClass,
    pub scores: &'a ScoreSet,
}

fn gt(v: Option<f64>, t: f64) -> bool {
    v.is_some_and(|v| v > t)
}

fn lt(v: Option<f64>, t: f64) -> bool {
    v.is_some_and(|v| v < t)
}

struct Rule {
    key: ArchetypeKey,
    matches: fn(&Ctx) -> bool,
}

/// The decision list. Most specific profiles first; broad catch-alls last.
/// Reordering entries changes classifications.
static RULES: &[Rule] = &[
    // Heliocentric creators before any scorer rule: high usage WITH high
    // assist volume at playable efficiency reads as an engine, not a
    // gunner.
    Rule {
        key: ArchetypeKey::OffensiveEngine,
        matches: |c| gt(c.p.usg, 28.0) && gt(c.p.ast_pct, 20.0) && gt(c.p.ts, 53.0),
    },
    Rule {
        key: ArchetypeKey::FloorGeneral,
        matches: |c| {
            c.class == RoleClass::Playmaker && gt(c.p.ast_pct, 24.0) && gt(c.p.ast_tov, 1.8)
        },
    },
    // High-usage low-assist scorers, any size short of a Big.
    Rule {
        key: ArchetypeKey::ThreeLevelScorer,
        matches: |c| {
            c.class != RoleClass::Big
                && gt(c.p.usg, 25.0)
                && gt(c.p.ts, 55.0)
                && lt(c.p.ast_pct, 15.0)
        },
    },
    Rule {
        key: ArchetypeKey::ComboGuard,
        matches: |c| c.class == RoleClass::Playmaker && gt(c.p.usg, 24.0) && gt(c.p.ast_pct, 12.0),
    },
    Rule {
        key: ArchetypeKey::MovementShooter,
        matches: |c| {
            c.scores.shooting > 72.0 && gt(c.p.three_freq, 30.0) && c.scores.self_creation < 45.0
        },
    },
    Rule {
        key: ArchetypeKey::TwoWayWing,
        matches: |c| c.class == RoleClass::Wing && c.scores.defense > 65.0 && c.scores.shooting > 60.0,
    },
    Rule {
        key: ArchetypeKey::ThreeAndDWing,
        matches: |c| c.class == RoleClass::Wing && gt(c.p.tp_pct, 33.0) && gt(c.p.stl_pct, 1.8),
    },
    Rule {
        key: ArchetypeKey::SlashingWing,
        matches: |c| {
            c.class == RoleClass::Wing
                && gt(c.p.rim_freq, 35.0)
                && gt(c.p.ftr, 35.0)
                && lt(c.p.tp_pct, 32.0)
        },
    },
    Rule {
        key: ArchetypeKey::PointForward,
        matches: |c| {
            c.class != RoleClass::Playmaker && gt(c.p.ast_pct, 18.0) && gt(c.p.height_in, 79.0)
        },
    },
    Rule {
        key: ArchetypeKey::StretchBig,
        matches: |c| c.class == RoleClass::Big && gt(c.p.three_freq, 25.0) && gt(c.p.tp_pct, 32.0),
    },
    Rule {
        key: ArchetypeKey::RimRunningBig,
        matches: |c| c.class == RoleClass::Big && gt(c.p.dunk_rate, 8.0) && gt(c.p.orb_pct, 9.0),
    },
    Rule {
        key: ArchetypeKey::DefensiveAnchor,
        matches: |c| c.class == RoleClass::Big && gt(c.p.blk_pct, 5.5) && c.scores.defense > 60.0,
    },
];

/// One classification outcome with its catalog metadata.
#[derive(Debug, Clone, Serialize)]
pub struct ArchetypeResult {
    pub key: ArchetypeKey,
    pub name: &'static str,
    pub group: &'static str,
    pub comparables: Vec<&'static str>,
    pub strengths: Vec<&'static str>,
    pub risks: Vec<&'static str>,
    pub fit: &'static str,
}

/// First matching rule wins; the fallback is total by construction.
pub fn classify(p: &NormalizedProfile, class: RoleClass, scores: &ScoreSet) -> ArchetypeResult {
    let ctx = Ctx { p, class, scores };
    let key = RULES
        .iter()
        .find(|r| (r.matches)(&ctx))
        .map(|r| r.key)
        .unwrap_or(ArchetypeKey::RawProspect(class));

    // Validated at startup; a miss here is a programmer error.
    let info = catalog::info(key)
        .unwrap_or_else(|| panic!("archetype table inconsistent: no catalog entry for {key:?}"));
    ArchetypeResult {
        key,
        name: info.name,
        group: info.group.as_str(),
        comparables: info.comparables.to_vec(),
        strengths: info.strengths.to_vec(),
        risks: info.risks.to_vec(),
        fit: info.fit,
    }
}

/// Every rule key and all three fallbacks must have catalog metadata, and
/// each metadata entry carries the documented counts (2–4 strengths,
/// 1–3 risks, at least one comparable).
pub(crate) fn validate_tables() -> Result<(), String> {
    let mut keys: Vec<ArchetypeKey> = RULES.iter().map(|r| r.key).collect();
    keys.extend([
        ArchetypeKey::RawProspect(RoleClass::Playmaker),
        ArchetypeKey::RawProspect(RoleClass::Wing),
        ArchetypeKey::RawProspect(RoleClass::Big),
    ]);
    for key in keys {
        let Some(info) = catalog::info(key) else {
            return Err(format!("archetype rule {key:?} has no catalog entry"));
        };
        if info.comparables.is_empty() {
            return Err(format!("{} has no comparables", info.name));
        }
        if !(2..=4).contains(&info.strengths.len()) {
            return Err(format!("{} should list 2-4 strengths", info.name));
        }
        if !(1..=3).contains(&info.risks.len()) {
            return Err(format!("{} should list 1-3 risks", info.name));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
