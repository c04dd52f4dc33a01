//! Context-free four-factor rating.
//!
//! Dean Oliver's four factors (effective shooting, turnover avoidance,
//! offensive rebounding, free-throw rate), but z-scored against the
//! expected value for the player's usage role rather than the whole
//! population. A low-usage player's 58% eFG is not the same skill as a
//! primary option's; each factor is judged against what players carrying
//! that load normally post. A reliability discount shrinks small-sample
//! composites toward zero.

use serde::Serialize;

use crate::scale::NormalizedProfile;

/// Oliver's empirical weights.
const W_EFG: f64 = 0.40;
const W_TOV: f64 = 0.25;
const W_ORB: f64 = 0.20;
const W_FTR: f64 = 0.15;

/// Minutes scale for the reliability discount `1 - e^(-minutes/600)`.
const RELIABILITY_MINUTES: f64 = 600.0;

/// Usage-load bucket; thresholds on usage rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum UsageRole {
    /// >= 28% usage: primary option.
    Primary,
    /// >= 22%: secondary creator.
    Secondary,
    /// >= 15%: play finisher.
    Finisher,
    /// < 15% (or unknown): low usage.
    LowUsage,
}

impl UsageRole {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "Primary",
            Self::Secondary => "Secondary",
            Self::Finisher => "Finisher",
            Self::LowUsage => "Low Usage",
        }
    }
}

pub fn usage_role(usg: Option<f64>) -> UsageRole {
    match usg {
        Some(u) if u >= 28.0 => UsageRole::Primary,
        Some(u) if u >= 22.0 => UsageRole::Secondary,
        Some(u) if u >= 15.0 => UsageRole::Finisher,
        _ => UsageRole::LowUsage,
    }
}

/// Expected (mean, sd) per factor for one usage role. Efficiency
/// expectations rise as usage falls; that asymmetry is the whole point.
struct RoleNorms {
    efg: (f64, f64),
    tov: (f64, f64),
    orb: (f64, f64),
    ftr: (f64, f64),
}

fn role_norms(role: UsageRole) -> RoleNorms {
    match role {
        UsageRole::Primary => RoleNorms {
            efg: (50.5, 4.5),
            tov: (17.5, 3.5),
            orb: (4.5, 2.8),
            ftr: (38.0, 11.0),
        },
        UsageRole::Secondary => RoleNorms {
            efg: (52.0, 4.8),
            tov: (16.5, 4.0),
            orb: (5.5, 3.2),
            ftr: (34.0, 11.5),
        },
        UsageRole::Finisher => RoleNorms {
            efg: (54.0, 5.5),
            tov: (15.5, 4.5),
            orb: (6.5, 4.0),
            ftr: (31.0, 12.0),
        },
        UsageRole::LowUsage => RoleNorms {
            efg: (55.5, 6.5),
            tov: (14.5, 5.0),
            orb: (7.0, 4.5),
            ftr: (29.0, 13.0),
        },
    }
}

/// Per-factor z-scores against the role expectation, plus the discounted
/// composite. `reliability` is 0 with no minutes and approaches 1 as the
/// sample grows.
#[derive(Debug, Clone, Serialize)]
pub struct FourFactorRating {
    pub role: UsageRole,
    pub efg_z: f64,
    pub tov_z: f64,
    pub orb_z: f64,
    pub ftr_z: f64,
    pub reliability: f64,
    pub composite: f64,
}

fn z(v: Option<f64>, (mean, sd): (f64, f64)) -> f64 {
    match v {
        Some(v) => (v - mean) / sd,
        None => 0.0,
    }
}

pub fn rate(p: &NormalizedProfile) -> FourFactorRating {
    let role = usage_role(p.usg);
    let norms = role_norms(role);

    let efg_z = z(p.efg, norms.efg);
    // Turnovers are inverted: fewer than expected is positive.
    let tov_z = -z(p.to_pct, norms.tov);
    let orb_z = z(p.orb_pct, norms.orb);
    let ftr_z = z(p.ftr, norms.ftr);

    let reliability = match p.minutes {
        Some(m) if m > 0.0 => 1.0 - (-m / RELIABILITY_MINUTES).exp(),
        _ => 0.0,
    };

    let weighted = W_EFG * efg_z + W_TOV * tov_z + W_ORB * orb_z + W_FTR * ftr_z;

    FourFactorRating {
        role,
        efg_z,
        tov_z,
        orb_z,
        ftr_z,
        reliability,
        composite: weighted * reliability,
    }
}

/// Oliver weights must sum to 1.0; checked at startup.
pub(crate) fn validate_weights() -> Result<(), String> {
    let sum = W_EFG + W_TOV + W_ORB + W_FTR;
    if (sum - 1.0).abs() > 1e-9 {
        return Err(format!("four-factor weights sum to {sum}, expected 1.0"));
    }
    Ok(())
}

#[cfg(test)]
#[path = "four_factors_test.rs"]
mod tests;
