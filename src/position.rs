//! Position bucketing.
//!
//! Two deliberately separate schemes coexist. `size_bucket` is the
//! height-driven Guard/Wing/Big split used to gate badges and swing-skill
//! candidates. `role_class` is the Playmaker/Wing/Big split used for
//! composite-score thresholds, defensive weighting and tier comparisons;
//! it leans on creation and rim-protection signals instead of pure size.
//! They answer different questions and are never unified.

use std::fmt;

use serde::Serialize;

use crate::scale::NormalizedProfile;

/// Height-based bucket for badge and swing-skill gating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SizeBucket {
    Guard,
    Wing,
    Big,
}

impl SizeBucket {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Guard => "Guard",
            Self::Wing => "Wing",
            Self::Big => "Big",
        }
    }
}

impl fmt::Display for SizeBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Statistical role class for composite thresholds and tier comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RoleClass {
    Playmaker,
    Wing,
    Big,
}

impl RoleClass {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Playmaker => "Playmaker",
            Self::Wing => "Wing",
            Self::Big => "Big",
        }
    }
}

impl fmt::Display for RoleClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Guard if under 6'4", or under 6'6" with real assist volume. Big if over
/// 6'9", or over 6'8" with a big's rebound rate. Everyone else is a Wing.
/// Guard takes precedence; a missing height lands on Wing.
pub fn size_bucket(p: &NormalizedProfile) -> SizeBucket {
    let h = p.height_in;
    let ast = p.ast_pct;
    let reb = p.drb_pct;

    if h.is_some_and(|h| h < 76.0)
        || (h.is_some_and(|h| h < 78.0) && ast.is_some_and(|a| a > 20.0))
    {
        return SizeBucket::Guard;
    }
    if h.is_some_and(|h| h > 81.0)
        || (h.is_some_and(|h| h > 80.0) && reb.is_some_and(|r| r > 15.0))
    {
        return SizeBucket::Big;
    }
    SizeBucket::Wing
}

/// Big first (size or rim protection), then Playmaker (creation volume),
/// else Wing. A stretch-four who blocks shots classifies Big here even if
/// `size_bucket` calls the same player a Wing; intentional.
pub fn role_class(p: &NormalizedProfile) -> RoleClass {
    let h = p.height_in;
    let ast = p.ast_pct;
    let blk = p.blk_pct;

    if h.is_some_and(|h| h > 81.0) || blk.is_some_and(|b| b > 4.5) {
        return RoleClass::Big;
    }
    if ast.is_some_and(|a| a > 20.0)
        || (h.is_some_and(|h| h < 77.0) && ast.is_some_and(|a| a > 15.0))
    {
        return RoleClass::Playmaker;
    }
    RoleClass::Wing
}

#[cfg(test)]
#[path = "position_test.rs"]
mod tests;
