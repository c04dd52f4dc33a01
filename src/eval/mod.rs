//! Single-player evaluation: the full pipeline from raw record to
//! structured result.
//!
//! Data flows strictly downward: record → normalized profile → position
//! buckets → composite scores → role matrix, archetype, swing skill,
//! risk, badges. Every stage is a pure function of the stages above it;
//! evaluating the same record twice always produces the same result.
//! Evaluations of different players are independent, so callers batching
//! a draft class may parallelize with a plain parallel map.

pub mod report;

use std::error::Error;
use std::path::Path;

use serde::Serialize;

use crate::archetype::{self, ArchetypeResult};
use crate::badges::{self, BadgeResult};
use crate::position::{RoleClass, SizeBucket, role_class, size_bucket};
use crate::record::{self, Confidence, StatRecord};
use crate::report_helpers;
use crate::risk::{self, RiskResult};
use crate::roles::{self, RoleMatrix};
use crate::scale::NormalizedProfile;
use crate::scores::{self, ScoreSet};
use crate::swing::{self, SwingSkillResult, Tier};

/// The complete evaluation of one prospect.
#[derive(Debug, Clone, Serialize)]
pub struct Evaluation {
    pub name: String,
    /// Declared position, verbatim from the record.
    pub pos: String,
    pub role_class: RoleClass,
    pub size_bucket: SizeBucket,
    pub confidence: Confidence,
    pub tier: Tier,
    pub profile: NormalizedProfile,
    pub scores: ScoreSet,
    pub roles: RoleMatrix,
    pub archetype: ArchetypeResult,
    pub swing_skill: Option<SwingSkillResult>,
    pub risk: RiskResult,
    pub badges: BadgeResult,
}

/// Evaluate one record. Fails only on identity validation; missing
/// statistics degrade to neutral values, never to an error.
pub fn evaluate(record: &StatRecord) -> Result<Evaluation, Box<dyn Error>> {
    record.validate()?;

    let profile = NormalizedProfile::from_record(record);
    let class = role_class(&profile);
    let bucket = size_bucket(&profile);
    let scores = scores::compute(&profile, class);
    let roles = roles::compute(&profile, &scores);
    let archetype = archetype::classify(&profile, class, &scores);
    let tier = swing::current_tier(&profile);
    let swing_skill = swing::analyze(&profile, bucket, &scores);
    let risk = risk::assess(&profile, &scores);
    let badges = badges::evaluate(&profile, bucket, &scores);

    Ok(Evaluation {
        name: record.name.clone(),
        pos: record.pos.clone(),
        role_class: class,
        size_bucket: bucket,
        confidence: record.confidence(),
        tier,
        profile,
        scores,
        roles,
        archetype,
        swing_skill,
        risk,
        badges,
    })
}

pub fn run(path: &Path, json: bool, vs: &str) -> Result<(), Box<dyn Error>> {
    let record = record::load(path)?;
    let evaluation = evaluate(&record)?;

    if json {
        report_helpers::print_json_stdout(&evaluation)?;
    } else {
        report::print_report(&evaluation, vs);
    }
    Ok(())
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
