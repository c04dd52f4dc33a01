//! Bust/sleeper risk engine.
//!
//! Three bust clusters and three sleeper clusters, each a fixed boolean
//! condition over raw stats, evaluated independently. The risk score
//! starts at 5, moves with the triggered clusters and a few single-stat
//! modifiers, and is rounded and clamped to [1, 10].

use serde::Serialize;

use crate::scale::NormalizedProfile;
use crate::scores::ScoreSet;

struct Cluster {
    name: &'static str,
    triggered: fn(&NormalizedProfile) -> bool,
}

fn gt(v: Option<f64>, t: f64) -> bool {
    v.is_some_and(|v| v > t)
}

fn lt(v: Option<f64>, t: f64) -> bool {
    v.is_some_and(|v| v < t)
}

/// Historical flame-out patterns.
static BUST_CLUSTERS: &[Cluster] = &[
    // Big offensive load with no defensive events: the athleticism
    // usually isn't there.
    Cluster {
        name: "Defensive Immobility",
        triggered: |p| gt(p.usg, 25.0) && lt(p.stl_pct, 1.2) && lt(p.blk_pct, 1.0),
    },
    Cluster {
        name: "Empty Volume",
        triggered: |p| gt(p.usg, 28.0) && lt(p.ts, 52.0),
    },
    Cluster {
        name: "Old For Production",
        triggered: |p| gt(p.age, 22.5) && lt(p.bpm, 6.5),
    },
];

/// Patterns the consensus board historically underrates.
static SLEEPER_CLUSTERS: &[Cluster] = &[
    Cluster {
        name: "Teenage Efficiency",
        triggered: |p| lt(p.age, 20.0) && gt(p.ts, 60.0),
    },
    Cluster {
        name: "Stocks Machine In Waiting",
        triggered: |p| gt(p.stl_pct, 2.0) && gt(p.blk_pct, 2.0) && lt(p.usg, 20.0),
    },
    Cluster {
        name: "Touch Without Volume",
        triggered: |p| gt(p.ft_pct, 80.0) && lt(p.usg, 18.0),
    },
];

const BASE_SCORE: f64 = 5.0;
const BUST_STEP: f64 = 2.0;
const SLEEPER_STEP: f64 = 1.5;

pub fn risk_label(score: u8) -> &'static str {
    if score >= 8 {
        "High Bust Risk"
    } else if score >= 6 {
        "Elevated Risk"
    } else if score <= 3 {
        "Sleeper / Safe"
    } else {
        "Moderate Risk"
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RiskResult {
    pub bust_clusters: Vec<&'static str>,
    pub sleeper_clusters: Vec<&'static str>,
    /// 1 (safest) to 10 (likeliest bust).
    pub score: u8,
    pub label: &'static str,
}

pub fn assess(p: &NormalizedProfile, scores: &ScoreSet) -> RiskResult {
    let bust: Vec<&'static str> = BUST_CLUSTERS
        .iter()
        .filter(|c| (c.triggered)(p))
        .map(|c| c.name)
        .collect();
    let sleeper: Vec<&'static str> = SLEEPER_CLUSTERS
        .iter()
        .filter(|c| (c.triggered)(p))
        .map(|c| c.name)
        .collect();

    let mut value = BASE_SCORE;
    value += bust.len() as f64 * BUST_STEP;
    value -= sleeper.len() as f64 * SLEEPER_STEP;
    if scores.feel > 75.0 {
        value -= 1.0;
    }
    if gt(p.bpm, 8.0) {
        value -= 1.0;
    }
    if lt(p.ft_pct, 65.0) {
        value += 1.0;
    }

    let score = value.round().clamp(1.0, 10.0) as u8;
    RiskResult {
        bust_clusters: bust,
        sleeper_clusters: sleeper,
        score,
        label: risk_label(score),
    }
}

#[cfg(test)]
#[path = "risk_test.rs"]
mod tests;
